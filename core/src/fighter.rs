use crate::constants::*;
use crate::projectiles::advance_projectiles;
use crate::types::*;

impl Fighter {
    /// Current bounding box for collision queries.
    pub fn hitbox(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            w: FIGHTER_WIDTH,
            h: FIGHTER_HEIGHT,
        }
    }

    pub fn center_x(&self) -> f64 {
        self.x + FIGHTER_WIDTH / 2.0
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Health floors at zero; there is no overkill accounting.
    pub fn apply_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Per-tick update: physics and timers first, then the intent.
    ///
    /// Sub-step order:
    ///  1. Gravity
    ///  2. Ground clamp (lands the fighter, ends the jump)
    ///  3. Cooldown decay (floor 0)
    ///  4. Advance + prune owned projectiles
    ///  5. Apply intent (movement, jump, attack, special)
    pub fn update(&mut self, intent: Intent, arena: &Arena) {
        // 1. Gravity
        self.vy += GRAVITY;
        self.y += self.vy;

        // 2. Ground clamp
        let ground = arena.height - FIGHTER_HEIGHT;
        if self.y > ground {
            self.y = ground;
            self.vy = 0.0;
            self.jumping = false;
        }

        // 3. Cooldown decay
        self.attack_cooldown = (self.attack_cooldown - 1).max(0);
        self.special_cooldown = (self.special_cooldown - 1).max(0);

        // 4. Owned projectiles
        advance_projectiles(&mut self.projectiles, arena);

        // 5. Intent. Movement flags are independent, and there is no
        // horizontal bound: fighters may walk past either arena edge.
        if intent.buttons & button::LEFT != 0 {
            self.x -= MOVE_SPEED;
        }
        if intent.buttons & button::RIGHT != 0 {
            self.x += MOVE_SPEED;
        }
        if intent.buttons & button::JUMP != 0 && !self.jumping {
            self.vy = JUMP_VELOCITY;
            self.jumping = true;
        }
        // Attacking is re-derived every tick: a held attack input re-triggers
        // on the tick the cooldown drains back to zero.
        if intent.buttons & button::ATTACK != 0 && self.attack_cooldown == 0 {
            self.attacking = true;
            self.attack_cooldown = ATTACK_COOLDOWN;
        } else {
            self.attacking = false;
        }
        if intent.buttons & button::SPECIAL != 0 && self.special_cooldown == 0 {
            self.projectiles.push(Projectile {
                x: self.center_x(),
                y: self.y + SPECIAL_SPAWN_DROP,
                direction: self.facing,
            });
            self.special_cooldown = SPECIAL_COOLDOWN;
        }
    }
}
