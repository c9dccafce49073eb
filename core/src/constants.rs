// All values are per-tick at 60 Hz unless noted.

// Arena
pub const ARENA_WIDTH: f64 = 800.0;
pub const ARENA_HEIGHT: f64 = 600.0;

// Fighter hitbox
pub const FIGHTER_WIDTH: f64 = 50.0;
pub const FIGHTER_HEIGHT: f64 = 100.0;

// Physics
pub const GRAVITY: f64 = 0.5;
pub const MOVE_SPEED: f64 = 5.0;
pub const JUMP_VELOCITY: f64 = -10.0;

// Health / combat
pub const MAX_HEALTH: i32 = 100;
pub const ATTACK_DAMAGE: i32 = 10;
pub const SPECIAL_DAMAGE: i32 = 20;
pub const ATTACK_COOLDOWN: i32 = 20;
pub const SPECIAL_COOLDOWN: i32 = 100;

// Special projectile
pub const SPECIAL_SPEED: f64 = 7.0;
pub const SPECIAL_WIDTH: f64 = 20.0;
pub const SPECIAL_HEIGHT: f64 = 10.0;
// Specials leave from a fixed point below the fighter's top edge.
pub const SPECIAL_SPAWN_DROP: f64 = 20.0;

// Spawn distance from either arena edge
pub const SPAWN_MARGIN: f64 = 100.0;

// Scripted opponent
pub const AI_ACTION_COOLDOWN: i32 = 30;
pub const AI_ADVANCE_CHANCE: f64 = 0.7;
pub const AI_JUMP_CHANCE: f64 = 0.05;
pub const AI_ATTACK_CHANCE: f64 = 0.1;
pub const AI_SPECIAL_CHANCE: f64 = 0.05;

// Tick rate
pub const TICK_RATE: u32 = 60;
