use crate::constants::*;
use crate::types::*;

/// Hitbox for a special projectile.
pub fn hitbox(proj: &Projectile) -> Rect {
    Rect {
        x: proj.x,
        y: proj.y,
        w: SPECIAL_WIDTH,
        h: SPECIAL_HEIGHT,
    }
}

/// A projectile survives only strictly inside the arena's horizontal span.
pub fn in_bounds(proj: &Projectile, arena: &Arena) -> bool {
    proj.x > 0.0 && proj.x < arena.width
}

/// Move every projectile by its fixed speed and drop the ones that left the
/// arena.
pub fn advance_projectiles(projectiles: &mut Vec<Projectile>, arena: &Arena) {
    for proj in projectiles.iter_mut() {
        proj.x += SPECIAL_SPEED * f64::from(proj.direction);
    }
    projectiles.retain(|proj| in_bounds(proj, arena));
}

/// Resolve one fighter's specials against the opposing fighter. Returns the
/// number of hits landed.
///
/// Hit indices are collected during the scan and removed afterwards, so a
/// projectile lands at most once and the collection is never mutated while
/// iterated.
pub fn resolve_special_hits(shooter: &mut Fighter, target: &mut Fighter) -> usize {
    let target_box = target.hitbox();

    let mut hit_indices: Vec<usize> = Vec::new();
    for (i, proj) in shooter.projectiles.iter().enumerate() {
        if hitbox(proj).overlaps(&target_box) {
            hit_indices.push(i);
        }
    }

    for _ in &hit_indices {
        target.apply_damage(SPECIAL_DAMAGE);
    }

    let mut index = 0;
    shooter.projectiles.retain(|_| {
        let hit = hit_indices.contains(&index);
        index += 1;
        !hit
    });

    hit_indices.len()
}
