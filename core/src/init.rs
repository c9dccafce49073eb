use crate::constants::*;
use crate::types::*;

/// Standard 800x600 arena.
pub fn arena() -> Arena {
    Arena {
        width: ARENA_WIDTH,
        height: ARENA_HEIGHT,
    }
}

fn spawn_fighter(id: FighterId, x: f64, facing: i32, arena: &Arena) -> Fighter {
    Fighter {
        id,
        x,
        y: arena.height - FIGHTER_HEIGHT,
        vy: 0.0,
        facing,
        health: MAX_HEALTH,
        jumping: false,
        attacking: false,
        attack_cooldown: 0,
        // The special opens on cooldown: the first shot unlocks only after
        // the full duration has drained.
        special_cooldown: SPECIAL_COOLDOWN,
        projectiles: Vec::new(),
    }
}

/// Create the initial match state: both fighters grounded at the spawn
/// margins, facing inward. Restarting an Over match goes through here too.
pub fn create_initial_state(config: &MatchConfig) -> MatchState {
    let arena = &config.arena;
    MatchState {
        tick: 0,
        fighters: [
            spawn_fighter(0, SPAWN_MARGIN, facing::RIGHT, arena),
            spawn_fighter(
                1,
                arena.width - FIGHTER_WIDTH - SPAWN_MARGIN,
                facing::LEFT,
                arena,
            ),
        ],
        phase: MatchPhase::Active,
        winner: -1,
    }
}

/// Default match config.
pub fn default_config(seed: Seed) -> MatchConfig {
    MatchConfig {
        seed,
        arena: arena(),
        tick_rate: TICK_RATE,
    }
}
