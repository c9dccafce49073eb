use tracing::{debug, info};

use crate::constants::*;
use crate::init::create_initial_state;
use crate::projectiles::resolve_special_hits;
use crate::types::*;

/// Core match transition function. Advances the match by one tick.
///
/// Sub-step order:
///  0. Over holds all state; an explicit restart re-initializes the match
///  1. Update both fighters (physics, timers, owned projectiles, intent)
///  2. Melee resolution (both fighters can land a hit on the same tick)
///  3. Special resolution (each fighter's projectiles vs. the opponent)
///  4. Match-over check
pub fn step(
    prev: &MatchState,
    intents: &[Intent; 2],
    restart: bool,
    config: &MatchConfig,
) -> MatchState {
    // 0. Over is sticky until an explicit restart; restart is ignored while
    // the match is active.
    if prev.phase == MatchPhase::Over {
        if restart {
            return create_initial_state(config);
        }
        return prev.clone();
    }

    let mut state = prev.clone();
    state.tick += 1;

    let winner = {
        let [first, second] = &mut state.fighters;

        // 1. Fighter updates
        first.update(intents[0], &config.arena);
        second.update(intents[1], &config.arena);

        // 2. Melee
        if first.hitbox().overlaps(&second.hitbox()) {
            if first.attacking {
                second.apply_damage(ATTACK_DAMAGE);
                debug!(victim = second.id, health = second.health, "melee hit");
            }
            if second.attacking {
                first.apply_damage(ATTACK_DAMAGE);
                debug!(victim = first.id, health = first.health, "melee hit");
            }
        }

        // 3. Specials
        let hits = resolve_special_hits(first, second);
        if hits > 0 {
            debug!(victim = second.id, health = second.health, hits, "special hit");
        }
        let hits = resolve_special_hits(second, first);
        if hits > 0 {
            debug!(victim = first.id, health = first.health, hits, "special hit");
        }

        // 4. Match over. If both fighters fall on the same tick, the second
        // one takes the match.
        if !first.is_alive() || !second.is_alive() {
            Some(if first.is_alive() { first.id } else { second.id })
        } else {
            None
        }
    };

    if let Some(winner) = winner {
        state.phase = MatchPhase::Over;
        state.winner = winner;
        info!(winner, tick = state.tick, "match over");
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ScriptedAi;
    use crate::init::default_config;

    const ATTACK: Intent = Intent { buttons: button::ATTACK };

    /// Initial state with the second fighter dragged into melee range of the
    /// first.
    fn overlapping_state(config: &MatchConfig) -> MatchState {
        let mut state = create_initial_state(config);
        state.fighters[1].x = state.fighters[0].x + 30.0;
        state
    }

    #[test]
    fn step_advances_tick() {
        let config = default_config(42);
        let state = create_initial_state(&config);
        let next = step(&state, &[NULL_INTENT; 2], false, &config);
        assert_eq!(next.tick, 1);
        assert_eq!(next.phase, MatchPhase::Active);
    }

    #[test]
    fn melee_hits_overlapping_defender() {
        let config = default_config(42);
        let state = overlapping_state(&config);
        let next = step(&state, &[ATTACK, NULL_INTENT], false, &config);
        assert_eq!(next.fighters[1].health, MAX_HEALTH - ATTACK_DAMAGE);
        assert_eq!(next.fighters[0].health, MAX_HEALTH);
    }

    #[test]
    fn mutual_melee_damages_both() {
        let config = default_config(42);
        let state = overlapping_state(&config);
        let next = step(&state, &[ATTACK, ATTACK], false, &config);
        assert_eq!(next.fighters[0].health, MAX_HEALTH - ATTACK_DAMAGE);
        assert_eq!(next.fighters[1].health, MAX_HEALTH - ATTACK_DAMAGE);
    }

    #[test]
    fn melee_requires_overlap() {
        let config = default_config(42);
        let state = create_initial_state(&config);
        let next = step(&state, &[ATTACK, ATTACK], false, &config);
        assert_eq!(next.fighters[0].health, MAX_HEALTH);
        assert_eq!(next.fighters[1].health, MAX_HEALTH);
    }

    #[test]
    fn cooled_down_attack_does_not_hit() {
        let config = default_config(42);
        let mut state = overlapping_state(&config);
        state.fighters[0].attack_cooldown = 10;
        let next = step(&state, &[ATTACK, NULL_INTENT], false, &config);
        assert_eq!(next.fighters[1].health, MAX_HEALTH);
    }

    #[test]
    fn special_hit_damages_and_consumes() {
        let config = default_config(42);
        let mut state = create_initial_state(&config);
        let target_x = state.fighters[1].x;
        let target_y = state.fighters[1].y;
        state.fighters[0].projectiles.push(Projectile {
            x: target_x - SPECIAL_WIDTH,
            y: target_y + 20.0,
            direction: facing::RIGHT,
        });

        let next = step(&state, &[NULL_INTENT; 2], false, &config);
        assert_eq!(next.fighters[1].health, MAX_HEALTH - SPECIAL_DAMAGE);
        assert!(next.fighters[0].projectiles.is_empty());
    }

    #[test]
    fn over_transition_records_winner() {
        let config = default_config(42);
        let mut state = overlapping_state(&config);
        state.fighters[1].health = ATTACK_DAMAGE;
        let next = step(&state, &[ATTACK, NULL_INTENT], false, &config);
        assert_eq!(next.phase, MatchPhase::Over);
        assert_eq!(next.winner, 0);
        assert_eq!(next.fighters[1].health, 0);
    }

    #[test]
    fn over_state_is_frozen_until_restart() {
        let config = default_config(42);
        let mut state = overlapping_state(&config);
        state.fighters[1].health = ATTACK_DAMAGE;
        let over = step(&state, &[ATTACK, NULL_INTENT], false, &config);
        assert_eq!(over.phase, MatchPhase::Over);

        let held = step(&over, &[ATTACK, ATTACK], false, &config);
        assert_eq!(held, over);
    }

    #[test]
    fn restart_resets_the_match() {
        let config = default_config(42);
        let mut state = overlapping_state(&config);
        state.fighters[0].projectiles.push(Projectile {
            x: 400.0,
            y: 420.0,
            direction: facing::RIGHT,
        });
        state.fighters[1].health = ATTACK_DAMAGE;
        let over = step(&state, &[ATTACK, NULL_INTENT], false, &config);
        assert_eq!(over.phase, MatchPhase::Over);

        let fresh = step(&over, &[NULL_INTENT; 2], true, &config);
        assert_eq!(fresh, create_initial_state(&config));
    }

    #[test]
    fn restart_is_ignored_while_active() {
        let config = default_config(42);
        let state = create_initial_state(&config);
        let next = step(&state, &[NULL_INTENT; 2], true, &config);
        assert_eq!(next.tick, 1);
    }

    #[test]
    fn scripted_match_replays_identically() {
        let config = default_config(7);
        let run = || {
            let mut state = create_initial_state(&config);
            let mut first = ScriptedAi::new(config.seed);
            let mut second = ScriptedAi::new(config.seed.wrapping_add(1));
            for _ in 0..600 {
                let intents = [
                    first.next_intent(&state.fighters[0], &state.fighters[1]),
                    second.next_intent(&state.fighters[1], &state.fighters[0]),
                ];
                state = step(&state, &intents, false, &config);
                if state.phase == MatchPhase::Over {
                    break;
                }
            }
            state
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn health_stays_in_bounds_through_a_brawl() {
        let config = default_config(1234);
        let mut state = create_initial_state(&config);
        let mut first = ScriptedAi::new(config.seed);
        let mut second = ScriptedAi::new(config.seed.wrapping_add(1));
        for _ in 0..2000 {
            let intents = [
                first.next_intent(&state.fighters[0], &state.fighters[1]),
                second.next_intent(&state.fighters[1], &state.fighters[0]),
            ];
            state = step(&state, &intents, false, &config);
            for fighter in &state.fighters {
                assert!((0..=MAX_HEALTH).contains(&fighter.health));
            }
            if state.phase == MatchPhase::Over {
                break;
            }
        }
    }
}
