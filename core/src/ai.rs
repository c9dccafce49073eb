use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::*;
use crate::types::*;

/// The four independent uniform draws consumed by one decision, in the order
/// they are evaluated. Keeping the draws explicit makes `decide` a pure
/// function: a fixed draw sequence replays exactly.
#[derive(Clone, Copy, Debug)]
pub struct DecisionDraws {
    pub advance: f64,
    pub jump: f64,
    pub attack: f64,
    pub special: f64,
}

impl DecisionDraws {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        DecisionDraws {
            advance: rng.gen(),
            jump: rng.gen(),
            attack: rng.gen(),
            special: rng.gen(),
        }
    }
}

/// Pure decision function for the scripted opponent. Each check is an
/// independent draw, not a branch of one roll; the emitted intent can combine
/// movement, jump, attack and special on the same tick.
pub fn decide(draws: &DecisionDraws, me: &Fighter, opponent: &Fighter) -> Intent {
    let mut buttons = 0u8;

    // Close the horizontal gap most of the time.
    if draws.advance < AI_ADVANCE_CHANCE {
        buttons |= if opponent.x < me.x {
            button::LEFT
        } else {
            button::RIGHT
        };
    }
    if draws.jump < AI_JUMP_CHANCE && !me.jumping {
        buttons |= button::JUMP;
    }
    if draws.attack < AI_ATTACK_CHANCE {
        buttons |= button::ATTACK;
    }
    if draws.special < AI_SPECIAL_CHANCE && me.special_cooldown == 0 {
        buttons |= button::SPECIAL;
    }

    Intent { buttons }
}

/// ScriptedAI decision policy: decides once every `AI_ACTION_COOLDOWN` ticks
/// and idles in between.
#[derive(Clone, Debug)]
pub struct ScriptedAi {
    action_cooldown: i32,
    rng: ChaCha8Rng,
}

impl ScriptedAi {
    pub fn new(seed: Seed) -> Self {
        ScriptedAi {
            action_cooldown: AI_ACTION_COOLDOWN,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn next_intent(&mut self, me: &Fighter, opponent: &Fighter) -> Intent {
        if self.action_cooldown > 0 {
            self.action_cooldown -= 1;
            return NULL_INTENT;
        }
        self.action_cooldown = AI_ACTION_COOLDOWN;
        let draws = DecisionDraws::sample(&mut self.rng);
        decide(&draws, me, opponent)
    }
}
