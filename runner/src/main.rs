//! Headless match driver: stands in for the presentation adapter.
//!
//! Wires decision policies to the match loop, paces ticks at the configured
//! rate, and reports round results. The final match state is dumped as JSON
//! so anything downstream can render it.
//!
//! Usage:
//!   rumble-runner [demo|ai]

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rumble_core::*;

const ROUNDS: u32 = 2;
// Cap a stalemate round at three minutes of simulated time.
const MAX_TICKS_PER_ROUND: Tick = 10_800;

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run() {
        error!("match loop aborted: {err:#}");
        std::process::exit(1);
    }
}

enum Challenger {
    /// Synthetic held-key input standing in for a live player.
    HeldKeys,
    Scripted(ScriptedAi),
}

impl Challenger {
    fn next_intent(&mut self, state: &MatchState) -> Intent {
        let me = &state.fighters[0];
        let opponent = &state.fighters[1];
        match self {
            Challenger::Scripted(ai) => ai.next_intent(me, opponent),
            // Hold the keys a player chasing the opponent would: close the
            // gap, keep attack and special held the whole time.
            Challenger::HeldKeys => {
                let keys = KeyStates {
                    left: opponent.x + FIGHTER_WIDTH < me.x,
                    right: me.x + FIGHTER_WIDTH < opponent.x,
                    jump: false,
                    attack: true,
                    special: true,
                };
                intent_from_keys(&keys)
            }
        }
    }
}

fn run() -> Result<()> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "demo".to_string());

    let config = default_config(42);
    let mut challenger = match mode.as_str() {
        "demo" => Challenger::HeldKeys,
        "ai" => Challenger::Scripted(ScriptedAi::new(config.seed)),
        _ => bail!("unknown mode {mode:?}; use 'demo' or 'ai'"),
    };
    let mut opponent = ScriptedAi::new(config.seed.wrapping_add(1));

    let mut state = create_initial_state(&config);
    let tick_duration = Duration::from_secs_f64(1.0 / f64::from(config.tick_rate));
    let mut deadline = Instant::now();
    let mut rounds_played = 0u32;

    info!(mode = %mode, rounds = ROUNDS, "starting");

    loop {
        let restart = state.phase == MatchPhase::Over;
        if restart {
            rounds_played += 1;
            report_round(&state);
            if rounds_played == ROUNDS {
                break;
            }
            info!("restarting");
        }

        let intents = [
            challenger.next_intent(&state),
            opponent.next_intent(&state.fighters[1], &state.fighters[0]),
        ];
        state = step(&state, &intents, restart, &config);

        if state.phase == MatchPhase::Active && state.tick >= MAX_TICKS_PER_ROUND {
            info!(tick = state.tick, "round hit the tick cap, calling it off");
            break;
        }

        deadline += tick_duration;
        if let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            thread::sleep(remaining);
        }
    }

    println!("{}", serde_json::to_string(&state)?);
    Ok(())
}

fn report_round(state: &MatchState) {
    let [first, second] = &state.fighters;
    info!(
        winner = state.winner,
        tick = state.tick,
        first_health = first.health,
        second_health = second.health,
        "round over"
    );
}
