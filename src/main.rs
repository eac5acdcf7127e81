//! Crazy Tag entry point
//!
//! Headless demo driver: seeds a session, lets a simple autopilot play it
//! out, and logs cues and the final result. A graphical host would run
//! the same loop against a renderer and a real audio sink.

use glam::Vec2;
use rand::Rng;

use crazy_tag::audio::{AudioSink, LogAudio};
use crazy_tag::consts::*;
use crazy_tag::sim::{self, GamePhase, GameState, Hand, TickInput};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    log::info!("starting session, seed {seed}");

    let mut state = GameState::new(seed);
    let mut audio = LogAudio;
    state.start();

    // Generous cap: the countdown plus duel display delays can never
    // stretch a session anywhere near this
    let max_ticks = GAME_DURATION_SECS * TICK_HZ * 4;
    for _ in 0..max_ticks {
        match state.phase {
            GamePhase::Playing => {
                let input = auto_input(&state);
                sim::tick(&mut state, &input);
            }
            GamePhase::DuelPending => {
                if state.duel_resume_ticks.is_none() {
                    let hand = Hand::ALL[state.rng.random_range(0..Hand::ALL.len())];
                    if let Some(report) = sim::resolve_duel(&mut state, hand) {
                        log::info!(
                            "duel: {} vs {} - {}",
                            report.player_hand.as_str(),
                            report.rival_hand.as_str(),
                            report.message
                        );
                    }
                } else {
                    sim::tick(&mut state, &TickInput::default());
                }
            }
            GamePhase::GameOver | GamePhase::Won => break,
            GamePhase::Start => state.start(),
        }
        audio.dispatch(state.drain_events());
    }

    log::info!(
        "session over: {:?}, score {}, {} hunters left, {}s on the clock",
        state.phase,
        state.score,
        state.hunters.len(),
        state.time_left
    );
}

/// Autopilot: fetch the sword when bare-pawed, otherwise hunt the
/// nearest hunter
fn auto_input(state: &GameState) -> TickInput {
    let target = if state.player.has_sword {
        nearest(state.player.pos, state.hunters.iter().map(|h| h.pos))
    } else {
        state
            .spots
            .iter()
            .find(|s| s.has_sword)
            .map(|s| s.pos)
            // Sword already spent; lie low instead
            .or_else(|| nearest(state.player.pos, state.spots.iter().map(|s| s.pos)))
    };

    let Some(target) = target else {
        return TickInput::default();
    };
    let delta = target - state.player.pos;
    TickInput {
        up: delta.y < -2.0,
        down: delta.y > 2.0,
        left: delta.x < -2.0,
        right: delta.x > 2.0,
    }
}

fn nearest(from: Vec2, candidates: impl Iterator<Item = Vec2>) -> Option<Vec2> {
    candidates.min_by(|a, b| {
        from.distance_squared(*a)
            .partial_cmp(&from.distance_squared(*b))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}
