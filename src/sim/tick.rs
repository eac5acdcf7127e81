//! Fixed timestep simulation tick
//!
//! One call advances the world by one 60 Hz step: player motion, hiding
//! containment and pickup, hunter motion, combat resolution, terminal
//! checks, countdown. Hunters are processed in ascending-id order and the
//! pass short-circuits as soon as a phase transition fires, so a single
//! tick can never produce two contradictory transitions.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::PI;

use super::state::{CueEvent, GamePhase, GameState};
use crate::clamp_to_bounds;
use crate::consts::*;

/// Held movement directions for a single tick (resolved from raw key
/// state by the input collaborator)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Combined movement direction, unit length; `None` when no key is
    /// held or opposing keys cancel out. Screen convention: +y is down.
    pub fn direction(self) -> Option<Vec2> {
        let dx = (self.right as i8 - self.left as i8) as f32;
        let dy = (self.down as i8 - self.up as i8) as f32;
        if dx == 0.0 && dy == 0.0 {
            None
        } else {
            Some(Vec2::new(dx, dy).normalize())
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Playing => {}
        GamePhase::DuelPending => {
            // Simulation is suspended; only the post-duel resume delay runs
            tick_duel_resume(state);
            return;
        }
        _ => return,
    }

    move_player(state, input);
    update_hiding(state);
    step_hunters(state);

    // Victory supersedes a same-tick sword break, but never a game over
    // (the pass short-circuits on game over with the killer still alive)
    if matches!(state.phase, GamePhase::Playing | GamePhase::DuelPending) && state.is_victory() {
        state.phase = GamePhase::Won;
    }

    if state.phase == GamePhase::Playing {
        state.advance_timer();
    }
}

fn tick_duel_resume(state: &mut GameState) {
    // No countdown scheduled means we are still waiting on the player's
    // hand, indefinitely
    if let Some(remaining) = state.duel_resume_ticks {
        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            state.duel_resume_ticks = None;
            state.phase = GamePhase::Playing;
        } else {
            state.duel_resume_ticks = Some(remaining);
        }
    }
}

fn move_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    if let Some(dir) = input.direction() {
        player.pos += dir * player.speed;
        player.angle = dir.y.atan2(dir.x);
    }
    player.pos = clamp_to_bounds(player.pos, player.radius, MAP_WIDTH, MAP_HEIGHT);
}

/// Recompute concealment and collect the sword pickup if the player is
/// standing on it bare-pawed
fn update_hiding(state: &mut GameState) {
    let mut in_spot = false;
    let mut picked_up = false;
    for spot in &mut state.spots {
        let dist = state.player.pos.distance(spot.pos);
        if dist < spot.radius {
            in_spot = true;
            if spot.has_sword && !state.player.has_sword {
                state.player.arm_single();
                spot.has_sword = false;
                picked_up = true;
            }
        }
    }
    state.player.is_hidden = in_spot;
    if picked_up {
        state.push_cue(CueEvent::Pickup);
    }
}

/// Per-hunter motion and combat, ascending id order
fn step_hunters(state: &mut GameState) {
    let mut defeated: Vec<u32> = Vec::new();

    for i in 0..state.hunters.len() {
        let to_player = state.player.pos - state.hunters[i].pos;
        let dist = to_player.length();

        // Ambient growl: side effect only, fires hidden or not
        if dist < GROWL_RANGE && state.rng.random_bool(GROWL_CHANCE) {
            state.push_cue(CueEvent::Threat);
        }

        if !state.player.is_hidden {
            // Direct chase. Coincident positions give no usable direction,
            // so the hunter holds still for the tick.
            if dist > CHASE_EPSILON {
                let hunter = &state.hunters[i];
                let speed = if hunter.has_sword {
                    hunter.speed * ARMED_HUNTER_SPEED_FACTOR
                } else {
                    hunter.speed
                };
                state.hunters[i].pos += (to_player / dist) * speed;
            }
        } else {
            // Wandering walk along the stored heading, reflecting off the
            // map edges
            let turn = if state.rng.random_bool(WANDER_TURN_CHANCE) {
                Some(state.rng.random_range(-0.5..0.5))
            } else {
                None
            };
            let hunter = &mut state.hunters[i];
            hunter.pos += Vec2::new(hunter.angle.cos(), hunter.angle.sin()) * hunter.speed;
            if let Some(delta) = turn {
                hunter.angle += delta;
            }
            if hunter.pos.x < 0.0 || hunter.pos.x > MAP_WIDTH {
                hunter.angle = PI - hunter.angle;
            }
            if hunter.pos.y < 0.0 || hunter.pos.y > MAP_HEIGHT {
                hunter.angle = -hunter.angle;
            }
        }

        let in_contact = {
            let hunter = &state.hunters[i];
            hunter.pos.distance(state.player.pos) < state.player.radius + hunter.radius
        };
        if !in_contact {
            continue;
        }

        if state.hunters[i].has_sword {
            if state.player.has_dual_swords {
                // Two blades beat one
                defeated.push(state.hunters[i].id);
                state.player.sword_kills += 2; // dueling is hard on blades
                state.score += 5;
                state.push_cue(CueEvent::Clash);
            } else {
                state.phase = GamePhase::GameOver;
                state.push_cue(CueEvent::Distress {
                    taunt: GAME_OVER_TAUNT,
                });
                break;
            }
        } else if state.player.has_sword {
            defeated.push(state.hunters[i].id);
            state.player.sword_kills += 1;
            state.score += 1;
            state.push_cue(CueEvent::HunterDefeated);

            if state.player.sword_kills >= state.player.durability_capacity() {
                state.player.disarm();
                state.phase = GamePhase::DuelPending;
                break;
            }
        } else {
            state.phase = GamePhase::GameOver;
            state.push_cue(CueEvent::Distress {
                taunt: GAME_OVER_TAUNT,
            });
            break;
        }
    }

    state.hunters.retain(|h| !defeated.contains(&h.id));
}
