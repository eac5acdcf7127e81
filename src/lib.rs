//! Crazy Tag - a 2D chase-survival game
//!
//! One bear, twenty hunters, sixty seconds. Hide in the green zones, grab
//! the sword, and thin the horde before the blade gives out.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, combat, duel minigame, phases)
//! - `audio`: Cue boundary for sound/speech collaborators

pub mod audio;
pub mod sim;

pub use audio::{AudioSink, LogAudio};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (matches the 60 Hz presentation cadence)
    pub const TICK_HZ: u32 = 60;

    /// Map dimensions
    pub const MAP_WIDTH: f32 = 1200.0;
    pub const MAP_HEIGHT: f32 = 800.0;

    /// Hunters spawned at session start
    pub const INITIAL_HUNTER_COUNT: usize = 20;
    /// Reinforcement wave size (reserved; no spawner consumes it yet)
    pub const ADDED_HUNTER_COUNT: usize = 10;

    /// Kills a single sword survives; doubled when dual-wielding
    pub const SWORD_DURABILITY: u32 = 10;

    /// Movement per tick
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const HUNTER_SPEED: f32 = 1.2;
    /// Armed hunters move this much faster than the base pack
    pub const ARMED_HUNTER_SPEED_FACTOR: f32 = 1.5;

    /// Collision radii
    pub const PLAYER_RADIUS: f32 = 15.0;
    pub const HUNTER_RADIUS: f32 = 15.0;
    pub const HIDING_SPOT_RADIUS: f32 = 60.0;

    /// Session length in seconds
    pub const GAME_DURATION_SECS: u32 = 60;

    /// Range and per-tick probability of the ambient hunter growl
    pub const GROWL_RANGE: f32 = 150.0;
    pub const GROWL_CHANCE: f64 = 0.01;

    /// Per-tick probability a wandering hunter perturbs its heading
    pub const WANDER_TURN_CHANCE: f64 = 0.02;

    /// Below this separation a hunter skips its chase step instead of
    /// normalizing a near-zero direction vector
    pub const CHASE_EPSILON: f32 = 1e-4;

    /// Narrated when the hunters catch the bear
    pub const GAME_OVER_TAUNT: &str = "AAAAAAHHHHHH!!! MAMMA MIA!!! HELP ME!!!";
}

/// Clamp a circular body so its full extent stays inside [0, w] x [0, h]
#[inline]
pub fn clamp_to_bounds(pos: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(radius, width - radius),
        pos.y.clamp(radius, height - radius),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_bounds() {
        let clamped = clamp_to_bounds(Vec2::new(-10.0, 900.0), 15.0, 1200.0, 800.0);
        assert_eq!(clamped, Vec2::new(15.0, 785.0));

        // Interior positions pass through untouched
        let inside = Vec2::new(600.0, 400.0);
        assert_eq!(clamp_to_bounds(inside, 15.0, 1200.0, 800.0), inside);
    }
}
