//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the state
//! - Stable iteration order (by hunter ID)
//! - No rendering or platform dependencies

pub mod duel;
pub mod state;
pub mod tick;

pub use duel::{DuelOutcome, DuelReport, Hand, resolve_duel};
pub use state::{CueEvent, GamePhase, GameState, HidingSpot, Hunter, Player};
pub use tick::{TickInput, tick};
