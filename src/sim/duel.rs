//! Rock-paper-scissors duel for sword renewal
//!
//! When the blade breaks mid-fight the bear challenges the horde to a
//! hand game. A win renews the weapon as a dual wield, a loss arms one
//! random hunter, a tie changes nothing. Exactly one outcome applies per
//! invocation; the rival's hand comes from the session RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{CueEvent, GamePhase, GameState};

/// Ticks of result display before play resumes after a win
pub const DUEL_WIN_RESUME_TICKS: u32 = 60;
/// Ticks of result display after a loss (the bad news lingers)
pub const DUEL_LOSE_RESUME_TICKS: u32 = 90;

/// A duel hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// Cyclic dominance: rock > scissors > paper > rock
    pub fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Rock, Hand::Scissors)
                | (Hand::Scissors, Hand::Paper)
                | (Hand::Paper, Hand::Rock)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Hand::Rock => "rock",
            Hand::Paper => "paper",
            Hand::Scissors => "scissors",
        }
    }
}

/// How a duel ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelOutcome {
    Win,
    Lose,
    Tie,
}

/// Everything the overlay needs to show the result
#[derive(Debug, Clone)]
pub struct DuelReport {
    pub player_hand: Hand,
    pub rival_hand: Hand,
    pub outcome: DuelOutcome,
    pub message: String,
}

/// Resolve a pending duel with the player's chosen hand.
///
/// Guarded no-op (`None`) unless the session is actually waiting on a
/// hand: phase must be `DuelPending` with no resume delay already
/// scheduled.
pub fn resolve_duel(state: &mut GameState, hand: Hand) -> Option<DuelReport> {
    if state.phase != GamePhase::DuelPending || state.duel_resume_ticks.is_some() {
        return None;
    }
    let rival = Hand::ALL[state.rng.random_range(0..Hand::ALL.len())];
    Some(apply(state, hand, rival))
}

/// Apply a duel with both hands fixed (the random draw lives in
/// [`resolve_duel`])
fn apply(state: &mut GameState, hand: Hand, rival: Hand) -> DuelReport {
    let (outcome, message) = if hand == rival {
        state.phase = GamePhase::Playing;
        (
            DuelOutcome::Tie,
            format!("Draw! The hunter shows {} too.", rival.as_str()),
        )
    } else if hand.beats(rival) {
        state.player.arm_dual();
        state.push_cue(CueEvent::Clash);
        state.duel_resume_ticks = Some(DUEL_WIN_RESUME_TICKS);
        (
            DuelOutcome::Win,
            "Triumph! The bear goes dual wield!".to_string(),
        )
    } else {
        // One hunter, chosen at random, takes up a blade. Nothing to arm
        // if the map somehow emptied while the duel hung.
        if !state.hunters.is_empty() {
            let lucky = state.rng.random_range(0..state.hunters.len());
            state.hunters[lucky].has_sword = true;
        }
        state.push_cue(CueEvent::Threat);
        state.duel_resume_ticks = Some(DUEL_LOSE_RESUME_TICKS);
        (
            DuelOutcome::Lose,
            "Defeat... a hunter readies a blade.".to_string(),
        )
    };

    DuelReport {
        player_hand: hand,
        rival_hand: rival,
        outcome,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duel_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.start();
        state.player.disarm();
        state.phase = GamePhase::DuelPending;
        state
    }

    #[test]
    fn test_dominance_is_total_and_cyclic() {
        for a in Hand::ALL {
            for b in Hand::ALL {
                if a == b {
                    assert!(!a.beats(b) && !b.beats(a));
                } else {
                    // Exactly one direction wins
                    assert_ne!(a.beats(b), b.beats(a), "{a:?} vs {b:?}");
                }
            }
        }
        assert!(Hand::Rock.beats(Hand::Scissors));
        assert!(Hand::Scissors.beats(Hand::Paper));
        assert!(Hand::Paper.beats(Hand::Rock));
    }

    #[test]
    fn test_win_grants_dual_wield() {
        let mut state = duel_state(1);
        let report = apply(&mut state, Hand::Rock, Hand::Scissors);

        assert_eq!(report.outcome, DuelOutcome::Win);
        assert!(state.player.has_sword);
        assert!(state.player.has_dual_swords);
        assert_eq!(state.player.sword_kills, 0);
        assert_eq!(state.duel_resume_ticks, Some(DUEL_WIN_RESUME_TICKS));
        assert_eq!(state.phase, GamePhase::DuelPending, "resumes after the delay");
        assert!(state.drain_events().contains(&CueEvent::Clash));
    }

    #[test]
    fn test_loss_arms_exactly_one_hunter() {
        let mut state = duel_state(2);
        let before = state.hunters.len();
        let report = apply(&mut state, Hand::Paper, Hand::Scissors);

        assert_eq!(report.outcome, DuelOutcome::Lose);
        assert_eq!(state.hunters.len(), before, "loss never removes hunters");
        let armed = state.hunters.iter().filter(|h| h.has_sword).count();
        assert_eq!(armed, 1);
        assert!(!state.player.has_sword);
        assert_eq!(state.duel_resume_ticks, Some(DUEL_LOSE_RESUME_TICKS));
        assert!(state.drain_events().contains(&CueEvent::Threat));
    }

    #[test]
    fn test_loss_with_empty_horde_is_a_no_op_arming() {
        let mut state = duel_state(3);
        state.hunters.clear();
        let report = apply(&mut state, Hand::Rock, Hand::Paper);
        assert_eq!(report.outcome, DuelOutcome::Lose);
        assert!(state.hunters.is_empty());
    }

    #[test]
    fn test_tie_changes_no_entity_state() {
        let mut state = duel_state(4);
        let hunters_before = state.hunters.clone();
        let report = apply(&mut state, Hand::Paper, Hand::Paper);

        assert_eq!(report.outcome, DuelOutcome::Tie);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.duel_resume_ticks, None);
        assert!(!state.player.has_sword);
        assert_eq!(state.hunters.len(), hunters_before.len());
        assert!(
            state
                .hunters
                .iter()
                .zip(&hunters_before)
                .all(|(a, b)| a.has_sword == b.has_sword)
        );
        assert!(report.message.contains("paper"));
    }

    #[test]
    fn test_resolve_guarded_outside_duel_pending() {
        let mut state = GameState::new(5);
        state.start();
        assert!(resolve_duel(&mut state, Hand::Rock).is_none());

        // Already resolved, waiting out the display delay
        state.phase = GamePhase::DuelPending;
        state.duel_resume_ticks = Some(10);
        assert!(resolve_duel(&mut state, Hand::Rock).is_none());
    }

    #[test]
    fn test_rival_draw_covers_all_hands() {
        let mut seen = [false; 3];
        for seed in 0..100 {
            let mut state = duel_state(seed);
            let report = resolve_duel(&mut state, Hand::Rock).unwrap();
            let idx = Hand::ALL
                .iter()
                .position(|&h| h == report.rival_hand)
                .unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "rival hands not covering: {seen:?}");
    }

    #[test]
    fn test_exactly_one_outcome_per_invocation() {
        for seed in 0..30 {
            let mut state = duel_state(seed);
            let report = resolve_duel(&mut state, Hand::Scissors).unwrap();
            match report.outcome {
                DuelOutcome::Win => {
                    assert!(state.player.has_dual_swords);
                    assert!(state.hunters.iter().all(|h| !h.has_sword));
                }
                DuelOutcome::Lose => {
                    assert!(!state.player.has_sword);
                    assert_eq!(state.hunters.iter().filter(|h| h.has_sword).count(), 1);
                }
                DuelOutcome::Tie => {
                    assert!(!state.player.has_sword);
                    assert!(state.hunters.iter().all(|h| !h.has_sword));
                    assert_eq!(state.phase, GamePhase::Playing);
                }
            }
        }
    }
}
