//! Game state and core simulation types
//!
//! All state that must be persisted for restart/determinism lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, world built but frozen
    Start,
    /// Active gameplay
    Playing,
    /// Sword broke; simulation suspended until the duel resolves
    DuelPending,
    /// The hunters caught the bear
    GameOver,
    /// Horde cleared or the clock ran out
    Won,
}

impl GamePhase {
    /// Terminal states only leave via an explicit restart
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Discrete cue for the audio/speech collaborators.
///
/// Cues are queued as data and drained by the host; the simulation never
/// waits on playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueEvent {
    /// Sword collected from a hiding spot
    Pickup,
    /// Unarmed hunter cut down
    HunterDefeated,
    /// Blade-on-blade impact (dual-wield kill or duel victory)
    Clash,
    /// A hunter growls nearby, or one picks up a blade after a lost duel
    Threat,
    /// Narrated game-over line for the speech synthesizer
    Distress { taunt: &'static str },
}

/// The bear
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Facing direction in radians; follows movement, nothing reads it yet
    pub angle: f32,
    pub has_sword: bool,
    /// Dual-wield mode, won in the duel. Implies `has_sword`.
    pub has_dual_swords: bool,
    /// Kills since the sword was last gained or renewed
    pub sword_kills: u32,
    /// Legacy knockdown flag; terminal state lives in [`GamePhase`]
    pub is_dead: bool,
    /// Standing inside a hiding spot this tick
    pub is_hidden: bool,
}

impl Player {
    fn spawn() -> Self {
        Self {
            pos: Vec2::new(100.0, MAP_HEIGHT / 2.0),
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            angle: 0.0,
            has_sword: false,
            has_dual_swords: false,
            sword_kills: 0,
            is_dead: false,
            is_hidden: false,
        }
    }

    /// Kills the current blade survives before breaking
    pub fn durability_capacity(&self) -> u32 {
        if self.has_dual_swords {
            SWORD_DURABILITY * 2
        } else {
            SWORD_DURABILITY
        }
    }

    /// Pick up a single sword (fresh blade, fresh use count)
    pub fn arm_single(&mut self) {
        self.has_sword = true;
        self.has_dual_swords = false;
        self.sword_kills = 0;
    }

    /// Duel reward: two fresh blades
    pub fn arm_dual(&mut self) {
        self.has_sword = true;
        self.has_dual_swords = true;
        self.sword_kills = 0;
    }

    /// The blade breaks; back to bare paws
    pub fn disarm(&mut self) {
        self.has_sword = false;
        self.has_dual_swords = false;
        self.sword_kills = 0;
    }
}

/// A hunter chasing the bear
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunter {
    /// Stable ID, never reused within a session
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Wander heading in radians, used while the player is hidden
    pub angle: f32,
    pub has_sword: bool,
}

/// A static circular zone granting concealment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HidingSpot {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// One-time sword pickup; exactly one spot starts with it
    pub has_sword: bool,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; every random draw in the simulation flows through here
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Accumulated score (monotonic)
    pub score: u32,
    /// Seconds remaining on the countdown
    pub time_left: u32,
    /// Ticks accumulated toward the next countdown second
    tick_in_second: u32,
    /// The bear
    pub player: Player,
    /// Live hunters (sorted by id for determinism)
    pub hunters: Vec<Hunter>,
    /// The three hiding spots
    pub spots: Vec<HidingSpot>,
    /// After a duel win/lose, ticks until play resumes
    pub duel_resume_ticks: Option<u32>,
    /// Cues queued this tick, drained by the host
    #[serde(skip)]
    pub events: Vec<CueEvent>,
    /// Next hunter ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed, waiting on the start screen
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            score: 0,
            time_left: GAME_DURATION_SECS,
            tick_in_second: 0,
            player: Player::spawn(),
            hunters: Vec::new(),
            spots: Vec::new(),
            duel_resume_ticks: None,
            events: Vec::new(),
            next_id: 0,
        };
        state.respawn_world();
        state
    }

    /// Start (or restart) the session: rebuild every entity collection and
    /// enter `Playing`. This is the only place entities are constructed.
    pub fn start(&mut self) {
        self.respawn_world();
        self.phase = GamePhase::Playing;
    }

    /// True once the horde is wiped out
    pub fn is_victory(&self) -> bool {
        self.hunters.is_empty()
    }

    /// Allocate a hunter ID (monotonic, survives restarts)
    fn next_hunter_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn respawn_world(&mut self) {
        self.score = 0;
        self.time_left = GAME_DURATION_SECS;
        self.tick_in_second = 0;
        self.duel_resume_ticks = None;
        self.events.clear();

        self.player = Player::spawn();

        self.spots = vec![
            HidingSpot {
                id: 1,
                pos: Vec2::new(150.0, 150.0),
                radius: HIDING_SPOT_RADIUS,
                has_sword: false,
            },
            HidingSpot {
                id: 2,
                pos: Vec2::new(MAP_WIDTH - 150.0, MAP_HEIGHT - 150.0),
                radius: HIDING_SPOT_RADIUS,
                has_sword: false,
            },
            HidingSpot {
                id: 3,
                pos: Vec2::new(MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0 + 200.0),
                radius: HIDING_SPOT_RADIUS,
                has_sword: false,
            },
        ];
        let armed = self.rng.random_range(0..self.spots.len());
        self.spots[armed].has_sword = true;

        self.hunters.clear();
        for _ in 0..INITIAL_HUNTER_COUNT {
            let id = self.next_hunter_id();
            let pos = Vec2::new(
                MAP_WIDTH - 100.0 - self.rng.random_range(0.0..200.0),
                self.rng.random_range(0.0..MAP_HEIGHT),
            );
            let angle = self.rng.random_range(0.0..TAU);
            self.hunters.push(Hunter {
                id,
                pos,
                radius: HUNTER_RADIUS,
                speed: HUNTER_SPEED,
                angle,
                has_sword: false,
            });
        }
    }

    /// Advance the one-second countdown by a single tick. Only runs while
    /// `Playing`; hitting zero forces `Won` no matter how many hunters
    /// remain.
    pub(crate) fn advance_timer(&mut self) {
        self.tick_in_second += 1;
        if self.tick_in_second >= TICK_HZ {
            self.tick_in_second = 0;
            self.time_left = self.time_left.saturating_sub(1);
            if self.time_left == 0 {
                self.phase = GamePhase::Won;
            }
        }
    }

    /// Queue a cue for the audio collaborator
    pub fn push_cue(&mut self, cue: CueEvent) {
        self.events.push(cue);
    }

    /// Take this tick's queued cues
    pub fn drain_events(&mut self) -> Vec<CueEvent> {
        std::mem::take(&mut self.events)
    }
}
