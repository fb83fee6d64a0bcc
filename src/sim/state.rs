//! Game state and core simulation types
//!
//! One `GameState` per session; restart replaces its contents wholesale.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::schedule::Scheduler;
use crate::config::Field;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No ball in play (before the first pitch or between pitches)
    Idle,
    /// Ball falling toward the batter
    Pitching,
    /// Ball flying off the bat
    BallInFlight,
    /// Session over, waiting for restart
    GameOver,
}

/// Final result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Clear,
    Fail,
}

impl Outcome {
    pub fn from_hits(hits: u32) -> Self {
        if hits >= CLEAR_HITS {
            Outcome::Clear
        } else {
            Outcome::Fail
        }
    }

    pub fn is_clear(&self) -> bool {
        *self == Outcome::Clear
    }

    /// Message for the end-of-game panel
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Clear => "Game clear! Congratulations!",
            Outcome::Fail => "Game over! Try again!",
        }
    }
}

/// End-of-game report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub outcome: Outcome,
    pub pitches: u32,
    pub hits: u32,
    /// Last published flight distance, present when at least one hit landed
    pub last_flight_m: Option<u32>,
}

/// Things the presentation layer should react to, in the order they happened
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Session state wiped for a fresh game
    Reset,
    StatsChanged { pitches: u32, hits: u32 },
    Pitched { number: u32, last: bool },
    SwingStarted,
    SwingEnded,
    BallHit { angle: f32, power: f32 },
    /// Hit count just reached the clear target
    ClearReached,
    FlightDistance { meters: u32 },
    GameEnded(Summary),
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Playfield geometry
    pub field: Field,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Hit angle/power source
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Pitches thrown (0..=MAX_PITCHES)
    pub pitch_count: u32,
    /// Hits landed (0..=pitch_count)
    pub hit_count: u32,
    /// Bat is mid-swing (debounce only)
    pub is_swinging: bool,
    /// Timestamp of the most recent swing (monotonic ms)
    pub last_swing_ms: Option<f64>,
    /// Guards the end-of-game side effects
    pub end_game_called: bool,
    /// Current pitch, if any
    pub ball: Option<Ball>,
    /// Most recent flight distance shown to the player
    pub last_flight_m: Option<u32>,
    /// Set once the game ends
    pub outcome: Option<Outcome>,
    /// Pending timers and the frame request
    pub scheduler: Scheduler,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events not yet handed to the presentation layer
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(field: Field, seed: u64) -> Self {
        Self {
            field,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            pitch_count: 0,
            hit_count: 0,
            is_swinging: false,
            last_swing_ms: None,
            end_game_called: false,
            ball: None,
            last_flight_m: None,
            outcome: None,
            scheduler: Scheduler::new(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn is_ball_in_play(&self) -> bool {
        matches!(self.phase, GamePhase::Pitching | GamePhase::BallInFlight)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn summary(&self) -> Summary {
        Summary {
            outcome: Outcome::from_hits(self.hit_count),
            pitches: self.pitch_count,
            hits: self.hit_count,
            last_flight_m: self.last_flight_m,
        }
    }

    pub(crate) fn push_stats(&mut self) {
        self.events.push(GameEvent::StatsChanged {
            pitches: self.pitch_count,
            hits: self.hit_count,
        });
    }

    /// Hand queued events to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
