//! Homerun Derby - a ten-pitch batting timing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pitching, swing timing, ball flight, scoring)
//! - `renderer`: Drawing surface abstraction and the 2D canvas backend
//! - `platform`: HUD/clock abstraction and the browser DOM backend
//! - `game`: Frame driver that connects the simulation to its collaborators
//! - `config`: Runtime configuration

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{Config, Field};
pub use game::{Game, LoopControl};

/// Game configuration constants
pub mod consts {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    /// Fixed simulation timestep in milliseconds (one display frame at 60 Hz)
    pub const SIM_STEP_MS: f64 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame gap fed into the accumulator
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Default canvas dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    /// Pixels per tick while pitched
    pub const BALL_FALL_SPEED: f32 = 2.0;
    /// Pitches start just above the top edge
    pub const BALL_START_Y: f32 = -20.0;
    /// Hit balls may rise this far above the top edge before leaving play
    pub const BALL_TOP_MARGIN: f32 = -50.0;
    pub const BALL_FILL: &str = "yellow";
    pub const BALL_STROKE: &str = "#333";
    pub const BALL_LINE_WIDTH: f64 = 2.0;

    /// Hit zone band, measured up from the bottom edge
    pub const HIT_ZONE_FAR: f32 = 200.0;
    pub const HIT_ZONE_NEAR: f32 = 100.0;
    /// Batter line (distance reference), measured up from the bottom edge
    pub const BATTER_LINE: f32 = 100.0;

    /// Batter sprite placement, relative to the bottom center
    pub const BATTER_SIZE: f32 = 100.0;
    pub const BATTER_TOP: f32 = 120.0;

    /// Launch angle range (radians, 45..90 degrees)
    pub const HIT_ANGLE_MIN: f32 = FRAC_PI_4;
    pub const HIT_ANGLE_MAX: f32 = FRAC_PI_2;
    /// Launch power range (pixels per tick)
    pub const HIT_POWER_MIN: f32 = 10.0;
    pub const HIT_POWER_MAX: f32 = 20.0;
    /// Flight distance pixels per displayed meter
    pub const PIXELS_PER_METER: f32 = 10.0;

    /// Rules
    pub const MAX_PITCHES: u32 = 10;
    pub const CLEAR_HITS: u32 = 3;

    /// A swing counts if the ball is in the zone within this many ms
    pub const SWING_WINDOW_MS: f64 = 300.0;
    /// Bat returns to rest after this many ms
    pub const SWING_COOLDOWN_MS: f64 = 300.0;
    /// Delay before the next pitch once a ball leaves play
    pub const NEXT_PITCH_DELAY_MS: f64 = 1500.0;
    /// Delay before ending once the final ball leaves play
    pub const FINAL_BALL_END_DELAY_MS: f64 = 500.0;
    /// Safety net: the game ends this long after the last pitch regardless
    pub const LAST_PITCH_END_DELAY_MS: f64 = 2000.0;
}
