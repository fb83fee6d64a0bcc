//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Time passed in explicitly (no clock reads)
//! - No rendering or platform dependencies; effects are queued as `GameEvent`s

pub mod ball;
pub mod control;
pub mod schedule;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallState, batter_reference};
pub use control::{end_swing, force_end_game, hit_ball, judge_swing, reset, swing_bat, throw_ball};
pub use schedule::{FrameHandle, Scheduler, Task};
pub use state::{GameEvent, GamePhase, GameState, Outcome, Summary};
pub use tick::{run_task, run_timers, tick};
