//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (monotonic milliseconds)
//! - Stats readouts and the end-of-game panel

#[cfg(target_arch = "wasm32")]
pub mod web;

use std::cell::Cell;

/// Monotonic millisecond clock
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Hand-advanced clock for headless runs
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Everything outside the canvas the game reports to
pub trait Hud {
    fn set_pitch_stat(&mut self, count: u32, max: u32);
    fn set_hit_stat(&mut self, count: u32, max: u32);
    fn set_flight_distance(&mut self, meters: u32);
    /// Bat sprite pose
    fn set_swing_pose(&mut self, swinging: bool);
    fn show_outcome(&mut self, message: &str, is_clear: bool);
    /// Flight distance line on the end-of-game panel
    fn show_distance_summary(&mut self, meters: u32);
    /// Offer a restart; the host routes activation back to `Game::restart`
    fn show_restart_affordance(&mut self);
    /// Clear the flight readout and the end-of-game panel
    fn clear(&mut self);
}

/// HUD that writes to the log (headless runs)
#[derive(Debug, Default)]
pub struct LogHud {
    pub outcome: Option<String>,
}

impl Hud for LogHud {
    fn set_pitch_stat(&mut self, count: u32, max: u32) {
        log::debug!("Pitches: {} / {}", count, max);
    }

    fn set_hit_stat(&mut self, count: u32, max: u32) {
        log::debug!("Home runs: {} / {}", count, max);
    }

    fn set_flight_distance(&mut self, meters: u32) {
        log::info!("Distance: {} m!", meters);
    }

    fn set_swing_pose(&mut self, _swinging: bool) {}

    fn show_outcome(&mut self, message: &str, _is_clear: bool) {
        log::info!("{}", message);
        self.outcome = Some(message.to_string());
    }

    fn show_distance_summary(&mut self, meters: u32) {
        log::info!("Total distance: {} m", meters);
    }

    fn show_restart_affordance(&mut self) {}

    fn clear(&mut self) {
        self.outcome = None;
    }
}
