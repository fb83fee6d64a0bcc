//! Frame driver
//!
//! Owns the session state, runs timers and fixed-step ticks for each display
//! frame, and forwards queued events to the HUD.

use crate::config::Config;
use crate::consts::*;
use crate::platform::Hud;
use crate::renderer::{Surface, draw_background, render_frame};
use crate::sim::{self, GameEvent, GameState, Summary};

/// Whether the host should keep requesting frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Game instance holding all session state
pub struct Game {
    state: GameState,
    accumulator: f64,
    last_frame_ms: Option<f64>,
}

impl Game {
    pub fn new(config: &Config, seed: u64) -> Self {
        Self {
            state: GameState::new(config.field, seed),
            accumulator: 0.0,
            last_frame_ms: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts and tests that need to stage a situation
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Start a fresh session: reset, first pitch, and begin the frame loop
    pub fn start(&mut self, now_ms: f64, hud: &mut dyn Hud) {
        sim::reset(&mut self.state, now_ms);
        self.accumulator = 0.0;
        self.last_frame_ms = None;
        self.dispatch(hud);
        log::info!("Game started (seed {})", self.state.seed);
    }

    /// Restart after the end-of-game panel
    pub fn restart(&mut self, now_ms: f64, hud: &mut dyn Hud) {
        log::info!("Restarting");
        self.start(now_ms, hud);
    }

    /// Swing input (click/tap)
    pub fn swing(&mut self, now_ms: f64, hud: &mut dyn Hud) {
        sim::swing_bat(&mut self.state, now_ms);
        self.dispatch(hud);
    }

    /// True while the frame loop wants to run
    pub fn is_running(&self) -> bool {
        self.state.scheduler.frame_requested()
    }

    /// Run one display frame
    pub fn frame(&mut self, now_ms: f64, surface: &mut dyn Surface, hud: &mut dyn Hud) -> LoopControl {
        sim::run_timers(&mut self.state, now_ms);

        if self.state.scheduler.take_frame().is_none() {
            // Loop was cancelled (game over) since the last frame
            draw_background(surface, &self.state.field);
            self.dispatch(hud);
            self.last_frame_ms = None;
            return LoopControl::Stop;
        }

        let dt = match self.last_frame_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => SIM_STEP_MS,
        };
        self.last_frame_ms = Some(now_ms);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_STEP_MS && substeps < MAX_SUBSTEPS {
            sim::tick(&mut self.state, now_ms);
            self.accumulator -= SIM_STEP_MS;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            self.accumulator = 0.0;
        }

        render_frame(surface, &self.state);
        self.dispatch(hud);

        if self.state.is_game_over() {
            LoopControl::Stop
        } else {
            self.state.scheduler.request_frame();
            LoopControl::Continue
        }
    }

    /// Earliest pending timer, for hosts that sleep between frames
    pub fn next_timer_ms(&self) -> Option<f64> {
        self.state.scheduler.next_due()
    }

    pub fn summary(&self) -> Summary {
        self.state.summary()
    }

    fn dispatch(&mut self, hud: &mut dyn Hud) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Reset => hud.clear(),
                GameEvent::StatsChanged { pitches, hits } => {
                    hud.set_pitch_stat(pitches, MAX_PITCHES);
                    hud.set_hit_stat(hits, CLEAR_HITS);
                }
                GameEvent::Pitched { .. } => {}
                GameEvent::SwingStarted => hud.set_swing_pose(true),
                GameEvent::SwingEnded => hud.set_swing_pose(false),
                GameEvent::BallHit { .. } | GameEvent::ClearReached => {}
                GameEvent::FlightDistance { meters } => hud.set_flight_distance(meters),
                GameEvent::GameEnded(summary) => {
                    hud.show_outcome(summary.outcome.message(), summary.outcome.is_clear());
                    if summary.hits > 0 {
                        if let Some(meters) = summary.last_flight_m {
                            hud.show_distance_summary(meters);
                        }
                    }
                    hud.show_restart_affordance();
                    match serde_json::to_string(&summary) {
                        Ok(json) => log::info!("Summary: {}", json),
                        Err(e) => log::warn!("Summary serialization failed: {}", e),
                    }
                }
            }
        }
    }
}
