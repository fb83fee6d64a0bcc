//! Fixed timestep simulation tick
//!
//! Within a tick: ball physics, then hit judgement, then the out-of-bounds
//! check. Timers run separately, between frames.

use super::control::{end_swing, force_end_game, hit_ball, judge_swing, throw_ball};
use super::schedule::Task;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, now_ms: f64) {
    if state.is_game_over() {
        return;
    }
    state.time_ticks += 1;

    if !state.is_ball_in_play() {
        return;
    }
    let field = state.field;
    let Some(ball) = state.ball.as_mut() else {
        return;
    };

    ball.update(&field);
    let in_zone = !ball.is_hit() && ball.is_in_hit_zone(&field);

    // A single swing can connect on any tick while the ball stays in the zone
    if in_zone && judge_swing(state.last_swing_ms, now_ms) {
        hit_ball(state);
    }

    let Some(ball) = state.ball.as_ref() else {
        return;
    };
    if !ball.is_out_of_bounds(&field) {
        return;
    }

    if ball.is_hit() {
        let meters = ball.flight_meters();
        state.last_flight_m = Some(meters);
        state.events.push(GameEvent::FlightDistance { meters });
        log::debug!("Flight distance: {} m", meters);
    }

    state.ball = None;
    state.phase = GamePhase::Idle;

    if state.pitch_count < MAX_PITCHES {
        state
            .scheduler
            .after(now_ms, NEXT_PITCH_DELAY_MS, Task::Pitch);
    } else {
        state
            .scheduler
            .after(now_ms, FINAL_BALL_END_DELAY_MS, Task::ForceEnd);
    }
}

/// Run one scheduled task
pub fn run_task(state: &mut GameState, task: Task, now_ms: f64) {
    match task {
        Task::EndSwing => end_swing(state),
        Task::Pitch => throw_ball(state, now_ms),
        Task::ForceEnd => force_end_game(state),
    }
}

/// Run every task due at `now_ms`, earliest first. Returns how many ran.
pub fn run_timers(state: &mut GameState, now_ms: f64) -> usize {
    let mut ran = 0;
    while let Some(task) = state.scheduler.pop_due(now_ms) {
        run_task(state, task, now_ms);
        ran += 1;
    }
    ran
}
