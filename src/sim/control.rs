//! Pitch, swing, hit and end-of-game control
//!
//! Every entry point ignores calls that the current state doesn't allow
//! (game over, mid-swing, pitch budget spent) instead of failing, and notes
//! them at debug level.

use rand::Rng;

use super::ball::Ball;
use super::schedule::Task;
use super::state::{GameEvent, GamePhase, GameState, Outcome};
use crate::consts::*;

/// Throw the next pitch, or end the game if the budget is spent
pub fn throw_ball(state: &mut GameState, now_ms: f64) {
    if state.is_game_over() {
        log::debug!("Pitch ignored: game over");
        return;
    }
    if state.pitch_count >= MAX_PITCHES {
        log::debug!("Pitch budget spent, ending game");
        force_end_game(state);
        return;
    }

    state.pitch_count += 1;
    state.phase = GamePhase::Pitching;
    state.ball = Some(Ball::pitched(&state.field));
    state.push_stats();

    let last = state.pitch_count >= MAX_PITCHES;
    state.events.push(GameEvent::Pitched {
        number: state.pitch_count,
        last,
    });
    log::debug!("Pitch {}/{}", state.pitch_count, MAX_PITCHES);

    if last {
        log::info!("Last pitch!");
        // Ends the game even if this ball never leaves play
        state
            .scheduler
            .after(now_ms, LAST_PITCH_END_DELAY_MS, Task::ForceEnd);
    }
}

/// Record a swing. Ignored while the bat is already moving or after the game ends.
pub fn swing_bat(state: &mut GameState, now_ms: f64) {
    if state.is_swinging {
        log::debug!("Swing ignored: bat still moving");
        return;
    }
    if state.is_game_over() {
        log::debug!("Swing ignored: game over");
        return;
    }

    state.is_swinging = true;
    state.last_swing_ms = Some(now_ms);
    state.events.push(GameEvent::SwingStarted);
    state
        .scheduler
        .after(now_ms, SWING_COOLDOWN_MS, Task::EndSwing);
}

/// Bat back at rest
pub fn end_swing(state: &mut GameState) {
    if !state.is_swinging {
        return;
    }
    state.is_swinging = false;
    state.events.push(GameEvent::SwingEnded);
}

/// True if a swing at `last_swing_ms` connects with a ball in the zone at `now_ms`.
/// The window is inclusive at both ends.
pub fn judge_swing(last_swing_ms: Option<f64>, now_ms: f64) -> bool {
    match last_swing_ms {
        Some(swing) => (0.0..=SWING_WINDOW_MS).contains(&(now_ms - swing)),
        None => false,
    }
}

/// Send the current ball flying. No-op without a ball or if it was already hit.
pub fn hit_ball(state: &mut GameState) {
    if !state.ball.as_ref().is_some_and(|b| !b.is_hit()) {
        return;
    }
    let angle = state.rng.random_range(HIT_ANGLE_MIN..HIT_ANGLE_MAX);
    let power = state.rng.random_range(HIT_POWER_MIN..HIT_POWER_MAX);
    if let Some(ball) = state.ball.as_mut() {
        ball.strike(angle, power);
    }

    state.hit_count += 1;
    debug_assert!(state.hit_count <= state.pitch_count);
    state.phase = GamePhase::BallInFlight;
    state.push_stats();
    state.events.push(GameEvent::BallHit { angle, power });
    log::info!(
        "Home run! angle {:.0} deg, power {:.1}",
        angle.to_degrees(),
        power
    );

    if state.hit_count == CLEAR_HITS && !state.end_game_called {
        state.events.push(GameEvent::ClearReached);
        log::info!("Clear condition reached");
    }
}

/// End the game once; later calls do nothing
pub fn force_end_game(state: &mut GameState) {
    if state.end_game_called {
        log::debug!("Game already ended");
        return;
    }
    state.end_game_called = true;
    log::info!("Forcing game end");
    end_game(state);
}

/// Takes the ball out of play, stops the loop and publishes the result
fn end_game(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    // Bat goes back to rest before its cooldown timer is dropped
    end_swing(state);
    state.scheduler.cancel_frame();
    state.scheduler.cancel_all();

    let summary = state.summary();
    state.outcome = Some(summary.outcome);
    match summary.outcome {
        Outcome::Clear => log::info!("Game clear with {} hits", summary.hits),
        Outcome::Fail => log::info!("Game over with {} hits", summary.hits),
    }
    state.events.push(GameEvent::GameEnded(summary));
}

/// Wipe the session and start pitching again
pub fn reset(state: &mut GameState, now_ms: f64) {
    let field = state.field;
    let seed = state.seed;
    let rng = state.rng.clone();
    *state = GameState::new(field, seed);
    // RNG stream continues across restarts
    state.rng = rng;

    state.events.push(GameEvent::Reset);
    throw_ball(state, now_ms);
    state.scheduler.request_frame();
}
