//! Difficulty ramp
//!
//! Every point makes the game harder: apples fall faster, more may be alive
//! at once, and they spawn more often. Growth compounds with no ceiling.
//! The cap is rounded up after each multiplication, so its sequence depends on
//! rounding order (1, 2, 3, ..., 20, 21, 23, 25, 27, ...); keep the formula
//! literal.

use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Spawn cap after one growth step
pub fn next_spawn_cap(cap: u32, growth_factor: f64) -> u32 {
    (cap as f64 * growth_factor).ceil() as u32
}

/// Spawn timer period for a given fall speed, floored at the tuning minimum.
/// Scales with speed relative to the base speed, so it only ever shrinks.
pub fn spawn_interval_ms(tuning: &Tuning, fall_speed: f64) -> f64 {
    let scaled = tuning.base_spawn_interval_ms / (fall_speed / tuning.base_fall_speed);
    scaled.max(tuning.min_spawn_interval_ms)
}

/// Apply one growth step and reschedule the spawn timer
pub fn on_score(state: &mut GameState) {
    let growth = state.tuning.growth_factor;
    state.fall_speed *= growth;
    state.spawn_cap = next_spawn_cap(state.spawn_cap, growth);
    state.spawn_interval_ms = spawn_interval_ms(&state.tuning, state.fall_speed);
    // Rescheduling restarts the period from now
    state.spawn_clock_ms = 0.0;

    log::debug!(
        "Difficulty up: speed {:.3}, cap {}, interval {:.1} ms",
        state.fall_speed,
        state.spawn_cap,
        state.spawn_interval_ms
    );
    state.events.push(GameEvent::DifficultyRaised {
        fall_speed: state.fall_speed,
        spawn_cap: state.spawn_cap,
        spawn_interval_ms: state.spawn_interval_ms,
    });
}
