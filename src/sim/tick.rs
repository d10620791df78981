//! Fixed timestep simulation tick
//!
//! One tick is 20 ms of game time. Each tick applies queued input, then runs
//! the spawner, then advances apples and resolves collisions. Nothing moves
//! once the game is over.

use super::autopilot;
use super::collision::rects_overlap;
use super::controller::{InputEvent, apply_input};
use super::difficulty;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Input events received since the previous tick, oldest first
    pub events: Vec<InputEvent>,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.is_over() {
        return;
    }

    for event in &input.events {
        apply_input(state, event);
    }
    if input.idle_mode {
        if let Some(event) = autopilot::steer(state) {
            apply_input(state, &event);
        }
    }

    state.time_ticks += 1;

    run_spawner(state);
    run_physics(state);
}

/// Advance the spawn timer and create an apple when it fires
fn run_spawner(state: &mut GameState) {
    state.spawn_clock_ms += TICK_MS;
    // Short periods can elapse more than once per tick
    while state.spawn_clock_ms >= state.spawn_interval_ms {
        state.spawn_clock_ms -= state.spawn_interval_ms;
        if (state.apples.len() as u32) < state.spawn_cap {
            state.spawn_apple();
        }
    }
}

/// Move apples, score the ones that fell off, and check for hits
fn run_physics(state: &mut GameState) {
    let player = state.player.rect();

    let mut i = 0;
    while i < state.apples.len() {
        // A point earlier in this pass speeds up the apples after it
        state.apples[i].y += state.fall_speed as f32;

        if state.apples[i].y > VIEWPORT_HEIGHT {
            state.apples.remove(i);
            state.score += 1;
            state.events.push(GameEvent::Scored { score: state.score });
            difficulty::on_score(state);
            continue;
        }

        if rects_overlap(&state.apples[i].rect(), &player) {
            state.end();
            return;
        }
        i += 1;
    }
}
