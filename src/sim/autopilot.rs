//! Demo autopilot
//!
//! A deliberately simple dodger: step away from the lowest apple that would
//! land on the paddle, otherwise drift back toward the middle.

use super::controller::{Direction, InputEvent};
use super::state::GameState;
use crate::consts::VIEWPORT_WIDTH;

/// Pick this tick's move, if any
pub fn steer(state: &GameState) -> Option<InputEvent> {
    let player = &state.player;
    let step = state.tuning.key_step;
    // Treat apples a step to either side as threats too
    let danger_left = player.x - step;
    let danger_right = player.x + player.width + step;

    let threat = state
        .apples
        .iter()
        .filter(|a| a.y <= player.y + player.height)
        .filter(|a| a.x + a.width >= danger_left && a.x <= danger_right)
        .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));

    let dir = match threat {
        Some(apple) => {
            // Paddle positions that clear the apple with some margin
            let left_target = apple.x - player.width - 2.0 * step;
            let right_target = apple.x + apple.width + 2.0 * step;
            let go_left = match (left_target >= 0.0, right_target <= player.max_x()) {
                (true, true) => player.x - left_target <= right_target - player.x,
                (true, false) => true,
                (false, true) => false,
                (false, false) => apple.center_x() >= player.center_x(),
            };
            if go_left {
                Direction::Left
            } else {
                Direction::Right
            }
        }
        None => {
            let offset = VIEWPORT_WIDTH / 2.0 - player.center_x();
            if offset.abs() <= step {
                return None;
            }
            if offset < 0.0 {
                Direction::Left
            } else {
                Direction::Right
            }
        }
    };
    Some(InputEvent::Key(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Apple;

    fn apple_at(state: &mut GameState, x: f32, y: f32) {
        let id = state.next_entity_id();
        state.apples.push(Apple {
            id,
            x,
            y,
            width: 30.0,
            height: 30.0,
        });
    }

    #[test]
    fn test_idle_when_centered_and_clear() {
        let state = GameState::new(1);
        assert_eq!(steer(&state), None);
    }

    #[test]
    fn test_returns_to_center() {
        let mut state = GameState::new(1);
        state.player.set_x(0.0);
        assert_eq!(steer(&state), Some(InputEvent::Key(Direction::Right)));
    }

    #[test]
    fn test_steps_away_from_threat() {
        let mut state = GameState::new(1);
        // Apple over the right half of the paddle: shorter escape to the left
        let x = state.player.x + 40.0;
        apple_at(&mut state, x, 300.0);
        assert_eq!(steer(&state), Some(InputEvent::Key(Direction::Left)));
    }

    #[test]
    fn test_ignores_apples_already_past() {
        let mut state = GameState::new(1);
        let x = state.player.x;
        let below = state.player.y + state.player.height + 5.0;
        apple_at(&mut state, x, below);
        assert_eq!(steer(&state), None);
    }

    #[test]
    fn test_escapes_wall() {
        let mut state = GameState::new(1);
        state.player.set_x(0.0);
        apple_at(&mut state, 0.0, 400.0);
        assert_eq!(steer(&state), Some(InputEvent::Key(Direction::Right)));
    }
}
