//! Player controller
//!
//! Keyboard steps, mouse drags and touch drags all write the same clamped
//! paddle position. Events are applied in arrival order, so the last writer
//! wins. Mouse and touch share one drag tracker.

use glam::Vec2;

use super::state::{DragState, GameState};

/// Horizontal direction for discrete key moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A player input, already converted to viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(Direction),
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32 },
    PointerUp,
    TouchStart { x: f32, y: f32 },
    TouchMove { x: f32 },
    TouchEnd,
}

/// Move the paddle one key step
pub fn key_press(state: &mut GameState, dir: Direction) {
    if state.is_over() {
        return;
    }
    let step = state.tuning.key_step;
    let x = match dir {
        Direction::Left => state.player.x - step,
        Direction::Right => state.player.x + step,
    };
    state.player.set_x(x);
}

/// Begin a drag if the press lands on the paddle
pub fn drag_begin(state: &mut GameState, x: f32, y: f32) -> bool {
    if state.is_over() || !state.player.rect().contains_point(Vec2::new(x, y)) {
        return false;
    }
    state.drag = Some(DragState {
        origin_x: x,
        start_x: state.player.x,
    });
    true
}

/// Follow the pointer relative to where the drag began
pub fn drag_move(state: &mut GameState, x: f32) {
    if state.is_over() {
        return;
    }
    if let Some(drag) = state.drag {
        state.player.set_x(drag.start_x + (x - drag.origin_x));
    }
}

pub fn drag_end(state: &mut GameState) {
    state.drag = None;
}

/// Dispatch one input event
pub fn apply_input(state: &mut GameState, event: &InputEvent) {
    match *event {
        InputEvent::Key(dir) => key_press(state, dir),
        InputEvent::PointerDown { x, y } | InputEvent::TouchStart { x, y } => {
            drag_begin(state, x, y);
        }
        InputEvent::PointerMove { x } | InputEvent::TouchMove { x } => drag_move(state, x),
        InputEvent::PointerUp | InputEvent::TouchEnd => drag_end(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn grab_point(state: &GameState) -> (f32, f32) {
        let r = state.player.rect();
        (r.left() + r.size.x / 2.0, r.top() + r.size.y / 2.0)
    }

    #[test]
    fn test_key_steps_and_clamps() {
        let mut state = GameState::new(1);
        let start = state.player.x;

        key_press(&mut state, Direction::Left);
        assert_eq!(state.player.x, start - 10.0);
        key_press(&mut state, Direction::Right);
        key_press(&mut state, Direction::Right);
        assert_eq!(state.player.x, start + 10.0);

        for _ in 0..100 {
            key_press(&mut state, Direction::Left);
        }
        assert_eq!(state.player.x, 0.0);

        for _ in 0..100 {
            key_press(&mut state, Direction::Right);
        }
        assert_eq!(state.player.x, VIEWPORT_WIDTH - PLAYER_WIDTH);
    }

    #[test]
    fn test_drag_applies_delta_from_origin() {
        let mut state = GameState::new(1);
        let start = state.player.x;
        let (gx, gy) = grab_point(&state);

        assert!(drag_begin(&mut state, gx, gy));
        drag_move(&mut state, gx + 35.0);
        assert_eq!(state.player.x, start + 35.0);
        // Deltas are measured from the origin, not accumulated
        drag_move(&mut state, gx - 5.0);
        assert_eq!(state.player.x, start - 5.0);

        drag_end(&mut state);
        drag_move(&mut state, gx + 100.0);
        assert_eq!(state.player.x, start - 5.0);
    }

    #[test]
    fn test_drag_far_left_clamps_to_zero() {
        let mut state = GameState::new(1);
        let (gx, gy) = grab_point(&state);
        apply_input(&mut state, &InputEvent::TouchStart { x: gx, y: gy });
        apply_input(&mut state, &InputEvent::TouchMove { x: -5000.0 });
        assert_eq!(state.player.x, 0.0);
    }

    #[test]
    fn test_press_off_paddle_does_not_drag() {
        let mut state = GameState::new(1);
        let start = state.player.x;
        assert!(!drag_begin(&mut state, 5.0, 5.0));
        drag_move(&mut state, 300.0);
        assert_eq!(state.player.x, start);
    }

    #[test]
    fn test_mouse_and_touch_share_tracker() {
        let mut state = GameState::new(1);
        let start = state.player.x;
        let (gx, gy) = grab_point(&state);
        apply_input(&mut state, &InputEvent::PointerDown { x: gx, y: gy });
        apply_input(&mut state, &InputEvent::TouchMove { x: gx + 20.0 });
        assert_eq!(state.player.x, start + 20.0);
        apply_input(&mut state, &InputEvent::TouchEnd);
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_no_movement_after_game_over() {
        let mut state = GameState::new(1);
        let (gx, gy) = grab_point(&state);
        drag_begin(&mut state, gx, gy);
        state.end();
        let frozen = state.player.x;

        key_press(&mut state, Direction::Left);
        drag_move(&mut state, gx + 50.0);
        assert!(!drag_begin(&mut state, gx, gy));
        assert_eq!(state.player.x, frozen);
    }

    fn arb_event() -> impl Strategy<Value = InputEvent> {
        prop_oneof![
            Just(InputEvent::Key(Direction::Left)),
            Just(InputEvent::Key(Direction::Right)),
            (-1.0e4f32..1.0e4, 0.0f32..600.0)
                .prop_map(|(x, y)| InputEvent::PointerDown { x, y }),
            (-1.0e4f32..1.0e4).prop_map(|x| InputEvent::PointerMove { x }),
            Just(InputEvent::PointerUp),
            (-1.0e4f32..1.0e4, 0.0f32..600.0).prop_map(|(x, y)| InputEvent::TouchStart { x, y }),
            (-1.0e4f32..1.0e4).prop_map(|x| InputEvent::TouchMove { x }),
            Just(InputEvent::TouchEnd),
        ]
    }

    proptest! {
        #[test]
        fn prop_player_always_in_bounds(events in prop::collection::vec(arb_event(), 0..200)) {
            let mut state = GameState::new(5);
            for event in &events {
                apply_input(&mut state, event);
                prop_assert!(state.player.x >= 0.0);
                prop_assert!(state.player.x <= VIEWPORT_WIDTH - PLAYER_WIDTH);
            }
        }
    }
}
