//! Platform helpers
//!
//! Browser-independent pieces of the web host:
//! - Key names to game actions
//! - Letterbox fitting of the fixed viewport into a resizable canvas

use glam::Vec2;

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::sim::Direction;

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    /// Toggle the demo autopilot
    ToggleDemo,
    /// Start over (only honored after game over)
    Restart,
}

/// Map a `KeyboardEvent.key` value to an action
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(KeyAction::Move(Direction::Left)),
        "ArrowRight" | "d" | "D" => Some(KeyAction::Move(Direction::Right)),
        "i" | "I" => Some(KeyAction::ToggleDemo),
        "Enter" => Some(KeyAction::Restart),
        _ => None,
    }
}

/// Placement of the viewport inside a canvas, preserving aspect ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    /// Canvas pixels per viewport pixel
    pub scale: f32,
    /// Top-left of the viewport in canvas pixels
    pub offset: Vec2,
    /// Canvas size in pixels
    pub canvas: Vec2,
}

impl Letterbox {
    pub fn fit(canvas_w: f32, canvas_h: f32) -> Self {
        let canvas = Vec2::new(canvas_w.max(1.0), canvas_h.max(1.0));
        let scale = (canvas.x / VIEWPORT_WIDTH).min(canvas.y / VIEWPORT_HEIGHT);
        let used = Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT) * scale;
        Self {
            scale,
            offset: (canvas - used) / 2.0,
            canvas,
        }
    }

    /// Canvas-local pixel position to viewport coordinates
    pub fn to_viewport(&self, x: f32, y: f32) -> Vec2 {
        (Vec2::new(x, y) - self.offset) / self.scale
    }

    /// Viewport coordinates to canvas-local pixels
    pub fn to_canvas(&self, p: Vec2) -> Vec2 {
        p * self.scale + self.offset
    }

    /// Viewport coordinates to normalized device coordinates (y up)
    pub fn to_ndc(&self, p: Vec2) -> Vec2 {
        let c = self.to_canvas(p);
        Vec2::new(c.x / self.canvas.x * 2.0 - 1.0, 1.0 - c.y / self.canvas.y * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            key_action("ArrowLeft"),
            Some(KeyAction::Move(Direction::Left))
        );
        assert_eq!(key_action("d"), Some(KeyAction::Move(Direction::Right)));
        assert_eq!(key_action("i"), Some(KeyAction::ToggleDemo));
        assert_eq!(key_action("q"), None);
    }

    #[test]
    fn test_letterbox_wide_canvas() {
        // 1200x600 canvas: viewport scaled 1x, centered horizontally
        let lb = Letterbox::fit(1200.0, 600.0);
        assert_eq!(lb.scale, 1.0);
        assert_eq!(lb.offset, Vec2::new(400.0, 0.0));
        assert_eq!(lb.to_viewport(400.0, 0.0), Vec2::ZERO);
        assert_eq!(lb.to_viewport(800.0, 600.0), Vec2::new(400.0, 600.0));
    }

    #[test]
    fn test_letterbox_round_trip_and_ndc_corners() {
        let lb = Letterbox::fit(200.0, 600.0);
        let p = Vec2::new(123.0, 456.0);
        let back = lb.to_viewport(lb.to_canvas(p).x, lb.to_canvas(p).y);
        assert!((back - p).length() < 1e-3);

        // Narrow canvas: viewport spans the full width, top-left maps to x=-1
        let top_left = lb.to_ndc(Vec2::ZERO);
        assert!((top_left.x + 1.0).abs() < 1e-6);
        let bottom_right = lb.to_ndc(Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT));
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
    }
}
