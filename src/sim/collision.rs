//! Axis-aligned collision detection
//!
//! Everything in Apple Dodge is an upright rectangle in viewport space
//! (origin top-left, y grows downward), so a single AABB test covers every
//! apple/player check.

use glam::Vec2;

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Check if a point lies inside the rectangle (edges included)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// Inclusive AABB overlap: touching edges count as a hit
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.top() <= b.bottom() && a.bottom() >= b.top() && a.left() <= b.right() && a.right() >= b.left()
}
