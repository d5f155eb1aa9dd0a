//! Rectangle type for hit testing and bounds checks

use macroquad::prelude::Vec2;

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from a position and size pair
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(r.contains(10.0, 20.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(110.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
    }

    #[test]
    fn test_edges() {
        let r = Rect::new(560.0, 0.0, 140.0, 700.0);
        assert_eq!(r.right(), 700.0);
        assert_eq!(r.bottom(), 700.0);
    }
}
