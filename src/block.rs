//! A block stamped onto the grid

use macroquad::prelude::*;

/// A positioned, sized, colored rectangle.
///
/// Identity is position only; size and color play no part in equality, so
/// a probe block at the same cell matches regardless of appearance.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl Block {
    pub fn new(pos: Vec2, size: Vec2, color: Color) -> Self {
        Self { pos, size, color }
    }

    pub fn draw(&self) {
        draw_rectangle(self.pos.x, self.pos.y, self.size.x, self.size.y, self.color);
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}
