//! Grid overlay - a fixed list of line segments over the editable area

use macroquad::prelude::*;

use crate::ui::GRID_LINE_COLOR;

/// A static grid of lines spaced `spacing` apart, covering `covered`.
///
/// Immutable after construction; drawing replays the precomputed line list.
pub struct Grid {
    covered: Vec2,
    spacing: Vec2,
    lines: Vec<(Vec2, Vec2)>,
}

impl Grid {
    /// Build the line list. Both `covered` and `spacing` must be positive
    /// in each axis.
    ///
    /// Lines start at offset 0. When `covered` is not an exact multiple of
    /// `spacing` the far edge of the last partial cell has no closing line;
    /// that is accepted, not corrected.
    pub fn new(covered: Vec2, spacing: Vec2) -> Self {
        let mut lines = Vec::new();

        let cols = (covered.x / spacing.x).floor() as u32;
        for x in 0..cols {
            let x = spacing.x * x as f32;
            lines.push((vec2(x, 0.0), vec2(x, covered.y)));
        }

        let rows = (covered.y / spacing.y).floor() as u32;
        for y in 0..rows {
            let y = spacing.y * y as f32;
            lines.push((vec2(0.0, y), vec2(covered.x, y)));
        }

        Self {
            covered,
            spacing,
            lines,
        }
    }

    /// Pixel extent the grid covers, for bounds checks
    pub fn covered_size(&self) -> Vec2 {
        self.covered
    }

    /// Floor a pixel position down to the nearest lower multiple of the
    /// cell spacing in each axis.
    ///
    /// Negative coordinates floor to negative multiples, so positions left
    /// of or above the grid stay out of bounds.
    pub fn snap(&self, pos: Vec2) -> Vec2 {
        vec2(
            (pos.x / self.spacing.x).floor() * self.spacing.x,
            (pos.y / self.spacing.y).floor() * self.spacing.y,
        )
    }

    pub fn lines(&self) -> &[(Vec2, Vec2)] {
        &self.lines
    }

    pub fn draw(&self) {
        for (a, b) in self.lines() {
            draw_line(a.x, a.y, b.x, b.y, 1.0, GRID_LINE_COLOR);
        }
    }
}
