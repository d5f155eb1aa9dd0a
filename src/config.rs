//! Editor configuration
//!
//! The cell size and grid extent are runtime values handed to the grid
//! overlay and the editor state, not compile-time constants.

use macroquad::prelude::*;

/// Fixed dimensions of the editor window and its grid
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Edge length of a grid cell and of a placed block, in pixels
    pub cell_size: f32,
    /// Grid extent in cells
    pub grid_cols: u32,
    pub grid_rows: u32,
    /// Window size in logical pixels
    pub window_w: i32,
    pub window_h: i32,
    pub title: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            grid_cols: 28,
            grid_rows: 35,
            window_w: 700,
            window_h: 700,
            title: "TileMap".to_string(),
        }
    }
}

impl EditorConfig {
    /// Pixel extent the grid covers
    pub fn grid_size(&self) -> Vec2 {
        vec2(
            self.cell_size * self.grid_cols as f32,
            self.cell_size * self.grid_rows as f32,
        )
    }

    /// Size of one cell (square)
    pub fn cell(&self) -> Vec2 {
        vec2(self.cell_size, self.cell_size)
    }
}
