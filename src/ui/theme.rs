//! Shared colors for the editor

use macroquad::prelude::Color;

/// Window clear color
pub const BG_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Grid line color
pub const GRID_LINE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Default stamp color before any palette pick
pub const STAMP_WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Stamp color picked by the green palette entry
pub const STAMP_GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Stamp color picked by the blue palette entry
pub const STAMP_BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
