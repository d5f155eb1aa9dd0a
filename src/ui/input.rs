//! Polled mouse state

use macroquad::prelude::*;

use super::Rect;

/// Instantaneous mouse state, sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub right_down: bool,
}

impl MouseState {
    /// Sample the current pointer position and button states from the window
    pub fn poll() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            right_down: is_mouse_button_down(MouseButton::Right),
        }
    }

    /// Pointer position as a vector (window coordinates, may fall outside
    /// the visible area)
    pub fn pos(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }
}
