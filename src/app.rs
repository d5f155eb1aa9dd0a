//! Editor state - placed blocks, active stamp color, stamp debounce
//!
//! All state lives on one thread and is mutated only between frames; at
//! most one of stamp/erase happens per frame, with stamping taking
//! priority in the main loop.

use macroquad::prelude::*;

use crate::block::Block;
use crate::config::EditorConfig;
use crate::ui::STAMP_WHITE;

/// Minimum time between two accepted stamps, in seconds
pub const STAMP_DEBOUNCE: f64 = 0.025;

pub struct EditorState {
    /// Placed blocks in insertion order (also draw order). Duplicates at
    /// the same cell are allowed; erase removes the first match only.
    pub blocks: Vec<Block>,
    pub active_color: Color,
    last_stamp_time: f64,
    config: EditorConfig,
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            blocks: Vec::new(),
            active_color: STAMP_WHITE,
            last_stamp_time: -1.0,
            config,
        }
    }

    /// Whether enough time has passed since the last accepted stamp
    pub fn debounce_ready(&self, now: f64) -> bool {
        now - self.last_stamp_time > STAMP_DEBOUNCE
    }

    /// Try to place a block at an already-snapped position, checked
    /// against the grid's covered extent.
    ///
    /// The debounce timer resets on every accepted press, including one
    /// whose position falls outside the grid and places nothing. Returns
    /// whether a block was placed.
    pub fn try_stamp(&mut self, snapped: Vec2, bounds: Vec2, now: f64) -> bool {
        if !self.debounce_ready(now) {
            return false;
        }
        self.last_stamp_time = now;

        let in_bounds =
            snapped.x >= 0.0 && snapped.y >= 0.0 && snapped.x < bounds.x && snapped.y < bounds.y;
        if in_bounds {
            self.blocks
                .push(Block::new(snapped, self.config.cell(), self.active_color));
        }
        in_bounds
    }

    /// Remove the first block at an already-snapped position, if any.
    /// Never touches more than one block; a miss is a no-op.
    pub fn erase(&mut self, snapped: Vec2) -> bool {
        let probe = Block::new(snapped, self.config.cell(), self.active_color);
        if let Some(i) = self.blocks.iter().position(|b| *b == probe) {
            self.blocks.remove(i);
            true
        } else {
            false
        }
    }

    pub fn draw_blocks(&self) {
        for block in &self.blocks {
            block.draw();
        }
    }
}
