//! Small immediate-mode UI helpers for the editor
//!
//! - Rectangle-based hit testing
//! - Polled mouse state
//! - Shared colors

mod input;
mod rect;
mod theme;

pub use input::*;
pub use rect::*;
pub use theme::*;
