//! Input handling and gesture state.
//!
//! This module translates backend pointer events into drawing operations.
//! It tracks whether a gesture is in progress, where it started, and which
//! shape mode a drag produces.

pub mod events;
pub mod mode;
pub mod surface;

// Re-export commonly used types at module level
pub use events::{MouseButton, PointerEvent};
pub use mode::ShapeMode;
pub use surface::DrawingSurface;
