//! Rendering primitives (Cairo-based).
//!
//! This module defines the core drawing types used by the sketch surface:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Raster`]: the persistent pixel surface everything is drawn onto
//! - [`RoughCanvas`]: hand-drawn primitives, implemented for Cairo by [`RoughCairo`]
//! - [`StrokeStyle`]: pen settings applied to the freehand context

pub mod color;
pub mod raster;
pub mod rough;

// Re-export commonly used types at module level
pub use color::Color;
pub use raster::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Raster, RasterError, clear_context};
pub use rough::{RoughCairo, RoughCanvas, RoughOptions};

/// Pen settings for freehand strokes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Line width in pixels
    pub width: f64,
    /// Stroke color
    pub color: Color,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 5.0,
            color: color::BLACK,
        }
    }
}

impl StrokeStyle {
    /// Configures `ctx` with this style and round joins/caps.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_line_join(cairo::LineJoin::Round);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_width(self.width);
        self.color.set_source(ctx);
    }
}
