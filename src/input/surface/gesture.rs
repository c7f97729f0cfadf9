use crate::draw::{RoughCanvas, RoughOptions, clear_context};
use crate::input::mode::ShapeMode;
use log::debug;

use super::DrawingSurface;

impl<R: RoughCanvas> DrawingSurface<R> {
    /// Starts a gesture at `(x, y)`.
    ///
    /// Records the anchor point. In freehand mode a new path is started at
    /// the anchor; nothing is stroked until the pointer moves.
    pub fn begin_gesture(&mut self, x: f64, y: f64) {
        let (Some(ctx), Some(_)) = (&self.context, &self.rough) else {
            return;
        };

        self.drawing = true;
        self.moved = false;
        self.anchor = (x, y);

        if self.mode == ShapeMode::Freehand {
            ctx.new_path();
            ctx.move_to(x, y);
        }
        debug!("Gesture started at ({:.1}, {:.1}) in {} mode", x, y, self.mode);
    }

    /// Extends the active gesture to `(x, y)`.
    ///
    /// Freehand mode strokes the path so far and keeps it, so strokes build
    /// up and are never erased. Shape modes wipe the whole raster and draw a
    /// single preview shape spanning anchor and pointer.
    ///
    /// Returns `true` if the raster was drawn on.
    pub fn continue_gesture(&mut self, x: f64, y: f64) -> bool {
        if !self.drawing {
            return false;
        }
        let (Some(ctx), Some(rough)) = (&self.context, &mut self.rough) else {
            return false;
        };

        self.moved = true;
        match self.mode {
            ShapeMode::Freehand => {
                ctx.line_to(x, y);
                let _ = ctx.stroke_preserve();
            }
            mode => {
                clear_context(ctx);
                draw_shape(rough, mode, self.anchor, (x, y), &self.shape_options);
            }
        }
        true
    }

    /// Ends the active gesture. Whatever is on the raster stays there.
    pub fn end_gesture(&mut self) {
        if self.drawing {
            debug!("Gesture ended");
        }
        self.drawing = false;
    }

    /// Advances to the next shape mode, regardless of gesture state.
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
        debug!("Shape mode switched to {}", self.mode);
    }
}

/// Roughness of rectangle, circle and ellipse outlines.
const SHAPE_ROUGHNESS: f64 = 1.0;

/// Issues the hand-drawn primitive for `mode` spanning anchor and pointer.
///
/// Sizes are raw signed deltas; the circle diameter is the horizontal delta
/// alone. The triangle takes `options` unchanged.
fn draw_shape<R: RoughCanvas>(
    rough: &mut R,
    mode: ShapeMode,
    (x0, y0): (f64, f64),
    (x1, y1): (f64, f64),
    options: &RoughOptions,
) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let mid_x = x0 + dx / 2.0;
    let mid_y = y0 + dy / 2.0;
    let pinned = options.with_roughness(SHAPE_ROUGHNESS);

    match mode {
        ShapeMode::Rectangle => rough.rectangle(x0, y0, dx, dy, &pinned),
        ShapeMode::Circle => rough.circle(mid_x, mid_y, dx, &pinned),
        ShapeMode::Ellipse => rough.ellipse(mid_x, mid_y, dx, dy, &pinned),
        ShapeMode::Triangle => rough.polygon(&[(x0, y1), (x1, y1), (mid_x, y0)], options),
        ShapeMode::Freehand => {}
    }
}
