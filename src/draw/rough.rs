//! Hand-drawn ("rough") rendering of geometric primitives.
//!
//! Shapes are traced as slightly wobbly double strokes so they look sketched
//! by hand. The drawing surface only ever hands this module plain geometric
//! parameters; how the wobble is produced is an implementation detail of
//! [`RoughCairo`].
//!
//! The line and ellipse jitter follows the rough.js approach:
//! - endpoints are offset randomly, so corners overshoot
//! - lines bow slightly around their midpoint
//! - every outline is drawn twice with independent randomness

use super::color::{BLACK, Color};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f64::consts::PI;

/// Number of outline samples used for small ellipses.
const CURVE_STEP_COUNT: f64 = 9.0;
/// How tightly ellipse samples hug the true outline (1.0 = exact radius).
const CURVE_FITTING: f64 = 0.95;

/// Styling knobs accepted by every hand-drawn primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoughOptions {
    /// Overall sketchiness (0 = clean geometry, 1 = slight wobble, 2+ = very sketchy)
    pub roughness: f64,
    /// How far lines bend away from a straight path
    pub bowing: f64,
    /// Upper bound of endpoint jitter in pixels (scaled by roughness)
    pub max_randomness_offset: f64,
    /// Outline width in pixels
    pub stroke_width: f64,
    /// Outline color
    pub stroke: Color,
}

impl Default for RoughOptions {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            max_randomness_offset: 2.0,
            stroke_width: 1.0,
            stroke: BLACK,
        }
    }
}

impl RoughOptions {
    /// Returns a copy with a different roughness.
    pub fn with_roughness(mut self, roughness: f64) -> Self {
        self.roughness = roughness;
        self
    }
}

/// Hand-drawn drawing primitives bound to a raster.
///
/// Sizes may be negative; implementations must accept them and draw the
/// mirrored geometry rather than failing.
pub trait RoughCanvas {
    /// Rectangle with top-left corner `(x, y)` and the given size.
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, options: &RoughOptions);

    /// Circle centered on `(cx, cy)`.
    fn circle(&mut self, cx: f64, cy: f64, diameter: f64, options: &RoughOptions);

    /// Ellipse centered on `(cx, cy)` with the given bounding size.
    fn ellipse(&mut self, cx: f64, cy: f64, width: f64, height: f64, options: &RoughOptions);

    /// Closed polygon through `vertices`.
    fn polygon(&mut self, vertices: &[(f64, f64)], options: &RoughOptions);
}

/// Cairo-backed hand-drawn renderer.
pub struct RoughCairo {
    ctx: cairo::Context,
    rng: StdRng,
}

impl RoughCairo {
    /// Binds the renderer to `ctx`.
    ///
    /// With a `seed` the wobble is reproducible; without one each renderer
    /// draws differently.
    pub fn new(ctx: cairo::Context, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { ctx, rng }
    }

    /// Context this renderer draws on.
    pub fn context(&self) -> &cairo::Context {
        &self.ctx
    }

    /// Random value in `[min, max)` scaled by roughness and `gain`.
    fn offset(&mut self, min: f64, max: f64, options: &RoughOptions, gain: f64) -> f64 {
        let unit: f64 = self.rng.gen_range(0.0..1.0);
        options.roughness * gain * (unit * (max - min) + min)
    }

    /// Random value in `[-x, x)` scaled by roughness.
    fn offset_sym(&mut self, x: f64, options: &RoughOptions, gain: f64) -> f64 {
        self.offset(-x, x, options, gain)
    }

    /// Strokes whatever `trace` appends to a fresh path, isolated from the
    /// caller's context state.
    fn stroke_with(&mut self, options: &RoughOptions, trace: impl FnOnce(&mut Self)) {
        self.ctx.save().ok();
        self.ctx.new_path();
        trace(self);
        options.stroke.set_source(&self.ctx);
        self.ctx.set_line_width(options.stroke_width);
        let _ = self.ctx.stroke();
        self.ctx.restore().ok();
    }

    /// Appends both passes of a sketched line to the current path.
    fn double_line(&mut self, from: (f64, f64), to: (f64, f64), options: &RoughOptions) {
        self.sketch_line(from, to, options, false);
        self.sketch_line(from, to, options, true);
    }

    /// Appends one pass of a sketched line as a cubic curve.
    fn sketch_line(
        &mut self,
        (x1, y1): (f64, f64),
        (x2, y2): (f64, f64),
        options: &RoughOptions,
        overlay: bool,
    ) {
        let length = (x2 - x1).hypot(y2 - y1);
        if length < f64::EPSILON {
            return;
        }

        // Long lines wobble proportionally less
        let gain = if length < 200.0 {
            1.0
        } else if length > 500.0 {
            0.4
        } else {
            -0.0016668 * length + 1.233334
        };

        let mut offset = options.max_randomness_offset;
        if offset * offset * 100.0 > length * length {
            offset = length / 10.0;
        }
        let jitter = if overlay { offset / 2.0 } else { offset };

        let diverge = 0.2 + self.rng.gen_range(0.0..0.2);
        let bow_x = options.bowing * options.max_randomness_offset * (y2 - y1) / 200.0;
        let bow_y = options.bowing * options.max_randomness_offset * (x1 - x2) / 200.0;
        let bow_x = self.offset_sym(bow_x, options, gain);
        let bow_y = self.offset_sym(bow_y, options, gain);

        let start_x = x1 + self.offset_sym(jitter, options, gain);
        let start_y = y1 + self.offset_sym(jitter, options, gain);
        let c1x = bow_x + x1 + (x2 - x1) * diverge + self.offset_sym(jitter, options, gain);
        let c1y = bow_y + y1 + (y2 - y1) * diverge + self.offset_sym(jitter, options, gain);
        let c2x = bow_x + x1 + 2.0 * (x2 - x1) * diverge + self.offset_sym(jitter, options, gain);
        let c2y = bow_y + y1 + 2.0 * (y2 - y1) * diverge + self.offset_sym(jitter, options, gain);
        let end_x = x2 + self.offset_sym(jitter, options, gain);
        let end_y = y2 + self.offset_sym(jitter, options, gain);

        self.ctx.move_to(start_x, start_y);
        self.ctx.curve_to(c1x, c1y, c2x, c2y, end_x, end_y);
    }

    /// Samples one wobbly lap around an ellipse.
    fn ellipse_points(
        &mut self,
        (cx, cy): (f64, f64),
        (rx, ry): (f64, f64),
        increment: f64,
        options: &RoughOptions,
    ) -> Vec<(f64, f64)> {
        let fit = 1.0 - CURVE_FITTING;
        let rx = rx + self.offset_sym(rx * fit, options, 1.0);
        let ry = ry + self.offset_sym(ry * fit, options, 1.0);

        let start = self.offset_sym(0.5, options, 1.0) - PI / 2.0;
        let overlap_scale = self.offset(0.4, 1.0, options, 1.0);
        let overlap = increment * self.offset(0.1, overlap_scale, options, 1.0);

        let mut points = Vec::new();
        // Leading and trailing samples only steer the spline
        points.push((
            cx + 0.9 * rx * (start - increment).cos(),
            cy + 0.9 * ry * (start - increment).sin(),
        ));
        let end = start + 2.0 * PI + overlap;
        let mut angle = start;
        while angle <= end {
            points.push((
                cx + rx * angle.cos() + self.offset_sym(1.0, options, 1.0),
                cy + ry * angle.sin() + self.offset_sym(1.0, options, 1.0),
            ));
            angle += increment;
        }
        points.push((cx + rx * end.cos(), cy + ry * end.sin()));
        points.push((
            cx + 0.98 * rx * (end + increment).cos(),
            cy + 0.98 * ry * (end + increment).sin(),
        ));
        points
    }

    /// Appends a Catmull-Rom spline through `points` (first and last points are guides).
    fn curve_through(&self, points: &[(f64, f64)]) {
        if points.len() < 4 {
            if let Some(&(x, y)) = points.first() {
                self.ctx.move_to(x, y);
            }
            for &(x, y) in points.iter().skip(1) {
                self.ctx.line_to(x, y);
            }
            return;
        }

        self.ctx.move_to(points[1].0, points[1].1);
        for i in 1..points.len() - 2 {
            let (p0, p1, p2, p3) = (points[i - 1], points[i], points[i + 1], points[i + 2]);
            let c1 = (p1.0 + (p2.0 - p0.0) / 6.0, p1.1 + (p2.1 - p0.1) / 6.0);
            let c2 = (p2.0 - (p3.0 - p1.0) / 6.0, p2.1 - (p3.1 - p1.1) / 6.0);
            self.ctx.curve_to(c1.0, c1.1, c2.0, c2.1, p2.0, p2.1);
        }
    }
}

impl RoughCanvas for RoughCairo {
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, options: &RoughOptions) {
        let corners = [
            (x, y),
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
        ];
        self.polygon(&corners, options);
    }

    fn circle(&mut self, cx: f64, cy: f64, diameter: f64, options: &RoughOptions) {
        self.ellipse(cx, cy, diameter, diameter, options);
    }

    fn ellipse(&mut self, cx: f64, cy: f64, width: f64, height: f64, options: &RoughOptions) {
        let rx = (width / 2.0).abs();
        let ry = (height / 2.0).abs();
        if rx < f64::EPSILON && ry < f64::EPSILON {
            return;
        }

        let perimeter_scale = (2.0 * PI * ((rx * rx + ry * ry) / 2.0).sqrt()).sqrt();
        let steps = CURVE_STEP_COUNT
            .max(CURVE_STEP_COUNT / 200f64.sqrt() * perimeter_scale)
            .ceil();
        let increment = 2.0 * PI / steps;

        self.stroke_with(options, |rough| {
            for _ in 0..2 {
                let points = rough.ellipse_points((cx, cy), (rx, ry), increment, options);
                rough.curve_through(&points);
            }
        });
    }

    fn polygon(&mut self, vertices: &[(f64, f64)], options: &RoughOptions) {
        if vertices.len() < 2 {
            return;
        }

        self.stroke_with(options, |rough| {
            for (i, &from) in vertices.iter().enumerate() {
                let to = vertices[(i + 1) % vertices.len()];
                rough.double_line(from, to, options);
            }
        });
    }
}
