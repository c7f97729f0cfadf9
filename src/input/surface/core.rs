//! Drawing surface state and mounting.

use crate::draw::{Raster, RoughCairo, RoughCanvas, RoughOptions, StrokeStyle};
use crate::input::mode::ShapeMode;
use log::{debug, warn};

/// Translates pointer gestures into raster drawing operations.
///
/// Holds the only mutable drawing state there is: whether a gesture is in
/// progress, the active [`ShapeMode`], the anchor captured at gesture start,
/// and the 2D context plus hand-drawn renderer bound to the raster. If the
/// context could not be acquired at mount time both stay `None` and every
/// drawing operation quietly does nothing.
pub struct DrawingSurface<R = RoughCairo> {
    /// Pixel surface all output lands on
    pub(super) raster: Raster,
    /// Freehand drawing context (None if unavailable at mount)
    pub(super) context: Option<cairo::Context>,
    /// Hand-drawn renderer bound to the same raster
    pub(super) rough: Option<R>,
    /// True between a press and its matching release/leave
    pub(super) drawing: bool,
    /// Active shape mode
    pub(super) mode: ShapeMode,
    /// Gesture start position
    pub(super) anchor: (f64, f64),
    /// Options passed to every hand-drawn primitive
    pub(super) shape_options: RoughOptions,
    /// The pointer moved while the current gesture was active
    pub(super) moved: bool,
    /// A primary press started on the surface and has not been released yet
    pub(super) press_pending: bool,
}

impl DrawingSurface<RoughCairo> {
    /// Mounts the surface on `raster` with the Cairo hand-drawn renderer.
    ///
    /// `seed` makes the hand-drawn wobble reproducible.
    pub fn mount(
        raster: Raster,
        style: StrokeStyle,
        shape_options: RoughOptions,
        seed: Option<u64>,
    ) -> Self {
        Self::mount_with(raster, style, shape_options, |ctx| {
            RoughCairo::new(ctx.clone(), seed)
        })
    }
}

impl<R: RoughCanvas> DrawingSurface<R> {
    /// Mounts the surface on `raster`, binding a renderer built by `bind`.
    ///
    /// The freehand context gets round joins and caps plus `style`'s width
    /// and color. Failure to acquire the context is logged and leaves the
    /// surface unmounted.
    pub fn mount_with(
        raster: Raster,
        style: StrokeStyle,
        shape_options: RoughOptions,
        bind: impl FnOnce(&cairo::Context) -> R,
    ) -> Self {
        let (context, rough) = match raster.context() {
            Ok(ctx) => {
                style.apply(&ctx);
                let rough = bind(&ctx);
                debug!(
                    "Drawing surface mounted on {}x{} raster",
                    raster.width(),
                    raster.height()
                );
                (Some(ctx), Some(rough))
            }
            Err(err) => {
                warn!("Drawing context unavailable ({}); input will be ignored", err);
                (None, None)
            }
        };

        Self {
            raster,
            context,
            rough,
            drawing: false,
            mode: ShapeMode::default(),
            anchor: (0.0, 0.0),
            shape_options,
            moved: false,
            press_pending: false,
        }
    }

    /// Whether the context and renderer were acquired at mount time.
    pub fn is_mounted(&self) -> bool {
        self.context.is_some() && self.rough.is_some()
    }

    /// Active shape mode.
    pub fn mode(&self) -> ShapeMode {
        self.mode
    }

    /// Selects a shape mode directly (used for the configured initial mode).
    pub fn set_mode(&mut self, mode: ShapeMode) {
        self.mode = mode;
    }

    /// Whether a gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Gesture start position, only while a gesture is in progress.
    pub fn anchor(&self) -> Option<(f64, f64)> {
        self.drawing.then_some(self.anchor)
    }

    /// The raster being drawn on.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Options handed to the hand-drawn renderer.
    pub fn shape_options(&self) -> &RoughOptions {
        &self.shape_options
    }

    /// Hand-drawn renderer, if mounted.
    pub fn renderer(&self) -> Option<&R> {
        self.rough.as_ref()
    }
}
