//! Layer-surface geometry and shared memory buffers for the Wayland backend.

use anyhow::{Context, Result};
use log::{info, warn};
use smithay_client_toolkit::{
    shell::wlr_layer::LayerSurface,
    shm::{Shm, slot::SlotPool},
};

/// Placement of the raster inside the layer surface.
///
/// The surface is the raster plus a margin on every side wide enough for the
/// border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    canvas_width: u32,
    canvas_height: u32,
    margin: u32,
}

impl CanvasLayout {
    pub fn new(canvas_width: u32, canvas_height: u32, border_width: f64) -> Self {
        let margin = if border_width.is_finite() && border_width > 0.0 {
            border_width.ceil() as u32
        } else {
            0
        };
        Self {
            canvas_width,
            canvas_height,
            margin,
        }
    }

    /// Size to request from the compositor.
    pub fn surface_size(&self) -> (u32, u32) {
        (
            self.canvas_width + 2 * self.margin,
            self.canvas_height + 2 * self.margin,
        )
    }

    /// Offset of the raster's top-left corner in surface coordinates.
    pub fn origin(&self) -> f64 {
        self.margin as f64
    }

    /// Shifts a surface-local position into raster coordinates without
    /// bounds checking.
    pub fn to_local(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (x - self.origin(), y - self.origin())
    }

    /// Converts a surface-local position into raster coordinates.
    ///
    /// Returns `None` when the position falls on the border or outside.
    pub fn to_canvas(&self, position: (f64, f64)) -> Option<(f64, f64)> {
        let (cx, cy) = self.to_local(position);
        let inside = cx >= 0.0
            && cy >= 0.0
            && cx < self.canvas_width as f64
            && cy < self.canvas_height as f64;
        inside.then_some((cx, cy))
    }
}

/// Tracks the layer surface, its buffer pool, and the configured size.
pub struct SurfaceState {
    layer_surface: Option<LayerSurface>,
    pool: Option<SlotPool>,
    layout: CanvasLayout,
    width: u32,
    height: u32,
    configured: bool,
    frame_callback_pending: bool,
}

impl SurfaceState {
    /// Creates an unconfigured surface state sized for `layout`.
    pub fn new(layout: CanvasLayout) -> Self {
        let (width, height) = layout.surface_size();
        Self {
            layer_surface: None,
            pool: None,
            layout,
            width,
            height,
            configured: false,
            frame_callback_pending: false,
        }
    }

    pub fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    /// Assigns the layer surface produced during startup.
    pub fn set_layer_surface(&mut self, surface: LayerSurface) {
        self.layer_surface = Some(surface);
    }

    /// Returns the current layer surface, if initialized.
    pub fn layer_surface(&self) -> Option<&LayerSurface> {
        self.layer_surface.as_ref()
    }

    /// Applies a compositor configure, returning `true` if the size changed.
    ///
    /// A zero dimension means "client decides" and keeps the requested size.
    /// When the size changes, the buffer pool becomes invalid and is dropped.
    pub fn apply_configure(&mut self, width: u32, height: u32) -> bool {
        let (wanted_w, wanted_h) = self.layout.surface_size();
        let width = if width == 0 { wanted_w } else { width };
        let height = if height == 0 { wanted_h } else { height };

        if (width, height) != (wanted_w, wanted_h) {
            warn!(
                "Compositor configured {}x{} instead of {}x{}; canvas may be clipped",
                width, height, wanted_w, wanted_h
            );
        }

        let changed = self.width != width || self.height != height;
        self.width = width;
        self.height = height;
        if changed {
            self.pool = None;
        }
        self.configured = true;
        changed
    }

    /// Current surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether the surface has completed its initial configure.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Ensures a shared memory pool large enough for `buffer_count` frames exists.
    pub fn ensure_pool(&mut self, shm: &Shm, buffer_count: usize) -> Result<&mut SlotPool> {
        if self.pool.is_none() {
            let buffer_size = (self.width * self.height * 4) as usize;
            let pool_size = buffer_size * buffer_count;
            info!(
                "Creating SlotPool ({}x{}, {} bytes, {} buffers)",
                self.width, self.height, pool_size, buffer_count
            );
            let pool = SlotPool::new(pool_size, shm).context("Failed to create slot pool")?;
            self.pool = Some(pool);
        }

        self.pool
            .as_mut()
            .context("Buffer pool not initialized despite previous check")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_adds_margin_on_both_sides() {
        let layout = CanvasLayout::new(800, 600, 1.0);
        assert_eq!(layout.surface_size(), (802, 602));

        let layout = CanvasLayout::new(800, 600, 2.5);
        assert_eq!(layout.surface_size(), (806, 606));
    }

    #[test]
    fn borderless_layout_has_no_margin() {
        let layout = CanvasLayout::new(800, 600, 0.0);
        assert_eq!(layout.surface_size(), (800, 600));
        assert_eq!(layout.to_canvas((0.0, 0.0)), Some((0.0, 0.0)));
    }

    #[test]
    fn to_canvas_subtracts_margin() {
        let layout = CanvasLayout::new(800, 600, 1.0);
        assert_eq!(layout.to_canvas((11.0, 21.0)), Some((10.0, 20.0)));
        assert_eq!(layout.to_canvas((800.5, 600.5)), Some((799.5, 599.5)));
    }

    #[test]
    fn to_local_keeps_positions_off_the_canvas() {
        let layout = CanvasLayout::new(800, 600, 2.0);
        assert_eq!(layout.to_local((1.0, 700.0)), (-1.0, 698.0));
        assert_eq!(layout.to_local((12.0, 22.0)), (10.0, 20.0));
    }

    #[test]
    fn to_canvas_rejects_border() {
        let layout = CanvasLayout::new(800, 600, 1.0);
        assert_eq!(layout.to_canvas((0.5, 300.0)), None);
        assert_eq!(layout.to_canvas((300.0, 601.5)), None);
        assert_eq!(layout.to_canvas((801.0, 300.0)), None);
    }

    #[test]
    fn configure_with_zero_keeps_requested_size() {
        let mut state = SurfaceState::new(CanvasLayout::new(800, 600, 1.0));
        assert!(!state.is_configured());
        assert!(!state.apply_configure(0, 0));
        assert!(state.is_configured());
        assert_eq!((state.width(), state.height()), (802, 602));

        assert!(state.apply_configure(640, 480));
        assert_eq!((state.width(), state.height()), (640, 480));
    }
}
