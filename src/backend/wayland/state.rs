// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; owns the drawing surface and presents its raster on each render.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{WaylandSurface, wlr_layer::LayerShell},
    shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::{
    config::Config,
    input::{DrawingSurface, PointerEvent},
};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,

    // Drawing state
    pub(super) drawing: DrawingSurface,
    pub(super) pointer_in_canvas: bool,
    pub(super) needs_redraw: bool,
    pub(super) should_exit: bool,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        surface: SurfaceState,
        config: Config,
        drawing: DrawingSurface,
    ) -> Self {
        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface,
            config,
            drawing,
            pointer_in_canvas: false,
            needs_redraw: true,
            should_exit: false,
        }
    }

    /// Feeds a raster-local pointer event to the drawing surface.
    pub(super) fn dispatch_pointer(&mut self, event: PointerEvent) {
        if self.drawing.handle_event(event) {
            self.needs_redraw = true;
        }
    }

    /// Tracks the pointer crossing between the canvas and its border.
    ///
    /// Leaving the canvas area ends the gesture just like leaving the surface.
    /// Returns the raster-local position when the pointer is over the canvas.
    pub(super) fn track_pointer(&mut self, position: (f64, f64)) -> Option<(f64, f64)> {
        let local = self.surface.layout().to_canvas(position);
        match (local.is_some(), self.pointer_in_canvas) {
            (true, false) => self.pointer_in_canvas = true,
            (false, true) => {
                self.pointer_in_canvas = false;
                debug!("Pointer left canvas area");
                self.dispatch_pointer(PointerEvent::Leave);
            }
            _ => {}
        }
        local
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: This unsafe block creates a Cairo surface from raw memory buffer.
        // Safety invariants that must be maintained:
        // 1. `canvas` is a valid mutable slice from SlotPool with exactly (width * height * 4) bytes
        // 2. The buffer format ARgb32 matches the allocation (4 bytes per pixel)
        // 3. The stride (width * 4) correctly represents the number of bytes per row
        // 4. `cairo_surface` and `ctx` are explicitly dropped before the buffer is committed to Wayland
        // 5. No other references to this memory exist during Cairo's usage
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;
        self.paint_frame(&ctx)?;

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        let wl_surface = self
            .surface
            .layer_surface()
            .context("Layer surface not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);

        if self.config.performance.enable_vsync {
            wl_surface.frame(qh, wl_surface.clone());
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }

    /// Paints page background, border and raster onto `ctx`.
    fn paint_frame(&self, ctx: &cairo::Context) -> Result<()> {
        let canvas = &self.config.canvas;
        let raster = self.drawing.raster();
        let origin = self.surface.layout().origin();

        ctx.set_operator(cairo::Operator::Source);
        canvas.background.to_color().set_source(ctx);
        ctx.paint().context("Failed to paint background")?;
        ctx.set_operator(cairo::Operator::Over);

        if canvas.border_width > 0.0 {
            let half = canvas.border_width / 2.0;
            canvas.border_color.to_color().set_source(ctx);
            ctx.set_line_width(canvas.border_width);
            ctx.rectangle(
                origin - half,
                origin - half,
                raster.width() as f64 + canvas.border_width,
                raster.height() as f64 + canvas.border_width,
            );
            let _ = ctx.stroke();
        }

        ctx.set_source_surface(raster.surface(), origin, origin)
            .context("Failed to use raster as source")?;
        ctx.rectangle(origin, origin, raster.width() as f64, raster.height() as f64);
        ctx.fill().context("Failed to paint raster")?;
        Ok(())
    }
}
