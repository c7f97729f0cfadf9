// Coordinates backend startup/shutdown and drives the event loop while delegating
// rendering & protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{Anchor, KeyboardInteractivity, Layer, LayerShell},
    },
    shm::Shm,
};
use wayland_client::{Connection, globals::registry_queue_init};

use super::{
    state::WaylandState,
    surface::{CanvasLayout, SurfaceState},
};
use crate::{
    config::Config,
    draw::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Raster},
    input::{DrawingSurface, ShapeMode},
};

/// Consecutive render failures tolerated before giving up.
const MAX_RENDER_FAILURES: u32 = 10;

/// Wayland backend state
pub struct WaylandBackend {
    initial_mode: Option<ShapeMode>,
}

impl WaylandBackend {
    pub fn new(initial_mode: Option<ShapeMode>) -> Self {
        Self { initial_mode }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        // Connect to Wayland compositor
        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        // Initialize registry and event queue
        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        // Bind global interfaces
        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        let layer_shell =
            LayerShell::bind(&globals, &qh).context("zwlr_layer_shell_v1 not available")?;
        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);
        debug!("Bound compositor, layer shell, shm, outputs and seats");

        // Load configuration
        let config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {:#}. Using defaults.", e);
                Config::default()
            }
        };
        info!("Configuration loaded");
        debug!("  Border width: {:.1}px", config.canvas.border_width);
        debug!("  Stroke width: {:.1}px", config.stroke.width);
        debug!("  Bowing: {:.1}", config.rough.bowing);
        debug!("  Buffer count: {}", config.performance.buffer_count);
        debug!("  VSync: {}", config.performance.enable_vsync);

        let raster = Raster::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
            .context("Failed to allocate drawing raster")?;
        let (raster_width, raster_height) = (raster.width(), raster.height());
        let mut drawing = DrawingSurface::mount(
            raster,
            config.stroke_style(),
            config.shape_options(),
            config.rough.seed,
        );
        let mode = self.initial_mode.unwrap_or(config.drawing.initial_mode);
        drawing.set_mode(mode);
        info!("Starting in {} mode", mode);

        let layout = CanvasLayout::new(raster_width, raster_height, config.canvas.border_width);
        let (surface_width, surface_height) = layout.surface_size();

        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            SurfaceState::new(layout),
            config,
            drawing,
        );

        // Create layer shell surface
        info!("Creating layer shell surface");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let layer_surface = state.layer_shell.create_layer_surface(
            &qh,
            wl_surface,
            Layer::Overlay,
            Some("swift-doodle"),
            None, // Default output
        );

        // No anchors: the compositor centers a fixed-size surface
        layer_surface.set_anchor(Anchor::empty());
        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::OnDemand);
        layer_surface.set_size(surface_width, surface_height);
        layer_surface.commit();

        state.surface.set_layer_surface(layer_surface);
        info!(
            "Layer shell surface created ({}x{})",
            surface_width, surface_height
        );

        let mut consecutive_render_failures = 0u32;

        // Main event loop
        let mut loop_error: Option<anyhow::Error> = None;
        loop {
            if state.should_exit {
                info!("Exit requested, breaking event loop");
                break;
            }

            if let Err(e) = event_queue.blocking_dispatch(&mut state) {
                warn!("Event queue error: {}", e);
                loop_error = Some(anyhow::anyhow!("Wayland event queue error: {}", e));
                break;
            }

            if state.should_exit {
                info!("Exit requested after dispatch, breaking event loop");
                break;
            }

            // Throttle to the display refresh rate when vsync is enabled
            let can_render = state.surface.is_configured()
                && state.needs_redraw
                && (!state.surface.frame_callback_pending()
                    || !state.config.performance.enable_vsync);

            if !can_render {
                continue;
            }

            match state.render(&qh) {
                Ok(()) => {
                    consecutive_render_failures = 0;
                    state.needs_redraw = false;
                    if state.config.performance.enable_vsync {
                        state.surface.set_frame_callback_pending(true);
                    }
                }
                Err(e) => {
                    consecutive_render_failures += 1;
                    warn!(
                        "Rendering error (attempt {}/{}): {}",
                        consecutive_render_failures, MAX_RENDER_FAILURES, e
                    );

                    if consecutive_render_failures >= MAX_RENDER_FAILURES {
                        return Err(anyhow::anyhow!(
                            "Too many consecutive render failures ({}), exiting: {}",
                            consecutive_render_failures,
                            e
                        ));
                    }

                    // Clear redraw flag to avoid infinite error loop
                    state.needs_redraw = false;
                }
            }
        }

        info!("Wayland backend exiting");

        match loop_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
