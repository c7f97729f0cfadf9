use anyhow::Result;

use crate::input::ShapeMode;

pub mod wayland;

/// Run Wayland backend with full event loop
///
/// # Arguments
/// * `initial_mode` - Optional shape mode to start in (overrides config default)
pub fn run_wayland(initial_mode: Option<ShapeMode>) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(initial_mode);
    backend.run()
}
