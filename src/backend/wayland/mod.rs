// Wayland backend presenting the sketch surface as a centered wlr-layer-shell surface.
mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
