mod core;
mod dispatch;
mod gesture;

pub use core::DrawingSurface;
