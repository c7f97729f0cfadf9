//! Library exports for reusing swift-doodle subsystems.
//!
//! Exposes the drawing surface, hand-drawn renderer and configuration types so
//! that tests and tools (e.g. the schema dumper) can drive them without a
//! Wayland session.

pub mod config;
pub mod draw;
pub mod input;

pub use config::Config;
