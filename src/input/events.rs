//! Generic pointer event types for cross-backend compatibility.

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (ignored by the surface)
    Right,
    /// Middle mouse button (ignored by the surface)
    Middle,
}

/// Pointer activity in raster-local coordinates.
///
/// Backend implementations translate their native pointer events into these
/// values before handing them to [`crate::input::DrawingSurface::handle_event`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A button went down at `(x, y)`
    Press { button: MouseButton, x: f64, y: f64 },
    /// The pointer moved to `(x, y)`
    Motion { x: f64, y: f64 },
    /// A button came up at `(x, y)`
    Release { button: MouseButton, x: f64, y: f64 },
    /// The pointer left the surface
    Leave,
}
