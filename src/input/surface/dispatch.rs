use crate::draw::RoughCanvas;
use crate::input::events::{MouseButton, PointerEvent};

use super::DrawingSurface;

impl<R: RoughCanvas> DrawingSurface<R> {
    /// Routes a backend pointer event to the gesture operations.
    ///
    /// # Behavior
    /// - Left press: begins a gesture
    /// - Motion: continues the gesture
    /// - Left release: ends the gesture. In a shape mode a release with no
    ///   motion since the press first redraws the (zero-size) shape at the
    ///   release point, wiping the raster. The release then counts as a click
    ///   (cycling the mode) if both press and release landed on the raster,
    ///   even after a drag or a trip off the surface
    /// - Leave: ends the gesture
    /// - Other buttons: ignored
    ///
    /// Releases may carry coordinates outside the raster.
    ///
    /// Returns `true` if the raster changed and should be presented again.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Press {
                button: MouseButton::Left,
                x,
                y,
            } => {
                self.press_pending = true;
                self.begin_gesture(x, y);
                false
            }
            PointerEvent::Motion { x, y } => self.continue_gesture(x, y),
            PointerEvent::Release {
                button: MouseButton::Left,
                x,
                y,
            } => {
                let redrawn = self.drawing
                    && !self.moved
                    && self.mode.is_shape()
                    && self.continue_gesture(x, y);
                self.end_gesture();
                if std::mem::take(&mut self.press_pending) && self.raster.contains(x, y) {
                    self.cycle_mode();
                }
                redrawn
            }
            PointerEvent::Leave => {
                self.end_gesture();
                false
            }
            PointerEvent::Press { .. } | PointerEvent::Release { .. } => false,
        }
    }
}
