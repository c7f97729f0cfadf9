// Translates pointer frames into raster-local events for the drawing surface.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent as WlPointerEvent, PointerEventKind,
    PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::input::{MouseButton, PointerEvent};

use super::super::state::WaylandState;

fn map_button(button: u32) -> Option<MouseButton> {
    match button {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_RIGHT => Some(MouseButton::Right),
        _ => None,
    }
}

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[WlPointerEvent],
    ) {
        for event in events {
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!(
                        "Pointer entered at ({}, {})",
                        event.position.0, event.position.1
                    );
                    self.track_pointer(event.position);
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                    self.pointer_in_canvas = false;
                    self.dispatch_pointer(PointerEvent::Leave);
                }
                PointerEventKind::Motion { .. } => {
                    if let Some((x, y)) = self.track_pointer(event.position) {
                        self.dispatch_pointer(PointerEvent::Motion { x, y });
                    }
                }
                PointerEventKind::Press { button, .. } => {
                    debug!(
                        "Button {} pressed at ({}, {})",
                        button, event.position.0, event.position.1
                    );
                    let (Some(button), Some((x, y))) =
                        (map_button(button), self.track_pointer(event.position))
                    else {
                        continue;
                    };
                    self.dispatch_pointer(PointerEvent::Press { button, x, y });
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);
                    self.track_pointer(event.position);
                    let Some(button) = map_button(button) else {
                        continue;
                    };
                    // Off-canvas releases still reach the surface so a pending click is dropped
                    let (x, y) = self.surface.layout().to_local(event.position);
                    self.dispatch_pointer(PointerEvent::Release { button, x, y });
                }
                PointerEventKind::Axis { .. } => {}
            }
        }
    }
}
