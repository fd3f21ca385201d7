//! Pointer/touch down on the draggable surface.

use super::pointer::PointerEvent;
use super::state::{DragPhase, DragState};
use super::surface::DraggableSurface;
use crate::types::{Bounds, EventOutcome};
use tracing::trace;

impl DraggableSurface {
    /// Begin a gesture. `element` is the surface's current on-screen rect.
    pub fn start(&mut self, event: &PointerEvent, element: Bounds) -> EventOutcome {
        if event.is_multi_touch() {
            // A second finger turns the gesture into a pinch, never a drag
            if self.phase.is_in_progress() {
                trace!("Second finger down, abandoning press");
                self.phase.reset();
            }
            return EventOutcome::IGNORED;
        }

        if self.is_excluded(&event.target) {
            return EventOutcome::IGNORED;
        }

        let Some(point) = event.client_point() else {
            return EventOutcome::IGNORED;
        };

        self.has_dragged = false;
        self.phase = DragPhase::Pressed(DragState::new(point, element.origin));
        trace!(x = point.x, y = point.y, "Press started");

        EventOutcome::handled().prevent_default()
    }
}
