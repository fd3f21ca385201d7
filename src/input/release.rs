//! Pointer/touch up and the trailing native click.
//!
//! Activation is decided here, at release, from the gesture's `has_dragged`
//! flag. The click the browser fires afterwards is swallowed while the grace
//! window is open, whatever order pointer-up and click arrive in.

use super::pointer::PointerEvent;
use super::state::DragPhase;
use super::surface::{ClickDisposition, DraggableSurface, DragRelease};
use std::time::Instant;
use tracing::debug;

impl DraggableSurface {
    pub fn end(&mut self, event: &PointerEvent) -> DragRelease {
        if !self.phase.is_in_progress() {
            return DragRelease::Ignored;
        }

        let dragged = self.has_dragged;
        if dragged {
            self.user_placed = true;
        }
        self.phase = DragPhase::Settling {
            dragged,
            until: event.at + self.grace,
        };

        if dragged {
            debug!(style = ?self.style, "Drag finished");
            DragRelease::Dragged
        } else {
            DragRelease::Activate
        }
    }

    pub fn click(&mut self, event: &PointerEvent) -> ClickDisposition {
        if self.is_excluded(&event.target) {
            return ClickDisposition::Excluded;
        }
        if self.phase.is_in_progress() || self.phase.in_grace_window(event.at) {
            return ClickDisposition::Suppressed;
        }
        ClickDisposition::Activate
    }

    /// Close the grace window once it has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.phase.is_settling() && !self.phase.in_grace_window(now) {
            self.phase.reset();
        }
    }
}
