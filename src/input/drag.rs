//! Pointer/touch move while the surface is pressed.
//!
//! Moves arrive at display rate, so the early exits come first and only the
//! position style is touched per call.

use super::pointer::PointerEvent;
use super::surface::DraggableSurface;
use crate::profile_scope;
use crate::types::{EventOutcome, PositionStyle};
use tracing::debug;

impl DraggableSurface {
    pub fn move_to(&mut self, event: &PointerEvent) -> EventOutcome {
        profile_scope!("drag_move");

        if event.is_multi_touch() {
            return EventOutcome::IGNORED;
        }
        let threshold = self.threshold;
        let Some(state) = self.phase.drag_state_mut() else {
            return EventOutcome::IGNORED;
        };
        let Some(point) = event.client_point() else {
            return EventOutcome::IGNORED;
        };

        if state.track(point, threshold) {
            debug!("Drag threshold crossed");
            self.has_dragged = true;
        }

        // Left/top take over; right/bottom cleared so the corner anchor no longer applies
        self.style = PositionStyle::at(state.top_left_for(point));

        EventOutcome::handled().prevent_default()
    }
}
