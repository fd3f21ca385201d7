//! Drag state machine - one authoritative phase per draggable surface.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Pressed     (pointer/single touch down on the element)
//! Pressed  -> Pressed     (move; may set has_exceeded_threshold, never clears it)
//! Pressed  -> Settling    (pointer/touch up - activation decided here)
//! Pressed  -> Idle        (second finger lands - pinch, not drag)
//! Settling -> Idle        (grace window elapsed)
//! Settling -> Pressed     (next gesture starts)
//! ```

use crate::types::Point;
use std::time::Instant;

/// Per-gesture data, created on press and dropped on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Pointer position relative to the element's top-left corner
    pub pointer_offset: Point,
    /// Where the press happened
    pub start_point: Point,
    pub is_pointer_down: bool,
    /// Sticky for the rest of the gesture once set
    pub has_exceeded_threshold: bool,
    pub originated_on_element: bool,
}

impl DragState {
    pub fn new(start_point: Point, element_origin: Point) -> Self {
        Self {
            pointer_offset: start_point - element_origin,
            start_point,
            is_pointer_down: true,
            has_exceeded_threshold: false,
            originated_on_element: true,
        }
    }

    /// Record a move to `point`. Returns true the first time the threshold is crossed.
    pub fn track(&mut self, point: Point, threshold: f32) -> bool {
        if self.has_exceeded_threshold {
            return false;
        }
        let delta = point - self.start_point;
        if delta.x.abs() >= threshold || delta.y.abs() >= threshold {
            self.has_exceeded_threshold = true;
            return true;
        }
        false
    }

    /// New top-left corner for the element under `point`.
    pub fn top_left_for(&self, point: Point) -> Point {
        point - self.pointer_offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,

    Pressed(DragState),

    /// Released; the trailing native click is swallowed until `until`
    Settling { dragged: bool, until: Instant },
}

impl DragPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// A press is active (between down and up)
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::Pressed(_))
    }

    pub fn is_settling(&self) -> bool {
        matches!(self, Self::Settling { .. })
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        match self {
            Self::Pressed(state) => Some(state),
            _ => None,
        }
    }

    pub fn drag_state_mut(&mut self) -> Option<&mut DragState> {
        match self {
            Self::Pressed(state) => Some(state),
            _ => None,
        }
    }

    /// True while `now` is inside the post-release grace window
    pub fn in_grace_window(&self, now: Instant) -> bool {
        matches!(self, Self::Settling { until, .. } if now <= *until)
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
