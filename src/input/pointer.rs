//! Unified mouse/touch input.
//!
//! Host event listeners translate DOM mouse and touch events into one
//! `PointerEvent` so every handler reads coordinates the same way.

use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Class names from the event target up to the listening element.
///
/// Lets handlers answer `target.closest(".name")` without a DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetPath(Vec<String>);

impl TargetPath {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// True if the target or one of its ancestors carries `name`.
    pub fn closest(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One mouse or touch event.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// `clientX/clientY` of a mouse event
    pub position: Option<Point>,
    /// Fingers currently on the surface
    pub touches: Vec<Point>,
    /// Fingers that changed in this event (the lifted ones on touch-end)
    pub changed_touches: Vec<Point>,
    pub target: TargetPath,
    pub at: Instant,
}

impl PointerEvent {
    pub fn mouse(position: Point, at: Instant) -> Self {
        Self {
            kind: PointerKind::Mouse,
            position: Some(position),
            touches: Vec::new(),
            changed_touches: Vec::new(),
            target: TargetPath::default(),
            at,
        }
    }

    /// Touch start or move with the given fingers down.
    pub fn touch(touches: Vec<Point>, at: Instant) -> Self {
        Self {
            kind: PointerKind::Touch,
            position: None,
            changed_touches: touches.clone(),
            touches,
            target: TargetPath::default(),
            at,
        }
    }

    /// Touch end: `lifted` fingers left the surface, `remaining` are still down.
    pub fn touch_end(lifted: Vec<Point>, remaining: Vec<Point>, at: Instant) -> Self {
        Self {
            kind: PointerKind::Touch,
            position: None,
            touches: remaining,
            changed_touches: lifted,
            target: TargetPath::default(),
            at,
        }
    }

    pub fn with_target(mut self, target: TargetPath) -> Self {
        self.target = target;
        self
    }

    /// The single coordinate a handler should use, if the event has one.
    pub fn client_point(&self) -> Option<Point> {
        match self.kind {
            PointerKind::Mouse => self.position,
            PointerKind::Touch => self
                .touches
                .first()
                .or(self.changed_touches.first())
                .copied(),
        }
    }

    /// Coordinate of a release: the lifted finger on touch-end, even while
    /// other fingers stay down.
    pub fn release_point(&self) -> Option<Point> {
        match self.kind {
            PointerKind::Mouse => self.position,
            PointerKind::Touch => self
                .changed_touches
                .first()
                .or(self.touches.first())
                .copied(),
        }
    }

    pub fn is_touch(&self) -> bool {
        self.kind == PointerKind::Touch
    }

    /// Fingers down. Always 0 for mouse events.
    pub fn touch_count(&self) -> usize {
        match self.kind {
            PointerKind::Mouse => 0,
            PointerKind::Touch => self.touches.len(),
        }
    }

    pub fn is_multi_touch(&self) -> bool {
        self.touch_count() >= 2
    }

    /// First two fingers, for pinch geometry.
    pub fn two_fingers(&self) -> Option<(Point, Point)> {
        match self.touches.as_slice() {
            [a, b, ..] if self.is_touch() => Some((*a, *b)),
            _ => None,
        }
    }
}
