//! Desktop hover magnifier: origin follows the mouse, no state machine.

use crate::constants::DEFAULT_ORIGIN_PERCENT;
use crate::input::PointerEvent;
use crate::types::{Bounds, Point};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverMagnifier {
    origin: Option<Point>,
}

impl Default for HoverMagnifier {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverMagnifier {
    pub fn new() -> Self {
        Self { origin: None }
    }

    pub fn pointer_move(&mut self, event: &PointerEvent, image: Bounds) {
        if event.is_touch() {
            return;
        }
        if let Some(origin) = event.client_point().and_then(|p| image.percent_of(p)) {
            self.origin = Some(origin);
        }
    }

    pub fn pointer_leave(&mut self) {
        self.origin = None;
    }

    pub fn is_hovering(&self) -> bool {
        self.origin.is_some()
    }

    /// Current transform origin, centered when not hovering.
    pub fn origin(&self) -> Point {
        self.origin
            .unwrap_or(Point::new(DEFAULT_ORIGIN_PERCENT, DEFAULT_ORIGIN_PERCENT))
    }
}
