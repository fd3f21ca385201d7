//! Core geometry and view types shared by every component.
//!
//! Coordinates are viewport (client) pixels unless a name says otherwise.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A position in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An on-screen rectangle, as reported by a bounding-client-rect query.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub origin: Point,
    pub size: Size,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Position of `p` relative to these bounds, in percent of width/height.
    ///
    /// Returns `None` for degenerate (zero-sized) bounds.
    pub fn percent_of(&self, p: Point) -> Option<Point> {
        if self.size.width <= 0.0 || self.size.height <= 0.0 {
            return None;
        }
        Some(Point::new(
            (p.x - self.left()) / self.size.width * 100.0,
            (p.y - self.top()) / self.size.height * 100.0,
        ))
    }
}

/// Browser viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Explicit left/top/right/bottom placement. `None` renders as `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionStyle {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
}

impl PositionStyle {
    /// Placement pinned to an explicit top-left corner.
    pub fn at(top_left: Point) -> Self {
        Self {
            left: Some(top_left.x),
            top: Some(top_left.y),
            right: None,
            bottom: None,
        }
    }

    /// Resolve the top-left corner for an element of `size` in `viewport`.
    pub fn resolve(&self, size: Size, viewport: Viewport) -> Point {
        let x = match (self.left, self.right) {
            (Some(left), _) => left,
            (None, Some(right)) => viewport.width - right - size.width,
            (None, None) => 0.0,
        };
        let y = match (self.top, self.bottom) {
            (Some(top), _) => top,
            (None, Some(bottom)) => viewport.height - bottom - size.height,
            (None, None) => 0.0,
        };
        Point::new(x, y)
    }
}

/// How an element escapes the host page's layout and stacking contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StackingLayer {
    /// Rendered into a container attached directly to the document body
    pub detached: bool,
    /// `position: fixed` relative to the viewport
    pub viewport_fixed: bool,
    pub z_index: i32,
}

impl StackingLayer {
    pub const fn top_level(z_index: i32) -> Self {
        Self {
            detached: true,
            viewport_fixed: true,
            z_index,
        }
    }
}

/// Result of feeding one input event to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EventOutcome {
    /// Handler consumed the event
    pub handled: bool,
    /// Host should call `preventDefault()` (suppress scroll/selection)
    pub prevent_default: bool,
    /// Host should stop the event from reaching ancestors
    pub stop_propagation: bool,
}

impl EventOutcome {
    pub const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
        stop_propagation: false,
    };

    pub const fn handled() -> Self {
        Self {
            handled: true,
            prevent_default: false,
            stop_propagation: false,
        }
    }

    pub const fn prevent_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }

    pub const fn stop_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }
}
