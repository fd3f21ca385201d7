//! One carousel axis: active index plus the navigation affordances.

use crate::settings::WidgetSettings;
use crate::types::Point;
use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Keyboard keys the carousel reacts to, by DOM `key` name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
}

impl NavKey {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "PageUp" => Some(Self::PageUp),
            "PageDown" => Some(Self::PageDown),
            _ => None,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Self::ArrowUp | Self::ArrowDown | Self::PageUp | Self::PageDown => Axis::Vertical,
            Self::ArrowLeft | Self::ArrowRight => Axis::Horizontal,
        }
    }

    fn is_forward(self) -> bool {
        matches!(self, Self::ArrowDown | Self::ArrowRight | Self::PageDown)
    }
}

/// An active-index change. Emitted at most once per navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone)]
pub struct CarouselAxis {
    axis: Axis,
    active_index: usize,
    slide_count: usize,
    enabled: bool,
    swipe_min_distance: f32,
}

impl CarouselAxis {
    /// Navigation is enabled only when there is somewhere to go.
    pub fn new(axis: Axis, slide_count: usize, settings: &WidgetSettings) -> Self {
        Self {
            axis,
            active_index: 0,
            slide_count,
            enabled: slide_count > 1,
            swipe_min_distance: settings.swipe_min_distance_px,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Jump to `index` if navigation is enabled.
    pub fn slide_to(&mut self, index: usize) -> Option<SlideChange> {
        if !self.enabled {
            return None;
        }
        self.jump(index)
    }

    /// Programmatic jump, ignores `enabled`.
    pub fn reset_to(&mut self, index: usize) -> Option<SlideChange> {
        self.jump(index)
    }

    fn jump(&mut self, index: usize) -> Option<SlideChange> {
        if index >= self.slide_count || index == self.active_index {
            return None;
        }
        let change = SlideChange {
            from: self.active_index,
            to: index,
        };
        self.active_index = index;
        trace!(axis = ?self.axis, from = change.from, to = change.to, "Slide change");
        Some(change)
    }

    pub fn next(&mut self) -> Option<SlideChange> {
        self.slide_to(self.active_index + 1)
    }

    pub fn prev(&mut self) -> Option<SlideChange> {
        self.slide_to(self.active_index.checked_sub(1)?)
    }

    pub fn key(&mut self, key: NavKey) -> Option<SlideChange> {
        if key.axis() != self.axis {
            return None;
        }
        if key.is_forward() {
            self.next()
        } else {
            self.prev()
        }
    }

    /// Wheel delta along this axis; positive moves forward.
    pub fn wheel(&mut self, delta: f32) -> Option<SlideChange> {
        if delta > 0.0 {
            self.next()
        } else if delta < 0.0 {
            self.prev()
        } else {
            None
        }
    }

    /// Finish a swipe that moved the pointer by `delta`. Dragging content
    /// up/left advances.
    pub fn swipe(&mut self, delta: Point) -> Option<SlideChange> {
        let along = match self.axis {
            Axis::Vertical => delta.y,
            Axis::Horizontal => delta.x,
        };
        if along.abs() < self.swipe_min_distance {
            return None;
        }
        if along < 0.0 {
            self.next()
        } else {
            self.prev()
        }
    }
}
