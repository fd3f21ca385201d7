//! The draggable surface: a positioned element that also acts as a button.

use super::state::DragPhase;
use crate::player::Anchor;
use crate::settings::WidgetSettings;
use crate::types::{PositionStyle, Viewport};
use std::time::Duration;
use tracing::debug;

/// What pointer-up decided for the gesture that just ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    /// No gesture of ours was in progress
    Ignored,
    /// Press and release without crossing the threshold
    Activate,
    /// The element was moved; no activation
    Dragged,
}

/// What to do with a native click on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDisposition {
    /// Click without a preceding pointer gesture (keyboard, assistive tech)
    Activate,
    /// Trailing click of a gesture already decided at pointer-up
    Suppressed,
    /// Click on an excluded sub-element
    Excluded,
}

/// Drag-to-reposition with click-vs-drag disambiguation.
///
/// Owns the element's position style. Until the first real drag the style is
/// derived from the corner anchor and follows viewport changes; afterwards it
/// is the user's explicit left/top placement and stays put.
#[derive(Debug, Clone)]
pub struct DraggableSurface {
    pub(super) phase: DragPhase,
    pub(super) style: PositionStyle,
    pub(super) has_dragged: bool,
    pub(super) user_placed: bool,
    pub(super) excluded: Vec<String>,
    pub(super) threshold: f32,
    pub(super) grace: Duration,
    anchor: Anchor,
    viewport: Viewport,
}

impl DraggableSurface {
    pub fn new(anchor: Anchor, viewport: Viewport, settings: &WidgetSettings) -> Self {
        Self {
            phase: DragPhase::Idle,
            style: anchor.style_for(viewport),
            has_dragged: false,
            user_placed: false,
            excluded: Vec::new(),
            threshold: settings.drag_threshold_px,
            grace: settings.click_grace(),
            anchor,
            viewport,
        }
    }

    /// Presses starting inside an element carrying `class_name` are not ours.
    pub fn exclude(mut self, class_name: impl Into<String>) -> Self {
        self.excluded.push(class_name.into());
        self
    }

    pub fn style(&self) -> PositionStyle {
        self.style
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Sticky per gesture; cleared only when the next gesture starts.
    pub fn has_dragged(&self) -> bool {
        self.has_dragged
    }

    pub fn is_dragging(&self) -> bool {
        self.phase.is_in_progress()
    }

    /// The user has moved the element at least once.
    pub fn is_user_placed(&self) -> bool {
        self.user_placed
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Viewport changed. Re-anchors unless a drag is in progress or the
    /// user already placed the element. Returns true if the style changed.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        self.viewport = viewport;
        if self.phase.is_in_progress() || self.user_placed {
            debug!(
                dragging = self.phase.is_in_progress(),
                user_placed = self.user_placed,
                "Resize keeps current placement"
            );
            return false;
        }
        let style = self.anchor.style_for(viewport);
        let changed = style != self.style;
        self.style = style;
        changed
    }

    pub(super) fn is_excluded(&self, target: &super::TargetPath) -> bool {
        self.excluded.iter().any(|name| target.closest(name))
    }
}
