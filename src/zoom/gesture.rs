//! Pinch-to-zoom state machine for one image slide (touch only).
//!
//! ## State Transitions
//!
//! ```text
//! Idle        -> PinchActive (two-finger touch start)
//! PinchActive -> Idle        (touch end, scale < snap-back)
//! PinchActive -> Locked      (touch end, scale >= snap-back)
//! Locked      -> PinchActive (two-finger touch start)
//! any         -> Idle        (double tap while scaled, slide left)
//! ```
//!
//! While `PinchActive` or `Locked` the carousel must not swipe this slide.

use crate::constants::{DEFAULT_ORIGIN_PERCENT, MIN_ZOOM_SCALE};
use crate::input::PointerEvent;
use crate::profile_scope;
use crate::settings::WidgetSettings;
use crate::types::{Bounds, EventOutcome, Point};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ZoomPhase {
    #[default]
    Idle,
    PinchActive {
        initial_distance: f32,
    },
    /// Zoomed in and held; single finger pans
    Locked,
}

/// Transform applied to the slide's image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoomView {
    pub scale: f32,
    pub origin_x_percent: f32,
    pub origin_y_percent: f32,
    pub locked_for_pan: bool,
    pub swipe_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct ZoomGesture {
    phase: ZoomPhase,
    scale: f32,
    origin: Point,
    last_tap: Option<Instant>,
    max_scale: f32,
    snap_back_scale: f32,
    reset_min_scale: f32,
    double_tap_window: Duration,
}

fn default_origin() -> Point {
    Point::new(DEFAULT_ORIGIN_PERCENT, DEFAULT_ORIGIN_PERCENT)
}

impl ZoomGesture {
    pub fn new(settings: &WidgetSettings) -> Self {
        Self {
            phase: ZoomPhase::Idle,
            scale: MIN_ZOOM_SCALE,
            origin: default_origin(),
            last_tap: None,
            max_scale: settings.max_zoom_scale,
            snap_back_scale: settings.snap_back_scale,
            reset_min_scale: settings.double_tap_reset_min_scale,
            double_tap_window: settings.double_tap_window(),
        }
    }

    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Transform origin in percent of the image box.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The carousel may page this slide by swiping.
    pub fn swipe_enabled(&self) -> bool {
        matches!(self.phase, ZoomPhase::Idle)
    }

    pub fn touch_start(&mut self, event: &PointerEvent) -> EventOutcome {
        if !event.is_touch() {
            return EventOutcome::IGNORED;
        }

        if let Some((a, b)) = event.two_fingers() {
            let initial_distance = a.distance_to(b);
            self.phase = ZoomPhase::PinchActive { initial_distance };
            self.scale = MIN_ZOOM_SCALE;
            self.last_tap = None;
            debug!(initial_distance, "Pinch started");
            return EventOutcome::handled().prevent_default();
        }

        if event.touch_count() != 1 {
            return EventOutcome::IGNORED;
        }

        let is_double_tap = self
            .last_tap
            .is_some_and(|last| event.at.saturating_duration_since(last) < self.double_tap_window);
        if is_double_tap {
            self.last_tap = None;
            if self.scale > self.reset_min_scale {
                debug!(scale = self.scale, "Double tap reset");
                self.reset();
            }
            return EventOutcome::handled().prevent_default().stop_propagation();
        }

        // First tap: wait for a second one without blocking the swipe
        self.last_tap = Some(event.at);
        EventOutcome::IGNORED
    }

    /// `image` is the image's current bounding box.
    pub fn touch_move(&mut self, event: &PointerEvent, image: Bounds) -> EventOutcome {
        profile_scope!("pinch_move");

        match self.phase {
            ZoomPhase::PinchActive { initial_distance } => {
                let Some((a, b)) = event.two_fingers() else {
                    return EventOutcome::IGNORED;
                };
                if initial_distance <= 0.0 {
                    return EventOutcome::handled().prevent_default();
                }
                let ratio = a.distance_to(b) / initial_distance;
                self.scale = ratio.clamp(MIN_ZOOM_SCALE, self.max_scale);
                if let Some(origin) = image.percent_of(a.midpoint(b)) {
                    self.origin = origin;
                }
                trace!(scale = self.scale, "Pinch move");
                EventOutcome::handled().prevent_default().stop_propagation()
            }
            ZoomPhase::Locked if event.touch_count() == 1 => {
                let Some(point) = event.client_point() else {
                    return EventOutcome::IGNORED;
                };
                if let Some(origin) = image.percent_of(point) {
                    self.origin = Point::new(origin.x.clamp(0.0, 100.0), origin.y.clamp(0.0, 100.0));
                }
                EventOutcome::handled().prevent_default().stop_propagation()
            }
            _ => EventOutcome::IGNORED,
        }
    }

    pub fn touch_end(&mut self, event: &PointerEvent) -> EventOutcome {
        if !event.is_touch() || !matches!(self.phase, ZoomPhase::PinchActive { .. }) {
            return EventOutcome::IGNORED;
        }
        if self.scale < self.snap_back_scale {
            debug!(scale = self.scale, "Pinch below snap-back, resetting");
            self.reset();
        } else {
            debug!(scale = self.scale, "Pinch locked");
            self.phase = ZoomPhase::Locked;
        }
        EventOutcome::handled()
    }

    /// Back to scale 1, centered origin, swipe enabled.
    pub fn reset(&mut self) {
        self.phase = ZoomPhase::Idle;
        self.scale = MIN_ZOOM_SCALE;
        self.origin = default_origin();
    }

    pub fn view(&self) -> ZoomView {
        ZoomView {
            scale: self.scale,
            origin_x_percent: self.origin.x,
            origin_y_percent: self.origin.y,
            locked_for_pan: matches!(self.phase, ZoomPhase::Locked),
            swipe_enabled: self.swipe_enabled(),
        }
    }
}
