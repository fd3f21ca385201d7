//! Pointer routing inside the media area: zoom first, then swipe paging.
//!
//! A swipe is tracked from a single-finger (or mouse) press and resolved on
//! release along the dominant axis. Pinch and locked zoom on the active
//! slide block swiping on both axes.

use super::reel::ReelCarousel;
use crate::carousel::SlideChange;
use crate::input::PointerEvent;
use crate::media::MediaElement;
use crate::types::{Bounds, EventOutcome};
use tracing::trace;

impl<M: MediaElement> ReelCarousel<M> {
    pub fn pointer_down(&mut self, event: &PointerEvent) -> EventOutcome {
        let zoomed = self
            .active_reel_mut()
            .and_then(|reel| reel.active_slide_mut())
            .and_then(|slide| slide.zoom.as_mut())
            .map(|zoom| zoom.touch_start(event))
            .unwrap_or(EventOutcome::IGNORED);

        if event.is_multi_touch() || zoomed.handled {
            if self.swipe_origin.take().is_some() {
                trace!("Swipe abandoned for zoom gesture");
            }
            return zoomed;
        }

        if !self.active_swipe_enabled() {
            return EventOutcome::IGNORED;
        }
        self.swipe_origin = event.client_point();
        if self.swipe_origin.is_some() {
            EventOutcome::handled()
        } else {
            EventOutcome::IGNORED
        }
    }

    /// `image` is the active slide's image box.
    pub fn pointer_move(&mut self, event: &PointerEvent, image: Bounds) -> EventOutcome {
        let Some(slide) = self.active_reel_mut().and_then(|reel| reel.active_slide_mut()) else {
            return EventOutcome::IGNORED;
        };

        if event.is_touch() {
            return slide
                .zoom
                .as_mut()
                .map(|zoom| zoom.touch_move(event, image))
                .unwrap_or(EventOutcome::IGNORED);
        }

        match slide.hover.as_mut() {
            Some(hover) => {
                hover.pointer_move(event, image);
                EventOutcome::handled()
            }
            None => EventOutcome::IGNORED,
        }
    }

    /// Release. Returns the slide change a swipe produced, if any.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> Option<SlideChange> {
        if event.is_touch() {
            if let Some(zoom) = self
                .active_reel_mut()
                .and_then(|reel| reel.active_slide_mut())
                .and_then(|slide| slide.zoom.as_mut())
            {
                zoom.touch_end(event);
            }
        }

        let origin = self.swipe_origin.take()?;
        if !self.active_swipe_enabled() {
            return None;
        }
        let delta = event.release_point()? - origin;

        if delta.y.abs() >= delta.x.abs() {
            let change = self.outer.swipe(delta)?;
            self.finish_outer_change(change);
            Some(change)
        } else {
            let reel = self.active_reel_mut()?;
            let change = reel.inner.swipe(delta)?;
            Self::finish_inner_change(reel, change);
            Some(change)
        }
    }

    pub fn pointer_leave(&mut self) {
        self.swipe_origin = None;
        if let Some(hover) = self
            .active_reel_mut()
            .and_then(|reel| reel.active_slide_mut())
            .and_then(|slide| slide.hover.as_mut())
        {
            hover.pointer_leave();
        }
    }
}
