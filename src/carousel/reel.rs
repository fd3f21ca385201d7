//! Vertical carousel of reels, each with its own horizontal media carousel.
//!
//! Slide changes drive playback: leaving a reel pauses its video, arriving
//! on one restarts its video from 0 with that video's mute state. At most
//! one video plays at any time.

use super::axis::{Axis, CarouselAxis, NavKey, SlideChange};
use super::events::{ReelEvent, ReelEvents};
use super::slide::{Reel, ReelView, VideoSlot};
use crate::data::{ProductId, ProductSet};
use crate::input::PointerEvent;
use crate::media::{play_or_ignore, MediaElement};
use crate::settings::WidgetSettings;
use crate::types::{Bounds, EventOutcome, Point};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselView {
    pub active_index: usize,
    pub outer_navigation: bool,
    pub reels: Vec<ReelView>,
}

#[derive(Debug)]
pub struct ReelCarousel<M> {
    pub(super) reels: Vec<Reel<M>>,
    pub(super) outer: CarouselAxis,
    pub(super) swipe_origin: Option<Point>,
    events: ReelEvents,
}

impl<M: MediaElement> ReelCarousel<M> {
    /// One reel per record, in set order. `make_media` binds a video URL to
    /// an element.
    pub fn new(
        products: &ProductSet,
        settings: &WidgetSettings,
        events: ReelEvents,
        mut make_media: impl FnMut(&str) -> M,
    ) -> Self {
        let reels: Vec<Reel<M>> = products
            .iter()
            .map(|record| Reel::build(record, settings, &mut make_media))
            .collect();
        let outer = CarouselAxis::new(Axis::Vertical, reels.len(), settings);
        debug!(reels = reels.len(), outer_navigation = outer.is_enabled(), "Carousel built");
        Self {
            reels,
            outer,
            swipe_origin: None,
            events,
        }
    }

    /// Start playback on the first reel.
    pub fn start(&mut self) {
        if let Some(reel) = self.reels.get_mut(self.outer.active_index()) {
            if let Some(slot) = reel.video.as_mut() {
                slot.progress.apply_mute(&mut slot.media);
                play_or_ignore(&mut slot.media);
            }
        }
    }

    pub fn active_index(&self) -> usize {
        self.outer.active_index()
    }

    pub fn active_record_id(&self) -> Option<&ProductId> {
        self.reels.get(self.active_index()).map(|reel| &reel.record_id)
    }

    pub fn len(&self) -> usize {
        self.reels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reels.is_empty()
    }

    pub fn outer_navigation_enabled(&self) -> bool {
        self.outer.is_enabled()
    }

    pub fn reel(&self, index: usize) -> Option<&Reel<M>> {
        self.reels.get(index)
    }

    pub fn reel_mut(&mut self, index: usize) -> Option<&mut Reel<M>> {
        self.reels.get_mut(index)
    }

    pub fn active_reel(&self) -> Option<&Reel<M>> {
        self.reels.get(self.active_index())
    }

    pub(super) fn active_reel_mut(&mut self) -> Option<&mut Reel<M>> {
        let index = self.active_index();
        self.reels.get_mut(index)
    }

    pub fn media(&self, index: usize) -> Option<&M> {
        self.reels.get(index)?.video.as_ref().map(|slot| &slot.media)
    }

    pub fn media_mut(&mut self, index: usize) -> Option<&mut M> {
        self.reels.get_mut(index)?.video.as_mut().map(|slot| &mut slot.media)
    }

    /// Reels whose video is currently playing.
    pub fn playing_count(&self) -> usize {
        self.reels.iter().filter(|reel| reel.is_playing()).count()
    }

    // ------------------------------------------------------------------------
    // Outer axis
    // ------------------------------------------------------------------------

    pub fn go_to(&mut self, index: usize) -> Option<SlideChange> {
        let change = self.outer.slide_to(index)?;
        self.finish_outer_change(change);
        Some(change)
    }

    pub fn next(&mut self) -> Option<SlideChange> {
        let change = self.outer.next()?;
        self.finish_outer_change(change);
        Some(change)
    }

    pub fn prev(&mut self) -> Option<SlideChange> {
        let change = self.outer.prev()?;
        self.finish_outer_change(change);
        Some(change)
    }

    pub(super) fn finish_outer_change(&mut self, change: SlideChange) {
        // Leaving: pause everything that is not the new reel
        for (index, reel) in self.reels.iter_mut().enumerate() {
            if index != change.to {
                reel.pause();
            }
        }
        if let Some(left) = self.reels.get_mut(change.from) {
            left.slides.iter_mut().for_each(|slide| slide.reset_zoom());
        }

        let Some(reel) = self.reels.get_mut(change.to) else {
            return;
        };
        if let Some(inner_change) = reel.inner.reset_to(0) {
            if let Some(slide) = reel.slides.get_mut(inner_change.from) {
                slide.reset_zoom();
            }
        }
        if let Some(slot) = reel.video.as_mut() {
            slot.media.set_current_time(0.0);
            slot.progress.reset();
            slot.progress.set_track_visible(true);
            slot.progress.apply_mute(&mut slot.media);
            play_or_ignore(&mut slot.media);
        }

        debug!(from = change.from, to = change.to, record = %reel.record_id, "Active reel changed");
        self.events.emit(ReelEvent::ActiveRecordChanged {
            index: change.to,
            id: reel.record_id.clone(),
        });
    }

    // ------------------------------------------------------------------------
    // Inner axis (active reel)
    // ------------------------------------------------------------------------

    /// Pagination bullet or programmatic jump within the active reel.
    pub fn go_to_media(&mut self, index: usize) -> Option<SlideChange> {
        let reel = self.active_reel_mut()?;
        let change = reel.inner.slide_to(index)?;
        Self::finish_inner_change(reel, change);
        Some(change)
    }

    pub fn next_media(&mut self) -> Option<SlideChange> {
        let reel = self.active_reel_mut()?;
        let change = reel.inner.next()?;
        Self::finish_inner_change(reel, change);
        Some(change)
    }

    pub fn prev_media(&mut self) -> Option<SlideChange> {
        let reel = self.active_reel_mut()?;
        let change = reel.inner.prev()?;
        Self::finish_inner_change(reel, change);
        Some(change)
    }

    pub(super) fn finish_inner_change(reel: &mut Reel<M>, change: SlideChange) {
        if let Some(left) = reel.slides.get_mut(change.from) {
            left.reset_zoom();
        }
        let on_video = reel.video_slide_active();
        if let Some(slot) = reel.video.as_mut() {
            slot.progress.set_track_visible(on_video);
            if on_video {
                slot.media.set_current_time(0.0);
                slot.progress.reset();
                slot.progress.apply_mute(&mut slot.media);
                play_or_ignore(&mut slot.media);
            } else {
                slot.media.pause();
            }
        }
        trace!(record = %reel.record_id, from = change.from, to = change.to, on_video, "Media slide changed");
    }

    // ------------------------------------------------------------------------
    // Keyboard & wheel
    // ------------------------------------------------------------------------

    pub fn key(&mut self, key: NavKey) -> Option<SlideChange> {
        if !self.active_swipe_enabled() {
            return None;
        }
        match key.axis() {
            Axis::Vertical => {
                let change = self.outer.key(key)?;
                self.finish_outer_change(change);
                Some(change)
            }
            Axis::Horizontal => {
                let reel = self.active_reel_mut()?;
                let change = reel.inner.key(key)?;
                Self::finish_inner_change(reel, change);
                Some(change)
            }
        }
    }

    /// Wheel deltas route to the dominant axis.
    pub fn wheel(&mut self, delta: Point) -> Option<SlideChange> {
        if !self.active_swipe_enabled() {
            return None;
        }
        if delta.y.abs() >= delta.x.abs() {
            let change = self.outer.wheel(delta.y)?;
            self.finish_outer_change(change);
            Some(change)
        } else {
            let reel = self.active_reel_mut()?;
            let change = reel.inner.wheel(delta.x)?;
            Self::finish_inner_change(reel, change);
            Some(change)
        }
    }

    // ------------------------------------------------------------------------
    // Video controls (active reel)
    // ------------------------------------------------------------------------

    /// Media `timeupdate` for reel `index`.
    pub fn time_update(&mut self, index: usize) -> Option<f64> {
        let slot = self.reels.get_mut(index)?.video.as_mut()?;
        Some(slot.progress.on_time_update(&slot.media))
    }

    /// Media reported `loadeddata`/`canplay` for reel `index`.
    pub fn media_ready(&mut self, index: usize) {
        if let Some(slide) = self
            .reels
            .get_mut(index)
            .filter(|reel| reel.has_video())
            .and_then(|reel| reel.slides.first_mut())
        {
            slide.loading = false;
        }
    }

    /// Image of slide `slide` in reel `index` finished loading.
    pub fn image_loaded(&mut self, index: usize, slide: usize) {
        if let Some(slide) = self.reels.get_mut(index).and_then(|reel| reel.slides.get_mut(slide)) {
            slide.loading = false;
        }
    }

    pub fn toggle_mute(&mut self) -> Option<bool> {
        let reel = self.active_reel_mut()?;
        let slot = reel.video.as_mut()?;
        let muted = slot.progress.toggle_mute(&mut slot.media);
        let id = reel.record_id.clone();
        self.events.emit(ReelEvent::SoundToggled { id, muted });
        Some(muted)
    }

    /// Video of the active reel, while its video slide is showing.
    fn visible_video_mut(&mut self) -> Option<&mut VideoSlot<M>> {
        self.active_reel_mut()
            .filter(|reel| reel.video_slide_active())
            .and_then(|reel| reel.video.as_mut())
    }

    pub fn track_press(&mut self, event: &PointerEvent) -> EventOutcome {
        self.visible_video_mut()
            .map_or(EventOutcome::IGNORED, |slot| slot.progress.track_press(event))
    }

    pub fn track_release(&mut self, event: &PointerEvent, track: Bounds) -> EventOutcome {
        match self.visible_video_mut() {
            Some(slot) => slot.progress.track_release(event, track, &mut slot.media),
            None => EventOutcome::IGNORED,
        }
    }

    pub fn track_click(&mut self, event: &PointerEvent, track: Bounds) -> EventOutcome {
        match self.visible_video_mut() {
            Some(slot) => slot.progress.track_click(event, track, &mut slot.media),
            None => EventOutcome::IGNORED,
        }
    }

    /// Tap on the visible video. Ignored while an image slide is showing.
    pub fn tap_video(&mut self, now: Instant) {
        if let Some(slot) = self.visible_video_mut() {
            slot.progress.tap_surface(&mut slot.media, now);
        }
    }

    /// Footer summary of the active reel tapped.
    pub fn tap_summary(&mut self) {
        if let Some(id) = self.active_record_id().cloned() {
            self.events.emit(ReelEvent::SummaryTapped(id));
        }
    }

    pub fn pause_all(&mut self) {
        self.reels.iter_mut().for_each(Reel::pause);
    }

    pub fn tick(&mut self, now: Instant) {
        for slot in self.reels.iter_mut().filter_map(|reel| reel.video.as_mut()) {
            slot.progress.tick(now);
        }
    }

    /// Swipe is allowed unless the active image is zoomed.
    pub fn active_swipe_enabled(&self) -> bool {
        self.active_reel()
            .and_then(Reel::active_slide)
            .is_none_or(|slide| slide.swipe_enabled())
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            active_index: self.active_index(),
            outer_navigation: self.outer.is_enabled(),
            reels: self.reels.iter().map(Reel::view).collect(),
        }
    }
}
