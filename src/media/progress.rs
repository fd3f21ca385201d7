//! Progress bar, seek, mute and tap-to-toggle for one video.
//!
//! Each video slide owns its own controller; mute state is per video and
//! starts muted so autoplay is permitted.

use super::element::{play_or_ignore, MediaElement};
use crate::input::PointerEvent;
use crate::profile_scope;
use crate::settings::WidgetSettings;
use crate::types::{Bounds, EventOutcome};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// `100 * current / duration`, 0 when either is unusable.
pub fn progress_percent(current: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !current.is_finite() {
        return 0.0;
    }
    (current / duration * 100.0).clamp(0.0, 100.0)
}

/// Fraction of `track` left of `x`, clamped to [0, 1]. `None` for a zero-width track.
pub fn seek_fraction(x: f32, track: Bounds) -> Option<f64> {
    if track.size.width <= 0.0 {
        return None;
    }
    let fraction = f64::from((x - track.left()) / track.size.width);
    Some(fraction.clamp(0.0, 1.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackIcon {
    Play,
    Pause,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub fill_percent: f64,
    /// Left offset of the drag handle, percent of the track
    pub handle_percent: f64,
    pub handle_visible: bool,
    pub track_visible: bool,
    pub muted: bool,
    pub mute_label: &'static str,
    /// Transient play/pause icon after a tap
    pub feedback: Option<PlaybackIcon>,
}

#[derive(Debug, Clone)]
pub struct ProgressController {
    fill_percent: f64,
    handle_visible: bool,
    track_visible: bool,
    muted: bool,
    feedback: Option<(PlaybackIcon, Instant)>,
    feedback_duration: Duration,
}

impl ProgressController {
    pub fn new(settings: &WidgetSettings) -> Self {
        Self {
            fill_percent: 0.0,
            handle_visible: false,
            track_visible: true,
            muted: true,
            feedback: None,
            feedback_duration: settings.playback_feedback(),
        }
    }

    /// Push the controller's mute state onto the element.
    pub fn apply_mute<M: MediaElement + ?Sized>(&self, media: &mut M) {
        media.set_muted(self.muted);
    }

    /// `timeupdate` from the element. Returns the new fill percent.
    pub fn on_time_update<M: MediaElement + ?Sized>(&mut self, media: &M) -> f64 {
        profile_scope!("progress_time_update");
        self.fill_percent = progress_percent(media.current_time(), media.duration());
        self.fill_percent
    }

    /// Pointer/touch down over the track.
    pub fn track_press(&mut self, event: &PointerEvent) -> EventOutcome {
        if event.client_point().is_none() {
            return EventOutcome::IGNORED;
        }
        self.handle_visible = true;
        EventOutcome::handled().stop_propagation()
    }

    /// Pointer/touch up over the track. Touch-end also seeks.
    pub fn track_release<M: MediaElement + ?Sized>(
        &mut self,
        event: &PointerEvent,
        track: Bounds,
        media: &mut M,
    ) -> EventOutcome {
        self.handle_visible = false;
        if event.is_touch() {
            self.seek_at(event, track, media);
        }
        EventOutcome::handled().stop_propagation()
    }

    /// Mouse click on the track.
    pub fn track_click<M: MediaElement + ?Sized>(
        &mut self,
        event: &PointerEvent,
        track: Bounds,
        media: &mut M,
    ) -> EventOutcome {
        self.seek_at(event, track, media);
        EventOutcome::handled().stop_propagation()
    }

    fn seek_at<M: MediaElement + ?Sized>(&mut self, event: &PointerEvent, track: Bounds, media: &mut M) {
        let Some(point) = event.release_point() else {
            return;
        };
        let Some(fraction) = seek_fraction(point.x, track) else {
            return;
        };
        self.seek_to_fraction(fraction, media);
    }

    /// Seek to `fraction` of the duration. No-op until the duration is known.
    pub fn seek_to_fraction<M: MediaElement + ?Sized>(&mut self, fraction: f64, media: &mut M) -> bool {
        let duration = media.duration();
        if !duration.is_finite() || duration <= 0.0 {
            trace!("Seek ignored, duration unknown");
            return false;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        media.set_current_time(fraction * duration);
        self.fill_percent = fraction * 100.0;
        debug!(percent = self.fill_percent, "Seek");
        true
    }

    /// Flip mute on this video only. Returns the new state.
    pub fn toggle_mute<M: MediaElement + ?Sized>(&mut self, media: &mut M) -> bool {
        self.muted = !self.muted;
        media.set_muted(self.muted);
        debug!(muted = self.muted, "Mute toggled");
        self.muted
    }

    /// Tap on the transparent layer over the video.
    pub fn tap_surface<M: MediaElement + ?Sized>(&mut self, media: &mut M, now: Instant) -> PlaybackIcon {
        let icon = if media.is_paused() {
            if play_or_ignore(media) {
                PlaybackIcon::Play
            } else {
                PlaybackIcon::Pause
            }
        } else {
            media.pause();
            PlaybackIcon::Pause
        };
        self.feedback = Some((icon, now + self.feedback_duration));
        icon
    }

    pub fn tick(&mut self, now: Instant) {
        if matches!(self.feedback, Some((_, until)) if now >= until) {
            self.feedback = None;
        }
    }

    pub fn set_track_visible(&mut self, visible: bool) {
        self.track_visible = visible;
    }

    pub fn reset(&mut self) {
        self.fill_percent = 0.0;
        self.handle_visible = false;
    }

    pub fn fill_percent(&self) -> f64 {
        self.fill_percent
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn mute_label(&self) -> &'static str {
        if self.muted {
            "Volume Off"
        } else {
            "Volume On"
        }
    }

    pub fn view(&self) -> ProgressView {
        ProgressView {
            fill_percent: self.fill_percent,
            handle_percent: self.fill_percent,
            handle_visible: self.handle_visible,
            track_visible: self.track_visible,
            muted: self.muted,
            mute_label: self.mute_label(),
            feedback: self.feedback.map(|(icon, _)| icon),
        }
    }
}
