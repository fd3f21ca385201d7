//! In-memory media element with a manual clock.

use super::element::{MediaElement, PlaybackError, PlaybackResult};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedMedia {
    source: String,
    paused: bool,
    muted: bool,
    looping: bool,
    current_time: f64,
    duration: f64,
    autoplay_blocked: bool,
    play_requests: usize,
}

impl SimulatedMedia {
    /// A paused element whose metadata has not loaded yet.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            paused: true,
            muted: false,
            looping: false,
            current_time: 0.0,
            duration: f64::NAN,
            autoplay_blocked: false,
            play_requests: 0,
        }
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    /// Every `play()` rejects until `allow_playback` is called.
    pub fn blocking_autoplay(mut self) -> Self {
        self.autoplay_blocked = true;
        self
    }

    /// A user gesture lifted the autoplay restriction.
    pub fn allow_playback(&mut self) {
        self.autoplay_blocked = false;
    }

    /// Metadata arrived.
    pub fn load_metadata(&mut self, duration: f64) {
        self.duration = duration;
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Calls to `play()`, accepted or not.
    pub fn play_requests(&self) -> usize {
        self.play_requests
    }

    /// Advance the clock by `seconds` of wall time. Returns true if the
    /// playback position moved (a `timeupdate` would fire).
    pub fn advance(&mut self, seconds: f64) -> bool {
        if self.paused || !self.duration.is_finite() || self.duration <= 0.0 || seconds <= 0.0 {
            return false;
        }
        let next = self.current_time + seconds;
        if next < self.duration {
            self.current_time = next;
        } else if self.looping {
            self.current_time = next % self.duration;
        } else {
            self.current_time = self.duration;
            self.paused = true;
        }
        true
    }
}

impl MediaElement for SimulatedMedia {
    fn source(&self) -> &str {
        &self.source
    }

    fn play(&mut self) -> PlaybackResult<()> {
        self.play_requests += 1;
        if self.autoplay_blocked {
            return Err(PlaybackError::NotAllowed);
        }
        if self.duration.is_finite() && self.current_time >= self.duration && !self.looping {
            self.current_time = 0.0;
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        let upper = if self.duration.is_finite() { self.duration } else { 0.0 };
        self.current_time = seconds.clamp(0.0, upper.max(0.0));
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
}
