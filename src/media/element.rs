//! The media element seam.
//!
//! The engine drives playback through `MediaElement`; the host binds it to a
//! real `<video>` element, tests and the replay tool use `SimulatedMedia`.

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Autoplay policy rejected `play()` until a user gesture
    #[error("playback not allowed without a user gesture")]
    NotAllowed,

    /// A later `pause()` or source change interrupted the request
    #[error("playback request aborted")]
    Aborted,

    #[error("media not supported: {0}")]
    NotSupported(String),
}

pub type PlaybackResult<T> = Result<T, PlaybackError>;

pub trait MediaElement {
    fn source(&self) -> &str;

    fn play(&mut self) -> PlaybackResult<()>;

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Playback position in seconds
    fn current_time(&self) -> f64;

    fn set_current_time(&mut self, seconds: f64);

    /// Length in seconds. `NaN` until metadata has loaded.
    fn duration(&self) -> f64;

    fn is_muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    fn set_looping(&mut self, looping: bool);
}

/// Request playback, swallowing rejections.
///
/// Autoplay refusals are expected; playback stays paused until the next user
/// gesture asks again. Returns whether playback started.
pub fn play_or_ignore<M: MediaElement + ?Sized>(media: &mut M) -> bool {
    match media.play() {
        Ok(()) => true,
        Err(err) => {
            debug!(source = media.source(), %err, "play() rejected, staying paused");
            false
        }
    }
}
