//! Video playback: the element seam, a simulated backend and the progress
//! controller.
//!
//! ## Modules
//!
//! - `element` - `MediaElement` trait and `PlaybackError`
//! - `simulated` - Manual-clock element for tests and replays
//! - `progress` - Fill, seek, mute and tap-to-toggle per video

mod element;
mod progress;
mod simulated;

pub use element::{play_or_ignore, MediaElement, PlaybackError, PlaybackResult};
pub use progress::{progress_percent, seek_fraction, PlaybackIcon, ProgressController, ProgressView};
pub use simulated::SimulatedMedia;
