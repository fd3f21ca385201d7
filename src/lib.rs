//! EVO Reels - interaction engine for a floating mini video player and the
//! shoppable reel overlay it opens.
//!
//! The crate is headless. The host page forwards pointer, touch, wheel and
//! key input, media notifications and timer ticks; the engine answers with
//! event outcomes (default/propagation control) and serializable views.
//!
//! ## Modules
//!
//! - `app` - `ReelsWidget`: the mini player and overlay wired together
//! - `player` - Floating mini player and corner anchoring
//! - `input` - Pointer events and the draggable surface
//! - `overlay` - Product overlay, detail views, dismissal, scroll lock
//! - `carousel` - Vertical reels of horizontal media slides
//! - `media` - Media element seam and the progress controller
//! - `zoom` - Pinch/pan/double-tap zoom and hover magnification
//! - `data` - Host configuration and product records
//! - `settings` - Tunable thresholds and timings
//! - `perf` - Profiling instrumentation

pub mod app;
pub mod carousel;
pub mod constants;
pub mod data;
pub mod input;
pub mod media;
pub mod overlay;
pub mod perf;
pub mod player;
pub mod settings;
pub mod types;
pub mod zoom;

pub use app::{ReelsWidget, WidgetInput, WidgetView};
pub use data::{ConfigError, HostConfig};
pub use settings::WidgetSettings;
