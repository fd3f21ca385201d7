//! Reel carousel: vertical reels of horizontal media slides.
//!
//! ## Modules
//!
//! - `axis` - One axis: active index, keys, wheel, swipe distance
//! - `slide` - Reels and media slides built from product records
//! - `reel` - `ReelCarousel`, playback rules on slide change
//! - `gestures` - Pointer routing between zoom, hover and swipe
//! - `events` - Typed events to the owning overlay

mod axis;
mod events;
mod gestures;
mod reel;
mod slide;

pub use axis::{Axis, CarouselAxis, NavKey, SlideChange};
pub use events::{ReelEvent, ReelEvents};
pub use reel::{CarouselView, ReelCarousel};
pub use slide::{MediaSlide, Reel, ReelView, SlideKind, SlideView, VideoSlot};
