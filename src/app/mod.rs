//! Widget module - the mini player and the overlay it opens, wired together.
//!
//! This module is organized into several submodules:
//! - `state` - The ReelsWidget struct and its rendered view
//! - `lifecycle` - Construction, opening and closing the overlay, timers
//! - `routing` - Host inputs and where each one is delivered

mod lifecycle;
mod routing;
mod state;

pub use routing::{PointerInput, Routed, WidgetInput};
pub use state::{MediaFactory, ReelsWidget, WidgetView};
