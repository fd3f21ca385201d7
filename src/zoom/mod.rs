//! Image zoom: pinch on touch devices, hover magnify on desktop.
//!
//! - `gesture` - Pinch/lock/double-tap state machine
//! - `hover` - Pointer-following transform origin

mod gesture;
mod hover;

pub use gesture::{ZoomGesture, ZoomPhase, ZoomView};
pub use hover::HoverMagnifier;
