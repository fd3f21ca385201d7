//! Pointer input and the draggable surface.
//!
//! ## Architecture
//!
//! Dragging uses an explicit state machine (`DragPhase`) with one
//! authoritative `has_dragged` flag per gesture and a single grace window
//! after release. This replaces ad hoc timeouts and boolean refs racing
//! against the browser's pointer-up/click ordering.
//!
//! ## Modules
//!
//! - `pointer` - Unified mouse/touch event shape
//! - `state` - Drag phase enum and per-gesture data
//! - `surface` - `DraggableSurface` type, anchoring and resize handling
//! - `press` - Pointer/touch down (gesture start)
//! - `drag` - Pointer/touch move (threshold and position updates)
//! - `release` - Pointer/touch up, trailing click and the grace window

mod drag;
mod pointer;
mod press;
mod release;
mod state;
mod surface;

pub use pointer::{PointerEvent, PointerKind, TargetPath};
pub use state::{DragPhase, DragState};
pub use surface::{ClickDisposition, DraggableSurface, DragRelease};
