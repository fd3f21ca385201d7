//! Product overlay shown when the mini player is activated.
//!
//! ## Modules
//!
//! - `product_overlay` - Mount contract, layouts, dismissal, view state
//! - `detail` - Detail panel, sheet and footer summary fields
//! - `hit_regions` - R-tree of interactive regions for outside clicks
//! - `scroll_lock` - Balanced body scroll suppression
//! - `events` - Events sent to the overlay's owner

mod detail;
mod events;
mod hit_regions;
mod product_overlay;
mod scroll_lock;

pub use detail::{DetailView, SheetView, SummaryView, SHEET_CTA_LABEL};
pub use events::OverlayEvent;
pub use hit_regions::{HitRegions, RegionKind};
pub use product_overlay::{OverlayLayout, OverlayProps, OverlayView, PortalView, ProductOverlay};
pub use scroll_lock::{DocumentBody, InMemoryBody, ScrollLock, ScrollLockGuard};
