//! Widget-wide constants.
//!
//! Centralizes thresholds, offsets and timings so the gesture code and the
//! defaults in `settings` agree on one set of values.

// ============================================================================
// Drag & Click
// ============================================================================

/// Displacement in either axis (px) after which a press becomes a drag
pub const DRAG_THRESHOLD_PX: f32 = 5.0;

/// Window after pointer-up during which the trailing native click is ignored
pub const CLICK_GRACE_MS: u64 = 100;

// ============================================================================
// Mini Player Anchoring
// ============================================================================

/// Viewport width at or below which the mobile safe zone applies
pub const SAFE_ZONE_BREAKPOINT_PX: f32 = 640.0;

/// Desktop bottom/side offset for the circle shape
pub const CIRCLE_OFFSET_PX: f32 = 24.0;

/// Desktop bottom/side offset for the rectangle shape
pub const RECTANGLE_OFFSET_PX: f32 = 20.0;

/// Mobile bottom offset, clears browser chrome and sticky footers
pub const SAFE_ZONE_BOTTOM_PX: f32 = 90.0;

/// Mobile side offset
pub const SAFE_ZONE_SIDE_PX: f32 = 12.0;

/// Fade-out duration when the mini player is closed
pub const CLOSE_FADE_MS: u64 = 300;

/// Class name of the mini player's close control
pub const CLOSE_CONTROL: &str = "evo-close";

// ============================================================================
// Stacking
// ============================================================================

/// Stacking priority of the floating mini player
pub const MINI_PLAYER_Z_INDEX: i32 = 999_990;

/// Stacking priority of the overlay backdrop
pub const BACKDROP_Z_INDEX: i32 = 999_998;

/// Stacking priority of the overlay content
pub const OVERLAY_Z_INDEX: i32 = 999_999;

/// Backdrop opacity beneath the overlay content
pub const BACKDROP_OPACITY: f32 = 0.9;

/// Id of the detached top-level container the overlay renders into
pub const PORTAL_CONTAINER_ID: &str = "evo-reels-modal-portal";

// ============================================================================
// Overlay Layout
// ============================================================================

/// Viewport width below which the overlay uses the mobile layout
pub const OVERLAY_MOBILE_BREAKPOINT_PX: f32 = 768.0;

/// Number of product slots the overlay lays out (primary + secondary)
pub const MAX_PRODUCT_SLOTS: usize = 2;

// ============================================================================
// Carousel
// ============================================================================

/// Minimum swipe distance (px) along an axis to change slide
pub const SWIPE_MIN_DISTANCE_PX: f32 = 50.0;

// ============================================================================
// Video
// ============================================================================

/// How long the play/pause icon stays visible after a tap
pub const PLAYBACK_FEEDBACK_MS: u64 = 800;

// ============================================================================
// Zoom
// ============================================================================

/// Lower bound of the pinch scale
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Upper bound of the pinch scale
pub const MAX_ZOOM_SCALE: f32 = 4.0;

/// Pinch ending below this scale snaps back to 1
pub const SNAP_BACK_SCALE: f32 = 1.3;

/// Double-tap resets only when the image is visibly scaled beyond this
pub const DOUBLE_TAP_RESET_MIN_SCALE: f32 = 1.05;

/// Maximum gap between two single-finger taps to count as a double tap
pub const DOUBLE_TAP_MS: u64 = 300;

/// Transform origin (percent) of an unzoomed image
pub const DEFAULT_ORIGIN_PERCENT: f32 = 50.0;
