//! Engine tunables.
//!
//! Every field defaults to the value in `constants`, and files are read with
//! `#[serde(default)]` so a partial JSON file only overrides what it names.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid setting `{name}`: {reason}")]
    Invalid { name: &'static str, reason: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Thresholds and timings used by the gesture state machines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub drag_threshold_px: f32,
    pub click_grace_ms: u64,
    pub safe_zone_breakpoint_px: f32,
    pub overlay_mobile_breakpoint_px: f32,
    pub close_fade_ms: u64,
    pub swipe_min_distance_px: f32,
    pub playback_feedback_ms: u64,
    pub max_zoom_scale: f32,
    pub snap_back_scale: f32,
    pub double_tap_reset_min_scale: f32,
    pub double_tap_ms: u64,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            drag_threshold_px: DRAG_THRESHOLD_PX,
            click_grace_ms: CLICK_GRACE_MS,
            safe_zone_breakpoint_px: SAFE_ZONE_BREAKPOINT_PX,
            overlay_mobile_breakpoint_px: OVERLAY_MOBILE_BREAKPOINT_PX,
            close_fade_ms: CLOSE_FADE_MS,
            swipe_min_distance_px: SWIPE_MIN_DISTANCE_PX,
            playback_feedback_ms: PLAYBACK_FEEDBACK_MS,
            max_zoom_scale: MAX_ZOOM_SCALE,
            snap_back_scale: SNAP_BACK_SCALE,
            double_tap_reset_min_scale: DOUBLE_TAP_RESET_MIN_SCALE,
            double_tap_ms: DOUBLE_TAP_MS,
        }
    }
}

impl WidgetSettings {
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> SettingsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&contents)?;
        debug!(path = %path.display(), "Loaded widget settings");
        Ok(settings)
    }

    fn validate(&self) -> SettingsResult<()> {
        if !(self.drag_threshold_px >= 0.0) {
            return Err(SettingsError::Invalid {
                name: "drag_threshold_px",
                reason: "must be a non-negative number".to_string(),
            });
        }
        if !(self.max_zoom_scale >= MIN_ZOOM_SCALE) {
            return Err(SettingsError::Invalid {
                name: "max_zoom_scale",
                reason: format!("must be at least {MIN_ZOOM_SCALE}"),
            });
        }
        if !(self.snap_back_scale >= MIN_ZOOM_SCALE && self.snap_back_scale <= self.max_zoom_scale) {
            return Err(SettingsError::Invalid {
                name: "snap_back_scale",
                reason: "must lie within the zoom range".to_string(),
            });
        }
        Ok(())
    }

    pub fn click_grace(&self) -> Duration {
        Duration::from_millis(self.click_grace_ms)
    }

    pub fn close_fade(&self) -> Duration {
        Duration::from_millis(self.close_fade_ms)
    }

    pub fn playback_feedback(&self) -> Duration {
        Duration::from_millis(self.playback_feedback_ms)
    }

    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_ms)
    }
}
