//! Host configuration object and the player configuration derived from it.
//!
//! Recognized fields (camelCase as emitted by the host page, with the aliases
//! seen across host variants):
//!
//! | field             | aliases                           |
//! |-------------------|-----------------------------------|
//! | `videoUrl`        | `video_url`                       |
//! | `shape`           |                                   |
//! | `position`        | `anchorSide`                      |
//! | `overlayTemplate` | `productModalTemplate`, `template`|
//! | `productSet`      | `productData`, `products`         |
//! | `page`            | page text used for fallbacks      |

use super::error::{json_kind, ConfigError, ConfigResult};
use super::fallback::PageFallback;
use super::product::ProductSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerShape {
    #[default]
    Circle,
    Rectangle,
}

impl PlayerShape {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "circle" => Some(Self::Circle),
            "rectangle" | "square" => Some(Self::Rectangle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSide {
    Left,
    #[default]
    Right,
}

impl AnchorSide {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayTemplate {
    #[default]
    SplitView,
    DetailsPanel,
}

impl OverlayTemplate {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "split-view" | "split_view" | "splitview" => Some(Self::SplitView),
            "details-panel" | "details_panel" | "detailspanel" => Some(Self::DetailsPanel),
            _ => None,
        }
    }
}

/// Immutable player configuration for one page view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerConfig {
    pub video_url: String,
    pub shape: PlayerShape,
    pub anchor_side: AnchorSide,
    pub overlay_template: OverlayTemplate,
}

impl PlayerConfig {
    /// `None` when there is no video: the widget has nothing to render.
    pub fn new(video_url: impl Into<String>) -> Option<Self> {
        let video_url = video_url.into();
        if video_url.trim().is_empty() {
            return None;
        }
        Some(Self {
            video_url,
            shape: PlayerShape::default(),
            anchor_side: AnchorSide::default(),
            overlay_template: OverlayTemplate::default(),
        })
    }

    pub fn with_shape(mut self, shape: PlayerShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_anchor_side(mut self, side: AnchorSide) -> Self {
        self.anchor_side = side;
        self
    }

    pub fn with_template(mut self, template: OverlayTemplate) -> Self {
        self.overlay_template = template;
        self
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawHostConfig {
    #[serde(alias = "video_url")]
    video_url: Option<String>,
    shape: Option<String>,
    #[serde(alias = "anchorSide")]
    position: Option<String>,
    #[serde(alias = "productModalTemplate", alias = "template")]
    overlay_template: Option<String>,
    #[serde(alias = "productData", alias = "products")]
    product_set: Option<Value>,
    page: Option<PageFallback>,
}

/// Everything the host hands over at mount time, normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    /// `None` when the host gave no video URL
    pub player: Option<PlayerConfig>,
    pub products: ProductSet,
    pub page: PageFallback,
}

impl HostConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_value(value: Value) -> ConfigResult<Self> {
        if !value.is_object() {
            return Err(ConfigError::NotAnObject(json_kind(&value)));
        }
        let raw: RawHostConfig = serde_json::from_value(value)?;

        let player = raw.video_url.and_then(PlayerConfig::new).map(|config| {
            config
                .with_shape(parse_or_default(raw.shape.as_deref(), "shape", PlayerShape::parse))
                .with_anchor_side(parse_or_default(raw.position.as_deref(), "position", AnchorSide::parse))
                .with_template(parse_or_default(
                    raw.overlay_template.as_deref(),
                    "overlayTemplate",
                    OverlayTemplate::parse,
                ))
        });

        let page = raw.page.unwrap_or_default();
        let products = raw
            .product_set
            .as_ref()
            .map(ProductSet::from_value)
            .unwrap_or_default();
        let products = match &player {
            Some(player) => products.or_fallback(&page, &player.video_url),
            None => products,
        };

        debug!(
            has_player = player.is_some(),
            products = products.len(),
            "Host configuration normalized"
        );

        Ok(Self {
            player,
            products,
            page,
        })
    }
}

fn parse_or_default<T: Default>(value: Option<&str>, field: &str, parse: fn(&str) -> Option<T>) -> T {
    match value {
        None => T::default(),
        Some(text) => parse(text).unwrap_or_else(|| {
            warn!(field, value = text, "Unrecognized value, using default");
            T::default()
        }),
    }
}
