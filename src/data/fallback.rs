//! Minimal product data scraped from the host page.
//!
//! Used when the host sent no product set at all, so the overlay still has a
//! primary record to show next to the mini player's video.

use super::product::{ProductId, ProductRecord, ProductSet};
use serde::Deserialize;
use tracing::debug;

/// Title shown when the page offers nothing better
pub const DEFAULT_FALLBACK_TITLE: &str = "Product";

/// Text the host found on the page (document title, visible price).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageFallback {
    pub title: Option<String>,
    pub price: Option<String>,
}

impl PageFallback {
    pub fn new(title: Option<&str>, price: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            price: price.map(str::to_string),
        }
    }

    /// Primary record built from page text and the mini player's video.
    pub fn primary_record(&self, video_url: &str) -> ProductRecord {
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_FALLBACK_TITLE);
        let price = self
            .price
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        ProductRecord {
            id: ProductId::new("1"),
            title: title.to_string(),
            price,
            video: Some(video_url.to_string()).filter(|v| !v.is_empty()),
            ..Default::default()
        }
    }
}

impl ProductSet {
    /// Replace an empty set with the page-derived primary record.
    pub fn or_fallback(self, fallback: &PageFallback, video_url: &str) -> Self {
        if !self.is_empty() {
            return self;
        }
        debug!("No product data supplied, deriving primary record from page");
        ProductSet::from_records(vec![fallback.primary_record(video_url)])
    }
}
