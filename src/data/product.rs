//! Product records and the ordered set the overlay lays out.
//!
//! Host pages hand over product data in several shapes (images as URL lists or
//! `{src}` objects, prices as strings or numbers, videos as a URL or `{url}`).
//! `RawProduct` accepts all of them and `RawProduct::normalize` is the single
//! place they are turned into a `ProductRecord`. Nothing downstream coalesces.

use crate::constants::MAX_PRODUCT_SLOTS;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// Slot key of a record inside a `ProductSet` ("1", "2", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric ids order numerically, anything else after them by text.
    fn slot_key(&self) -> (u64, &str) {
        (self.0.trim().parse().unwrap_or(u64::MAX), &self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Canonical product shape consumed by every component.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProductRecord {
    pub id: ProductId,
    /// Id in the commerce backend, when the host supplied one
    pub external_id: Option<String>,
    pub title: String,
    pub price: Option<String>,
    pub formatted_price: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub stock_status_text: Option<String>,
    pub sku: Option<String>,
    pub permalink: Option<String>,
    pub shipping: Option<String>,
    pub payment: Option<String>,
    pub images: Vec<String>,
    pub video: Option<String>,
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new("1")
    }
}

impl ProductRecord {
    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    /// Price as it should be shown: the formatted string when present.
    pub fn display_price(&self) -> Option<&str> {
        self.formatted_price.as_deref().or(self.price.as_deref())
    }

    /// Short description when present, else the long one.
    pub fn summary(&self) -> Option<&str> {
        self.short_description
            .as_deref()
            .or(self.description.as_deref())
    }
}

// ============================================================================
// Raw host shapes
// ============================================================================

/// A string-or-number field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl RawScalar {
    fn into_text(self) -> Option<String> {
        match self {
            RawScalar::Text(text) => non_empty(text),
            RawScalar::Number(n) => Some(n.to_string()),
            RawScalar::Flag(_) => None,
        }
    }
}

/// A media reference: bare URL or an object carrying one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawMedia {
    Url(String),
    Object {
        #[serde(default, alias = "url", alias = "source")]
        src: Option<String>,
    },
}

impl RawMedia {
    fn into_url(self) -> Option<String> {
        match self {
            RawMedia::Url(url) => non_empty(url),
            RawMedia::Object { src } => src.and_then(non_empty),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawImages {
    Many(Vec<RawMedia>),
    One(RawMedia),
}

/// Product data exactly as a host page may send it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProduct {
    pub id: Option<RawScalar>,
    #[serde(alias = "name")]
    pub title: Option<String>,
    pub price: Option<RawScalar>,
    #[serde(alias = "formattedPrice")]
    pub formatted_price: Option<String>,
    pub regular_price: Option<RawScalar>,
    pub sale_price: Option<RawScalar>,
    pub description: Option<String>,
    #[serde(alias = "shortDescription")]
    pub short_description: Option<String>,
    pub stock_status: Option<String>,
    pub stock_quantity: Option<u64>,
    #[serde(alias = "stock", alias = "stockText", alias = "stock_status_text")]
    pub stock_text: Option<String>,
    pub sku: Option<RawScalar>,
    #[serde(alias = "link")]
    pub permalink: Option<String>,
    pub shipping: Option<String>,
    pub payment: Option<String>,
    pub images: Option<RawImages>,
    #[serde(alias = "videoUrl", alias = "video_url")]
    pub video: Option<RawMedia>,
}

impl RawProduct {
    /// Convert to the canonical record stored under slot `id`.
    pub fn normalize(self, id: ProductId) -> ProductRecord {
        let price = self.price.and_then(RawScalar::into_text);
        let sale = self.sale_price.and_then(RawScalar::into_text);
        let regular = self.regular_price.and_then(RawScalar::into_text);

        let formatted_price = self.formatted_price.and_then(non_empty).or_else(|| {
            match (sale, regular) {
                (Some(sale), Some(regular)) if sale != regular => Some(format!("{sale} {regular}")),
                _ => None,
            }
        });

        let stock_status_text = self.stock_text.and_then(non_empty).or_else(|| {
            self.stock_status
                .as_deref()
                .and_then(|status| stock_text_for(status, self.stock_quantity))
        });

        let images = match self.images {
            Some(RawImages::Many(list)) => list.into_iter().filter_map(RawMedia::into_url).collect(),
            Some(RawImages::One(media)) => media.into_url().into_iter().collect(),
            None => Vec::new(),
        };

        ProductRecord {
            id,
            external_id: self.id.and_then(RawScalar::into_text),
            title: self.title.and_then(non_empty).unwrap_or_default(),
            price,
            formatted_price,
            description: self.description.and_then(non_empty),
            short_description: self.short_description.and_then(non_empty),
            stock_status_text,
            sku: self.sku.and_then(RawScalar::into_text),
            permalink: self.permalink.and_then(non_empty),
            shipping: self.shipping.and_then(non_empty),
            payment: self.payment.and_then(non_empty),
            images,
            video: self.video.and_then(RawMedia::into_url),
        }
    }
}

/// Display text for a commerce stock status code.
pub fn stock_text_for(status: &str, quantity: Option<u64>) -> Option<String> {
    match status {
        "instock" => Some(match quantity {
            Some(q) if q > 0 => format!("In stock ({q} units)"),
            _ => "In stock".to_string(),
        }),
        "outofstock" => Some("Out of stock".to_string()),
        "onbackorder" => Some("Available on backorder".to_string()),
        _ => None,
    }
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == text.len() {
        Some(text)
    } else {
        Some(trimmed.to_string())
    }
}

// ============================================================================
// ProductSet
// ============================================================================

/// Ordered product records. Index 0 is slot 1 (primary), index 1 slot 2.
///
/// Invariants, enforced on construction:
/// - records are ordered by slot id and ids are unique
/// - at most one record carries a video, and if one does it is first
/// - at most `MAX_PRODUCT_SLOTS` records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProductSet {
    records: Vec<ProductRecord>,
}

impl ProductSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(mut records: Vec<ProductRecord>) -> Self {
        records.sort_by(|a, b| a.id.slot_key().cmp(&b.id.slot_key()));
        records.dedup_by(|later, kept| {
            let duplicate = later.id == kept.id;
            if duplicate {
                warn!(id = %later.id, "Dropping duplicate product id");
            }
            duplicate
        });

        if let Some(pos) = records.iter().position(ProductRecord::has_video) {
            if pos > 0 {
                warn!(id = %records[pos].id, "Moving video-bearing product to the primary slot");
                let record = records.remove(pos);
                records.insert(0, record);
            }
        }
        for record in records.iter_mut().skip(1) {
            if record.video.take().is_some() {
                warn!(id = %record.id, "Only the primary product may carry a video; treating as image-only");
            }
        }

        if records.len() > MAX_PRODUCT_SLOTS {
            warn!(
                count = records.len(),
                max = MAX_PRODUCT_SLOTS,
                "Too many products, extra slots ignored"
            );
            records.truncate(MAX_PRODUCT_SLOTS);
        }

        Self { records }
    }

    /// Read a product set from a JSON map of id -> product, or an array
    /// (ids assigned "1", "2", ... in order). Entries that cannot be read at
    /// all are skipped.
    pub fn from_value(value: &Value) -> Self {
        let records: Vec<ProductRecord> = match value {
            Value::Object(map) => map
                .iter()
                .filter_map(|(key, raw)| parse_entry(key, raw))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .filter_map(|(i, raw)| parse_entry(&(i + 1).to_string(), raw))
                .collect(),
            Value::Null => Vec::new(),
            other => {
                warn!(kind = super::error::json_kind(other), "Ignoring product set that is not a map");
                Vec::new()
            }
        };
        Self::from_records(records)
    }

    pub fn primary(&self) -> Option<&ProductRecord> {
        self.records.first()
    }

    pub fn secondary(&self) -> Option<&ProductRecord> {
        self.records.get(1)
    }

    pub fn get(&self, id: &ProductId) -> Option<&ProductRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&ProductRecord> {
        self.records.get(index)
    }

    pub fn index_of(&self, id: &ProductId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The overlay can only be shown when slot 1 exists and carries a video.
    pub fn has_usable_primary(&self) -> bool {
        self.primary().is_some_and(ProductRecord::has_video)
    }

    pub(crate) fn into_records(self) -> Vec<ProductRecord> {
        self.records
    }
}

fn parse_entry(key: &str, raw: &Value) -> Option<ProductRecord> {
    match RawProduct::deserialize(raw) {
        Ok(product) => {
            debug!(id = key, "Parsed product record");
            Some(product.normalize(ProductId::new(key)))
        }
        Err(e) => {
            warn!(id = key, error = %e, "Skipping unreadable product record");
            None
        }
    }
}
