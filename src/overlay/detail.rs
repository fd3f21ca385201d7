//! Product detail fields as the side panel and the mobile sheet show them.
//!
//! Missing optional fields are omitted, never rendered as placeholders.

use crate::data::{ProductId, ProductRecord};
use serde::Serialize;

/// Call-to-action label on the mobile sheet
pub const SHEET_CTA_LABEL: &str = "Buy now";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub id: ProductId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

impl DetailView {
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            price: record.display_price().map(str::to_string),
            description: record.description.clone().or_else(|| record.short_description.clone()),
            stock: record.stock_status_text.clone(),
            sku: record.sku.clone(),
            shipping: record.shipping.clone(),
            payment: record.payment.clone(),
            permalink: record.permalink.clone(),
        }
    }
}

/// Mobile bottom sheet: the detail fields plus a large image and a CTA.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetView {
    #[serde(flatten)]
    pub detail: DetailView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub cta_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_href: Option<String>,
}

impl SheetView {
    pub fn from_record(record: &ProductRecord) -> Self {
        let detail = DetailView::from_record(record);
        Self {
            image: record.images.first().cloned(),
            cta_label: SHEET_CTA_LABEL,
            cta_href: detail.permalink.clone(),
            detail,
        }
    }
}

/// Footer summary under each mobile slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub id: ProductId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

impl SummaryView {
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            price: record.display_price().map(str::to_string),
            excerpt: record.summary().map(str::to_string),
        }
    }
}
