//! Events an overlay sends to whoever mounted it.

use crate::data::ProductId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "id", rename_all = "snake_case")]
pub enum OverlayEvent {
    /// Dismissal requested (backdrop, outside click, close control)
    CloseRequested,
    /// Detail panel now follows this record
    ActiveRecordChanged(ProductId),
    SheetOpened(ProductId),
    SheetClosed,
}
