//! Typed events from the carousel to the overlay that owns it.
//!
//! Scoped to one overlay instance: the overlay creates the channel, hands the
//! sender to its carousel and drains the receiver after each input.

use crate::data::ProductId;
use std::sync::mpsc::Sender;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReelEvent {
    /// Outer slide change finished; the detail panel follows this record
    ActiveRecordChanged { index: usize, id: ProductId },
    /// Footer summary of a slide was tapped (mobile sheet)
    SummaryTapped(ProductId),
    /// Sound toggled on one video
    SoundToggled { id: ProductId, muted: bool },
}

#[derive(Debug, Clone)]
pub struct ReelEvents(Sender<ReelEvent>);

impl ReelEvents {
    pub fn new(sender: Sender<ReelEvent>) -> Self {
        Self(sender)
    }

    pub fn emit(&self, event: ReelEvent) {
        if let Err(err) = self.0.send(event) {
            trace!(event = ?err.0, "Reel event dropped, receiver gone");
        }
    }
}
