//! Seam for an external product provider.
//!
//! The engine never performs network calls. A host that can look products up
//! (for example through a commerce REST endpoint) implements `ProductSource`
//! and the set asks it for slots it is missing.

use super::product::{ProductId, ProductSet, RawProduct};
use tracing::debug;

pub trait ProductSource {
    /// Look up a product by slot id. `None` when the provider has nothing.
    fn fetch(&self, id: &ProductId) -> Option<RawProduct>;
}

impl<F> ProductSource for F
where
    F: Fn(&ProductId) -> Option<RawProduct>,
{
    fn fetch(&self, id: &ProductId) -> Option<RawProduct> {
        self(id)
    }
}

impl ProductSet {
    /// Ask `source` for each id in `wanted` not already present.
    ///
    /// Returns how many records were added.
    pub fn fill_from(&mut self, source: &dyn ProductSource, wanted: &[ProductId]) -> usize {
        let missing: Vec<&ProductId> = wanted.iter().filter(|id| self.get(id).is_none()).collect();
        if missing.is_empty() {
            return 0;
        }

        let mut records = std::mem::take(self).into_records();
        let mut added = 0;
        for id in missing {
            if let Some(raw) = source.fetch(id) {
                debug!(id = %id, "Product provided by external source");
                records.push(raw.normalize(id.clone()));
                added += 1;
            }
        }
        *self = ProductSet::from_records(records);
        added
    }
}
