//! R-tree of the overlay's interactive regions, for outside-click dismissal.
//!
//! The host reports where the carousel, detail panel and sheet ended up on
//! screen; a press is "outside" when no region contains it.

use crate::types::{Bounds, Point};
use rstar::{RTree, RTreeObject, AABB};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionKind {
    Carousel,
    DetailPanel,
    ModalSheet,
}

#[derive(Debug, Clone, Copy)]
struct RegionEntry {
    kind: RegionKind,
    bounds: Bounds,
}

impl RTreeObject for RegionEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.left(), self.bounds.top()],
            [self.bounds.right(), self.bounds.bottom()],
        )
    }
}

impl PartialEq for RegionEntry {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

pub struct HitRegions {
    tree: RTree<RegionEntry>,
    entries: HashMap<RegionKind, RegionEntry>,
}

impl Default for HitRegions {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HitRegions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(kind, entry)| (kind, entry.bounds)))
            .finish()
    }
}

impl HitRegions {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    pub fn from_regions<I>(regions: I) -> Self
    where
        I: IntoIterator<Item = (RegionKind, Bounds)>,
    {
        let entries: HashMap<RegionKind, RegionEntry> = regions
            .into_iter()
            .map(|(kind, bounds)| (kind, RegionEntry { kind, bounds }))
            .collect();
        Self {
            tree: RTree::bulk_load(entries.values().copied().collect()),
            entries,
        }
    }

    /// Insert or move a region.
    pub fn set(&mut self, kind: RegionKind, bounds: Bounds) {
        if let Some(old) = self.entries.remove(&kind) {
            self.tree.remove(&old);
        }
        let entry = RegionEntry { kind, bounds };
        self.tree.insert(entry);
        self.entries.insert(kind, entry);
    }

    pub fn remove(&mut self, kind: RegionKind) -> bool {
        match self.entries.remove(&kind) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Regions containing `point`.
    pub fn query_point(&self, point: Point) -> Vec<RegionKind> {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([point.x, point.y]))
            .filter(|entry| entry.bounds.contains(point))
            .map(|entry| entry.kind)
            .collect()
    }

    pub fn contains(&self, kind: RegionKind, point: Point) -> bool {
        self.entries
            .get(&kind)
            .is_some_and(|entry| entry.bounds.contains(point))
    }

    /// No interactive region contains `point`.
    pub fn is_outside(&self, point: Point) -> bool {
        self.query_point(point).is_empty()
    }

    pub fn bounds(&self, kind: RegionKind) -> Option<Bounds> {
        self.entries.get(&kind).map(|entry| entry.bounds)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
