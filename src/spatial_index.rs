//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for efficient hit testing on the
//! page canvas. This reduces hit testing from O(n) to O(log n) for point
//! queries. Entries are built from element bounding boxes, so lines index
//! the box spanning their endpoints rather than their cached size hint.

use crate::geometry::Rect;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing an element's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub element_id: u64,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(element_id: u64, bounds: Rect) -> Self {
        Self {
            element_id,
            min_x: bounds.x,
            min_y: bounds.y,
            max_x: bounds.max_x(),
            max_y: bounds.max_y(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.element_id == other.element_id
    }
}

/// Spatial index over elements using an R-tree.
/// Provides O(log n) point queries for hit testing.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<u64, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build a spatial index from an iterator of element bounding boxes.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: Iterator<Item = (u64, Rect)>,
    {
        let entries: Vec<SpatialEntry> = elements
            .map(|(id, bounds)| SpatialEntry::new(id, bounds))
            .collect();

        let entries_map: HashMap<u64, SpatialEntry> =
            entries.iter().map(|entry| (entry.element_id, *entry)).collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    pub fn insert(&mut self, element_id: u64, bounds: Rect) {
        if let Some(old_entry) = self.entries.remove(&element_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(element_id, bounds);
        self.tree.insert(entry);
        self.entries.insert(element_id, entry);
    }

    pub fn remove(&mut self, element_id: u64) -> bool {
        if let Some(entry) = self.entries.remove(&element_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, element_id: u64, bounds: Rect) {
        self.insert(element_id, bounds);
    }

    /// Query all elements whose bounding box contains the given point
    /// (in page coordinates).
    pub fn query_point(&self, x: f32, y: f32) -> Vec<u64> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.element_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, elements: I)
    where
        I: Iterator<Item = (u64, Rect)>,
    {
        let entries: Vec<SpatialEntry> = elements
            .map(|(id, bounds)| SpatialEntry::new(id, bounds))
            .collect();

        self.entries = entries.iter().map(|entry| (entry.element_id, *entry)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
