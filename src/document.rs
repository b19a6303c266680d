//! The design document: the single source of truth for page settings and
//! the ordered element list.
//!
//! The interaction engine reads this store and proposes whole-element
//! updates; it never mutates elements in place. Array order is z-order
//! (later elements draw on top). The store also owns id allocation,
//! persistence, and the spatial index backing hit queries.

use crate::constants::DUPLICATE_OFFSET;
use crate::error::{DesignError, DesignResult};
use crate::geometry;
use crate::spatial_index::SpatialIndex;
use crate::types::{Element, ElementContent, PageSettings};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// The serialized form of a design: page settings plus the order-preserving
/// element list. Nothing else goes in the file; the id counter is derived on
/// load and the view transform is session state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DesignFile {
    pub page_settings: PageSettings,
    pub elements: Vec<Element>,
}

/// An open design document.
pub struct Design {
    pub page: PageSettings,
    pub elements: Vec<Element>,
    /// Next id to allocate. Ids are never reused, even after deletes.
    pub next_element_id: u64,
    /// Where this design saves to, once known
    pub path: Option<PathBuf>,
    spatial: SpatialIndex,
    dirty: bool,
}

impl Default for Design {
    fn default() -> Self {
        Self::new()
    }
}

impl Design {
    /// An empty A4 design.
    pub fn new() -> Self {
        Self {
            page: PageSettings::default(),
            elements: Vec::new(),
            next_element_id: 0,
            path: None,
            spatial: SpatialIndex::new(),
            dirty: false,
        }
    }

    /// Build a document from its serialized form.
    ///
    /// Rejects files carrying the same element id twice; the uniqueness
    /// invariant underpins every other part of the system. The id counter
    /// resumes past the highest id seen.
    pub fn from_file(file: DesignFile) -> DesignResult<Self> {
        let mut seen = HashSet::new();
        for element in &file.elements {
            if !seen.insert(element.id) {
                return Err(DesignError::DuplicateElementId { id: element.id });
            }
        }
        let next_element_id = file
            .elements
            .iter()
            .map(|element| element.id + 1)
            .max()
            .unwrap_or(0);

        let spatial = SpatialIndex::from_elements(
            file.elements
                .iter()
                .map(|element| (element.id, geometry::bounding_box(element))),
        );

        Ok(Self {
            page: file.page_settings,
            elements: file.elements,
            next_element_id,
            path: None,
            spatial,
            dirty: false,
        })
    }

    /// The serialized form of the current document.
    pub fn to_file(&self) -> DesignFile {
        DesignFile {
            page_settings: self.page.clone(),
            elements: self.elements.clone(),
        }
    }

    pub fn load(path: impl Into<PathBuf>) -> DesignResult<Self> {
        let path = path.into();
        let json = std::fs::read_to_string(&path)?;
        let file: DesignFile = serde_json::from_str(&json)?;
        let mut design = Self::from_file(file)?;
        design.path = Some(path);
        Ok(design)
    }

    /// Save to the design's path, failing if it has none.
    pub fn save(&mut self) -> DesignResult<()> {
        let path = self.path.clone().ok_or(DesignError::NoPath)?;
        self.save_as(path)
    }

    /// Save to `path` atomically (temp file in the same directory, then
    /// rename), adopting `path` as the design's path.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> DesignResult<()> {
        let path = path.into();
        let json = serde_json::to_string_pretty(&self.to_file())?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&path).map_err(|error| DesignError::Io(error.error))?;

        tracing::info!(path = %path.display(), elements = self.elements.len(), "Design saved");
        self.path = Some(path);
        self.dirty = false;
        Ok(())
    }

    /// Default location for unsaved designs.
    pub fn default_save_path() -> PathBuf {
        dirs::document_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Pagecraft")
            .join("untitled.json")
    }

    // ==================== Element Lifecycle ====================

    /// Add an element with default geometry for its kind, returning its id.
    pub fn add_element(&mut self, position: (f32, f32), content: ElementContent) -> u64 {
        let id = self.next_element_id;
        self.next_element_id += 1;

        let element = Element::new(id, position, content);
        self.spatial.insert(id, geometry::bounding_box(&element));
        tracing::debug!(id, kind = element.content.kind_label(), "Element added");
        self.elements.push(element);
        self.dirty = true;
        id
    }

    pub fn get_element(&self, id: u64) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub fn get_element_mut(&mut self, id: u64) -> Option<&mut Element> {
        self.dirty = true;
        self.elements.iter_mut().find(|element| element.id == id)
    }

    /// Replace a stored element with an updated copy (matched by id).
    /// Returns false (and warns) if the element is gone.
    pub fn update_element(&mut self, updated: Element) -> bool {
        match self
            .elements
            .iter_mut()
            .find(|element| element.id == updated.id)
        {
            Some(slot) => {
                *slot = updated;
                self.dirty = true;
                true
            }
            None => {
                tracing::warn!(id = updated.id, "Update for unknown element dropped");
                false
            }
        }
    }

    /// Apply a batch of updates in one step.
    pub fn update_elements(&mut self, updated: Vec<Element>) {
        for element in updated {
            self.update_element(element);
        }
    }

    /// Remove an element. Callers are responsible for dropping its id from
    /// the selection as well.
    pub fn remove_element(&mut self, id: u64) -> Option<Element> {
        let index = self.elements.iter().position(|element| element.id == id)?;
        self.spatial.remove(id);
        self.dirty = true;
        let removed = self.elements.remove(index);
        tracing::debug!(id, kind = removed.content.kind_label(), "Element removed");
        Some(removed)
    }

    /// Clone an element under a fresh id, slightly offset, on top of the
    /// z-order. Returns the new id.
    pub fn duplicate_element(&mut self, id: u64) -> Option<u64> {
        let source = self.get_element(id)?.clone();
        let new_id = self.next_element_id;
        self.next_element_id += 1;

        let mut copy = source;
        copy.id = new_id;
        copy.position.0 += DUPLICATE_OFFSET;
        copy.position.1 += DUPLICATE_OFFSET;
        if let ElementContent::Line { end, .. } = &mut copy.content {
            end.0 += DUPLICATE_OFFSET;
            end.1 += DUPLICATE_OFFSET;
        }

        self.spatial.insert(new_id, geometry::bounding_box(&copy));
        self.elements.push(copy);
        self.dirty = true;
        Some(new_id)
    }

    // ==================== Hit Testing ====================

    /// The topmost element whose bounding box contains the point, if any.
    ///
    /// The spatial index narrows the candidates; the precise containment
    /// check walks the candidates in reverse z-order so later (on-top)
    /// elements win.
    pub fn element_at(&self, x: f32, y: f32) -> Option<u64> {
        let candidates: HashSet<u64> = self.spatial.query_point(x, y).into_iter().collect();
        self.elements
            .iter()
            .rev()
            .filter(|element| candidates.contains(&element.id))
            .find(|element| geometry::bounding_box(element).contains(x, y))
            .map(|element| element.id)
    }

    /// Refresh one element's spatial entry after its geometry settled.
    pub fn update_spatial_index(&mut self, id: u64) {
        if let Some(element) = self.elements.iter().find(|element| element.id == id) {
            self.spatial.update(id, geometry::bounding_box(element));
        } else {
            self.spatial.remove(id);
        }
    }

    pub fn rebuild_spatial_index(&mut self) {
        self.spatial.rebuild(
            self.elements
                .iter()
                .map(|element| (element.id, geometry::bounding_box(element))),
        );
    }

    // ==================== Derived Data ====================

    /// Data-binding keys of every placeholder element, in z-order, first
    /// occurrence wins.
    pub fn placeholder_labels(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.elements
            .iter()
            .filter_map(|element| match &element.content {
                ElementContent::Placeholder { label, .. } => Some(label.clone()),
                _ => None,
            })
            .filter(|label| seen.insert(label.clone()))
            .collect()
    }

    // ==================== Dirty Tracking ====================

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
