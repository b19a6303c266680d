//! The headless pointer engine.
//!
//! Turns raw pointer events (already converted to page coordinates) into
//! selection transitions and batched geometry updates. The engine reads the
//! document and proposes whole-element updates; it never mutates the store.
//! All transitions are synchronous, and a gesture either fully applies or is
//! skipped entirely - partial updates are never emitted.
//!
//! Because the pointer can move fast enough to skip frames, every move
//! recomputes from the frozen gesture-start snapshot and the *current*
//! pointer position, never from the previous frame's output. Replaying only
//! the final pointer position yields the same final geometry.

use crate::document::Design;
use crate::geometry::{self, ElementSnapshot, Handle};
use crate::input::state::GestureState;
use crate::selection::SelectionManager;
use crate::types::Element;

/// Pointer gesture engine. One per canvas.
#[derive(Debug, Default)]
pub struct InteractionEngine {
    state: GestureState,
}

impl InteractionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Pointer pressed at `pos` (page coordinates), with `append` true when
    /// the shift modifier is held.
    ///
    /// Resolution order: resize handles of selected elements first, then
    /// element bodies topmost-first, then empty canvas (clears the
    /// selection). Selection changes happen here and only here.
    pub fn pointer_down(
        &mut self,
        design: &Design,
        selection: &mut SelectionManager,
        pos: (f32, f32),
        append: bool,
    ) {
        crate::profile_scope!("pointer_down");

        if self.state.is_active() {
            // A gesture can only start from Idle; a stray down event means
            // we missed the matching up somewhere.
            tracing::warn!("Pointer down during an active gesture; resetting to idle");
            self.state.reset();
        }

        // Handles first: they sit on top of element bodies.
        if let Some((element_id, handle)) = handle_under_point(design, selection, pos) {
            let Some(element) = design.get_element(element_id) else {
                tracing::warn!(
                    id = element_id,
                    "Resize handle hit on an element missing from the document; gesture aborted"
                );
                return;
            };
            // Resizing targets exactly one element, however many are selected.
            self.state = GestureState::Resizing {
                original: element.clone(),
                handle,
                start: pos,
            };
            return;
        }

        if let Some(element_id) = design.element_at(pos.0, pos.1) {
            if append {
                selection.toggle(element_id);
                if !selection.contains(element_id) {
                    // Shift-click just removed this element from the
                    // selection; nothing to drag.
                    return;
                }
            } else if !selection.contains(element_id) {
                // Pressing an unselected element collapses the selection to it.
                selection.select(&[element_id], false);
            }

            // The snapshot covers the entire current selection, captured
            // once so later moves measure against these origins.
            let snapshot: Vec<ElementSnapshot> = selection
                .iter()
                .filter_map(|id| design.get_element(id).map(ElementSnapshot::capture))
                .collect();
            if snapshot.is_empty() {
                tracing::warn!("Selected elements missing from the document; drag aborted");
                return;
            }
            self.state = GestureState::Dragging {
                start: pos,
                snapshot,
            };
            return;
        }

        // Empty canvas: clear the selection, no gesture.
        selection.select(&[], false);
    }

    /// Pointer moved to `pos`. Returns the batch of element updates the
    /// move produces - empty while idle. The caller applies the whole batch
    /// to the store in one step.
    pub fn pointer_move(&mut self, design: &Design, pos: (f32, f32)) -> Vec<Element> {
        crate::profile_scope!("pointer_move");

        let mut lost_target = false;
        let updates = match &mut self.state {
            GestureState::Idle => Vec::new(),

            GestureState::Dragging { start, snapshot } => {
                let dx = pos.0 - start.0;
                let dy = pos.1 - start.1;
                snapshot
                    .iter()
                    .filter_map(|entry| {
                        design
                            .get_element(entry.id)
                            .map(|element| entry.translated(element, dx, dy))
                    })
                    .collect()
            }

            GestureState::Resizing {
                original,
                handle,
                start,
            } => {
                let dx = pos.0 - start.0;
                let dy = pos.1 - start.1;
                let handle = *handle;

                if handle.is_line_handle() {
                    // Endpoint tracking is incremental: apply the delta to
                    // the element's current geometry and rebase the pointer
                    // reference, keeping the endpoint glued to the cursor.
                    match design.get_element(original.id) {
                        Some(current) => {
                            let updated = geometry::resize(current, handle, dx, dy);
                            *start = pos;
                            vec![updated]
                        }
                        None => {
                            lost_target = true;
                            Vec::new()
                        }
                    }
                } else {
                    // Box resizing always measures from the frozen original.
                    vec![geometry::resize(original, handle, dx, dy)]
                }
            }
        };

        if lost_target {
            tracing::warn!("Resized element vanished mid-gesture; returning to idle");
            self.state.reset();
        }
        updates
    }

    /// Pointer released. Returns the ids the finished gesture touched (for
    /// spatial-index refresh) and resets to idle; the geometry from the last
    /// move stands as committed. There is no separate cancel gesture.
    pub fn pointer_up(&mut self) -> Vec<u64> {
        let affected = self.state.affected_ids();
        self.state.reset();
        affected
    }
}

/// Find a resize handle under the pointer. Only selected elements expose
/// handles; among them, topmost (later in z-order) wins.
fn handle_under_point(
    design: &Design,
    selection: &SelectionManager,
    pos: (f32, f32),
) -> Option<(u64, Handle)> {
    design
        .elements
        .iter()
        .rev()
        .filter(|element| selection.contains(element.id))
        .find_map(|element| {
            geometry::handle_at_point(element, pos.0, pos.1).map(|handle| (element.id, handle))
        })
}
