//! Gesture state machine - one explicit state for the active pointer
//! gesture.
//!
//! A single enum instead of scattered flags makes impossible states
//! unrepresentable: there is exactly one active gesture at a time, and each
//! state carries only the data that gesture needs.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging    (pointer down on an element body)
//! Idle -> Resizing    (pointer down on a resize handle of a selected element)
//!
//! Any  -> Idle        (pointer up - commits whatever the last move produced)
//! ```

use crate::geometry::{ElementSnapshot, Handle};
use crate::types::Element;

/// The active pointer gesture.
#[derive(Debug, Clone)]
pub enum GestureState {
    /// No active gesture
    Idle,

    /// Translating every element in the gesture snapshot
    Dragging {
        /// Pointer position at gesture start, in page coordinates.
        /// Every move measures against this frozen origin.
        start: (f32, f32),
        /// Starting geometry of each affected element, captured once
        snapshot: Vec<ElementSnapshot>,
    },

    /// Resizing a single element by one handle
    Resizing {
        /// Full state of the element at gesture start
        original: Element,
        /// The handle being dragged
        handle: Handle,
        /// Pointer reference position. Fixed at the gesture start for box
        /// handles; rebased to the latest pointer position after every move
        /// for line endpoint handles.
        start: (f32, f32),
    },
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while any gesture is active
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// Ids of the elements the active gesture touches
    pub fn affected_ids(&self) -> Vec<u64> {
        match self {
            Self::Idle => Vec::new(),
            Self::Dragging { snapshot, .. } => {
                snapshot.iter().map(|entry| entry.id).collect()
            }
            Self::Resizing { original, .. } => vec![original.id],
        }
    }

    /// The id of the element being resized, if any
    pub fn resizing_element(&self) -> Option<u64> {
        match self {
            Self::Resizing { original, .. } => Some(original.id),
            _ => None,
        }
    }

    /// Reset to Idle. The single cleanup path for every gesture end.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
