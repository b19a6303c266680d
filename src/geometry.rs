//! Pure geometry rules for elements: bounding boxes, resize handles, and
//! delta application.
//!
//! Everything here is stateless and operates in page points, so the
//! interaction engine and any renderer compute from the same functions.
//! Handle anchors are recomputed from current geometry on every call;
//! nothing is cached.

use crate::constants::{HANDLE_SIZE, MIN_ELEMENT_SIZE};
use crate::types::{Element, ElementContent};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in page points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Point containment, edges inclusive. A degenerate (zero-area) rect
    /// still contains points exactly on it.
    #[inline]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }
}

/// Resize handle positions.
///
/// Box elements expose the eight compass handles on their bounding box;
/// lines expose exactly their two endpoints. A small closed enumeration
/// instead of stringly identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    LineStart,
    LineEnd,
}

impl Handle {
    /// The eight box handles, clockwise from north-west.
    pub fn box_handles() -> &'static [Handle; 8] {
        &[
            Handle::NorthWest,
            Handle::North,
            Handle::NorthEast,
            Handle::East,
            Handle::SouthEast,
            Handle::South,
            Handle::SouthWest,
            Handle::West,
        ]
    }

    /// The two line endpoint handles.
    pub fn line_handles() -> &'static [Handle; 2] {
        &[Handle::LineStart, Handle::LineEnd]
    }

    pub fn is_line_handle(self) -> bool {
        matches!(self, Handle::LineStart | Handle::LineEnd)
    }

    /// Handles that drag the left edge (and therefore the origin's x).
    fn moves_left_edge(self) -> bool {
        matches!(self, Handle::West | Handle::NorthWest | Handle::SouthWest)
    }

    /// Handles that drag the top edge (and therefore the origin's y).
    fn moves_top_edge(self) -> bool {
        matches!(self, Handle::North | Handle::NorthWest | Handle::NorthEast)
    }

    fn moves_right_edge(self) -> bool {
        matches!(self, Handle::East | Handle::NorthEast | Handle::SouthEast)
    }

    fn moves_bottom_edge(self) -> bool {
        matches!(self, Handle::South | Handle::SouthWest | Handle::SouthEast)
    }
}

/// The axis-aligned bounding box of an element.
///
/// Box kinds report their position and size directly. Lines report the box
/// spanning both endpoints; their stored `width`/`height` hint is never
/// consulted. This box drives both the hit-region used for drag initiation
/// and the visible selection outline.
pub fn bounding_box(element: &Element) -> Rect {
    match &element.content {
        ElementContent::Line { end, .. } => {
            let (x1, y1) = element.position;
            let (x2, y2) = *end;
            Rect::new(x1.min(x2), y1.min(y2), (x2 - x1).abs(), (y2 - y1).abs())
        }
        ElementContent::Text { .. }
        | ElementContent::Image { .. }
        | ElementContent::Placeholder { .. } => Rect::new(
            element.position.0,
            element.position.1,
            element.width,
            element.height,
        ),
    }
}

/// Anchor points for every handle the element exposes, computed fresh from
/// its current geometry.
pub fn handles(element: &Element) -> Vec<(Handle, (f32, f32))> {
    match &element.content {
        ElementContent::Line { end, .. } => vec![
            (Handle::LineStart, element.position),
            (Handle::LineEnd, *end),
        ],
        ElementContent::Text { .. }
        | ElementContent::Image { .. }
        | ElementContent::Placeholder { .. } => {
            let rect = bounding_box(element);
            let mid_x = rect.x + rect.width / 2.0;
            let mid_y = rect.y + rect.height / 2.0;
            vec![
                (Handle::NorthWest, (rect.x, rect.y)),
                (Handle::North, (mid_x, rect.y)),
                (Handle::NorthEast, (rect.max_x(), rect.y)),
                (Handle::East, (rect.max_x(), mid_y)),
                (Handle::SouthEast, (rect.max_x(), rect.max_y())),
                (Handle::South, (mid_x, rect.max_y())),
                (Handle::SouthWest, (rect.x, rect.max_y())),
                (Handle::West, (rect.x, mid_y)),
            ]
        }
    }
}

/// The handle under a point, if any. Hit targets are fixed-size squares
/// centered on the anchors. Earlier handles win when targets overlap on a
/// small element.
pub fn handle_at_point(element: &Element, x: f32, y: f32) -> Option<Handle> {
    let half = HANDLE_SIZE / 2.0;
    handles(element)
        .into_iter()
        .find(|(_, (ax, ay))| (x - ax).abs() <= half && (y - ay).abs() <= half)
        .map(|(handle, _)| handle)
}

/// Apply a resize delta to an element, returning its new geometry.
///
/// Box kinds move the edges the handle touches and clamp each dimension to
/// the minimum extent; when a clamped handle was dragging the origin, the
/// origin is recomputed so the opposite edge stays put. Lines move exactly
/// one endpoint and have no minimum length.
pub fn resize(element: &Element, handle: Handle, dx: f32, dy: f32) -> Element {
    let mut resized = element.clone();
    match &mut resized.content {
        ElementContent::Line { end, .. } => match handle {
            Handle::LineStart => {
                resized.position.0 += dx;
                resized.position.1 += dy;
            }
            Handle::LineEnd => {
                end.0 += dx;
                end.1 += dy;
            }
            other => unreachable!("box handle {other:?} on a line element"),
        },
        ElementContent::Text { .. }
        | ElementContent::Image { .. }
        | ElementContent::Placeholder { .. } => {
            if handle.is_line_handle() {
                unreachable!("line handle {handle:?} on a box element");
            }
            let (x0, y0) = element.position;
            let (w0, h0) = (element.width, element.height);

            if handle.moves_right_edge() {
                resized.width = w0 + dx;
            } else if handle.moves_left_edge() {
                resized.position.0 = x0 + dx;
                resized.width = w0 - dx;
            }
            if handle.moves_bottom_edge() {
                resized.height = h0 + dy;
            } else if handle.moves_top_edge() {
                resized.position.1 = y0 + dy;
                resized.height = h0 - dy;
            }

            // Clamp to the floor, keeping the opposite edge fixed for
            // origin-moving handles so the box never flips or jumps.
            if resized.width < MIN_ELEMENT_SIZE {
                if handle.moves_left_edge() {
                    resized.position.0 = x0 + w0 - MIN_ELEMENT_SIZE;
                }
                resized.width = MIN_ELEMENT_SIZE;
            }
            if resized.height < MIN_ELEMENT_SIZE {
                if handle.moves_top_edge() {
                    resized.position.1 = y0 + h0 - MIN_ELEMENT_SIZE;
                }
                resized.height = MIN_ELEMENT_SIZE;
            }
        }
    }
    resized.refresh_bounds_hint();
    resized
}

/// Frozen starting geometry for one element affected by a gesture.
///
/// Captured once at gesture start; every subsequent move recomputes from
/// this baseline and the total pointer displacement, so dropped or coalesced
/// move events cannot accumulate drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementSnapshot {
    pub id: u64,
    pub origin: (f32, f32),
    /// Starting second endpoint, for lines
    pub line_end: Option<(f32, f32)>,
}

impl ElementSnapshot {
    pub fn capture(element: &Element) -> Self {
        Self {
            id: element.id,
            origin: element.position,
            line_end: match &element.content {
                ElementContent::Line { end, .. } => Some(*end),
                _ => None,
            },
        }
    }

    /// Produce the element translated by `(dx, dy)` from this snapshot's
    /// baseline, leaving size and content untouched. Lines translate both
    /// endpoints.
    pub fn translated(&self, element: &Element, dx: f32, dy: f32) -> Element {
        let mut moved = element.clone();
        moved.position = (self.origin.0 + dx, self.origin.1 + dy);
        if let (ElementContent::Line { end, .. }, Some((ex, ey))) =
            (&mut moved.content, self.line_end)
        {
            *end = (ex + dx, ey + dy);
        }
        moved
    }
}
