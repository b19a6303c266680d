//! Geometry rule tests: bounding boxes, handles, and resize deltas.

use crate::helpers::{line_content, text_content};
use pagecraft::geometry::{
    self, ElementSnapshot, Handle, Rect, bounding_box, handle_at_point, handles, resize,
};
use pagecraft::types::{Element, ElementContent};

fn text_element(id: u64, pos: (f32, f32), width: f32, height: f32) -> Element {
    let mut element = Element::new(id, pos, text_content("T"));
    element.width = width;
    element.height = height;
    element
}

fn line_element(id: u64, start: (f32, f32), end: (f32, f32)) -> Element {
    Element::new(id, start, line_content(end))
}

// ============================================================================
// Bounding boxes
// ============================================================================

#[test]
fn test_box_bounding_box_is_position_and_size() {
    let element = text_element(1, (50.0, 60.0), 200.0, 20.0);
    assert_eq!(bounding_box(&element), Rect::new(50.0, 60.0, 200.0, 20.0));
}

#[test]
fn test_line_bounding_box_spans_endpoints() {
    let element = line_element(1, (150.0, 150.0), (250.0, 170.0));
    assert_eq!(bounding_box(&element), Rect::new(150.0, 150.0, 100.0, 20.0));
}

#[test]
fn test_line_bounding_box_with_reversed_endpoints() {
    // The box normalizes regardless of endpoint order.
    let element = line_element(1, (250.0, 170.0), (150.0, 150.0));
    assert_eq!(bounding_box(&element), Rect::new(150.0, 150.0, 100.0, 20.0));
}

#[test]
fn test_line_bounding_box_ignores_cached_hint() {
    let mut element = line_element(1, (10.0, 10.0), (110.0, 10.0));
    // Corrupt the cached hint; the box must still derive from endpoints.
    element.width = 999.0;
    element.height = 999.0;
    assert_eq!(bounding_box(&element), Rect::new(10.0, 10.0, 100.0, 0.0));
}

#[test]
fn test_zero_length_line_has_degenerate_box() {
    let element = line_element(1, (40.0, 40.0), (40.0, 40.0));
    let rect = bounding_box(&element);
    assert_eq!(rect, Rect::new(40.0, 40.0, 0.0, 0.0));
    assert!(rect.contains(40.0, 40.0));
}

#[test]
fn test_bounding_box_is_translation_consistent() {
    let element = text_element(1, (50.0, 50.0), 200.0, 20.0);
    let snapshot = ElementSnapshot::capture(&element);
    let moved = snapshot.translated(&element, 17.5, -8.25);

    let before = bounding_box(&element);
    let after = bounding_box(&moved);
    assert_eq!(after.x, before.x + 17.5);
    assert_eq!(after.y, before.y - 8.25);
    assert_eq!(after.width, before.width);
    assert_eq!(after.height, before.height);
}

#[test]
fn test_line_bounding_box_is_translation_consistent() {
    let element = line_element(1, (150.0, 150.0), (250.0, 190.0));
    let snapshot = ElementSnapshot::capture(&element);
    let moved = snapshot.translated(&element, 30.0, 12.0);

    let before = bounding_box(&element);
    let after = bounding_box(&moved);
    assert_eq!(after.x, before.x + 30.0);
    assert_eq!(after.y, before.y + 12.0);
    assert_eq!(after.width, before.width);
    assert_eq!(after.height, before.height);
}

// ============================================================================
// Handle sets
// ============================================================================

#[test]
fn test_box_element_has_eight_handles() {
    let element = text_element(1, (0.0, 0.0), 100.0, 50.0);
    let handle_set = handles(&element);
    assert_eq!(handle_set.len(), 8);

    let anchor = |wanted: Handle| {
        handle_set
            .iter()
            .find(|(handle, _)| *handle == wanted)
            .map(|(_, anchor)| *anchor)
            .unwrap()
    };
    assert_eq!(anchor(Handle::NorthWest), (0.0, 0.0));
    assert_eq!(anchor(Handle::North), (50.0, 0.0));
    assert_eq!(anchor(Handle::SouthEast), (100.0, 50.0));
    assert_eq!(anchor(Handle::West), (0.0, 25.0));
}

#[test]
fn test_line_element_has_exactly_two_handles() {
    let element = line_element(1, (150.0, 150.0), (250.0, 150.0));
    let handle_set = handles(&element);
    assert_eq!(
        handle_set,
        vec![
            (Handle::LineStart, (150.0, 150.0)),
            (Handle::LineEnd, (250.0, 150.0)),
        ]
    );
}

#[test]
fn test_handles_recompute_from_current_geometry() {
    let mut element = text_element(1, (0.0, 0.0), 100.0, 50.0);
    element.position = (10.0, 10.0);
    let handle_set = handles(&element);
    assert_eq!(handle_set[0], (Handle::NorthWest, (10.0, 10.0)));
}

#[test]
fn test_handle_hit_within_target() {
    let element = text_element(1, (0.0, 0.0), 100.0, 50.0);
    // 8x8 target centered on the south-east corner at (100, 50).
    assert_eq!(handle_at_point(&element, 100.0, 50.0), Some(Handle::SouthEast));
    assert_eq!(handle_at_point(&element, 103.9, 46.1), Some(Handle::SouthEast));
    assert_eq!(handle_at_point(&element, 105.0, 50.0), None);
    assert_eq!(handle_at_point(&element, 50.0, 25.0), None);
}

#[test]
fn test_line_handle_hit_on_endpoints() {
    let element = line_element(1, (150.0, 150.0), (250.0, 150.0));
    assert_eq!(handle_at_point(&element, 150.0, 150.0), Some(Handle::LineStart));
    assert_eq!(handle_at_point(&element, 252.0, 148.0), Some(Handle::LineEnd));
    assert_eq!(handle_at_point(&element, 200.0, 150.0), None);
}

// ============================================================================
// Resize deltas - boxes
// ============================================================================

#[test]
fn test_resize_south_east_grows_without_moving_origin() {
    let element = text_element(1, (50.0, 50.0), 200.0, 20.0);
    let resized = resize(&element, Handle::SouthEast, 30.0, 15.0);
    assert_eq!(resized.position, (50.0, 50.0));
    assert_eq!(resized.width, 230.0);
    assert_eq!(resized.height, 35.0);
}

#[test]
fn test_resize_north_west_moves_origin() {
    // A 200x20 box at (50,50), north-west handle dragged by (20, 5).
    let element = text_element(1, (50.0, 50.0), 200.0, 20.0);
    let resized = resize(&element, Handle::NorthWest, 20.0, 5.0);
    assert_eq!(resized.position, (70.0, 55.0));
    assert_eq!(resized.width, 180.0);
    assert_eq!(resized.height, 15.0);
}

#[test]
fn test_resize_single_axis_handles() {
    let element = text_element(1, (50.0, 50.0), 200.0, 20.0);

    let east = resize(&element, Handle::East, 25.0, 99.0);
    assert_eq!((east.position, east.width, east.height), ((50.0, 50.0), 225.0, 20.0));

    let north = resize(&element, Handle::North, 99.0, -10.0);
    assert_eq!(
        (north.position, north.width, north.height),
        ((50.0, 40.0), 200.0, 30.0)
    );

    let west = resize(&element, Handle::West, 10.0, 99.0);
    assert_eq!((west.position, west.width, west.height), ((60.0, 50.0), 190.0, 20.0));

    let south = resize(&element, Handle::South, 99.0, 5.0);
    assert_eq!(
        (south.position, south.width, south.height),
        ((50.0, 50.0), 200.0, 25.0)
    );
}

#[test]
fn test_resize_clamps_to_floor_with_opposite_corner_fixed() {
    // A north-west drag of (195, 18) would drive the size to 5x2; both
    // dimensions clamp to 10 with the opposite corner pinned at (250, 70).
    let element = text_element(1, (50.0, 50.0), 200.0, 20.0);
    let resized = resize(&element, Handle::NorthWest, 195.0, 18.0);
    assert_eq!(resized.width, 10.0);
    assert_eq!(resized.height, 10.0);
    assert_eq!(resized.position, (240.0, 60.0));
    // Opposite corner unchanged.
    assert_eq!(resized.position.0 + resized.width, 250.0);
    assert_eq!(resized.position.1 + resized.height, 70.0);
}

#[test]
fn test_resize_clamp_from_growing_side_keeps_origin() {
    let element = text_element(1, (50.0, 50.0), 200.0, 20.0);
    let resized = resize(&element, Handle::SouthEast, -500.0, -500.0);
    assert_eq!(resized.position, (50.0, 50.0));
    assert_eq!(resized.width, 10.0);
    assert_eq!(resized.height, 10.0);
}

#[test]
fn test_resize_clamp_mixed_handle() {
    // north-east: y moves with the clamp, x never does.
    let element = text_element(1, (50.0, 50.0), 200.0, 20.0);
    let resized = resize(&element, Handle::NorthEast, -300.0, 300.0);
    assert_eq!(resized.width, 10.0);
    assert_eq!(resized.height, 10.0);
    // Bottom edge fixed at y = 70.
    assert_eq!(resized.position.1, 60.0);
    // Left edge untouched by an east-side handle.
    assert_eq!(resized.position.0, 50.0);
}

// ============================================================================
// Resize deltas - lines
// ============================================================================

#[test]
fn test_line_end_handle_moves_only_end() {
    // A line from (150,150) to (250,150), end handle dragged by (50, 20).
    let element = line_element(1, (150.0, 150.0), (250.0, 150.0));
    let resized = resize(&element, Handle::LineEnd, 50.0, 20.0);
    assert_eq!(resized.position, (150.0, 150.0));
    match resized.content {
        ElementContent::Line { end, .. } => assert_eq!(end, (300.0, 170.0)),
        _ => panic!("expected a line"),
    }
}

#[test]
fn test_line_start_handle_moves_only_start() {
    let element = line_element(1, (150.0, 150.0), (250.0, 150.0));
    let resized = resize(&element, Handle::LineStart, -10.0, 5.0);
    assert_eq!(resized.position, (140.0, 155.0));
    match resized.content {
        ElementContent::Line { end, .. } => assert_eq!(end, (250.0, 150.0)),
        _ => panic!("expected a line"),
    }
}

#[test]
fn test_line_resize_has_no_floor() {
    // Dragging end onto start yields a zero-length line, no clamp, no error.
    let element = line_element(1, (150.0, 150.0), (250.0, 150.0));
    let resized = resize(&element, Handle::LineEnd, -100.0, 0.0);
    match resized.content {
        ElementContent::Line { end, .. } => assert_eq!(end, (150.0, 150.0)),
        _ => panic!("expected a line"),
    }
    let rect = bounding_box(&resized);
    assert_eq!((rect.width, rect.height), (0.0, 0.0));
}

#[test]
fn test_line_resize_refreshes_cached_hint() {
    let element = line_element(1, (0.0, 0.0), (100.0, 0.0));
    let resized = resize(&element, Handle::LineEnd, 20.0, 30.0);
    assert_eq!(resized.width, 120.0);
    assert_eq!(resized.height, 30.0);
}

// ============================================================================
// Snapshot translation
// ============================================================================

#[test]
fn test_snapshot_translation_measures_from_capture() {
    let element = text_element(1, (100.0, 100.0), 50.0, 50.0);
    let snapshot = ElementSnapshot::capture(&element);

    // Even if the element drifted since capture, translation is computed
    // from the snapshot origin.
    let mut drifted = element.clone();
    drifted.position = (500.0, 500.0);
    let moved = snapshot.translated(&drifted, 5.0, 5.0);
    assert_eq!(moved.position, (105.0, 105.0));
}

#[test]
fn test_snapshot_translates_both_line_endpoints() {
    let element = line_element(1, (10.0, 20.0), (110.0, 40.0));
    let snapshot = ElementSnapshot::capture(&element);
    let moved = snapshot.translated(&element, 5.0, -5.0);
    assert_eq!(moved.position, (15.0, 15.0));
    match moved.content {
        ElementContent::Line { end, .. } => assert_eq!(end, (115.0, 35.0)),
        _ => panic!("expected a line"),
    }
    // Size hint unchanged by translation.
    assert_eq!((moved.width, moved.height), (geometry::bounding_box(&moved).width, geometry::bounding_box(&moved).height));
}

#[test]
fn test_opacity_and_content_survive_resize() {
    let mut element = text_element(1, (50.0, 50.0), 200.0, 20.0);
    element.opacity = 0.0;
    let resized = resize(&element, Handle::SouthEast, 10.0, 10.0);
    assert_eq!(resized.opacity, 0.0);
    assert_eq!(resized.content, element.content);
}
