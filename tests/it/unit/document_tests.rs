//! Design document tests: id allocation, element lifecycle, hit queries,
//! and persistence.

use crate::helpers::{
    TestDesignBuilder, assert_element_count, line_content, placeholder_content, text_content,
};
use pagecraft::document::{Design, DesignFile};
use pagecraft::error::DesignError;
use pagecraft::types::ElementContent;

// ============================================================================
// Id allocation
// ============================================================================

#[test]
fn test_ids_are_sequential_and_unique() {
    let mut design = Design::new();
    let a = design.add_element((0.0, 0.0), text_content("a"));
    let b = design.add_element((10.0, 0.0), text_content("b"));
    let c = design.add_element((20.0, 0.0), text_content("c"));
    assert_eq!((a, b, c), (0, 1, 2));
}

#[test]
fn test_ids_are_never_reused_after_delete() {
    let mut design = Design::new();
    let a = design.add_element((0.0, 0.0), text_content("a"));
    let b = design.add_element((10.0, 0.0), text_content("b"));
    design.remove_element(b);
    design.remove_element(a);

    let c = design.add_element((20.0, 0.0), text_content("c"));
    assert_eq!(c, 2);
}

// ============================================================================
// Element lifecycle
// ============================================================================

#[test]
fn test_add_element_uses_kind_default_geometry() {
    let mut design = Design::new();
    let id = design.add_element((5.0, 6.0), text_content("hello"));

    let element = design.get_element(id).unwrap();
    assert_eq!(element.position, (5.0, 6.0));
    assert_eq!((element.width, element.height), (200.0, 20.0));
    assert_eq!(element.opacity, 1.0);
}

#[test]
fn test_add_line_caches_endpoint_box_as_hint() {
    let mut design = Design::new();
    let id = design.add_element((10.0, 20.0), line_content((110.0, 50.0)));

    let element = design.get_element(id).unwrap();
    assert_eq!((element.width, element.height), (100.0, 30.0));
}

#[test]
fn test_remove_element() {
    let mut design = TestDesignBuilder::new()
        .with_text_element("a", (0.0, 0.0))
        .with_text_element("b", (300.0, 0.0))
        .build();

    let removed = design.remove_element(0);
    assert!(removed.is_some());
    assert_element_count(&design, 1);
    assert!(design.get_element(0).is_none());
    assert!(design.remove_element(0).is_none());
}

#[test]
fn test_duplicate_element_gets_fresh_id_and_offset() {
    let mut design = TestDesignBuilder::new()
        .with_text_element("a", (50.0, 60.0))
        .build();

    let copy_id = design.duplicate_element(0).unwrap();
    assert_eq!(copy_id, 1);

    let original = design.get_element(0).unwrap();
    let copy = design.get_element(copy_id).unwrap();
    assert_eq!(copy.position, (62.0, 72.0));
    assert_eq!(copy.content, original.content);

    // The copy sits on top of the z-order.
    assert_eq!(design.elements.last().unwrap().id, copy_id);
}

#[test]
fn test_duplicate_line_offsets_both_endpoints() {
    let mut design = TestDesignBuilder::new()
        .with_line_element((10.0, 10.0), (110.0, 10.0))
        .build();

    let copy_id = design.duplicate_element(0).unwrap();
    let copy = design.get_element(copy_id).unwrap();
    assert_eq!(copy.position, (22.0, 22.0));
    match copy.content {
        ElementContent::Line { end, .. } => assert_eq!(end, (122.0, 22.0)),
        _ => panic!("expected a line"),
    }
}

#[test]
fn test_update_elements_replaces_by_id() {
    let mut design = TestDesignBuilder::new()
        .with_text_element("a", (0.0, 0.0))
        .with_text_element("b", (300.0, 0.0))
        .build();

    let mut moved_a = design.get_element(0).unwrap().clone();
    moved_a.position = (11.0, 22.0);
    let mut moved_b = design.get_element(1).unwrap().clone();
    moved_b.position = (333.0, 44.0);

    design.update_elements(vec![moved_a, moved_b]);
    assert_eq!(design.get_element(0).unwrap().position, (11.0, 22.0));
    assert_eq!(design.get_element(1).unwrap().position, (333.0, 44.0));
}

#[test]
fn test_update_for_unknown_element_is_dropped() {
    let mut design = TestDesignBuilder::new()
        .with_text_element("a", (0.0, 0.0))
        .build();

    let mut ghost = design.get_element(0).unwrap().clone();
    ghost.id = 99;
    assert!(!design.update_element(ghost));
    assert_element_count(&design, 1);
}

// ============================================================================
// Hit queries
// ============================================================================

#[test]
fn test_element_at_respects_z_order() {
    let mut design = TestDesignBuilder::new()
        .with_text_element("bottom", (0.0, 0.0))
        .with_text_element("top", (50.0, 10.0))
        .build();

    assert_eq!(design.element_at(60.0, 15.0), Some(1));
    design.remove_element(1);
    assert_eq!(design.element_at(60.0, 15.0), Some(0));
}

#[test]
fn test_element_at_misses_empty_canvas() {
    let design = TestDesignBuilder::new()
        .with_text_element("a", (0.0, 0.0))
        .build();
    assert_eq!(design.element_at(900.0, 900.0), None);
}

#[test]
fn test_element_at_uses_line_endpoint_box() {
    let design = TestDesignBuilder::new()
        .with_line_element((150.0, 150.0), (250.0, 170.0))
        .build();

    // Inside the endpoint-derived box.
    assert_eq!(design.element_at(200.0, 160.0), Some(0));
    // Outside it.
    assert_eq!(design.element_at(200.0, 180.0), None);
}

#[test]
fn test_spatial_index_follows_updates() {
    let mut design = TestDesignBuilder::new()
        .with_text_element("a", (0.0, 0.0))
        .build();

    let mut moved = design.get_element(0).unwrap().clone();
    moved.position = (500.0, 500.0);
    design.update_element(moved);
    design.update_spatial_index(0);

    assert_eq!(design.element_at(510.0, 510.0), Some(0));
    assert_eq!(design.element_at(10.0, 10.0), None);
}

// ============================================================================
// Derived data
// ============================================================================

#[test]
fn test_placeholder_labels_in_z_order_deduplicated() {
    let design = TestDesignBuilder::new()
        .with_placeholder_element("customer", (0.0, 0.0))
        .with_text_element("ignored", (0.0, 50.0))
        .with_placeholder_element("date", (0.0, 100.0))
        .with_placeholder_element("customer", (0.0, 150.0))
        .build();

    assert_eq!(design.placeholder_labels(), vec!["customer", "date"]);
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("design.json");

    let mut design = TestDesignBuilder::new()
        .with_text_element("hello", (50.0, 50.0))
        .with_line_element((150.0, 150.0), (250.0, 150.0))
        .with_placeholder_element("customer", (50.0, 200.0))
        .with_image_element(vec![1, 2, 3, 4], (50.0, 300.0))
        .build();
    design.save_as(&path).unwrap();
    assert!(!design.is_dirty());

    let loaded = Design::load(&path).unwrap();
    assert_eq!(loaded.elements, design.elements);
    assert_eq!(loaded.page, design.page);
    assert_eq!(loaded.next_element_id, 4);
    assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
}

#[test]
fn test_loaded_design_answers_hit_queries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("design.json");

    let mut design = TestDesignBuilder::new()
        .with_text_element("hello", (50.0, 50.0))
        .build();
    design.save_as(&path).unwrap();

    let loaded = Design::load(&path).unwrap();
    assert_eq!(loaded.element_at(60.0, 60.0), Some(0));
}

#[test]
fn test_load_rejects_duplicate_ids() {
    let mut design = TestDesignBuilder::new()
        .with_text_element("a", (0.0, 0.0))
        .with_text_element("b", (300.0, 0.0))
        .build();
    design.elements[1].id = 0;

    let file = design.to_file();
    match Design::from_file(file) {
        Err(DesignError::DuplicateElementId { id }) => assert_eq!(id, 0),
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("expected duplicate id rejection"),
    }
}

#[test]
fn test_next_id_resumes_past_highest_loaded_id() {
    let mut design = TestDesignBuilder::new()
        .with_text_element("a", (0.0, 0.0))
        .with_text_element("b", (300.0, 0.0))
        .build();
    // Simulate a file whose ids are sparse.
    design.elements[1].id = 17;

    let mut reloaded = Design::from_file(design.to_file()).unwrap();
    assert_eq!(reloaded.next_element_id, 18);
    let new_id = reloaded.add_element((0.0, 100.0), text_content("c"));
    assert_eq!(new_id, 18);
}

#[test]
fn test_dirty_tracking() {
    let mut design = Design::new();
    assert!(!design.is_dirty());

    design.add_element((0.0, 0.0), text_content("a"));
    assert!(design.is_dirty());

    let dir = tempfile::tempdir().unwrap();
    design.save_as(dir.path().join("design.json")).unwrap();
    assert!(!design.is_dirty());
}

#[test]
fn test_design_file_shape() {
    // The serialized form carries exactly page settings + elements.
    let design = TestDesignBuilder::new()
        .with_text_element("a", (0.0, 0.0))
        .build();
    let json = serde_json::to_value(design.to_file()).unwrap();

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(object.contains_key("page_settings"));
    assert!(object.contains_key("elements"));

    let roundtrip: DesignFile = serde_json::from_value(json).unwrap();
    assert_eq!(roundtrip.elements.len(), 1);
}
