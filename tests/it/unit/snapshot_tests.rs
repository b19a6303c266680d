//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the serialized design-file format and the stable
//! string outputs of the element model. If one of these changes, the design
//! file format changed with it - update deliberately.

use crate::helpers::{image_content, line_content, placeholder_content, text_content};
use pagecraft::types::{Element, ElementContent, ImageData};

// ============================================================================
// Element serialization
// ============================================================================

#[test]
fn snapshot_text_element_json() {
    let element = Element::new(1, (50.0, 50.0), text_content("Hello, Pagecraft!"));
    let json = serde_json::to_string_pretty(&element).unwrap();
    insta::assert_snapshot!(json, @r##"
{
  "id": 1,
  "position": [
    50.0,
    50.0
  ],
  "width": 200.0,
  "height": 20.0,
  "opacity": 1.0,
  "content": {
    "Text": {
      "text": "Hello, Pagecraft!",
      "font_family": "Helvetica",
      "font_size": 12.0,
      "color": "#222222"
    }
  }
}
"##);
}

#[test]
fn snapshot_line_element_json() {
    let element = Element::new(2, (150.0, 150.0), line_content((250.0, 150.0)));
    let json = serde_json::to_string_pretty(&element).unwrap();
    insta::assert_snapshot!(json, @r##"
{
  "id": 2,
  "position": [
    150.0,
    150.0
  ],
  "width": 100.0,
  "height": 0.0,
  "opacity": 1.0,
  "content": {
    "Line": {
      "end": [
        250.0,
        150.0
      ],
      "stroke_width": 1.0,
      "stroke_color": "#222222"
    }
  }
}
"##);
}

#[test]
fn snapshot_image_element_embeds_base64() {
    let element = Element::new(3, (0.0, 0.0), image_content(vec![1, 2, 3]));
    let json = serde_json::to_string(&element).unwrap();
    assert!(json.contains("\"bytes\":\"AQID\""));

    let parsed: Element = serde_json::from_str(&json).unwrap();
    match parsed.content {
        ElementContent::Image { data } => assert_eq!(data.bytes, vec![1, 2, 3]),
        _ => panic!("expected an image"),
    }
}

#[test]
fn test_hand_written_element_json_parses() {
    let json = r##"{
        "id": 7,
        "position": [10.0, 20.0],
        "width": 160.0,
        "height": 20.0,
        "opacity": 0.5,
        "content": {
            "Placeholder": {
                "label": "customer",
                "font_family": "Helvetica",
                "font_size": 12.0,
                "color": "#222222"
            }
        }
    }"##;
    let element: Element = serde_json::from_str(json).unwrap();

    let mut expected = Element::new(7, (10.0, 20.0), placeholder_content("customer"));
    expected.opacity = 0.5;
    assert_eq!(element, expected);
}

// ============================================================================
// Stable string outputs
// ============================================================================

#[test]
fn snapshot_kind_labels() {
    let output = [
        text_content("x"),
        image_content(Vec::new()),
        line_content((1.0, 1.0)),
        placeholder_content("x"),
    ]
    .iter()
    .map(|content| content.kind_label())
    .collect::<Vec<_>>()
    .join("\n");

    insta::assert_snapshot!(output, @"TEXT\nIMAGE\nLINE\nPLACEHOLDER");
}

#[test]
fn snapshot_display_names() {
    let output = [
        text_content("Invoice title"),
        text_content(""),
        image_content(Vec::new()),
        line_content((1.0, 1.0)),
        placeholder_content("customer"),
    ]
    .iter()
    .map(|content| content.display_name())
    .collect::<Vec<_>>()
    .join("\n");

    insta::assert_snapshot!(output, @"Invoice title\nText\nImage\nLine\n{{customer}}");
}

#[test]
fn snapshot_default_sizes() {
    let sizes = [
        ("text", text_content("x").default_size()),
        ("placeholder", placeholder_content("x").default_size()),
        // Undecodable bytes fall back to the default image size.
        ("image", image_content(vec![0xde, 0xad]).default_size()),
    ];
    let output = sizes
        .iter()
        .map(|(name, (width, height))| format!("{name}: {width}x{height}"))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(output, @"text: 200x20\nplaceholder: 160x20\nimage: 200x150");
}

#[test]
fn test_image_data_debug_does_not_dump_bytes() {
    let data = ImageData::new(vec![0; 4096]);
    assert_eq!(format!("{data:?}"), "ImageData(4096 bytes)");
}
