//! Core types for the Pagecraft document model.
//!
//! This module defines the fundamental data structures used throughout the
//! application: the placeable element union, embedded image data, and page
//! settings. All geometry lives in points with the origin at the page's
//! top-left corner; all geometry computation lives in [`crate::geometry`].

use crate::constants::{
    DEFAULT_IMAGE_SIZE, DEFAULT_OPACITY, MAX_IMAGE_DIMENSION,
};
use crate::units::{PageUnit, a4_points, letter_points};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serialize embedded image bytes as base64 so design files stay
/// self-contained, printable JSON.
mod base64_bytes {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        STANDARD.encode(bytes).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

/// Embedded image bytes. Once imported, an image element carries its pixel
/// data and never references the source file again.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(with = "base64_bytes")]
    pub bytes: Vec<u8>,
}

impl ImageData {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Decode the pixel dimensions from the embedded bytes, if possible.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        image::ImageReader::new(std::io::Cursor::new(&self.bytes))
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .ok()
    }

    /// The bytes as base64, as stored in design files and export scripts.
    pub fn to_base64(&self) -> String {
        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageData({} bytes)", self.bytes.len())
    }
}

/// An element placed on the page.
///
/// Every element carries the common attributes plus a kind-specific content
/// variant. For line elements `position` is the start endpoint and
/// `width`/`height` are only a cached bounding-box hint; the authoritative
/// geometry is the endpoint pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, stable for the element's lifetime
    pub id: u64,
    /// Position on the page in points (top-left corner; line start point)
    pub position: (f32, f32),
    /// Width in points (bounding-box hint for lines)
    pub width: f32,
    /// Height in points (bounding-box hint for lines)
    pub height: f32,
    /// Opacity in [0, 1]
    pub opacity: f32,
    /// The kind-specific content
    pub content: ElementContent,
}

impl Element {
    /// Create an element with default geometry for its kind.
    pub fn new(id: u64, position: (f32, f32), content: ElementContent) -> Self {
        let (width, height) = match &content {
            ElementContent::Line { end, .. } => {
                ((end.0 - position.0).abs(), (end.1 - position.1).abs())
            }
            other => other.default_size(),
        };
        Self {
            id,
            position,
            width,
            height,
            opacity: DEFAULT_OPACITY,
            content,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self.content, ElementContent::Line { .. })
    }

    /// Refresh the cached `width`/`height` hint from the endpoints.
    /// Only meaningful for lines; a no-op for other kinds.
    pub fn refresh_bounds_hint(&mut self) {
        if let ElementContent::Line { end, .. } = self.content {
            self.width = (end.0 - self.position.0).abs();
            self.height = (end.1 - self.position.1).abs();
        }
    }
}

/// The content of an element.
///
/// A closed set of four kinds; every consumer must match exhaustively.
/// Constructing anything outside these four variants is impossible by
/// design, so geometry and rendering code never carries a fallback arm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ElementContent {
    /// A run of literal text
    Text {
        text: String,
        font_family: String,
        /// Font size in points
        font_size: f32,
        /// Text color as hex string (e.g. "#222222")
        color: String,
    },
    /// An embedded image
    Image { data: ImageData },
    /// A straight line from `position` to `end`
    Line {
        /// Second endpoint, in page points
        end: (f32, f32),
        /// Stroke width in points
        stroke_width: f32,
        /// Stroke color as hex string
        stroke_color: String,
    },
    /// A data-binding placeholder, rendered as a dashed box showing its
    /// label and substituted with bound data at document-generation time
    Placeholder {
        /// Data-binding key
        label: String,
        font_family: String,
        font_size: f32,
        color: String,
    },
}

impl ElementContent {
    pub fn default_size(&self) -> (f32, f32) {
        match self {
            ElementContent::Text { .. } => (200.0, 20.0),
            ElementContent::Image { data } => {
                // Scale decoded dimensions down to a sane on-page size
                if let Some((width, height)) = data.dimensions() {
                    let (width, height) = (width as f32, height as f32);
                    let longest = width.max(height);
                    if longest > MAX_IMAGE_DIMENSION {
                        let scale = MAX_IMAGE_DIMENSION / longest;
                        (width * scale, height * scale)
                    } else {
                        (width, height)
                    }
                } else {
                    DEFAULT_IMAGE_SIZE
                }
            }
            // Lines derive their hint from the endpoints instead
            ElementContent::Line { .. } => (0.0, 0.0),
            ElementContent::Placeholder { .. } => (160.0, 20.0),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            ElementContent::Text { text, .. } => {
                if text.is_empty() {
                    "Text".to_string()
                } else {
                    text.clone()
                }
            }
            ElementContent::Image { .. } => "Image".to_string(),
            ElementContent::Line { .. } => "Line".to_string(),
            ElementContent::Placeholder { label, .. } => format!("{{{{{}}}}}", label),
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            ElementContent::Text { .. } => "TEXT",
            ElementContent::Image { .. } => "IMAGE",
            ElementContent::Line { .. } => "LINE",
            ElementContent::Placeholder { .. } => "PLACEHOLDER",
        }
    }
}

/// Page dimensions, stored canonically in points. The unit only drives
/// presentation round-trips for page dimension editing; element geometry is
/// always in points and never converted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageSettings {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
    /// Display unit for editing page dimensions
    pub unit: PageUnit,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageSettings {
    pub fn a4() -> Self {
        let (width, height) = a4_points();
        Self {
            width,
            height,
            unit: PageUnit::Millimeter,
        }
    }

    pub fn letter() -> Self {
        let (width, height) = letter_points();
        Self {
            width,
            height,
            unit: PageUnit::Inch,
        }
    }

    /// Page width expressed in the display unit
    pub fn display_width(&self) -> f32 {
        self.unit.from_points(self.width)
    }

    /// Page height expressed in the display unit
    pub fn display_height(&self) -> f32 {
        self.unit.from_points(self.height)
    }

    /// Set the page width from a value in the display unit
    pub fn set_display_width(&mut self, value: f32) {
        self.width = self.unit.to_points(value);
    }

    /// Set the page height from a value in the display unit
    pub fn set_display_height(&mut self, value: f32) {
        self.height = self.unit.to_points(value);
    }
}
