//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 40.0;

/// Width of the tool dock (left sidebar) in pixels
pub const DOCK_WIDTH: f32 = 44.0;

/// Height of the footer bar in pixels
pub const FOOTER_HEIGHT: f32 = 28.0;

/// Initial gap between the viewport edge and the page sheet, in pixels
pub const PAGE_MARGIN: f32 = 48.0;

// ============================================================================
// Gesture Constants
// ============================================================================

/// Minimum width/height a box element can be resized to, in page units.
/// Lines are exempt: their endpoints may coincide.
pub const MIN_ELEMENT_SIZE: f32 = 10.0;

/// Side length of a resize handle's hit target, in page units,
/// centered on the handle anchor.
pub const HANDLE_SIZE: f32 = 8.0;

/// Offset applied to duplicated elements, in page units
pub const DUPLICATE_OFFSET: f32 = 12.0;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom step for the zoom-in/zoom-out actions
pub const ZOOM_STEP: f32 = 0.1;

// ============================================================================
// Element Defaults
// ============================================================================

/// Default font family for text and placeholder elements
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

/// Default font size for text and placeholder elements, in points
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Default text color
pub const DEFAULT_TEXT_COLOR: &str = "#222222";

/// Default line stroke color
pub const DEFAULT_STROKE_COLOR: &str = "#222222";

/// Default line stroke width in points
pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

/// Default element opacity
pub const DEFAULT_OPACITY: f32 = 1.0;

/// Maximum dimension for imported images, in points (scaled down if larger)
pub const MAX_IMAGE_DIMENSION: f32 = 400.0;

/// Default image fallback size when dimensions cannot be decoded
pub const DEFAULT_IMAGE_SIZE: (f32, f32) = (200.0, 150.0);

// ============================================================================
// Viewport Culling
// ============================================================================

/// Margin in pixels around viewport for culling (prevents pop-in at edges)
pub const CULLING_MARGIN: f32 = 50.0;
