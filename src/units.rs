//! Page measurement units and conversion to/from points.
//!
//! Element geometry and page dimensions are stored canonically in points;
//! units exist only for presenting and editing page dimensions. Element
//! geometry never goes through a unit conversion.

use serde::{Deserialize, Serialize};

/// Points per inch (PostScript point)
pub const POINTS_PER_INCH: f32 = 72.0;

/// Points per millimeter
pub const POINTS_PER_MM: f32 = POINTS_PER_INCH / 25.4;

/// Points per centimeter
pub const POINTS_PER_CM: f32 = POINTS_PER_INCH / 2.54;

/// Display unit for page dimensions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageUnit {
    #[default]
    Point,
    Millimeter,
    Centimeter,
    Inch,
}

impl PageUnit {
    /// Points per one of this unit
    fn factor(self) -> f32 {
        match self {
            PageUnit::Point => 1.0,
            PageUnit::Millimeter => POINTS_PER_MM,
            PageUnit::Centimeter => POINTS_PER_CM,
            PageUnit::Inch => POINTS_PER_INCH,
        }
    }

    /// Convert a value expressed in this unit to points
    pub fn to_points(self, value: f32) -> f32 {
        value * self.factor()
    }

    /// Convert a value expressed in points to this unit
    pub fn from_points(self, points: f32) -> f32 {
        points / self.factor()
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageUnit::Point => "pt",
            PageUnit::Millimeter => "mm",
            PageUnit::Centimeter => "cm",
            PageUnit::Inch => "in",
        }
    }

    pub fn all() -> &'static [PageUnit] {
        &[
            PageUnit::Point,
            PageUnit::Millimeter,
            PageUnit::Centimeter,
            PageUnit::Inch,
        ]
    }
}

/// A4 page size in points (210 x 297 mm)
pub fn a4_points() -> (f32, f32) {
    (
        PageUnit::Millimeter.to_points(210.0),
        PageUnit::Millimeter.to_points(297.0),
    )
}

/// US Letter page size in points (8.5 x 11 in)
pub fn letter_points() -> (f32, f32) {
    (
        PageUnit::Inch.to_points(8.5),
        PageUnit::Inch.to_points(11.0),
    )
}
