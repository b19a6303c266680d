//! Pagecraft - a visual designer for fixed-layout documents.
//!
//! Compose text, images, lines, and bound-data placeholders on a page
//! canvas with direct manipulation (drag, multi-select, handle-based
//! resize), then export the layout as a procedural drawing script. The
//! interaction core is headless and lives in [`geometry`], [`selection`],
//! [`document`], and [`input`]; the GPUI layers in [`app`] and [`render`]
//! are thin consumers of it.

pub mod app;
pub mod constants;
pub mod document;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod perf;
pub mod render;
pub mod selection;
pub mod spatial_index;
pub mod types;
pub mod units;
