//! Coordinate conversion utilities for canvas interactions.
//!
//! Centralizes the screen<->page formulas so input handling and rendering
//! agree on them. Page coordinates are points with the origin at the page
//! sheet's top-left corner; screen coordinates are window-relative pixels.

use crate::constants::{DOCK_WIDTH, HEADER_HEIGHT};
use gpui::{Pixels, Point, point, px};

/// Context needed for coordinate conversions
#[derive(Clone, Copy)]
pub struct CoordinateContext {
    pub canvas_offset: Point<Pixels>,
    pub zoom: f32,
}

impl CoordinateContext {
    #[inline]
    pub fn new(canvas_offset: Point<Pixels>, zoom: f32) -> Self {
        Self {
            canvas_offset,
            zoom,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a window-relative position to page coordinates.
    ///
    /// Mouse coordinates are window-relative; the page is rendered inside
    /// the canvas area, which is offset by the dock on the left and the
    /// header on top.
    /// Formula: page_pos = (screen_pos - chrome - canvas_offset) / zoom
    #[inline]
    pub fn screen_to_page(screen_pos: Point<Pixels>, ctx: &CoordinateContext) -> (f32, f32) {
        (
            (f32::from(screen_pos.x) - DOCK_WIDTH - f32::from(ctx.canvas_offset.x)) / ctx.zoom,
            (f32::from(screen_pos.y) - HEADER_HEIGHT - f32::from(ctx.canvas_offset.y)) / ctx.zoom,
        )
    }

    /// Convert page coordinates to a window-relative position.
    #[inline]
    pub fn page_to_screen(page_pos: (f32, f32), ctx: &CoordinateContext) -> Point<Pixels> {
        point(
            px(page_pos.0 * ctx.zoom + f32::from(ctx.canvas_offset.x) + DOCK_WIDTH),
            px(page_pos.1 * ctx.zoom + f32::from(ctx.canvas_offset.y) + HEADER_HEIGHT),
        )
    }

    /// Convert a delta from screen pixels to page units
    #[inline]
    pub fn delta_screen_to_page(delta: Point<Pixels>, zoom: f32) -> (f32, f32) {
        (f32::from(delta.x) / zoom, f32::from(delta.y) / zoom)
    }
}
