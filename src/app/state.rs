//! Application state - the Pagecraft struct definition and sub-structs.

use crate::constants::{
    DEFAULT_ZOOM, DOCK_WIDTH, HEADER_HEIGHT, MAX_ZOOM, MIN_ZOOM, PAGE_MARGIN, ZOOM_STEP,
};
use crate::document::Design;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::engine::InteractionEngine;
use crate::render::image_cache::ImageRenderCache;
use crate::selection::SelectionManager;
use gpui::{FocusHandle, Pixels, Point, point, px};
use std::path::PathBuf;

/// Canvas state - the open design, selection, gesture engine, and view
/// transform. The view transform (pan/zoom) is session state and never
/// serialized with the design.
pub struct CanvasState {
    /// The open design document
    pub design: Design,
    /// Currently selected element ids
    pub selection: SelectionManager,
    /// Pointer gesture engine
    pub engine: InteractionEngine,
    /// Canvas pan offset in pixels
    pub canvas_offset: Point<Pixels>,
    /// Zoom level (1.0 = 100%)
    pub zoom: f32,
    /// Temp-file cache materializing embedded image bytes for rendering
    pub image_cache: ImageRenderCache,
    /// Last observed mouse position, used to place dropped files
    pub last_mouse_pos: Option<Point<Pixels>>,
}

impl CanvasState {
    pub fn new(design: Design) -> Self {
        Self {
            design,
            selection: SelectionManager::new(),
            engine: InteractionEngine::new(),
            canvas_offset: point(px(PAGE_MARGIN), px(PAGE_MARGIN)),
            zoom: DEFAULT_ZOOM,
            image_cache: ImageRenderCache::new(),
            last_mouse_pos: None,
        }
    }

    /// The conversion context for the current view transform
    pub fn coordinate_context(&self) -> CoordinateContext {
        CoordinateContext::new(self.canvas_offset, self.zoom)
    }

    /// Zoom by `factor` keeping the page point under `screen_pos` fixed.
    /// Returns false when already clamped.
    pub fn zoom_around(&mut self, factor: f32, screen_pos: Point<Pixels>) -> bool {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < f32::EPSILON {
            return false;
        }
        let ctx = self.coordinate_context();
        let (page_x, page_y) = CoordinateConverter::screen_to_page(screen_pos, &ctx);
        self.zoom = new_zoom;
        self.canvas_offset = point(
            px(f32::from(screen_pos.x) - DOCK_WIDTH - page_x * new_zoom),
            px(f32::from(screen_pos.y) - HEADER_HEIGHT - page_y * new_zoom),
        );
        true
    }

    pub fn zoom_in(&mut self, screen_pos: Point<Pixels>) -> bool {
        self.zoom_around(1.0 + ZOOM_STEP, screen_pos)
    }

    pub fn zoom_out(&mut self, screen_pos: Point<Pixels>) -> bool {
        self.zoom_around(1.0 / (1.0 + ZOOM_STEP), screen_pos)
    }

    pub fn zoom_reset(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.canvas_offset = point(px(PAGE_MARGIN), px(PAGE_MARGIN));
    }
}

/// UI state - transient chrome state outside the document
#[derive(Default)]
pub struct UiState {
    /// One-line status shown in the footer (last save/export outcome)
    pub status: Option<String>,
    /// Where the last export landed
    pub last_export: Option<PathBuf>,
}

/// Main application state
pub struct Pagecraft {
    /// Canvas state
    pub canvas: CanvasState,
    /// UI state
    pub ui: UiState,
    /// Focus handle for keyboard actions
    pub focus_handle: FocusHandle,
}
