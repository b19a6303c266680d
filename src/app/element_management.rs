//! Element lifecycle actions - adding, deleting, duplicating elements, and
//! saving/exporting the design.

use super::state::Pagecraft;
use super::{
    AddLine, AddPlaceholder, AddText, DeleteSelected, DuplicateSelected, ExportScript, SaveDesign,
};
use crate::constants::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH,
    DEFAULT_TEXT_COLOR,
};
use crate::document::Design;
use crate::error::DesignResult;
use crate::export;
use crate::input::coords::CoordinateConverter;
use crate::types::{ElementContent, ImageData};
use gpui::{Context, ExternalPaths, Window};
use std::path::{Path, PathBuf};

impl Pagecraft {
    // ==================== Add Elements ====================

    pub fn add_text_element(&mut self, _: &AddText, _window: &mut Window, cx: &mut Context<Self>) {
        let content = ElementContent::Text {
            text: "Text".to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            color: DEFAULT_TEXT_COLOR.to_string(),
        };
        self.insert_centered(content, cx);
    }

    pub fn add_placeholder_element(
        &mut self,
        _: &AddPlaceholder,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let content = ElementContent::Placeholder {
            label: format!("field_{}", self.canvas.design.next_element_id),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            color: DEFAULT_TEXT_COLOR.to_string(),
        };
        self.insert_centered(content, cx);
    }

    pub fn add_line_element(&mut self, _: &AddLine, _window: &mut Window, cx: &mut Context<Self>) {
        let center_x = self.canvas.design.page.width / 2.0;
        let center_y = self.canvas.design.page.height / 2.0;
        let content = ElementContent::Line {
            end: (center_x + 60.0, center_y),
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
        };
        let id = self
            .canvas
            .design
            .add_element((center_x - 60.0, center_y), content);
        self.canvas.selection.select(&[id], false);
        cx.notify();
    }

    /// Place a new box element centered on the page and select it.
    fn insert_centered(&mut self, content: ElementContent, cx: &mut Context<Self>) {
        let (width, height) = content.default_size();
        let page = &self.canvas.design.page;
        let position = ((page.width - width) / 2.0, (page.height - height) / 2.0);
        let id = self.canvas.design.add_element(position, content);
        self.canvas.selection.select(&[id], false);
        cx.notify();
    }

    // ==================== Image Import ====================

    /// Files dropped onto the canvas become image elements at the drop
    /// position.
    pub fn handle_file_drop(
        &mut self,
        paths: &ExternalPaths,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        for path in paths.paths() {
            self.import_image_file(path, cx);
        }
    }

    pub fn import_image_file(&mut self, path: &Path, cx: &mut Context<Self>) {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::error!(%error, path = %path.display(), "Failed to read dropped file");
                self.ui.status = Some(format!("Could not read {}", path.display()));
                cx.notify();
                return;
            }
        };
        if image::guess_format(&bytes).is_err() {
            tracing::warn!(path = %path.display(), "Dropped file is not a decodable image");
            self.ui.status = Some(format!("Not an image: {}", path.display()));
            cx.notify();
            return;
        }

        let content = ElementContent::Image {
            data: ImageData::new(bytes),
        };
        let size = content.default_size();
        let position = self.drop_position(size);
        let id = self.canvas.design.add_element(position, content);
        self.canvas.selection.select(&[id], false);
        self.ui.status = Some(format!("Imported {}", path.display()));
        cx.notify();
    }

    /// Where to place a newly dropped element: centered under the last
    /// known pointer position, or on the page center as a fallback.
    fn drop_position(&self, size: (f32, f32)) -> (f32, f32) {
        if let Some(mouse_pos) = self.canvas.last_mouse_pos {
            let ctx = self.canvas.coordinate_context();
            let (x, y) = CoordinateConverter::screen_to_page(mouse_pos, &ctx);
            (x - size.0 / 2.0, y - size.1 / 2.0)
        } else {
            let page = &self.canvas.design.page;
            ((page.width - size.0) / 2.0, (page.height - size.1) / 2.0)
        }
    }

    // ==================== Delete / Duplicate ====================

    pub fn delete_selected(
        &mut self,
        _: &DeleteSelected,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let ids: Vec<u64> = self.canvas.selection.ids().to_vec();
        if ids.is_empty() {
            return;
        }
        for id in ids {
            self.canvas.design.remove_element(id);
            self.canvas.selection.remove(id);
            self.canvas.image_cache.invalidate(id);
        }
        cx.notify();
    }

    pub fn duplicate_selected(
        &mut self,
        _: &DuplicateSelected,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let ids: Vec<u64> = self.canvas.selection.ids().to_vec();
        if ids.is_empty() {
            return;
        }
        let mut new_ids = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(new_id) = self.canvas.design.duplicate_element(id) {
                new_ids.push(new_id);
            }
        }
        // The copies become the selection.
        self.canvas.selection.select(&new_ids, false);
        cx.notify();
    }

    // ==================== Save / Export ====================

    pub fn save_design(&mut self, _: &SaveDesign, _window: &mut Window, cx: &mut Context<Self>) {
        match self.persist_design() {
            Ok(path) => {
                self.ui.status = Some(format!("Saved {}", path.display()));
            }
            Err(error) => {
                tracing::error!(%error, "Save failed");
                self.ui.status = Some(format!("Save failed: {error}"));
            }
        }
        cx.notify();
    }

    pub(crate) fn persist_design(&mut self) -> DesignResult<PathBuf> {
        let path = self
            .canvas
            .design
            .path
            .clone()
            .unwrap_or_else(Design::default_save_path);
        self.canvas.design.save_as(&path)?;
        Ok(path)
    }

    pub fn export_script(&mut self, _: &ExportScript, _window: &mut Window, cx: &mut Context<Self>) {
        let script = export::generate_script(&self.canvas.design);
        let path = self
            .canvas
            .design
            .path
            .clone()
            .unwrap_or_else(Design::default_save_path)
            .with_extension("py");

        let result = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(std::fs::create_dir_all)
            .unwrap_or(Ok(()))
            .and_then(|_| std::fs::write(&path, script));

        match result {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Drawing script exported");
                self.ui.status = Some(format!("Exported {}", path.display()));
                self.ui.last_export = Some(path);
            }
            Err(error) => {
                tracing::error!(%error, "Export failed");
                self.ui.status = Some(format!("Export failed: {error}"));
            }
        }
        cx.notify();
    }
}
