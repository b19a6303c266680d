//! Temp-file cache for rendering embedded images.
//!
//! Image elements are self-contained (their bytes live in the design file),
//! but the renderer loads images from paths, so embedded bytes are
//! materialized once into a session-scoped temp directory. The directory is
//! cleaned up when the cache drops.

use crate::document::Design;
use crate::types::{ElementContent, ImageData};
use image::ImageFormat;
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct ImageRenderCache {
    /// Created lazily on first materialization
    dir: Option<TempDir>,
    paths: HashMap<u64, PathBuf>,
}

impl Default for ImageRenderCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageRenderCache {
    pub fn new() -> Self {
        Self {
            dir: None,
            paths: HashMap::new(),
        }
    }

    fn ensure_dir(&mut self) -> Option<&TempDir> {
        if self.dir.is_none() {
            match tempfile::Builder::new().prefix("pagecraft-images-").tempdir() {
                Ok(dir) => self.dir = Some(dir),
                Err(error) => {
                    tracing::error!(%error, "Failed to create image render cache directory");
                    return None;
                }
            }
        }
        self.dir.as_ref()
    }

    /// The on-disk path for an element's image bytes, writing them out on
    /// first use.
    pub fn path_for(&mut self, element_id: u64, data: &ImageData) -> Option<PathBuf> {
        if let Some(path) = self.paths.get(&element_id) {
            return Some(path.clone());
        }

        let extension = match image::guess_format(&data.bytes) {
            Ok(ImageFormat::Png) => "png",
            Ok(ImageFormat::Jpeg) => "jpg",
            Ok(ImageFormat::Gif) => "gif",
            Ok(ImageFormat::WebP) => "webp",
            Ok(ImageFormat::Bmp) => "bmp",
            _ => "img",
        };
        let path = self
            .ensure_dir()?
            .path()
            .join(format!("element-{element_id}.{extension}"));
        if let Err(error) = std::fs::write(&path, &data.bytes) {
            tracing::error!(%error, element_id, "Failed to materialize image bytes");
            return None;
        }
        self.paths.insert(element_id, path.clone());
        Some(path)
    }

    /// Drop the cached file for an element (after deletion or image edits).
    pub fn invalidate(&mut self, element_id: u64) {
        if let Some(path) = self.paths.remove(&element_id) {
            let _ = std::fs::remove_file(path);
        }
    }

    /// Materialize every image element in the design.
    pub fn warm(&mut self, design: &Design) {
        for element in &design.elements {
            if let ElementContent::Image { data } = &element.content {
                self.path_for(element.id, data);
            }
        }
    }

    /// Already-materialized path for an element, if any. Read-only lookup
    /// for render passes.
    pub fn cached_path(&self, element_id: u64) -> Option<PathBuf> {
        self.paths.get(&element_id).cloned()
    }

    pub fn clear(&mut self) {
        self.paths.clear();
        self.dir = None;
    }
}
