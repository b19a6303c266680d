//! Mouse up event handling - commit the gesture.

use crate::app::Pagecraft;
use gpui::*;

impl Pagecraft {
    pub fn handle_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        // Releasing the pointer commits whatever geometry the last move
        // produced; there is no separate cancel gesture.
        let affected = self.canvas.engine.pointer_up();
        if affected.is_empty() {
            return;
        }

        for id in &affected {
            self.canvas.design.update_spatial_index(*id);
        }

        // Designs that already live on disk save on every committed gesture.
        if self.canvas.design.path.is_some() && self.canvas.design.is_dirty() {
            if let Err(error) = self.canvas.design.save() {
                tracing::error!(%error, "Autosave after gesture failed");
                self.ui.status = Some(format!("Save failed: {error}"));
            }
        }
        cx.notify();
    }
}
