//! Mouse move handling - drag and resize updates.
//!
//! ## Performance Notes
//!
//! Mouse move fires very frequently during gestures (60+ times per second).
//! The handler exits immediately while idle, and every move recomputes from
//! the frozen gesture snapshot and the current pointer position, so skipped
//! or coalesced events never accumulate error.

use crate::app::Pagecraft;
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use gpui::*;

impl Pagecraft {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_move");

        self.canvas.last_mouse_pos = Some(event.position);

        if !self.canvas.engine.is_active() {
            return;
        }

        let ctx = self.canvas.coordinate_context();
        let page_pos = CoordinateConverter::screen_to_page(event.position, &ctx);

        let updates = self
            .canvas
            .engine
            .pointer_move(&self.canvas.design, page_pos);
        if updates.is_empty() {
            return;
        }

        // One batched step for all affected elements.
        self.canvas.design.update_elements(updates);
        cx.notify();
    }
}
