//! Mouse down event handling - gesture initiation.

use crate::app::Pagecraft;
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use gpui::*;

impl Pagecraft {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_down");

        let ctx = self.canvas.coordinate_context();
        let page_pos = CoordinateConverter::screen_to_page(event.position, &ctx);

        // The engine owns hit resolution and selection transitions; shift
        // appends/toggles.
        self.canvas.engine.pointer_down(
            &self.canvas.design,
            &mut self.canvas.selection,
            page_pos,
            event.modifiers.shift,
        );

        window.focus(&self.focus_handle);
        cx.notify();
    }
}
