//! Canvas transformations - scroll panning and zoom.

use crate::app::{Pagecraft, ZoomIn, ZoomOut, ZoomReset};
use gpui::*;

impl Pagecraft {
    pub fn handle_scroll(
        &mut self,
        event: &ScrollWheelEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        // Zoom with Command (platform) or Control key
        if event.modifiers.platform || event.modifiers.control {
            let zoom_factor = match event.delta {
                ScrollDelta::Pixels(delta) => 1.0 - f32::from(delta.y) / 500.0,
                ScrollDelta::Lines(delta) => 1.0 - delta.y / 50.0,
            };

            if (zoom_factor - 1.0).abs() > 0.001
                && self.canvas.zoom_around(zoom_factor, event.position)
            {
                cx.notify();
            }
            return;
        }

        // Default: canvas panning
        match event.delta {
            ScrollDelta::Pixels(delta) => {
                self.canvas.canvas_offset.x += delta.x;
                self.canvas.canvas_offset.y += delta.y;
            }
            ScrollDelta::Lines(delta) => {
                self.canvas.canvas_offset.x += px(delta.x * 20.0);
                self.canvas.canvas_offset.y += px(delta.y * 20.0);
            }
        }
        cx.notify();
    }

    pub fn zoom_in_action(&mut self, _: &ZoomIn, window: &mut Window, cx: &mut Context<Self>) {
        let center = viewport_center(window);
        if self.canvas.zoom_in(center) {
            cx.notify();
        }
    }

    pub fn zoom_out_action(&mut self, _: &ZoomOut, window: &mut Window, cx: &mut Context<Self>) {
        let center = viewport_center(window);
        if self.canvas.zoom_out(center) {
            cx.notify();
        }
    }

    pub fn zoom_reset_action(
        &mut self,
        _: &ZoomReset,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.canvas.zoom_reset();
        cx.notify();
    }
}

fn viewport_center(window: &Window) -> Point<Pixels> {
    let size = window.viewport_size();
    point(size.width / 2.0, size.height / 2.0)
}
