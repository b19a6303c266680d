//! Application module - the main Pagecraft application state and logic.
//!
//! This module is organized into several submodules:
//! - `state` - The Pagecraft struct definition and sub-structs
//! - `lifecycle` - Initialization
//! - `element_management` - Element lifecycle actions, saving, exporting

mod element_management;
mod lifecycle;
mod state;

pub use state::{CanvasState, Pagecraft, UiState};

use crate::render::canvas::render_canvas_area;
use crate::render::chrome::{render_footer, render_header};
use crate::render::dock::render_dock;
use crate::render::theme;
use gpui::prelude::*;
use gpui::{App, FocusHandle, Focusable, Window, actions, div};

actions!(
    pagecraft,
    [
        AddText,
        AddLine,
        AddPlaceholder,
        DeleteSelected,
        DuplicateSelected,
        SaveDesign,
        ExportScript,
        ZoomIn,
        ZoomOut,
        ZoomReset,
        Quit
    ]
);

impl Render for Pagecraft {
    fn render(&mut self, window: &mut Window, cx: &mut gpui::Context<Self>) -> impl IntoElement {
        // Pick up images imported since the last frame.
        self.canvas.image_cache.warm(&self.canvas.design);

        let viewport = window.viewport_size();

        div()
            .id("pagecraft")
            .key_context("Pagecraft")
            .track_focus(&self.focus_handle)
            .size_full()
            .flex()
            .flex_col()
            .bg(theme::WINDOW_BG)
            .text_color(theme::TEXT)
            .on_action(cx.listener(Self::add_text_element))
            .on_action(cx.listener(Self::add_line_element))
            .on_action(cx.listener(Self::add_placeholder_element))
            .on_action(cx.listener(Self::delete_selected))
            .on_action(cx.listener(Self::duplicate_selected))
            .on_action(cx.listener(Self::save_design))
            .on_action(cx.listener(Self::export_script))
            .on_action(cx.listener(Self::zoom_in_action))
            .on_action(cx.listener(Self::zoom_out_action))
            .on_action(cx.listener(Self::zoom_reset_action))
            .child(render_header(self, cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(render_dock(cx))
                    .child(render_canvas_area(self, viewport, cx)),
            )
            .child(render_footer(self))
    }
}

impl Focusable for Pagecraft {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
