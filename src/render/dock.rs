//! Tool dock rendering - left-side toolbar for element actions.

use crate::app::{
    AddLine, AddPlaceholder, AddText, DeleteSelected, DuplicateSelected, Pagecraft,
};
use crate::constants::DOCK_WIDTH;
use crate::render::theme;
use gpui::*;

fn dock_button(
    id: &'static str,
    label: &'static str,
    cx: &Context<Pagecraft>,
    on_click: impl Fn(&mut Pagecraft, &mut Window, &mut Context<Pagecraft>) + 'static,
) -> Stateful<Div> {
    div()
        .id(id)
        .w(px(32.0))
        .h(px(32.0))
        .rounded(px(8.0))
        .hover(|s| s.bg(theme::BUTTON_BG))
        .cursor_pointer()
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .text_size(px(14.0))
                .font_weight(FontWeight::MEDIUM)
                .text_color(theme::MUTED_TEXT)
                .child(label),
        )
        .on_click(cx.listener(move |this, _, window, cx| on_click(this, window, cx)))
}

/// Render the tool dock
pub fn render_dock(cx: &Context<Pagecraft>) -> Stateful<Div> {
    div()
        .id("tool-dock")
        .w(px(DOCK_WIDTH))
        .h_full()
        .flex()
        .flex_col()
        .items_center()
        .py(px(12.0))
        .gap(px(6.0))
        .bg(theme::CHROME_BG)
        .border_r_1()
        .border_color(theme::BORDER)
        // Add text
        .child(dock_button("add-text", "T", cx, |this, window, cx| {
            this.add_text_element(&AddText, window, cx);
        }))
        // Add line
        .child(dock_button("add-line", "/", cx, |this, window, cx| {
            this.add_line_element(&AddLine, window, cx);
        }))
        // Add placeholder
        .child(dock_button("add-placeholder", "{}", cx, |this, window, cx| {
            this.add_placeholder_element(&AddPlaceholder, window, cx);
        }))
        // Divider before destructive actions
        .child(div().w(px(24.0)).h(px(1.0)).my(px(4.0)).bg(theme::BORDER))
        // Duplicate selection
        .child(dock_button("duplicate", "⧉", cx, |this, window, cx| {
            this.duplicate_selected(&DuplicateSelected, window, cx);
        }))
        // Delete selection
        .child(dock_button("delete", "✕", cx, |this, window, cx| {
            this.delete_selected(&DeleteSelected, window, cx);
        }))
}
