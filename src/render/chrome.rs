//! Header and status footer rendering.

use crate::app::{ExportScript, Pagecraft, SaveDesign};
use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::render::theme;
use gpui::prelude::FluentBuilder;
use gpui::*;

pub fn render_header(app: &Pagecraft, cx: &Context<Pagecraft>) -> Div {
    let file_label = app
        .canvas
        .design
        .path
        .as_ref()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "untitled".to_string());
    let title = if app.canvas.design.is_dirty() {
        format!("{file_label} •")
    } else {
        file_label
    };

    div()
        .h(px(HEADER_HEIGHT))
        .w_full()
        .flex()
        .flex_row()
        .items_center()
        .justify_between()
        .px(px(12.0))
        .bg(theme::CHROME_BG)
        .border_b_1()
        .border_color(theme::BORDER)
        .child(
            div()
                .flex()
                .flex_row()
                .items_center()
                .gap(px(8.0))
                .child(
                    div()
                        .text_size(px(13.0))
                        .font_weight(FontWeight::BOLD)
                        .child("Pagecraft"),
                )
                .child(
                    div()
                        .text_size(px(12.0))
                        .text_color(theme::MUTED_TEXT)
                        .child(title),
                ),
        )
        .child(
            div()
                .flex()
                .flex_row()
                .gap(px(8.0))
                .child(header_button("save-btn", "Save", cx, |this, window, cx| {
                    this.save_design(&SaveDesign, window, cx);
                }))
                .child(header_button(
                    "export-btn",
                    "Export",
                    cx,
                    |this, window, cx| {
                        this.export_script(&ExportScript, window, cx);
                    },
                )),
        )
}

fn header_button(
    id: &'static str,
    label: &'static str,
    cx: &Context<Pagecraft>,
    on_click: impl Fn(&mut Pagecraft, &mut Window, &mut Context<Pagecraft>) + 'static,
) -> Stateful<Div> {
    div()
        .id(id)
        .h(px(26.0))
        .px(px(10.0))
        .rounded(px(6.0))
        .bg(theme::BUTTON_BG)
        .hover(|s| s.opacity(0.85))
        .cursor_pointer()
        .flex()
        .items_center()
        .child(div().text_size(px(12.0)).child(label))
        .on_click(cx.listener(move |this, _, window, cx| on_click(this, window, cx)))
}

pub fn render_footer(app: &Pagecraft) -> Div {
    let design = &app.canvas.design;
    let summary = format!(
        "{} elements · {} selected · {} placeholders",
        design.elements.len(),
        app.canvas.selection.len(),
        design.placeholder_labels().len()
    );
    let zoom_label = format!("{:.0}%", app.canvas.zoom * 100.0);

    div()
        .h(px(FOOTER_HEIGHT))
        .w_full()
        .flex()
        .flex_row()
        .items_center()
        .justify_between()
        .px(px(12.0))
        .bg(theme::CHROME_BG)
        .border_t_1()
        .border_color(theme::BORDER)
        .text_size(px(11.0))
        .text_color(theme::MUTED_TEXT)
        .child(div().child(summary))
        .child(
            div()
                .flex()
                .flex_row()
                .gap(px(12.0))
                .when_some(app.ui.status.clone(), |d, status| d.child(div().child(status)))
                .child(div().child(zoom_label)),
        )
}
