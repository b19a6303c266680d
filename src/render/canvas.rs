//! Canvas rendering - the page sheet, elements, selection outlines, and
//! resize handles.
//!
//! Line elements and the page itself are painted straight to the GPU inside
//! a `canvas()` closure; box elements (text, image, placeholder) are
//! absolute-positioned divs layered above it. Selection visuals come from
//! the same geometry functions the interaction engine uses, so outline and
//! hit-region always agree.
//!
//! ## Performance Notes
//!
//! This is a hot path - rendering happens every frame. Elements completely
//! outside the viewport are culled before any div is built.

use crate::app::Pagecraft;
use crate::constants::{CULLING_MARGIN, HANDLE_SIZE};
use crate::geometry;
use crate::profile_scope;
use crate::render::{parse_hex_color, theme};
use crate::types::{Element, ElementContent, PageSettings};
use gpui::prelude::FluentBuilder;
use gpui::{PathBuilder, *};
use std::collections::HashMap;
use std::path::PathBuf;

/// Render the interactive canvas area: painted layer + element divs, with
/// all mouse listeners attached.
pub fn render_canvas_area(
    app: &Pagecraft,
    viewport: Size<Pixels>,
    cx: &Context<Pagecraft>,
) -> Stateful<Div> {
    profile_scope!("render_canvas_area");

    let canvas_offset = app.canvas.canvas_offset;
    let zoom = app.canvas.zoom;
    let page = app.canvas.design.page.clone();
    let elements = app.canvas.design.elements.clone();
    let selected: Vec<u64> = app.canvas.selection.ids().to_vec();
    let image_paths: HashMap<u64, PathBuf> = elements
        .iter()
        .filter_map(|element| match &element.content {
            ElementContent::Image { .. } => app
                .canvas
                .image_cache
                .cached_path(element.id)
                .map(|path| (element.id, path)),
            _ => None,
        })
        .collect();

    div()
        .id("canvas")
        .flex_1()
        .relative()
        .overflow_hidden()
        .bg(theme::CANVAS_BG)
        .on_mouse_down(MouseButton::Left, cx.listener(Pagecraft::handle_mouse_down))
        .on_mouse_up(MouseButton::Left, cx.listener(Pagecraft::handle_mouse_up))
        .on_mouse_move(cx.listener(Pagecraft::handle_mouse_move))
        .on_scroll_wheel(cx.listener(Pagecraft::handle_scroll))
        .on_drop(cx.listener(|this, paths: &ExternalPaths, window, cx| {
            this.handle_file_drop(paths, window, cx);
        }))
        .child(render_paint_layer(
            page,
            elements.clone(),
            selected.clone(),
            canvas_offset,
            zoom,
        ))
        .children(render_elements(
            &elements,
            &selected,
            &image_paths,
            canvas_offset,
            zoom,
            viewport,
        ))
}

/// The GPU-painted layer: page sheet, line elements, placeholder borders,
/// and line selection visuals.
fn render_paint_layer(
    page: PageSettings,
    elements: Vec<Element>,
    selected: Vec<u64>,
    canvas_offset: Point<Pixels>,
    zoom: f32,
) -> impl IntoElement {
    canvas(
        move |_bounds, _window, _cx| (),
        move |bounds, _data, window, _cx| {
            paint_page(bounds, window, &page, canvas_offset, zoom);
            paint_lines(bounds, window, &elements, canvas_offset, zoom);
            paint_placeholder_borders(bounds, window, &elements, canvas_offset, zoom);
            paint_line_selections(bounds, window, &elements, &selected, canvas_offset, zoom);
        },
    )
    .absolute()
    .size_full()
}

fn paint_page(
    bounds: Bounds<Pixels>,
    window: &mut Window,
    page: &PageSettings,
    canvas_offset: Point<Pixels>,
    zoom: f32,
) {
    let origin_x = f32::from(bounds.origin.x) + f32::from(canvas_offset.x);
    let origin_y = f32::from(bounds.origin.y) + f32::from(canvas_offset.y);
    let width = page.width * zoom;
    let height = page.height * zoom;

    let shadow_bounds = Bounds {
        origin: point(px(origin_x + 4.0), px(origin_y + 4.0)),
        size: size(px(width), px(height)),
    };
    window.paint_quad(quad(
        shadow_bounds,
        px(0.0),
        theme::PAGE_SHADOW,
        px(0.0),
        gpui::transparent_black(),
        Default::default(),
    ));

    let page_bounds = Bounds {
        origin: point(px(origin_x), px(origin_y)),
        size: size(px(width), px(height)),
    };
    window.paint_quad(quad(
        page_bounds,
        px(0.0),
        theme::PAGE_BG,
        px(1.0),
        theme::PAGE_BORDER,
        Default::default(),
    ));
}

/// Lines draw from their authoritative endpoints; the cached size hint
/// plays no part here.
fn paint_lines(
    bounds: Bounds<Pixels>,
    window: &mut Window,
    elements: &[Element],
    canvas_offset: Point<Pixels>,
    zoom: f32,
) {
    let offset_x = f32::from(bounds.origin.x) + f32::from(canvas_offset.x);
    let offset_y = f32::from(bounds.origin.y) + f32::from(canvas_offset.y);

    for element in elements {
        let ElementContent::Line {
            end,
            stroke_width,
            stroke_color,
        } = &element.content
        else {
            continue;
        };

        let (x1, y1) = element.position;
        let (x2, y2) = *end;
        let color = parse_hex_color(stroke_color).opacity(element.opacity);

        let mut path = PathBuilder::stroke(px((stroke_width * zoom).max(1.0)));
        path.move_to(point(px(x1 * zoom + offset_x), px(y1 * zoom + offset_y)));
        path.line_to(point(px(x2 * zoom + offset_x), px(y2 * zoom + offset_y)));
        if let Ok(built_path) = path.build() {
            window.paint_path(built_path, color);
        }
    }
}

/// Placeholders show as dashed boxes at design time.
fn paint_placeholder_borders(
    bounds: Bounds<Pixels>,
    window: &mut Window,
    elements: &[Element],
    canvas_offset: Point<Pixels>,
    zoom: f32,
) {
    let offset_x = f32::from(bounds.origin.x) + f32::from(canvas_offset.x);
    let offset_y = f32::from(bounds.origin.y) + f32::from(canvas_offset.y);

    for element in elements {
        let ElementContent::Placeholder { color, .. } = &element.content else {
            continue;
        };

        let box_bounds = Bounds {
            origin: point(
                px(element.position.0 * zoom + offset_x),
                px(element.position.1 * zoom + offset_y),
            ),
            size: size(px(element.width * zoom), px(element.height * zoom)),
        };
        window.paint_quad(quad(
            box_bounds,
            px(2.0 * zoom),
            gpui::transparent_black(),
            px(1.0),
            parse_hex_color(color).opacity(0.8 * element.opacity),
            BorderStyle::Dashed,
        ));
    }
}

/// Selected lines get their endpoint-derived bounding box outlined plus a
/// handle square on each endpoint. Box elements carry their selection
/// visuals on their divs instead.
fn paint_line_selections(
    bounds: Bounds<Pixels>,
    window: &mut Window,
    elements: &[Element],
    selected: &[u64],
    canvas_offset: Point<Pixels>,
    zoom: f32,
) {
    let offset_x = f32::from(bounds.origin.x) + f32::from(canvas_offset.x);
    let offset_y = f32::from(bounds.origin.y) + f32::from(canvas_offset.y);

    for element in elements {
        if !element.is_line() || !selected.contains(&element.id) {
            continue;
        }

        let rect = geometry::bounding_box(element);
        let outline_bounds = Bounds {
            origin: point(
                px(rect.x * zoom + offset_x),
                px(rect.y * zoom + offset_y),
            ),
            size: size(px(rect.width * zoom), px(rect.height * zoom)),
        };
        window.paint_quad(quad(
            outline_bounds,
            px(0.0),
            gpui::transparent_black(),
            px(1.0),
            theme::SELECTED,
            Default::default(),
        ));

        let handle_px = HANDLE_SIZE * zoom;
        for (_, (anchor_x, anchor_y)) in geometry::handles(element) {
            let handle_bounds = Bounds {
                origin: point(
                    px(anchor_x * zoom + offset_x - handle_px / 2.0),
                    px(anchor_y * zoom + offset_y - handle_px / 2.0),
                ),
                size: size(px(handle_px), px(handle_px)),
            };
            window.paint_quad(quad(
                handle_bounds,
                px(1.5),
                theme::HANDLE_FILL,
                px(1.0),
                theme::SELECTED,
                Default::default(),
            ));
        }
    }
}

/// Box elements (text, image, placeholder) as absolute-positioned divs,
/// selection border and handles included.
fn render_elements(
    elements: &[Element],
    selected: &[u64],
    image_paths: &HashMap<u64, PathBuf>,
    canvas_offset: Point<Pixels>,
    zoom: f32,
    viewport: Size<Pixels>,
) -> Vec<Div> {
    profile_scope!("render_elements");

    let offset_x = f32::from(canvas_offset.x);
    let offset_y = f32::from(canvas_offset.y);

    let vp_left = -CULLING_MARGIN;
    let vp_top = -CULLING_MARGIN;
    let vp_right = f32::from(viewport.width) + CULLING_MARGIN;
    let vp_bottom = f32::from(viewport.height) + CULLING_MARGIN;

    let mut result = Vec::with_capacity(elements.len().min(100));

    for element in elements {
        if element.is_line() {
            continue;
        }

        let x = element.position.0 * zoom + offset_x;
        let y = element.position.1 * zoom + offset_y;
        let width = element.width * zoom;
        let height = element.height * zoom;

        // Skip elements completely outside the visible area.
        if x + width < vp_left || x > vp_right || y + height < vp_top || y > vp_bottom {
            continue;
        }

        let is_selected = selected.contains(&element.id);

        result.push(
            div()
                .absolute()
                .left(px(x))
                .top(px(y))
                .w(px(width))
                .h(px(height))
                .child(render_element_content(element, image_paths, zoom))
                .when(is_selected, |d| {
                    d.border_2()
                        .border_color(theme::SELECTED)
                        .children(render_box_handles(width, height, zoom))
                }),
        );
    }

    result
}

fn render_element_content(
    element: &Element,
    image_paths: &HashMap<u64, PathBuf>,
    zoom: f32,
) -> Div {
    let content = match &element.content {
        ElementContent::Text {
            text,
            font_family,
            font_size,
            color,
        } => div()
            .size_full()
            .overflow_hidden()
            .text_size(px(font_size * zoom))
            .text_color(parse_hex_color(color))
            .font_family(SharedString::from(font_family.clone()))
            .child(text.clone()),

        ElementContent::Image { .. } => match image_paths.get(&element.id) {
            Some(path) => div()
                .size_full()
                .overflow_hidden()
                .child(img(path.clone()).size_full().object_fit(ObjectFit::Contain)),
            None => div()
                .size_full()
                .flex()
                .items_center()
                .justify_center()
                .bg(theme::BUTTON_BG)
                .text_size(px(11.0 * zoom))
                .text_color(theme::MUTED_TEXT)
                .child("Image"),
        },

        ElementContent::Placeholder {
            label,
            font_family,
            font_size,
            color,
        } => div()
            .size_full()
            .overflow_hidden()
            .flex()
            .items_center()
            .px(px(4.0 * zoom))
            .text_size(px(font_size * zoom))
            .text_color(parse_hex_color(color))
            .font_family(SharedString::from(font_family.clone()))
            .child(format!("{{{{{}}}}}", label)),

        ElementContent::Line { .. } => {
            unreachable!("line elements are painted, never rendered as divs")
        }
    };
    content.opacity(element.opacity)
}

/// The eight handle squares on a selected box element, positioned relative
/// to the element div.
fn render_box_handles(width: f32, height: f32, zoom: f32) -> Vec<Div> {
    let handle_px = HANDLE_SIZE * zoom;
    let half = handle_px / 2.0;

    let anchors: [(f32, f32, CursorStyle); 8] = [
        (0.0, 0.0, CursorStyle::ResizeUpLeftDownRight),
        (width / 2.0, 0.0, CursorStyle::ResizeUpDown),
        (width, 0.0, CursorStyle::ResizeUpRightDownLeft),
        (width, height / 2.0, CursorStyle::ResizeLeftRight),
        (width, height, CursorStyle::ResizeUpLeftDownRight),
        (width / 2.0, height, CursorStyle::ResizeUpDown),
        (0.0, height, CursorStyle::ResizeUpRightDownLeft),
        (0.0, height / 2.0, CursorStyle::ResizeLeftRight),
    ];

    anchors
        .into_iter()
        .map(|(anchor_x, anchor_y, cursor)| {
            div()
                .absolute()
                .left(px(anchor_x - half))
                .top(px(anchor_y - half))
                .w(px(handle_px))
                .h(px(handle_px))
                .bg(theme::HANDLE_FILL)
                .border_1()
                .border_color(theme::SELECTED)
                .rounded(px(1.5))
                .cursor(cursor)
        })
        .collect()
}
