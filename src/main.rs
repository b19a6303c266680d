//! Application entry point.
//!
//! Initializes logging, loads the design named on the command line (if
//! any), sets up the keymap and menus, and opens the main window.

use anyhow::Context as _;
use gpui::{
    App, AppContext as _, Application, Focusable as _, KeyBinding, Menu, MenuItem, TitlebarOptions,
    WindowOptions,
};
use pagecraft::app::{
    AddLine, AddPlaceholder, AddText, DeleteSelected, DuplicateSelected, ExportScript, Pagecraft,
    Quit, SaveDesign, ZoomIn, ZoomOut, ZoomReset,
};
use pagecraft::document::Design;

fn init_keymap(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("t", AddText, None),
        KeyBinding::new("l", AddLine, None),
        KeyBinding::new("p", AddPlaceholder, None),
        KeyBinding::new("delete", DeleteSelected, None),
        KeyBinding::new("backspace", DeleteSelected, None),
        KeyBinding::new("cmd-d", DuplicateSelected, None),
        KeyBinding::new("cmd-s", SaveDesign, None),
        KeyBinding::new("cmd-e", ExportScript, None),
        KeyBinding::new("cmd-=", ZoomIn, None),
        KeyBinding::new("cmd--", ZoomOut, None),
        KeyBinding::new("cmd-0", ZoomReset, None),
        KeyBinding::new("cmd-q", Quit, None),
    ]);
}

/// Open the design named on the command line, or start empty.
fn load_initial_design() -> anyhow::Result<Design> {
    match std::env::args().nth(1) {
        Some(path) => {
            let design = Design::load(&path)
                .with_context(|| format!("failed to load design {path}"))?;
            tracing::info!(path = %path, elements = design.elements.len(), "Design loaded");
            Ok(design)
        }
        None => Ok(Design::new()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let design = load_initial_design()?;

    Application::new().run(move |cx: &mut App| {
        cx.on_action(quit);
        cx.set_menus(vec![Menu {
            name: "Pagecraft".into(),
            items: vec![MenuItem::action("Quit", Quit)],
        }]);
        init_keymap(cx);

        let window = cx
            .open_window(
                WindowOptions {
                    titlebar: Some(TitlebarOptions {
                        title: Some("Pagecraft".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                move |_window, cx| cx.new(move |cx| Pagecraft::new(design, cx)),
            )
            .expect("failed to open window");

        window
            .update(cx, |view, window, cx| {
                window.focus(&view.focus_handle(cx));
                cx.activate(true);
            })
            .expect("failed to focus window");
    });

    Ok(())
}

fn quit(_: &Quit, cx: &mut App) {
    cx.quit();
}
