//! Application lifecycle - initialization.

use super::state::{CanvasState, Pagecraft, UiState};
use crate::document::Design;
use gpui::{Context, FocusHandle};

impl Pagecraft {
    /// Build the application around an already-loaded design.
    pub fn new(design: Design, cx: &mut Context<Self>) -> Self {
        let focus_handle: FocusHandle = cx.focus_handle();

        let mut app = Self {
            canvas: CanvasState::new(design),
            ui: UiState::default(),
            focus_handle,
        };
        // Materialize embedded images up front so first paint has them.
        app.canvas
            .image_cache
            .warm(&app.canvas.design);
        app
    }
}
