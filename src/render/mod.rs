//! Canvas and chrome rendering.
//!
//! - `canvas` - the page sheet, elements, selection outlines, handles
//! - `chrome` - header and status footer
//! - `dock` - left toolbar
//! - `image_cache` - temp-file cache for embedded image rendering

pub mod canvas;
pub mod chrome;
pub mod dock;
pub mod image_cache;

use gpui::{Hsla, rgb};

/// Fixed dark palette for the editor chrome and canvas.
pub mod theme {
    use gpui::Hsla;

    pub const WINDOW_BG: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.13,
        a: 1.0,
    };

    pub const CANVAS_BG: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.17,
        a: 1.0,
    };

    pub const CHROME_BG: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.10,
        a: 1.0,
    };

    pub const BORDER: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.26,
        a: 1.0,
    };

    pub const TEXT: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.92,
        a: 1.0,
    };

    pub const MUTED_TEXT: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.55,
        a: 1.0,
    };

    pub const BUTTON_BG: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.22,
        a: 1.0,
    };

    pub const PAGE_BG: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.99,
        a: 1.0,
    };

    pub const PAGE_BORDER: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.35,
        a: 1.0,
    };

    pub const PAGE_SHADOW: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.0,
        a: 0.35,
    };

    /// Selection outline and handle accents
    pub const SELECTED: Hsla = Hsla {
        h: 205.0 / 360.0,
        s: 0.9,
        l: 0.48,
        a: 1.0,
    };

    pub const HANDLE_FILL: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.98,
        a: 1.0,
    };
}

/// Parse a `#rrggbb` hex color, falling back to black on malformed input.
pub fn parse_hex_color(hex: &str) -> Hsla {
    let trimmed = hex.trim_start_matches('#');
    match u32::from_str_radix(trimmed, 16) {
        Ok(value) if trimmed.len() == 6 => rgb(value).into(),
        _ => gpui::black(),
    }
}
