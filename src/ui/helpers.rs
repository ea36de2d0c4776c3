//! Shared rendering utilities and helpers.
//!
//! Components draw into a [`Canvas`], a plain string buffer of text and ANSI
//! escape sequences. The runtime writes the finished frame to the terminal in
//! one go; tests inspect it directly.
//!
//! # Features
//!
//! - **Cursor Positioning**: Zero-based cells converted to ANSI positions
//! - **Fuzzy Match Highlighting**: Renders text with highlighted character ranges
//! - **UTF-8 Safe**: Operates on character indices, not byte indices
//!
//! # Example
//!
//! ```
//! use livesearch::ui::helpers::{render_highlighted_text, Canvas};
//! use livesearch::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut canvas = Canvas::new();
//! canvas.move_to(0, 0);
//! render_highlighted_text(&mut canvas, "alice", &[(0, 2)], &theme, false);
//! assert!(canvas.as_str().starts_with("\u{1b}[1;1H"));
//! ```

use crate::ui::theme::Theme;
use std::fmt;

/// Frame buffer for one render pass.
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions the cursor at a zero-based `(row, col)` cell.
    ///
    /// Emits `\u{1b}[{row};{col}H` with one-based coordinates.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{};{}H", row + 1, col + 1));
    }

    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Appends `count` copies of `s`.
    pub fn repeat(&mut self, s: &str, count: usize) {
        self.buf.push_str(&s.repeat(count));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Write for Canvas {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

/// Takes at most `width` characters of `text`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Ranges are `(start, end)` character indices with an exclusive end. When
/// `is_selected` is true the highlights are skipped so they don't fight the
/// selection background.
pub fn render_highlighted_text(
    canvas: &mut Canvas,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    render_highlighted_with_restore(canvas, text, ranges, theme, is_selected, "");
}

/// Like [`render_highlighted_text`], re-emitting `restore` after every highlight.
pub fn render_highlighted_with_restore(
    canvas: &mut Canvas,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
    restore: &str,
) {
    if ranges.is_empty() || is_selected {
        canvas.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        if start > current_pos {
            canvas.push_str(&chars[current_pos..start].iter().collect::<String>());
        }

        canvas.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        canvas.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        canvas.push_str(&chars[start..end].iter().collect::<String>());
        canvas.push_str(Theme::reset());
        canvas.push_str(restore);

        current_pos = end;
    }

    if current_pos < chars.len() {
        canvas.push_str(&chars[current_pos..].iter().collect::<String>());
    }
}
