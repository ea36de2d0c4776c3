//! Header component renderer.
//!
//! Renders the title bar with centered text, theme-aware colors, and optional
//! background styling.

use crate::ui::helpers::{truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// Displays the title centered horizontally with bold styling and pads the line
/// to fill the entire terminal width. When the width cannot be split evenly the
/// right padding is slightly larger.
///
/// ```text
/// [left padding] TITLE [right padding]
/// ```
///
/// Returns the next available row.
pub fn render_header(
    canvas: &mut Canvas,
    row: usize,
    header: &HeaderInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = title.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    canvas.move_to(row, 0);
    canvas.push_str(Theme::bold());
    canvas.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        canvas.push_str(&Theme::bg(bg));
    }

    canvas.repeat(" ", padding);
    canvas.push_str(title);
    canvas.repeat(" ", cols.saturating_sub(padding + title_len));

    canvas.push_str(Theme::reset());
    row + 1
}
