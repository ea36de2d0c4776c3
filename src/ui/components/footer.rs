//! Footer component renderer.

use crate::ui::helpers::{truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding help bar at the specified row.
///
/// The text is centered, dimmed, and truncated on narrow terminals so it never
/// wraps onto the next line.
pub fn render_footer(
    canvas: &mut Canvas,
    row: usize,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = help_text.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    canvas.move_to(row, 0);
    canvas.push_str(&Theme::fg(&theme.colors.text_dim));
    canvas.repeat(" ", padding);
    canvas.push_str(help_text);
    canvas.repeat(" ", cols.saturating_sub(padding + text_len));
    canvas.push_str(Theme::reset());
    row + 1
}
