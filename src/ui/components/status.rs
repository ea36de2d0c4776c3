//! Status line renderer.

use crate::ui::helpers::{truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Renders the status message left-aligned under the search bar margin.
pub fn render_status(
    canvas: &mut Canvas,
    row: usize,
    left: usize,
    status: &StatusInfo,
    theme: &Theme,
    cols: usize,
) {
    let width = cols.saturating_sub(left);
    let message = truncate(&status.message, width);

    canvas.move_to(row, 0);
    canvas.repeat(" ", left);
    canvas.push_str(&Theme::fg(&theme.colors.status_fg));
    canvas.push_str(message);
    canvas.repeat(" ", width.saturating_sub(message.chars().count()));
    canvas.push_str(Theme::reset());
}
