//! Composable UI component renderers.
//!
//! Each component draws one part of the screen into a [`Canvas`]:
//!
//! - [`header`]: Title bar
//! - [`search`]: Search input box (border, value, cursor)
//! - [`dropdown`]: Suggestion list anchored to the search box
//! - [`status`]: One-line result summary
//! - [`footer`]: Keybinding hints
//!
//! [`render_screen`] composes them in the order the layout prescribes; the
//! dropdown is drawn last among the body components so it overlays whatever is
//! under it.

mod dropdown;
mod footer;
mod header;
mod search;
mod status;

use crate::ui::helpers::Canvas;
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use dropdown::render_dropdown;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use status::render_status;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row.
fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.move_to(row, 0);
    canvas.push_str(&Theme::fg(color));
    canvas.repeat("─", cols);
    canvas.push_str(Theme::reset());
    row + 1
}

/// Renders the full search screen.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Dropdown - 2 lines per user + border]
/// [Blank]
/// [Status]
/// [Border]
/// [Footer]
/// ```
pub fn render_screen(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let layout = Layout::new(rows, cols);

    let row = render_header(canvas, layout.header_row(), &vm.header, theme, cols);
    render_border(canvas, row, &theme.colors.border, cols);
    render_search_bar(canvas, &vm.search_bar, theme);

    if let Some(dropdown) = &vm.dropdown {
        render_dropdown(canvas, dropdown, theme);
    }

    let status_row = layout.status_row();
    if status_row > vm.search_bar.rect.bottom() {
        render_status(canvas, status_row, vm.search_bar.rect.left, &vm.status, theme, cols);
    }

    let footer_row = layout.footer_row();
    render_border(canvas, footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(canvas, footer_row, &vm.footer, theme, cols);
}
