//! Suggestion dropdown renderer.
//!
//! Draws the users below the search bar, two rows each: the name in bold and the
//! email dimmed, with fuzzy match highlights. The dropdown shares the search
//! bar's left edge and width and closes with a bottom border.

use crate::ui::helpers::{render_highlighted_with_restore, truncate, Canvas};
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DropdownInfo, SuggestionItem};

/// Renders the dropdown into `dropdown.rect`.
pub fn render_dropdown(canvas: &mut Canvas, dropdown: &DropdownInfo, theme: &Theme) {
    let rect = dropdown.rect;
    let inner_width = rect.width.saturating_sub(2);

    for (idx, item) in dropdown.items.iter().enumerate() {
        let row = Layout::suggestion_row(&rect, idx);
        render_item(canvas, row, rect.left, inner_width, item, theme);
    }

    let bottom = Layout::suggestion_row(&rect, dropdown.items.len());
    canvas.move_to(bottom, rect.left);
    canvas.push_str(&Theme::fg(&theme.colors.border));
    canvas.push_str("└");
    canvas.repeat("─", inner_width);
    canvas.push_str("┘");
    canvas.push_str(Theme::reset());
}

fn render_item(
    canvas: &mut Canvas,
    row: usize,
    left: usize,
    inner_width: usize,
    item: &SuggestionItem,
    theme: &Theme,
) {
    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    let name_style = format!("{base}{}", Theme::bold());
    render_line(
        canvas,
        row,
        left,
        inner_width,
        &item.name,
        &item.name_highlights,
        &name_style,
        item,
        theme,
    );

    let email_style = if item.is_selected {
        base
    } else {
        format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
    };
    render_line(
        canvas,
        row + 1,
        left,
        inner_width,
        &item.email,
        &item.email_highlights,
        &email_style,
        item,
        theme,
    );
}

#[allow(clippy::too_many_arguments)]
fn render_line(
    canvas: &mut Canvas,
    row: usize,
    left: usize,
    inner_width: usize,
    text: &str,
    highlights: &[(usize, usize)],
    style: &str,
    item: &SuggestionItem,
    theme: &Theme,
) {
    let text_width = inner_width.saturating_sub(2);
    let text = truncate(text, text_width);

    canvas.move_to(row, left);
    canvas.push_str(&Theme::fg(&theme.colors.border));
    canvas.push_str("│");
    canvas.push_str(Theme::reset());

    canvas.push_str(style);
    canvas.repeat(" ", inner_width.min(1));
    render_highlighted_with_restore(canvas, text, highlights, theme, item.is_selected, style);
    canvas.repeat(" ", inner_width.saturating_sub(1 + text.chars().count()));
    canvas.push_str(Theme::reset());

    canvas.push_str(&Theme::fg(&theme.colors.border));
    canvas.push_str("│");
    canvas.push_str(Theme::reset());
}
