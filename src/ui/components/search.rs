//! Search bar component renderer.
//!
//! Renders the search input box with a bordered frame, the current value, and a
//! cursor while focused.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const LABEL: &str = " Search: ";
const PLACEHOLDER: &str = "Ctrl+K to search users";

/// Renders the search input box inside `search.rect`.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// # Rendering Details
///
/// - Borders use theme `search_bar_border` color when focused, `border` otherwise
/// - A selected value is drawn on `input_selection_bg`
/// - Values longer than the box show their tail, so the cursor stays visible
///
/// Returns the row below the box.
pub fn render_search_bar(canvas: &mut Canvas, search: &SearchBarInfo, theme: &Theme) -> usize {
    let rect = search.rect;
    let inner_width = rect.width.saturating_sub(2);
    let border = if search.focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    canvas.move_to(rect.top, rect.left);
    canvas.push_str(&Theme::fg(border));
    canvas.push_str("┌");
    canvas.repeat("─", inner_width);
    canvas.push_str("┐");
    canvas.push_str(Theme::reset());

    canvas.move_to(rect.top + 1, rect.left);
    canvas.push_str(&Theme::fg(border));
    canvas.push_str("│");
    canvas.push_str(&Theme::fg(&theme.colors.text_normal));
    let used = render_value(canvas, search, theme, inner_width);
    canvas.repeat(" ", inner_width.saturating_sub(used));
    canvas.push_str(&Theme::fg(border));
    canvas.push_str("│");
    canvas.push_str(Theme::reset());

    canvas.move_to(rect.top + 2, rect.left);
    canvas.push_str(&Theme::fg(border));
    canvas.push_str("└");
    canvas.repeat("─", inner_width);
    canvas.push_str("┘");
    canvas.push_str(Theme::reset());

    rect.bottom()
}

/// Draws label, value and cursor; returns the number of cells used.
fn render_value(canvas: &mut Canvas, search: &SearchBarInfo, theme: &Theme, width: usize) -> usize {
    let label: String = LABEL.chars().take(width).collect();
    let mut used = label.chars().count();
    canvas.push_str(&label);

    if search.value.is_empty() && !search.focused {
        let placeholder: String = PLACEHOLDER.chars().take(width - used).collect();
        used += placeholder.chars().count();
        canvas.push_str(Theme::dim());
        canvas.push_str(&Theme::fg(&theme.colors.text_dim));
        canvas.push_str(&placeholder);
        canvas.push_str(Theme::reset());
        return used;
    }

    let cursor = usize::from(search.focused && !search.selected);
    let room = width.saturating_sub(used + cursor);
    let chars: Vec<char> = search.value.chars().collect();
    let visible: String = chars[chars.len().saturating_sub(room)..].iter().collect();
    used += visible.chars().count();

    if search.selected {
        canvas.push_str(&Theme::bg(&theme.colors.input_selection_bg));
        canvas.push_str(&visible);
        canvas.push_str(Theme::reset());
    } else {
        canvas.push_str(&visible);
    }

    if cursor == 1 && used < width {
        canvas.push_str(&Theme::bg(&theme.colors.text_normal));
        canvas.push_str(" ");
        canvas.push_str(Theme::reset());
        used += 1;
    }

    used
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::Layout;

    fn bar(value: &str, focused: bool, selected: bool) -> SearchBarInfo {
        SearchBarInfo {
            value: value.to_string(),
            focused,
            selected,
            rect: Layout::new(24, 40).search_bar(),
        }
    }

    #[test]
    fn box_spans_the_rect() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        let next = render_search_bar(&mut canvas, &bar("ab", true, false), &theme);

        assert_eq!(next, 6);
        assert!(canvas.as_str().contains(&format!("┌{}┐", "─".repeat(28))));
        assert!(canvas.as_str().contains(" Search: ab"));
    }

    #[test]
    fn unfocused_empty_bar_shows_placeholder() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_search_bar(&mut canvas, &bar("", false, false), &theme);
        assert!(canvas.as_str().contains("Ctrl+K"));
    }

    #[test]
    fn selected_value_uses_selection_background() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_search_bar(&mut canvas, &bar("alice", true, true), &theme);
        let expected = format!("{}alice", Theme::bg(&theme.colors.input_selection_bg));
        assert!(canvas.as_str().contains(&expected));
    }

    #[test]
    fn long_values_show_their_tail() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        let value = format!("{}xyz", "a".repeat(60));
        render_search_bar(&mut canvas, &bar(&value, true, false), &theme);
        assert!(canvas.as_str().contains("axyz"));
        assert!(!canvas.as_str().contains(&"a".repeat(30)));
    }
}
