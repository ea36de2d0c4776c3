//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! The result is one frame of ANSI-styled text. It does not clear the screen;
//! the runtime does that before writing the frame.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;

/// Renders the screen for a terminal of `rows` x `cols` into a string.
///
/// # Example
///
/// ```
/// use livesearch::app::AppState;
/// use livesearch::trigger::SearchInput;
/// use livesearch::ui::{render, Theme};
/// use livesearch::StalePolicy;
/// use std::time::Duration;
///
/// let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
/// let search = SearchInput::new(Duration::from_millis(300), 2, tx);
/// let state = AppState::new(search, Theme::default(), 5, StalePolicy::Discard);
///
/// let frame = render(&state, 24, 80);
/// assert!(frame.contains("User Search"));
/// ```
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);

    let mut canvas = Canvas::new();
    components::render_screen(&mut canvas, &viewmodel, &state.theme, rows, cols);
    canvas.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::trigger::SearchInput;
    use crate::ui::Theme;
    use crate::StalePolicy;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn state() -> AppState {
        let (tx, _rx) = mpsc::unbounded_channel();
        let search = SearchInput::new(Duration::from_millis(300), 2, tx);
        AppState::new(search, Theme::default(), 5, StalePolicy::Discard)
    }

    #[test]
    fn idle_screen_has_prompt_and_no_dropdown() {
        let frame = render(&state(), 24, 80);

        assert!(frame.contains("User Search"));
        assert!(frame.contains("Type at least 2 characters to search"));
        assert_eq!(frame.matches('└').count(), 1);
    }

    #[test]
    fn open_dropdown_lists_users() {
        let mut state = state();
        state.show_suggestions(&[
            User::new("Alice Liddell", "alice@example.com", "1"),
            User::new("Bob Stone", "bob@example.com", "2"),
        ]);

        let frame = render(&state, 24, 80);
        assert!(frame.contains("Alice Liddell"));
        assert!(frame.contains("bob@example.com"));
        // Search bar and dropdown each end in a bottom-left corner.
        assert_eq!(frame.matches('└').count(), 2);
    }

    #[test]
    fn tiny_terminals_do_not_panic() {
        let mut state = state();
        state.show_suggestions(&[User::new("Alice", "alice@example.com", "1")]);
        for (rows, cols) in [(0, 0), (1, 1), (4, 8), (8, 3)] {
            let _ = render(&state, rows, cols);
        }
    }
}
