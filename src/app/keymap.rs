//! Terminal input mapping.
//!
//! Translates crossterm events into application [`Event`]s. The mapping depends
//! on the current [`InputMode`], so the same key can type a character in one
//! mode and move the selection in another.
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+K` / `Cmd+K`: Focus the search input and select its value
//! - `Ctrl+C`: Quit
//!
//! In normal mode:
//! - `/`: Focus the search input
//! - `q`: Quit
//! - `Esc`: Close the dropdown
//!
//! While typing:
//! - Characters edit the query, `Backspace` deletes
//! - `Enter`: Submit to the search page
//! - `Down` / `Ctrl+n`: Move into the dropdown
//! - `Esc`: Close the dropdown, then leave the input
//!
//! While navigating the dropdown:
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `Enter`: Open the selected user
//! - `/` or `Esc`: Return to typing

use super::handler::Event;
use super::modes::{InputMode, SearchFocus};
use crossterm::event::{
    Event as TerminalEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};

/// Maps any terminal event to an application event.
#[must_use]
pub fn map_terminal_event(mode: InputMode, event: &TerminalEvent) -> Option<Event> {
    match event {
        TerminalEvent::Key(key) => map_key_event(mode, key),
        TerminalEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Event::Click {
                row: usize::from(mouse.row),
                col: usize::from(mouse.column),
            }),
            _ => None,
        },
        TerminalEvent::Paste(text) => Some(Event::Paste(text.clone())),
        TerminalEvent::Resize(cols, rows) => Some(Event::Resize {
            rows: usize::from(*rows),
            cols: usize::from(*cols),
        }),
        _ => None,
    }
}

/// Maps a key event to an application event.
#[must_use]
pub fn map_key_event(mode: InputMode, key: &KeyEvent) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    tracing::trace!(code = ?key.code, modifiers = ?key.modifiers, "key event");

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let command = key.modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META);

    if ctrl || command {
        return match key.code {
            KeyCode::Char('k' | 'K') => Some(Event::FocusSearch),
            KeyCode::Char('c') if ctrl => Some(Event::Quit),
            KeyCode::Char('n') if ctrl => match mode {
                InputMode::Search(SearchFocus::Typing) => Some(Event::FocusResults),
                InputMode::Search(SearchFocus::Navigating) => Some(Event::KeyDown),
                InputMode::Normal => None,
            },
            KeyCode::Char('p') if ctrl => match mode {
                InputMode::Search(SearchFocus::Navigating) => Some(Event::KeyUp),
                _ => None,
            },
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('/') => Some(Event::FocusSearch),
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Esc => Some(Event::Escape),
            _ => None,
        },
        InputMode::Search(SearchFocus::Typing) => match key.code {
            KeyCode::Enter => Some(Event::Submit),
            KeyCode::Esc => Some(Event::Escape),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Down => Some(Event::FocusResults),
            KeyCode::Char(c) => Some(Event::Char(c)),
            _ => None,
        },
        InputMode::Search(SearchFocus::Navigating) => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(Event::KeyDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Event::KeyUp),
            KeyCode::Enter => Some(Event::Submit),
            KeyCode::Char('/') => Some(Event::FocusSearchBar),
            KeyCode::Esc => Some(Event::Escape),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    const TYPING: InputMode = InputMode::Search(SearchFocus::Typing);
    const NAVIGATING: InputMode = InputMode::Search(SearchFocus::Navigating);

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn ctrl_or_cmd_k_focuses_search_from_any_mode() {
        for mode in [InputMode::Normal, TYPING, NAVIGATING] {
            for modifiers in [KeyModifiers::CONTROL, KeyModifiers::SUPER, KeyModifiers::META] {
                assert_eq!(
                    map_key_event(mode, &key(KeyCode::Char('k'), modifiers)),
                    Some(Event::FocusSearch),
                    "{mode:?} {modifiers:?}"
                );
            }
        }
    }

    #[test]
    fn plain_k_types_while_typing_and_moves_while_navigating() {
        let k = key(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(map_key_event(TYPING, &k), Some(Event::Char('k')));
        assert_eq!(map_key_event(NAVIGATING, &k), Some(Event::KeyUp));
        assert_eq!(map_key_event(InputMode::Normal, &k), None);
    }

    #[test]
    fn shifted_characters_are_typed() {
        let upper = key(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(map_key_event(TYPING, &upper), Some(Event::Char('A')));
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut release = key(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        assert_eq!(map_key_event(TYPING, &release), None);
    }

    #[test]
    fn ctrl_n_enters_then_moves_through_the_dropdown() {
        let ctrl_n = key(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(TYPING, &ctrl_n), Some(Event::FocusResults));
        assert_eq!(map_key_event(NAVIGATING, &ctrl_n), Some(Event::KeyDown));
        assert_eq!(map_key_event(InputMode::Normal, &ctrl_n), None);
    }

    #[test]
    fn left_click_and_resize_are_mapped() {
        let click = TerminalEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            map_terminal_event(InputMode::Normal, &click),
            Some(Event::Click { row: 7, col: 12 })
        );
        assert_eq!(
            map_terminal_event(InputMode::Normal, &TerminalEvent::Resize(100, 30)),
            Some(Event::Resize { rows: 30, cols: 100 })
        );
    }
}
