//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes keystrokes, mouse
//! clicks, debounce fires and worker responses, translating them into state
//! changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal, the debounce timers or the worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Focus**: `FocusSearch`, `FocusSearchBar`, `FocusResults`, `Escape`
//! - **Input**: `Char`, `Paste`, `Backspace`, `Submit`
//! - **Dropdown**: `KeyDown`, `KeyUp`, `Click`
//! - **System**: `Resize`, `Quit`
//! - **Async**: `DebounceFired`, `WorkerResponse`

use super::actions::NavigationTarget;
use super::modes::{InputMode, SearchFocus};
use super::state::HitTarget;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::trigger::FiredQuery;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, timers or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Focuses the search input and selects its value (Ctrl+K / Cmd+K).
    FocusSearch,
    /// Returns focus from the dropdown to the input.
    FocusSearchBar,
    /// Moves focus from the input into the dropdown.
    FocusResults,
    /// Moves the dropdown selection down (wraps to top).
    KeyDown,
    /// Moves the dropdown selection up (wraps to bottom).
    KeyUp,
    /// Types a character into the input.
    Char(char),
    /// Pastes text into the input.
    Paste(String),
    /// Deletes the last character of the input.
    Backspace,
    /// Submits the search form, or opens the selected suggestion.
    Submit,
    /// Closes the dropdown, then leaves search.
    Escape,
    /// Quits the application.
    Quit,
    /// Left mouse click at a zero-based cell.
    Click { row: usize, col: usize },
    /// Terminal size changed.
    Resize { rows: usize, cols: usize },
    /// A debounce timer elapsed.
    DebounceFired(FiredQuery),
    /// Wraps a response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the screen needs a re-render, plus the actions to run in
/// order.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for handlers that validate
/// input before acting.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::FocusSearch => {
            tracing::debug!("focusing search input");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search.select_all();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if state.input_mode != InputMode::Search(SearchFocus::Navigating) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if !state.input_mode.is_search() || state.selected_suggestion().is_none() {
                return Ok((false, vec![]));
            }
            state.search.deselect();
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            if state.input_mode != InputMode::Search(SearchFocus::Navigating) {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.input_mode != InputMode::Search(SearchFocus::Navigating) {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            state.search.insert(*c);
            tracing::trace!(query = %state.search.query(), char = %c, "search input changed");
            Ok((true, vec![]))
        }
        Event::Paste(text) => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            state.search.insert_str(text);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            state.search.backspace();
            Ok((true, vec![]))
        }
        Event::Submit => match state.input_mode {
            InputMode::Search(SearchFocus::Navigating) => {
                let Some(user) = state.selected_suggestion() else {
                    tracing::debug!("no suggestion selected");
                    return Ok((false, vec![]));
                };
                tracing::debug!(user_id = %user.id, "opening selected user");
                Ok((false, vec![Action::Navigate(NavigationTarget::edit_user(user))]))
            }
            InputMode::Search(SearchFocus::Typing) => {
                let query = state.search.query().clone();
                if query.is_empty() {
                    tracing::debug!("empty query, not submitting");
                    return Ok((false, vec![]));
                }
                tracing::debug!(query = %query, "submitting search form");
                Ok((false, vec![Action::Navigate(NavigationTarget::SearchPage { query })]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => match state.input_mode {
            InputMode::Search(SearchFocus::Navigating) => {
                state.input_mode = InputMode::Search(SearchFocus::Typing);
                Ok((true, vec![]))
            }
            InputMode::Search(SearchFocus::Typing) if state.dropdown_open => {
                state.close_dropdown();
                Ok((true, vec![]))
            }
            InputMode::Search(SearchFocus::Typing) => {
                tracing::debug!("leaving search input");
                state.search.deselect();
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Normal if state.dropdown_open => {
                state.close_dropdown();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::Click { row, col } => match state.hit_test(*row, *col) {
            HitTarget::Suggestion(index) => {
                let Some(user) = state.suggestions.get(index) else {
                    return Ok((false, vec![]));
                };
                tracing::debug!(user_id = %user.id, "suggestion clicked");
                Ok((false, vec![Action::Navigate(NavigationTarget::edit_user(user))]))
            }
            HitTarget::Dropdown => Ok((false, vec![])),
            HitTarget::SearchInput => {
                state.search.deselect();
                state.input_mode = InputMode::Search(SearchFocus::Typing);
                Ok((true, vec![]))
            }
            HitTarget::Outside => {
                let was_open = state.dropdown_open;
                state.close_dropdown();
                if state.input_mode.is_search() {
                    state.search.deselect();
                    state.input_mode = InputMode::Normal;
                    return Ok((true, vec![]));
                }
                Ok((was_open, vec![]))
            }
        },
        Event::Resize { rows, cols } => {
            state.resize(*rows, *cols);
            Ok((true, vec![]))
        }
        Event::DebounceFired(fired) => {
            let before = state.search.trigger().state();
            match state.search.fire(fired.clone()) {
                Some(request) => {
                    tracing::debug!(seq = request.seq, query = %request.query, "posting search");
                    Ok((true, vec![Action::PostToWorker(WorkerMessage::from_request(request))]))
                }
                // A superseded fire leaves the trigger untouched.
                None => Ok((state.search.trigger().state() != before, vec![])),
            }
        }
        Event::WorkerResponse(response) => Ok((state.apply_response(response), vec![])),
    }
}
