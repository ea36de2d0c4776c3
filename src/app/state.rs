//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for everything
//! on screen: the input mode, the search input with its trigger, the current
//! suggestions and the last applied result.
//!
//! # Reply Handling
//!
//! Search replies arrive from the worker in completion order, which is not
//! necessarily request order. With [`StalePolicy::Discard`] a reply is applied
//! only if it answers the most recently issued request of the input; with
//! [`StalePolicy::ArrivalOrder`] every reply is applied as it arrives, so a slow
//! older reply may overwrite a newer one.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` resolves geometry from the terminal size, caps the
//! dropdown at `max_suggestions` (and at what fits on screen), and computes
//! fuzzy match highlight ranges for names and emails.

use super::modes::{InputMode, SearchFocus};
use crate::domain::{SearchQuery, User};
use crate::trigger::{SearchInput, TriggerState};
use crate::ui::layout::{Layout, Rect};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DropdownInfo, FooterInfo, HeaderInfo, SearchBarInfo, StatusInfo, SuggestionItem, UIViewModel,
};
use crate::worker::WorkerResponse;
use crate::StalePolicy;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Summary of the last applied search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub query: SearchQuery,
    pub count: usize,
    /// Completion time, milliseconds since the Unix epoch.
    pub completed_at: i64,
}

/// What a screen cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The search input box.
    SearchInput,
    /// Suggestion at this index.
    Suggestion(usize),
    /// Dropdown cell that belongs to no suggestion (its bottom border).
    Dropdown,
    /// Anywhere else.
    Outside,
}

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Current input handling mode.
    pub input_mode: InputMode,

    /// The search input and its debounced trigger.
    pub search: SearchInput,

    /// Users shown in the dropdown, at most `max_suggestions`.
    pub suggestions: Vec<User>,

    /// Whether the dropdown is on screen.
    pub dropdown_open: bool,

    /// Zero-based index of the selected suggestion.
    pub selected_index: usize,

    /// Last result applied to the dropdown.
    pub last_result: Option<ResultSummary>,

    pub stale_policy: StalePolicy,

    /// Upper bound on dropdown entries.
    pub max_suggestions: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Terminal size as of the last resize, `(rows, cols)`.
    pub viewport: (usize, usize),
}

impl AppState {
    #[must_use]
    pub fn new(
        search: SearchInput,
        theme: Theme,
        max_suggestions: usize,
        stale_policy: StalePolicy,
    ) -> Self {
        Self {
            input_mode: InputMode::Normal,
            search,
            suggestions: Vec::new(),
            dropdown_open: false,
            selected_index: 0,
            last_result: None,
            stale_policy,
            max_suggestions,
            theme,
            viewport: (24, 80),
        }
    }

    /// Moves the selection down by one, wrapping to the top.
    ///
    /// Only suggestions drawn at the current viewport can be selected.
    pub fn move_selection_down(&mut self) {
        let visible = self.visible_suggestions();
        if visible == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % visible;
    }

    /// Moves the selection up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let visible = self.visible_suggestions();
        if visible == 0 {
            return;
        }
        if self.selected_index == 0 || self.selected_index >= visible {
            self.selected_index = visible - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_suggestion(&self) -> Option<&User> {
        if self.selected_index >= self.visible_suggestions() {
            return None;
        }
        self.suggestions.get(self.selected_index)
    }

    /// Number of suggestions the dropdown draws at the current viewport.
    #[must_use]
    pub fn visible_suggestions(&self) -> usize {
        self.dropdown_geometry(&self.layout())
            .map_or(0, |(_, count)| count)
    }

    /// Records a new terminal size and keeps the selection on screen.
    ///
    /// Leaves the dropdown for the input when no suggestion fits any more.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.viewport = (rows, cols);

        let visible = self.visible_suggestions();
        if visible == 0 {
            self.selected_index = 0;
            if self.input_mode == InputMode::Search(SearchFocus::Navigating) {
                self.input_mode = InputMode::Search(SearchFocus::Typing);
            }
        } else if self.selected_index >= visible {
            self.selected_index = visible - 1;
        }
    }

    /// Replaces the dropdown with `users`.
    ///
    /// The previous dropdown is always removed first. An empty result set leaves
    /// no dropdown at all.
    pub fn show_suggestions(&mut self, users: &[User]) {
        self.close_dropdown();

        if users.is_empty() {
            return;
        }

        self.suggestions = users.iter().take(self.max_suggestions).cloned().collect();
        self.dropdown_open = true;
    }

    /// Removes the dropdown.
    pub fn close_dropdown(&mut self) {
        self.suggestions.clear();
        self.dropdown_open = false;
        self.selected_index = 0;
        if self.input_mode == InputMode::Search(SearchFocus::Navigating) {
            self.input_mode = InputMode::Search(SearchFocus::Typing);
        }
    }

    /// Applies a worker response and returns whether the screen changed.
    ///
    /// Failures were already logged by the worker and are swallowed here.
    pub fn apply_response(&mut self, response: &WorkerResponse) -> bool {
        match response {
            WorkerResponse::SearchCompleted {
                seq,
                query,
                users,
                completed_at,
            } => {
                if self.stale_policy == StalePolicy::Discard && !self.search.trigger().is_latest(*seq) {
                    tracing::debug!(
                        seq,
                        latest = ?self.search.trigger().last_issued(),
                        query = %query,
                        "discarding stale search response"
                    );
                    return false;
                }

                tracing::info!(seq, "Found {} users matching \"{}\"", users.len(), query);

                self.last_result = Some(ResultSummary {
                    query: query.clone(),
                    count: users.len(),
                    completed_at: *completed_at,
                });
                self.show_suggestions(users);
                true
            }
            WorkerResponse::SearchFailed { seq, query, .. } => {
                tracing::debug!(seq, query = %query, "search failure swallowed");
                false
            }
        }
    }

    /// Finds what the cell at `(row, col)` belongs to, using the last viewport.
    #[must_use]
    pub fn hit_test(&self, row: usize, col: usize) -> HitTarget {
        let layout = self.layout();

        if let Some((rect, count)) = self.dropdown_geometry(&layout) {
            if rect.contains(row, col) {
                let index = (row - rect.top) / crate::ui::layout::ROWS_PER_SUGGESTION;
                return if index < count {
                    HitTarget::Suggestion(index)
                } else {
                    HitTarget::Dropdown
                };
            }
        }

        if layout.search_bar().contains(row, col) {
            HitTarget::SearchInput
        } else {
            HitTarget::Outside
        }
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let layout = Layout::new(rows, cols);

        let dropdown = self.dropdown_geometry(&layout).map(|(rect, count)| {
            let query = self.search.query().as_str();
            let matcher = (!query.is_empty()).then(SkimMatcherV2::default);
            let navigating = self.input_mode == InputMode::Search(SearchFocus::Navigating);

            let items = self
                .suggestions
                .iter()
                .take(count)
                .enumerate()
                .map(|(idx, user)| SuggestionItem {
                    name: user.name.clone(),
                    email: user.email.clone(),
                    href: user.edit_path(),
                    is_selected: navigating && idx == self.selected_index,
                    name_highlights: matcher
                        .as_ref()
                        .map_or_else(Vec::new, |m| highlight_ranges(&user.name, query, m)),
                    email_highlights: matcher
                        .as_ref()
                        .map_or_else(Vec::new, |m| highlight_ranges(&user.email, query, m)),
                })
                .collect();

            DropdownInfo { rect, items }
        });

        UIViewModel {
            header: HeaderInfo {
                title: " User Search ".to_string(),
            },
            search_bar: SearchBarInfo {
                value: self.search.value().to_string(),
                focused: self.input_mode.is_search(),
                selected: self.search.is_selected(),
                rect: layout.search_bar(),
            },
            dropdown,
            status: self.compute_status(),
            footer: self.compute_footer(),
        }
    }

    fn layout(&self) -> Layout {
        Layout::new(self.viewport.0, self.viewport.1)
    }

    /// Dropdown rectangle and visible item count, if the dropdown is shown.
    fn dropdown_geometry(&self, layout: &Layout) -> Option<(Rect, usize)> {
        if !self.dropdown_open {
            return None;
        }
        let count = self.suggestions.len().min(layout.dropdown_capacity());
        (count > 0).then(|| (layout.dropdown(count), count))
    }

    fn compute_status(&self) -> StatusInfo {
        let min_len = self.search.trigger().min_query_len();
        let message = match (&self.last_result, self.search.trigger().state()) {
            (_, TriggerState::Waiting) if self.search.query().is_searchable(min_len) => {
                format!("Searching for \"{}\"...", self.search.query())
            }
            (Some(result), _) => {
                format!("Found {} users matching \"{}\"", result.count, result.query)
            }
            (None, _) => format!("Type at least {min_len} characters to search"),
        };
        StatusInfo { message }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: close  Enter: search page  Down/Ctrl+n: suggestions  Ctrl+C: quit"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC or /: edit query  j/k or Ctrl+n/p: navigate  Enter: open user"
            }
            InputMode::Normal => "Ctrl+K or /: search  click: open user  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Character ranges of `text` matched by `query`, coalesced into runs.
///
/// Returns `(start, end)` pairs with an exclusive end, in character indices.
fn highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return Vec::new();
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
