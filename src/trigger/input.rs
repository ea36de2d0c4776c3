//! Per-element search input state.
//!
//! [`SearchInput`] is the text field the user types into. It owns the raw value
//! and the [`SearchTrigger`] for that field, so every input element carries its
//! own pending timer instead of sharing a global one.

use super::search::{FiredQuery, SearchRequest, SearchTrigger};
use crate::domain::SearchQuery;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// A search text field and its debounced trigger.
///
/// Every edit that changes the value notifies the trigger exactly once. Edits
/// that leave the value unchanged (backspace on an empty field, clearing an
/// empty field) notify nothing.
#[derive(Debug)]
pub struct SearchInput {
    value: String,
    selected: bool,
    trigger: SearchTrigger,
}

impl SearchInput {
    #[must_use]
    pub fn new(
        quiet_period: Duration,
        min_query_len: usize,
        fired: UnboundedSender<FiredQuery>,
    ) -> Self {
        Self {
            value: String::new(),
            selected: false,
            trigger: SearchTrigger::new(quiet_period, min_query_len, fired),
        }
    }

    /// Types one character.
    ///
    /// If the whole value is selected, the character replaces it.
    pub fn insert(&mut self, c: char) {
        if self.selected {
            self.value.clear();
            self.selected = false;
        }
        self.value.push(c);
        self.changed();
    }

    /// Pastes text at the end of the value, replacing a selected value.
    pub fn insert_str(&mut self, text: &str) {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        if text.is_empty() {
            return;
        }
        if self.selected {
            self.value.clear();
            self.selected = false;
        }
        self.value.push_str(&text);
        self.changed();
    }

    /// Deletes the last character, or the whole value when it is selected.
    pub fn backspace(&mut self) {
        if self.selected {
            self.selected = false;
            if !self.value.is_empty() {
                self.value.clear();
                self.changed();
            }
            return;
        }
        if self.value.pop().is_some() {
            self.changed();
        }
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.selected = false;
        if !self.value.is_empty() {
            self.value.clear();
            self.changed();
        }
    }

    /// Selects the whole value so the next keystroke replaces it.
    pub fn select_all(&mut self) {
        self.selected = !self.value.is_empty();
    }

    /// Drops the selection without changing the value.
    pub fn deselect(&mut self) {
        self.selected = false;
    }

    /// Forwards a timer fire to the trigger.
    pub fn fire(&mut self, fired: FiredQuery) -> Option<SearchRequest> {
        self.trigger.fire(fired)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Trimmed query as of the last edit.
    #[must_use]
    pub const fn query(&self) -> &SearchQuery {
        self.trigger.query()
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    #[must_use]
    pub const fn trigger(&self) -> &SearchTrigger {
        &self.trigger
    }

    pub fn trigger_mut(&mut self) -> &mut SearchTrigger {
        &mut self.trigger
    }

    fn changed(&mut self) {
        self.trigger.on_input_change(&self.value);
    }
}
