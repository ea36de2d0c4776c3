//! Input mode state types for the application.
//!
//! These enums decide which keybindings are active and where keystrokes go.
//!
//! # State Machine
//!
//! The application operates in one of two primary input modes:
//! - **Normal**: The search input is not focused
//! - **Search**: The search input is focused, either typing or moving through the
//!   suggestion dropdown
//!
//! ```text
//! Normal ──Ctrl+K or /──▶ Search(Typing) ◀──/ or Esc──▶ Search(Navigating)
//!   ▲                         │
//!   └──────────Esc────────────┘
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input.
    ///
    /// Characters edit the query and re-arm the debounce timer.
    Typing,

    /// User is moving through the suggestion dropdown.
    ///
    /// Accepts j/k for movement, enter to open a user, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// The search input is not focused.
    ///
    /// Available keybindings: Ctrl+K or / (focus search), q (quit).
    #[default]
    Normal,

    /// The search input is focused.
    Search(SearchFocus),
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }
}
