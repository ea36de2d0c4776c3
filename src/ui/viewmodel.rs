//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain no
//! business logic, only display-ready data with geometry already resolved.

use super::layout::Rect;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title).
    pub header: HeaderInfo,

    /// The search input box.
    pub search_bar: SearchBarInfo,

    /// Suggestion dropdown, present only while open with at least one user.
    pub dropdown: Option<DropdownInfo>,

    /// One-line status above the footer.
    pub status: StatusInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Raw input value, untrimmed.
    pub value: String,

    /// Whether keystrokes currently go to the input.
    pub focused: bool,

    /// Whether the whole value is selected.
    pub selected: bool,

    /// Cells occupied by the box, borders included.
    pub rect: Rect,
}

/// Suggestion dropdown display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownInfo {
    /// Cells occupied by the dropdown, bottom border included.
    pub rect: Rect,

    /// Visible suggestions, top to bottom.
    pub items: Vec<SuggestionItem>,
}

/// One user in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    /// User name, shown bold on the first row.
    pub name: String,

    /// Email, shown dim on the second row.
    pub email: String,

    /// Path the item navigates to when activated.
    pub href: String,

    /// Whether the keyboard cursor is on this item.
    pub is_selected: bool,

    /// Character ranges of `name` matching the query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub name_highlights: Vec<(usize, usize)>,

    /// Character ranges of `email` matching the query.
    pub email_highlights: Vec<(usize, usize)>,
}

/// Status line display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub message: String,
}
