//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! runtime executes them in order; the handler itself never performs I/O.

use crate::domain::{SearchQuery, User};
use crate::worker::WorkerMessage;

/// Where the user asked to go.
///
/// Targets are relative paths; the runtime resolves them against the configured
/// base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// The edit page of one user, `/edit/<id>`.
    EditUser {
        /// Server-assigned user identifier.
        id: String,
    },

    /// The full search results page, `/search?q=<query>`.
    SearchPage {
        /// Trimmed query submitted with the search form.
        query: SearchQuery,
    },
}

impl NavigationTarget {
    #[must_use]
    pub fn edit_user(user: &User) -> Self {
        Self::EditUser {
            id: user.id.clone(),
        }
    }
}

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Ends the session and restores the terminal.
    Quit,

    /// Posts a message to the background search worker.
    PostToWorker(WorkerMessage),

    /// Leaves the page for another one.
    Navigate(NavigationTarget),
}
