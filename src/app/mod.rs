//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the terminal runtime and the trigger, worker and UI
//! layers. It implements the event-driven flow that powers the search screen.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Terminal Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                               ↑                                         ↓
//!                               └──── Debounce Fires / Worker Responses ──┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keymap`]: Crossterm event to application event mapping
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod state;

pub use actions::{Action, NavigationTarget};
pub use handler::{handle_event, Event};
pub use keymap::{map_key_event, map_terminal_event};
pub use modes::{InputMode, SearchFocus};
pub use state::{AppState, HitTarget, ResultSummary};
