//! Debounced search triggering.
//!
//! # Modules
//!
//! - [`debouncer`]: Generic single-timer debouncer on the tokio runtime
//! - [`search`]: [`SearchTrigger`], turning input changes into search requests
//! - [`input`]: [`SearchInput`], a text field owning its trigger
//!
//! Timers never touch state directly. A fired timer sends a [`FiredQuery`] to the
//! owning event loop, which hands it back to [`SearchInput::fire`]. All state
//! changes therefore happen on the loop that owns the input.

pub mod debouncer;
pub mod input;
pub mod search;

pub use debouncer::{Debouncer, Fired};
pub use input::SearchInput;
pub use search::{FiredQuery, SearchRequest, SearchTrigger, TriggerState};
