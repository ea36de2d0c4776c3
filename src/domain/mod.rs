//! Domain layer for livesearch.
//!
//! This module contains the core value types, independent of the terminal, the
//! HTTP client or the async runtime.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`query`]: Trimmed search query
//! - [`user`]: User records returned by the search endpoint
//! - [`form`]: User form validation feedback

pub mod error;
pub mod form;
pub mod query;
pub mod user;

pub use error::{LiveSearchError, Result};
pub use form::{Field, FieldError, FormErrors, FormState, SubmitOutcome, UserForm, ValidUser};
pub use query::SearchQuery;
pub use user::User;
