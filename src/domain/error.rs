//! Error types for livesearch.
//!
//! This module defines the centralized error type [`LiveSearchError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! At runtime only one kind of failure is expected: a search request that did not
//! produce a result set ([`LiveSearchError::SearchFailed`]). It is caught at the
//! request boundary, logged and swallowed. The remaining variants cover startup
//! concerns (configuration, themes, terminal I/O) and the worker channel.

use thiserror::Error;

/// The main error type for livesearch operations.
///
/// # Examples
///
/// ```
/// use livesearch::LiveSearchError;
///
/// fn validate_config() -> Result<(), LiveSearchError> {
///     Err(LiveSearchError::Config("quiet_period_ms must be at least 1".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum LiveSearchError {
    /// A search request failed.
    ///
    /// Covers network failures, non-success HTTP status codes and response bodies
    /// that are not a JSON array of users. Never retried.
    #[error("search request for {query:?} failed: {source}")]
    SearchFailed {
        /// Trimmed query the request was issued for.
        query: String,
        /// Underlying transport or decoding error.
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem, terminal or other I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background search worker failed.
    ///
    /// Occurs when the worker task has stopped and its channel is closed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for livesearch operations.
pub type Result<T> = std::result::Result<T, LiveSearchError>;
