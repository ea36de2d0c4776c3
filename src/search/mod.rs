//! Outbound user search.
//!
//! - [`backend`]: The [`SearchBackend`] trait the worker calls
//! - [`http`]: [`HttpSearchClient`], the reqwest implementation

pub mod backend;
pub mod http;

pub use backend::SearchBackend;
pub use http::{HttpSearchClient, SEARCH_PATH};
