//! The search collaborator seam.

use crate::domain::{Result, SearchQuery, User};
use async_trait::async_trait;

/// Anything that can answer a user search.
///
/// The terminal front end uses [`HttpSearchClient`](super::HttpSearchClient);
/// tests plug in in-memory backends with controlled latency.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Returns the users matching `query`, in server order.
    ///
    /// # Errors
    ///
    /// Any failure is reported as an error and never retried by the caller.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<User>>;
}
