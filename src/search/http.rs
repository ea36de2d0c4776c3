//! HTTP search client.
//!
//! Issues `GET <base_url>/api/search?q=<query>` and decodes a JSON array of
//! users. No timeout is configured and requests are never cancelled once sent.

use super::backend::SearchBackend;
use crate::domain::{LiveSearchError, Result, SearchQuery, User};
use async_trait::async_trait;
use reqwest::Url;

/// Path of the search endpoint, relative to the base URL.
pub const SEARCH_PATH: &str = "/api/search";

/// [`SearchBackend`] talking to the user directory's HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSearchClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`LiveSearchError::Config`] if `base_url` cannot be a base for the
    /// search path, and [`LiveSearchError::Http`] if the TLS backend fails to
    /// initialize.
    pub fn new(base_url: &Url) -> Result<Self> {
        let endpoint = base_url
            .join(SEARCH_PATH)
            .map_err(|e| LiveSearchError::Config(format!("invalid base_url {base_url}: {e}")))?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("livesearch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Full request URL for `query`, with the query percent-encoded.
    #[must_use]
    pub fn search_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().clear().append_pair("q", query.as_str());
        url
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SearchBackend for HttpSearchClient {
    #[tracing::instrument(level = "debug", skip(self), fields(query = %query))]
    async fn search(&self, query: &SearchQuery) -> Result<Vec<User>> {
        let url = self.search_url(query);
        let failed = |source: reqwest::Error| LiveSearchError::SearchFailed {
            query: query.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(failed)?;

        tracing::debug!(status = %response.status(), "search response received");

        // `null` is accepted as an empty result set.
        let users: Option<Vec<User>> = response.json().await.map_err(failed)?;
        Ok(users.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpSearchClient {
        HttpSearchClient::new(&Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn search_url_encodes_the_query() {
        let client = client("http://localhost:8080");
        let url = client.search_url(&SearchQuery::from_raw(" a b&c=d "));

        assert_eq!(url.path(), "/api/search");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("q".to_string(), "a b&c=d".to_string())]);
        assert!(!url.as_str().contains("&c="));
    }

    #[test]
    fn endpoint_replaces_any_base_path() {
        let client = client("https://users.example.com/admin/");
        assert_eq!(client.endpoint().as_str(), "https://users.example.com/api/search");
    }
}
