//! Search query value type.
//!
//! A [`SearchQuery`] is the trimmed value of the search input at the moment of an
//! input event. It is recomputed on every keystroke and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed text of the search input.
///
/// Construct it with [`SearchQuery::from_raw`], which strips leading and trailing
/// whitespace. Length checks count Unicode scalar values, not bytes.
///
/// # Examples
///
/// ```
/// use livesearch::domain::SearchQuery;
///
/// let query = SearchQuery::from_raw("  ab ");
/// assert_eq!(query.as_str(), "ab");
/// assert!(query.is_searchable(2));
/// assert!(!SearchQuery::from_raw(" a ").is_searchable(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Builds a query from the raw input value by trimming surrounding whitespace.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// Returns the trimmed query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the trimmed query.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when the query is long enough to be sent to the server.
    #[must_use]
    pub fn is_searchable(&self, min_len: usize) -> bool {
        self.char_len() >= min_len
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_both_ends_but_keeps_inner_spaces() {
        let query = SearchQuery::from_raw("\t jane doe \n");
        assert_eq!(query.as_str(), "jane doe");
        assert_eq!(query.char_len(), 8);
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        let query = SearchQuery::from_raw("    ");
        assert!(query.is_empty());
        assert!(!query.is_searchable(1));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let query = SearchQuery::from_raw("é");
        assert_eq!(query.char_len(), 1);
        assert!(!query.is_searchable(2));
        assert!(SearchQuery::from_raw("éa").is_searchable(2));
    }
}
