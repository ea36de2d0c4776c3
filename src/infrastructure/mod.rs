//! Infrastructure layer for filesystem, environment, and URL concerns.
//!
//! - [`paths`]: Config and data directory resolution, tilde expansion
//! - [`navigation_url`]: Resolves navigation targets against the server base URL

pub mod paths;

pub use paths::{config_dir, data_dir, default_config_path, expand_tilde};

use crate::app::NavigationTarget;
use crate::domain::{LiveSearchError, Result};
use reqwest::Url;

/// Resolves `target` to an absolute URL on the server at `base`.
///
/// Paths replace whatever path `base` has, matching how the search endpoint is
/// resolved. Path segments and the query are percent-encoded.
///
/// # Errors
///
/// Returns [`LiveSearchError::Config`] if `base` cannot carry a path (for
/// example a `mailto:` URL).
///
/// # Examples
///
/// ```
/// use livesearch::app::NavigationTarget;
/// use livesearch::infrastructure::navigation_url;
/// use reqwest::Url;
///
/// let base = Url::parse("http://localhost:8080").unwrap();
/// let target = NavigationTarget::EditUser { id: "65f0c1".to_string() };
/// assert_eq!(navigation_url(&base, &target).unwrap().as_str(), "http://localhost:8080/edit/65f0c1");
/// ```
pub fn navigation_url(base: &Url, target: &NavigationTarget) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| LiveSearchError::Config(format!("base_url {base} cannot be a base")))?;
        segments.clear();
        match target {
            NavigationTarget::EditUser { id } => {
                segments.extend(["edit", id.as_str()]);
            }
            NavigationTarget::SearchPage { .. } => {
                segments.push("search");
            }
        }
    }

    if let NavigationTarget::SearchPage { query } = target {
        url.query_pairs_mut().append_pair("q", query.as_str());
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchQuery;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn edit_user_replaces_the_base_path() {
        let target = NavigationTarget::EditUser {
            id: "a/b".to_string(),
        };
        let url = navigation_url(&base("https://users.example.com/admin/?x=1#top"), &target).unwrap();
        assert_eq!(url.as_str(), "https://users.example.com/edit/a%2Fb");
    }

    #[test]
    fn search_page_encodes_the_query() {
        let target = NavigationTarget::SearchPage {
            query: SearchQuery::from_raw("  ann lee&co "),
        };
        let url = navigation_url(&base("http://localhost:8080"), &target).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/search?q=ann+lee%26co");
    }

    #[test]
    fn cannot_be_a_base_urls_are_rejected() {
        let target = NavigationTarget::EditUser {
            id: "1".to_string(),
        };
        assert!(matches!(
            navigation_url(&base("mailto:someone@example.com"), &target),
            Err(LiveSearchError::Config(_))
        ));
    }
}
