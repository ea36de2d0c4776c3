//! Livesearch: debounced live user search for the terminal.
//!
//! Livesearch puts a search box on screen and, as the user types, queries a
//! user directory over HTTP and shows matching users in a dropdown:
//! - Requests are debounced: a burst of keystrokes produces one request, sent
//!   after a 300 ms quiet period, carrying the final value
//! - Queries shorter than two characters are never sent
//! - Up to five suggestions are shown, each opening the user's edit page
//! - `Ctrl+K` / `Cmd+K` focuses the search box from anywhere

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Runtime (runtime.rs, main.rs)             │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and key mapping                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Trigger Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (trigger/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Debounce    │   │ - Async fetch │
//! │ - Theming     │   │ - Input state │   │ - Search API  │
//! │ - Layout      │   │ - Sequencing  │   │   (search/)   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths and navigation URLs (infrastructure/)      │
//! │  - Queries, users, forms and errors (domain/)       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (queries, users, form validation, errors)
//! - [`infrastructure`]: Config/data paths and navigation URLs
//! - [`trigger`]: Debounced search trigger owned by the search input
//! - [`search`]: Search backend trait and HTTP client
//! - [`worker`]: Background worker running search requests
//! - [`ui`]: Terminal rendering with theme support
//! - [`runtime`]: Terminal session and event loop
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! Read from `$XDG_CONFIG_HOME/livesearch/config.toml` when it exists; every key
//! is optional:
//!
//! ```toml
//! base_url = "http://localhost:8080"
//! quiet_period_ms = 300
//! min_query_len = 2
//! max_suggestions = 5
//! stale_responses = "discard"   # or "arrival-order"
//! theme = "catppuccin-mocha"
//! trace_level = "info"
//! ```
//!
//! # Search Flow
//!
//! 1. **Keystroke**: the input value changes and re-arms the debounce timer
//! 2. **Quiet period**: the timer fires on the event loop's channel
//! 3. **Issue**: the trigger checks the query length and assigns a sequence
//!    number; the request goes to the worker
//! 4. **Fetch**: the worker calls `GET /api/search?q=` on its own task
//! 5. **Apply**: the reply replaces the dropdown unless a newer request exists
//!
//! # Example
//!
//! ```
//! use livesearch::{handle_event, initialize, Config, Event};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> livesearch::Result<()> {
//! let (fired_tx, _fired_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut state = initialize(&Config::default(), fired_tx);
//!
//! handle_event(&mut state, &Event::FocusSearch)?;
//! let (_render, actions) = handle_event(&mut state, &Event::Char('a'))?;
//! assert!(actions.is_empty()); // nothing is sent until the quiet period elapses
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod runtime;
pub mod search;
pub mod trigger;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode, NavigationTarget, SearchFocus};
pub use domain::{LiveSearchError, Result, SearchQuery, User};
pub use search::{HttpSearchClient, SearchBackend};
pub use trigger::{FiredQuery, SearchInput, SearchRequest, SearchTrigger};
pub use ui::Theme;
pub use worker::{SearchWorker, WorkerHandle, WorkerMessage, WorkerResponse};

use infrastructure::expand_tilde;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// What to do with a search reply that arrives after a newer request was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
    /// Apply only the reply to the latest request of the input.
    #[default]
    Discard,
    /// Apply every reply in arrival order; a slow older reply can overwrite a
    /// newer one.
    ArrivalOrder,
}

/// Application configuration.
///
/// Loaded from a TOML file; every key is optional and command-line flags
/// override file values.
///
/// # Example
///
/// ```
/// use livesearch::{Config, StalePolicy};
///
/// let config = Config::from_toml_str(r#"
///     base_url = "https://users.example.com"
///     stale_responses = "arrival-order"
/// "#).unwrap();
///
/// assert_eq!(config.quiet_period_ms, 300);
/// assert_eq!(config.stale_responses, StalePolicy::ArrivalOrder);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Server the search endpoint and navigation targets live on.
    pub base_url: String,

    /// Debounce quiet period in milliseconds. Default: 300
    pub quiet_period_ms: u64,

    /// Minimum trimmed query length, in characters, before a request is sent.
    /// Default: 2
    pub min_query_len: usize,

    /// Maximum number of users in the dropdown. Default: 5
    pub max_suggestions: usize,

    pub stale_responses: StalePolicy,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory for trace files. Default: `~/.local/share/livesearch`
    pub data_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            quiet_period_ms: 300,
            min_query_len: 2,
            max_suggestions: 5,
            stale_responses: StalePolicy::default(),
            theme: None,
            theme_file: None,
            trace_level: None,
            data_dir: None,
        }
    }
}

impl Config {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`LiveSearchError::Config`] for invalid TOML, unknown keys, or
    /// values that fail [`Config::validate`].
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| LiveSearchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`LiveSearchError::Config`] if the file cannot be read or is
    /// invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LiveSearchError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
            .map_err(|e| LiveSearchError::Config(format!("{}: {e}", path.display())))
    }

    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is used
    /// if a file is there, and the built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`LiveSearchError::Config`] if the chosen file is unreadable or
    /// invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = infrastructure::default_config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Checks value ranges and the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`LiveSearchError::Config`] naming the first invalid key.
    pub fn validate(&self) -> Result<()> {
        self.base_url()?;

        if self.quiet_period_ms == 0 {
            return Err(LiveSearchError::Config(
                "quiet_period_ms must be at least 1".to_string(),
            ));
        }
        for (key, value) in [
            ("min_query_len", self.min_query_len),
            ("max_suggestions", self.max_suggestions),
        ] {
            if value == 0 {
                return Err(LiveSearchError::Config(format!("{key} must be at least 1")));
            }
        }
        Ok(())
    }

    /// Parsed base URL.
    ///
    /// # Errors
    ///
    /// Returns [`LiveSearchError::Config`] unless `base_url` is an absolute
    /// `http` or `https` URL.
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| LiveSearchError::Config(format!("base_url {:?}: {e}", self.base_url)))?;

        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(url),
            _ => Err(LiveSearchError::Config(format!(
                "base_url {:?} must be an http or https URL",
                self.base_url
            ))),
        }
    }

    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }

    /// Data directory with `~` expanded.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(infrastructure::data_dir, expand_tilde)
    }

    /// Loads the configured theme: `theme_file`, else `theme`, else the default.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        let file = self.theme_file.as_deref().map(expand_tilde);
        Theme::resolve(self.theme.as_deref(), file.as_deref())
    }
}

/// Creates the application state for `config`.
///
/// Debounce fires of the search input are delivered on `fired`.
pub fn initialize(config: &Config, fired: UnboundedSender<FiredQuery>) -> AppState {
    tracing::debug!(
        base_url = %config.base_url,
        quiet_period_ms = config.quiet_period_ms,
        min_query_len = config.min_query_len,
        "initializing livesearch"
    );

    let search = SearchInput::new(config.quiet_period(), config.min_query_len, fired);
    AppState::new(
        search,
        config.load_theme(),
        config.max_suggestions,
        config.stale_responses,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            Config::from_toml_str("scan_depth = 4"),
            Err(LiveSearchError::Config(_))
        ));
    }

    #[test]
    fn zero_values_are_rejected() {
        for doc in ["quiet_period_ms = 0", "min_query_len = 0", "max_suggestions = 0"] {
            let err = Config::from_toml_str(doc).unwrap_err();
            assert!(err.to_string().contains("must be at least 1"), "{doc}: {err}");
        }
    }

    #[test]
    fn base_url_must_be_http() {
        for bad in ["localhost:8080", "ftp://example.com", "not a url", "file:///tmp"] {
            let config = Config {
                base_url: bad.to_string(),
                ..Config::default()
            };
            assert!(config.validate().is_err(), "{bad}");
        }
    }

    #[test]
    fn config_file_is_read_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min_query_len = 3\ntheme = \"catppuccin-latte\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.min_query_len, 3);
        assert_eq!(config.load_theme().name, "catppuccin-latte");
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        assert!(Config::load(Some(Path::new("/no/such/livesearch.toml"))).is_err());
    }

    #[test]
    fn explicit_data_dir_is_used() {
        let config = Config {
            data_dir: Some("/var/tmp/ls".to_string()),
            ..Config::default()
        };
        assert_eq!(config.data_dir(), PathBuf::from("/var/tmp/ls"));
    }

    #[test]
    fn initialize_applies_limits() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let config = Config {
            max_suggestions: 3,
            stale_responses: StalePolicy::ArrivalOrder,
            ..Config::default()
        };
        let state = initialize(&config, tx);

        assert_eq!(state.max_suggestions, 3);
        assert_eq!(state.stale_policy, StalePolicy::ArrivalOrder);
        assert_eq!(state.search.trigger().min_query_len(), 2);
    }
}
