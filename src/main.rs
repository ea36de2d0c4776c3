//! Command-line entry point.
//!
//! Loads the configuration, applies command-line overrides, installs tracing,
//! and hands the terminal to [`livesearch::runtime::run`].
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+K` / `Cmd+K`: Focus the search box and select its contents
//! - `Ctrl+C`: Quit
//!
//! In normal mode:
//! - `/`: Focus the search box
//! - `q`: Quit
//!
//! While typing:
//! - `Enter`: Open the full search page
//! - `Down` / `Ctrl+n`: Move into the suggestions
//! - `Esc`: Close the suggestions, then leave the search box
//!
//! In the suggestions:
//! - `j`/`k`, `Up`/`Down`, `Ctrl+n`/`Ctrl+p`: Move the selection
//! - `Enter`: Open the selected user
//! - `/` or `Esc`: Back to typing

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use livesearch::{observability, runtime, Config};
use std::path::PathBuf;
use std::process::ExitCode;

/// Live user search with a debounced suggestion dropdown.
#[derive(Debug, Parser)]
#[command(name = "livesearch", version, about, long_about = None, rename_all = "kebab")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/livesearch/config.toml if present)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server hosting /api/search, e.g. http://localhost:8080
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Built-in theme: catppuccin-mocha or catppuccin-latte
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Custom TOML theme file
    #[arg(long, value_name = "FILE")]
    theme_file: Option<String>,

    /// Trace level: trace, debug, info, warn or error (RUST_LOG wins)
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,

    /// Debounce quiet period in milliseconds
    #[arg(long, value_name = "MS")]
    quiet_period_ms: Option<u64>,
}

impl Cli {
    /// Loads the config file and applies flag overrides on top.
    fn into_config(self) -> livesearch::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(theme) = self.theme {
            config.theme = Some(theme);
        }
        if let Some(theme_file) = self.theme_file {
            config.theme_file = Some(theme_file);
        }
        if let Some(level) = self.trace_level {
            config.trace_level = Some(level);
        }
        if let Some(ms) = self.quiet_period_ms {
            config.quiet_period_ms = ms;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("livesearch: {e}");
            return ExitCode::FAILURE;
        }
    };

    let trace_file = observability::init_tracing(&config);
    tracing::info!(trace_file = ?trace_file, base_url = %config.base_url, "livesearch starting");

    match runtime::run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "livesearch stopped");
            eprintln!("livesearch: {e}");
            ExitCode::FAILURE
        }
    }
}
