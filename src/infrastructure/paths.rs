//! Path utilities for configuration and data locations.
//!
//! Locations follow the XDG base directory convention, falling back to the
//! usual dot-directories under `$HOME`. Tilde-prefixed paths from config files
//! and flags are expanded against `$HOME`.

use std::env;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "livesearch";
const CONFIG_FILE: &str = "config.toml";

/// Returns the data directory used for trace files.
///
/// `$XDG_DATA_HOME/livesearch`, else `~/.local/share/livesearch`, else a
/// relative `.livesearch` directory when no home is known.
#[must_use]
pub fn data_dir() -> PathBuf {
    resolve_dir(
        env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        home_dir(),
        &[".local", "share"],
    )
}

/// Returns the configuration directory.
///
/// `$XDG_CONFIG_HOME/livesearch`, else `~/.config/livesearch`.
#[must_use]
pub fn config_dir() -> PathBuf {
    resolve_dir(
        env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        home_dir(),
        &[".config"],
    )
}

/// Returns the path of the config file that is read when it exists.
#[must_use]
pub fn default_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Expands a leading `~` to the home directory.
///
/// # Examples
///
/// ```
/// use livesearch::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// assert_eq!(expand_tilde("relative/path"), PathBuf::from("relative/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, home_dir().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

fn resolve_dir(xdg: Option<PathBuf>, home: Option<PathBuf>, fallback: &[&str]) -> PathBuf {
    // XDG paths must be absolute to be honored.
    if let Some(base) = xdg.filter(|p| p.is_absolute()) {
        return base.join(APP_DIR);
    }

    match home {
        Some(home) => fallback
            .iter()
            .fold(home, |acc, part| acc.join(part))
            .join(APP_DIR),
        None => PathBuf::from(format!(".{APP_DIR}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_directory_wins_when_absolute() {
        let dir = resolve_dir(
            Some(PathBuf::from("/xdg/data")),
            Some(PathBuf::from("/home/u")),
            &[".local", "share"],
        );
        assert_eq!(dir, PathBuf::from("/xdg/data/livesearch"));
    }

    #[test]
    fn relative_xdg_falls_back_to_home() {
        let dir = resolve_dir(
            Some(PathBuf::from("xdg")),
            Some(PathBuf::from("/home/u")),
            &[".config"],
        );
        assert_eq!(dir, PathBuf::from("/home/u/.config/livesearch"));
    }

    #[test]
    fn no_home_uses_a_local_directory() {
        assert_eq!(resolve_dir(None, None, &[".config"]), PathBuf::from(".livesearch"));
    }

    #[test]
    fn tilde_expands_against_home() {
        let home = Path::new("/home/u");
        assert_eq!(expand_tilde_with("~", Some(home)), PathBuf::from("/home/u"));
        assert_eq!(
            expand_tilde_with("~/themes/t.toml", Some(home)),
            PathBuf::from("/home/u/themes/t.toml")
        );
        assert_eq!(expand_tilde_with("~other/x", Some(home)), PathBuf::from("~other/x"));
        assert_eq!(expand_tilde_with("~/x", None), PathBuf::from("~/x"));
    }

    #[test]
    fn config_file_lives_in_config_dir() {
        assert_eq!(default_config_path().file_name().unwrap(), "config.toml");
    }
}
