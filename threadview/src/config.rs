//! User configuration for threadview.
//!
//! Read once at startup from `$XDG_CONFIG_HOME/threadview/config.toml`. Every
//! key is optional and every failure is soft: a missing or malformed file just
//! yields the defaults. Problems are reported through [`Config::load`]'s
//! returned warning rather than logged, because the log writer is configured
//! from this file and does not exist yet.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_THEME: &str = "catppuccin-mocha";
pub const DEFAULT_LOG_DIR: &str = ".threadview";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Built-in theme name, see [`crate::theme::Theme::from_name`].
    pub theme: String,
    /// Seed file with the initial comments; the built-in thread when absent.
    pub seed: Option<PathBuf>,
    /// Directory receiving `threadview.log`.
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_owned(),
            seed: None,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

/// Returns the path to the threadview config file.
///
/// Prefers `$XDG_CONFIG_HOME/threadview/config.toml`; falls back to
/// `~/.config/threadview/config.toml` when the env var is absent.
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join("threadview").join("config.toml")
}

impl Config {
    /// Loads config from `path`.
    ///
    /// Returns the config plus a warning to log once logging is up. A missing
    /// file is not worth a warning.
    pub fn load(path: &Path) -> (Self, Option<String>) {
        let raw = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return (Self::default(), None),
            Err(e) => {
                return (
                    Self::default(),
                    Some(format!("cannot read config {}: {e}", path.display())),
                )
            }
        };
        Self::parse(&raw, path)
    }

    fn parse(raw: &str, origin: &Path) -> (Self, Option<String>) {
        match toml::from_str(raw) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(format!("config parse error in {}: {e}", origin.display())),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let (config, warning) = Config::parse("theme = \"dark\"", Path::new("c.toml"));
        assert!(warning.is_none());
        assert_eq!(config.theme, "dark");
        assert_eq!(config.seed, None);
        assert_eq!(config.log_dir, PathBuf::from(DEFAULT_LOG_DIR));
    }

    #[test]
    fn seed_and_log_dir_are_read() {
        let raw = "seed = \"thread.toml\"\nlog_dir = \"/tmp/tv\"";
        let (config, _) = Config::parse(raw, Path::new("c.toml"));
        assert_eq!(config.seed, Some(PathBuf::from("thread.toml")));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/tv"));
        assert_eq!(config.theme, DEFAULT_THEME);
    }

    #[test]
    fn bad_config_falls_back_with_warning() {
        let (config, warning) = Config::parse("theme = 3", Path::new("c.toml"));
        assert_eq!(config, Config::default());
        assert!(warning.unwrap().contains("c.toml"));
    }

    #[test]
    fn missing_file_is_silent() {
        let (config, warning) = Config::load(Path::new("/definitely/not/here/config.toml"));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
