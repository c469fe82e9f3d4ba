//! Waypoint configuration.
//!
//! Loaded from `~/.waypoint/config.toml`. Every key is optional; a missing
//! file means all defaults.
//!
//! ```toml
//! journal-dir = "/mnt/games/Elite Dangerous"
//! strict = true
//! log-level = "debug"
//! ```

use std::{fs, io, path::PathBuf};

use serde::Deserialize;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Waypoint configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Where the game writes its journals.
    /// Used when neither files nor `--dir` are given.
    pub journal_dir: Option<PathBuf>,

    /// Fail on undecodable journal lines instead of skipping them.
    pub strict: bool,

    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            journal_dir: None,
            strict: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from `~/.waypoint/config.toml`, or defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        Self::parse(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The config file path: `~/.waypoint/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".waypoint").join("config.toml"))
    }

    /// The journal directory: configured, else the game's default location.
    pub fn journal_dir(&self) -> Option<PathBuf> {
        self.journal_dir.clone().or_else(default_journal_dir)
    }
}

/// Where the game writes journals on Windows, relative to the home directory.
fn default_journal_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| {
        h.join("Saved Games")
            .join("Frontier Developments")
            .join("Elite Dangerous")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn reads_kebab_case_keys() {
        let config = Config::parse(
            r#"
            journal-dir = "/tmp/journals"
            strict = true
            "#,
        )
        .unwrap();
        assert_eq!(config.journal_dir, Some(PathBuf::from("/tmp/journals")));
        assert!(config.strict);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.journal_dir(), Some(PathBuf::from("/tmp/journals")));
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(Config::parse("strict = \"yes\"").is_err());
    }
}
