//! core::config
//!
//! Credential and preference loading.
//!
//! # File format
//!
//! ```toml
//! [service]
//! url = "https://habitica.com"
//! user = "00000000-0000-0000-0000-000000000000"
//! key = "00000000-0000-0000-0000-000000000000"
//! checklists = false
//! ```
//!
//! # Locations
//!
//! Searched in order:
//! 1. `--config <path>` CLI flag
//! 2. `$QUESTLINE_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/questline/config.toml`
//!
//! A missing or unreadable config file is fatal: without credentials no
//! command can run. The loaded values never change afterwards.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "QUESTLINE_CONFIG";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file '{path}': {source}\nsee `ql --help` for the expected format")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("config directory not found")]
    NoConfigDir,
}

/// Immutable authentication and preference context.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
}

/// The `[service]` table of the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service, without the API path segment.
    pub url: String,
    /// API user id, sent as the `x-api-user` header.
    pub user: String,
    /// API key, sent as the `x-api-key` header.
    pub key: String,
    /// Show checklist items when listing tasks.
    #[serde(default)]
    pub checklists: bool,
}

impl Config {
    /// Load configuration, preferring an explicit path over the
    /// environment override over the canonical location.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };
        Self::load_from(&path)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The config file location when no explicit path is given.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("questline").join("config.toml"))
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.service.url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_complete_config() {
        let file = write_config(
            r#"
            [service]
            url = "https://habitica.com/"
            user = "user-id"
            key = "api-key"
            checklists = true
            "#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.base_url(), "https://habitica.com");
        assert_eq!(config.service.user, "user-id");
        assert!(config.service.checklists);
    }

    #[test]
    fn checklists_defaults_off() {
        let file = write_config(
            r#"
            [service]
            url = "https://habitica.com"
            user = "u"
            key = "k"
            "#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert!(!config.service.checklists);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn missing_key_is_a_parse_error() {
        let file = write_config("[service]\nurl = \"https://habitica.com\"\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
