//! core::cache
//!
//! Persisted quest metadata.
//!
//! Quest titles, kinds, and maximum values live in the service's static
//! content catalog, which is large and rarely worth refetching. The
//! cache stores the last-seen active quest's metadata in a small TOML
//! file and is overwritten whenever a different quest key is observed.
//! Entries are never deleted.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the cache file location.
pub const CACHE_ENV: &str = "QUESTLINE_CACHE";

/// Errors from cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to read cache file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse cache file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write cache file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode cache file '{path}': {message}")]
    EncodeError { path: PathBuf, message: String },

    #[error("config directory not found")]
    NoConfigDir,
}

/// Whether quest progress counts collected items or boss health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    Collect,
    Boss,
}

/// Static metadata for one quest, as extracted from the content catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestEntry {
    pub key: String,
    pub kind: QuestKind,
    pub max: f64,
    pub title: String,
}

/// On-disk cache contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestCache {
    pub quest: Option<QuestEntry>,
}

impl QuestCache {
    /// Load the cache. A missing file is an empty cache, not an error.
    pub fn load(path: &Path) -> Result<QuestCache, CacheError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(QuestCache::default())
            }
            Err(source) => {
                return Err(CacheError::ReadError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&raw).map_err(|e| CacheError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write the cache, creating parent directories as needed.
    pub fn store(&self, path: &Path) -> Result<(), CacheError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| CacheError::WriteError {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let raw = toml::to_string_pretty(self).map_err(|e| CacheError::EncodeError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, raw).map_err(|source| CacheError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The cached quest key, if any.
    pub fn key(&self) -> Option<&str> {
        self.quest.as_ref().map(|entry| entry.key.as_str())
    }
}

/// The cache file location when no override is set.
pub fn default_path() -> Result<PathBuf, CacheError> {
    if let Some(path) = env::var_os(CACHE_ENV) {
        return Ok(PathBuf::from(path));
    }
    let dir = dirs::config_dir().ok_or(CacheError::NoConfigDir)?;
    Ok(dir.join("questline").join("cache.toml"))
}
