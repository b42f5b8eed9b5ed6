//! Traversal configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for ladder and explore queries.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WordchainConfig {
    /// Maximum path depth (in words) a traversal may dequeue and expand.
    /// Default: unbounded. `max_depth = 1` never expands past the start word.
    pub max_depth: Option<u32>,
    /// Uppercase query words before searching. Default: true. Dictionary
    /// entries are never normalized regardless of this setting.
    pub normalize_queries: Option<bool>,
}

impl WordchainConfig {
    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<WordchainConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the effective query-normalization flag, defaulting to true.
    pub fn effective_normalize_queries(&self) -> bool {
        self.normalize_queries.unwrap_or(true)
    }
}
