//! Dictionary loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading a dictionary file.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Failed to read dictionary file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
