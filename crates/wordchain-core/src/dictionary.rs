//! The dictionary word set.
//!
//! A `Dictionary` is an immutable set of words; membership testing is the
//! only operation traversals need. Loading inserts one entry per line
//! exactly as read — no trimming and no case folding. Query-word
//! normalization happens at the query boundary, never here, so a dictionary
//! file with lowercase entries will not match uppercased query words. That
//! asymmetry is part of the external contract (see DESIGN.md).

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::DictionaryError;
use crate::types::FxHashSet;

/// An immutable set of dictionary words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Load a dictionary from a newline-delimited word file.
    ///
    /// Each line becomes one entry exactly as written; a blank line yields
    /// an empty-string entry.
    pub fn load(path: &Path) -> Result<Dictionary, DictionaryError> {
        let contents = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let words: FxHashSet<String> = contents.lines().map(str::to_owned).collect();
        debug!(path = %path.display(), entries = words.len(), "dictionary loaded");

        Ok(Dictionary { words })
    }

    /// Build a dictionary from in-memory words.
    pub fn from_words<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dictionary {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
