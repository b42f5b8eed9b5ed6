//! Query precondition errors.
//!
//! Every query failure is detected before a traversal begins; the traversal
//! itself is a finite, pure in-memory computation and cannot fail. An
//! exhausted search with no result is `Ok(None)`, not an error.

/// Precondition failures for ladder and explore queries.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Word {word} is not in dictionary.")]
    WordNotInDictionary { word: String },

    #[error("Word lengths must equal.")]
    LengthMismatch { begin_len: usize, end_len: usize },
}
