//! Shortest-ladder query.

use std::fmt;

use tracing::debug;

use wordchain_core::{Dictionary, QueryError, WordchainConfig};

use crate::bfs::{traverse, Flow, FrontierObserver, PathCursor};

/// A word ladder: a non-empty sequence of dictionary words in which
/// consecutive words differ in exactly one letter position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<String>,
}

impl Ladder {
    pub(crate) fn new(words: Vec<String>) -> Ladder {
        Ladder { words }
    }

    /// Number of words on the ladder.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: a ladder holds at least its start word.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words, start first.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl fmt::Display for Ladder {
    /// Renders as `[ W1 -> W2 -> ... -> Wn ]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for (i, word) in self.words.iter().enumerate() {
            write!(f, "{word}")?;
            if i != self.words.len() - 1 {
                write!(f, " -> ")?;
            }
        }
        write!(f, " ]")
    }
}

struct TargetObserver<'a> {
    target: &'a str,
    found: Option<Ladder>,
}

impl FrontierObserver for TargetObserver<'_> {
    fn on_dequeue(&mut self, cursor: &PathCursor<'_>) -> Flow {
        if cursor.word() == self.target {
            self.found = Some(Ladder::new(cursor.words()));
            Flow::Stop
        } else {
            Flow::Continue
        }
    }
}

/// Find a shortest word ladder from `begin` to `end`.
///
/// FIFO dequeue order means the first path to terminate at `end` is a
/// minimum-length one; ties between equal-length ladders are broken by the
/// adjacency generator's (position, letter) enumeration order. `Ok(None)`
/// means the words share no component — a valid negative result.
///
/// Preconditions are validated here, in this order: `begin` membership,
/// `end` membership, equal lengths. A length mismatch is a distinct error,
/// never a silent "no path".
pub fn find_ladder(
    dict: &Dictionary,
    begin: &str,
    end: &str,
    config: &WordchainConfig,
) -> Result<Option<Ladder>, QueryError> {
    for word in [begin, end] {
        if !dict.contains(word) {
            return Err(QueryError::WordNotInDictionary {
                word: word.to_owned(),
            });
        }
    }
    if begin.len() != end.len() {
        return Err(QueryError::LengthMismatch {
            begin_len: begin.len(),
            end_len: end.len(),
        });
    }

    debug!(begin, end, "ladder search");

    let mut observer = TargetObserver {
        target: end,
        found: None,
    };
    traverse(dict, begin, config.max_depth, &mut observer);

    Ok(observer.found)
}
