//! Exhaustive component exploration.

use tracing::debug;

use wordchain_core::{Dictionary, QueryError, WordchainConfig};

use crate::bfs::{traverse, Flow, FrontierObserver, PathCursor};
use crate::ladder::Ladder;

/// Result of exploring the connected component of a start word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentReport {
    /// The start word.
    pub start: String,
    /// Number of words in the component, start included.
    pub component_size: usize,
    /// A longest path in the BFS layering from the start: a shortest path to
    /// one of the farthest reachable words (an eccentricity witness), NOT
    /// the longest simple path in the component.
    pub longest_path: Ladder,
}

struct LongestObserver {
    longest: Option<Ladder>,
    longest_depth: u32,
}

impl FrontierObserver for LongestObserver {
    fn on_dequeue(&mut self, cursor: &PathCursor<'_>) -> Flow {
        // Strictly greater: the first path of a given depth wins ties, and
        // the path only gets materialized when the depth record moves.
        if cursor.depth() > self.longest_depth {
            self.longest_depth = cursor.depth();
            self.longest = Some(Ladder::new(cursor.words()));
        }
        Flow::Continue
    }
}

/// Explore the connected component containing `begin` to exhaustion.
///
/// Precondition: `begin` is in the dictionary. Never stops early; the
/// traversal is bounded by the finite dictionary.
pub fn explore_component(
    dict: &Dictionary,
    begin: &str,
    config: &WordchainConfig,
) -> Result<ComponentReport, QueryError> {
    if !dict.contains(begin) {
        return Err(QueryError::WordNotInDictionary {
            word: begin.to_owned(),
        });
    }

    debug!(begin, "component exploration");

    let mut observer = LongestObserver {
        longest: None,
        longest_depth: 0,
    };
    let summary = traverse(dict, begin, config.max_depth, &mut observer);

    // The root is always dequeued, so the observer saw at least one path.
    let longest_path = observer
        .longest
        .unwrap_or_else(|| Ladder::new(vec![begin.to_owned()]));

    Ok(ComponentReport {
        start: begin.to_owned(),
        component_size: summary.visited,
        longest_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_component_reports_itself() {
        let dict = Dictionary::from_words(["CAT", "DOG"]);
        let config = WordchainConfig::default();
        let report = explore_component(&dict, "CAT", &config).unwrap();
        assert_eq!(report.component_size, 1);
        assert_eq!(report.longest_path.words(), ["CAT"]);
    }

    #[test]
    fn missing_start_word_is_a_precondition_error() {
        let dict = Dictionary::from_words(["DOG"]);
        let config = WordchainConfig::default();
        let err = explore_component(&dict, "CAT", &config).unwrap_err();
        assert_eq!(
            err,
            QueryError::WordNotInDictionary {
                word: "CAT".to_owned()
            }
        );
    }

    #[test]
    fn ties_at_the_longest_depth_go_to_the_first_path_seen() {
        // CAT -> BAT and CAT -> COT both have depth 2; BAT is generated
        // first (position 0 before position 1).
        let dict = Dictionary::from_words(["CAT", "BAT", "COT"]);
        let config = WordchainConfig::default();
        let report = explore_component(&dict, "CAT", &config).unwrap();
        assert_eq!(report.component_size, 3);
        assert_eq!(report.longest_path.words(), ["CAT", "BAT"]);
    }
}
