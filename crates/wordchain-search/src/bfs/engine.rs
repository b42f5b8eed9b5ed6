//! The shared BFS traversal skeleton.
//!
//! Both queries (shortest ladder, component exploration) are the same
//! breadth-first walk with a different observer plugged into the dequeue
//! point. The frontier is strictly FIFO: every path of length k is dequeued
//! before any path of length k+1, which is what makes the first path to
//! reach a word a shortest one. A word is marked visited the instant it is
//! discovered, so no word ever enters two paths — across the whole
//! traversal, and therefore within any single path.

use std::collections::VecDeque;

use tracing::debug;

use wordchain_core::types::FxHashSet;
use wordchain_core::Dictionary;

use crate::adjacency::neighbors;

use super::arena::{NodeId, PathArena};

/// Observer verdict after seeing a dequeued path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Read access to the path under the traversal's cursor.
///
/// Borrowed per dequeue; `words()` reconstructs the full sequence and is the
/// only non-O(1) accessor, so observers should call it only when a path is
/// actually a result.
pub struct PathCursor<'a> {
    arena: &'a PathArena,
    node: NodeId,
}

impl PathCursor<'_> {
    /// Final word of the path.
    pub fn word(&self) -> &str {
        self.arena.word(self.node)
    }

    /// Path length in words.
    pub fn depth(&self) -> u32 {
        self.arena.depth(self.node)
    }

    /// Materialize the full root-to-cursor word sequence.
    pub fn words(&self) -> Vec<String> {
        self.arena.path_words(self.node)
    }
}

/// Specialization seam: called once per dequeued path, before expansion.
pub trait FrontierObserver {
    fn on_dequeue(&mut self, cursor: &PathCursor<'_>) -> Flow;
}

/// What a completed (or stopped) traversal did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalSummary {
    /// Words placed into some path, start word included.
    pub visited: usize,
    /// Paths handed to the observer.
    pub dequeued: usize,
}

/// Run a breadth-first traversal of the word-ladder component of `start`.
///
/// The observer sees each dequeued path in FIFO order and may stop the
/// traversal. `max_depth`, when set, stops paths of that length from being
/// expanded further (they are still dequeued and observed).
///
/// The caller is responsible for `start`'s dictionary membership; the
/// traversal itself cannot fail.
pub fn traverse<O: FrontierObserver>(
    dict: &Dictionary,
    start: &str,
    max_depth: Option<u32>,
    observer: &mut O,
) -> TraversalSummary {
    let mut arena = PathArena::with_root(start);
    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut dequeued = 0usize;

    frontier.push_back(arena.root());
    visited.insert(start.to_owned());

    while let Some(node) = frontier.pop_front() {
        dequeued += 1;

        let cursor = PathCursor {
            arena: &arena,
            node,
        };
        if observer.on_dequeue(&cursor) == Flow::Stop {
            break;
        }

        if let Some(max) = max_depth {
            if arena.depth(node) >= max {
                continue;
            }
        }

        for neighbor in neighbors(arena.word(node), dict) {
            if visited.contains(&neighbor) {
                continue;
            }
            // Marked the instant it is discovered: the depth at which a word
            // first enters the arena is its BFS distance from start, +1.
            visited.insert(neighbor.clone());
            let child = arena.push_child(node, neighbor);
            frontier.push_back(child);
        }
    }

    debug!(
        start,
        visited = visited.len(),
        dequeued,
        "traversal finished"
    );

    TraversalSummary {
        visited: visited.len(),
        dequeued,
    }
}
