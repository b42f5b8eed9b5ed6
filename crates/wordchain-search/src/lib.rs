//! Word-ladder graph engine.
//!
//! The graph is implicit: nodes are dictionary words, and an edge connects
//! two words that differ in exactly one letter position. [`adjacency`]
//! derives a word's neighbors without materializing the graph, [`bfs`] runs
//! a breadth-first traversal over it, and [`ladder`] / [`explore`] are the
//! two query surfaces built on that traversal.

pub mod adjacency;
pub mod bfs;
pub mod explore;
pub mod ladder;

pub use explore::{explore_component, ComponentReport};
pub use ladder::{find_ladder, Ladder};
