//! Breadth-first traversal over the implicit word-ladder graph.

pub mod arena;
pub mod engine;

pub use arena::{NodeId, PathArena};
pub use engine::{traverse, Flow, FrontierObserver, PathCursor, TraversalSummary};
