//! Data structures for wordchain.
//! FxHashMap/FxHashSet and SmallVec re-exports.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet, SmallVec8};
