//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec optimized for neighbor lists (usually <8 per word).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
