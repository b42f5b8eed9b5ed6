//! Single-substitution neighbor generation.
//!
//! For a word W, the neighbors are every dictionary member obtainable by
//! replacing exactly one position of W with a different letter from
//! `'A'..='Z'`. Enumeration order is deterministic: position ascending,
//! letter ascending within a position. Downstream BFS relies on this order
//! for reproducible tie-breaking between equal-length ladders.

use wordchain_core::types::SmallVec8;
use wordchain_core::Dictionary;

/// Compute the ordered neighbors of `word` in the word-ladder graph.
///
/// Pure function of its inputs. Never yields `word` itself, and never yields
/// a duplicate: two candidates are equal only if they substitute the same
/// letter at the same position, and each (position, letter) pair is
/// enumerated once.
///
/// Words outside the A–Z alphabet have no neighbors by construction, and
/// substituting into a non-ASCII byte sequence could fabricate invalid
/// UTF-8, so non-ASCII input yields an empty sequence.
pub fn neighbors(word: &str, dict: &Dictionary) -> SmallVec8<String> {
    let mut adjacent = SmallVec8::new();

    if !word.is_ascii() {
        return adjacent;
    }

    // Mutate-and-restore: one reusable buffer, one byte swapped per probe.
    let mut buf = word.as_bytes().to_vec();

    for i in 0..buf.len() {
        let original = buf[i];
        for letter in b'A'..=b'Z' {
            if letter == original {
                continue;
            }
            buf[i] = letter;
            // ASCII in, ASCII out; the conversion cannot fail.
            if let Ok(candidate) = std::str::from_utf8(&buf) {
                if dict.contains(candidate) {
                    adjacent.push(candidate.to_owned());
                }
            }
        }
        buf[i] = original;
    }

    adjacent
}
