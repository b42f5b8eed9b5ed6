//! Component exploration integration tests.

use petgraph::unionfind::UnionFind;

use wordchain_core::{Dictionary, WordchainConfig};
use wordchain_search::explore_component;

fn config() -> WordchainConfig {
    WordchainConfig::default()
}

/// Independent component-size oracle: union-find over the materialized edge
/// set of the same word list.
fn component_size_oracle(words: &[&str], start: &str) -> usize {
    let adjacent = |a: &str, b: &str| {
        a.len() == b.len() && a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() == 1
    };

    let mut uf = UnionFind::<usize>::new(words.len());
    for (i, a) in words.iter().enumerate() {
        for (j, b) in words.iter().enumerate().skip(i + 1) {
            if adjacent(a, b) {
                uf.union(i, j);
            }
        }
    }

    let start_idx = words.iter().position(|&w| w == start).unwrap();
    let root = uf.find(start_idx);
    (0..words.len()).filter(|&i| uf.find(i) == root).count()
}

#[test]
fn four_word_component_with_longest_path_of_three() {
    let dict = Dictionary::from_words(["CAT", "COT", "COG", "CAG"]);
    let report = explore_component(&dict, "CAT", &config()).unwrap();
    assert_eq!(report.component_size, 4);
    assert_eq!(report.longest_path.len(), 3);
    assert_eq!(report.longest_path.words()[0], "CAT");
}

#[test]
fn component_size_matches_union_find_oracle() {
    let words = [
        "CAT", "COT", "COG", "DOG", "DOT", "BAT", "BOT", "LOG", "FOG", "ZZZ", "AAAA",
    ];
    let dict = Dictionary::from_words(words);
    for start in ["CAT", "DOG", "ZZZ", "AAAA"] {
        let report = explore_component(&dict, start, &config()).unwrap();
        assert_eq!(
            report.component_size,
            component_size_oracle(&words, start),
            "component of {start}"
        );
    }
}

#[test]
fn longest_path_is_an_eccentricity_witness() {
    // Chain CAT - COT - COG - DOG: from CAT the farthest word is DOG at
    // depth 4, and the witness path is the unique shortest route there.
    let dict = Dictionary::from_words(["CAT", "COT", "COG", "DOG"]);
    let report = explore_component(&dict, "CAT", &config()).unwrap();
    assert_eq!(report.component_size, 4);
    assert_eq!(report.longest_path.words(), ["CAT", "COT", "COG", "DOG"]);
}

#[test]
fn longest_path_starts_at_the_start_word() {
    let dict = Dictionary::from_words(["DOG", "COG", "COT", "CAT", "BAT", "BOT"]);
    let report = explore_component(&dict, "DOG", &config()).unwrap();
    assert_eq!(report.start, "DOG");
    assert_eq!(report.longest_path.words()[0], "DOG");
}

#[test]
fn repeated_exploration_is_idempotent() {
    let dict = Dictionary::from_words(["CAT", "COT", "COG", "CAG", "BAT"]);
    let first = explore_component(&dict, "CAT", &config()).unwrap();
    let second = explore_component(&dict, "CAT", &config()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn depth_cap_bounds_the_component_view() {
    let dict = Dictionary::from_words(["CAT", "COT", "COG", "DOG"]);
    let capped = WordchainConfig {
        max_depth: Some(2),
        ..WordchainConfig::default()
    };
    let report = explore_component(&dict, "CAT", &capped).unwrap();
    assert_eq!(report.component_size, 2);
    assert_eq!(report.longest_path.words(), ["CAT", "COT"]);
}
