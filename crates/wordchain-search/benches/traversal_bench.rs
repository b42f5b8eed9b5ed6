//! Traversal benchmark over a dense synthetic three-letter dictionary.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wordchain_core::{Dictionary, WordchainConfig};
use wordchain_search::{explore_component, find_ladder};

/// Every three-letter word over a restricted alphabet; dense adjacency.
fn synthetic_dictionary() -> Dictionary {
    let alphabet = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
    let mut words = Vec::with_capacity(alphabet.len().pow(3));
    for a in alphabet {
        for b in alphabet {
            for c in alphabet {
                words.push(format!("{a}{b}{c}"));
            }
        }
    }
    Dictionary::from_words(words)
}

fn bench_explore(c: &mut Criterion) {
    let dict = synthetic_dictionary();
    let config = WordchainConfig::default();

    c.bench_function("explore_component/8x8x8", |b| {
        b.iter(|| explore_component(black_box(&dict), black_box("AAA"), &config))
    });
}

fn bench_ladder(c: &mut Criterion) {
    let dict = synthetic_dictionary();
    let config = WordchainConfig::default();

    c.bench_function("find_ladder/8x8x8", |b| {
        b.iter(|| find_ladder(black_box(&dict), black_box("AAA"), black_box("HHH"), &config))
    });
}

criterion_group!(benches, bench_explore, bench_ladder);
criterion_main!(benches);
