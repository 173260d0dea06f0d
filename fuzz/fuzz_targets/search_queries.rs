// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary item lists and queries at the cascade to verify it never
//! panics, never reports an item twice, and always returns results ranked
//! best first. Emoji, combining marks, and characters whose lowercase form
//! changes byte length are where slicing bugs live.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tickerdex::{build_search_index, search_index, verify_index, FieldSpec, SearchConfig};

#[derive(Debug, Arbitrary)]
struct SearchInput {
    names: Vec<String>,
    aliases: Vec<Vec<String>>,
    query: String,
    name_weight: u8,
    fuzzy_aliases: bool,
}

type Item = (String, Vec<String>);

fuzz_target!(|input: SearchInput| {
    let items: Vec<Item> = input
        .names
        .into_iter()
        .take(64)
        .zip(input.aliases.into_iter().chain(std::iter::repeat(Vec::new())))
        .collect();

    // Weight 0 is deliberately allowed: the indexer must fall back to 1.0
    let config = SearchConfig::new()
        .field(
            FieldSpec::new("name", |item: &Item| item.0.as_str().into())
                .weight(f64::from(input.name_weight) / 16.0)
                .fuzzy(true),
        )
        .field(
            FieldSpec::new("aliases", |item: &Item| item.1.as_slice().into())
                .fuzzy(input.fuzzy_aliases),
        );
    let index = build_search_index(items, config);

    // INVARIANT 1: every built index is structurally sound
    verify_index(&index).expect("built index failed verification");

    // INVARIANT 2: search() never panics
    let results = search_index(&index, &input.query);

    // INVARIANT 3: positive scores, ranked best first, one result per item
    let mut seen = std::collections::HashSet::new();
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results out of order");
    }
    for result in &results {
        assert!(result.score > 0.0 && result.score.is_finite());
        assert_eq!(result.matches.len(), 1);
        assert!(seen.insert(result.item as *const Item), "item reported twice");
    }
});
