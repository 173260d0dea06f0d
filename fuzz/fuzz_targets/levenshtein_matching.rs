// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded edit distance.
//!
//! The fuzzy phase trusts `bounded` to agree with the full distance whenever
//! the result is within the bound. If the early exits lie, typo matches
//! silently disappear.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tickerdex::{levenshtein, Levenshtein};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths (in chars) to avoid timeouts
    let query: String = input.query.chars().take(64).collect();
    let target: String = input.target.chars().take(64).collect();
    let max = usize::from(input.max % 16);

    let exact = levenshtein(&query, &target);
    let mut scratch = Levenshtein::new();
    let bounded = scratch.bounded(&query, &target, max);

    // INVARIANT 1: bounded agrees with exact up to the bound
    assert_eq!(bounded, exact.min(max + 1), "{query:?} vs {target:?} max {max}");

    // INVARIANT 2: symmetry
    assert_eq!(exact, levenshtein(&target, &query));

    // INVARIANT 3: length difference is a lower bound
    let diff = query.chars().count().abs_diff(target.chars().count());
    assert!(exact >= diff);
});
