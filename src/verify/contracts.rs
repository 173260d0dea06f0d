// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-build contracts.
//!
//! Zero-cost in release builds (`debug_assert!`), they fail loudly in tests
//! when the indexer or the cascade breaks an invariant the binary searches
//! rely on.

use crate::search::Hit;
use crate::types::SearchIndex;
use crate::verify::first_unsorted;

/// Both tables must be ascending by key before any lower-bound lookup.
#[inline]
pub fn check_tables_sorted<T>(index: &SearchIndex<T>) {
    debug_assert_eq!(
        first_unsorted(index.prefix_table()),
        None,
        "prefix table not sorted"
    );
    debug_assert_eq!(
        first_unsorted(index.suffix_table()),
        None,
        "suffix table not sorted"
    );
}

/// A finished result list must be ranked best first with positive scores.
#[inline]
pub fn check_ranked(hits: &[Hit]) {
    debug_assert!(
        hits.iter().all(|hit| hit.score > 0.0),
        "result with non-positive score"
    );
    debug_assert!(
        hits.windows(2).all(|pair| pair[0].score >= pair[1].score),
        "results not sorted by descending score"
    );
}
