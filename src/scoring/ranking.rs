// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Unlike a bucketed ranking, the weighted score is the whole story here:
//! field weights are allowed to lift a prefix hit on a heavy field above an
//! exact hit on a light one. Position in the original item list breaks ties,
//! so equal scores come back in the order the caller supplied the items.

use crate::search::Hit;
use std::cmp::Ordering;

/// Compare two hits for ranking.
///
/// 1. **Score** descending
/// 2. **Item position** ascending
pub fn compare_hits(a: &Hit, b: &Hit) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.item.cmp(&b.item))
}

/// Sort hits best first.
pub fn rank_hits(hits: &mut [Hit]) {
    hits.sort_unstable_by(compare_hits);
}
