// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! Everything before this module exists so that a keystroke turns into a
//! ranked list quickly. Exact, prefix and suffix hits come straight out of
//! binary searches on the sorted tables; word-prefix, substring and typo
//! matching only spend time on items the earlier phases haven't already
//! settled.
//!
//! Three ways in:
//!
//! - [`search_index`] / [`search_index_with`] over an index you built and own
//! - [`Searcher`] for a long-lived, swappable item list
//! - [`search`] for a one-off query over a plain `Vec`

mod board;
mod cascade;
mod searcher;

pub use board::ScoreBoard;
pub use cascade::{find_hits, search_index, search_index_with, Hit};
pub use searcher::Searcher;

use crate::config::SearchConfig;
use crate::index::build_search_index;
use crate::types::SearchResult;
use std::sync::Arc;

/// Build an index over `items`, run one query, and hand back the matching
/// items by value.
///
/// An empty or whitespace-only query returns immediately without indexing.
pub fn search<T>(
    items: Vec<T>,
    query: &str,
    config: impl Into<Arc<SearchConfig<T>>>,
) -> Vec<SearchResult<T>> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let index = build_search_index(items, config);
    let mut board = ScoreBoard::with_capacity(index.len());
    let resolved: Vec<SearchResult<usize>> = find_hits(&index, query, &mut board)
        .into_iter()
        .map(|hit| hit.into_result(&index, hit.item))
        .collect();

    let mut slots: Vec<Option<T>> = index.into_items().into_iter().map(Some).collect();
    resolved
        .into_iter()
        .filter_map(|result| {
            let item = slots.get_mut(result.item)?.take()?;
            Some(result.map_item(|_| item))
        })
        .collect()
}
