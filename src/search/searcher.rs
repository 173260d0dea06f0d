// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A long-lived search handle over a replaceable item list.
//!
//! The live index sits behind an `RwLock<Arc<..>>`. Readers take the lock
//! only long enough to clone the `Arc`, so a search that's already running
//! keeps a consistent view even if `set_items` swaps in a new index halfway
//! through. Rebuilding happens outside the lock; the write lock is held for a
//! pointer swap.
//!
//! The searcher also owns one [`ScoreBoard`]. Concurrent callers that find it
//! busy fall back to a board of their own rather than wait.

use crate::config::SearchConfig;
use crate::index::build_search_index;
use crate::search::{find_hits, ScoreBoard};
use crate::types::{SearchIndex, SearchResult};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub struct Searcher<T> {
    config: Arc<SearchConfig<T>>,
    index: RwLock<Arc<SearchIndex<T>>>,
    board: Mutex<ScoreBoard>,
}

impl<T> Searcher<T> {
    pub fn new(items: Vec<T>, config: impl Into<Arc<SearchConfig<T>>>) -> Self {
        let config = config.into();
        let index = build_search_index(items, Arc::clone(&config));
        let board = ScoreBoard::with_capacity(index.len());
        Self {
            config,
            index: RwLock::new(Arc::new(index)),
            board: Mutex::new(board),
        }
    }

    /// Replace the item list. Searches already running finish against the
    /// old index; later ones see the new one.
    pub fn set_items(&self, items: Vec<T>) {
        let index = Arc::new(build_search_index(items, Arc::clone(&self.config)));
        let previous = std::mem::replace(&mut *self.index.write(), index);
        debug!(previous = previous.len(), items = self.len(), "replaced search index");
    }

    /// The live index.
    pub fn index(&self) -> Arc<SearchIndex<T>> {
        Arc::clone(&self.index.read())
    }

    pub fn config(&self) -> &Arc<SearchConfig<T>> {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.index.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Searcher<T> {
    /// Ranked matches for `query`, best first.
    pub fn search(&self, query: &str) -> Vec<SearchResult<T>> {
        let index = self.index();
        let hits = match self.board.try_lock() {
            Some(mut board) => find_hits(&index, query, &mut board),
            None => find_hits(&index, query, &mut ScoreBoard::with_capacity(index.len())),
        };

        hits.into_iter()
            .map(|hit| hit.into_result(&index, index.items()[hit.item].item.clone()))
            .collect()
    }

    /// At most `limit` of the best matches.
    pub fn search_top(&self, query: &str, limit: usize) -> Vec<SearchResult<T>> {
        let mut results = self.search(query);
        results.truncate(limit);
        results
    }

    /// Current items, in the order they were supplied.
    pub fn items(&self) -> Vec<T> {
        self.index()
            .items()
            .iter()
            .map(|indexed| indexed.item.clone())
            .collect()
    }
}

impl<T> fmt::Debug for Searcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Searcher")
            .field("config", &self.config)
            .field("items", &self.len())
            .finish_non_exhaustive()
    }
}
