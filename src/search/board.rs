// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reusable per-item score buffers.
//!
//! Every query tracks, per item, the best score seen so far and what produced
//! it. Allocating those four arrays on every keystroke adds up, so a
//! [`ScoreBoard`] keeps them between queries: `reset` zeroes the first `n`
//! slots and only reallocates when the index outgrew the buffers, at least
//! doubling so a steadily growing item list doesn't reallocate every rebuild.
//!
//! A board is plain owned data. Give one to each thread or each `Searcher`;
//! there is no shared global instance.

use crate::fuzzy::Levenshtein;
use crate::types::{FieldId, MatchType};

/// Best match per item, plus the Levenshtein scratch for the fuzzy phase.
#[derive(Debug, Default, Clone)]
pub struct ScoreBoard {
    scores: Vec<f64>,
    match_types: Vec<Option<MatchType>>,
    fields: Vec<FieldId>,
    values: Vec<usize>,
    len: usize,
    pub(crate) levenshtein: Levenshtein,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(items: usize) -> Self {
        let mut board = Self::default();
        board.grow(items);
        board
    }

    /// Slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.scores.len()
    }

    /// Items tracked by the current query.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepare for a query over `items` items: zero every slot in use.
    pub fn reset(&mut self, items: usize) {
        if items > self.scores.len() {
            self.grow(items);
        }
        self.scores[..items].fill(0.0);
        self.match_types[..items].fill(None);
        self.len = items;
    }

    fn grow(&mut self, items: usize) {
        let capacity = items.max(self.scores.len() * 2);
        self.scores.resize(capacity, 0.0);
        self.match_types.resize(capacity, None);
        self.fields.resize(capacity, FieldId(0));
        self.values.resize(capacity, 0);
    }

    /// Current best score of `item`; 0.0 when unscored.
    #[inline]
    pub fn score(&self, item: usize) -> f64 {
        self.scores[item]
    }

    /// Record a match if it beats the item's current best.
    ///
    /// Strictly greater wins: on a tie the earlier match is kept, which makes
    /// phase order the tiebreaker between equal scores.
    #[inline]
    pub fn update(
        &mut self,
        item: usize,
        score: f64,
        match_type: MatchType,
        field: FieldId,
        value: usize,
    ) -> bool {
        if score > self.scores[item] {
            self.scores[item] = score;
            self.match_types[item] = Some(match_type);
            self.fields[item] = field;
            self.values[item] = value;
            true
        } else {
            false
        }
    }

    /// The recorded best of `item`, if it was scored this query.
    pub fn best(&self, item: usize) -> Option<(f64, MatchType, FieldId, usize)> {
        if item >= self.len {
            return None;
        }
        self.match_types[item].map(|match_type| {
            (
                self.scores[item],
                match_type,
                self.fields[item],
                self.values[item],
            )
        })
    }
}
