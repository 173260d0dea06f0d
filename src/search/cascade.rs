// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The six-phase matching cascade: exact → prefix → suffix → word prefix →
//! substring → fuzzy.
//!
//! The first three phases are binary searches into the sorted tables and
//! only ever touch matching entries. The last three walk the items, but each
//! skips any item that already holds at least the best score the phase could
//! award (its base score times the heaviest field weight), so on a typical
//! query most items are dismissed with one comparison. The fuzzy phase adds
//! its own filters on top: a query length between `fuzzy_min_length` and
//! `max_query_chars`, fuzzy-enabled fields only, and a window on value length
//! (within `fuzzy_length_slack` chars of the query either way), since edit
//! distance can't be smaller than the length difference.
//!
//! Every phase reports into a [`ScoreBoard`] that keeps the best match per
//! item. The skip rules only drop work that could not change the board, so
//! the result is the same as running every phase over every value.

use crate::config::SearchOptions;
use crate::scoring::ranking::rank_hits;
use crate::scoring::MatchScores;
use crate::search::ScoreBoard;
use crate::types::{FieldId, IndexedField, MatchType, SearchIndex, SearchMatch, SearchResult};
use crate::util::{can_contain, char_mask, lower_bound, normalize, reverse_str};
use crate::verify::contracts::check_ranked;
use tracing::trace;

/// An item's best match, before the display strings are resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Position of the item in the index.
    pub item: usize,
    pub score: f64,
    pub match_type: MatchType,
    pub field: FieldId,
    /// Position of the matched value within the field.
    pub value: usize,
}

impl Hit {
    /// Attach display strings from `index` and wrap `item`.
    pub fn into_result<T, U>(self, index: &SearchIndex<T>, item: U) -> SearchResult<U> {
        let value = index
            .items()
            .get(self.item)
            .and_then(|indexed| indexed.values(self.field).get(self.value))
            .map(|value| value.original.clone())
            .unwrap_or_default();

        SearchResult {
            item,
            score: self.score,
            matches: vec![SearchMatch {
                field: index.field_name(self.field).to_string(),
                match_type: self.match_type,
                value,
                score: self.score,
            }],
        }
    }
}

/// Search with a fresh score board.
///
/// Results borrow the items from `index`, best first.
pub fn search_index<'a, T>(index: &'a SearchIndex<T>, query: &str) -> Vec<SearchResult<&'a T>> {
    let mut board = ScoreBoard::with_capacity(index.len());
    search_index_with(index, query, &mut board)
}

/// Search reusing `board`'s buffers.
pub fn search_index_with<'a, T>(
    index: &'a SearchIndex<T>,
    query: &str,
    board: &mut ScoreBoard,
) -> Vec<SearchResult<&'a T>> {
    find_hits(index, query, board)
        .into_iter()
        .map(|hit| hit.into_result(index, &index.items()[hit.item].item))
        .collect()
}

/// Run the cascade and return ranked hits.
pub fn find_hits<T>(index: &SearchIndex<T>, query: &str, board: &mut ScoreBoard) -> Vec<Hit> {
    let options = &index.config().options;
    let query = normalize(query);
    if query.is_empty() || index.is_empty() {
        return Vec::new();
    }

    board.reset(index.len());
    let mut cascade = Cascade {
        index,
        query: &query,
        options,
        scores: &options.match_scores,
        board,
    };

    let prefix_start = lower_bound(index.prefix_table(), &query, |e| e.key.as_str());
    let exact = cascade.exact(prefix_start);
    let prefix = cascade.prefix(prefix_start);
    let suffix = cascade.suffix();
    let word_prefix = cascade.word_prefix();
    let contains = cascade.contains();
    let fuzzy = cascade.fuzzy();

    let mut hits: Vec<Hit> = (0..index.len())
        .filter_map(|item| {
            let (score, match_type, field, value) = board.best(item)?;
            (score > 0.0).then_some(Hit {
                item,
                score,
                match_type,
                field,
                value,
            })
        })
        .collect();
    rank_hits(&mut hits);
    check_ranked(&hits);

    trace!(
        query = %query,
        exact,
        prefix,
        suffix,
        word_prefix,
        contains,
        fuzzy,
        results = hits.len(),
        "search complete"
    );

    hits
}

/// State shared by the phases of one query. Each phase returns how many
/// matches it found, for tracing.
struct Cascade<'a, T> {
    index: &'a SearchIndex<T>,
    query: &'a str,
    options: &'a SearchOptions,
    scores: &'a MatchScores,
    board: &'a mut ScoreBoard,
}

impl<T> Cascade<'_, T> {
    /// Phase 1: normalized value equals the query. All equal keys sit
    /// together at the lower bound.
    fn exact(&mut self, start: usize) -> usize {
        let mut found = 0;
        for entry in self.index.prefix_table()[start..]
            .iter()
            .take_while(|e| e.key == self.query)
        {
            let score = self.scores.weighted(MatchType::Exact, entry.weight);
            self.board
                .update(entry.item, score, MatchType::Exact, entry.field, entry.value);
            found += 1;
        }
        found
    }

    /// Phase 2: value starts with the query (strictly longer than it).
    fn prefix(&mut self, start: usize) -> usize {
        let mut found = 0;
        for entry in self.index.prefix_table()[start..]
            .iter()
            .take_while(|e| e.key.starts_with(self.query))
        {
            if entry.key.len() == self.query.len() {
                continue;
            }
            let score = self.scores.weighted(MatchType::Prefix, entry.weight);
            self.board
                .update(entry.item, score, MatchType::Prefix, entry.field, entry.value);
            found += 1;
        }
        found
    }

    /// Phase 3: value ends with the query, found as reversed-key prefixes.
    fn suffix(&mut self) -> usize {
        let reversed = reverse_str(self.query);
        let table = self.index.suffix_table();
        let start = lower_bound(table, &reversed, |e| e.key.as_str());

        let mut found = 0;
        for entry in table[start..]
            .iter()
            .take_while(|e| e.key.starts_with(&reversed))
        {
            if entry.key.len() == reversed.len() {
                continue;
            }
            let score = self.scores.weighted(MatchType::Suffix, entry.weight);
            self.board
                .update(entry.item, score, MatchType::Suffix, entry.field, entry.value);
            found += 1;
        }
        found
    }

    /// Phase 4: some word of the value starts with the query.
    fn word_prefix(&mut self) -> usize {
        let query = self.query;
        self.scan_items(MatchType::WordPrefix, |value| {
            value.words.iter().any(|word| word.starts_with(query))
        })
    }

    /// Phase 5: value contains the query anywhere. The char mask rejects most
    /// values before the substring search runs.
    fn contains(&mut self) -> usize {
        let query = self.query;
        let query_mask = char_mask(query);
        self.scan_items(MatchType::Contains, |value| {
            can_contain(value.char_mask, query_mask) && value.normalized.contains(query)
        })
    }

    /// Shared item walk for phases 4 and 5: first matching value per field.
    fn scan_items<F>(&mut self, match_type: MatchType, matches: F) -> usize
    where
        F: Fn(&IndexedField) -> bool,
    {
        let ceiling = self.scores.base(match_type) * self.index.max_weight();
        let mut found = 0;

        for item in self.index.items() {
            if self.board.score(item.index) >= ceiling {
                continue;
            }
            for (f, values) in item.fields.iter().enumerate() {
                let field = FieldId(f as u16);
                let score = self
                    .scores
                    .weighted(match_type, self.index.field_weight(field));
                if score <= self.board.score(item.index) {
                    continue;
                }
                if let Some(value) = values.iter().position(&matches) {
                    self.board.update(item.index, score, match_type, field, value);
                    found += 1;
                }
            }
        }
        found
    }

    /// Phase 6: bounded edit distance against fuzzy-enabled fields. Queries
    /// longer than `max_query_chars` skip it, which caps the DP cost.
    fn fuzzy(&mut self) -> usize {
        let query_len = self.query.chars().count();
        if query_len < self.options.fuzzy_min_length || query_len > self.options.max_query_chars {
            return 0;
        }

        let max_distance = self.options.fuzzy_max_distance;
        let slack = self.options.fuzzy_length_slack;
        let ceiling = self.scores.base(MatchType::Fuzzy) * self.index.max_weight();
        let mut found = 0;

        for item in self.index.items() {
            if self.board.score(item.index) >= ceiling {
                continue;
            }
            for (f, values) in item.fields.iter().enumerate() {
                let field = FieldId(f as u16);
                if !self.index.field_fuzzy(field) {
                    continue;
                }
                let weight = self.index.field_weight(field);
                if self.scores.fuzzy * weight <= self.board.score(item.index) {
                    continue;
                }

                for (v, value) in values.iter().enumerate() {
                    if value.normalized.chars().count().abs_diff(query_len) > slack {
                        continue;
                    }
                    let distance =
                        self.board
                            .levenshtein
                            .bounded(self.query, &value.normalized, max_distance);
                    if distance > max_distance {
                        continue;
                    }
                    let score = self.scores.fuzzy_score(weight, distance, max_distance);
                    if self
                        .board
                        .update(item.index, score, MatchType::Fuzzy, field, v)
                    {
                        found += 1;
                    }
                }
            }
        }
        found
    }
}
