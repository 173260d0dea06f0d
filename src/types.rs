// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! These types define how items, their extracted field values, and the two
//! sorted lookup tables fit together.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **IndexedField**: `normalized == normalize(original)`, `words ==
//!   tokenize(normalized)`, `char_mask == char_mask(normalized)`.
//!
//! - **TableEntry**: `item < items.len()`, `field < fields.len()`,
//!   `value < items[item].fields[field].len()`. Every back-reference resolves.
//!
//! - **SearchIndex**: `prefix_table` and `suffix_table` are sorted ascending by
//!   key, and each holds exactly one entry per indexed field value.
//!
//! `verify::verify_index` checks all of these on a built index.

use crate::config::SearchConfig;
use crate::util::CharMask;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Position of a field in its [`SearchConfig`].
///
/// Field names are resolved to ids once at build time so the hot loops index
/// into vectors instead of hashing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct FieldId(pub u16);

impl FieldId {
    /// Convert to usize for vector indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

// =============================================================================
// MATCH TYPES
// =============================================================================

/// Which cascade phase produced a match.
///
/// Declared in phase order. With the default scores each variant's base score
/// is strictly lower than the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchType {
    Exact,
    Prefix,
    Suffix,
    WordPrefix,
    Contains,
    Fuzzy,
}

impl MatchType {
    /// All match types in cascade order.
    pub const ALL: [MatchType; 6] = [
        MatchType::Exact,
        MatchType::Prefix,
        MatchType::Suffix,
        MatchType::WordPrefix,
        MatchType::Contains,
        MatchType::Fuzzy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Prefix => "prefix",
            MatchType::Suffix => "suffix",
            MatchType::WordPrefix => "wordPrefix",
            MatchType::Contains => "contains",
            MatchType::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// INDEXED VALUES
// =============================================================================

/// One extracted field value, preprocessed for every phase of the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedField {
    /// Display form, exactly as the extractor returned it.
    pub original: String,
    /// Lowercased and trimmed.
    pub normalized: String,
    /// Ascii alphanumeric runs of `normalized`, left to right.
    pub words: Vec<String>,
    /// Letters present in `normalized`.
    pub char_mask: CharMask,
}

/// A caller item plus its indexed field values.
#[derive(Debug, Clone)]
pub struct IndexedItem<T> {
    pub item: T,
    /// Position in the list the index was built from.
    pub index: usize,
    /// Values per field, indexed by [`FieldId`]. A field may have none.
    pub fields: Vec<Vec<IndexedField>>,
}

impl<T> IndexedItem<T> {
    /// Values extracted for one field.
    pub fn values(&self, field: FieldId) -> &[IndexedField] {
        self.fields
            .get(field.as_usize())
            .map_or(&[][..], Vec::as_slice)
    }
}

/// Back-reference from a sorted table to one indexed field value.
///
/// The prefix table keys on the normalized value, the suffix table on the
/// reversed normalized value. Both carry the field weight and display form so
/// the table scans never chase the item for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    pub key: String,
    pub item: usize,
    pub field: FieldId,
    pub value: usize,
    pub weight: f64,
    pub original: String,
}

/// Entry of the prefix table, keyed by normalized value.
pub type PrefixEntry = TableEntry;

/// Entry of the suffix table, keyed by reversed normalized value.
pub type SuffixEntry = TableEntry;

// =============================================================================
// SEARCH INDEX
// =============================================================================

/// Immutable index over a snapshot of items.
///
/// Built by [`crate::build_search_index`]. When the items change, build a new
/// one; nothing here is updated in place.
pub struct SearchIndex<T> {
    pub(crate) items: Vec<IndexedItem<T>>,
    pub(crate) prefix_table: Vec<PrefixEntry>,
    pub(crate) suffix_table: Vec<SuffixEntry>,
    pub(crate) config: Arc<SearchConfig<T>>,
    pub(crate) field_weights: Vec<f64>,
    pub(crate) field_fuzzy: Vec<bool>,
    pub(crate) max_weight: f64,
}

impl<T> SearchIndex<T> {
    pub fn items(&self) -> &[IndexedItem<T>] {
        &self.items
    }

    /// Caller item at `position` in the original list.
    pub fn item(&self, position: usize) -> Option<&T> {
        self.items.get(position).map(|indexed| &indexed.item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sorted ascending by normalized value.
    pub fn prefix_table(&self) -> &[PrefixEntry] {
        &self.prefix_table
    }

    /// Sorted ascending by reversed normalized value.
    pub fn suffix_table(&self) -> &[SuffixEntry] {
        &self.suffix_table
    }

    pub fn config(&self) -> &Arc<SearchConfig<T>> {
        &self.config
    }

    /// Effective weight of a field (after sanitizing the configured value).
    pub fn field_weight(&self, field: FieldId) -> f64 {
        self.field_weights
            .get(field.as_usize())
            .copied()
            .unwrap_or(1.0)
    }

    pub fn field_fuzzy(&self, field: FieldId) -> bool {
        self.field_fuzzy
            .get(field.as_usize())
            .copied()
            .unwrap_or(false)
    }

    /// Largest field weight, used to bound what a phase can still award.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    pub fn field_name(&self, field: FieldId) -> &str {
        self.config
            .fields()
            .get(field.as_usize())
            .map_or("", |spec| spec.name())
    }

    /// Look up a field by name. Duplicate names resolve to the first.
    pub fn field_id(&self, name: &str) -> Option<FieldId> {
        self.config.field_id(name)
    }

    /// The indexed value a table entry points at.
    pub fn value(&self, entry: &TableEntry) -> Option<&IndexedField> {
        self.items
            .get(entry.item)?
            .values(entry.field)
            .get(entry.value)
    }

    /// Consume the index and hand back the caller's items in original order.
    pub fn into_items(self) -> Vec<T> {
        self.items.into_iter().map(|indexed| indexed.item).collect()
    }
}

impl<T> fmt::Debug for SearchIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchIndex")
            .field("items", &self.items.len())
            .field("prefix_table", &self.prefix_table.len())
            .field("suffix_table", &self.suffix_table.len())
            .field("field_weights", &self.field_weights)
            .field("field_fuzzy", &self.field_fuzzy)
            .finish()
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Why an item matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    pub field: String,
    pub match_type: MatchType,
    /// Display form of the value that matched.
    pub value: String,
    pub score: f64,
}

/// A ranked item.
///
/// `matches` holds exactly one entry today: the best-scoring match. It stays a
/// list so callers don't break if more matches get reported later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    pub item: T,
    pub score: f64,
    pub matches: Vec<SearchMatch>,
}

impl<T> SearchResult<T> {
    /// The match that produced `score`.
    pub fn best_match(&self) -> Option<&SearchMatch> {
        self.matches.first()
    }

    pub fn match_type(&self) -> Option<MatchType> {
        self.best_match().map(|m| m.match_type)
    }

    pub fn map_item<U, F: FnOnce(T) -> U>(self, f: F) -> SearchResult<U> {
        SearchResult {
            item: f(self.item),
            score: self.score,
            matches: self.matches,
        }
    }
}
