// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction.
//!
//! One pass over the items runs every extractor, preprocesses each value, and
//! appends a back-reference to both tables. A final sort per table makes them
//! binary-searchable. Entries are appended in (item, field, value) order and
//! sorted stably, so equal keys keep that order and two builds over the same
//! input produce identical tables.

use crate::config::{is_valid_weight, SearchConfig, DEFAULT_WEIGHT};
use crate::types::{FieldId, IndexedField, IndexedItem, SearchIndex, TableEntry};
use crate::util::{char_mask, normalize, reverse_str, tokenize};
use crate::verify::contracts::check_tables_sorted;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Build an index over `items`.
///
/// Total: an empty item list, fields that never yield a value, or a config
/// with no fields all produce an index with empty tables. Unusable weights
/// (non-positive or non-finite) are replaced with 1.0 and logged.
pub fn build_search_index<T>(
    items: Vec<T>,
    config: impl Into<Arc<SearchConfig<T>>>,
) -> SearchIndex<T> {
    let started = Instant::now();
    let config = config.into();

    // FieldId is a u16; anything past that is unaddressable and ignored
    let specs = &config.fields()[..config.fields().len().min(usize::from(u16::MAX) + 1)];

    let field_weights: Vec<f64> = specs
        .iter()
        .map(|spec| {
            let weight = spec.configured_weight();
            if is_valid_weight(weight) {
                weight
            } else {
                warn!(field = spec.name(), weight, "unusable field weight, using 1.0");
                DEFAULT_WEIGHT
            }
        })
        .collect();
    let field_fuzzy: Vec<bool> = specs.iter().map(|spec| spec.is_fuzzy()).collect();
    let max_weight = field_weights.iter().copied().fold(0.0, f64::max);

    let mut prefix_table: Vec<TableEntry> = Vec::with_capacity(items.len() * specs.len());
    let mut suffix_table: Vec<TableEntry> = Vec::with_capacity(items.len() * specs.len());
    let mut indexed_items: Vec<IndexedItem<T>> = Vec::with_capacity(items.len());

    for (position, item) in items.into_iter().enumerate() {
        let mut fields: Vec<Vec<IndexedField>> = Vec::with_capacity(specs.len());

        for (field_idx, spec) in specs.iter().enumerate() {
            let field = FieldId(field_idx as u16);
            let weight = field_weights[field_idx];
            let values = spec.extract(&item).into_values();
            let mut indexed_values = Vec::with_capacity(values.len());

            for (value_idx, original) in values.into_iter().enumerate() {
                let indexed = index_value(original);

                prefix_table.push(TableEntry {
                    key: indexed.normalized.clone(),
                    item: position,
                    field,
                    value: value_idx,
                    weight,
                    original: indexed.original.clone(),
                });
                suffix_table.push(TableEntry {
                    key: reverse_str(&indexed.normalized),
                    item: position,
                    field,
                    value: value_idx,
                    weight,
                    original: indexed.original.clone(),
                });

                indexed_values.push(indexed);
            }
            fields.push(indexed_values);
        }

        indexed_items.push(IndexedItem {
            item,
            index: position,
            fields,
        });
    }

    prefix_table.sort_by(|a, b| a.key.cmp(&b.key));
    suffix_table.sort_by(|a, b| a.key.cmp(&b.key));

    let index = SearchIndex {
        items: indexed_items,
        prefix_table,
        suffix_table,
        config,
        field_weights,
        field_fuzzy,
        max_weight,
    };

    check_tables_sorted(&index);

    debug!(
        items = index.items.len(),
        fields = index.field_weights.len(),
        entries = index.prefix_table.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "built search index"
    );

    index
}

/// Preprocess one extracted value.
pub fn index_value(original: String) -> IndexedField {
    let normalized = normalize(&original);
    let words = tokenize(&normalized);
    let char_mask = char_mask(&normalized);
    IndexedField {
        original,
        normalized,
        words,
        char_mask,
    }
}
