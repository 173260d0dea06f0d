// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Summary numbers for a built index, for `tickerdex inspect` and logs.

use crate::types::{FieldId, SearchIndex};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStats {
    pub name: String,
    pub weight: f64,
    pub fuzzy: bool,
    /// Indexed values across all items.
    pub values: usize,
    /// Items with at least one value.
    pub items_with_values: usize,
    pub distinct_values: usize,
    /// Longest normalized value, in chars.
    pub longest_value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub items: usize,
    pub prefix_entries: usize,
    pub suffix_entries: usize,
    pub fields: Vec<FieldStats>,
}

impl<T> SearchIndex<T> {
    pub fn stats(&self) -> IndexStats {
        let fields = (0..self.field_weights.len())
            .map(|f| {
                let field = FieldId(f as u16);
                let mut distinct = HashSet::new();
                let mut values = 0;
                let mut items_with_values = 0;
                let mut longest_value = 0;

                for item in &self.items {
                    let item_values = item.values(field);
                    if !item_values.is_empty() {
                        items_with_values += 1;
                    }
                    for value in item_values {
                        values += 1;
                        longest_value = longest_value.max(value.normalized.chars().count());
                        distinct.insert(value.normalized.as_str());
                    }
                }

                FieldStats {
                    name: self.field_name(field).to_string(),
                    weight: self.field_weight(field),
                    fuzzy: self.field_fuzzy(field),
                    values,
                    items_with_values,
                    distinct_values: distinct.len(),
                    longest_value,
                }
            })
            .collect();

        IndexStats {
            items: self.items.len(),
            prefix_entries: self.prefix_table.len(),
            suffix_entries: self.suffix_table.len(),
            fields,
        }
    }
}
