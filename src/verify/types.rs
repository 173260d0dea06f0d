// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural checks for a built index.
//!
//! `build_search_index` establishes every invariant listed in `types.rs`, and
//! nothing can break them afterwards because the index is immutable. These
//! checks exist for tests, for `tickerdex inspect`, and for anyone who builds
//! an index and wants proof rather than trust.
//!
//! | Check                    | What's Guaranteed                             |
//! |--------------------------|-----------------------------------------------|
//! | `UnsortedTable`          | Both tables ascending by key                  |
//! | `DanglingEntry`          | Every back-reference resolves                 |
//! | `DuplicateEntry`         | No value is referenced twice by one table     |
//! | `EntryCountMismatch`     | One entry per value per table                 |
//! | `KeyMismatch`            | Keys match the value they point at            |
//! | `WeightMismatch`         | Entries carry their field's effective weight  |
//! | `StaleField`             | normalized/words/mask derive from original    |
//! | `MisplacedItem`          | `items[i].index == i`                         |

use crate::types::{FieldId, SearchIndex, TableEntry};
use crate::util::{char_mask, normalize, reverse_str, tokenize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Which sorted table a violation was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Prefix,
    Suffix,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Prefix => f.write_str("prefix"),
            Table::Suffix => f.write_str("suffix"),
        }
    }
}

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("{table} table not sorted at position {position}")]
    UnsortedTable { table: Table, position: usize },

    #[error("{table} table entry {position} points at a value that doesn't exist")]
    DanglingEntry { table: Table, position: usize },

    #[error("{table} table references item {item} field {field} value {value} more than once")]
    DuplicateEntry {
        table: Table,
        item: usize,
        field: u16,
        value: usize,
    },

    #[error("{table} table has {entries} entries for {values} indexed values")]
    EntryCountMismatch {
        table: Table,
        entries: usize,
        values: usize,
    },

    #[error("{table} table entry {position} key doesn't match its value")]
    KeyMismatch { table: Table, position: usize },

    #[error("{table} table entry {position} weight differs from its field weight")]
    WeightMismatch { table: Table, position: usize },

    #[error("item {item} field {field} value {value} is not derived from its original")]
    StaleField {
        item: usize,
        field: u16,
        value: usize,
    },

    #[error("item at position {position} claims index {claimed}")]
    MisplacedItem { position: usize, claimed: usize },
}

/// What a successful verification covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationReport {
    pub items: usize,
    pub values: usize,
    pub entries_checked: usize,
}

/// Check every structural invariant of `index`, stopping at the first
/// violation.
pub fn verify_index<T>(index: &SearchIndex<T>) -> Result<VerificationReport, InvariantError> {
    let mut values = 0;

    for (position, item) in index.items().iter().enumerate() {
        if item.index != position {
            return Err(InvariantError::MisplacedItem {
                position,
                claimed: item.index,
            });
        }
        for (field, field_values) in item.fields.iter().enumerate() {
            for (value, indexed) in field_values.iter().enumerate() {
                values += 1;
                let normalized = normalize(&indexed.original);
                if indexed.normalized != normalized
                    || indexed.words != tokenize(&normalized)
                    || indexed.char_mask != char_mask(&normalized)
                {
                    return Err(InvariantError::StaleField {
                        item: position,
                        field: field as u16,
                        value,
                    });
                }
            }
        }
    }

    check_table(index, Table::Prefix, index.prefix_table(), values)?;
    check_table(index, Table::Suffix, index.suffix_table(), values)?;

    Ok(VerificationReport {
        items: index.len(),
        values,
        entries_checked: index.prefix_table().len() + index.suffix_table().len(),
    })
}

fn check_table<T>(
    index: &SearchIndex<T>,
    table: Table,
    entries: &[TableEntry],
    values: usize,
) -> Result<(), InvariantError> {
    if let Some(position) = first_unsorted(entries) {
        return Err(InvariantError::UnsortedTable { table, position });
    }

    if entries.len() != values {
        return Err(InvariantError::EntryCountMismatch {
            table,
            entries: entries.len(),
            values,
        });
    }

    let mut seen: HashSet<(usize, FieldId, usize)> = HashSet::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        let Some(indexed) = index.value(entry) else {
            return Err(InvariantError::DanglingEntry { table, position });
        };

        if !seen.insert((entry.item, entry.field, entry.value)) {
            return Err(InvariantError::DuplicateEntry {
                table,
                item: entry.item,
                field: entry.field.0,
                value: entry.value,
            });
        }

        let key_matches = match table {
            Table::Prefix => entry.key == indexed.normalized,
            Table::Suffix => entry.key == reverse_str(&indexed.normalized),
        };
        if !key_matches || entry.original != indexed.original {
            return Err(InvariantError::KeyMismatch { table, position });
        }

        if entry.weight.to_bits() != index.field_weight(entry.field).to_bits() {
            return Err(InvariantError::WeightMismatch { table, position });
        }
    }

    Ok(())
}

/// Position of the first entry that sorts before its predecessor.
pub fn first_unsorted(entries: &[TableEntry]) -> Option<usize> {
    entries
        .windows(2)
        .position(|pair| pair[0].key > pair[1].key)
        .map(|i| i + 1)
}
