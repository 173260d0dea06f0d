// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for configuration checks.
//!
//! Building and searching never fail. These errors only come out of the
//! explicit checks a caller can opt into: [`crate::SearchConfig::validate`]
//! and [`crate::verify::verify_index`].

use thiserror::Error;

pub use crate::verify::InvariantError;

/// Problems with a [`crate::SearchConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Weight is zero, negative, NaN, or infinite.
    #[error("field `{field}` has weight {weight}; weights must be positive and finite")]
    InvalidWeight { field: String, weight: f64 },

    /// Two fields share a name; lookups by name would only see the first.
    #[error("field `{0}` is configured more than once")]
    DuplicateField(String),

    /// More fields than a `FieldId` can address.
    #[error("{0} fields configured; at most 65536 are supported")]
    TooManyFields(usize),

    /// A zero minimum would run fuzzy matching on single-letter queries.
    #[error("fuzzy_min_length must be at least 1")]
    ZeroFuzzyMinLength,

    /// A zero query cap would turn every search into an empty query.
    #[error("max_query_chars must be at least 1")]
    ZeroMaxQueryChars,
}
