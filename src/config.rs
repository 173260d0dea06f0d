// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration: which fields to index and how to match them.
//!
//! A [`SearchConfig`] is an ordered list of [`FieldSpec`]s plus the tunable
//! [`SearchOptions`]. Each field has an extractor closure that pulls zero, one,
//! or many strings out of a caller item, a weight multiplied into every score
//! the field earns, and a flag opting it into typo-tolerant matching.
//!
//! ```
//! use tickerdex::{FieldSpec, SearchConfig};
//!
//! struct Coin {
//!     symbol: String,
//!     name: String,
//! }
//!
//! let config = SearchConfig::new()
//!     .field(FieldSpec::new("symbol", |c: &Coin| c.symbol.as_str().into()).weight(2.0))
//!     .field(FieldSpec::new("name", |c: &Coin| c.name.as_str().into()).fuzzy(true));
//!
//! assert!(config.validate().is_ok());
//! ```
//!
//! Options are plain data and deserialize from JSON with defaults for anything
//! left out; extractors are code and only exist on the Rust side.

use crate::error::ConfigError;
use crate::scoring::MatchScores;
use crate::types::FieldId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_WEIGHT: f64 = 1.0;
pub const DEFAULT_FUZZY_MIN_LENGTH: usize = 3;
pub const DEFAULT_FUZZY_MAX_DISTANCE: usize = 2;
/// Values longer than the query by more than this skip fuzzy matching.
pub const DEFAULT_FUZZY_LENGTH_SLACK: usize = 4;
pub const DEFAULT_MAX_QUERY_CHARS: usize = 128;

// =============================================================================
// EXTRACTED VALUES
// =============================================================================

/// What an extractor returns for one item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// The item has no value for this field.
    #[default]
    None,
    Single(String),
    Many(Vec<String>),
}

impl FieldValue {
    /// Flatten into the values worth indexing. Empty and whitespace-only
    /// strings are dropped.
    pub fn into_values(self) -> Vec<String> {
        let values = match self {
            FieldValue::None => Vec::new(),
            FieldValue::Single(value) => vec![value],
            FieldValue::Many(values) => values,
        };
        values
            .into_iter()
            .filter(|value| !value.trim().is_empty())
            .collect()
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Single(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Single(value.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Single(value.clone())
    }
}

impl<S: Into<String>> From<Option<S>> for FieldValue {
    fn from(value: Option<S>) -> Self {
        value.map_or(FieldValue::None, |v| FieldValue::Single(v.into()))
    }
}

impl<S: Into<String>> From<Vec<S>> for FieldValue {
    fn from(values: Vec<S>) -> Self {
        FieldValue::Many(values.into_iter().map(Into::into).collect())
    }
}

impl From<&[String]> for FieldValue {
    fn from(values: &[String]) -> Self {
        FieldValue::Many(values.to_vec())
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// Extractor closure for one field.
pub type Extractor<T> = Box<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// One searchable field.
pub struct FieldSpec<T> {
    name: String,
    weight: f64,
    fuzzy: bool,
    extract: Extractor<T>,
}

impl<T> FieldSpec<T> {
    /// New field with weight 1.0 and fuzzy matching off.
    pub fn new<F>(name: impl Into<String>, extract: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            weight: DEFAULT_WEIGHT,
            fuzzy: false,
            extract: Box::new(extract),
        }
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn configured_weight(&self) -> f64 {
        self.weight
    }

    pub fn is_fuzzy(&self) -> bool {
        self.fuzzy
    }

    /// Run the extractor on an item.
    pub fn extract(&self, item: &T) -> FieldValue {
        (self.extract)(item)
    }
}

impl<T> fmt::Debug for FieldSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .field("fuzzy", &self.fuzzy)
            .finish_non_exhaustive()
    }
}

/// Is this usable as a score multiplier?
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Tunables shared by every field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub match_scores: MatchScores,
    /// Shortest query (in chars) that runs the fuzzy phase.
    pub fuzzy_min_length: usize,
    /// Largest edit distance accepted as a fuzzy match.
    pub fuzzy_max_distance: usize,
    /// Fuzzy phase skips values whose length differs from the query's by
    /// more than this many chars.
    pub fuzzy_length_slack: usize,
    /// Longest query (in chars) that still runs the fuzzy phase. Longer
    /// queries match on the other five phases only.
    pub max_query_chars: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            match_scores: MatchScores::default(),
            fuzzy_min_length: DEFAULT_FUZZY_MIN_LENGTH,
            fuzzy_max_distance: DEFAULT_FUZZY_MAX_DISTANCE,
            fuzzy_length_slack: DEFAULT_FUZZY_LENGTH_SLACK,
            max_query_chars: DEFAULT_MAX_QUERY_CHARS,
        }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Fields plus options. Consumed by [`crate::build_search_index`].
pub struct SearchConfig<T> {
    fields: Vec<FieldSpec<T>>,
    pub options: SearchOptions,
}

impl<T> Default for SearchConfig<T> {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            options: SearchOptions::default(),
        }
    }
}

impl<T> SearchConfig<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Order determines [`FieldId`]s.
    pub fn field(mut self, spec: FieldSpec<T>) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn match_scores(mut self, scores: MatchScores) -> Self {
        self.options.match_scores = scores;
        self
    }

    pub fn fuzzy_min_length(mut self, chars: usize) -> Self {
        self.options.fuzzy_min_length = chars;
        self
    }

    pub fn fuzzy_max_distance(mut self, edits: usize) -> Self {
        self.options.fuzzy_max_distance = edits;
        self
    }

    pub fn fields(&self) -> &[FieldSpec<T>] {
        &self.fields
    }

    pub fn field_id(&self, name: &str) -> Option<FieldId> {
        self.fields
            .iter()
            .position(|spec| spec.name == name)
            .map(|i| FieldId(i as u16))
    }

    /// Check the config for values that would make results misleading.
    ///
    /// Optional: the indexer works on any config, replacing unusable weights
    /// with 1.0. Call this where a config comes from user input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fields.len() > usize::from(u16::MAX) + 1 {
            return Err(ConfigError::TooManyFields(self.fields.len()));
        }

        let mut seen = HashSet::with_capacity(self.fields.len());
        for spec in &self.fields {
            if !is_valid_weight(spec.weight) {
                return Err(ConfigError::InvalidWeight {
                    field: spec.name.clone(),
                    weight: spec.weight,
                });
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(ConfigError::DuplicateField(spec.name.clone()));
            }
        }

        if self.options.fuzzy_min_length == 0 {
            return Err(ConfigError::ZeroFuzzyMinLength);
        }
        if self.options.max_query_chars == 0 {
            return Err(ConfigError::ZeroMaxQueryChars);
        }
        Ok(())
    }
}

impl<T> fmt::Debug for SearchConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("fields", &self.fields)
            .field("options", &self.options)
            .finish()
    }
}
