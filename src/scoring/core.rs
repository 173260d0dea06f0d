// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Match type dominates. Every phase of the cascade awards a fixed base score,
//! multiplied by the weight of the field it matched in. Fuzzy matches are
//! further scaled by a linear decay in edit distance, so a one-typo hit always
//! beats a two-typo hit on the same field.
//!
//! # Default base scores
//!
//! | Match type  | Score |
//! |-------------|-------|
//! | Exact       | 1000  |
//! | Prefix      | 500   |
//! | Suffix      | 350   |
//! | WordPrefix  | 300   |
//! | Contains    | 100   |
//! | Fuzzy       | 50    |
//!
//! The gaps are wide enough that on equally weighted fields a better match
//! type always outranks a worse one. Across fields, weights can invert that:
//! a prefix hit on a weight-2 symbol (1000) ties an exact hit on a weight-1
//! name.

use crate::types::MatchType;
use serde::{Deserialize, Serialize};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

pub const EXACT_SCORE: f64 = 1000.0;
pub const PREFIX_SCORE: f64 = 500.0;
pub const SUFFIX_SCORE: f64 = 350.0;
pub const WORD_PREFIX_SCORE: f64 = 300.0;
pub const CONTAINS_SCORE: f64 = 100.0;
pub const FUZZY_SCORE: f64 = 50.0;

// Default ordering must follow phase order
const _: () = {
    assert!(EXACT_SCORE > PREFIX_SCORE);
    assert!(PREFIX_SCORE > SUFFIX_SCORE);
    assert!(SUFFIX_SCORE > WORD_PREFIX_SCORE);
    assert!(WORD_PREFIX_SCORE > CONTAINS_SCORE);
    assert!(CONTAINS_SCORE > FUZZY_SCORE);
    assert!(FUZZY_SCORE > 0.0);
};

/// Base score per match type. Any subset can be overridden; missing keys keep
/// their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchScores {
    pub exact: f64,
    pub prefix: f64,
    pub suffix: f64,
    pub word_prefix: f64,
    pub contains: f64,
    pub fuzzy: f64,
}

impl Default for MatchScores {
    fn default() -> Self {
        Self {
            exact: EXACT_SCORE,
            prefix: PREFIX_SCORE,
            suffix: SUFFIX_SCORE,
            word_prefix: WORD_PREFIX_SCORE,
            contains: CONTAINS_SCORE,
            fuzzy: FUZZY_SCORE,
        }
    }
}

impl MatchScores {
    /// Base score for a match type, before weighting.
    pub fn base(&self, match_type: MatchType) -> f64 {
        match match_type {
            MatchType::Exact => self.exact,
            MatchType::Prefix => self.prefix,
            MatchType::Suffix => self.suffix,
            MatchType::WordPrefix => self.word_prefix,
            MatchType::Contains => self.contains,
            MatchType::Fuzzy => self.fuzzy,
        }
    }

    /// Score for a non-fuzzy match on a field with `weight`.
    #[inline]
    pub fn weighted(&self, match_type: MatchType, weight: f64) -> f64 {
        self.base(match_type) * weight
    }

    /// Score for a fuzzy match at edit `distance`.
    ///
    /// Decays linearly: distance 0 keeps the full base, `max_distance + 1`
    /// would reach zero. With the default bound of 2 that is 50, 33.3, 16.7.
    pub fn fuzzy_score(&self, weight: f64, distance: usize, max_distance: usize) -> f64 {
        let decay = 1.0 - distance as f64 / (max_distance as f64 + 1.0);
        self.fuzzy * weight * decay.max(0.0)
    }
}
