// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! One implementation, two entry points: free functions for one-off
//! comparisons, and the [`Levenshtein`] scratch struct for the matcher's hot
//! loop where the rows get reused across every candidate value.

mod levenshtein;

pub use levenshtein::*;
