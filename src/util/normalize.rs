// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalization and tokenization.
//!
//! Every comparison in the engine runs on normalized text: lowercase, with
//! leading and trailing whitespace removed. Interior whitespace is kept as-is,
//! so "Wrapped Ether" and "wrapped  ether" are different keys. Tokens are the
//! maximal runs of ascii letters and digits; everything else (spaces,
//! punctuation, non-ascii letters) separates them.

/// Lowercase and trim a string for comparison.
///
/// ```
/// use tickerdex::util::normalize;
///
/// assert_eq!(normalize("  Bitcoin Cash "), "bitcoin cash");
/// assert_eq!(normalize("ETH/USD"), "eth/usd");
/// ```
pub fn normalize(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

/// Split normalized text into ascii alphanumeric words.
///
/// Expects input that has already been through [`normalize`]; uppercase ascii
/// letters are treated as separators like any other non-token character.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reverse a string by Unicode scalar value.
///
/// Used to key the suffix table: "ends with q" becomes "starts with
/// reverse(q)" over reversed keys. Reversing by `char` keeps the result valid
/// UTF-8, and both sides of the comparison go through the same function.
pub fn reverse_str(value: &str) -> String {
    value.chars().rev().collect()
}
