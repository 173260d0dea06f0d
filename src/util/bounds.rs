// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lower-bound binary search over sorted tables.

/// First position whose key is `>= query`, or `sorted.len()` if none is.
///
/// Keys compare as byte strings, the same order `str::cmp` uses when the
/// tables are sorted. Every key that starts with `query` sorts at or after
/// `query` and before any key that doesn't, so a forward scan from the
/// returned position visits exactly the prefix matches before the first miss.
pub fn lower_bound<E, F>(sorted: &[E], query: &str, key: F) -> usize
where
    F: Fn(&E) -> &str,
{
    sorted.partition_point(|entry| key(entry) < query)
}
