// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String primitives shared by the indexer and the matcher.
//!
//! Everything the cascade compares goes through here first: normalization and
//! tokenization on the way into the index, char masks for the substring
//! pre-filter, and the lower-bound search that turns the sorted prefix and
//! suffix tables into O(log n) lookups.

pub mod bounds;
pub mod mask;
pub mod normalize;

pub use bounds::lower_bound;
pub use mask::{can_contain, char_mask, CharMask};
pub use normalize::{normalize, reverse_str, tokenize};
