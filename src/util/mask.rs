// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Letter bitmasks for the substring pre-filter.
//!
//! A mask records which of `a`..=`z` occur in a string, one bit per letter.
//! If a field contains the query, every letter of the query is in the field,
//! so `query_mask & field_mask == query_mask` must hold. The converse is false
//! ("act" and "cat" share a mask), which is why a passing mask check is always
//! followed by a real `contains`.

/// 26-bit letter set. Bit `i` is set iff `b'a' + i` occurs.
pub type CharMask = u32;

/// All 26 letter bits.
pub const FULL_MASK: CharMask = (1 << 26) - 1;

/// Build the letter mask of a normalized string. Digits and non-ascii
/// characters don't contribute.
pub fn char_mask(normalized: &str) -> CharMask {
    normalized
        .bytes()
        .filter(u8::is_ascii_lowercase)
        .fold(0, |mask, b| mask | (1 << (b - b'a')))
}

/// Can a field with `field_mask` possibly contain a query with `query_mask`?
#[inline]
pub fn can_contain(field_mask: CharMask, query_mask: CharMask) -> bool {
    query_mask & field_mask == query_mask
}
