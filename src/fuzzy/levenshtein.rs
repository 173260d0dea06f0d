// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with reusable rows and a caller-supplied bound.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance, and
//! so is the minimum of any completed DP row. Once either exceeds the bound the
//! exact distance no longer matters; [`Levenshtein::bounded`] reports
//! `max + 1` and stops. The cutoff is derived from the bound the caller passes,
//! never hardcoded, so raising `fuzzy_max_distance` can't silently turn real
//! distances into misses.
//!
//! [`Levenshtein`] owns its rows and char buffers. The matcher keeps one per
//! score board, so a search-as-you-type session compares thousands of values
//! without allocating after the first few keystrokes.

/// Reusable Levenshtein scratch space.
#[derive(Debug, Default, Clone)]
pub struct Levenshtein {
    a: Vec<char>,
    b: Vec<char>,
    prev: Vec<usize>,
    curr: Vec<usize>,
}

impl Levenshtein {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact edit distance, computed over Unicode scalar values.
    pub fn distance(&mut self, a: &str, b: &str) -> usize {
        let bound = a.chars().count().max(b.chars().count());
        self.bounded(a, b, bound)
    }

    /// Edit distance if it is `<= max`, otherwise `max + 1`.
    ///
    /// Two early exits, both sound:
    /// 1. The length difference exceeds `max`
    /// 2. Every cell of a completed row exceeds `max` (row minima never shrink)
    pub fn bounded(&mut self, a: &str, b: &str, max: usize) -> usize {
        let over = max.saturating_add(1);

        self.a.clear();
        self.a.extend(a.chars());
        self.b.clear();
        self.b.extend(b.chars());

        let (n, m) = (self.a.len(), self.b.len());
        if n.abs_diff(m) > max {
            return over;
        }
        if n == 0 || m == 0 {
            // Only reachable when the other side is within the bound
            return n.max(m);
        }

        self.prev.clear();
        self.prev.extend(0..=m);
        self.curr.clear();
        self.curr.resize(m + 1, 0);

        for i in 1..=n {
            let ac = self.a[i - 1];
            self.curr[0] = i;
            let mut row_min = i;

            for j in 1..=m {
                let cost = usize::from(ac != self.b[j - 1]);
                let cell = (self.prev[j] + 1)
                    .min(self.curr[j - 1] + 1)
                    .min(self.prev[j - 1] + cost);
                self.curr[j] = cell;
                row_min = row_min.min(cell);
            }

            if row_min > max {
                return over;
            }
            std::mem::swap(&mut self.prev, &mut self.curr);
        }

        self.prev[m].min(over)
    }
}

/// Edit distance between two strings.
pub fn levenshtein(a: &str, b: &str) -> usize {
    Levenshtein::new().distance(a, b)
}

/// Edit distance clamped to `max + 1`. See [`Levenshtein::bounded`].
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> usize {
    Levenshtein::new().bounded(a, b, max)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    levenshtein_bounded(a, b, max) <= max
}
