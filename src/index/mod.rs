// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structures that make search fast.
//!
//! Two sorted tables, each optimized for one query pattern:
//! - **Prefix table**: normalized values; O(log n) exact and prefix lookup
//! - **Suffix table**: reversed values; O(log n) "ends with" lookup
//!
//! The per-item indexed fields (words and char masks) serve the phases that
//! can't use a table: word prefix, substring, and fuzzy.

mod build;
pub mod stats;

pub use build::*;
pub use stats::{FieldStats, IndexStats};
