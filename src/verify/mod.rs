// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: structural checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Full verification** (`verify_index`) that walks a built index and
//!    reports the first broken invariant as an `InvariantError`.
//!
//! 2. **Runtime contracts** that panic in debug builds when the indexer or the
//!    matcher produces something malformed. Zero-cost in release.

mod types;
pub mod contracts;

pub use types::*;
