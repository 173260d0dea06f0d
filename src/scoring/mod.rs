// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how much a match is worth.
//!
//! Base scores per match type, field weighting, fuzzy decay, and the final
//! ordering of results.

mod core;
pub mod ranking;

pub use self::core::*;
