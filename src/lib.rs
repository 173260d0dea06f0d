// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory, typo-tolerant search over your own item types.
//!
//! Point it at a list of items, tell it which string fields to look at and how
//! much each one matters, and it ranks items against a query by how well they
//! match: exactly, by prefix, by suffix, by a word prefix, as a substring, or
//! within a small edit distance.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  config.rs   │────▶│  index/      │────▶│  search/     │
//! │ (FieldSpec,  │     │ (prefix and  │     │ (six-phase   │
//! │ SearchOptions│     │ suffix tables│     │  cascade,    │
//! └──────────────┘     └──────────────┘     │  Searcher)   │
//!        │                   │              └──────────────┘
//!        ▼                   ▼                     │
//! ┌──────────────┐     ┌──────────────┐            ▼
//! │  util/       │     │  verify/     │     ┌──────────────┐
//! │ (normalize,  │     │ (invariant   │     │  scoring/    │
//! │  masks)      │     │  checks)     │     │ (base scores)│
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use tickerdex::{FieldSpec, MatchType, SearchConfig, Searcher};
//!
//! struct Coin {
//!     symbol: &'static str,
//!     name: &'static str,
//! }
//!
//! let config = SearchConfig::new()
//!     .field(FieldSpec::new("symbol", |c: &Coin| c.symbol.into()).weight(2.0))
//!     .field(FieldSpec::new("name", |c: &Coin| c.name.into()).fuzzy(true));
//!
//! let searcher = Searcher::new(
//!     vec![
//!         Coin { symbol: "BTC", name: "Bitcoin" },
//!         Coin { symbol: "ETH", name: "Ethereum" },
//!     ],
//!     config,
//! );
//!
//! let index = searcher.index();
//! let results = tickerdex::search_index(&index, "etherium");
//! assert_eq!(results[0].item.symbol, "ETH");
//! assert_eq!(results[0].match_type(), Some(MatchType::Fuzzy));
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod types;
pub mod util;
pub mod verify;

pub use config::{FieldSpec, FieldValue, SearchConfig, SearchOptions};
pub use error::{ConfigError, InvariantError};
pub use fuzzy::{levenshtein, levenshtein_bounded, levenshtein_within, Levenshtein};
pub use index::{build_search_index, FieldStats, IndexStats};
pub use scoring::MatchScores;
pub use search::{search, search_index, search_index_with, ScoreBoard, Searcher};
pub use types::{
    FieldId, IndexedField, IndexedItem, MatchType, PrefixEntry, SearchIndex, SearchMatch,
    SearchResult, SuffixEntry, TableEntry,
};
pub use verify::{verify_index, VerificationReport};
