//! Shared test utilities and fixtures.

#![allow(dead_code)]

use tickerdex::{build_search_index, FieldSpec, SearchConfig, SearchIndex, SearchResult};

// ============================================================================
// FIXTURES
// ============================================================================

/// A tradable instrument, the shape the engine is usually pointed at.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    pub aliases: Vec<String>,
}

pub fn instrument(symbol: &str, name: &str) -> Instrument {
    Instrument {
        symbol: symbol.to_string(),
        name: name.to_string(),
        aliases: Vec::new(),
    }
}

pub fn with_aliases(mut instrument: Instrument, aliases: &[&str]) -> Instrument {
    instrument.aliases = aliases.iter().map(|a| a.to_string()).collect();
    instrument
}

/// symbol ×2, name ×1 (fuzzy), aliases ×0.5.
pub fn instrument_config() -> SearchConfig<Instrument> {
    SearchConfig::new()
        .field(FieldSpec::new("symbol", |i: &Instrument| i.symbol.as_str().into()).weight(2.0))
        .field(FieldSpec::new("name", |i: &Instrument| i.name.as_str().into()).fuzzy(true))
        .field(
            FieldSpec::new("aliases", |i: &Instrument| i.aliases.as_slice().into()).weight(0.5),
        )
}

/// A small but realistic listing.
pub fn crypto_universe() -> Vec<Instrument> {
    vec![
        instrument("BTC", "Bitcoin"),
        instrument("ETH", "Ethereum"),
        instrument("SOL", "Solana"),
        instrument("BCH", "Bitcoin Cash"),
        instrument("WBTC", "Wrapped Bitcoin"),
        instrument("LTC", "Litecoin"),
        instrument("DOGE", "Dogecoin"),
        with_aliases(instrument("ADA", "Cardano"), &["ada coin"]),
        instrument("DOT", "Polkadot"),
        instrument("ETC", "Ethereum Classic"),
        with_aliases(instrument("USDT", "Tether USD"), &["tether", "usd tether"]),
        instrument("XRP", "XRP"),
    ]
}

pub fn universe_index() -> SearchIndex<Instrument> {
    build_search_index(crypto_universe(), instrument_config())
}

/// Single-field config over plain strings.
pub fn name_config(fuzzy: bool) -> SearchConfig<String> {
    SearchConfig::new().field(FieldSpec::new("name", |s: &String| s.as_str().into()).fuzzy(fuzzy))
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn name_index(values: &[&str], fuzzy: bool) -> SearchIndex<String> {
    build_search_index(strings(values), name_config(fuzzy))
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

pub fn symbols(results: &[SearchResult<&Instrument>]) -> Vec<String> {
    results.iter().map(|r| r.item.symbol.clone()).collect()
}

pub fn names(results: &[SearchResult<&String>]) -> Vec<String> {
    results.iter().map(|r| r.item.to_string()).collect()
}

/// Scores must never increase down the list.
pub fn assert_ranked<T>(results: &[SearchResult<T>]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results out of order: {} before {}",
            pair[0].score,
            pair[1].score
        );
    }
}
