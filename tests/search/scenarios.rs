//! End-to-end scenarios over small, hand-checked item lists.

use super::common::{instrument, instrument_config, name_index, symbols, universe_index};
use tickerdex::{build_search_index, search_index, FieldSpec, MatchType, SearchConfig};

// ============================================================================
// BASIC CASCADE
// ============================================================================

#[test]
fn test_three_coins_prefix() {
    let index = name_index(&["Bitcoin", "Ethereum", "Solana"], true);
    let results = search_index(&index, "bit");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item, "Bitcoin");
    assert_eq!(results[0].match_type(), Some(MatchType::Prefix));
    assert_eq!(results[0].score, 500.0);
}

#[test]
fn test_three_coins_trailing_fragment() {
    let index = name_index(&["Bitcoin", "Ethereum", "Solana"], true);

    // "coin" ends the value, so the suffix phase claims it
    let results = search_index(&index, "coin");
    assert_eq!(results[0].item, "Bitcoin");
    assert_eq!(results[0].match_type(), Some(MatchType::Suffix));

    // An interior fragment is a plain substring match
    let results = search_index(&index, "itco");
    assert_eq!(results[0].item, "Bitcoin");
    assert_eq!(results[0].match_type(), Some(MatchType::Contains));
    assert_eq!(results[0].score, 100.0);
}

#[test]
fn test_three_coins_exact() {
    let index = name_index(&["Bitcoin", "Ethereum", "Solana"], true);
    let results = search_index(&index, "ethereum");

    assert_eq!(results[0].item, "Ethereum");
    assert_eq!(results[0].match_type(), Some(MatchType::Exact));
    assert_eq!(results[0].score, 1000.0);
}

#[test]
fn test_heavier_field_wins_exact_tie() {
    let items = vec![instrument("XYZ", "sol"), instrument("SOL", "Solana")];
    let index = build_search_index(items, instrument_config());
    let results = search_index(&index, "sol");

    assert_eq!(symbols(&results), vec!["SOL", "XYZ"]);
    assert_eq!(results[0].score, 2000.0);
    assert_eq!(results[0].matches[0].field, "symbol");
    assert_eq!(results[1].score, 1000.0);
    assert_eq!(results[1].matches[0].field, "name");
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_long_query_never_fuzzy_matches_short_value() {
    let config = SearchConfig::new()
        .field(FieldSpec::new("name", |s: &String| s.as_str().into()).fuzzy(true))
        .fuzzy_max_distance(10);
    let index = build_search_index(vec!["Sol".to_string()], config);

    // 11 chars against 3: outside the length window even though the
    // distance (8) is under the raised bound
    assert!(search_index(&index, "solanaxxxxx").is_empty());
    // 7 chars is inside the window
    assert_eq!(
        search_index(&index, "solxxxx")[0].match_type(),
        Some(MatchType::Fuzzy)
    );
}

// ============================================================================
// INSTRUMENT UNIVERSE
// ============================================================================

#[test]
fn test_symbol_lookup() {
    let index = universe_index();
    let results = search_index(&index, "btc");

    assert_eq!(symbols(&results), vec!["BTC", "WBTC"]);
    assert_eq!(results[0].match_type(), Some(MatchType::Exact));
    assert_eq!(results[1].match_type(), Some(MatchType::Suffix));
    assert_eq!(results[1].score, 700.0);
}

#[test]
fn test_symbol_then_name_prefix_then_contains() {
    let index = universe_index();
    let results = search_index(&index, "eth");

    assert_eq!(symbols(&results), vec!["ETH", "ETC", "USDT"]);
    assert_eq!(results[1].match_type(), Some(MatchType::Prefix));
    assert_eq!(results[1].matches[0].value, "Ethereum Classic");
    // "tether" contains "eth"
    assert_eq!(results[2].match_type(), Some(MatchType::Contains));
}

#[test]
fn test_coin_fragment_across_fields() {
    let index = universe_index();
    let results = search_index(&index, "coin");

    assert_eq!(
        symbols(&results),
        vec!["BTC", "WBTC", "LTC", "DOGE", "ADA", "BCH"]
    );
    // ADA only matches through a half-weight alias
    assert_eq!(results[4].score, 175.0);
    assert_eq!(results[4].matches[0].field, "aliases");
    assert_eq!(results[4].matches[0].value, "ada coin");
    assert_eq!(results[5].match_type(), Some(MatchType::Contains));
}

#[test]
fn test_word_prefix_inside_name() {
    let index = universe_index();
    let results = search_index(&index, "cla");

    assert_eq!(results[0].item.symbol, "ETC");
    assert_eq!(results[0].match_type(), Some(MatchType::WordPrefix));
    assert_eq!(results[0].score, 300.0);
}

#[test]
fn test_alias_exact_keeps_first_phase_on_tie() {
    let index = universe_index();
    let results = search_index(&index, "tether");

    // Alias exact (1000 × 0.5) ties the name prefix (500 × 1); exact ran first
    assert_eq!(results[0].item.symbol, "USDT");
    assert_eq!(results[0].score, 500.0);
    assert_eq!(results[0].match_type(), Some(MatchType::Exact));
    assert_eq!(results[0].matches[0].field, "aliases");
}

#[test]
fn test_typos_in_names() {
    let index = universe_index();
    for (query, symbol) in [("etherium", "ETH"), ("solanna", "SOL"), ("polkadt", "DOT")] {
        let results = search_index(&index, query);
        assert_eq!(results[0].item.symbol, symbol, "query {query}");
        assert_eq!(results[0].match_type(), Some(MatchType::Fuzzy), "query {query}");
        assert!((results[0].score - 50.0 * 2.0 / 3.0).abs() < 1e-9);
    }
}

#[test]
fn test_symbols_are_not_fuzzy() {
    let index = universe_index();
    // One edit from "DOGE", but only names are fuzzy and "dogx" is too far
    // from "dogecoin"
    assert!(search_index(&index, "dogx").is_empty());
}
