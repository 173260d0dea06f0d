//! Ranking: weights, match-type ladder, tiebreaks, and score overrides.

use super::common::{assert_ranked, name_config, name_index, names, strings, universe_index};
use tickerdex::{
    build_search_index, search_index, FieldSpec, MatchScores, MatchType, SearchConfig,
};

#[test]
fn test_match_type_ladder() {
    // Shuffled so input order can't explain the result order
    let index = name_index(
        &["cion", "bitcoins", "the coins fund", "coinbase", "bitcoin", "coin"],
        true,
    );
    let results = search_index(&index, "coin");

    assert_eq!(
        names(&results),
        vec!["coin", "coinbase", "bitcoin", "the coins fund", "bitcoins", "cion"]
    );
    let types: Vec<MatchType> = results.iter().filter_map(|r| r.match_type()).collect();
    assert_eq!(types, MatchType::ALL.to_vec());
    assert_ranked(&results);
}

#[test]
fn test_weight_can_lift_prefix_over_exact() {
    #[derive(Debug)]
    struct Pair {
        code: &'static str,
        label: &'static str,
    }

    let config = SearchConfig::new()
        .field(FieldSpec::new("code", |p: &Pair| p.code.into()).weight(3.0))
        .field(FieldSpec::new("label", |p: &Pair| p.label.into()));
    let items = vec![
        Pair { code: "", label: "abc" },
        Pair { code: "ABCD", label: "" },
    ];
    let index = build_search_index(items, config);
    let results = search_index(&index, "abc");

    assert_eq!(results[0].item.code, "ABCD");
    assert_eq!(results[0].match_type(), Some(MatchType::Prefix));
    assert_eq!(results[0].score, 1500.0);
    assert_eq!(results[1].match_type(), Some(MatchType::Exact));
    assert_eq!(results[1].score, 1000.0);
}

#[test]
fn test_equal_scores_keep_input_order() {
    let forward = name_index(&["alpha one", "alpha two", "alpha three"], false);
    assert_eq!(
        names(&search_index(&forward, "alpha")),
        vec!["alpha one", "alpha two", "alpha three"]
    );

    let reversed = name_index(&["alpha three", "alpha two", "alpha one"], false);
    assert_eq!(
        names(&search_index(&reversed, "alpha")),
        vec!["alpha three", "alpha two", "alpha one"]
    );
}

#[test]
fn test_fuzzy_score_decays_with_distance() {
    let index = name_index(&["solana", "solanx", "solaxx"], true);
    let results = search_index(&index, "solana");

    assert_eq!(names(&results), vec!["solana", "solanx", "solaxx"]);
    assert_eq!(results[0].score, 1000.0);
    assert!((results[1].score - 50.0 * 2.0 / 3.0).abs() < 1e-9);
    assert!((results[2].score - 50.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_overridden_scores_still_max_wins() {
    // Contains now outranks prefix, so a prefix hit must be upgraded
    let scores = MatchScores {
        contains: 600.0,
        ..MatchScores::default()
    };
    let config = name_config(false).match_scores(scores);
    let index = build_search_index(strings(&["coinbase", "bitcoin"]), config);
    let results = search_index(&index, "coin");

    assert_eq!(names(&results), vec!["coinbase", "bitcoin"]);
    assert_eq!(results[0].match_type(), Some(MatchType::Contains));
    assert_eq!(results[0].score, 600.0);
    assert_eq!(results[1].match_type(), Some(MatchType::Contains));
}

#[test]
fn test_every_query_is_ranked() {
    let index = universe_index();
    for query in ["b", "bi", "co", "e", "et", "usd", "o", "ada", "do", "c"] {
        let results = search_index(&index, query);
        assert_ranked(&results);
        for result in &results {
            assert_eq!(result.matches.len(), 1);
            assert_eq!(result.matches[0].score, result.score);
            assert!(result.score > 0.0);
        }
    }
}
