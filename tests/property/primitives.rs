//! Properties of the string primitives and edit distance.

use proptest::prelude::*;
use tickerdex::util::{can_contain, char_mask, lower_bound, normalize, reverse_str};
use tickerdex::{levenshtein, levenshtein_bounded, levenshtein_within, Levenshtein};

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-fA-F0-9 éü]{0,10}").unwrap()
}

proptest! {
    /// Property: the mask filter never rejects a real substring.
    #[test]
    fn prop_mask_no_false_negatives(
        haystack in text_strategy(),
        start in 0usize..10,
        len in 0usize..6,
    ) {
        let haystack = normalize(&haystack);
        let chars: Vec<char> = haystack.chars().collect();
        let start = start.min(chars.len());
        let end = (start + len).min(chars.len());
        let needle: String = chars[start..end].iter().collect();

        prop_assert!(haystack.contains(&needle));
        prop_assert!(can_contain(char_mask(&haystack), char_mask(&needle)));
    }

    /// Property: normalizing twice changes nothing.
    #[test]
    fn prop_normalize_idempotent(s in text_strategy()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert_eq!(once.trim(), once.as_str());
    }

    /// Property: reversal is an involution and preserves char count.
    #[test]
    fn prop_reverse_involution(s in text_strategy()) {
        let reversed = reverse_str(&s);
        prop_assert_eq!(reversed.chars().count(), s.chars().count());
        prop_assert_eq!(reverse_str(&reversed), s);
    }

    /// Property: suffix of a string ⇔ prefix of the reversed string.
    #[test]
    fn prop_suffix_via_reversal(s in text_strategy(), cut in 0usize..10) {
        let chars: Vec<char> = s.chars().collect();
        let cut = cut.min(chars.len());
        let suffix: String = chars[cut..].iter().collect();
        prop_assert!(reverse_str(&s).starts_with(&reverse_str(&suffix)));
    }

    /// Property: lower_bound returns the first key not less than the query.
    #[test]
    fn prop_lower_bound(
        mut keys in prop::collection::vec(text_strategy(), 0..20),
        query in text_strategy(),
    ) {
        keys.sort();
        let bound = lower_bound(keys.as_slice(), &query, String::as_str);
        prop_assert!(keys[..bound].iter().all(|k| k.as_str() < query.as_str()));
        prop_assert!(keys[bound..].iter().all(|k| k.as_str() >= query.as_str()));
    }

    /// Property: edit distance is symmetric.
    #[test]
    fn prop_levenshtein_symmetric(a in text_strategy(), b in text_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    /// Property: distance to self is zero, and only to self.
    #[test]
    fn prop_levenshtein_identity(a in text_strategy(), b in text_strategy()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
        prop_assert_eq!(levenshtein(&a, &b) == 0, a == b);
    }

    /// Property: distance is at least the length difference and at most the
    /// longer length.
    #[test]
    fn prop_levenshtein_bounds(a in text_strategy(), b in text_strategy()) {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = levenshtein(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    /// Property: the bounded variant agrees with the exact distance up to the
    /// bound, and reports `max + 1` past it.
    #[test]
    fn prop_bounded_agrees(a in text_strategy(), b in text_strategy(), max in 0usize..6) {
        let exact = levenshtein(&a, &b);
        let bounded = levenshtein_bounded(&a, &b, max);
        prop_assert_eq!(bounded, exact.min(max + 1));
        prop_assert_eq!(levenshtein_within(&a, &b, max), exact <= max);
    }

    /// Property: reusing one scratch instance doesn't leak state between pairs.
    #[test]
    fn prop_scratch_reuse(
        pairs in prop::collection::vec((text_strategy(), text_strategy()), 1..8),
    ) {
        let mut scratch = Levenshtein::new();
        for (a, b) in &pairs {
            prop_assert_eq!(scratch.bounded(a, b, 3), levenshtein_bounded(a, b, 3));
            prop_assert_eq!(scratch.distance(a, b), levenshtein(a, b));
        }
    }
}
