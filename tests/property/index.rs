//! Index construction properties.

use super::{item_config, items_strategy, weight_strategy};
use proptest::prelude::*;
use tickerdex::util::{normalize, reverse_str};
use tickerdex::verify::first_unsorted;
use tickerdex::{build_search_index, verify_index};

proptest! {
    /// Property: both tables are sorted for any input.
    #[test]
    fn prop_tables_always_sorted(items in items_strategy()) {
        let index = build_search_index(items, item_config(1.0, 1.0, false));
        prop_assert_eq!(first_unsorted(index.prefix_table()), None);
        prop_assert_eq!(first_unsorted(index.suffix_table()), None);
    }

    /// Property: every built index passes full verification.
    #[test]
    fn prop_built_index_verifies(
        items in items_strategy(),
        name_weight in weight_strategy(),
        alias_weight in weight_strategy(),
    ) {
        let index = build_search_index(items, item_config(name_weight, alias_weight, true));
        let report = verify_index(&index);
        prop_assert!(report.is_ok(), "verification failed: {:?}", report);
    }

    /// Property: one prefix and one suffix entry per non-blank value.
    #[test]
    fn prop_one_entry_per_value(items in items_strategy()) {
        let values: usize = items
            .iter()
            .map(|(name, aliases)| {
                usize::from(!name.trim().is_empty())
                    + aliases.iter().filter(|a| !a.trim().is_empty()).count()
            })
            .sum();
        let index = build_search_index(items, item_config(1.0, 1.0, false));
        prop_assert_eq!(index.prefix_table().len(), values);
        prop_assert_eq!(index.suffix_table().len(), values);
    }

    /// Property: keys are the normalized value and its reversal.
    #[test]
    fn prop_keys_derive_from_values(items in items_strategy()) {
        let index = build_search_index(items, item_config(1.0, 1.0, false));
        for entry in index.prefix_table() {
            let value = index.value(entry).unwrap();
            prop_assert_eq!(&entry.key, &normalize(&value.original));
        }
        for entry in index.suffix_table() {
            let value = index.value(entry).unwrap();
            prop_assert_eq!(&entry.key, &reverse_str(&normalize(&value.original)));
        }
    }

    /// Property: building is deterministic.
    #[test]
    fn prop_rebuild_is_identical(items in items_strategy()) {
        let a = build_search_index(items.clone(), item_config(2.0, 0.5, true));
        let b = build_search_index(items, item_config(2.0, 0.5, true));
        prop_assert_eq!(a.prefix_table(), b.prefix_table());
        prop_assert_eq!(a.suffix_table(), b.suffix_table());
    }
}
