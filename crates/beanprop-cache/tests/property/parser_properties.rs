//! Property tests for the key property list grammar and the cache built on it.

use beanprop_cache::{parse_key_property_list, NamePropertyCache};
use beanprop_core::types::NameSet;
use beanprop_core::ObjectName;
use proptest::prelude::*;

fn key() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_. -]{0,11}"
}

fn unquoted_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_. /-]{0,12}"
}

/// A quoted value with escapes, in its raw encoded form.
fn quoted_value() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z0-9,=:*? ]{1,4}",
            Just("\\\"".to_string()),
            Just("\\\\".to_string()),
            Just("\\?".to_string()),
        ],
        0..6,
    )
    .prop_map(|parts| format!("\"{}\"", parts.concat()))
}

fn value() -> impl Strategy<Value = String> {
    prop_oneof![unquoted_value(), quoted_value()]
}

/// Pairs with distinct keys, so the expected list is the input itself.
fn pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map(key(), value(), 1..8).prop_map(|m| m.into_iter().collect())
}

fn encode(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(",")
}

proptest! {
    #[test]
    fn parse_is_deterministic(input in ".{0,64}") {
        prop_assert_eq!(parse_key_property_list(&input), parse_key_property_list(&input));
    }

    #[test]
    fn parse_recovers_encoded_pairs(pairs in pairs()) {
        let parsed = parse_key_property_list(&encode(&pairs));
        let actual: Vec<(String, String)> = parsed
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        prop_assert_eq!(actual, pairs);
    }

    #[test]
    fn parsed_pairs_are_substrings_of_input(input in "[a-c,=:\"\\\\*? ]{0,48}") {
        let parsed = parse_key_property_list(&input);
        for (k, v) in parsed.iter() {
            prop_assert!(!k.is_empty());
            prop_assert!(input.contains(k));
            prop_assert!(input.contains(v));
        }
    }

    #[test]
    fn reconcile_leaves_subset_of_live_set(
        all in prop::collection::btree_set("[a-z]{1,6}", 0..24),
        keep_mask in prop::collection::vec(any::<bool>(), 24),
    ) {
        let cache = NamePropertyCache::default();
        let names: Vec<ObjectName> = all
            .iter()
            .map(|v| ObjectName::new("test", format!("name={v}")))
            .collect();
        for n in &names {
            cache.get_key_property_list(n);
        }

        let live: NameSet = names
            .iter()
            .zip(&keep_mask)
            .filter(|(_, keep)| **keep)
            .map(|(n, _)| n.clone())
            .collect();
        cache.reconcile(&live);

        prop_assert_eq!(cache.property_entry_count(), live.len());
        for n in &names {
            prop_assert_eq!(cache.contains_properties(n), live.contains(n));
        }
    }
}
