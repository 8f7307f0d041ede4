//! Property-based tests for the deep merge engine
//!
//! Objects merge key by key; every other source value replaces the target
//! value wholesale.

use panelcfg_core::merge::{deep_clone, deep_merge, deep_merge_value, merge_layers};
use proptest::prelude::*;
use serde_json::{Map, Value};

use super::strategies::{json_object_strategy, json_value_strategy};

// ============================================================================
// Property 1: Source Wins For Non-Objects
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every non-object source value appears unchanged in the result
    #[test]
    fn prop_non_object_source_values_replace(
        target in json_object_strategy(),
        source in json_object_strategy(),
    ) {
        let mut merged = target.clone();
        deep_merge(&mut merged, &source);

        for (key, value) in &source {
            if !value.is_object() {
                prop_assert_eq!(merged.get(key), Some(value), "key {}", key);
            }
        }
    }

    /// Keys absent from the source keep their target value
    #[test]
    fn prop_untouched_keys_are_retained(
        target in json_object_strategy(),
        source in json_object_strategy(),
    ) {
        let mut merged = target.clone();
        deep_merge(&mut merged, &source);

        for (key, value) in &target {
            if !source.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
        prop_assert!(merged.len() >= target.len());
    }

    /// Merging the same source twice equals merging it once
    #[test]
    fn prop_merge_is_idempotent(
        target in json_object_strategy(),
        source in json_object_strategy(),
    ) {
        let mut once = target.clone();
        deep_merge(&mut once, &source);
        let mut twice = once.clone();
        deep_merge(&mut twice, &source);
        prop_assert_eq!(once, twice);
    }

    /// Merging into an empty object reproduces the source
    #[test]
    fn prop_merge_into_empty_is_copy(source in json_object_strategy()) {
        let mut merged = Map::new();
        deep_merge(&mut merged, &source);
        prop_assert_eq!(merged, source);
    }
}

// ============================================================================
// Property 2: Single Value Path
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A clone equals its original
    #[test]
    fn prop_deep_clone_equals(value in json_value_strategy()) {
        prop_assert_eq!(deep_clone(&value), value);
    }

    /// Arrays are never merged element-wise with an existing array
    #[test]
    fn prop_arrays_replace(
        existing in proptest::collection::vec(json_value_strategy(), 0..4),
        value in proptest::collection::vec(json_value_strategy(), 0..4),
    ) {
        let merged = deep_merge_value(Some(Value::Array(existing)), &Value::Array(value.clone()));
        prop_assert_eq!(merged, Value::Array(value));
    }

    /// Folding layers gives the last layer priority
    #[test]
    fn prop_last_layer_wins(
        first in json_object_strategy(),
        second in json_object_strategy(),
    ) {
        let merged = merge_layers([Value::Object(first), Value::Object(second.clone())]);
        for (key, value) in &second {
            if !value.is_object() {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
    }
}
