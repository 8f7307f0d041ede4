//! Property-based tests for resolution of user configuration
//!
//! Resolution must fill every field, clamp stack indices into range, and
//! produce configurations that survive a text round trip.

use panelcfg_core::{
    ConfigError, ItemType, ManagerConfigKind, NO_ACTIVE_ITEM, Settings, parse_config,
    resolve_config, resolve_item, to_json_string,
};
use proptest::prelude::*;
use serde_json::{Value, json};

use super::strategies::{
    json_object_strategy, json_value_strategy, name_strategy, size_strategy,
};

/// Strategy for partial user items (only a few keys given)
fn user_item_strategy() -> impl Strategy<Value = Value> {
    let leaf = (
        name_strategy(),
        json_value_strategy(),
        any::<bool>(),
        size_strategy(),
    )
        .prop_map(|(name, state, closable, height)| {
            json!({
                "type": "component",
                "componentName": name,
                "componentState": state,
                "isClosable": closable,
                "height": height
            })
        });
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            prop_oneof![Just("row"), Just("column"), Just("stack")],
            proptest::collection::vec(inner, 0..4),
            proptest::option::of(-3i32..6),
            size_strategy(),
        )
            .prop_map(|(tag, content, active, width)| {
                let mut item = json!({"type": tag, "content": content, "width": width});
                if let Some(index) = active {
                    item["activeItemIndex"] = json!(index);
                }
                item
            })
    })
}

// ============================================================================
// Property 1: Stack Index Bound
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every resolved stack has an index within its content, or none when empty
    #[test]
    fn prop_stack_index_in_range(user in user_item_strategy()) {
        let item = resolve_item(&user).expect("generated items resolve");
        let mut ok = true;
        item.walk(&mut |node, _| {
            if node.is_stack() {
                ok &= if node.content.is_empty() {
                    node.active_item_index == NO_ACTIVE_ITEM
                } else {
                    usize::try_from(node.active_item_index)
                        .is_ok_and(|index| index < node.content.len())
                };
            }
        });
        prop_assert!(ok);
    }

    /// Resolution keeps the shape of the user tree
    #[test]
    fn prop_resolution_keeps_shape(user in user_item_strategy()) {
        fn count(value: &Value) -> usize {
            1 + value["content"].as_array().map_or(0, |c| c.iter().map(count).sum())
        }
        let item = resolve_item(&user).expect("generated items resolve");
        prop_assert_eq!(item.count_items(), count(&user));
        prop_assert_eq!(item.item_type().as_str(), user["type"].as_str().unwrap_or_default());
    }
}

// ============================================================================
// Property 2: Round Trip And Defaults
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A resolved configuration survives serialization
    #[test]
    fn prop_resolved_config_round_trips(
        items in proptest::collection::vec(user_item_strategy(), 0..3),
        overlap in 0u32..50,
        pretty in any::<bool>(),
    ) {
        let config = resolve_config(&json!({
            "settings": {"tabOverlapAllowance": overlap},
            "content": items
        }))
        .expect("generated config resolves");
        let text = to_json_string(&config, pretty).expect("serializes");
        prop_assert_eq!(parse_config(&text).expect("parses"), config);
    }

    /// Unspecified settings keep their defaults
    #[test]
    fn prop_settings_defaults_retained(overlap in 0u32..100) {
        let config = resolve_config(&json!({"settings": {"tabOverlapAllowance": overlap}}))
            .expect("resolves");
        let defaults = Settings::default();
        prop_assert_eq!(config.manager.settings.tab_overlap_allowance, overlap);
        prop_assert_eq!(config.manager.settings.reorder_enabled, defaults.reorder_enabled);
        prop_assert_eq!(config.manager.settings.responsive_mode, defaults.responsive_mode);
    }

    /// Unknown tags always surface as invalid-variant errors
    #[test]
    fn prop_unknown_tag_rejected(tag in "[a-z]{3,10}") {
        prop_assume!(tag.parse::<ItemType>().is_err());
        let err = resolve_item(&json!({"type": tag.clone()})).expect_err("unknown tag");
        prop_assert_eq!(err, ConfigError::invalid_variant(tag));
    }
}

// ============================================================================
// Property 3: Popout Classification
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any object with a `parentId` key is a popout, whatever its value
    #[test]
    fn prop_parent_id_marks_popout(
        mut object in json_object_strategy(),
        marker in json_value_strategy(),
    ) {
        prop_assert!(!ManagerConfigKind::is_popout_value(&Value::Array(vec![])));
        let without = ManagerConfigKind::is_popout_value(&Value::Object(object.clone()));
        prop_assert_eq!(without, object.contains_key("parentId"));
        object.insert("parentId".to_string(), marker);
        prop_assert!(ManagerConfigKind::is_popout_value(&Value::Object(object)));
    }
}
