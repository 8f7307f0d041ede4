//! Strategies shared by the property test modules

use panelcfg_core::{ItemConfig, ItemId, ItemType};
use proptest::prelude::*;
use serde_json::{Map, Value};

/// Strategy for short lowercase identifiers
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

/// Strategy for item sizes, mostly fractional
pub fn size_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        (0u8..=100).prop_map(f64::from),
        0.0f64..100.0,
    ]
}

/// Strategy for JSON scalars, integers and finite floats included
pub fn json_scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::from),
        "[a-z ]{0,10}".prop_map(Value::String),
    ]
}

/// Strategy for arbitrary JSON values up to a small depth
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    json_scalar_strategy().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map(name_strategy(), inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// Strategy for JSON objects
pub fn json_object_strategy() -> impl Strategy<Value = Map<String, Value>> {
    proptest::collection::btree_map(name_strategy(), json_value_strategy(), 0..6)
        .prop_map(|entries| entries.into_iter().collect::<Map<String, Value>>())
}

/// Strategy for item identifiers
pub fn item_id_strategy() -> impl Strategy<Value = ItemId> {
    prop_oneof![
        Just(ItemId::default()),
        name_strategy().prop_map(ItemId::Single),
        proptest::collection::vec(name_strategy(), 1..3).prop_map(ItemId::Multiple),
    ]
}

/// Strategy for leaf items
pub fn leaf_item_strategy() -> impl Strategy<Value = ItemConfig> {
    prop_oneof![
        (name_strategy(), json_value_strategy())
            .prop_map(|(name, state)| ItemConfig::component(name, state)),
        proptest::option::of(json_value_strategy()).prop_map(|props| {
            let mut item = ItemConfig::with_kind(panelcfg_core::ItemKind::ReactComponent(
                panelcfg_core::ReactComponent::default(),
            ));
            if let panelcfg_core::ItemKind::ReactComponent(component) = &mut item.kind {
                component.props = props;
            }
            item
        }),
    ]
}

/// Strategy for item trees of rows, columns and stacks over leaves
pub fn item_tree_strategy() -> impl Strategy<Value = ItemConfig> {
    let leaf = (
        leaf_item_strategy(),
        item_id_strategy(),
        size_strategy(),
        size_strategy(),
    )
        .prop_map(|(mut item, id, width, height)| {
            item.id = id;
            item.width = width;
            item.height = height;
            item
        });
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            prop_oneof![
                Just(ItemType::Row),
                Just(ItemType::Column),
                Just(ItemType::Stack)
            ],
            proptest::collection::vec(inner, 0..4),
            "[a-z]{0,6}",
        )
            .prop_map(|(item_type, content, title)| {
                let mut item = if item_type == ItemType::Stack {
                    ItemConfig::stack(content)
                } else {
                    let mut item = ItemConfig::with_kind(
                        panelcfg_core::ItemKind::create_default(item_type)
                            .expect("non-root defaults exist"),
                    );
                    item.content = content;
                    item
                };
                item.title = title;
                item
            })
    })
}
