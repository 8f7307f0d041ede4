//! Resolve, save, load and copy round trips

use panelcfg_core::{
    Config, ConfigError, DeepCopy, ItemKind, ItemType, PanelCfgError, REACT_COMPONENT_ID,
    load_config_file, merge::deep_merge, parse_config, resolve_config, save_config_file,
    to_json_string,
};
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn workspace_user_config() -> Value {
    json!({
        "settings": {"tabOverlapAllowance": 5, "showPopoutIcon": false},
        "dimensions": {"minItemWidth": 20},
        "header": {"maximise": false},
        "content": [{
            "type": "row",
            "content": [
                {
                    "type": "stack",
                    "id": "editors",
                    "activeItemIndex": 1,
                    "content": [
                        {"type": "component", "componentName": "editor",
                         "componentState": {"file": "main.rs", "cursor": [10, 4]}},
                        {"type": "component", "componentName": "editor",
                         "componentState": {"file": "lib.rs"}, "title": "lib.rs"}
                    ]
                },
                {
                    "type": "column",
                    "width": 30,
                    "content": [
                        {"type": "react-component", "componentName": "ignored",
                         "props": {"theme": "dark"}},
                        {"type": "component", "componentName": "terminal", "id": ["term", "shell"]}
                    ]
                }
            ]
        }],
        "openPopouts": [{
            "parentId": "editors",
            "indexInParent": 2,
            "window": {"width": 800, "height": 600},
            "content": [{"type": "component", "componentName": "log"}]
        }]
    })
}

#[test]
fn settings_merge_end_to_end() {
    let mut defaults = object(json!({"tabOverlapAllowance": 0, "reorderEnabled": true}));
    deep_merge(&mut defaults, &object(json!({"tabOverlapAllowance": 5})));
    assert_eq!(
        Value::Object(defaults),
        json!({"tabOverlapAllowance": 5, "reorderEnabled": true})
    );

    let config = resolve_config(&json!({"settings": {"tabOverlapAllowance": 5}})).unwrap();
    assert_eq!(config.manager.settings.tab_overlap_allowance, 5);
    assert!(config.manager.settings.reorder_enabled);
}

#[test]
fn workspace_resolves_fully() {
    let config = resolve_config(&workspace_user_config()).unwrap();
    let manager = &config.manager;

    assert!(!manager.settings.show_popout_icon);
    assert!(manager.settings.show_maximise_icon);
    assert_eq!(manager.dimensions.min_item_width, 20);
    assert_eq!(manager.dimensions.header_height, 20);

    let row = &manager.content[0];
    assert_eq!(row.item_type(), ItemType::Row);
    assert_eq!(row.count_by_type().get(&ItemType::Component), Some(&3));
    assert_eq!(row.depth(), 3);

    let stack = &manager.content[0].content[0];
    assert_eq!(stack.active_item_index, 1);
    assert_eq!(stack.active_item().map(|item| item.title.as_str()), Some("lib.rs"));

    let react = &row.content[1].content[0];
    assert_eq!(react.component_name(), Some(REACT_COMPONENT_ID));

    assert_eq!(manager.find_by_id("shell").len(), 1);
    assert_eq!(manager.open_popouts[0].window.width, Some(800));
    assert_eq!(manager.open_popouts[0].index_in_parent, 2);
}

#[test]
fn resolved_config_survives_files() {
    let config = resolve_config(&workspace_user_config()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layouts").join("workspace.json");

    save_config_file(&path, &config).unwrap();
    let loaded = load_config_file(&path).unwrap();
    assert_eq!(loaded, config);

    let compact = to_json_string(&loaded, false).unwrap();
    assert!(!compact.contains('\n'));
    assert_eq!(parse_config(&compact).unwrap(), config);
}

#[test]
fn copy_before_edit_keeps_snapshot() {
    let config = resolve_config(&workspace_user_config()).unwrap();
    let snapshot = config.deep_copy();

    let mut edited = config;
    if let ItemKind::Component(component) = &mut edited.manager.content[0].content[0].content[0].kind
    {
        component.component_state["cursor"][0] = json!(99);
    }
    edited.manager.open_popouts[0].window.maximised = true;

    assert_ne!(edited, snapshot);
    let original = resolve_config(&workspace_user_config()).unwrap();
    assert_eq!(snapshot, original);
}

#[test]
fn stored_unknown_tag_is_rejected() {
    let config = resolve_config(&workspace_user_config()).unwrap();
    let mut value = serde_json::to_value(&config).unwrap();
    value["content"][0]["content"][1]["type"] = json!("grid");

    let err = parse_config(&value.to_string()).unwrap_err();
    assert!(matches!(
        err,
        PanelCfgError::Config(ConfigError::InvalidVariant { ref tag }) if tag == "grid"
    ));
}

#[test]
fn default_config_matches_empty_user_config() {
    assert_eq!(resolve_config(&json!({})).unwrap(), Config::default());
}
