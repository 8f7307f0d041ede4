//! Resolution of user configuration against defaults
//!
//! A user configuration is untyped JSON in which any key may be missing.
//! Resolution deep-merges it over the compiled-in defaults, one variant at a
//! time for items, and produces a typed [`Config`] in which every field is
//! defined.
//!
//! # Example
//!
//! ```
//! use panelcfg_core::resolve::resolve_config;
//! use serde_json::json;
//!
//! let config = resolve_config(&json!({
//!     "settings": { "tabOverlapAllowance": 5 },
//!     "content": [{ "type": "stack", "content": [
//!         { "type": "component", "componentName": "editor" }
//!     ]}]
//! }))
//! .unwrap();
//!
//! assert_eq!(config.manager.settings.tab_overlap_allowance, 5);
//! assert!(config.manager.settings.reorder_enabled);
//! assert_eq!(config.manager.content[0].active_item_index, 0);
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::item::{ItemConfig, ItemKind, ItemType, REACT_COMPONENT_ID};
use crate::manager::{
    Config, Dimensions, ManagerConfig, ManagerConfigKind, ManagerHeader, PopoutManagerConfig,
    PopoutWindow, Settings,
};
use crate::merge::{deep_merge, deep_merge_into};
use crate::trace_operation;
use crate::tracing::span_names;

const TYPE_KEY: &str = "type";
const CONTENT_KEY: &str = "content";
const ACTIVE_ITEM_INDEX_KEY: &str = "activeItemIndex";

/// Resolves a root-level user configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidVariant`] for an unknown item tag,
/// [`ConfigError::UnsupportedOperation`] for a user-supplied `root` item and
/// [`ConfigError::Malformed`] for structurally invalid input.
pub fn resolve_config(user: &Value) -> ConfigResult<Config> {
    let _span = trace_operation!(span_names::CONFIG_RESOLVE, popout = false).entered();
    let map = expect_object(user, "config")?;
    let manager = resolve_manager(map)?;
    debug!(
        items = manager.item_count(),
        popouts = manager.popout_count(),
        "Resolved configuration"
    );
    Ok(Config::new(manager))
}

/// Resolves a user configuration of either shape.
///
/// A value carrying a `parentId` key resolves as a popout; anything else
/// resolves as a root-level configuration.
///
/// # Errors
///
/// See [`resolve_config`] and [`resolve_popout`].
pub fn resolve_manager_config(user: &Value) -> ConfigResult<ManagerConfigKind> {
    if ManagerConfigKind::is_popout_value(user) {
        let _span = trace_operation!(span_names::CONFIG_RESOLVE, popout = true).entered();
        resolve_popout(user).map(ManagerConfigKind::Popout)
    } else {
        resolve_config(user).map(ManagerConfigKind::Root)
    }
}

/// Resolves a popout user configuration.
///
/// # Errors
///
/// Returns [`ConfigError::Malformed`] if `parentId` is missing or not a
/// string, or if `indexInParent` is not a non-negative integer, plus every
/// error [`resolve_config`] can return for the manager part.
pub fn resolve_popout(user: &Value) -> ConfigResult<PopoutManagerConfig> {
    let map = expect_object(user, "popout")?;

    let parent_id = map
        .get("parentId")
        .and_then(Value::as_str)
        .ok_or_else(|| ConfigError::malformed("popout requires a string parentId"))?
        .to_string();

    let index_in_parent = match map.get("indexInParent") {
        None | Some(Value::Null) => 0,
        Some(value) => value
            .as_u64()
            .and_then(|index| usize::try_from(index).ok())
            .ok_or_else(|| {
                ConfigError::malformed(format!(
                    "indexInParent must be a non-negative integer, got {value}"
                ))
            })?,
    };

    let window = resolve_section(map, "window", &PopoutWindow::default())?;
    let manager = resolve_manager(map)?;

    trace!(parent_id = %parent_id, index_in_parent, "Resolved popout");

    Ok(PopoutManagerConfig {
        manager,
        parent_id,
        index_in_parent,
        window,
    })
}

/// Resolves one user item (and its children) against its variant defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Malformed`] if the item is not an object, has no
/// string `type`, is a component without a `componentName`, or has fields
/// of the wrong JSON kind; [`ConfigError::InvalidVariant`] for an unknown
/// tag; [`ConfigError::UnsupportedOperation`] for `root`.
pub fn resolve_item(user: &Value) -> ConfigResult<ItemConfig> {
    let map = expect_object(user, "item")?;
    let tag = map
        .get(TYPE_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| ConfigError::malformed("item is missing a string `type`"))?;
    let item_type: ItemType = tag.parse()?;

    let defaults = ItemConfig::create_default(item_type)?;
    let mut merged = match to_json(&defaults)? {
        Value::Object(map) => map,
        other => {
            return Err(ConfigError::malformed(format!(
                "default {item_type} item is not an object: {other}"
            )));
        }
    };

    let overrides: Map<String, Value> = map
        .iter()
        .filter(|(key, _)| key.as_str() != CONTENT_KEY)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    deep_merge(&mut merged, &overrides);

    let mut item: ItemConfig = serde_json::from_value(Value::Object(merged))
        .map_err(|e| ConfigError::malformed(format!("{item_type} item: {e}")))?;
    item.content = resolve_items(map.get(CONTENT_KEY))?;

    match &mut item.kind {
        ItemKind::Component(component) if component.component_name.is_empty() => {
            return Err(ConfigError::malformed(
                "component item requires a componentName",
            ));
        }
        ItemKind::ReactComponent(component) if component.component_name != REACT_COMPONENT_ID => {
            trace!(
                given = %component.component_name,
                "Replacing componentName of react-component item"
            );
            component.component_name = REACT_COMPONENT_ID.to_string();
        }
        _ => {}
    }

    let requested_index = item.active_item_index;
    if item.normalize_active_item_index() && map.contains_key(ACTIVE_ITEM_INDEX_KEY) {
        warn!(
            requested = requested_index,
            normalized = item.active_item_index,
            children = item.content.len(),
            "Stack activeItemIndex out of range"
        );
    }

    Ok(item)
}

fn resolve_items(value: Option<&Value>) -> ConfigResult<Vec<ItemConfig>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(resolve_item).collect(),
        Some(other) => Err(ConfigError::malformed(format!(
            "content must be an array, got {other}"
        ))),
    }
}

fn resolve_manager(user: &Map<String, Value>) -> ConfigResult<ManagerConfig> {
    let dimensions = resolve_section(user, "dimensions", &Dimensions::default())?;
    let settings = resolve_section(user, "settings", &Settings::default())?;
    let header = resolve_section(user, "header", &ManagerHeader::default())?;
    let content = resolve_items(user.get(CONTENT_KEY))?;

    let open_popouts = match user.get("openPopouts") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(popouts)) => popouts
            .iter()
            .map(resolve_popout)
            .collect::<ConfigResult<_>>()?,
        Some(other) => {
            return Err(ConfigError::malformed(format!(
                "openPopouts must be an array, got {other}"
            )));
        }
    };

    Ok(ManagerConfig {
        content,
        open_popouts,
        dimensions,
        settings,
        header,
    })
}

/// Deep-merges `user[key]` over `defaults` and converts the result back.
fn resolve_section<T>(user: &Map<String, Value>, key: &str, defaults: &T) -> ConfigResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = to_json(defaults)?;
    if let Some(overrides) = user.get(key) {
        deep_merge_into(&mut merged, overrides);
    }
    serde_json::from_value(merged).map_err(|e| ConfigError::malformed(format!("{key}: {e}")))
}

fn to_json<T: Serialize>(value: &T) -> ConfigResult<Value> {
    serde_json::to_value(value).map_err(|e| ConfigError::malformed(e.to_string()))
}

fn expect_object<'a>(value: &'a Value, what: &str) -> ConfigResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ConfigError::malformed(format!("{what} must be an object, got {value}")))
}
