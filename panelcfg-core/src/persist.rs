//! Reading and writing resolved configurations
//!
//! Resolved configurations are stored as JSON. Before a value is handed to
//! serde, every item `type` tag in it is checked against the known variant
//! set, so an unknown tag is reported as
//! [`ConfigError::InvalidVariant`](crate::error::ConfigError::InvalidVariant)
//! instead of a generic deserialization error.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigResult, PanelCfgResult};
use crate::item::{ItemConfig, ItemType};
use crate::manager::{Config, ManagerConfigKind};
use crate::trace_operation_debug;
use crate::tracing::span_names;

/// Parses a resolved root-level configuration from JSON text.
///
/// # Errors
///
/// Returns a JSON error for invalid text or a shape mismatch, and an
/// invalid-variant error for an unknown item tag.
pub fn parse_config(json: &str) -> PanelCfgResult<Config> {
    let _span = trace_operation_debug!(span_names::CONFIG_PARSE, kind = "root").entered();
    let value: Value = serde_json::from_str(json)?;
    validate_manager_tags(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// Parses a resolved configuration of either kind from JSON text.
///
/// # Errors
///
/// See [`parse_config`].
pub fn parse_manager_config(json: &str) -> PanelCfgResult<ManagerConfigKind> {
    let _span = trace_operation_debug!(span_names::CONFIG_PARSE, kind = "any").entered();
    let value: Value = serde_json::from_str(json)?;
    validate_manager_tags(&value)?;
    Ok(ManagerConfigKind::from_value(value)?)
}

/// Parses a resolved item tree from JSON text.
///
/// # Errors
///
/// See [`parse_config`].
pub fn parse_item(json: &str) -> PanelCfgResult<ItemConfig> {
    let value: Value = serde_json::from_str(json)?;
    item_from_value(value)
}

/// Converts a JSON value holding a resolved item tree.
///
/// # Errors
///
/// See [`parse_config`].
pub fn item_from_value(value: Value) -> PanelCfgResult<ItemConfig> {
    validate_item_tags(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// Serializes a resolved configuration.
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn to_json_string(config: &Config, pretty: bool) -> PanelCfgResult<String> {
    let text = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(text)
}

/// Loads a resolved configuration from a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, otherwise see
/// [`parse_config`].
pub fn load_config_file(path: &Path) -> PanelCfgResult<Config> {
    let json = std::fs::read_to_string(path)?;
    let config = parse_config(&json)?;
    debug!(path = %path.display(), items = config.manager.item_count(), "Loaded configuration");
    Ok(config)
}

/// Writes a resolved configuration to a file as pretty JSON.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an I/O error if the file or its parent directories cannot be
/// written.
pub fn save_config_file(path: &Path, config: &Config) -> PanelCfgResult<()> {
    let _span = trace_operation_debug!(span_names::CONFIG_SAVE, path = %path.display()).entered();
    let json = to_json_string(config, true)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, json)?;
    debug!(items = config.manager.item_count(), "Saved configuration");
    Ok(())
}

/// Checks the tags of every item under a manager-shaped value, including
/// the trees of nested popouts. Shape errors are left to serde.
fn validate_manager_tags(value: &Value) -> ConfigResult<()> {
    if let Some(items) = value.get("content").and_then(Value::as_array) {
        items.iter().try_for_each(validate_item_tags)?;
    }
    if let Some(popouts) = value.get("openPopouts").and_then(Value::as_array) {
        popouts.iter().try_for_each(validate_manager_tags)?;
    }
    Ok(())
}

fn validate_item_tags(value: &Value) -> ConfigResult<()> {
    if let Some(tag) = value.get("type").and_then(Value::as_str) {
        tag.parse::<ItemType>()?;
    }
    if let Some(children) = value.get("content").and_then(Value::as_array) {
        children.iter().try_for_each(validate_item_tags)?;
    }
    Ok(())
}
