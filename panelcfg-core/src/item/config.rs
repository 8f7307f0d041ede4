//! Layout item configuration
//!
//! An [`ItemConfig`] is one node of the layout tree. Fields shared by all
//! variants live on the struct; variant-specific fields live in
//! [`ItemKind`], which also carries the `type` tag on the wire.
//!
//! # Wire shape
//!
//! ```text
//! { "type": "stack", "content": [...], "width": 50, "minWidth": 0,
//!   "height": 50, "minHeight": 0, "id": "", "isClosable": true,
//!   "title": "", "reorderEnabled": true, "activeItemIndex": -1,
//!   "header": { ... } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::header::ItemHeader;
use super::types::{ItemId, ItemType};
use crate::error::{ConfigError, ConfigResult};

/// Reserved component name of every `react-component` item.
pub const REACT_COMPONENT_ID: &str = "lm-react-component";

/// Default width and height of an item (percent of the parent).
pub const DEFAULT_ITEM_SIZE: f64 = 50.0;

/// Width and height of a synthesized root item (percent).
pub const ROOT_ITEM_SIZE: f64 = 100.0;

/// `activeItemIndex` value meaning "no tab selected".
pub const NO_ACTIVE_ITEM: i32 = -1;

/// One node of the layout tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemConfig {
    /// Variant tag and variant-specific fields
    #[serde(flatten)]
    pub kind: ItemKind,
    /// Ordered children (empty for leaves)
    #[serde(default)]
    pub content: Vec<ItemConfig>,
    /// Width as a percentage of the parent
    pub width: f64,
    /// Absolute minimum width
    pub min_width: f64,
    /// Height as a percentage of the parent
    pub height: f64,
    /// Absolute minimum height
    pub min_height: f64,
    /// One or more identifiers
    #[serde(default)]
    pub id: ItemId,
    /// Whether the user may close the item
    pub is_closable: bool,
    /// Display title
    pub title: String,
    /// Whether the item may be dragged to a new position
    pub reorder_enabled: bool,
    /// Selected child of a stack, [`NO_ACTIVE_ITEM`] when none
    pub active_item_index: i32,
}

/// Variant-specific part of an item, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ItemKind {
    /// Synthetic root of a popout tree
    Root,
    /// Horizontal container
    Row,
    /// Vertical container
    Column,
    /// Tabbed container
    Stack {
        /// Header override (`None` inherits the manager header)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        header: Option<ItemHeader>,
    },
    /// Leaf with JSON state
    Component(JsonComponent),
    /// Leaf rendered through the framework adapter
    ReactComponent(ReactComponent),
}

/// Fields of a `component` item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonComponent {
    /// Header override (`None` inherits the manager header)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<ItemHeader>,
    /// Registered component type instantiated by the host
    pub component_name: String,
    /// Opaque JSON state handed to the component
    #[serde(default = "empty_state")]
    pub component_state: Value,
}

impl Default for JsonComponent {
    fn default() -> Self {
        Self {
            header: None,
            component_name: String::new(),
            component_state: empty_state(),
        }
    }
}

/// Fields of a `react-component` item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactComponent {
    /// Header override (`None` inherits the manager header)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<ItemHeader>,
    /// Always [`REACT_COMPONENT_ID`]
    #[serde(default = "react_component_name")]
    pub component_name: String,
    /// Opaque properties handed to the adapter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Value>,
}

impl Default for ReactComponent {
    fn default() -> Self {
        Self {
            header: None,
            component_name: react_component_name(),
            props: None,
        }
    }
}

fn empty_state() -> Value {
    Value::Object(Map::new())
}

fn react_component_name() -> String {
    REACT_COMPONENT_ID.to_string()
}

impl ItemKind {
    /// Returns the variant tag.
    #[must_use]
    pub const fn item_type(&self) -> ItemType {
        match self {
            Self::Root => ItemType::Root,
            Self::Row => ItemType::Row,
            Self::Column => ItemType::Column,
            Self::Stack { .. } => ItemType::Stack,
            Self::Component(_) => ItemType::Component,
            Self::ReactComponent(_) => ItemType::ReactComponent,
        }
    }

    /// Returns the default variant-specific fields for a tag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedOperation`] for `root`, whose
    /// defaults belong to the manager layer.
    pub fn create_default(item_type: ItemType) -> ConfigResult<Self> {
        match item_type {
            ItemType::Root => Err(ConfigError::UnsupportedOperation(
                "default root item config comes from the manager config",
            )),
            ItemType::Row => Ok(Self::Row),
            ItemType::Column => Ok(Self::Column),
            ItemType::Stack => Ok(Self::Stack { header: None }),
            ItemType::Component => Ok(Self::Component(JsonComponent::default())),
            ItemType::ReactComponent => Ok(Self::ReactComponent(ReactComponent::default())),
        }
    }
}

impl ItemConfig {
    /// Creates a default item of the given variant.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedOperation`] for [`ItemType::Root`];
    /// use [`ItemConfig::root`] to synthesize a root.
    pub fn create_default(item_type: ItemType) -> ConfigResult<Self> {
        Ok(Self::with_kind(ItemKind::create_default(item_type)?))
    }

    /// Creates an item with default shared fields around `kind`.
    #[must_use]
    pub fn with_kind(kind: ItemKind) -> Self {
        Self {
            kind,
            content: Vec::new(),
            width: DEFAULT_ITEM_SIZE,
            min_width: 0.0,
            height: DEFAULT_ITEM_SIZE,
            min_height: 0.0,
            id: ItemId::default(),
            is_closable: true,
            title: String::new(),
            reorder_enabled: true,
            active_item_index: NO_ACTIVE_ITEM,
        }
    }

    /// Synthesizes a root item owning `content`.
    #[must_use]
    pub fn root(content: Vec<Self>) -> Self {
        Self {
            kind: ItemKind::Root,
            content,
            width: ROOT_ITEM_SIZE,
            min_width: 0.0,
            height: ROOT_ITEM_SIZE,
            min_height: 0.0,
            id: ItemId::default(),
            is_closable: false,
            title: String::new(),
            reorder_enabled: false,
            active_item_index: NO_ACTIVE_ITEM,
        }
    }

    /// Creates a JSON component with the given name and state.
    #[must_use]
    pub fn component(component_name: impl Into<String>, component_state: Value) -> Self {
        Self::with_kind(ItemKind::Component(JsonComponent {
            header: None,
            component_name: component_name.into(),
            component_state,
        }))
    }

    /// Creates a stack holding `content`, with the first child active.
    #[must_use]
    pub fn stack(content: Vec<Self>) -> Self {
        let mut item = Self::with_kind(ItemKind::Stack { header: None });
        item.content = content;
        item.normalize_active_item_index();
        item
    }

    /// Returns the variant tag.
    #[must_use]
    pub const fn item_type(&self) -> ItemType {
        self.kind.item_type()
    }

    /// Returns true for `stack` items.
    #[must_use]
    pub const fn is_stack(&self) -> bool {
        matches!(self.kind, ItemKind::Stack { .. })
    }

    /// Returns true for leaf component items.
    #[must_use]
    pub const fn is_component(&self) -> bool {
        self.item_type().is_component()
    }

    /// Returns the header override of a headered item.
    #[must_use]
    pub const fn header(&self) -> Option<&ItemHeader> {
        match &self.kind {
            ItemKind::Stack { header }
            | ItemKind::Component(JsonComponent { header, .. })
            | ItemKind::ReactComponent(ReactComponent { header, .. }) => header.as_ref(),
            ItemKind::Root | ItemKind::Row | ItemKind::Column => None,
        }
    }

    /// Sets the header override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedOperation`] if the variant has no
    /// header.
    pub fn set_header(&mut self, value: Option<ItemHeader>) -> ConfigResult<()> {
        match &mut self.kind {
            ItemKind::Stack { header }
            | ItemKind::Component(JsonComponent { header, .. })
            | ItemKind::ReactComponent(ReactComponent { header, .. }) => {
                *header = value;
                Ok(())
            }
            ItemKind::Root | ItemKind::Row | ItemKind::Column => Err(
                ConfigError::UnsupportedOperation("only stacks and components carry a header"),
            ),
        }
    }

    /// Returns the registered component name of a leaf.
    #[must_use]
    pub fn component_name(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Component(component) => Some(&component.component_name),
            ItemKind::ReactComponent(component) => Some(&component.component_name),
            _ => None,
        }
    }

    /// Brings `active_item_index` of a stack back within `content`.
    ///
    /// An empty stack gets [`NO_ACTIVE_ITEM`]; an out-of-range index on a
    /// non-empty stack falls back to the first child. Returns true if the
    /// index was changed. Other variants are left untouched.
    pub fn normalize_active_item_index(&mut self) -> bool {
        if !self.is_stack() {
            return false;
        }
        let normalized = if self.content.is_empty() {
            NO_ACTIVE_ITEM
        } else if usize::try_from(self.active_item_index).is_ok_and(|i| i < self.content.len()) {
            self.active_item_index
        } else {
            0
        };
        let changed = normalized != self.active_item_index;
        self.active_item_index = normalized;
        changed
    }

    /// Returns the active child of a stack.
    #[must_use]
    pub fn active_item(&self) -> Option<&Self> {
        if !self.is_stack() {
            return None;
        }
        usize::try_from(self.active_item_index)
            .ok()
            .and_then(|index| self.content.get(index))
    }
}
