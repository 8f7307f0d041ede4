//! Layout item variant model
//!
//! This module provides the tree type describing how a workspace is
//! subdivided: rows, columns, tabbed stacks and leaf components, plus the
//! synthetic root used to re-attach popout trees.
//!
//! # Module Structure
//!
//! - `types` - Variant tag and identifiers (`ItemType`, `ItemId`)
//! - `header` - Header override algebra (`ItemHeader`, `HeaderShow`, `HeaderLabel`)
//! - `config` - The item node itself (`ItemConfig`, `ItemKind`)
//! - `tree` - Read-only traversal helpers
//!
//! # Example
//!
//! ```
//! use panelcfg_core::item::{ItemConfig, ItemType};
//! use serde_json::json;
//!
//! let editor = ItemConfig::component("editor", json!({"file": "main.rs"}));
//! let stack = ItemConfig::stack(vec![editor]);
//! assert_eq!(stack.item_type(), ItemType::Stack);
//! assert_eq!(stack.active_item_index, 0);
//!
//! // Root defaults belong to the manager layer
//! assert!(ItemConfig::create_default(ItemType::Root).is_err());
//! ```

mod config;
mod header;
mod tree;
mod types;

pub use config::{
    DEFAULT_ITEM_SIZE, ItemConfig, ItemKind, JsonComponent, NO_ACTIVE_ITEM, REACT_COMPONENT_ID,
    ROOT_ITEM_SIZE, ReactComponent,
};
pub use header::{EffectiveHeader, HeaderLabel, HeaderShow, ItemHeader, Side};
pub use tree::find_in_content;
pub use types::{ItemId, ItemType};
