//! Manager and popout configuration model
//!
//! This module provides the containers around an item tree: the manager
//! defaults (settings, dimensions, header labels), the list of open popout
//! windows, and the popout-specific placement and docking fields.
//!
//! # Module Structure
//!
//! - `settings` - Behavior flags and dimensions (`Settings`, `ResponsiveMode`, `Dimensions`)
//! - `header` - Header defaults (`ManagerHeader`)
//! - `popout` - Detached windows (`PopoutManagerConfig`, `PopoutWindow`)
//! - `config` - Containers (`ManagerConfig`, `Config`, `ManagerConfigKind`)
//!
//! # Example
//!
//! ```
//! use panelcfg_core::item::{ItemConfig, ItemType};
//! use panelcfg_core::manager::PopoutManagerConfig;
//! use serde_json::json;
//!
//! let mut popout = PopoutManagerConfig::new("stack-1", 0);
//! popout.manager.content = vec![ItemConfig::component("editor", json!({}))];
//!
//! // Re-attach the popout tree under a synthetic root, then hand it back
//! let root = popout.take_root_item_config();
//! assert_eq!(root.item_type(), ItemType::Root);
//! popout.restore_root_item_config(root).unwrap();
//! assert_eq!(popout.manager.content.len(), 1);
//! ```

mod config;
mod header;
mod popout;
mod settings;

pub use config::{Config, ManagerConfig, ManagerConfigKind, POPOUT_MARKER_KEY, Resolved};
pub use header::ManagerHeader;
pub use popout::{PopoutManagerConfig, PopoutWindow};
pub use settings::{Dimensions, ResponsiveMode, Settings};
