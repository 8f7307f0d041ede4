//! `PanelCfg` Core Library
//!
//! This crate provides the configuration model of a panel layout manager:
//! the tree of layout items, the manager and popout containers around it,
//! and the generic deep-merge and deep-copy engines that resolve user input
//! against defaults and move trees between windows.
//!
//! # Crate Structure
//!
//! - [`item`] - Layout item variants (row, column, stack, component, root)
//! - [`manager`] - Manager defaults, root and popout configurations
//! - [`merge`] - Deep merge of untyped JSON objects
//! - [`copy`] - Storage-independent copies of configuration values
//! - [`resolve`] - Resolution of partial user input against defaults
//! - [`persist`] - JSON text and file I/O for resolved configurations
//! - [`error`] - Error types
//! - [`tracing`] - Structured logging setup and span names

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod copy;
pub mod error;
pub mod item;
pub mod manager;
pub mod merge;
pub mod persist;
pub mod resolve;
pub mod tracing;

pub use copy::{DeepCopy, copy_content, copy_open_popouts};
pub use error::{ConfigError, ConfigResult, PanelCfgError, PanelCfgResult};
pub use item::{
    DEFAULT_ITEM_SIZE, EffectiveHeader, HeaderLabel, HeaderShow, ItemConfig, ItemHeader, ItemId,
    ItemKind, ItemType, JsonComponent, NO_ACTIVE_ITEM, REACT_COMPONENT_ID, ROOT_ITEM_SIZE,
    ReactComponent, Side,
};
pub use manager::{
    Config, Dimensions, ManagerConfig, ManagerConfigKind, ManagerHeader, POPOUT_MARKER_KEY,
    PopoutManagerConfig, PopoutWindow, Resolved, ResponsiveMode, Settings,
};
pub use merge::{deep_clone, deep_merge, deep_merge_value, merge_layers};
pub use persist::{
    item_from_value, load_config_file, parse_config, parse_item, parse_manager_config,
    save_config_file, to_json_string,
};
pub use resolve::{resolve_config, resolve_item, resolve_manager_config, resolve_popout};
pub use self::tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, get_tracing_config,
    init_tracing, is_tracing_initialized, span_names,
};
