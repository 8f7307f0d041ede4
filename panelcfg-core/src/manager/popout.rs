//! Popout window configuration
//!
//! A popout is a layout subtree detached into its own top-level window. It
//! carries a full manager configuration plus what is needed to dock it back
//! into the window it came from.

use serde::{Deserialize, Serialize};

use super::config::ManagerConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::item::{ItemConfig, ItemType};

/// Last known placement of a popout window. `None` means "use the default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopoutWindow {
    /// Window width in pixels
    pub width: Option<u32>,
    /// Window height in pixels
    pub height: Option<u32>,
    /// Left edge in screen pixels
    pub left: Option<i32>,
    /// Top edge in screen pixels
    pub top: Option<i32>,
    /// Whether the window was maximised
    #[serde(default)]
    pub maximised: bool,
}

/// Manager configuration of a popout window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopoutManagerConfig {
    /// Content, nested popouts and manager defaults of the window
    #[serde(flatten)]
    pub manager: ManagerConfig,
    /// Identifier of the layout node the popout was detached from
    pub parent_id: String,
    /// Position in the parent to restore into when docking
    pub index_in_parent: usize,
    /// Window placement
    pub window: PopoutWindow,
}

impl PopoutManagerConfig {
    /// Creates a popout with default manager settings.
    #[must_use]
    pub fn new(parent_id: impl Into<String>, index_in_parent: usize) -> Self {
        Self {
            manager: ManagerConfig::default(),
            parent_id: parent_id.into(),
            index_in_parent,
            window: PopoutWindow::default(),
        }
    }

    /// Moves the popout's content under a synthesized root item.
    ///
    /// The content is moved, not copied; the popout holds no content until
    /// [`restore_root_item_config`](Self::restore_root_item_config) hands
    /// it back.
    pub fn take_root_item_config(&mut self) -> ItemConfig {
        ItemConfig::root(std::mem::take(&mut self.manager.content))
    }

    /// Returns the children of a root produced by
    /// [`take_root_item_config`](Self::take_root_item_config) to the popout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedOperation`] if `root` is not a
    /// `root` item; the popout is left unchanged.
    pub fn restore_root_item_config(&mut self, root: ItemConfig) -> ConfigResult<()> {
        if root.item_type() != ItemType::Root {
            return Err(ConfigError::UnsupportedOperation(
                "only a root item can be restored into a popout",
            ));
        }
        self.manager.content = root.content;
        Ok(())
    }

    /// Consumes the popout and returns its content under a root item.
    #[must_use]
    pub fn into_root_item_config(self) -> ItemConfig {
        ItemConfig::root(self.manager.content)
    }
}
