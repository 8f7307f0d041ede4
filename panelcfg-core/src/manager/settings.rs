//! Manager-level behavior flags and dimensions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// When the layout collapses stacks to fit a narrow container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponsiveMode {
    /// Never adapt to the container width
    None,
    /// Adapt whenever the container is resized
    Always,
    /// Adapt once, when the layout is first loaded
    #[default]
    Onload,
}

impl fmt::Display for ResponsiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Always => write!(f, "always"),
            Self::Onload => write!(f, "onload"),
        }
    }
}

impl FromStr for ResponsiveMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "always" => Ok(Self::Always),
            "onload" => Ok(Self::Onload),
            other => Err(ConfigError::malformed(format!(
                "unknown responsive mode: {other}"
            ))),
        }
    }
}

/// Behavior flags of the layout manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Keep dragged items within the layout container
    pub constrain_drag_to_container: bool,
    /// Allow items to be dragged to new positions
    pub reorder_enabled: bool,
    /// Allow items to be selected by clicking their header
    pub selection_enabled: bool,
    /// Pop out the whole stack instead of only the active component
    pub popout_whole_stack: bool,
    /// Fail loudly when the browser blocks a popout window
    pub blocked_popouts_throw_error: bool,
    /// Close popout windows when the main window unloads
    pub close_popouts_on_unload: bool,
    /// Show the popout button in headers
    pub show_popout_icon: bool,
    /// Show the maximise button in headers
    pub show_maximise_icon: bool,
    /// Show the close button in headers
    pub show_close_icon: bool,
    /// Responsive collapsing policy
    pub responsive_mode: ResponsiveMode,
    /// Pixels by which tabs may overlap before the dropdown is used
    pub tab_overlap_allowance: u32,
    /// Move a tab to the front when picked from the tab dropdown
    pub reorder_on_tab_menu_click: bool,
    /// Pixel offset of the tab controls
    pub tab_control_offset: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            constrain_drag_to_container: true,
            reorder_enabled: true,
            selection_enabled: false,
            popout_whole_stack: false,
            blocked_popouts_throw_error: true,
            close_popouts_on_unload: true,
            show_popout_icon: true,
            show_maximise_icon: true,
            show_close_icon: true,
            responsive_mode: ResponsiveMode::Onload,
            tab_overlap_allowance: 0,
            reorder_on_tab_menu_click: true,
            tab_control_offset: 10,
        }
    }
}

/// Pixel dimensions used by the layout manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    /// Width of the splitter between items
    pub border_width: u32,
    /// Width of the grab area around a splitter
    pub border_grab_width: u32,
    /// Minimum height of an item
    pub min_item_height: u32,
    /// Minimum width of an item
    pub min_item_width: u32,
    /// Height of a stack header
    pub header_height: u32,
    /// Width of the drag proxy
    pub drag_proxy_width: u32,
    /// Height of the drag proxy
    pub drag_proxy_height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            border_width: 5,
            border_grab_width: 15,
            min_item_height: 10,
            min_item_width: 10,
            header_height: 20,
            drag_proxy_width: 300,
            drag_proxy_height: 200,
        }
    }
}
