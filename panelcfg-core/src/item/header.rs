//! Header overrides for stacks and components
//!
//! Header fields on the wire are either `false` (feature disabled), a
//! display label string, or absent (inherit from the manager header).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::manager::ManagerHeader;

/// Side of an item on which its header is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Above the content (default)
    #[default]
    Top,
    /// Left of the content
    Left,
    /// Right of the content
    Right,
    /// Below the content
    Bottom,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

/// Whether and where a header is shown. `false` on the wire hides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawShow", into = "RawShow")]
pub enum HeaderShow {
    /// Header is not shown.
    Hidden,
    /// Header is shown on the given side.
    Side(Side),
}

impl Default for HeaderShow {
    fn default() -> Self {
        Self::Side(Side::Top)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawShow {
    Flag(bool),
    Side(Side),
}

impl TryFrom<RawShow> for HeaderShow {
    type Error = ConfigError;

    fn try_from(raw: RawShow) -> Result<Self, Self::Error> {
        match raw {
            RawShow::Flag(false) => Ok(Self::Hidden),
            RawShow::Flag(true) => Err(ConfigError::malformed(
                "header.show must be false or a side",
            )),
            RawShow::Side(side) => Ok(Self::Side(side)),
        }
    }
}

impl From<HeaderShow> for RawShow {
    fn from(show: HeaderShow) -> Self {
        match show {
            HeaderShow::Hidden => Self::Flag(false),
            HeaderShow::Side(side) => Self::Side(side),
        }
    }
}

/// A header button label. `false` on the wire disables the button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLabel", into = "RawLabel")]
pub enum HeaderLabel {
    /// Button is disabled.
    Disabled,
    /// Button is enabled with the given tooltip label.
    Label(String),
}

impl HeaderLabel {
    /// Creates an enabled label.
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    /// Returns the label text, if enabled.
    #[must_use]
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Disabled => None,
            Self::Label(text) => Some(text),
        }
    }

    /// Returns true if the button is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Label(_))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Flag(bool),
    Text(String),
}

impl TryFrom<RawLabel> for HeaderLabel {
    type Error = ConfigError;

    fn try_from(raw: RawLabel) -> Result<Self, Self::Error> {
        match raw {
            RawLabel::Flag(false) => Ok(Self::Disabled),
            RawLabel::Flag(true) => Err(ConfigError::malformed(
                "header label must be false or a string",
            )),
            RawLabel::Text(text) => Ok(Self::Label(text)),
        }
    }
}

impl From<HeaderLabel> for RawLabel {
    fn from(label: HeaderLabel) -> Self {
        match label {
            HeaderLabel::Disabled => Self::Flag(false),
            HeaderLabel::Label(text) => Self::Text(text),
        }
    }
}

/// Per-item header override. `None` fields inherit from the manager header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemHeader {
    /// Header visibility and side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<HeaderShow>,
    /// Popout button label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popout: Option<HeaderLabel>,
    /// Dock button label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dock: Option<HeaderLabel>,
    /// Maximise button label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximise: Option<HeaderLabel>,
    /// Close button label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
    /// Minimise button label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimise: Option<String>,
    /// Tab dropdown label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_dropdown: Option<HeaderLabel>,
}

impl ItemHeader {
    /// Returns true if no field is overridden.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.show.is_none()
            && self.popout.is_none()
            && self.dock.is_none()
            && self.maximise.is_none()
            && self.close.is_none()
            && self.minimise.is_none()
            && self.tab_dropdown.is_none()
    }

    /// Resolves every field against the manager-level header.
    #[must_use]
    pub fn resolve_against(&self, manager: &ManagerHeader) -> EffectiveHeader {
        EffectiveHeader {
            show: self.show.unwrap_or(manager.show),
            popout: self
                .popout
                .clone()
                .unwrap_or_else(|| manager.popout.clone()),
            dock: self
                .dock
                .clone()
                .unwrap_or_else(|| HeaderLabel::label(&manager.dock)),
            maximise: self
                .maximise
                .clone()
                .unwrap_or_else(|| manager.maximise.clone()),
            close: self.close.clone().unwrap_or_else(|| manager.close.clone()),
            minimise: self
                .minimise
                .clone()
                .unwrap_or_else(|| manager.minimise.clone()),
            tab_dropdown: self
                .tab_dropdown
                .clone()
                .unwrap_or_else(|| HeaderLabel::label(&manager.tab_dropdown)),
        }
    }
}

/// Header of an item after inheritance from the manager header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveHeader {
    /// Header visibility and side
    pub show: HeaderShow,
    /// Popout button label
    pub popout: HeaderLabel,
    /// Dock button label
    pub dock: HeaderLabel,
    /// Maximise button label
    pub maximise: HeaderLabel,
    /// Close button label
    pub close: String,
    /// Minimise button label
    pub minimise: String,
    /// Tab dropdown label
    pub tab_dropdown: HeaderLabel,
}
