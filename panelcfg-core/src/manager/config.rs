//! Manager configuration containers
//!
//! A [`ManagerConfig`] owns an item tree plus the manager defaults. It
//! appears in two shapes: the root-level [`Config`] of the main window and
//! the [`PopoutManagerConfig`] of a detached window. [`ManagerConfigKind`]
//! records which one a value is.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::header::ManagerHeader;
use super::popout::PopoutManagerConfig;
use super::settings::{Dimensions, Settings};
use crate::item::{ItemConfig, find_in_content};

/// JSON key whose presence marks a popout configuration.
pub const POPOUT_MARKER_KEY: &str = "parentId";

/// Content and defaults shared by root and popout configurations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerConfig {
    /// Top-level items (conventionally zero or one)
    #[serde(default)]
    pub content: Vec<ItemConfig>,
    /// Windows popped out of this layout
    #[serde(default)]
    pub open_popouts: Vec<PopoutManagerConfig>,
    /// Pixel dimensions
    pub dimensions: Dimensions,
    /// Behavior flags
    pub settings: Settings,
    /// Header defaults
    pub header: ManagerHeader,
}

impl ManagerConfig {
    /// Returns every item carrying `id` in this window's tree.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Vec<&ItemConfig> {
        find_in_content(&self.content, id)
    }

    /// Returns the number of items in this window's tree.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.content.iter().map(ItemConfig::count_items).sum()
    }

    /// Returns the number of popouts, including popouts of popouts.
    #[must_use]
    pub fn popout_count(&self) -> usize {
        self.open_popouts
            .iter()
            .map(|popout| 1 + popout.manager.popout_count())
            .sum()
    }
}

/// Marker that a configuration has been fully resolved.
///
/// Serializes as the literal `true`; deserializing anything else fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Resolved;

impl Serialize for Resolved {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for Resolved {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResolvedVisitor;

        impl Visitor<'_> for ResolvedVisitor {
            type Value = Resolved;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("the literal `true`")
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Resolved, E> {
                if value {
                    Ok(Resolved)
                } else {
                    Err(E::invalid_value(de::Unexpected::Bool(value), &self))
                }
            }
        }

        deserializer.deserialize_bool(ResolvedVisitor)
    }
}

/// Fully resolved configuration of the main window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Always `true` on the wire
    pub resolved: Resolved,
    /// Content, popouts and manager defaults
    #[serde(flatten)]
    pub manager: ManagerConfig,
}

impl Config {
    /// Creates a resolved configuration around `manager`.
    #[must_use]
    pub const fn new(manager: ManagerConfig) -> Self {
        Self {
            resolved: Resolved,
            manager,
        }
    }
}

/// A manager configuration, either root-level or popout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ManagerConfigKind {
    /// Main window configuration
    Root(Config),
    /// Detached window configuration
    Popout(PopoutManagerConfig),
}

impl ManagerConfigKind {
    /// Structural popout test on untyped JSON: a value is a popout
    /// configuration iff it is an object carrying a `parentId` key.
    #[must_use]
    pub fn is_popout_value(value: &Value) -> bool {
        value
            .as_object()
            .is_some_and(|map| map.contains_key(POPOUT_MARKER_KEY))
    }

    /// Builds a typed configuration, choosing the kind by the structural
    /// popout test.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not deserialize as the chosen kind.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if Self::is_popout_value(&value) {
            serde_json::from_value(value).map(Self::Popout)
        } else {
            serde_json::from_value(value).map(Self::Root)
        }
    }

    /// Returns true for popout configurations.
    #[must_use]
    pub const fn is_popout(&self) -> bool {
        matches!(self, Self::Popout(_))
    }

    /// Returns the shared manager part.
    #[must_use]
    pub const fn manager(&self) -> &ManagerConfig {
        match self {
            Self::Root(config) => &config.manager,
            Self::Popout(popout) => &popout.manager,
        }
    }

    /// Returns the shared manager part mutably.
    pub fn manager_mut(&mut self) -> &mut ManagerConfig {
        match self {
            Self::Root(config) => &mut config.manager,
            Self::Popout(popout) => &mut popout.manager,
        }
    }

    /// Returns the popout configuration, if this is one.
    #[must_use]
    pub const fn as_popout(&self) -> Option<&PopoutManagerConfig> {
        match self {
            Self::Root(_) => None,
            Self::Popout(popout) => Some(popout),
        }
    }
}

impl From<Config> for ManagerConfigKind {
    fn from(config: Config) -> Self {
        Self::Root(config)
    }
}

impl From<PopoutManagerConfig> for ManagerConfigKind {
    fn from(popout: PopoutManagerConfig) -> Self {
        Self::Popout(popout)
    }
}
