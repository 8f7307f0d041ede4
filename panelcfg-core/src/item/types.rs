//! Core type definitions for layout items
//!
//! This module contains the variant tag and the identifier type shared by
//! every node of an item tree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Variant tag of a layout item, serialized as the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Synthetic root wrapping a popout's top-level content.
    Root,
    /// Children laid out left to right.
    Row,
    /// Children laid out top to bottom.
    Column,
    /// Tabbed container; one child visible at a time.
    Stack,
    /// Leaf component with a JSON state payload.
    Component,
    /// Leaf component rendered through the host framework adapter.
    #[serde(rename = "react-component")]
    ReactComponent,
}

impl ItemType {
    /// All variants in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Root,
        Self::Row,
        Self::Column,
        Self::Stack,
        Self::Component,
        Self::ReactComponent,
    ];

    /// Returns the wire tag of this variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Row => "row",
            Self::Column => "column",
            Self::Stack => "stack",
            Self::Component => "component",
            Self::ReactComponent => "react-component",
        }
    }

    /// Returns true for leaf variants (components).
    #[must_use]
    pub const fn is_component(self) -> bool {
        matches!(self, Self::Component | Self::ReactComponent)
    }

    /// Returns true for variants that carry a header override.
    #[must_use]
    pub const fn is_headered(self) -> bool {
        matches!(self, Self::Stack | Self::Component | Self::ReactComponent)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| ConfigError::invalid_variant(s))
    }
}

/// Identifier of a layout item.
///
/// A node may carry one id or several; several ids let a host find the same
/// node by different criteria. Order is insertion order, but membership is
/// what matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// A single identifier (empty string means "no id").
    Single(String),
    /// Several identifiers for the same node.
    Multiple(Vec<String>),
}

impl ItemId {
    /// Returns true if the node has no identifier at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(id) => id.is_empty(),
            Self::Multiple(ids) => ids.is_empty(),
        }
    }

    /// Returns true if `id` is one of this node's identifiers.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        match self {
            Self::Single(own) => !own.is_empty() && own == id,
            Self::Multiple(ids) => ids.iter().any(|own| own == id),
        }
    }

    /// Adds an identifier, keeping set semantics.
    ///
    /// An empty single id is replaced; a non-empty single id is promoted to
    /// a multiple id.
    pub fn add(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.contains(&id) {
            return;
        }
        match self {
            Self::Single(own) if own.is_empty() => *own = id,
            Self::Single(own) => {
                let existing = std::mem::take(own);
                *self = Self::Multiple(vec![existing, id]);
            }
            Self::Multiple(ids) => ids.push(id),
        }
    }

    /// Removes an identifier. Returns true if it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        match self {
            Self::Single(own) if !own.is_empty() && own == id => {
                own.clear();
                true
            }
            Self::Single(_) => false,
            Self::Multiple(ids) => {
                let before = ids.len();
                ids.retain(|own| own != id);
                ids.len() != before
            }
        }
    }

    /// Iterates over the non-empty identifiers.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let ids: &[String] = match self {
            Self::Single(own) => std::slice::from_ref(own),
            Self::Multiple(ids) => ids,
        };
        ids.iter().map(String::as_str).filter(|id| !id.is_empty())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::Single(id.to_string())
    }
}

impl From<Vec<String>> for ItemId {
    fn from(ids: Vec<String>) -> Self {
        Self::Multiple(ids)
    }
}
