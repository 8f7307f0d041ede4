//! Deep copy engine
//!
//! Produces copies of configuration values that share no storage with the
//! original at any depth. Opaque component payloads are copied through the
//! merge engine's single-value path. Every cross-owner transfer of an item
//! tree (popout spawn, snapshot before an edit, serialization) goes through
//! here.

use crate::item::{
    ItemConfig, ItemHeader, ItemKind, JsonComponent, REACT_COMPONENT_ID, ReactComponent,
};
use crate::manager::{
    Config, Dimensions, ManagerConfig, ManagerConfigKind, ManagerHeader, PopoutManagerConfig,
    PopoutWindow, Resolved, Settings,
};
use crate::merge::deep_clone;
use crate::trace_operation_debug;

/// Values that can be copied without sharing storage with the original.
pub trait DeepCopy {
    /// Returns an independent copy of `self`.
    #[must_use]
    fn deep_copy(&self) -> Self;
}

impl ItemConfig {
    /// Returns an independent copy of this item.
    ///
    /// When `content` is given it becomes the copy's children as-is; the
    /// caller has already copied them. Otherwise the children are copied
    /// recursively. A `react-component` copy always carries
    /// [`REACT_COMPONENT_ID`] as its component name.
    #[must_use]
    pub fn create_copy(&self, content: Option<Vec<Self>>) -> Self {
        let kind = match &self.kind {
            ItemKind::Root => ItemKind::Root,
            ItemKind::Row => ItemKind::Row,
            ItemKind::Column => ItemKind::Column,
            ItemKind::Stack { header } => ItemKind::Stack {
                header: copy_header(header.as_ref()),
            },
            ItemKind::Component(component) => ItemKind::Component(JsonComponent {
                header: copy_header(component.header.as_ref()),
                component_name: component.component_name.clone(),
                component_state: deep_clone(&component.component_state),
            }),
            ItemKind::ReactComponent(component) => ItemKind::ReactComponent(ReactComponent {
                header: copy_header(component.header.as_ref()),
                component_name: REACT_COMPONENT_ID.to_string(),
                props: component.props.as_ref().map(deep_clone),
            }),
        };

        Self {
            kind,
            content: content.unwrap_or_else(|| copy_content(&self.content)),
            width: self.width,
            min_width: self.min_width,
            height: self.height,
            min_height: self.min_height,
            id: self.id.clone(),
            is_closable: self.is_closable,
            title: self.title.clone(),
            reorder_enabled: self.reorder_enabled,
            active_item_index: self.active_item_index,
        }
    }
}

impl DeepCopy for ItemConfig {
    fn deep_copy(&self) -> Self {
        self.create_copy(None)
    }
}

fn copy_header(header: Option<&ItemHeader>) -> Option<ItemHeader> {
    header.map(DeepCopy::deep_copy)
}

impl DeepCopy for ItemHeader {
    fn deep_copy(&self) -> Self {
        Self {
            show: self.show,
            popout: self.popout.clone(),
            dock: self.dock.clone(),
            maximise: self.maximise.clone(),
            close: self.close.clone(),
            minimise: self.minimise.clone(),
            tab_dropdown: self.tab_dropdown.clone(),
        }
    }
}

/// Copies a sequence of items. An empty input yields a new empty vector.
#[must_use]
pub fn copy_content(original: &[ItemConfig]) -> Vec<ItemConfig> {
    original.iter().map(DeepCopy::deep_copy).collect()
}

/// Copies a sequence of popout configurations, recursively.
#[must_use]
pub fn copy_open_popouts(original: &[PopoutManagerConfig]) -> Vec<PopoutManagerConfig> {
    original.iter().map(DeepCopy::deep_copy).collect()
}

impl DeepCopy for Settings {
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl DeepCopy for Dimensions {
    fn deep_copy(&self) -> Self {
        *self
    }
}

impl DeepCopy for ManagerHeader {
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl DeepCopy for PopoutWindow {
    fn deep_copy(&self) -> Self {
        *self
    }
}

impl DeepCopy for ManagerConfig {
    fn deep_copy(&self) -> Self {
        Self {
            content: copy_content(&self.content),
            open_popouts: copy_open_popouts(&self.open_popouts),
            dimensions: self.dimensions.deep_copy(),
            settings: self.settings.deep_copy(),
            header: self.header.deep_copy(),
        }
    }
}

impl DeepCopy for PopoutManagerConfig {
    fn deep_copy(&self) -> Self {
        Self {
            manager: self.manager.deep_copy(),
            parent_id: self.parent_id.clone(),
            index_in_parent: self.index_in_parent,
            window: self.window.deep_copy(),
        }
    }
}

impl DeepCopy for Config {
    fn deep_copy(&self) -> Self {
        Self {
            resolved: Resolved,
            manager: self.manager.deep_copy(),
        }
    }
}

impl DeepCopy for ManagerConfigKind {
    fn deep_copy(&self) -> Self {
        match self {
            Self::Root(config) => Self::Root(config.deep_copy()),
            Self::Popout(popout) => Self::Popout(popout.deep_copy()),
        }
    }
}

impl ManagerConfigKind {
    /// Returns an independent copy, dispatching on root versus popout.
    #[must_use]
    pub fn create_copy(&self) -> Self {
        let manager = self.manager();
        let _span = trace_operation_debug!(
            crate::tracing::span_names::CONFIG_COPY,
            popout = self.is_popout(),
            items = manager.item_count(),
            popouts = manager.popout_count()
        )
        .entered();
        self.deep_copy()
    }
}
