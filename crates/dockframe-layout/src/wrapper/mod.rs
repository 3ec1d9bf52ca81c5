//! Identity-keyed permission and visibility records.
//!
//! Wrappers are keyed by stable entity id and live apart from tree nodes,
//! so a container or window rebuilt under the same id (reinitialize,
//! resume, cross-workspace move) picks its state back up.

use std::collections::HashMap;

use dockframe_common::{ItemId, WorkspaceLockState};

use crate::locking::{ContainerLockConfig, WindowLockConfig, WorkspaceLockConfig};
use crate::schema::{ContainerConfig, ItemConfig};
use crate::store::{WindowRef, Workspace};
use crate::tree::Node;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkspaceWrapper {
    pub lock: WorkspaceLockState,
    pub icon: Option<String>,
    pub is_pinned: bool,
}

/// Container flags left `None` inherit from the workspace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerWrapper {
    pub lock: ContainerLockConfig,
    pub maximization_boundary: bool,
}

/// Window flags left `None` inherit from the enclosing group, then the
/// workspace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowWrapper {
    pub lock: WindowLockConfig,
    pub maximization_boundary: bool,
}

/// Anything that can name the entity a wrapper belongs to.
pub trait WrapperKey {
    fn wrapper_key(&self) -> &ItemId;
}

impl WrapperKey for ItemId {
    fn wrapper_key(&self) -> &ItemId {
        self
    }
}

impl WrapperKey for Node {
    fn wrapper_key(&self) -> &ItemId {
        self.id()
    }
}

impl WrapperKey for Workspace {
    fn wrapper_key(&self) -> &ItemId {
        &self.id
    }
}

impl WrapperKey for WindowRef {
    fn wrapper_key(&self) -> &ItemId {
        &self.id
    }
}

#[derive(Debug, Default)]
pub struct WrapperFactory {
    workspaces: HashMap<ItemId, WorkspaceWrapper>,
    containers: HashMap<ItemId, ContainerWrapper>,
    windows: HashMap<ItemId, WindowWrapper>,
}

impl WrapperFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workspace_wrapper(&mut self, key: &(impl WrapperKey + ?Sized)) -> &mut WorkspaceWrapper {
        self.workspaces.entry(key.wrapper_key().clone()).or_default()
    }

    pub fn container_wrapper(&mut self, key: &(impl WrapperKey + ?Sized)) -> &mut ContainerWrapper {
        self.containers.entry(key.wrapper_key().clone()).or_default()
    }

    pub fn window_wrapper(&mut self, key: &(impl WrapperKey + ?Sized)) -> &mut WindowWrapper {
        self.windows.entry(key.wrapper_key().clone()).or_default()
    }

    pub fn peek_workspace(&self, id: &ItemId) -> Option<&WorkspaceWrapper> {
        self.workspaces.get(id)
    }

    pub fn peek_container(&self, id: &ItemId) -> Option<&ContainerWrapper> {
        self.containers.get(id)
    }

    pub fn peek_window(&self, id: &ItemId) -> Option<&WindowWrapper> {
        self.windows.get(id)
    }

    /// Drop every wrapper keyed by `id`.
    pub fn forget(&mut self, id: &ItemId) {
        self.workspaces.remove(id);
        self.containers.remove(id);
        self.windows.remove(id);
    }

    /// Seed wrappers from the lock settings carried by a config subtree.
    /// Fields the config leaves unset keep their current value.
    pub fn seed_from_config(&mut self, config: &ItemConfig) {
        config.visit(&mut |item| match item {
            ItemConfig::Row(c) | ItemConfig::Column(c) | ItemConfig::Group(c) => {
                self.seed_container(c, item);
            }
            ItemConfig::Window(w) => {
                let Some(id) = &w.id else { return };
                let wrapper = self.window_wrapper(id);
                wrapper.lock.merge(&w.lock);
                if let Some(boundary) = w.maximization_boundary {
                    wrapper.maximization_boundary = boundary;
                }
            }
        });
    }

    fn seed_container(&mut self, config: &ContainerConfig, item: &ItemConfig) {
        let (Some(id), Some(kind)) = (&config.id, item.container_kind()) else {
            return;
        };
        let wrapper = self.container_wrapper(id);
        wrapper.lock.merge(&config.lock.seeded(kind));
        if let Some(boundary) = config.maximization_boundary {
            wrapper.maximization_boundary = boundary;
        }
    }

    pub fn seed_workspace(&mut self, id: &ItemId, lock: &WorkspaceLockConfig) {
        let wrapper = self.workspace_wrapper(id);
        lock.seeded().apply_to(&mut wrapper.lock);
    }

    /// Write wrapper state back into a config subtree, for snapshots.
    pub fn annotate(&self, config: &mut ItemConfig) {
        match config {
            ItemConfig::Row(c) | ItemConfig::Column(c) | ItemConfig::Group(c) => {
                if let Some(wrapper) = c.id.as_ref().and_then(|id| self.containers.get(id)) {
                    c.lock = wrapper.lock;
                    c.maximization_boundary = Some(wrapper.maximization_boundary);
                }
                for child in &mut c.children {
                    self.annotate(child);
                }
            }
            ItemConfig::Window(w) => {
                if let Some(wrapper) = w.id.as_ref().and_then(|id| self.windows.get(id)) {
                    w.lock = wrapper.lock;
                    w.maximization_boundary = Some(wrapper.maximization_boundary);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockframe_common::{Bounds, ContainerKind};

    #[test]
    fn same_id_returns_same_wrapper() {
        let mut factory = WrapperFactory::new();
        let id = ItemId::from("c1");
        factory.container_wrapper(&id).lock.allow_drop = Some(false);
        assert_eq!(factory.container_wrapper(&id).lock.allow_drop, Some(false));
        assert_eq!(
            factory.peek_container(&id).unwrap().lock.allow_drop,
            Some(false)
        );
    }

    #[test]
    fn accepts_entities_or_bare_ids() {
        let mut factory = WrapperFactory::new();
        let ws = Workspace::new(ItemId::from("ws"), "title");
        factory.workspace_wrapper(&ws).is_pinned = true;
        assert!(factory.workspace_wrapper(&ItemId::from("ws")).is_pinned);

        let window = WindowRef {
            id: ItemId::from("w"),
            window_id: None,
            app_name: None,
            url: None,
            title: None,
            context: serde_json::Value::Null,
            bounds: Bounds::default(),
        };
        factory.window_wrapper(&window).maximization_boundary = true;
        assert!(factory.peek_window(&ItemId::from("w")).unwrap().maximization_boundary);
    }

    #[test]
    fn wrappers_outlive_tree_nodes() {
        let mut factory = WrapperFactory::new();
        let config = ItemConfig::Group(ContainerConfig {
            id: Some(ItemId::from("g")),
            lock: ContainerLockConfig {
                allow_drop: Some(false),
                ..Default::default()
            },
            ..Default::default()
        });
        factory.seed_from_config(&config);

        // the group is rebuilt with an unlocked config: named nothing, keeps state
        factory.seed_from_config(&ItemConfig::container(ContainerKind::Group, vec![]).with_id("g"));
        let lock = factory.peek_container(&ItemId::from("g")).unwrap().lock;
        assert_eq!(lock.allow_drop, Some(false));
        assert_eq!(lock.allow_drop_header, Some(false));
    }

    #[test]
    fn annotate_writes_state_back() {
        let mut factory = WrapperFactory::new();
        factory.window_wrapper(&ItemId::from("w")).lock.show_close_button = Some(false);
        let mut config = ItemConfig::container(
            ContainerKind::Group,
            vec![ItemConfig::window("app").with_id("w")],
        );
        factory.annotate(&mut config);
        match &config.children()[0] {
            ItemConfig::Window(w) => assert_eq!(w.lock.show_close_button, Some(false)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn forget_drops_all_kinds() {
        let mut factory = WrapperFactory::new();
        let id = ItemId::from("x");
        factory.window_wrapper(&id);
        factory.container_wrapper(&id);
        factory.forget(&id);
        assert!(factory.peek_window(&id).is_none());
        assert!(factory.peek_container(&id).is_none());
    }
}
