//! Tree construction from item configs.

use std::collections::HashMap;

use dockframe_common::{Bounds, ContainerKind, ItemId, LayoutError};

use super::{ComponentData, DockTree, ItemKind, Node, TreeEvent};
use crate::schema::{ContainerConfig, ItemConfig, SizeConstraints, WindowConfig};

impl DockTree {
    /// An empty tree: just the root.
    pub fn new(root: ItemId, bounds: Bounds, header_height: f64) -> Self {
        let mut node = Node::new(root.clone(), ItemKind::Root, None);
        node.bounds = bounds;
        let mut nodes = HashMap::new();
        nodes.insert(root.clone(), node);
        Self {
            root,
            nodes,
            maximized: None,
            header_height,
            bounds,
            events: Vec::new(),
        }
    }

    /// Build a tree whose root content is described by `children`, queueing
    /// creation events for every item followed by `Initialised`.
    pub fn from_config(
        root: ItemId,
        children: Vec<ItemConfig>,
        bounds: Bounds,
        header_height: f64,
    ) -> Result<Self, LayoutError> {
        let mut tree = Self::new(root.clone(), bounds, header_height);
        if let Some(mut top) = Self::normalize_top(children) {
            top.ensure_ids();
            tree.build_item(&root, None, top)?;
        }
        tree.relayout();
        tree.push_event(TreeEvent::Initialised { root });
        Ok(tree)
    }

    /// Root content is always a single row or column.
    pub(crate) fn normalize_top(mut children: Vec<ItemConfig>) -> Option<ItemConfig> {
        match children.len() {
            0 => None,
            1 => match children.remove(0) {
                top @ (ItemConfig::Row(_) | ItemConfig::Column(_)) => Some(top),
                other => Some(ItemConfig::container(ContainerKind::Row, vec![other])),
            },
            _ => Some(ItemConfig::container(ContainerKind::Row, children)),
        }
    }

    pub(crate) fn build_item(
        &mut self,
        parent: &ItemId,
        index: Option<usize>,
        config: ItemConfig,
    ) -> Result<ItemId, LayoutError> {
        let parent_kind = self
            .nodes
            .get(parent)
            .map(|n| n.kind)
            .ok_or_else(|| LayoutError::ContainerNotFound(parent.clone()))?;

        match (parent_kind, config) {
            (ItemKind::Stack, ItemConfig::Window(window)) => {
                Ok(self.build_component(parent, index, window))
            }
            (ItemKind::Component, config) | (ItemKind::Stack, config) => {
                Err(LayoutError::InvalidParent {
                    parent: parent.clone(),
                    child: config.type_name().to_string(),
                })
            }
            // Windows never sit directly in a row, column or root.
            (_, ItemConfig::Window(window)) => {
                let stack = self.create_node(
                    parent,
                    index,
                    ItemKind::Stack,
                    None,
                    SizeConstraints::default(),
                    None,
                );
                Ok(self.build_component(&stack, None, window))
            }
            (_, ItemConfig::Row(c)) => self.build_container(parent, index, ItemKind::Row, c),
            (_, ItemConfig::Column(c)) => {
                self.build_container(parent, index, ItemKind::Column, c)
            }
            (_, ItemConfig::Group(c)) => self.build_container(parent, index, ItemKind::Stack, c),
        }
    }

    fn build_container(
        &mut self,
        parent: &ItemId,
        index: Option<usize>,
        kind: ItemKind,
        config: ContainerConfig,
    ) -> Result<ItemId, LayoutError> {
        let id = self.create_node(parent, index, kind, config.id, config.constraints, None);
        if config.children.is_empty() {
            let stack = if kind == ItemKind::Stack {
                id.clone()
            } else {
                self.create_node(&id, None, ItemKind::Stack, None, SizeConstraints::default(), None)
            };
            self.build_placeholder(&stack);
        }
        for child in config.children {
            self.build_item(&id, None, child)?;
        }
        Ok(id)
    }

    fn build_component(
        &mut self,
        stack: &ItemId,
        index: Option<usize>,
        window: WindowConfig,
    ) -> ItemId {
        let data = ComponentData {
            placeholder: false,
            window_id: window.window_id,
            app_name: window.app_name,
            url: window.url,
            title: window.title,
            context: window.context,
        };
        self.create_node(
            stack,
            index,
            ItemKind::Component,
            window.id,
            window.constraints,
            Some(data),
        )
    }

    pub(crate) fn build_placeholder(&mut self, stack: &ItemId) -> ItemId {
        let data = ComponentData {
            placeholder: true,
            ..Default::default()
        };
        self.create_node(
            stack,
            None,
            ItemKind::Component,
            None,
            SizeConstraints::default(),
            Some(data),
        )
    }

    fn create_node(
        &mut self,
        parent: &ItemId,
        index: Option<usize>,
        kind: ItemKind,
        id: Option<ItemId>,
        constraints: SizeConstraints,
        component: Option<ComponentData>,
    ) -> ItemId {
        let id = match id {
            Some(id) if self.nodes.contains_key(&id) => {
                tracing::warn!(%id, "duplicate item id in tree, assigning a fresh one");
                ItemId::new()
            }
            Some(id) => id,
            None => ItemId::new(),
        };

        let mut node = Node::new(id.clone(), kind, Some(parent.clone()));
        node.constraints = constraints;
        node.component = component;
        self.nodes.insert(id.clone(), node);
        self.attach(parent, &id, index);

        self.push_event(TreeEvent::ItemCreated {
            id: id.clone(),
            kind,
        });
        match kind {
            ItemKind::Stack => self.push_event(TreeEvent::StackCreated { id: id.clone() }),
            ItemKind::Component => {
                self.push_event(TreeEvent::TabCreated {
                    stack: parent.clone(),
                    item: id.clone(),
                });
                self.push_event(TreeEvent::ComponentCreated { id: id.clone() });
                if let Some(stack) = self.nodes.get_mut(parent) {
                    if stack.active.is_none() {
                        stack.active = Some(id.clone());
                    }
                }
            }
            _ => {}
        }
        id
    }

    /// Link `child` under `parent`. A new child of a row or column takes an
    /// equal share and the existing siblings shrink proportionally.
    pub(crate) fn attach(&mut self, parent: &ItemId, child: &ItemId, index: Option<usize>) {
        let Some(p) = self.nodes.get_mut(parent) else {
            return;
        };
        let existing = p.children.len();
        let at = index.map_or(existing, |i| i.min(existing));
        p.children.insert(at, child.clone());
        let splits = p.kind.split_axis().is_some();
        let siblings: Vec<ItemId> = p.children.iter().filter(|c| *c != child).cloned().collect();

        let share = 1.0 / (existing as f64 + 1.0);
        if splits {
            for sibling in &siblings {
                if let Some(node) = self.nodes.get_mut(sibling) {
                    node.weight *= 1.0 - share;
                }
            }
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent.clone());
            node.weight = if splits { share } else { 1.0 };
        }
    }
}
