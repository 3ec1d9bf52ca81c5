//! Mutating operations on the docking tree: insert, remove, replace, wrap,
//! activate and maximize.

use dockframe_common::{ItemId, LayoutError};

use super::{ComponentData, DockTree, ItemKind, Node, TreeEvent};
use crate::schema::{ContainerConfig, ItemConfig, WindowConfig};

impl DockTree {
    /// Build `config` under `parent` at `index` (append when `None`).
    ///
    /// Returns the id requested for the new item. When that id was already
    /// taken the item is created under a fresh id and the returned id never
    /// materialises, which creation waiters observe as a timeout.
    pub fn insert_config(
        &mut self,
        parent: &ItemId,
        index: Option<usize>,
        mut config: ItemConfig,
    ) -> Result<ItemId, LayoutError> {
        let node = self
            .nodes
            .get(parent)
            .ok_or_else(|| LayoutError::ContainerNotFound(parent.clone()))?;
        let parent_kind = node.kind;

        if parent_kind == ItemKind::Root {
            if !node.children.is_empty() {
                return Err(LayoutError::InvalidParent {
                    parent: parent.clone(),
                    child: config.type_name().to_string(),
                });
            }
            let requested = config.ensure_ids();
            if let Some(mut top) = Self::normalize_top(vec![config]) {
                top.ensure_ids();
                self.build_item(parent, None, top)?;
            }
            self.relayout();
            return Ok(requested);
        }

        let requested = config.ensure_ids();
        let built = self.build_item(parent, index, config)?;
        if parent_kind == ItemKind::Stack {
            self.set_active(parent, &built);
        }
        self.relayout();
        Ok(requested)
    }

    /// Remove an item and its subtree. Containers left without children are
    /// pruned upward, stopping below the root's top container.
    pub fn remove_item(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        if *id == self.root {
            self.clear();
            return Ok(());
        }
        let parent = self
            .parent_of(id)
            .cloned()
            .ok_or_else(|| LayoutError::ItemNotFound(id.clone()))?;

        self.destroy_subtree(id);
        self.detach(&parent, id);
        self.prune_empty(&parent);
        self.relayout();
        Ok(())
    }

    /// Drop all content, leaving only the root.
    pub fn clear(&mut self) {
        let children = self
            .nodes
            .get(&self.root)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        for child in &children {
            self.destroy_subtree(child);
        }
        if let Some(root) = self.nodes.get_mut(&self.root) {
            root.children.clear();
        }
        self.maximized = None;
    }

    /// Swap `old` for a newly built `config` in the same slot, keeping the
    /// slot's share of the parent.
    pub fn replace_child(
        &mut self,
        old: &ItemId,
        mut config: ItemConfig,
    ) -> Result<ItemId, LayoutError> {
        let parent = self
            .parent_of(old)
            .cloned()
            .ok_or_else(|| LayoutError::ItemNotFound(old.clone()))?;
        let index = self.index_of(old);
        let old_weight = self.nodes.get(old).map_or(1.0, |n| n.weight);
        let sibling_weights: Vec<(ItemId, f64)> = self
            .nodes
            .get(&parent)
            .map(|p| {
                p.children
                    .iter()
                    .filter(|c| *c != old)
                    .filter_map(|c| self.nodes.get(c).map(|n| (c.clone(), n.weight)))
                    .collect()
            })
            .unwrap_or_default();

        self.destroy_subtree(old);
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.retain(|c| c != old);
            if p.active.as_ref() == Some(old) {
                p.active = None;
            }
        }

        let requested = config.ensure_ids();
        let built = self.build_item(&parent, index, config)?;
        for (id, weight) in sibling_weights {
            if let Some(node) = self.nodes.get_mut(&id) {
                node.weight = weight;
            }
        }
        if let Some(node) = self.nodes.get_mut(&built) {
            node.weight = old_weight;
        }
        if self.nodes.get(&parent).map(|p| p.kind) == Some(ItemKind::Stack) {
            self.set_active(&parent, &built);
        }
        self.relayout();
        Ok(requested)
    }

    /// The slot an incoming item should replace instead of being appended:
    /// the placeholder stack at or directly inside `target`.
    pub fn placeholder_slot(&self, target: &ItemId) -> Option<ItemId> {
        let node = self.nodes.get(target)?;
        let holds_only_placeholder = |stack: &Node| {
            stack.kind == ItemKind::Stack
                && stack.children.len() == 1
                && self
                    .nodes
                    .get(&stack.children[0])
                    .is_some_and(Node::is_placeholder)
        };
        if holds_only_placeholder(node) {
            return Some(node.id.clone());
        }
        if node.kind.split_axis().is_some() && node.children.len() == 1 {
            let child = self.nodes.get(&node.children[0])?;
            if holds_only_placeholder(child) {
                return Some(child.id.clone());
            }
        }
        None
    }

    /// Wrap an existing container into a new row or column that takes over
    /// its slot. Returns the new container's id.
    pub fn wrap(&mut self, id: &ItemId, kind: ItemKind) -> Result<ItemId, LayoutError> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| LayoutError::ContainerNotFound(id.clone()))?;
        if !node.kind.is_container() || kind.split_axis().is_none() {
            return Err(LayoutError::InvalidParent {
                parent: id.clone(),
                child: kind.name().to_string(),
            });
        }
        let parent = node
            .parent
            .clone()
            .ok_or_else(|| LayoutError::ContainerNotFound(id.clone()))?;
        let weight = node.weight;

        let wrapper_id = ItemId::new();
        let mut wrapper = Node::new(wrapper_id.clone(), kind, Some(parent.clone()));
        wrapper.weight = weight;
        wrapper.children.push(id.clone());
        self.nodes.insert(wrapper_id.clone(), wrapper);

        if let Some(p) = self.nodes.get_mut(&parent) {
            for child in p.children.iter_mut() {
                if child == id {
                    *child = wrapper_id.clone();
                }
            }
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = Some(wrapper_id.clone());
            node.weight = 1.0;
        }

        self.push_event(TreeEvent::ItemCreated {
            id: wrapper_id.clone(),
            kind,
        });
        self.relayout();
        Ok(wrapper_id)
    }

    /// Serialize a subtree back to config, ids preserved, placeholders
    /// omitted.
    pub fn extract_config(&self, id: &ItemId) -> Option<ItemConfig> {
        let node = self.nodes.get(id)?;
        match node.kind {
            ItemKind::Component => {
                let data = node.component.as_ref()?;
                if data.placeholder {
                    return None;
                }
                Some(ItemConfig::Window(WindowConfig {
                    id: Some(node.id.clone()),
                    window_id: data.window_id.clone(),
                    app_name: data.app_name.clone(),
                    url: data.url.clone(),
                    title: data.title.clone(),
                    context: data.context.clone(),
                    constraints: node.constraints,
                    ..Default::default()
                }))
            }
            ItemKind::Row | ItemKind::Column | ItemKind::Stack => {
                let config = ContainerConfig {
                    id: Some(node.id.clone()),
                    children: node
                        .children
                        .iter()
                        .filter_map(|c| self.extract_config(c))
                        .collect(),
                    constraints: node.constraints,
                    ..Default::default()
                };
                Some(match node.kind {
                    ItemKind::Row => ItemConfig::Row(config),
                    ItemKind::Column => ItemConfig::Column(config),
                    _ => ItemConfig::Group(config),
                })
            }
            ItemKind::Root => None,
        }
    }

    /// Config of the whole root content.
    pub fn content_config(&self) -> Vec<ItemConfig> {
        self.top_container()
            .and_then(|top| self.extract_config(top))
            .into_iter()
            .collect()
    }

    /// Make `item` the active tab of `stack`. Returns whether it changed.
    pub fn set_active(&mut self, stack: &ItemId, item: &ItemId) -> bool {
        let Some(node) = self.nodes.get_mut(stack) else {
            return false;
        };
        if node.kind != ItemKind::Stack
            || !node.children.contains(item)
            || node.active.as_ref() == Some(item)
        {
            return false;
        }
        node.active = Some(item.clone());
        self.push_event(TreeEvent::ActiveContentItemChanged {
            stack: stack.clone(),
            item: item.clone(),
        });
        true
    }

    /// Record that `item` was dropped into `parent` by a relocation.
    pub fn mark_dropped(&mut self, item: &ItemId) {
        if let Some(parent) = self.parent_of(item).cloned() {
            self.push_event(TreeEvent::ItemDropped {
                id: item.clone(),
                parent,
            });
        }
    }

    /// Edit a real window leaf's data in place. Returns false for unknown
    /// ids and placeholders.
    pub fn update_component(&mut self, id: &ItemId, f: impl FnOnce(&mut ComponentData)) -> bool {
        match self.nodes.get_mut(id).and_then(|n| n.component.as_mut()) {
            Some(data) if !data.placeholder => {
                f(data);
                true
            }
            _ => false,
        }
    }

    /// Maximize an item over the whole tree area. There is a single
    /// maximize slot, so any previously maximized item is restored first.
    pub fn maximize(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        if *id == self.root || !self.nodes.contains_key(id) {
            return Err(LayoutError::ItemNotFound(id.clone()));
        }
        if let Some(previous) = self.maximized.clone() {
            if previous == *id {
                return Ok(());
            }
            self.restore(&previous);
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.is_maximized = true;
        }
        self.maximized = Some(id.clone());
        self.relayout();
        Ok(())
    }

    /// Returns whether `id` was the maximized item.
    pub fn restore(&mut self, id: &ItemId) -> bool {
        if self.maximized.as_ref() != Some(id) {
            return false;
        }
        self.maximized = None;
        if let Some(node) = self.nodes.get_mut(id) {
            node.is_maximized = false;
        }
        self.relayout();
        true
    }

    fn destroy_subtree(&mut self, id: &ItemId) {
        let mut order = self.descendants(id);
        order.reverse();
        for item in order {
            if let Some(node) = self.nodes.remove(&item) {
                if self.maximized.as_ref() == Some(&item) {
                    self.maximized = None;
                }
                self.push_event(TreeEvent::ItemDestroyed {
                    id: item,
                    kind: node.kind,
                    parent: node.parent,
                });
            }
        }
    }

    /// Unlink a destroyed child, renormalizing weights and the active tab.
    fn detach(&mut self, parent: &ItemId, child: &ItemId) {
        let Some(p) = self.nodes.get_mut(parent) else {
            return;
        };
        let removed_at = p.children.iter().position(|c| c == child);
        p.children.retain(|c| c != child);
        let remaining = p.children.clone();
        let kind = p.kind;
        let lost_active = p.active.as_ref() == Some(child);
        if lost_active {
            p.active = None;
        }

        if kind.split_axis().is_some() {
            self.normalize_weights(&remaining);
        }
        if kind == ItemKind::Stack && lost_active && !remaining.is_empty() {
            let next = removed_at.unwrap_or(0).min(remaining.len() - 1);
            self.set_active(parent, &remaining[next]);
        }
    }

    fn prune_empty(&mut self, id: &ItemId) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if !node.children.is_empty() || !node.kind.is_container() {
            return;
        }
        let Some(parent) = node.parent.clone() else {
            return;
        };
        if parent == self.root {
            return;
        }
        self.destroy_subtree(id);
        self.detach(&parent, id);
        self.prune_empty(&parent);
    }

    pub(crate) fn normalize_weights(&mut self, ids: &[ItemId]) {
        let total: f64 = ids
            .iter()
            .filter_map(|c| self.nodes.get(c))
            .map(|n| n.weight)
            .sum();
        let count = ids.len() as f64;
        for id in ids {
            if let Some(node) = self.nodes.get_mut(id) {
                node.weight = if total > 0.0 {
                    node.weight / total
                } else {
                    1.0 / count
                };
            }
        }
    }
}
