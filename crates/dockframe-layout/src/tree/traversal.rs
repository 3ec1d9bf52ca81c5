//! Read-only traversal helpers over the docking tree.

use dockframe_common::ItemId;

use super::{DockTree, ItemKind, Node};

impl DockTree {
    /// `id` and everything below it, depth-first, parents before children.
    pub fn descendants(&self, id: &ItemId) -> Vec<ItemId> {
        let mut out = Vec::new();
        self.collect_preorder(id, &mut out);
        out
    }

    fn collect_preorder(&self, id: &ItemId, out: &mut Vec<ItemId>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        out.push(id.clone());
        for child in &node.children {
            self.collect_preorder(child, out);
        }
    }

    /// Every node in tree order.
    pub fn nodes_in_order(&self) -> Vec<&Node> {
        self.descendants(&self.root)
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .collect()
    }

    /// Components hosting real windows, in tree order.
    pub fn windows(&self) -> Vec<&Node> {
        self.nodes_in_order()
            .into_iter()
            .filter(|n| n.is_window())
            .collect()
    }

    /// Rows, columns and stacks, in tree order.
    pub fn containers(&self) -> Vec<&Node> {
        self.nodes_in_order()
            .into_iter()
            .filter(|n| n.kind.is_container())
            .collect()
    }

    pub fn windows_under(&self, id: &ItemId) -> Vec<ItemId> {
        self.descendants(id)
            .into_iter()
            .filter(|d| self.nodes.get(d).is_some_and(Node::is_window))
            .collect()
    }

    pub fn first_split_container(&self) -> Option<ItemId> {
        self.first_of(|n| n.kind.split_axis().is_some())
    }

    pub fn first_stack(&self) -> Option<ItemId> {
        self.first_of(|n| n.kind == ItemKind::Stack)
    }

    fn first_of(&self, pred: impl Fn(&Node) -> bool) -> Option<ItemId> {
        self.nodes_in_order()
            .into_iter()
            .find(|n| pred(n))
            .map(|n| n.id.clone())
    }

    /// The stack holding a component, when `id` is one.
    pub fn enclosing_stack(&self, id: &ItemId) -> Option<&ItemId> {
        let parent = self.parent_of(id)?;
        (self.nodes.get(parent)?.kind == ItemKind::Stack).then_some(parent)
    }

    /// The nearest stack at or above `id`.
    pub fn nearest_stack(&self, id: &ItemId) -> Option<ItemId> {
        let mut current = Some(id);
        while let Some(cur) = current {
            let node = self.nodes.get(cur)?;
            if node.kind == ItemKind::Stack {
                return Some(cur.clone());
            }
            current = node.parent.as_ref();
        }
        None
    }
}
