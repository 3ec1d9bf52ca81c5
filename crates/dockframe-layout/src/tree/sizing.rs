//! Size limits, bounds computation and weight updates.

use dockframe_common::{Bounds, ItemId};

use super::{Axis, DockTree, ItemKind};
use crate::schema::SizeConstraints;

fn explicit(constraints: &SizeConstraints, axis: Axis) -> (Option<f64>, Option<f64>) {
    match axis {
        Axis::Horizontal => (constraints.min_width, constraints.max_width),
        Axis::Vertical => (constraints.min_height, constraints.max_height),
    }
}

impl DockTree {
    /// `(min, max)` of an item along `axis`: aggregated from its content,
    /// then narrowed by its own explicit constraints.
    ///
    /// Rows sum their children's limits along width and take the tightest
    /// bound across height; columns are the transpose. Stacks take the
    /// tightest bound of their tabs plus the header vertically.
    pub fn limits(&self, id: &ItemId, axis: Axis) -> (f64, f64) {
        let Some(node) = self.nodes.get(id) else {
            return (0.0, f64::INFINITY);
        };
        let (mut min, mut max) = match node.kind {
            ItemKind::Component => (0.0, f64::INFINITY),
            ItemKind::Stack => {
                let (min, max) = self.tightest(&node.children, axis);
                match axis {
                    Axis::Vertical => (min + self.header_height, max + self.header_height),
                    Axis::Horizontal => (min, max),
                }
            }
            ItemKind::Row | ItemKind::Column if node.kind.split_axis() == Some(axis) => {
                self.summed(&node.children, axis)
            }
            ItemKind::Row | ItemKind::Column | ItemKind::Root => {
                self.tightest(&node.children, axis)
            }
        };
        let (own_min, own_max) = explicit(&node.constraints, axis);
        if let Some(v) = own_min {
            min = min.max(v);
        }
        if let Some(v) = own_max {
            max = max.min(v);
        }
        (min, max)
    }

    pub fn min_size(&self, id: &ItemId, axis: Axis) -> f64 {
        self.limits(id, axis).0
    }

    pub fn max_size(&self, id: &ItemId, axis: Axis) -> f64 {
        self.limits(id, axis).1
    }

    fn tightest(&self, children: &[ItemId], axis: Axis) -> (f64, f64) {
        children
            .iter()
            .map(|c| self.limits(c, axis))
            .fold((0.0, f64::INFINITY), |(min, max), (cmin, cmax)| {
                (min.max(cmin), max.min(cmax))
            })
    }

    fn summed(&self, children: &[ItemId], axis: Axis) -> (f64, f64) {
        children
            .iter()
            .map(|c| self.limits(c, axis))
            .fold((0.0, 0.0), |(min, max), (cmin, cmax)| (min + cmin, max + cmax))
    }

    /// Current length of an item along `axis`.
    pub fn size_along(&self, id: &ItemId, axis: Axis) -> f64 {
        self.nodes
            .get(id)
            .map_or(0.0, |n| axis.length(&n.bounds))
    }

    /// The nearest ancestor-or-self of `id` whose parent splits along
    /// `axis`. Components resize through their stack.
    pub fn split_ancestor(&self, id: &ItemId, axis: Axis) -> Option<ItemId> {
        let mut current = id.clone();
        loop {
            let parent = self.parent_of(&current)?;
            if self.nodes.get(parent)?.kind.split_axis() == Some(axis) {
                return Some(current);
            }
            current = parent.clone();
        }
    }

    /// Give `id` `length` pixels of its parent's main axis, scaling its
    /// siblings to fill the rest. Returns false when nothing could change.
    pub fn update_size(&mut self, id: &ItemId, axis: Axis, length: f64) -> bool {
        let Some(parent) = self.parent_of(id).cloned() else {
            return false;
        };
        let Some(p) = self.nodes.get(&parent) else {
            return false;
        };
        if p.kind.split_axis() != Some(axis) || p.children.len() < 2 {
            return false;
        }
        let parent_len = axis.length(&p.bounds);
        if parent_len <= 0.0 {
            return false;
        }
        let siblings: Vec<ItemId> = p.children.iter().filter(|c| *c != id).cloned().collect();

        let share = (length / parent_len).clamp(0.0, 1.0);
        let others: f64 = siblings
            .iter()
            .filter_map(|s| self.nodes.get(s))
            .map(|n| n.weight)
            .sum();
        let remaining = 1.0 - share;
        let count = siblings.len() as f64;
        for sibling in &siblings {
            if let Some(node) = self.nodes.get_mut(sibling) {
                node.weight = if others > 0.0 {
                    node.weight / others * remaining
                } else {
                    remaining / count
                };
            }
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.weight = share;
        }
        self.relayout();
        true
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.relayout();
    }

    /// Recompute every node's bounds from the weights. The maximized item,
    /// when any, is laid out over the whole tree area.
    pub fn relayout(&mut self) {
        let root = self.root.clone();
        let bounds = self.bounds;
        self.layout_node(&root, bounds);
        if let Some(maximized) = self.maximized.clone() {
            self.layout_node(&maximized, bounds);
        }
    }

    fn layout_node(&mut self, id: &ItemId, bounds: Bounds) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        node.bounds = bounds;
        let kind = node.kind;
        let children = node.children.clone();

        match kind {
            ItemKind::Row | ItemKind::Column => {
                let total: f64 = children
                    .iter()
                    .filter_map(|c| self.nodes.get(c))
                    .map(|n| n.weight)
                    .sum();
                let mut offset = 0.0;
                for child in &children {
                    let weight = self.nodes.get(child).map_or(0.0, |n| n.weight);
                    let fraction = if total > 0.0 {
                        weight / total
                    } else {
                        1.0 / children.len() as f64
                    };
                    let child_bounds = if kind == ItemKind::Row {
                        Bounds::new(
                            bounds.top,
                            bounds.left + offset,
                            bounds.width * fraction,
                            bounds.height,
                        )
                    } else {
                        Bounds::new(
                            bounds.top + offset,
                            bounds.left,
                            bounds.width,
                            bounds.height * fraction,
                        )
                    };
                    offset += if kind == ItemKind::Row {
                        child_bounds.width
                    } else {
                        child_bounds.height
                    };
                    self.layout_node(child, child_bounds);
                }
            }
            ItemKind::Stack => {
                let header = self.header_height.min(bounds.height);
                let content = Bounds::new(
                    bounds.top + header,
                    bounds.left,
                    bounds.width,
                    bounds.height - header,
                );
                for child in &children {
                    self.layout_node(child, content);
                }
            }
            ItemKind::Root => {
                for child in &children {
                    self.layout_node(child, bounds);
                }
            }
            ItemKind::Component => {}
        }
    }
}
