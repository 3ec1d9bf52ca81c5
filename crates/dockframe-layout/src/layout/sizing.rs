//! Resize feasibility and maximize/restore.

use dockframe_common::{Event, ItemId, LayoutError};
use serde::{Deserialize, Serialize};

use super::LayoutController;
use crate::tree::{Axis, DockTree, ItemKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeRequest {
    pub item_id: ItemId,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

/// Closed range an item may be resized to along one axis, or `None` when
/// the constraints leave no room.
pub fn feasible_range(tree: &DockTree, target: &ItemId, axis: Axis) -> Option<(f64, f64)> {
    let parent = tree.parent_of(target)?;
    let (item_min, item_max) = tree.limits(target, axis);
    let (parent_min, parent_max) = tree.limits(parent, axis);
    let parent_size = tree.size_along(parent, axis);

    let (sibling_min, sibling_max) = tree
        .get(parent)?
        .children()
        .iter()
        .filter(|c| *c != target)
        .map(|c| tree.limits(c, axis))
        .fold((0.0, 0.0), |(min, max), (cmin, cmax)| (min + cmin, max + cmax));

    let lower = item_min.max(parent_min - sibling_max);
    let upper = item_max.min(parent_max).min(parent_size - sibling_min);
    (lower <= upper).then_some((lower, upper))
}

impl LayoutController<'_> {
    /// Resize an item. Requests outside what the constraints allow are
    /// clamped; requests with no feasible range at all are dropped.
    pub fn resize(&mut self, request: &ResizeRequest) -> Result<(), LayoutError> {
        let id = &request.item_id;
        if *id == self.frame_id.as_item_id() || self.store.get_by_id(id).is_some() {
            return Err(LayoutError::FrameResize(id.clone()));
        }
        let workspace = self.owning_workspace(id)?;
        let header = self.header_height();
        let tree = self.tree_mut(&workspace)?;
        let kind = tree
            .get(id)
            .map(|n| n.kind())
            .ok_or_else(|| LayoutError::ItemNotFound(id.clone()))?;

        for (axis, requested) in [
            (Axis::Horizontal, request.width),
            (Axis::Vertical, request.height),
        ] {
            let Some(mut requested) = requested else {
                continue;
            };
            if axis == Axis::Vertical && matches!(kind, ItemKind::Stack | ItemKind::Row) {
                requested -= header;
            }
            let Some(target) = tree.split_ancestor(id, axis) else {
                tracing::debug!(%id, ?axis, "no splitter along axis, resize skipped");
                continue;
            };
            let Some((lower, upper)) = feasible_range(tree, &target, axis) else {
                tracing::debug!(%id, ?axis, "no feasible size, resize skipped");
                continue;
            };
            let size = requested.clamp(lower, upper);
            tree.update_size(&target, axis, size);
        }

        self.sync_bounds(&workspace);
        Ok(())
    }

    /// Maximize a container, or a window's group, over the workspace area.
    pub fn maximize(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        let workspace = self.owning_workspace(id)?;
        let target = self.maximize_target(&workspace, id)?;

        let previous = self.tree(&workspace)?.maximized().cloned();
        if let Some(previous) = previous.filter(|p| *p != target) {
            self.restore_target(&workspace, &previous)?;
        }

        let tree = self.tree_mut(&workspace)?;
        tree.maximize(&target)?;
        let under_root = tree
            .parent_of(&target)
            .is_some_and(|p| p == tree.root_id() || Some(p) == tree.top_container());
        let windows = tree.windows_under(&target);

        let boundary = self
            .wrappers
            .peek_container(&target)
            .is_some_and(|w| w.maximization_boundary)
            || self
                .wrappers
                .peek_window(id)
                .is_some_and(|w| w.maximization_boundary);
        if under_root && !boundary {
            self.chrome.set_chrome_hidden(&workspace, true);
        }

        self.sync_bounds(&workspace);
        for window in &windows {
            self.publish_window(&workspace, window, Event::WindowMaximized);
        }
        Ok(())
    }

    pub fn restore(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        let workspace = self.owning_workspace(id)?;
        let target = self.maximize_target(&workspace, id)?;
        self.restore_target(&workspace, &target)
    }

    pub(super) fn restore_target(&mut self, workspace: &ItemId, target: &ItemId) -> Result<(), LayoutError> {
        let tree = self.tree_mut(workspace)?;
        if !tree.restore(target) {
            return Ok(());
        }
        let windows = tree.windows_under(target);
        self.chrome.set_chrome_hidden(workspace, false);
        self.sync_bounds(workspace);
        for window in &windows {
            self.publish_window(workspace, window, Event::WindowRestored);
        }
        Ok(())
    }

    /// Windows maximize through their group.
    fn maximize_target(&self, workspace: &ItemId, id: &ItemId) -> Result<ItemId, LayoutError> {
        let tree = self.tree(workspace)?;
        let placement = self
            .store
            .find_window(id)
            .map(|(_, w)| w.id.clone())
            .unwrap_or_else(|| id.clone());
        let node = tree
            .get(&placement)
            .ok_or_else(|| LayoutError::ItemNotFound(id.clone()))?;
        match node.kind() {
            ItemKind::Component => tree
                .enclosing_stack(&placement)
                .cloned()
                .ok_or_else(|| LayoutError::ItemNotFound(id.clone())),
            ItemKind::Root => Err(LayoutError::ItemNotFound(id.clone())),
            _ => Ok(placement),
        }
    }
}
