//! Structural mutations: initial trees, adding windows and containers,
//! bundling, removal and relocation.

use dockframe_common::{ContainerKind, Event, ItemId, LayoutError};

use super::LayoutController;
use crate::schema::ItemConfig;
use crate::store::{WindowRef, Workspace};
use crate::tree::{DockTree, ItemKind};
use crate::waiters::{
    CONTAINER_CREATION_TIMEOUT, LAYOUT_INIT_TIMEOUT, WINDOW_CREATION_TIMEOUT,
};

impl LayoutController<'_> {
    /// Build a workspace's first tree and wait for it to initialise.
    pub async fn init_layout(
        &mut self,
        workspace: &ItemId,
        mut children: Vec<ItemConfig>,
    ) -> Result<(), LayoutError> {
        for child in &mut children {
            child.ensure_ids();
            self.wrappers.seed_from_config(child);
        }
        let wait = self.pending.register(workspace.clone());
        let tree = DockTree::from_config(workspace.clone(), children, self.area, self.header_height())?;
        self.store
            .get_by_id_mut(workspace)
            .ok_or_else(|| LayoutError::WorkspaceNotFound(workspace.clone()))?
            .attach_layout(tree);
        self.process_events(workspace);
        self.chrome.show_add_window_affordance(workspace, false);

        wait.wait(self.config.timeouts.layout_init(), LAYOUT_INIT_TIMEOUT)
            .await?;
        Ok(())
    }

    /// Add a window under `parent_id` (a workspace, container or window id).
    /// Resolves once the window's creation has been observed.
    pub async fn add_window(
        &mut self,
        parent_id: &ItemId,
        mut config: ItemConfig,
    ) -> Result<ItemId, LayoutError> {
        if !matches!(config, ItemConfig::Window(_)) {
            return Err(LayoutError::InvalidParent {
                parent: parent_id.clone(),
                child: config.type_name().to_string(),
            });
        }
        let workspace = self.owning_workspace(parent_id)?;
        let id = config.ensure_ids();
        self.wrappers.seed_from_config(&config);
        let wait = self.pending.register(id.clone());

        self.place(&workspace, parent_id, config).await?;
        wait.wait(self.config.timeouts.window_creation(), WINDOW_CREATION_TIMEOUT)
            .await
    }

    /// Add a row, column or group under `parent_id`. Adding at the
    /// workspace root first bundles the existing root content into the
    /// opposite axis. Resolves once the container's creation has been
    /// observed.
    pub async fn add_container(
        &mut self,
        parent_id: &ItemId,
        mut config: ItemConfig,
    ) -> Result<ItemId, LayoutError> {
        if config.container_kind().is_none() {
            return Err(LayoutError::InvalidParent {
                parent: parent_id.clone(),
                child: config.type_name().to_string(),
            });
        }
        let workspace = self.owning_workspace(parent_id)?;
        let id = config.ensure_ids();
        self.wrappers.seed_from_config(&config);
        let wait = self.pending.register(id.clone());

        let at_root = *parent_id == workspace;
        let has_content = self
            .store
            .get_by_id(&workspace)
            .and_then(Workspace::layout)
            .is_some_and(|t| !t.is_empty());
        if at_root && has_content {
            self.add_at_root(&workspace, config)?;
        } else {
            self.place(&workspace, parent_id, config).await?;
        }
        wait.wait(self.config.timeouts.container_creation(), CONTAINER_CREATION_TIMEOUT)
            .await
    }

    /// Put `config` into the workspace: as the initial tree when there is
    /// none, into a placeholder slot when the target holds one, otherwise
    /// appended to the target.
    async fn place(
        &mut self,
        workspace: &ItemId,
        parent_id: &ItemId,
        config: ItemConfig,
    ) -> Result<(), LayoutError> {
        let has_content = self
            .store
            .get_by_id(workspace)
            .and_then(Workspace::layout)
            .is_some_and(|t| !t.is_empty());
        if !has_content {
            return self.init_layout(workspace, vec![config]).await;
        }

        let tree = self.tree_mut(workspace)?;
        let target = resolve_target(tree, parent_id)?;
        match tree.placeholder_slot(&target) {
            Some(slot) => fill_placeholder(tree, &slot, config)?,
            None => {
                tree.insert_config(&target, None, config)?;
            }
        }
        self.process_events(workspace);
        Ok(())
    }

    fn add_at_root(&mut self, workspace: &ItemId, config: ItemConfig) -> Result<(), LayoutError> {
        let tree = self.tree_mut(workspace)?;
        let top = tree
            .top_container()
            .cloned()
            .ok_or_else(|| LayoutError::ItemNotFound(workspace.clone()))?;

        if let Some(slot) = tree.placeholder_slot(&top) {
            fill_placeholder(tree, &slot, config)?;
        } else {
            let opposite = match tree.get(&top).map(|n| n.kind()) {
                Some(ItemKind::Row) => ItemKind::Column,
                _ => ItemKind::Row,
            };
            let bundle = tree.wrap(&top, opposite)?;
            tree.insert_config(&bundle, None, config)?;
        }
        self.process_events(workspace);
        Ok(())
    }

    /// Wrap a workspace's root content into a new row or column.
    pub fn bundle_workspace(
        &mut self,
        workspace: &ItemId,
        kind: ContainerKind,
    ) -> Result<ItemId, LayoutError> {
        let top = self
            .tree(workspace)?
            .top_container()
            .cloned()
            .ok_or_else(|| LayoutError::ItemNotFound(workspace.clone()))?;
        self.bundle(workspace, &top, kind)
    }

    /// Wrap an arbitrary container into a new row or column.
    pub fn bundle_container(
        &mut self,
        container: &ItemId,
        kind: ContainerKind,
    ) -> Result<ItemId, LayoutError> {
        let workspace = self
            .store
            .get_by_container_id(container)
            .map(|ws| ws.id.clone())
            .ok_or_else(|| LayoutError::ContainerNotFound(container.clone()))?;
        self.bundle(&workspace, container, kind)
    }

    fn bundle(
        &mut self,
        workspace: &ItemId,
        item: &ItemId,
        kind: ContainerKind,
    ) -> Result<ItemId, LayoutError> {
        let wrapper = self.tree_mut(workspace)?.wrap(item, ItemKind::from_container(kind))?;
        self.process_events(workspace);
        tracing::debug!(%item, %wrapper, %kind, "bundled");
        Ok(wrapper)
    }

    /// Remove a window from its live workspace, resetting the workspace
    /// when it was the last one. Returns the removed reference.
    pub fn remove_window(&mut self, id: &ItemId) -> Result<WindowRef, LayoutError> {
        let (workspace, window) = self
            .store
            .find_window(id)
            .map(|(ws, w)| (ws.id.clone(), w.clone()))
            .ok_or_else(|| LayoutError::WindowNotFound(id.clone()))?;

        self.restore_before_removal(&workspace, &window.id)?;
        self.tree_mut(&workspace)?.remove_item(&window.id)?;
        self.process_events(&workspace);
        self.reset_if_empty(&workspace)?;
        Ok(window)
    }

    /// Remove a container. A container sitting directly under the root
    /// takes the whole workspace with it.
    pub fn remove_container(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        let workspace = self
            .store
            .get_by_container_id(id)
            .map(|ws| ws.id.clone())
            .ok_or_else(|| LayoutError::ContainerNotFound(id.clone()))?;

        self.restore_before_removal(&workspace, id)?;
        let tree = self.tree_mut(&workspace)?;
        if tree.parent_of(id) == Some(tree.root_id()) {
            return self.reset_workspace(&workspace);
        }
        tree.remove_item(id)?;
        self.process_events(&workspace);
        self.reset_if_empty(&workspace)
    }

    /// Restore the maximized item first when removing `id` takes it down,
    /// so its windows report restored and the chrome comes back.
    fn restore_before_removal(&mut self, workspace: &ItemId, id: &ItemId) -> Result<(), LayoutError> {
        let tree = self.tree(workspace)?;
        let Some(maximized) = tree.maximized().cloned() else {
            return Ok(());
        };
        if survives_removal(tree, id, &maximized)? {
            return Ok(());
        }
        self.restore_target(workspace, &maximized)
    }

    fn reset_if_empty(&mut self, workspace: &ItemId) -> Result<(), LayoutError> {
        let empty = self
            .store
            .get_by_id(workspace)
            .is_some_and(|ws| ws.windows.is_empty() && ws.layout().is_some());
        if empty {
            self.reset_workspace(workspace)?;
        }
        Ok(())
    }

    /// Check a relocation before anything is detached. Returns false when
    /// the window already sits inside the destination and detaching it
    /// would take the destination down. Fails when detaching would destroy
    /// a destination the window is not part of.
    pub fn check_relocation(&self, id: &ItemId, container: &ItemId) -> Result<bool, LayoutError> {
        let (source, placement) = self
            .store
            .find_window(id)
            .map(|(ws, w)| (ws.id.clone(), w.id.clone()))
            .ok_or_else(|| LayoutError::WindowNotFound(id.clone()))?;
        let destination = self
            .store
            .get_by_item_id(container)
            .map(|ws| ws.id.clone())
            .ok_or_else(|| LayoutError::ContainerNotFound(container.clone()))?;
        if source != destination {
            return Ok(true);
        }

        let tree = self.tree(&source)?;
        let target = resolve_target(tree, container)?;
        if target == *tree.root_id() || survives_removal(tree, &placement, &target)? {
            return Ok(true);
        }
        if tree.descendants(&target).contains(&placement) {
            return Ok(false);
        }
        Err(LayoutError::InvalidParent {
            parent: container.clone(),
            child: "window".to_string(),
        })
    }

    /// Take a window out of its workspace for relocation. The returned
    /// config keeps the placement id and the wrapper state.
    pub fn detach_window(&mut self, id: &ItemId) -> Result<ItemConfig, LayoutError> {
        let (workspace, placement) = self
            .store
            .find_window(id)
            .map(|(ws, w)| (ws.id.clone(), w.id.clone()))
            .ok_or_else(|| LayoutError::WindowNotFound(id.clone()))?;
        let mut config = self
            .tree(&workspace)?
            .extract_config(&placement)
            .ok_or_else(|| LayoutError::WindowNotFound(placement.clone()))?;
        self.wrappers.annotate(&mut config);
        self.remove_window(&placement)?;
        Ok(config)
    }

    /// Place a detached window under `container`.
    pub async fn attach_window(
        &mut self,
        container: &ItemId,
        config: ItemConfig,
    ) -> Result<ItemId, LayoutError> {
        let id = self.add_window(container, config).await?;
        if let Some(workspace) = self.store.get_by_item_id(&id).map(|ws| ws.id.clone()) {
            if let Some(tree) = self.store.get_by_id_mut(&workspace).and_then(Workspace::layout_mut) {
                tree.mark_dropped(&id);
            }
            self.process_events(&workspace);
        }
        Ok(id)
    }

    /// Activate a window's tab. Emits window selected even when the tab
    /// was already active.
    pub fn select_window(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        let (workspace, placement) = self
            .store
            .find_window(id)
            .map(|(ws, w)| (ws.id.clone(), w.id.clone()))
            .ok_or_else(|| LayoutError::WindowNotFound(id.clone()))?;
        let tree = self.tree_mut(&workspace)?;
        let stack = tree
            .enclosing_stack(&placement)
            .cloned()
            .ok_or_else(|| LayoutError::WindowNotFound(placement.clone()))?;
        if tree.set_active(&stack, &placement) {
            self.process_events(&workspace);
        } else {
            self.publish_window(&workspace, &placement, Event::WindowSelected);
        }
        Ok(())
    }
}

/// Where an item added under `parent_id` goes. The workspace id picks the
/// first row or column, else the first stack; a window id picks its stack.
fn resolve_target(tree: &DockTree, parent_id: &ItemId) -> Result<ItemId, LayoutError> {
    if parent_id == tree.root_id() {
        return Ok(tree
            .first_split_container()
            .or_else(|| tree.first_stack())
            .unwrap_or_else(|| tree.root_id().clone()));
    }
    let node = tree
        .get(parent_id)
        .ok_or_else(|| LayoutError::ContainerNotFound(parent_id.clone()))?;
    match node.kind() {
        ItemKind::Component => tree
            .enclosing_stack(parent_id)
            .cloned()
            .ok_or_else(|| LayoutError::ContainerNotFound(parent_id.clone())),
        _ => Ok(parent_id.clone()),
    }
}

/// Whether `keep` is still standing after `removed` goes, counting the
/// reset that follows when no window is left.
fn survives_removal(tree: &DockTree, removed: &ItemId, keep: &ItemId) -> Result<bool, LayoutError> {
    let mut remaining = tree.clone();
    remaining.remove_item(removed)?;
    Ok(remaining.contains(keep) && !remaining.windows().is_empty())
}

/// Replace a placeholder: a window takes the placeholder leaf's place, a
/// container takes the whole placeholder stack's.
fn fill_placeholder(tree: &mut DockTree, slot: &ItemId, config: ItemConfig) -> Result<(), LayoutError> {
    match config {
        ItemConfig::Window(_) => {
            let placeholder = tree
                .get(slot)
                .and_then(|s| s.children().first().cloned())
                .ok_or_else(|| LayoutError::ContainerNotFound(slot.clone()))?;
            tree.replace_child(&placeholder, config)?;
        }
        _ => {
            tree.replace_child(slot, config)?;
        }
    }
    Ok(())
}
