//! The layout controller and its translation of tree events into domain
//! events.

use dockframe_common::{Bounds, Event, EventBus, FrameId, ItemId, LayoutError};
use dockframe_config::FrameConfig;

use crate::collaborators::FrameChrome;
use crate::store::{EntityStore, WindowRef, Workspace};
use crate::summaries;
use crate::tree::{DockTree, ItemKind, TreeEvent};
use crate::waiters::PendingCreations;
use crate::wrapper::WrapperFactory;

/// Performs every tree mutation for one frame. Borrows the frame's state
/// from the workspace manager for the duration of a command.
pub struct LayoutController<'a> {
    pub store: &'a mut EntityStore,
    pub wrappers: &'a mut WrapperFactory,
    pub pending: &'a mut PendingCreations,
    pub events: &'a EventBus,
    pub chrome: &'a dyn FrameChrome,
    pub config: &'a FrameConfig,
    pub frame_id: &'a FrameId,
    /// Workspace area new trees are laid out in.
    pub area: Bounds,
}

impl LayoutController<'_> {
    pub(crate) fn header_height(&self) -> f64 {
        self.config.layout.header_height
    }

    /// A workspace that exists and is not hibernated.
    pub(crate) fn live_workspace(&self, id: &ItemId) -> Result<&Workspace, LayoutError> {
        let ws = self
            .store
            .get_by_id(id)
            .ok_or_else(|| LayoutError::WorkspaceNotFound(id.clone()))?;
        if ws.is_hibernated() {
            return Err(LayoutError::WorkspaceHibernated(id.clone()));
        }
        Ok(ws)
    }

    /// The live workspace owning any id: the workspace itself, a container
    /// or a window.
    pub(crate) fn owning_workspace(&self, id: &ItemId) -> Result<ItemId, LayoutError> {
        let ws = self
            .store
            .get_by_item_id(id)
            .ok_or_else(|| LayoutError::ItemNotFound(id.clone()))?;
        if ws.is_hibernated() {
            return Err(LayoutError::WorkspaceHibernated(ws.id.clone()));
        }
        Ok(ws.id.clone())
    }

    pub(crate) fn tree(&self, workspace: &ItemId) -> Result<&DockTree, LayoutError> {
        self.live_workspace(workspace)?
            .layout()
            .ok_or_else(|| LayoutError::ItemNotFound(workspace.clone()))
    }

    pub(crate) fn tree_mut(&mut self, workspace: &ItemId) -> Result<&mut DockTree, LayoutError> {
        self.live_workspace(workspace)?;
        self.store
            .get_by_id_mut(workspace)
            .and_then(Workspace::layout_mut)
            .ok_or_else(|| LayoutError::ItemNotFound(workspace.clone()))
    }

    /// Drain the workspace tree's queued events and translate them.
    pub fn process_events(&mut self, workspace: &ItemId) {
        let events = self
            .store
            .get_by_id_mut(workspace)
            .and_then(Workspace::layout_mut)
            .map(DockTree::take_events)
            .unwrap_or_default();
        self.translate(workspace, events);
    }

    /// Turn tree events into store updates, waiter wake-ups and domain
    /// events, in emission order.
    pub(crate) fn translate(&mut self, workspace: &ItemId, events: Vec<TreeEvent>) {
        for event in events {
            match event {
                TreeEvent::Initialised { root } => {
                    tracing::debug!(%root, "layout initialised");
                    self.pending.resolve(&root);
                }
                TreeEvent::ItemCreated { id, kind } => {
                    tracing::debug!(%id, kind = kind.name(), "item created");
                    self.pending.resolve(&id);
                }
                TreeEvent::ComponentCreated { id } => self.on_component_created(workspace, &id),
                TreeEvent::ItemDestroyed {
                    id,
                    kind: ItemKind::Component,
                    parent,
                } => self.on_component_destroyed(workspace, &id, parent),
                TreeEvent::ItemDestroyed { id, kind, .. } => {
                    tracing::debug!(%id, kind = kind.name(), "item destroyed");
                }
                TreeEvent::ActiveContentItemChanged { item, .. } => {
                    self.publish_window(workspace, &item, Event::WindowSelected);
                }
                TreeEvent::StackCreated { id } => tracing::debug!(%id, "stack created"),
                TreeEvent::TabCreated { stack, item } => {
                    tracing::debug!(%stack, %item, "tab created");
                }
                TreeEvent::ItemDropped { id, parent } => {
                    tracing::debug!(%id, %parent, "item dropped");
                }
            }
        }
        self.sync_bounds(workspace);
    }

    fn on_component_created(&mut self, workspace: &ItemId, id: &ItemId) {
        let Some(ws) = self.store.get_by_id_mut(workspace) else {
            return;
        };
        let Some(node) = ws.layout().and_then(|t| t.get(id)) else {
            return;
        };
        if node.is_placeholder() {
            return;
        }
        let window = WindowRef::from_node(node);
        if ws.window(id).is_none() {
            ws.windows.push(window.clone());
        }
        let summary = summaries::window_summary(self.wrappers, self.frame_id, ws, &window);
        self.events.publish(Event::WindowAdded(summary));
    }

    fn on_component_destroyed(&mut self, workspace: &ItemId, id: &ItemId, parent: Option<ItemId>) {
        let Some(ws) = self.store.get_by_id_mut(workspace) else {
            return;
        };
        let Some(pos) = ws.windows.iter().position(|w| w.id == *id) else {
            return;
        };
        let window = ws.windows.remove(pos);
        let mut summary = summaries::window_summary(self.wrappers, self.frame_id, ws, &window);
        summary.parent_id = parent;
        self.events.publish(Event::WindowRemoved(summary));
    }

    /// Publish a window event for a window still known to the workspace.
    pub(crate) fn publish_window(
        &self,
        workspace: &ItemId,
        id: &ItemId,
        event: fn(dockframe_common::WindowSummary) -> Event,
    ) {
        let Some(ws) = self.store.get_by_id(workspace) else {
            return;
        };
        if let Some(window) = ws.window(id) {
            let summary = summaries::window_summary(self.wrappers, self.frame_id, ws, window);
            self.events.publish(event(summary));
        }
    }

    /// Copy laid-out bounds from the tree onto the workspace's window refs.
    pub(crate) fn sync_bounds(&mut self, workspace: &ItemId) {
        let Some(ws) = self.store.get_by_id_mut(workspace) else {
            return;
        };
        let Some(tree) = ws.layout() else {
            return;
        };
        let bounds: Vec<(ItemId, Bounds)> = ws
            .windows
            .iter()
            .filter_map(|w| tree.get(&w.id).map(|n| (w.id.clone(), n.bounds())))
            .collect();
        for (id, b) in bounds {
            if let Some(window) = ws.window_mut(&id) {
                window.bounds = b;
            }
        }
    }

    /// Tear a workspace's tree down and show the add-window affordance.
    /// The workspace record stays.
    pub fn reset_workspace(&mut self, workspace: &ItemId) -> Result<(), LayoutError> {
        let ws = self
            .store
            .get_by_id_mut(workspace)
            .ok_or_else(|| LayoutError::WorkspaceNotFound(workspace.clone()))?;
        let events = match ws.layout_mut() {
            Some(tree) => {
                tree.clear();
                tree.take_events()
            }
            None => Vec::new(),
        };
        ws.take_layout();
        self.translate(workspace, events);

        tracing::info!(%workspace, "workspace reset to empty");
        self.chrome.set_chrome_hidden(workspace, false);
        self.chrome.show_add_window_affordance(workspace, true);
        Ok(())
    }

    /// Relayout every live tree into a new workspace area.
    pub fn set_area(&mut self, area: Bounds) {
        self.area = area;
        let ids = self.store.workspace_ids();
        for id in &ids {
            if let Some(tree) = self.store.get_by_id_mut(id).and_then(Workspace::layout_mut) {
                tree.set_bounds(area);
            }
            self.sync_bounds(id);
        }
    }
}
