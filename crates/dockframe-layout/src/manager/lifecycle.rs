//! Workspace lifecycle: create, reinitialize, select, close and frame-level
//! housekeeping.

use dockframe_common::{Bounds, Event, ItemId, LayoutError, WindowSummary};

use super::WorkspaceManager;
use crate::locking::{workspace_state, WorkspaceLockConfig};
use crate::schema::{WorkspaceDefinition, WorkspaceSettings, WorkspaceSnapshot};
use crate::store::Workspace;
use crate::summaries;

impl WorkspaceManager {
    /// Open a workspace. The first one opens the frame; later ones become
    /// new tabs. A `reuse_workspace_id` naming an existing workspace
    /// rebuilds that workspace in place instead.
    pub async fn create_workspace(&mut self, definition: WorkspaceDefinition) -> Result<ItemId, LayoutError> {
        if let Some(id) = definition.config.reuse_workspace_id.clone() {
            if self.store.get_by_id(&id).is_some() {
                return self.reinitialize(&id, definition).await;
            }
        }

        let WorkspaceDefinition {
            children,
            config,
            context,
        } = definition;
        let id = config.reuse_workspace_id.clone().unwrap_or_default();
        let title = config
            .title
            .clone()
            .unwrap_or_else(|| self.config.layout.default_title.clone());

        let mut ws = Workspace::new(id.clone(), title);
        ws.context = context.clone();
        self.store.insert(ws, config.position_index);
        self.apply_settings(&id, &config);

        if !self.bootstrapped {
            self.bootstrapped = true;
            self.publish_frame(Event::FrameOpened);
        }
        self.publish_workspace(&id, Event::WorkspaceOpened);

        if !context.is_null() {
            self.collaborators
                .context_store
                .set_context(&id, context)
                .await?;
        }
        if children.is_empty() {
            self.collaborators.chrome.show_add_window_affordance(&id, true);
        } else {
            self.layout().init_layout(&id, children).await?;
        }
        if config.is_selected || self.store.selected().is_none() {
            self.mark_selected(&id);
        }

        tracing::info!(workspace = %id, "workspace created");
        Ok(id)
    }

    /// Tear a workspace's content down and rebuild it from `definition`,
    /// keeping its id and tab.
    async fn reinitialize(&mut self, id: &ItemId, definition: WorkspaceDefinition) -> Result<ItemId, LayoutError> {
        let WorkspaceDefinition {
            children,
            config,
            context,
        } = definition;

        let ws = self
            .store
            .get_by_id_mut(id)
            .ok_or_else(|| LayoutError::WorkspaceNotFound(id.clone()))?;
        ws.take_hibernate_config();
        if let Some(title) = &config.title {
            ws.title = title.clone();
        }
        if !context.is_null() {
            ws.context = context;
        }
        if ws.layout().is_some() {
            self.layout().reset_workspace(id)?;
        }
        self.apply_settings(id, &config);

        if !children.is_empty() {
            self.layout().init_layout(id, children).await?;
        }
        if config.is_selected {
            self.mark_selected(id);
        }

        tracing::info!(workspace = %id, "workspace reinitialized");
        Ok(id.clone())
    }

    fn apply_settings(&mut self, id: &ItemId, settings: &WorkspaceSettings) {
        self.wrappers.seed_workspace(id, &settings.lock);
        let wrapper = self.wrappers.workspace_wrapper(id);
        wrapper.is_pinned = settings.is_pinned;
        if settings.icon.is_some() {
            wrapper.icon = settings.icon.clone();
        }
    }

    /// Make sure the frame has a workspace to show.
    pub async fn init_empty(&mut self) -> Result<ItemId, LayoutError> {
        if let Some(id) = self.store.workspace_ids().into_iter().next() {
            return Ok(id);
        }
        self.create_workspace(WorkspaceDefinition::default()).await
    }

    /// Switch the active tab, resuming a hibernated workspace first.
    pub async fn select_workspace(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        let hibernated = self
            .store
            .get_by_id(id)
            .ok_or_else(|| LayoutError::WorkspaceNotFound(id.clone()))?
            .is_hibernated();
        if hibernated {
            self.resume_workspace(id).await?;
        }
        self.mark_selected(id);
        Ok(())
    }

    pub(super) fn mark_selected(&mut self, id: &ItemId) {
        self.store.set_selected(Some(id.clone()));
        if let Some(ws) = self.store.get_by_id_mut(id) {
            ws.touch();
        }
        self.publish_workspace(id, Event::WorkspaceSelected);
    }

    /// Close a workspace, container or window by id.
    pub async fn close_item(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        if self.store.get_by_id(id).is_some() {
            return self.close_workspace(id).await;
        }
        if self.store.get_by_container_id(id).is_some() {
            let windows = self
                .store
                .get_by_container_id(id)
                .and_then(|ws| ws.layout().map(|t| (ws, t.windows_under(id))))
                .map(|(ws, ids)| {
                    ids.iter()
                        .filter_map(|w| ws.window(w))
                        .map(|w| summaries::window_summary(&self.wrappers, &self.frame_id, ws, w))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            self.notify_closing(&windows).await;
            self.layout().remove_container(id)?;
            for window in &windows {
                self.wrappers.forget(&window.id);
            }
            self.wrappers.forget(id);
            return Ok(());
        }
        if self.store.find_window(id).is_some() {
            return self.close_window(id).await;
        }
        Err(LayoutError::ItemNotFound(id.clone()))
    }

    pub async fn close_window(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        if let Some((ws, _)) = self.store.find_window(id) {
            if ws.is_hibernated() {
                return Err(LayoutError::WorkspaceHibernated(ws.id.clone()));
            }
        }
        let summary = self.window_summary(id)?;
        self.notify_closing(std::slice::from_ref(&summary)).await;
        let removed = self.layout().remove_window(id)?;
        self.wrappers.forget(&removed.id);
        Ok(())
    }

    /// Close a workspace. The frame never runs out of workspaces: closing
    /// the last one opens a fresh empty one, unless the host is shutting
    /// down, in which case the frame closes with it.
    pub async fn close_workspace(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        if self.store.get_by_id(id).is_none() {
            return Err(LayoutError::WorkspaceNotFound(id.clone()));
        }
        let position = self.store.position(id).unwrap_or_default();
        let was_selected = self.store.selected() == Some(id);
        let last = self.store.len() == 1;

        self.teardown_workspace(id).await?;

        if last {
            if self.collaborators.host.is_shutting_down() {
                self.close_frame();
            } else {
                self.create_workspace(WorkspaceDefinition::default()).await?;
            }
            return Ok(());
        }
        if was_selected {
            let ids = self.store.workspace_ids();
            if let Some(next) = ids.get(position.min(ids.len().saturating_sub(1))).cloned() {
                self.select_workspace(&next).await?;
            }
        }
        Ok(())
    }

    /// Notify, tear down and drop a workspace, emitting window removed for
    /// every live window before workspace closed.
    async fn teardown_workspace(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        let Some(ws) = self.store.get_by_id(id) else {
            return Err(LayoutError::WorkspaceNotFound(id.clone()));
        };
        let windows: Vec<WindowSummary> = ws
            .windows
            .iter()
            .map(|w| summaries::window_summary(&self.wrappers, &self.frame_id, ws, w))
            .collect();
        let mut owned: Vec<ItemId> = ws
            .layout()
            .map(|t| t.nodes_in_order().into_iter().map(|n| n.id().clone()).collect())
            .unwrap_or_default();
        owned.extend(ws.hibernated_windows.iter().map(|w| w.id.clone()));
        let summary = self.workspace_summary(id)?;

        self.notify_closing(&windows).await;
        if self.store.get_by_id(id).is_some_and(|ws| ws.layout().is_some()) {
            self.layout().reset_workspace(id)?;
        }
        self.store.remove_by_id(id);
        for item in &owned {
            self.wrappers.forget(item);
        }
        self.wrappers.forget(id);

        self.events.publish(Event::WorkspaceClosed(summary));
        tracing::info!(workspace = %id, "workspace closed");
        Ok(())
    }

    /// Best effort: a failed notification is logged and never blocks the
    /// close.
    pub(super) async fn notify_closing(&self, windows: &[WindowSummary]) {
        for window in windows {
            if let Err(e) = self.collaborators.launcher.notify_window_closing(window).await {
                tracing::warn!(window = %window.id, error = %e, "window closing notification failed");
            }
        }
    }

    fn close_frame(&mut self) {
        self.publish_frame(Event::FrameClosed);
        self.collaborators.host.close_frame();
        tracing::info!(frame = %self.frame_id, "frame closed");
    }

    /// Close every workspace and then the hosting window.
    pub async fn shutdown(&mut self) -> Result<(), LayoutError> {
        for id in self.store.workspace_ids() {
            self.teardown_workspace(&id).await?;
        }
        self.close_frame();
        Ok(())
    }

    // -- Workspace settings --

    pub fn set_workspace_title(&mut self, id: &ItemId, title: impl Into<String>) -> Result<(), LayoutError> {
        let ws = self
            .store
            .get_by_id_mut(id)
            .ok_or_else(|| LayoutError::WorkspaceNotFound(id.clone()))?;
        ws.title = title.into();
        Ok(())
    }

    pub fn pin_workspace(&mut self, id: &ItemId, icon: Option<String>) -> Result<(), LayoutError> {
        self.require_workspace(id)?;
        let wrapper = self.wrappers.workspace_wrapper(id);
        wrapper.is_pinned = true;
        if icon.is_some() {
            wrapper.icon = icon;
        }
        self.refresh_icon(id);
        Ok(())
    }

    pub fn unpin_workspace(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        self.require_workspace(id)?;
        self.wrappers.workspace_wrapper(id).is_pinned = false;
        self.refresh_icon(id);
        Ok(())
    }

    pub fn set_workspace_icon(&mut self, id: &ItemId, icon: Option<String>) -> Result<(), LayoutError> {
        self.require_workspace(id)?;
        self.wrappers.workspace_wrapper(id).icon = icon;
        self.refresh_icon(id);
        Ok(())
    }

    pub(super) fn refresh_icon(&self, id: &ItemId) {
        let (pinned, icon) = self
            .wrappers
            .peek_workspace(id)
            .map(|w| (w.is_pinned, w.icon.as_deref()))
            .unwrap_or((false, None));
        self.collaborators.chrome.show_workspace_icon(id, pinned, icon);
    }

    pub(super) fn require_workspace(&self, id: &ItemId) -> Result<&Workspace, LayoutError> {
        self.store
            .get_by_id(id)
            .ok_or_else(|| LayoutError::WorkspaceNotFound(id.clone()))
    }

    /// Snapshot a workspace's tree, settings and custom context without
    /// touching it. A hibernated workspace returns its stored snapshot.
    pub async fn snapshot(&self, id: &ItemId) -> Result<WorkspaceSnapshot, LayoutError> {
        let ws = self.require_workspace(id)?;
        if let Some(snapshot) = ws.hibernate_config() {
            return Ok(snapshot.clone());
        }

        let mut children = ws.layout().map(|t| t.content_config()).unwrap_or_default();
        for child in &mut children {
            self.wrappers.annotate(child);
        }
        let wrapper = self.wrappers.peek_workspace(id);
        let config = WorkspaceSettings {
            title: Some(ws.title.clone()),
            icon: wrapper.and_then(|w| w.icon.clone()),
            is_pinned: wrapper.is_some_and(|w| w.is_pinned),
            is_selected: self.store.selected() == Some(id),
            reuse_workspace_id: None,
            position_index: self.store.position(id),
            lock: WorkspaceLockConfig::from_state(&workspace_state(&self.wrappers, id)),
        };

        let stored = self.collaborators.context_store.get_context(id).await?;
        let context = if stored.is_null() { ws.context.clone() } else { stored };

        Ok(WorkspaceSnapshot {
            id: id.clone(),
            children,
            config,
            context,
        })
    }

    // -- Frame --

    pub fn focus_frame(&self) {
        self.publish_frame(Event::FrameFocus);
    }

    /// Re-lay out every live tree into a new workspace area.
    pub fn set_frame_bounds(&mut self, bounds: Bounds) {
        self.area = bounds;
        self.layout().set_area(bounds);
        tracing::debug!(?bounds, "frame bounds changed");
    }
}
