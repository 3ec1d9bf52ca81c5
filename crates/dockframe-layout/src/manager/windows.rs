//! Window and container operations routed through the layout controller,
//! plus relocation, eject and load tracking.

use dockframe_common::{ContainerKind, Event, ItemId, LayoutError, WindowId};
use serde_json::Value;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

use super::WorkspaceManager;
use crate::collaborators::EjectRequest;
use crate::layout::ResizeRequest;
use crate::schema::ItemConfig;
use crate::summaries;
use crate::waiters::{WindowLoaded, WINDOW_LOAD_TIMEOUT};

impl WorkspaceManager {
    pub async fn add_window(&mut self, parent_id: &ItemId, config: ItemConfig) -> Result<ItemId, LayoutError> {
        self.layout().add_window(parent_id, config).await
    }

    pub async fn add_container(&mut self, parent_id: &ItemId, config: ItemConfig) -> Result<ItemId, LayoutError> {
        self.layout().add_container(parent_id, config).await
    }

    pub fn resize_item(&mut self, request: &ResizeRequest) -> Result<(), LayoutError> {
        self.layout().resize(request)
    }

    pub fn maximize_item(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        self.layout().maximize(id)
    }

    pub fn restore_item(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        self.layout().restore(id)
    }

    pub fn bundle_workspace(&mut self, id: &ItemId, kind: ContainerKind) -> Result<ItemId, LayoutError> {
        self.layout().bundle_workspace(id, kind)
    }

    pub fn bundle_container(&mut self, id: &ItemId, kind: ContainerKind) -> Result<ItemId, LayoutError> {
        self.layout().bundle_container(id, kind)
    }

    /// Activate a window's tab, selecting its workspace first when needed.
    pub async fn select_window(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        let workspace = self
            .store
            .get_by_window_id(id)
            .map(|ws| ws.id.clone())
            .ok_or_else(|| LayoutError::WindowNotFound(id.clone()))?;
        if self.store.selected() != Some(&workspace) {
            self.select_workspace(&workspace).await?;
        }
        self.layout().select_window(id)
    }

    /// Move a window under another container, in this or another
    /// workspace of the frame. The placement id and wrapper state carry
    /// over.
    pub async fn move_window_to(&mut self, window_id: &ItemId, container_id: &ItemId) -> Result<ItemId, LayoutError> {
        let source = self
            .store
            .get_by_window_id(window_id)
            .ok_or_else(|| LayoutError::WindowNotFound(window_id.clone()))?;
        if source.is_hibernated() {
            return Err(LayoutError::WorkspaceHibernated(source.id.clone()));
        }
        let target = self
            .store
            .get_by_item_id(container_id)
            .ok_or_else(|| LayoutError::ContainerNotFound(container_id.clone()))?;
        if target.is_hibernated() {
            return Err(LayoutError::WorkspaceHibernated(target.id.clone()));
        }

        let mut controller = self.layout();
        if !controller.check_relocation(window_id, container_id)? {
            let placement = controller
                .store
                .find_window(window_id)
                .map(|(_, w)| w.id.clone())
                .ok_or_else(|| LayoutError::WindowNotFound(window_id.clone()))?;
            tracing::debug!(window = %placement, container = %container_id, "window already in place");
            return Ok(placement);
        }
        let config = controller.detach_window(window_id)?;
        let id = controller.attach_window(container_id, config).await?;
        tracing::info!(window = %id, container = %container_id, "window moved");
        Ok(id)
    }

    /// Remove a loaded window from the frame and have the launcher re-open
    /// it on its own with its last known context.
    pub async fn eject(&mut self, id: &ItemId) -> Result<WindowId, LayoutError> {
        let (ws, window) = self
            .store
            .find_window(id)
            .ok_or_else(|| LayoutError::WindowNotFound(id.clone()))?;
        if ws.is_hibernated() {
            return Err(LayoutError::WorkspaceHibernated(ws.id.clone()));
        }
        let window_id = window
            .window_id
            .clone()
            .ok_or_else(|| LayoutError::WindowNotLoaded(window.id.clone()))?;
        let request = EjectRequest {
            placement_id: window.id.clone(),
            window_id,
            app_name: window.app_name.clone(),
            url: window.url.clone(),
            title: window.title.clone(),
            context: window.context.clone(),
            bounds: window.bounds,
        };

        let removed = self.layout().remove_window(&request.placement_id)?;
        self.wrappers.forget(&removed.id);
        let opened = self.collaborators.launcher.open_window(request).await?;
        tracing::info!(placement = %removed.id, window = %opened, "window ejected");
        Ok(opened)
    }

    /// Record the hosted application instance behind a placement. Returns
    /// whether anything changed; repeated reports are ignored.
    pub fn window_loaded(&mut self, loaded: WindowLoaded) -> bool {
        let Some(workspace) = self
            .store
            .find_window(&loaded.placement_id)
            .filter(|(_, w)| w.window_id.as_ref() != Some(&loaded.window_id))
            .map(|(ws, _)| ws.id.clone())
        else {
            return false;
        };
        let Some(ws) = self.store.get_by_id_mut(&workspace) else {
            return false;
        };
        let Some(window) = ws
            .windows
            .iter_mut()
            .find(|w| w.id == loaded.placement_id)
        else {
            return false;
        };
        window.window_id = Some(loaded.window_id.clone());
        if let Some(tree) = ws.layout_mut() {
            tree.update_component(&loaded.placement_id, |data| {
                data.window_id = Some(loaded.window_id.clone());
            });
        }

        if let Some(ws) = self.store.get_by_id(&workspace) {
            if let Some(window) = ws.window(&loaded.placement_id) {
                let summary = summaries::window_summary(&self.wrappers, &self.frame_id, ws, window);
                self.events.publish(Event::WindowLoaded(summary));
            }
        }
        tracing::debug!(placement = %loaded.placement_id, window = %loaded.window_id, "window loaded");
        true
    }

    /// Apply every load reported since the last call.
    pub fn sync_loaded_windows(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.loads.try_recv() {
                Ok(loaded) => applied += usize::from(self.window_loaded(loaded)),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "window load reports lagged");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return applied,
            }
        }
    }

    /// Wait for a placement's hosted application to report its instance
    /// id, bounded by the window load timeout.
    pub async fn load_window(&mut self, id: &ItemId) -> Result<WindowId, LayoutError> {
        let mut rx = self.reporter.subscribe();
        self.sync_loaded_windows();
        let (placement, loaded) = self
            .store
            .find_window(id)
            .map(|(_, w)| (w.id.clone(), w.window_id.clone()))
            .ok_or_else(|| LayoutError::WindowNotFound(id.clone()))?;
        if let Some(window_id) = loaded {
            return Ok(window_id);
        }

        let wait = async {
            loop {
                match rx.recv().await {
                    Ok(report) if report.placement_id == placement => return Some(report),
                    Ok(_) => continue,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "window load reports lagged");
                    }
                    Err(RecvError::Closed) => return None,
                }
            }
        };
        match tokio::time::timeout(self.config.timeouts.window_load(), wait).await {
            Ok(Some(report)) => {
                let window_id = report.window_id.clone();
                self.window_loaded(report);
                self.sync_loaded_windows();
                Ok(window_id)
            }
            Ok(None) | Err(_) => {
                tracing::warn!(placement = %placement, reason = WINDOW_LOAD_TIMEOUT, "window load wait expired");
                Err(LayoutError::Timeout(WINDOW_LOAD_TIMEOUT))
            }
        }
    }

    /// Keep a window's last known application context, carried forward
    /// when it is ejected or snapshotted.
    pub fn set_window_context(&mut self, id: &ItemId, context: Value) -> Result<(), LayoutError> {
        let (workspace, placement) = self
            .store
            .find_window(id)
            .map(|(ws, w)| (ws.id.clone(), w.id.clone()))
            .ok_or_else(|| LayoutError::WindowNotFound(id.clone()))?;
        let ws = self
            .store
            .get_by_id_mut(&workspace)
            .ok_or_else(|| LayoutError::WorkspaceNotFound(workspace.clone()))?;
        if ws.is_hibernated() {
            return Err(LayoutError::WorkspaceHibernated(workspace));
        }
        if let Some(window) = ws.window_mut(&placement) {
            window.context = context.clone();
        }
        if let Some(tree) = ws.layout_mut() {
            tree.update_component(&placement, |data| data.context = context);
        }
        Ok(())
    }
}
