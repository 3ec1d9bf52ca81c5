//! Hibernate and resume: release a background workspace's tree behind a
//! snapshot, and rebuild it from that snapshot later.

use dockframe_common::{Event, ItemId, LayoutError, WindowSummary};

use super::WorkspaceManager;
use crate::schema::WorkspaceSnapshot;
use crate::summaries;

impl WorkspaceManager {
    /// Hibernate a populated, inactive workspace. Returns the snapshot the
    /// workspace will be resumed from.
    pub async fn hibernate_workspace(&mut self, id: &ItemId) -> Result<WorkspaceSnapshot, LayoutError> {
        let ws = self.require_workspace(id)?;
        if ws.is_hibernated() {
            return Err(LayoutError::AlreadyHibernated(id.clone()));
        }
        if self.store.selected() == Some(id) {
            return Err(LayoutError::CannotHibernateActive(id.clone()));
        }
        if ws.is_empty() {
            return Err(LayoutError::CannotHibernateEmpty(id.clone()));
        }

        let snapshot = self.snapshot(id).await?;

        let ws = self.require_workspace(id)?;
        let removed: Vec<WindowSummary> = ws
            .windows
            .iter()
            .map(|w| summaries::window_summary(&self.wrappers, &self.frame_id, ws, w))
            .collect();
        if let Some(ws) = self.store.get_by_id_mut(id) {
            ws.hibernate(snapshot.clone());
        }

        for summary in removed {
            self.events.publish(Event::WindowRemoved(summary));
        }
        self.collaborators.chrome.show_hibernation_indicator(id, true);
        self.publish_workspace(id, Event::WorkspaceHibernated);
        tracing::info!(workspace = %id, "workspace hibernated");
        Ok(snapshot)
    }

    /// Rebuild a hibernated workspace in place from its snapshot.
    pub async fn resume_workspace(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        let snapshot = self
            .require_workspace(id)?
            .hibernate_config()
            .cloned()
            .ok_or_else(|| LayoutError::NotHibernated(id.clone()))?;
        let context = snapshot.context.clone();

        self.create_workspace(snapshot.into_definition()).await?;
        if !context.is_null() {
            self.collaborators.context_store.set_context(id, context).await?;
        }

        self.collaborators.chrome.show_hibernation_indicator(id, false);
        self.refresh_icon(id);
        self.publish_workspace(id, Event::WorkspaceResumed);
        tracing::info!(workspace = %id, "workspace resumed");
        Ok(())
    }
}
