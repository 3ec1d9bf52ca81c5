//! Workspace records and the window references they own.

use dockframe_common::{Bounds, ItemId, WindowId};
use serde_json::Value;

use crate::schema::WorkspaceSnapshot;
use crate::tree::{DockTree, Node};

/// A window placement known to a workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRef {
    /// Placement id, stable for the lifetime of the tree position.
    pub id: ItemId,
    /// Hosted application instance. `None` until the window has loaded.
    pub window_id: Option<WindowId>,
    pub app_name: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    /// Last known application context, carried forward on eject.
    pub context: Value,
    pub bounds: Bounds,
}

impl WindowRef {
    pub fn from_node(node: &Node) -> Self {
        let data = node.component().cloned().unwrap_or_default();
        Self {
            id: node.id().clone(),
            window_id: data.window_id,
            app_name: data.app_name,
            url: data.url,
            title: data.title,
            context: data.context,
            bounds: node.bounds(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.window_id.is_some()
    }

    pub fn matches(&self, id: &ItemId) -> bool {
        self.id == *id
            || self
                .window_id
                .as_ref()
                .is_some_and(|w| w.as_str() == id.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Workspace {
    pub id: ItemId,
    pub title: String,
    pub windows: Vec<WindowRef>,
    pub hibernated_windows: Vec<WindowRef>,
    /// Unix millis of the last selection.
    pub last_active: i64,
    /// Custom workspace data, mirrored into the context store.
    pub context: Value,
    layout: Option<DockTree>,
    hibernate_config: Option<WorkspaceSnapshot>,
}

impl Workspace {
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            windows: Vec::new(),
            hibernated_windows: Vec::new(),
            last_active: chrono::Utc::now().timestamp_millis(),
            context: Value::Null,
            layout: None,
            hibernate_config: None,
        }
    }

    pub fn layout(&self) -> Option<&DockTree> {
        self.layout.as_ref()
    }

    pub fn layout_mut(&mut self) -> Option<&mut DockTree> {
        self.layout.as_mut()
    }

    pub fn hibernate_config(&self) -> Option<&WorkspaceSnapshot> {
        self.hibernate_config.as_ref()
    }

    pub fn is_hibernated(&self) -> bool {
        self.hibernate_config.is_some()
    }

    /// No tree or no real windows.
    pub fn is_empty(&self) -> bool {
        self.layout.is_none() || self.windows.is_empty()
    }

    /// Attach a live tree. Any hibernation snapshot is dropped so the two
    /// never coexist.
    pub fn attach_layout(&mut self, tree: DockTree) {
        self.hibernate_config = None;
        self.hibernated_windows.clear();
        self.layout = Some(tree);
    }

    pub fn take_layout(&mut self) -> Option<DockTree> {
        self.layout.take()
    }

    /// Release the tree and park the windows behind a snapshot.
    pub fn hibernate(&mut self, snapshot: WorkspaceSnapshot) -> Option<DockTree> {
        self.hibernated_windows = std::mem::take(&mut self.windows);
        self.hibernate_config = Some(snapshot);
        self.layout.take()
    }

    /// Clear the hibernation state, returning the snapshot to rebuild from.
    pub fn take_hibernate_config(&mut self) -> Option<WorkspaceSnapshot> {
        self.hibernated_windows.clear();
        self.hibernate_config.take()
    }

    pub fn window(&self, id: &ItemId) -> Option<&WindowRef> {
        self.windows.iter().find(|w| w.id == *id)
    }

    pub fn window_mut(&mut self, id: &ItemId) -> Option<&mut WindowRef> {
        self.windows.iter_mut().find(|w| w.id == *id)
    }

    pub fn touch(&mut self) {
        self.last_active = chrono::Utc::now().timestamp_millis();
    }
}
