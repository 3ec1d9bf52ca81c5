//! Lookups and mutations on the entity store. Lookups never fail; callers
//! turn a `None` into the domain error that fits.

use std::collections::HashMap;

use dockframe_common::ItemId;

use super::{WindowRef, Workspace};
use crate::tree::{DockTree, Node};

/// Frame-local registry of workspaces, in tab order.
#[derive(Debug, Default)]
pub struct EntityStore {
    workspaces: HashMap<ItemId, Workspace>,
    order: Vec<ItemId>,
    selected: Option<ItemId>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_by_id(&self, id: &ItemId) -> Option<&Workspace> {
        self.workspaces.get(id)
    }

    pub fn get_by_id_mut(&mut self, id: &ItemId) -> Option<&mut Workspace> {
        self.workspaces.get_mut(id)
    }

    /// The workspace whose tree holds container `id`.
    pub fn get_by_container_id(&self, id: &ItemId) -> Option<&Workspace> {
        self.iter().find(|ws| {
            ws.layout()
                .and_then(|t| t.get(id))
                .is_some_and(|n| n.kind().is_container())
        })
    }

    /// The workspace holding a window, matched by placement id or hosted
    /// window id. Hibernated windows count.
    pub fn get_by_window_id(&self, id: &ItemId) -> Option<&Workspace> {
        self.iter().find(|ws| {
            ws.windows
                .iter()
                .chain(ws.hibernated_windows.iter())
                .any(|w| w.matches(id))
        })
    }

    /// The workspace owning any id: itself, a tree node or a window.
    pub fn get_by_item_id(&self, id: &ItemId) -> Option<&Workspace> {
        self.get_by_id(id)
            .or_else(|| {
                self.iter()
                    .find(|ws| ws.layout().is_some_and(|t| t.contains(id)))
            })
            .or_else(|| self.get_by_window_id(id))
    }

    /// Resolve a placement id or hosted window id to its placement.
    pub fn find_window(&self, id: &ItemId) -> Option<(&Workspace, &WindowRef)> {
        self.iter().find_map(|ws| {
            ws.windows
                .iter()
                .chain(ws.hibernated_windows.iter())
                .find(|w| w.matches(id))
                .map(|w| (ws, w))
        })
    }

    pub fn get_window_content_item(&self, id: &ItemId) -> Option<&Node> {
        let (ws, window) = self.find_window(id)?;
        ws.layout()?.get(&window.id).filter(|n| n.is_window())
    }

    pub fn get_workspace_content_item(&self, id: &ItemId) -> Option<&Node> {
        let ws = self.get_by_id(id)?;
        ws.layout()?.get(&ws.id)
    }

    /// Replace a workspace's window list and, when given, its tree.
    /// Unknown ids are created as untitled workspaces.
    pub fn add_or_update(&mut self, id: &ItemId, windows: Vec<WindowRef>, layout: Option<DockTree>) {
        if !self.workspaces.contains_key(id) {
            self.insert(Workspace::new(id.clone(), ""), None);
        }
        if let Some(ws) = self.workspaces.get_mut(id) {
            ws.windows = windows;
            if let Some(tree) = layout {
                ws.attach_layout(tree);
            }
        }
    }

    pub fn insert(&mut self, workspace: Workspace, position: Option<usize>) {
        let id = workspace.id.clone();
        if self.workspaces.insert(id.clone(), workspace).is_none() {
            let at = position.map_or(self.order.len(), |p| p.min(self.order.len()));
            self.order.insert(at, id);
        }
    }

    pub fn remove_by_id(&mut self, id: &ItemId) -> Option<Workspace> {
        let removed = self.workspaces.remove(id)?;
        self.order.retain(|w| w != id);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        Some(removed)
    }

    /// Detach a workspace's tree, keeping the record.
    pub fn remove_layout(&mut self, id: &ItemId) -> Option<DockTree> {
        self.workspaces.get_mut(id)?.take_layout()
    }

    pub fn workspace_ids(&self) -> Vec<ItemId> {
        self.order.clone()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.order.iter().position(|w| w == id)
    }

    pub fn selected(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    pub fn set_selected(&mut self, id: Option<ItemId>) {
        self.selected = id;
    }

    /// Workspaces in tab order.
    pub fn iter(&self) -> impl Iterator<Item = &Workspace> {
        self.order.iter().filter_map(|id| self.workspaces.get(id))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Workspace> {
        self.workspaces.values_mut()
    }
}
