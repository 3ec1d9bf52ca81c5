//! Applies lock configurations through the wrapper factory and raises
//! coalesced lock-change events.

use dockframe_common::{
    ContainerKind, ContainerLockState, Event, EventBus, FrameId, ItemId, LayoutError,
    WindowLockState, WorkspaceLockState,
};

use super::resolve::{container_state, window_state, workspace_state};
use super::{
    ContainerLockConfig, LockContainerRequest, LockWindowRequest, LockWorkspaceRequest,
    WindowLockConfig, WorkspaceLockConfig,
};
use crate::collaborators::FrameChrome;
use crate::store::EntityStore;
use crate::summaries;
use crate::wrapper::WrapperFactory;

/// Effective states captured when a grouping starts.
#[derive(Debug, Clone)]
struct LockSnapshot {
    workspace: ItemId,
    state: WorkspaceLockState,
    containers: Vec<(ItemId, ContainerLockState)>,
    windows: Vec<(ItemId, WindowLockState)>,
}

/// Open grouping scopes. Nested begins share the outermost snapshot.
#[derive(Debug, Default)]
pub struct LockBatch {
    depth: usize,
    scopes: Vec<LockSnapshot>,
}

impl LockBatch {
    pub fn is_open(&self) -> bool {
        self.depth > 0
    }
}

pub struct LockingController<'a> {
    pub store: &'a EntityStore,
    pub wrappers: &'a mut WrapperFactory,
    pub batch: &'a mut LockBatch,
    pub events: &'a EventBus,
    pub chrome: &'a dyn FrameChrome,
    pub frame_id: &'a FrameId,
}

impl LockingController<'_> {
    pub fn lock_workspace(&mut self, request: &LockWorkspaceRequest) -> Result<(), LayoutError> {
        let id = &request.workspace_id;
        if self.store.get_by_id(id).is_none() {
            return Err(LayoutError::WorkspaceNotFound(id.clone()));
        }
        self.begin_grouping(id);
        match request.config.filter(|c| !c.is_empty()) {
            None => self.apply_full_workspace_lock(id),
            Some(config) => self.apply_partial_workspace_lock(id, &config),
        }
        self.end_grouping();
        Ok(())
    }

    pub fn unlock_workspace(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        self.lock_workspace(&LockWorkspaceRequest {
            workspace_id: id.clone(),
            config: Some(WorkspaceLockConfig::all(true)),
        })
    }

    /// Fails with a type mismatch, before touching any wrapper, when the
    /// container is not of the requested kind.
    pub fn lock_container(&mut self, request: &LockContainerRequest) -> Result<(), LayoutError> {
        let id = &request.item_id;
        let (workspace, actual) = self.resolve_container(id)?;
        if actual != request.kind {
            return Err(LayoutError::ContainerTypeMismatch {
                id: id.clone(),
                expected: request.kind,
                actual,
            });
        }

        self.begin_grouping(&workspace);
        match request.config.filter(|c| !c.is_empty()) {
            None => self.apply_full_container_lock(id, actual),
            Some(config) => self.apply_partial_container_lock(id, actual, &config),
        }
        self.end_grouping();
        Ok(())
    }

    pub fn unlock_container(&mut self, id: &ItemId, kind: ContainerKind) -> Result<(), LayoutError> {
        self.lock_container(&LockContainerRequest {
            item_id: id.clone(),
            kind,
            config: Some(ContainerLockConfig::all(true, kind)),
        })
    }

    /// Windows parked in a hibernated workspace cannot be locked.
    pub fn lock_window(&mut self, request: &LockWindowRequest) -> Result<(), LayoutError> {
        let (workspace, placement, hibernated) = self
            .store
            .find_window(&request.window_id)
            .map(|(ws, w)| (ws.id.clone(), w.id.clone(), ws.is_hibernated()))
            .ok_or_else(|| LayoutError::WindowNotFound(request.window_id.clone()))?;
        if hibernated {
            return Err(LayoutError::WorkspaceHibernated(workspace));
        }

        self.begin_grouping(&workspace);
        match request.config.filter(|c| !c.is_empty()) {
            None => self.apply_full_window_lock(&placement),
            Some(config) => self.apply_partial_window_lock(&placement, &config),
        }
        self.end_grouping();
        Ok(())
    }

    pub fn unlock_window(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        self.lock_window(&LockWindowRequest {
            window_id: id.clone(),
            config: Some(WindowLockConfig::all(true)),
        })
    }

    /// Every workspace flag off.
    pub fn apply_full_workspace_lock(&mut self, id: &ItemId) {
        self.wrappers.workspace_wrapper(id).lock = WorkspaceLockState::locked();
    }

    /// Only the fields `config` names change.
    pub fn apply_partial_workspace_lock(&mut self, id: &ItemId, config: &WorkspaceLockConfig) {
        config.seeded().apply_to(&mut self.wrappers.workspace_wrapper(id).lock);
    }

    pub fn apply_full_container_lock(&mut self, id: &ItemId, kind: ContainerKind) {
        self.wrappers.container_wrapper(id).lock = ContainerLockConfig::all(false, kind);
    }

    pub fn apply_partial_container_lock(
        &mut self,
        id: &ItemId,
        kind: ContainerKind,
        config: &ContainerLockConfig,
    ) {
        self.wrappers
            .container_wrapper(id)
            .lock
            .merge(&config.seeded(kind));
    }

    pub fn apply_full_window_lock(&mut self, id: &ItemId) {
        self.wrappers.window_wrapper(id).lock = WindowLockConfig::all(false);
    }

    pub fn apply_partial_window_lock(&mut self, id: &ItemId, config: &WindowLockConfig) {
        self.wrappers.window_wrapper(id).lock.merge(config);
    }

    /// Open a grouping over `workspace`, capturing its effective states
    /// unless an enclosing grouping already did.
    pub fn begin_grouping(&mut self, workspace: &ItemId) {
        self.batch.depth += 1;
        if !self.batch.scopes.iter().any(|s| s.workspace == *workspace) {
            let snapshot = self.capture(workspace);
            self.batch.scopes.push(snapshot);
        }
    }

    /// Close a grouping. The outermost close diffs every captured scope and
    /// emits one event per entity whose effective state changed. Returns
    /// the number of events emitted.
    pub fn end_grouping(&mut self) -> usize {
        self.batch.depth = self.batch.depth.saturating_sub(1);
        if self.batch.depth > 0 {
            return 0;
        }
        let scopes = std::mem::take(&mut self.batch.scopes);
        scopes.iter().map(|before| self.emit_changes(before)).sum()
    }

    fn resolve_container(&self, id: &ItemId) -> Result<(ItemId, ContainerKind), LayoutError> {
        let ws = self
            .store
            .get_by_container_id(id)
            .ok_or_else(|| LayoutError::ContainerNotFound(id.clone()))?;
        let kind = ws
            .layout()
            .and_then(|t| t.get(id))
            .and_then(|n| n.kind().container_kind())
            .ok_or_else(|| LayoutError::ContainerNotFound(id.clone()))?;
        Ok((ws.id.clone(), kind))
    }

    fn capture(&self, workspace: &ItemId) -> LockSnapshot {
        let ws = self.store.get_by_id(workspace);
        let tree = ws.and_then(|w| w.layout());
        LockSnapshot {
            workspace: workspace.clone(),
            state: workspace_state(self.wrappers, workspace),
            containers: tree
                .map(|t| {
                    t.containers()
                        .into_iter()
                        .map(|n| (n.id().clone(), container_state(self.wrappers, workspace, n.id())))
                        .collect()
                })
                .unwrap_or_default(),
            windows: ws
                .map(|w| {
                    w.windows
                        .iter()
                        .map(|win| (win.id.clone(), window_state(self.wrappers, tree, workspace, &win.id)))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    fn emit_changes(&self, before: &LockSnapshot) -> usize {
        let Some(ws) = self.store.get_by_id(&before.workspace) else {
            return 0;
        };
        let after = self.capture(&before.workspace);
        let mut emitted = 0;

        if after.state != before.state {
            self.chrome.apply_workspace_lock(&ws.id, &after.state);
            self.events.publish(Event::WorkspaceLockConfigurationChanged(
                summaries::workspace_summary(self.store, self.wrappers, self.frame_id, ws),
            ));
            emitted += 1;
        }

        let tree = ws.layout();
        for (id, state) in &after.containers {
            if !changed(&before.containers, id, state) {
                continue;
            }
            self.chrome.apply_container_lock(id, state);
            if let Some(summary) = tree
                .and_then(|t| t.get(id))
                .and_then(|n| summaries::container_summary(self.wrappers, self.frame_id, ws, n))
            {
                self.events
                    .publish(Event::ContainerLockConfigurationChanged(summary));
                emitted += 1;
            }
        }

        for (id, state) in &after.windows {
            if !changed(&before.windows, id, state) {
                continue;
            }
            self.chrome.apply_window_lock(id, state);
            if let Some(window) = ws.window(id) {
                self.events.publish(Event::WindowLockConfigurationChanged(
                    summaries::window_summary(self.wrappers, self.frame_id, ws, window),
                ));
                emitted += 1;
            }
        }

        if emitted > 0 {
            tracing::debug!(workspace = %ws.id, emitted, "lock configuration changed");
        }
        emitted
    }
}

/// Entities that appeared during the grouping have nothing to diff against.
fn changed<S: PartialEq>(before: &[(ItemId, S)], id: &ItemId, state: &S) -> bool {
    before
        .iter()
        .find(|(b, _)| b == id)
        .is_some_and(|(_, old)| old != state)
}
