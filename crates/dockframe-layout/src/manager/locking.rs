//! Lock and unlock entry points.

use dockframe_common::{ContainerKind, ItemId, LayoutError};

use super::WorkspaceManager;
use crate::locking::{LockContainerRequest, LockWindowRequest, LockWorkspaceRequest};

impl WorkspaceManager {
    pub fn lock_workspace(&mut self, request: &LockWorkspaceRequest) -> Result<(), LayoutError> {
        self.locking().lock_workspace(request)
    }

    pub fn unlock_workspace(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        self.locking().unlock_workspace(id)
    }

    pub fn lock_container(&mut self, request: &LockContainerRequest) -> Result<(), LayoutError> {
        self.locking().lock_container(request)
    }

    pub fn unlock_container(&mut self, id: &ItemId, kind: ContainerKind) -> Result<(), LayoutError> {
        self.locking().unlock_container(id, kind)
    }

    pub fn lock_window(&mut self, request: &LockWindowRequest) -> Result<(), LayoutError> {
        self.locking().lock_window(request)
    }

    pub fn unlock_window(&mut self, id: &ItemId) -> Result<(), LayoutError> {
        self.locking().unlock_window(id)
    }
}
