//! Contracts with the engine's neighbours: context store, application
//! launcher, hosting window and frame chrome.

use std::sync::Arc;

use async_trait::async_trait;
use dockframe_common::{
    Bounds, ContainerLockState, ItemId, LayoutError, WindowId, WindowLockState, WindowSummary,
    WorkspaceLockState,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod noop;

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Workspace custom-data store, shared with other frames.
#[async_trait]
pub trait ContextStore: Send + Sync {
    async fn get_context(&self, workspace_id: &ItemId) -> Result<Value>;
    async fn set_context(&self, workspace_id: &ItemId, context: Value) -> Result<()>;
}

/// What the launcher needs to re-open an ejected window on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EjectRequest {
    pub placement_id: ItemId,
    pub window_id: WindowId,
    pub app_name: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub context: Value,
    pub bounds: Bounds,
}

#[async_trait]
pub trait AppLauncher: Send + Sync {
    /// Open a freestanding top-level window, returning its instance id.
    async fn open_window(&self, request: EjectRequest) -> Result<WindowId>;

    /// Tell the hosted application its window is about to close.
    async fn notify_window_closing(&self, window: &WindowSummary) -> Result<()>;
}

/// The browser window hosting this frame.
pub trait FrameHost: Send + Sync {
    fn is_shutting_down(&self) -> bool;
    fn close_frame(&self);
}

/// Visual toggles on the frame's chrome. Every call defaults to nothing.
pub trait FrameChrome: Send + Sync {
    fn show_add_window_affordance(&self, _workspace_id: &ItemId, _visible: bool) {}

    fn show_hibernation_indicator(&self, _workspace_id: &ItemId, _hibernated: bool) {}

    fn set_chrome_hidden(&self, _workspace_id: &ItemId, _hidden: bool) {}

    fn show_workspace_icon(&self, _workspace_id: &ItemId, _pinned: bool, _icon: Option<&str>) {}

    fn apply_workspace_lock(&self, _workspace_id: &ItemId, _state: &WorkspaceLockState) {}

    fn apply_container_lock(&self, _container_id: &ItemId, _state: &ContainerLockState) {}

    fn apply_window_lock(&self, _window_id: &ItemId, _state: &WindowLockState) {}
}

/// Everything the workspace manager talks to outside the frame.
#[derive(Clone)]
pub struct Collaborators {
    pub context_store: Arc<dyn ContextStore>,
    pub launcher: Arc<dyn AppLauncher>,
    pub host: Arc<dyn FrameHost>,
    pub chrome: Arc<dyn FrameChrome>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            context_store: Arc::new(noop::MemoryContextStore::default()),
            launcher: Arc::new(noop::NoopLauncher),
            host: Arc::new(noop::NoopHost),
            chrome: Arc::new(noop::NoopChrome),
        }
    }
}
