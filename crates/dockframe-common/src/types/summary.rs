//! Summary payloads carried by domain events instead of live tree references.

use serde::{Deserialize, Serialize};

use super::{Bounds, ContainerKind, ContainerLockState, ItemId, WindowId, WindowLockState};
use super::WorkspaceLockState;
use crate::id::FrameId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSummary {
    pub id: FrameId,
    pub bounds: Bounds,
    pub workspace_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSummary {
    pub id: ItemId,
    pub frame_id: FrameId,
    pub title: String,
    pub position_index: usize,
    pub is_selected: bool,
    pub is_hibernated: bool,
    pub is_pinned: bool,
    pub icon: Option<String>,
    pub last_active: i64,
    pub lock: WorkspaceLockState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSummary {
    pub id: ItemId,
    pub kind: ContainerKind,
    pub frame_id: FrameId,
    pub workspace_id: ItemId,
    pub parent_id: Option<ItemId>,
    pub position_index: usize,
    pub bounds: Bounds,
    pub lock: ContainerLockState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSummary {
    pub id: ItemId,
    pub window_id: Option<WindowId>,
    pub frame_id: FrameId,
    pub workspace_id: ItemId,
    pub parent_id: Option<ItemId>,
    pub app_name: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub position_index: usize,
    pub bounds: Bounds,
    pub is_loaded: bool,
    pub is_selected: bool,
    pub is_maximized: bool,
    pub lock: WindowLockState,
}
