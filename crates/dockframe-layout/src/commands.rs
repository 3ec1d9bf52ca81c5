//! Commands the platform router sends a frame, and what they return.

use dockframe_common::{
    Bounds, ContainerKind, ContainerSummary, FrameSummary, ItemId, WindowId, WindowSummary,
    WorkspaceSummary,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::layout::ResizeRequest;
use crate::locking::{LockContainerRequest, LockWindowRequest, LockWorkspaceRequest};
use crate::schema::{ItemConfig, WorkspaceDefinition, WorkspaceSnapshot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "operation",
    content = "args",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum FrameCommand {
    InitEmpty,
    CreateWorkspace(WorkspaceDefinition),
    SelectWorkspace { workspace_id: ItemId },
    SetWorkspaceTitle { workspace_id: ItemId, title: String },
    PinWorkspace {
        workspace_id: ItemId,
        #[serde(default)]
        icon: Option<String>,
    },
    UnpinWorkspace { workspace_id: ItemId },
    SetWorkspaceIcon {
        workspace_id: ItemId,
        #[serde(default)]
        icon: Option<String>,
    },
    HibernateWorkspace { workspace_id: ItemId },
    ResumeWorkspace { workspace_id: ItemId },
    Snapshot { workspace_id: ItemId },
    BundleWorkspace {
        workspace_id: ItemId,
        #[serde(rename = "type")]
        kind: ContainerKind,
    },

    AddWindow { parent_id: ItemId, config: ItemConfig },
    AddContainer { parent_id: ItemId, config: ItemConfig },
    CloseItem { item_id: ItemId },
    ResizeItem(ResizeRequest),
    MaximizeItem { item_id: ItemId },
    RestoreItem { item_id: ItemId },
    BundleContainer {
        item_id: ItemId,
        #[serde(rename = "type")]
        kind: ContainerKind,
    },

    MoveWindowTo { window_id: ItemId, container_id: ItemId },
    Eject { window_id: ItemId },
    SelectWindow { window_id: ItemId },
    LoadWindow { window_id: ItemId },
    WindowLoaded { placement_id: ItemId, window_id: WindowId },
    SetWindowContext { window_id: ItemId, context: Value },

    LockWorkspace(LockWorkspaceRequest),
    UnlockWorkspace { workspace_id: ItemId },
    LockContainer(LockContainerRequest),
    UnlockContainer {
        item_id: ItemId,
        #[serde(rename = "type")]
        kind: ContainerKind,
    },
    LockWindow(LockWindowRequest),
    UnlockWindow { window_id: ItemId },

    FocusFrame,
    SetFrameBounds(Bounds),
    Shutdown,

    GetFrameSummary,
    GetWorkspaceIds,
    GetWorkspaceSummary { workspace_id: ItemId },
    GetContainerSummary { item_id: ItemId },
    GetWindowSummary { window_id: ItemId },
}

impl FrameCommand {
    pub fn name(&self) -> &'static str {
        match self {
            FrameCommand::InitEmpty => "initEmpty",
            FrameCommand::CreateWorkspace(_) => "createWorkspace",
            FrameCommand::SelectWorkspace { .. } => "selectWorkspace",
            FrameCommand::SetWorkspaceTitle { .. } => "setWorkspaceTitle",
            FrameCommand::PinWorkspace { .. } => "pinWorkspace",
            FrameCommand::UnpinWorkspace { .. } => "unpinWorkspace",
            FrameCommand::SetWorkspaceIcon { .. } => "setWorkspaceIcon",
            FrameCommand::HibernateWorkspace { .. } => "hibernateWorkspace",
            FrameCommand::ResumeWorkspace { .. } => "resumeWorkspace",
            FrameCommand::Snapshot { .. } => "snapshot",
            FrameCommand::BundleWorkspace { .. } => "bundleWorkspace",
            FrameCommand::AddWindow { .. } => "addWindow",
            FrameCommand::AddContainer { .. } => "addContainer",
            FrameCommand::CloseItem { .. } => "closeItem",
            FrameCommand::ResizeItem(_) => "resizeItem",
            FrameCommand::MaximizeItem { .. } => "maximizeItem",
            FrameCommand::RestoreItem { .. } => "restoreItem",
            FrameCommand::BundleContainer { .. } => "bundleContainer",
            FrameCommand::MoveWindowTo { .. } => "moveWindowTo",
            FrameCommand::Eject { .. } => "eject",
            FrameCommand::SelectWindow { .. } => "selectWindow",
            FrameCommand::LoadWindow { .. } => "loadWindow",
            FrameCommand::WindowLoaded { .. } => "windowLoaded",
            FrameCommand::SetWindowContext { .. } => "setWindowContext",
            FrameCommand::LockWorkspace(_) => "lockWorkspace",
            FrameCommand::UnlockWorkspace { .. } => "unlockWorkspace",
            FrameCommand::LockContainer(_) => "lockContainer",
            FrameCommand::UnlockContainer { .. } => "unlockContainer",
            FrameCommand::LockWindow(_) => "lockWindow",
            FrameCommand::UnlockWindow { .. } => "unlockWindow",
            FrameCommand::FocusFrame => "focusFrame",
            FrameCommand::SetFrameBounds(_) => "setFrameBounds",
            FrameCommand::Shutdown => "shutdown",
            FrameCommand::GetFrameSummary => "getFrameSummary",
            FrameCommand::GetWorkspaceIds => "getWorkspaceIds",
            FrameCommand::GetWorkspaceSummary { .. } => "getWorkspaceSummary",
            FrameCommand::GetContainerSummary { .. } => "getContainerSummary",
            FrameCommand::GetWindowSummary { .. } => "getWindowSummary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", content = "value", rename_all = "camelCase")]
pub enum CommandResult {
    Done,
    ItemId(ItemId),
    WindowId(WindowId),
    Snapshot(WorkspaceSnapshot),
    Frame(FrameSummary),
    Workspace(WorkspaceSummary),
    Container(ContainerSummary),
    Window(WindowSummary),
    WorkspaceIds(Vec<ItemId>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_struct_variant_with_camel_case_args() {
        let command: FrameCommand = serde_json::from_value(json!({
            "operation": "moveWindowTo",
            "args": { "windowId": "w1", "containerId": "c1" }
        }))
        .unwrap();
        assert_eq!(
            command,
            FrameCommand::MoveWindowTo {
                window_id: ItemId::from("w1"),
                container_id: ItemId::from("c1"),
            }
        );
        assert_eq!(command.name(), "moveWindowTo");
    }

    #[test]
    fn parses_unit_variant_without_args() {
        let command: FrameCommand =
            serde_json::from_value(json!({ "operation": "initEmpty" })).unwrap();
        assert_eq!(command, FrameCommand::InitEmpty);
    }

    #[test]
    fn parses_lock_container_with_type_field() {
        let command: FrameCommand = serde_json::from_value(json!({
            "operation": "lockContainer",
            "args": { "itemId": "r1", "type": "group", "config": { "allowDrop": false } }
        }))
        .unwrap();
        let FrameCommand::LockContainer(request) = command else {
            panic!("expected lockContainer");
        };
        assert_eq!(request.kind, ContainerKind::Group);
        assert_eq!(request.config.and_then(|c| c.allow_drop), Some(false));
    }

    #[test]
    fn parses_add_window_with_item_config() {
        let command: FrameCommand = serde_json::from_value(json!({
            "operation": "addWindow",
            "args": { "parentId": "ws", "config": { "type": "window", "appName": "notes" } }
        }))
        .unwrap();
        let FrameCommand::AddWindow { parent_id, config } = command else {
            panic!("expected addWindow");
        };
        assert_eq!(parent_id, ItemId::from("ws"));
        assert_eq!(config.type_name(), "window");
    }

    #[test]
    fn result_serializes_tagged() {
        let json = serde_json::to_value(CommandResult::ItemId(ItemId::from("c1"))).unwrap();
        assert_eq!(json, json!({ "result": "itemId", "value": "c1" }));
        let done = serde_json::to_value(CommandResult::Done).unwrap();
        assert_eq!(done, json!({ "result": "done" }));
    }
}
