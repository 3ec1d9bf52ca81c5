//! The single entry point the platform router drives.

use dockframe_common::LayoutError;

use super::WorkspaceManager;
use crate::commands::{CommandResult, FrameCommand};
use crate::waiters::WindowLoaded;

impl WorkspaceManager {
    /// Run one command to completion. Window loads reported since the
    /// previous command are applied first.
    pub async fn execute(&mut self, command: FrameCommand) -> Result<CommandResult, LayoutError> {
        self.sync_loaded_windows();
        let name = command.name();
        tracing::debug!(command = name, "executing command");

        let result = match command {
            FrameCommand::InitEmpty => CommandResult::ItemId(self.init_empty().await?),
            FrameCommand::CreateWorkspace(definition) => {
                CommandResult::ItemId(self.create_workspace(definition).await?)
            }
            FrameCommand::SelectWorkspace { workspace_id } => {
                self.select_workspace(&workspace_id).await?;
                CommandResult::Done
            }
            FrameCommand::SetWorkspaceTitle {
                workspace_id,
                title,
            } => {
                self.set_workspace_title(&workspace_id, title)?;
                CommandResult::Done
            }
            FrameCommand::PinWorkspace { workspace_id, icon } => {
                self.pin_workspace(&workspace_id, icon)?;
                CommandResult::Done
            }
            FrameCommand::UnpinWorkspace { workspace_id } => {
                self.unpin_workspace(&workspace_id)?;
                CommandResult::Done
            }
            FrameCommand::SetWorkspaceIcon { workspace_id, icon } => {
                self.set_workspace_icon(&workspace_id, icon)?;
                CommandResult::Done
            }
            FrameCommand::HibernateWorkspace { workspace_id } => {
                CommandResult::Snapshot(self.hibernate_workspace(&workspace_id).await?)
            }
            FrameCommand::ResumeWorkspace { workspace_id } => {
                self.resume_workspace(&workspace_id).await?;
                CommandResult::Done
            }
            FrameCommand::Snapshot { workspace_id } => {
                CommandResult::Snapshot(self.snapshot(&workspace_id).await?)
            }
            FrameCommand::BundleWorkspace { workspace_id, kind } => {
                CommandResult::ItemId(self.bundle_workspace(&workspace_id, kind)?)
            }
            FrameCommand::AddWindow { parent_id, config } => {
                CommandResult::ItemId(self.add_window(&parent_id, config).await?)
            }
            FrameCommand::AddContainer { parent_id, config } => {
                CommandResult::ItemId(self.add_container(&parent_id, config).await?)
            }
            FrameCommand::CloseItem { item_id } => {
                self.close_item(&item_id).await?;
                CommandResult::Done
            }
            FrameCommand::ResizeItem(request) => {
                self.resize_item(&request)?;
                CommandResult::Done
            }
            FrameCommand::MaximizeItem { item_id } => {
                self.maximize_item(&item_id)?;
                CommandResult::Done
            }
            FrameCommand::RestoreItem { item_id } => {
                self.restore_item(&item_id)?;
                CommandResult::Done
            }
            FrameCommand::BundleContainer { item_id, kind } => {
                CommandResult::ItemId(self.bundle_container(&item_id, kind)?)
            }
            FrameCommand::MoveWindowTo {
                window_id,
                container_id,
            } => CommandResult::ItemId(self.move_window_to(&window_id, &container_id).await?),
            FrameCommand::Eject { window_id } => CommandResult::WindowId(self.eject(&window_id).await?),
            FrameCommand::SelectWindow { window_id } => {
                self.select_window(&window_id).await?;
                CommandResult::Done
            }
            FrameCommand::LoadWindow { window_id } => {
                CommandResult::WindowId(self.load_window(&window_id).await?)
            }
            FrameCommand::WindowLoaded {
                placement_id,
                window_id,
            } => {
                self.window_loaded(WindowLoaded {
                    placement_id,
                    window_id,
                });
                CommandResult::Done
            }
            FrameCommand::SetWindowContext { window_id, context } => {
                self.set_window_context(&window_id, context)?;
                CommandResult::Done
            }
            FrameCommand::LockWorkspace(request) => {
                self.lock_workspace(&request)?;
                CommandResult::Done
            }
            FrameCommand::UnlockWorkspace { workspace_id } => {
                self.unlock_workspace(&workspace_id)?;
                CommandResult::Done
            }
            FrameCommand::LockContainer(request) => {
                self.lock_container(&request)?;
                CommandResult::Done
            }
            FrameCommand::UnlockContainer { item_id, kind } => {
                self.unlock_container(&item_id, kind)?;
                CommandResult::Done
            }
            FrameCommand::LockWindow(request) => {
                self.lock_window(&request)?;
                CommandResult::Done
            }
            FrameCommand::UnlockWindow { window_id } => {
                self.unlock_window(&window_id)?;
                CommandResult::Done
            }
            FrameCommand::FocusFrame => {
                self.focus_frame();
                CommandResult::Done
            }
            FrameCommand::SetFrameBounds(bounds) => {
                self.set_frame_bounds(bounds);
                CommandResult::Done
            }
            FrameCommand::Shutdown => {
                self.shutdown().await?;
                CommandResult::Done
            }
            FrameCommand::GetFrameSummary => CommandResult::Frame(self.frame_summary()),
            FrameCommand::GetWorkspaceIds => CommandResult::WorkspaceIds(self.workspace_ids()),
            FrameCommand::GetWorkspaceSummary { workspace_id } => {
                CommandResult::Workspace(self.workspace_summary(&workspace_id)?)
            }
            FrameCommand::GetContainerSummary { item_id } => {
                CommandResult::Container(self.container_summary(&item_id)?)
            }
            FrameCommand::GetWindowSummary { window_id } => {
                CommandResult::Window(self.window_summary(&window_id)?)
            }
        };
        Ok(result)
    }
}
