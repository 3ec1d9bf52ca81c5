//! Effective lock state: window → group → workspace cascade.

use dockframe_common::{ContainerLockState, ItemId, WindowLockState, WorkspaceLockState};

use crate::tree::DockTree;
use crate::wrapper::WrapperFactory;

pub fn workspace_state(wrappers: &WrapperFactory, workspace: &ItemId) -> WorkspaceLockState {
    wrappers
        .peek_workspace(workspace)
        .map(|w| w.lock)
        .unwrap_or_default()
}

pub fn container_state(
    wrappers: &WrapperFactory,
    workspace: &ItemId,
    container: &ItemId,
) -> ContainerLockState {
    let ws = workspace_state(wrappers, workspace);
    let own = wrappers
        .peek_container(container)
        .map(|w| w.lock)
        .unwrap_or_default();
    ContainerLockState {
        allow_drop: own.allow_drop.unwrap_or(ws.allow_drop),
        allow_drop_left: own.allow_drop_left.unwrap_or(ws.allow_drop_left),
        allow_drop_top: own.allow_drop_top.unwrap_or(ws.allow_drop_top),
        allow_drop_right: own.allow_drop_right.unwrap_or(ws.allow_drop_right),
        allow_drop_bottom: own.allow_drop_bottom.unwrap_or(ws.allow_drop_bottom),
        allow_drop_header: own.allow_drop_header.unwrap_or(ws.allow_drop),
        allow_extract: own.allow_extract.unwrap_or(ws.allow_extract),
        allow_reorder: own.allow_reorder.unwrap_or(ws.allow_window_reorder),
        allow_splitters: own.allow_splitters.unwrap_or(ws.allow_splitters),
        show_maximize_button: own.show_maximize_button.unwrap_or(true),
        show_eject_button: own.show_eject_button.unwrap_or(ws.show_eject_buttons),
        show_add_window_button: own
            .show_add_window_button
            .unwrap_or(ws.show_add_window_buttons),
    }
}

pub fn window_state(
    wrappers: &WrapperFactory,
    tree: Option<&DockTree>,
    workspace: &ItemId,
    window: &ItemId,
) -> WindowLockState {
    let ws = workspace_state(wrappers, workspace);
    let group = tree
        .and_then(|t| t.enclosing_stack(window))
        .map(|stack| container_state(wrappers, workspace, stack));
    let own = wrappers
        .peek_window(window)
        .map(|w| w.lock)
        .unwrap_or_default();
    WindowLockState {
        allow_extract: own
            .allow_extract
            .unwrap_or(group.map_or(ws.allow_extract, |g| g.allow_extract)),
        allow_reorder: own
            .allow_reorder
            .unwrap_or(group.map_or(ws.allow_window_reorder, |g| g.allow_reorder)),
        show_close_button: own
            .show_close_button
            .unwrap_or(ws.show_window_close_buttons),
    }
}
