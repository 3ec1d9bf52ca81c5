//! Summary payloads built from the store and wrappers for domain events.

use dockframe_common::{
    Bounds, ContainerSummary, FrameId, FrameSummary, WindowSummary, WorkspaceSummary,
};

use crate::locking::{container_state, window_state, workspace_state};
use crate::store::{EntityStore, WindowRef, Workspace};
use crate::tree::Node;
use crate::wrapper::WrapperFactory;

pub fn frame_summary(frame_id: &FrameId, bounds: Bounds, store: &EntityStore) -> FrameSummary {
    FrameSummary {
        id: frame_id.clone(),
        bounds,
        workspace_count: store.len(),
    }
}

pub fn workspace_summary(
    store: &EntityStore,
    wrappers: &WrapperFactory,
    frame_id: &FrameId,
    ws: &Workspace,
) -> WorkspaceSummary {
    let wrapper = wrappers.peek_workspace(&ws.id);
    WorkspaceSummary {
        id: ws.id.clone(),
        frame_id: frame_id.clone(),
        title: ws.title.clone(),
        position_index: store.position(&ws.id).unwrap_or_default(),
        is_selected: store.selected() == Some(&ws.id),
        is_hibernated: ws.is_hibernated(),
        is_pinned: wrapper.is_some_and(|w| w.is_pinned),
        icon: wrapper.and_then(|w| w.icon.clone()),
        last_active: ws.last_active,
        lock: workspace_state(wrappers, &ws.id),
    }
}

/// `None` for nodes that are not rows, columns or groups.
pub fn container_summary(
    wrappers: &WrapperFactory,
    frame_id: &FrameId,
    ws: &Workspace,
    node: &Node,
) -> Option<ContainerSummary> {
    let kind = node.kind().container_kind()?;
    let tree = ws.layout()?;
    Some(ContainerSummary {
        id: node.id().clone(),
        kind,
        frame_id: frame_id.clone(),
        workspace_id: ws.id.clone(),
        parent_id: node.parent().cloned(),
        position_index: tree.index_of(node.id()).unwrap_or_default(),
        bounds: node.bounds(),
        lock: container_state(wrappers, &ws.id, node.id()),
    })
}

/// Summary of `window`, which may already be gone from `ws`'s tree.
pub fn window_summary(
    wrappers: &WrapperFactory,
    frame_id: &FrameId,
    ws: &Workspace,
    window: &WindowRef,
) -> WindowSummary {
    let tree = ws.layout();
    let node = tree.and_then(|t| t.get(&window.id));
    let stack = tree.and_then(|t| t.enclosing_stack(&window.id));
    let stack_node = stack.and_then(|s| tree.and_then(|t| t.get(s)));

    WindowSummary {
        id: window.id.clone(),
        window_id: window.window_id.clone(),
        frame_id: frame_id.clone(),
        workspace_id: ws.id.clone(),
        parent_id: node.and_then(|n| n.parent().cloned()),
        app_name: window.app_name.clone(),
        url: window.url.clone(),
        title: window.title.clone(),
        position_index: tree
            .and_then(|t| t.index_of(&window.id))
            .unwrap_or_default(),
        bounds: node.map_or(window.bounds, Node::bounds),
        is_loaded: window.is_loaded(),
        is_selected: stack_node.is_some_and(|s| s.active_child() == Some(&window.id)),
        is_maximized: node.is_some_and(Node::is_maximized)
            || stack_node.is_some_and(Node::is_maximized),
        lock: window_state(wrappers, tree, &ws.id, &window.id),
    }
}
