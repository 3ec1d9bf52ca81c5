use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{ContainerSummary, FrameSummary, WindowSummary, WorkspaceSummary};

/// Domain events raised by a frame, in the order the mutations were applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Event {
    FrameOpened(FrameSummary),
    FrameClosed(FrameSummary),
    FrameFocus(FrameSummary),
    WorkspaceOpened(WorkspaceSummary),
    WorkspaceSelected(WorkspaceSummary),
    WorkspaceClosed(WorkspaceSummary),
    WorkspaceHibernated(WorkspaceSummary),
    WorkspaceResumed(WorkspaceSummary),
    WorkspaceLockConfigurationChanged(WorkspaceSummary),
    ContainerLockConfigurationChanged(ContainerSummary),
    WindowAdded(WindowSummary),
    WindowRemoved(WindowSummary),
    WindowSelected(WindowSummary),
    WindowMaximized(WindowSummary),
    WindowRestored(WindowSummary),
    WindowLoaded(WindowSummary),
    WindowLockConfigurationChanged(WindowSummary),
    #[serde(other)]
    Unknown,
}

impl Event {
    /// Stable dotted name, used for logging and by the CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Event::FrameOpened(_) => "frame.opened",
            Event::FrameClosed(_) => "frame.closed",
            Event::FrameFocus(_) => "frame.focus",
            Event::WorkspaceOpened(_) => "workspace.opened",
            Event::WorkspaceSelected(_) => "workspace.selected",
            Event::WorkspaceClosed(_) => "workspace.closed",
            Event::WorkspaceHibernated(_) => "workspace.hibernated",
            Event::WorkspaceResumed(_) => "workspace.resumed",
            Event::WorkspaceLockConfigurationChanged(_) => "workspace.lock-configuration-changed",
            Event::ContainerLockConfigurationChanged(_) => "container.lock-configuration-changed",
            Event::WindowAdded(_) => "window.added",
            Event::WindowRemoved(_) => "window.removed",
            Event::WindowSelected(_) => "window.selected",
            Event::WindowMaximized(_) => "window.maximized",
            Event::WindowRestored(_) => "window.restored",
            Event::WindowLoaded(_) => "window.loaded",
            Event::WindowLockConfigurationChanged(_) => "window.lock-configuration-changed",
            Event::Unknown => "unknown",
        }
    }
}

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        tracing::debug!(event = event.name(), "publishing domain event");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
