//! Frame state owned by the workspace manager and the controllers it lends
//! that state to.

use dockframe_common::{
    Bounds, ContainerSummary, Event, EventBus, FrameId, FrameSummary, ItemId, LayoutError,
    WindowSummary, WorkspaceSummary,
};
use dockframe_config::FrameConfig;
use tokio::sync::broadcast;

use crate::collaborators::Collaborators;
use crate::layout::LayoutController;
use crate::locking::{LockBatch, LockingController};
use crate::store::EntityStore;
use crate::summaries;
use crate::waiters::{PendingCreations, WindowLoadReporter, WindowLoaded};
use crate::wrapper::WrapperFactory;

/// The public entry point of a frame. Owns the entity store, the wrapper
/// cache and the pending creation waits, and lends them to the layout and
/// locking controllers one command at a time.
pub struct WorkspaceManager {
    pub(super) store: EntityStore,
    pub(super) wrappers: WrapperFactory,
    pub(super) pending: PendingCreations,
    pub(super) lock_batch: LockBatch,
    pub(super) events: EventBus,
    pub(super) collaborators: Collaborators,
    pub(super) config: FrameConfig,
    pub(super) frame_id: FrameId,
    /// Workspace area every tree is laid out in.
    pub(super) area: Bounds,
    pub(super) reporter: WindowLoadReporter,
    pub(super) loads: broadcast::Receiver<WindowLoaded>,
    /// Set once the first workspace has opened the frame.
    pub(super) bootstrapped: bool,
}

impl WorkspaceManager {
    pub fn new(config: FrameConfig, collaborators: Collaborators) -> Self {
        Self::with_frame_id(FrameId::new(), config, collaborators)
    }

    pub fn with_frame_id(frame_id: FrameId, config: FrameConfig, collaborators: Collaborators) -> Self {
        let area = Bounds::new(0.0, 0.0, config.layout.frame_width, config.layout.frame_height);
        let events = EventBus::new(config.events.capacity);
        let reporter = WindowLoadReporter::new(config.events.capacity);
        let loads = reporter.subscribe();
        Self {
            store: EntityStore::new(),
            wrappers: WrapperFactory::new(),
            pending: PendingCreations::new(),
            lock_batch: LockBatch::default(),
            events,
            collaborators,
            config,
            frame_id,
            area,
            reporter,
            loads,
            bootstrapped: false,
        }
    }

    // -- Controllers --

    pub(super) fn layout(&mut self) -> LayoutController<'_> {
        LayoutController {
            store: &mut self.store,
            wrappers: &mut self.wrappers,
            pending: &mut self.pending,
            events: &self.events,
            chrome: self.collaborators.chrome.as_ref(),
            config: &self.config,
            frame_id: &self.frame_id,
            area: self.area,
        }
    }

    pub(super) fn locking(&mut self) -> LockingController<'_> {
        LockingController {
            store: &self.store,
            wrappers: &mut self.wrappers,
            batch: &mut self.lock_batch,
            events: &self.events,
            chrome: self.collaborators.chrome.as_ref(),
            frame_id: &self.frame_id,
        }
    }

    // -- Accessors --

    pub fn frame_id(&self) -> &FrameId {
        &self.frame_id
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn wrappers(&self) -> &WrapperFactory {
        &self.wrappers
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Handle the application-loading side reports window loads through.
    pub fn load_reporter(&self) -> WindowLoadReporter {
        self.reporter.clone()
    }

    pub fn workspace_ids(&self) -> Vec<ItemId> {
        self.store.workspace_ids()
    }

    pub fn selected_workspace(&self) -> Option<&ItemId> {
        self.store.selected()
    }

    // -- Summaries --

    pub fn frame_summary(&self) -> FrameSummary {
        summaries::frame_summary(&self.frame_id, self.area, &self.store)
    }

    pub fn workspace_summary(&self, id: &ItemId) -> Result<WorkspaceSummary, LayoutError> {
        let ws = self
            .store
            .get_by_id(id)
            .ok_or_else(|| LayoutError::WorkspaceNotFound(id.clone()))?;
        Ok(summaries::workspace_summary(&self.store, &self.wrappers, &self.frame_id, ws))
    }

    /// Accepts a placement id or a loaded window's instance id.
    pub fn window_summary(&self, id: &ItemId) -> Result<WindowSummary, LayoutError> {
        let (ws, window) = self
            .store
            .find_window(id)
            .ok_or_else(|| LayoutError::WindowNotFound(id.clone()))?;
        Ok(summaries::window_summary(&self.wrappers, &self.frame_id, ws, window))
    }

    pub fn container_summary(&self, id: &ItemId) -> Result<ContainerSummary, LayoutError> {
        let ws = self
            .store
            .get_by_container_id(id)
            .ok_or_else(|| LayoutError::ContainerNotFound(id.clone()))?;
        ws.layout()
            .and_then(|t| t.get(id))
            .and_then(|node| summaries::container_summary(&self.wrappers, &self.frame_id, ws, node))
            .ok_or_else(|| LayoutError::ContainerNotFound(id.clone()))
    }

    pub(super) fn publish_workspace(&self, id: &ItemId, event: fn(WorkspaceSummary) -> Event) {
        if let Ok(summary) = self.workspace_summary(id) {
            self.events.publish(event(summary));
        }
    }

    pub(super) fn publish_frame(&self, event: fn(FrameSummary) -> Event) {
        self.events.publish(event(self.frame_summary()));
    }
}
