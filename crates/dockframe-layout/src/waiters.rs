//! Bounded waits for asynchronous materialization.
//!
//! A wait is registered before the mutation that should satisfy it, then
//! awaited with an explicit bound. Dropping a wait (including on timeout)
//! closes its channel, and closed waiters are pruned on the next resolve.

use std::collections::HashMap;
use std::time::Duration;

use dockframe_common::{ItemId, LayoutError, WindowId};
use tokio::sync::{broadcast, oneshot};

pub const CONTAINER_CREATION_TIMEOUT: &str = "timed out waiting for container creation";
pub const WINDOW_CREATION_TIMEOUT: &str = "timed out waiting for window creation";
pub const WINDOW_LOAD_TIMEOUT: &str = "timed out waiting for window load";
pub const LAYOUT_INIT_TIMEOUT: &str = "timed out waiting for layout initialisation";

#[derive(Debug, Default)]
pub struct PendingCreations {
    waiters: HashMap<ItemId, Vec<oneshot::Sender<()>>>,
}

impl PendingCreations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to the creation of `id`.
    pub fn register(&mut self, id: ItemId) -> CreationWait {
        let (tx, rx) = oneshot::channel();
        self.waiters.entry(id.clone()).or_default().push(tx);
        CreationWait { id, rx }
    }

    /// Wake every waiter on `id`. Returns how many were still listening.
    pub fn resolve(&mut self, id: &ItemId) -> usize {
        self.prune();
        self.waiters
            .remove(id)
            .map(|senders| {
                senders
                    .into_iter()
                    .filter_map(|tx| tx.send(()).ok())
                    .count()
            })
            .unwrap_or(0)
    }

    /// Forget waiters whose receiving side is gone.
    pub fn prune(&mut self) {
        self.waiters.retain(|_, senders| {
            senders.retain(|tx| !tx.is_closed());
            !senders.is_empty()
        });
    }

    pub fn len(&self) -> usize {
        self.waiters.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub struct CreationWait {
    id: ItemId,
    rx: oneshot::Receiver<()>,
}

impl CreationWait {
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Wait up to `bound` for the creation, failing with `message`.
    pub async fn wait(self, bound: Duration, message: &'static str) -> Result<ItemId, LayoutError> {
        match tokio::time::timeout(bound, self.rx).await {
            Ok(Ok(())) => Ok(self.id),
            Ok(Err(_)) | Err(_) => {
                tracing::warn!(id = %self.id, reason = message, "creation wait expired");
                Err(LayoutError::Timeout(message))
            }
        }
    }
}

/// A hosted application reporting its concrete instance id.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowLoaded {
    pub placement_id: ItemId,
    pub window_id: WindowId,
}

/// Cloneable handle the application-loading side uses to report loads.
#[derive(Clone)]
pub struct WindowLoadReporter {
    sender: broadcast::Sender<WindowLoaded>,
}

impl WindowLoadReporter {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn report(&self, placement_id: ItemId, window_id: WindowId) -> usize {
        self.sender
            .send(WindowLoaded {
                placement_id,
                window_id,
            })
            .unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WindowLoaded> {
        self.sender.subscribe()
    }
}
