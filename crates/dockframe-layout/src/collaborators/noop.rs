//! Default collaborators for frames running without a platform around them.
//!
//! Contexts are kept in memory, ejected windows get a fresh instance id and
//! every chrome toggle is ignored.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use dockframe_common::{ItemId, LayoutError, WindowId, WindowSummary};
use serde_json::Value;

use super::{AppLauncher, ContextStore, EjectRequest, FrameChrome, FrameHost, Result};

#[derive(Debug, Default)]
pub struct MemoryContextStore {
    contexts: Mutex<HashMap<ItemId, Value>>,
}

#[async_trait]
impl ContextStore for MemoryContextStore {
    async fn get_context(&self, workspace_id: &ItemId) -> Result<Value> {
        let contexts = self
            .contexts
            .lock()
            .map_err(|e| LayoutError::Collaborator(e.to_string()))?;
        Ok(contexts.get(workspace_id).cloned().unwrap_or(Value::Null))
    }

    async fn set_context(&self, workspace_id: &ItemId, context: Value) -> Result<()> {
        let mut contexts = self
            .contexts
            .lock()
            .map_err(|e| LayoutError::Collaborator(e.to_string()))?;
        contexts.insert(workspace_id.clone(), context);
        Ok(())
    }
}

pub struct NoopLauncher;

#[async_trait]
impl AppLauncher for NoopLauncher {
    async fn open_window(&self, request: EjectRequest) -> Result<WindowId> {
        tracing::debug!(placement = %request.placement_id, "no launcher, window left closed");
        Ok(WindowId::from(dockframe_common::new_id()))
    }

    async fn notify_window_closing(&self, _window: &WindowSummary) -> Result<()> {
        Ok(())
    }
}

pub struct NoopHost;

impl FrameHost for NoopHost {
    fn is_shutting_down(&self) -> bool {
        false
    }

    fn close_frame(&self) {}
}

pub struct NoopChrome;

impl FrameChrome for NoopChrome {}
