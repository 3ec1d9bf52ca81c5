use std::path::PathBuf;

use crate::types::{ContainerKind, ItemId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures raised by the workspace layout engine.
///
/// Every variant is surfaced synchronously to the caller of the command
/// that produced it. Nothing in the engine retries on these.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("workspace not found: {0}")]
    WorkspaceNotFound(ItemId),

    #[error("container not found: {0}")]
    ContainerNotFound(ItemId),

    #[error("window not found: {0}")]
    WindowNotFound(ItemId),

    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("workspace {0} is hibernated")]
    WorkspaceHibernated(ItemId),

    #[error("workspace {0} is not hibernated")]
    NotHibernated(ItemId),

    #[error("cannot hibernate workspace {0} because it is active")]
    CannotHibernateActive(ItemId),

    #[error("cannot hibernate workspace {0} because it is empty")]
    CannotHibernateEmpty(ItemId),

    #[error("workspace {0} is already hibernated")]
    AlreadyHibernated(ItemId),

    #[error("container {id} is a {actual}, expected a {expected}")]
    ContainerTypeMismatch {
        id: ItemId,
        expected: ContainerKind,
        actual: ContainerKind,
    },

    #[error("cannot resize {0}: frames and workspaces are sized by the host")]
    FrameResize(ItemId),

    #[error("cannot place a {child} inside {parent}")]
    InvalidParent { parent: ItemId, child: String },

    #[error("window {0} has not finished loading")]
    WindowNotLoaded(ItemId),

    #[error("{0}")]
    Timeout(&'static str),

    #[error("collaborator error: {0}")]
    Collaborator(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DockframeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("header_height out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: header_height out of range"
        );
    }

    #[test]
    fn not_found_embeds_id() {
        let err = LayoutError::WorkspaceNotFound(ItemId::from("ws-1"));
        assert_eq!(err.to_string(), "workspace not found: ws-1");

        let err = LayoutError::WindowNotFound(ItemId::from("w-9"));
        assert!(err.to_string().contains("w-9"));
    }

    #[test]
    fn type_mismatch_names_both_kinds() {
        let err = LayoutError::ContainerTypeMismatch {
            id: ItemId::from("r1"),
            expected: ContainerKind::Group,
            actual: ContainerKind::Row,
        };
        assert_eq!(err.to_string(), "container r1 is a row, expected a group");
    }

    #[test]
    fn timeout_message_is_static() {
        let err = LayoutError::Timeout("timed out waiting for container creation");
        assert_eq!(err.to_string(), "timed out waiting for container creation");
    }

    #[test]
    fn dockframe_error_from_layout() {
        let err: DockframeError = LayoutError::AlreadyHibernated(ItemId::from("b")).into();
        assert!(matches!(err, DockframeError::Layout(_)));
        assert_eq!(err.to_string(), "workspace b is already hibernated");
    }

    #[test]
    fn dockframe_error_from_config() {
        let err: DockframeError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, DockframeError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn dockframe_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DockframeError = io_err.into();
        assert!(matches!(err, DockframeError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
