//! Frame-local workspace layout and lifecycle engine.
//!
//! A frame owns one [`WorkspaceManager`]. The manager owns the entity store
//! and wrapper cache and lends them to the layout and locking controllers,
//! which mutate the docking tree and turn its events into domain events.

pub mod collaborators;
pub mod commands;
pub mod layout;
pub mod locking;
pub mod manager;
pub mod schema;
pub mod store;
pub mod summaries;
pub mod tree;
pub mod waiters;
pub mod wrapper;

pub type Result<T> = std::result::Result<T, dockframe_common::LayoutError>;

pub use collaborators::Collaborators;
pub use commands::{CommandResult, FrameCommand};
pub use layout::{LayoutController, ResizeRequest};
pub use locking::LockingController;
pub use manager::WorkspaceManager;
pub use schema::{ItemConfig, WorkspaceDefinition, WorkspaceSnapshot};
pub use store::EntityStore;
pub use tree::DockTree;
pub use waiters::WindowLoadReporter;
pub use wrapper::WrapperFactory;
