//! Locking: partial lock configs, the permission cascade and the controller
//! that applies them.

mod controller;
mod resolve;
mod types;

pub use controller::{LockBatch, LockingController};
pub use resolve::{container_state, window_state, workspace_state};
pub use types::*;
