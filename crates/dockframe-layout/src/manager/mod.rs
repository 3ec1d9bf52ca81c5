//! The WorkspaceManager orchestrates workspace lifecycle on top of the layout
//! and locking controllers and is the frame's public entry point.

mod dispatch;
mod hibernation;
mod lifecycle;
mod locking;
mod types;
mod windows;

pub use types::*;
