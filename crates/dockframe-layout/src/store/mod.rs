//! Entity store: the frame's workspaces, their trees and window references.

mod operations;
mod types;

pub use operations::EntityStore;
pub use types::*;
