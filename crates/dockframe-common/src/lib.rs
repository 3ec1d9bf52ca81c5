pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, DockframeError, LayoutError};
pub use events::{Event, EventBus};
pub use id::{new_id, FrameId};
pub use types::{
    Bounds, ContainerKind, ContainerLockState, ContainerSummary, FrameSummary, ItemId,
    WindowId, WindowLockState, WindowSummary, WorkspaceLockState, WorkspaceSummary,
};

pub type Result<T> = std::result::Result<T, DockframeError>;
