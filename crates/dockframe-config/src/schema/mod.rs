//! Configuration schema types for a frame.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod events;
mod layout;
mod logging;
mod timeouts;

pub use events::*;
pub use layout::*;
pub use logging::*;
pub use timeouts::*;

use serde::{Deserialize, Serialize};

/// Root configuration for a frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub timeouts: TimeoutConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
    pub events: EventsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: FrameConfig = toml::from_str("").unwrap();
        assert_eq!(config.timeouts.layout_init_ms, 10_000);
        assert_eq!(config.layout.default_title, "Untitled");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.events.capacity, 256);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: FrameConfig = toml::from_str("[timeouts]\nwindow_load_ms = 250\n").unwrap();
        assert_eq!(config.timeouts.window_load_ms, 250);
        assert_eq!(config.timeouts.container_creation_ms, 10_000);
    }
}
