//! Bounds for every wait on asynchronous materialization.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Wait for a new container's creation event (valid range: 1-60000).
    pub container_creation_ms: u64,
    /// Wait for a new window's creation event (valid range: 1-60000).
    pub window_creation_ms: u64,
    /// Wait for a hosted application to report its instance id (valid range: 1-60000).
    pub window_load_ms: u64,
    /// Wait for a freshly built docking tree to report it is initialised (valid range: 1-60000).
    pub layout_init_ms: u64,
}

impl TimeoutConfig {
    pub fn container_creation(&self) -> Duration {
        Duration::from_millis(self.container_creation_ms)
    }

    pub fn window_creation(&self) -> Duration {
        Duration::from_millis(self.window_creation_ms)
    }

    pub fn window_load(&self) -> Duration {
        Duration::from_millis(self.window_load_ms)
    }

    pub fn layout_init(&self) -> Duration {
        Duration::from_millis(self.layout_init_ms)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            container_creation_ms: 10_000,
            window_creation_ms: 10_000,
            window_load_ms: 5_000,
            layout_init_ms: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_follow_millis() {
        let config = TimeoutConfig::default();
        assert_eq!(config.container_creation(), Duration::from_secs(10));
        assert_eq!(config.window_load(), Duration::from_secs(5));
    }
}
