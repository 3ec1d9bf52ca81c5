//! Dockframe configuration.
//!
//! TOML-based configuration for a frame: wait bounds for asynchronous
//! materialization, docking geometry, logging and event bus sizing. All
//! sections use defaults so partial configs work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{EventsConfig, FrameConfig, LayoutConfig, LoggingConfig, TimeoutConfig};

use dockframe_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<FrameConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &std::path::Path) -> Result<FrameConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FrameConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&FrameConfig::default());
        assert!(json.contains("\"timeouts\""));
        assert!(json.contains("\"layout\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"events\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&FrameConfig::default());
        let parsed: FrameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.timeouts.container_creation_ms, 10_000);
        assert_eq!(parsed.timeouts.window_load_ms, 5_000);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout]\nheader_height = -4.0\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("layout.header_height"));
    }
}
