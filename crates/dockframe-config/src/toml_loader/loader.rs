//! Reading frame settings out of TOML.

use crate::schema::FrameConfig;
use crate::validation;
use dockframe_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse the frame settings in `path`.
///
/// Absent keys fall back to [`FrameConfig::default`]. Out-of-range values
/// only warn; run [`validation::validate`] for a hard failure.
pub fn load_from_path(path: &Path) -> Result<FrameConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: FrameConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(error = %e, "frame settings out of range");
    }

    info!(path = %path.display(), "frame settings loaded");
    Ok(config)
}

/// Frame settings from [`default_config_path`]. A first run seeds the file
/// from the template and starts with defaults.
pub fn load_default() -> Result<FrameConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no frame settings yet");
            create_default_config(&path)?;
            Ok(FrameConfig::default())
        }
        Err(e) => Err(e),
    }
}
