//! Where the frame settings live on disk, and seeding them on first run.

use dockframe_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::template::default_config_toml;

/// `dockframe/config.toml` under the user's config directory.
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("dockframe").join("config.toml"))
}

/// Write the annotated frame settings template to `path`, creating the
/// directory as needed. Overwrites whatever is there.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!(path = %path.display(), "seeded frame settings");
    Ok(())
}
