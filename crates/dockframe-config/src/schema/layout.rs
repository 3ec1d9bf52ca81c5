//! Docking geometry defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of a group's tab header in pixels (valid range: 0-200).
    pub header_height: f64,
    /// Initial width of the workspace area in pixels (valid range: 100-20000).
    pub frame_width: f64,
    /// Initial height of the workspace area in pixels (valid range: 100-20000).
    pub frame_height: f64,
    /// Title given to workspaces created without one.
    pub default_title: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height: 30.0,
            frame_width: 1280.0,
            frame_height: 720.0,
            default_title: "Untitled".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert!((config.header_height - 30.0).abs() < f64::EPSILON);
        assert!((config.frame_width - 1280.0).abs() < f64::EPSILON);
        assert_eq!(config.default_title, "Untitled");
    }
}
