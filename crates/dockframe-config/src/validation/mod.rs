//! Full configuration validation.
//!
//! Validates all numeric ranges and the logging level, collecting every
//! problem into a single `ConfigError`.

mod helpers;


use crate::schema::FrameConfig;
use dockframe_common::ConfigError;

use helpers::{validate_range_f64, validate_range_u64};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FrameConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_timeouts(&mut errors, config);
    validate_layout(&mut errors, config);

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    validate_range_u64(
        &mut errors,
        "events.capacity",
        config.events.capacity as u64,
        16,
        65_536,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_timeouts(errors: &mut Vec<String>, config: &FrameConfig) {
    let t = &config.timeouts;
    validate_range_u64(errors, "timeouts.container_creation_ms", t.container_creation_ms, 1, 60_000);
    validate_range_u64(errors, "timeouts.window_creation_ms", t.window_creation_ms, 1, 60_000);
    validate_range_u64(errors, "timeouts.window_load_ms", t.window_load_ms, 1, 60_000);
    validate_range_u64(errors, "timeouts.layout_init_ms", t.layout_init_ms, 1, 60_000);
}

fn validate_layout(errors: &mut Vec<String>, config: &FrameConfig) {
    let l = &config.layout;
    validate_range_f64(errors, "layout.header_height", l.header_height, 0.0, 200.0);
    validate_range_f64(errors, "layout.frame_width", l.frame_width, 100.0, 20_000.0);
    validate_range_f64(errors, "layout.frame_height", l.frame_height, 100.0, 20_000.0);
    if l.default_title.trim().is_empty() {
        errors.push("layout.default_title must not be empty".into());
    }
}
