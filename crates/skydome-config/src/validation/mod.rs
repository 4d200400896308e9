//! Full configuration validation.
//!
//! Validates numeric ranges and degenerate geometry once, at session start.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod background;
mod camera;
mod controller;
mod helpers;
mod misc;
mod orbit;


use crate::schema::SessionConfig;
use skydome_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SessionConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_viewport(&mut errors, config);
    camera::validate_camera(&mut errors, config);
    background::validate_background(&mut errors, config);
    controller::validate_controller(&mut errors, config);
    orbit::validate_orbit(&mut errors, config);
    misc::validate_render(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
