//! Configuration schema types for skydome.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! The whole tree is read once at session start; nothing here changes
//! while frames are running.

mod background;
mod camera;
mod controller;
mod orbit;
mod render;
mod system;
mod viewport;

pub use background::*;
pub use camera::*;
pub use controller::*;
pub use orbit::*;
pub use render::*;
pub use system::*;
pub use viewport::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for one rendering session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SessionConfig {
    pub viewport: ViewportConfig,
    pub camera: CameraSchemaConfig,
    pub background: BackgroundConfig,
    pub controller: ControllerConfig,
    pub orbit: OrbitConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_viewport() {
        let config = SessionConfig::default();
        assert_eq!(config.viewport.width, 800);
        assert_eq!(config.viewport.height, 600);
    }

    #[test]
    fn default_config_has_correct_camera() {
        let config = SessionConfig::default();
        assert_eq!(config.camera.eye, [0.0, 0.0, 1.0]);
        assert_eq!(config.camera.view, [0.0, 0.0, -1.0]);
        assert_eq!(config.camera.up, [0.0, 1.0, 0.0]);
        assert!((config.camera.fovy - 50.0).abs() < f64::EPSILON);
        assert!((config.camera.film_depth - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_correct_background() {
        let config = SessionConfig::default();
        assert_eq!(config.background.mode, BackgroundMode::Banded);
        assert!((config.background.dome_radius - 5000.0).abs() < f64::EPSILON);
        assert!((config.background.checker_period - 20.0).abs() < f64::EPSILON);
        assert!(config.background.texture.is_empty());
    }

    #[test]
    fn default_config_has_correct_controller() {
        let config = SessionConfig::default();
        assert_eq!(config.controller.mapping, CameraMapping::Planar);
        assert_eq!(config.controller.origin, PointerOrigin::ViewportCenter);
        assert!((config.controller.smoothing - 0.1).abs() < f64::EPSILON);
        assert!((config.controller.factor_x - 0.002).abs() < f64::EPSILON);
        assert!(config.controller.invert_y);
        assert!((config.controller.wheel_min + 1600.0).abs() < f64::EPSILON);
        assert!((config.controller.wheel_max - 4000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_correct_orbit() {
        let config = SessionConfig::default();
        assert!(config.orbit.enabled);
        assert_eq!(config.orbit.count, 3);
        assert!((config.orbit.central_mass - 500.0).abs() < f64::EPSILON);
        assert!((config.orbit.first_distance - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_correct_render_and_logging() {
        let config = SessionConfig::default();
        assert_eq!(config.render.frame_rate, 60);
        assert_eq!(config.render.frames, 120);
        assert!(config.render.parallel);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.as_directive(), "info");
    }

    #[test]
    fn mapping_parses_snake_case() {
        let parsed: ControllerConfig = toml::from_str(r#"mapping = "planar_wheel""#).unwrap();
        assert_eq!(parsed.mapping, CameraMapping::PlanarWheel);
        let parsed: ControllerConfig =
            toml::from_str(r#"origin = "first_sample""#).unwrap();
        assert_eq!(parsed.origin, PointerOrigin::FirstSample);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let parsed: SessionConfig = toml::from_str(
            r#"
[orbit]
count = 5
"#,
        )
        .unwrap();
        assert_eq!(parsed.orbit.count, 5);
        assert!((parsed.orbit.central_mass - 500.0).abs() < f64::EPSILON);
        assert_eq!(parsed.viewport.width, 800);
    }
}
