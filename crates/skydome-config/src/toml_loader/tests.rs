//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{BackgroundMode, CameraMapping};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_skydome_config.toml"));
    assert!(matches!(
        result,
        Err(skydome_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn parse_empty_string_gives_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config.viewport.width, 800);
    assert!(config.orbit.enabled);
}

#[test]
fn parse_rejects_unknown_enum_value() {
    let err = parse_config("[background]\nmode = \"starfield\"\n").unwrap_err();
    assert!(matches!(err, skydome_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[viewport]
width = 1024
height = 768

[controller]
mapping = "planar_wheel"
smoothing = 0.05

[background]
mode = "checker"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.viewport.width, 1024);
    assert_eq!(config.viewport.height, 768);
    assert_eq!(config.controller.mapping, CameraMapping::PlanarWheel);
    assert!((config.controller.smoothing - 0.05).abs() < f64::EPSILON);
    assert_eq!(config.background.mode, BackgroundMode::Checker);
    // Defaults preserved
    assert_eq!(config.camera.eye, [0.0, 0.0, 1.0]);
    assert_eq!(config.orbit.count, 3);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, skydome_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[camera]
fovy = 270.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.camera.fovy - 270.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skydome").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.viewport.width, 800);
    assert_eq!(config.background.mode, BackgroundMode::Banded);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::SessionConfig;

    let config: SessionConfig = parse_config(&default_config_toml()).unwrap();
    assert_eq!(config.viewport.height, 600);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("skydome"));
        assert!(path_str.ends_with("config.toml"));
    }
}
