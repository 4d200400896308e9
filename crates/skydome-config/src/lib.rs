//! skydome configuration system.
//!
//! Provides TOML-based session configuration with full validation. All
//! config sections use sensible defaults so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use skydome_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{SessionConfig, CONFIG_SCHEMA_VERSION};

use skydome_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a documented default file if none exists.
pub fn load_config() -> Result<SessionConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
///
/// Unlike [`load_config`], a missing file is an error.
pub fn load_config_from(path: &Path) -> Result<SessionConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SessionConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = SessionConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"viewport\""));
        assert!(json.contains("\"camera\""));
        assert!(json.contains("\"background\""));
        assert!(json.contains("\"controller\""));
        assert!(json.contains("\"orbit\""));
        assert!(json.contains("\"render\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = SessionConfig::default();
        let json = config_to_json(&config);
        let parsed: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.viewport.width, 800);
        assert_eq!(parsed.orbit.count, 3);
        assert_eq!(parsed.background.mode, schema::BackgroundMode::Banded);
    }

    #[test]
    fn load_config_from_missing_path_is_file_not_found() {
        let result = load_config_from(Path::new("/tmp/nonexistent_skydome_config.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[viewport]\nwidth = 0\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("viewport.width"));
    }
}
