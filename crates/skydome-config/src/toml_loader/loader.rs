//! Reading session config from TOML.

use crate::schema::SessionConfig;
use skydome_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use super::paths::{create_default_config, default_config_path};

/// Parse TOML text into a config. Missing fields take their defaults.
pub fn parse_config(content: &str) -> Result<SessionConfig, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Read and parse the TOML file at `path`.
///
/// The result is not validated.
pub fn load_from_path(path: &Path) -> Result<SessionConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = parse_config(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/skydome/config.toml`
/// On Linux: `~/.config/skydome/config.toml`
///
/// A missing file is created from the documented template and defaults
/// are returned.
pub fn load_default() -> Result<SessionConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config at {}", path.display());
            create_default_config(&path)?;
            Ok(SessionConfig::default())
        }
        other => other,
    }
}
