//! Background shading configuration types.

use serde::{Deserialize, Serialize};

/// Which per-pixel background function is evaluated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum BackgroundMode {
    /// Six-band procedural color on the enclosing dome.
    #[default]
    Banded,
    /// Time-scrolling grey checkerboard for diagnostics.
    Checker,
    /// Pass-through of the externally loaded texture.
    Texture,
}

/// Background system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub mode: BackgroundMode,
    /// Radius of the dome the camera sits inside.
    pub dome_radius: f64,
    /// Checker cell period in pixels (one light and one dark cell).
    pub checker_period: f64,
    /// Name of the texture asset handed to the host; empty means none.
    pub texture: String,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            mode: BackgroundMode::Banded,
            dome_radius: 5000.0,
            checker_period: 20.0,
            texture: String::new(),
        }
    }
}
