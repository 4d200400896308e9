//! Orbital simulation configuration types.

use serde::{Deserialize, Serialize};

/// Maximum satellites the GPU uniform block can carry.
pub const MAX_SATELLITES: u32 = 16;

/// Satellites orbiting a point mass at the origin.
///
/// Satellite `i` starts at `(first_distance + i * spacing, 0, 0)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub enabled: bool,
    pub count: u32,
    pub central_mass: f64,
    pub first_distance: f64,
    pub spacing: f64,
    /// Distances below this are clamped before the force is evaluated.
    pub min_distance: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 3,
            central_mass: 500.0,
            first_distance: 150.0,
            spacing: 50.0,
            min_distance: 1e-3,
        }
    }
}
