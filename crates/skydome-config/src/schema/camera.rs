//! Camera configuration types.

use serde::{Deserialize, Serialize};

/// Static camera placement used to build the pixel-to-world transform.
///
/// The live camera delta is added to `eye` by the frame driver before the
/// transform is rebuilt each frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSchemaConfig {
    pub eye: [f64; 3],
    /// Forward direction (need not be normalized).
    pub view: [f64; 3],
    pub up: [f64; 3],
    /// Vertical field of view in degrees.
    pub fovy: f64,
    /// Distance of the virtual film plane from the pixel grid.
    pub film_depth: f64,
}

impl Default for CameraSchemaConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 1.0],
            view: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            fovy: 50.0,
            film_depth: 100.0,
        }
    }
}
