//! Camera delta controller configuration types.

use serde::{Deserialize, Serialize};

/// How raw pointer and wheel samples map onto the three delta axes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum CameraMapping {
    /// Pointer drives x and y; z stays at zero.
    #[default]
    Planar,
    /// Pointer drives x and y; the wheel accumulator drives z.
    PlanarWheel,
    /// Pointer drives x and y; the horizontal pointer offset also drives z.
    PlanarPointerZ,
}

/// Reference point pointer offsets are measured from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum PointerOrigin {
    #[default]
    ViewportCenter,
    /// The first pointer position seen in the session.
    FirstSample,
}

/// Smoothing and sensitivity of the camera delta.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub mapping: CameraMapping,
    pub origin: PointerOrigin,
    pub factor_x: f64,
    pub factor_y: f64,
    pub factor_z: f64,
    /// Flip the vertical axis so pointer-down moves the camera down.
    pub invert_y: bool,
    /// Fraction of the remaining distance covered each frame.
    pub smoothing: f64,
    pub wheel_min: f64,
    pub wheel_max: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            mapping: CameraMapping::Planar,
            origin: PointerOrigin::ViewportCenter,
            factor_x: 0.002,
            factor_y: 0.002,
            factor_z: 0.001,
            invert_y: true,
            smoothing: 0.1,
            wheel_min: -1600.0,
            wheel_max: 4000.0,
        }
    }
}
