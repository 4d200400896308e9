use skydome_common::Resolution;
use skydome_config::SessionConfig;

use crate::controller::CameraDelta;
use crate::math::vector::{self, Vec3};

/// Everything needed to build the pixel-to-world transform for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub view: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    pub film_depth: f32,
    pub resolution: Resolution,
}

impl CameraConfig {
    /// Build the static camera from session config.
    pub fn from_config(config: &SessionConfig) -> Self {
        let cam = &config.camera;
        let to_f32 = |v: [f64; 3]| [v[0] as f32, v[1] as f32, v[2] as f32];
        Self {
            eye: to_f32(cam.eye),
            view: to_f32(cam.view),
            up: to_f32(cam.up),
            fovy: cam.fovy as f32,
            film_depth: cam.film_depth as f32,
            resolution: Resolution::new(config.viewport.width, config.viewport.height),
        }
    }

    /// Copy of this camera with the eye shifted by the live camera delta.
    pub fn with_delta(&self, delta: CameraDelta) -> Self {
        Self {
            eye: vector::add(self.eye, delta.to_vec3()),
            ..*self
        }
    }
}
