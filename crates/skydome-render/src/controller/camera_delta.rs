//! Exponentially smoothed camera offset driven by pointer and wheel input.

use serde::Serialize;
use skydome_common::Resolution;
use skydome_config::schema::{CameraMapping, ControllerConfig, PointerOrigin};

use super::input::InputState;
use crate::math::Vec3;

/// Smoothed camera offset, added to the eye each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CameraDelta {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl CameraDelta {
    pub fn to_vec3(&self) -> Vec3 {
        [self.x, self.y, self.z]
    }

    /// Uniform form `(x, y, z, 0)`; `w` is reserved.
    pub fn to_vec4(&self) -> [f32; 4] {
        [self.x, self.y, self.z, 0.0]
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Maps raw input to a target camera offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMappingPolicy {
    pub mapping: CameraMapping,
    pub origin: PointerOrigin,
    pub factor_x: f32,
    pub factor_y: f32,
    pub factor_z: f32,
    /// `-1.0` flips the vertical axis.
    pub y_sign: f32,
}

impl CameraMappingPolicy {
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self {
            mapping: config.mapping,
            origin: config.origin,
            factor_x: config.factor_x as f32,
            factor_y: config.factor_y as f32,
            factor_z: config.factor_z as f32,
            y_sign: if config.invert_y { -1.0 } else { 1.0 },
        }
    }

    /// Target offset for the current input, or `None` before the pointer
    /// has produced a sample.
    pub fn target(&self, input: &InputState, resolution: Resolution) -> Option<CameraDelta> {
        let pointer = input.pointer()?;
        let (cx, cy) = match self.origin {
            PointerOrigin::ViewportCenter => resolution.center(),
            PointerOrigin::FirstSample => {
                let first = input.first_pointer().unwrap_or(pointer);
                (first.x, first.y)
            }
        };

        let dx = pointer.x - cx;
        let dy = pointer.y - cy;
        let z = match self.mapping {
            CameraMapping::Planar => 0.0,
            CameraMapping::PlanarWheel => input.wheel() * self.factor_z,
            CameraMapping::PlanarPointerZ => dx * self.factor_z,
        };

        Some(CameraDelta {
            x: dx * self.factor_x,
            y: self.y_sign * dy * self.factor_y,
            z,
        })
    }
}

/// Low-pass filter from the per-frame target to the published delta.
pub struct CameraDeltaController {
    policy: CameraMappingPolicy,
    smoothing: f32,
    delta: CameraDelta,
}

impl CameraDeltaController {
    pub fn new(policy: CameraMappingPolicy, smoothing: f32) -> Self {
        Self {
            policy,
            smoothing,
            delta: CameraDelta::default(),
        }
    }

    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::new(
            CameraMappingPolicy::from_config(config),
            config.smoothing as f32,
        )
    }

    pub fn delta(&self) -> CameraDelta {
        self.delta
    }

    pub fn policy(&self) -> &CameraMappingPolicy {
        &self.policy
    }

    /// Sample input and move the delta toward the resulting target.
    pub fn update(&mut self, input: &InputState, resolution: Resolution) -> CameraDelta {
        if let Some(target) = self.policy.target(input, resolution) {
            self.step_toward(target);
        }
        self.delta
    }

    /// One smoothing step: `delta += (target - delta) · smoothing` per axis.
    ///
    /// Non-finite targets are ignored so the delta always stays finite.
    pub fn step_toward(&mut self, target: CameraDelta) {
        if !target.is_finite() {
            return;
        }
        let s = self.smoothing;
        self.delta.x += (target.x - self.delta.x) * s;
        self.delta.y += (target.y - self.delta.y) * s;
        self.delta.z += (target.z - self.delta.z) * s;
    }
}
