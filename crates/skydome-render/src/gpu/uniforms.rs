//! Per-frame uniform values shared by every pixel evaluation.
//!
//! `UniformSet` is the host-side view; `GpuUniforms` is its packed form
//! for upload to a uniform buffer.

use std::time::Duration;

use serde::Serialize;
use skydome_config::schema::{BackgroundMode, MAX_SATELLITES};
use skydome_config::SessionConfig;

use super::types::TextureHandle;
use crate::controller::CameraDelta;
use crate::math::Vec3;

/// Named per-frame values read by the background shader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniformSet {
    /// Viewport size in pixels.
    pub resolution: [f32; 2],
    /// Seconds since the scene started.
    pub time: f32,
    /// Background texture, only bound in texture mode.
    pub texture: Option<TextureHandle>,
    /// Smoothed camera delta, `w` reserved.
    pub camera_delta: [f32; 4],
    /// Satellite positions in simulation order.
    pub satellite_positions: Vec<Vec3>,
}

impl UniformSet {
    /// Create uniforms from session config with zeroed runtime values.
    pub fn from_config(config: &SessionConfig) -> Self {
        let texture = match config.background.mode {
            BackgroundMode::Texture if !config.background.texture.is_empty() => {
                Some(TextureHandle::new(config.background.texture.clone()))
            }
            _ => None,
        };
        Self {
            resolution: [config.viewport.width as f32, config.viewport.height as f32],
            time: 0.0,
            texture,
            camera_delta: [0.0; 4],
            satellite_positions: Vec::new(),
        }
    }

    /// Set the time uniform from the time since session start.
    ///
    /// The absolute value is converted each frame, so rounding never
    /// accumulates across frames.
    pub fn set_time(&mut self, elapsed: Duration) {
        self.time = elapsed.as_secs_f32();
    }

    pub fn update_viewport(&mut self, width: u32, height: u32) {
        self.resolution = [width as f32, height as f32];
    }

    pub fn update_camera_delta(&mut self, delta: CameraDelta) {
        self.camera_delta = delta.to_vec4();
    }

    /// Pack into the fixed-size GPU layout.
    ///
    /// Satellites beyond the buffer capacity are dropped.
    pub fn to_gpu(&self) -> GpuUniforms {
        let mut satellites = [[0.0; 4]; MAX_SATELLITES as usize];
        let count = self.satellite_positions.len().min(satellites.len());
        for (slot, p) in satellites.iter_mut().zip(&self.satellite_positions) {
            *slot = [p[0], p[1], p[2], 1.0];
        }
        GpuUniforms {
            resolution: self.resolution,
            time: self.time,
            satellite_count: count as u32,
            camera_delta: self.camera_delta,
            satellites,
        }
    }
}

/// GPU-side uniform buffer.
///
/// Layout: 72 × 4 bytes = 288 bytes, every field 4-byte aligned with no
/// implicit padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub satellite_count: u32,
    pub camera_delta: [f32; 4],
    /// Homogeneous satellite positions; slots past `satellite_count` are zero.
    pub satellites: [[f32; 4]; MAX_SATELLITES as usize],
}

impl GpuUniforms {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
