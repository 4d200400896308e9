use rayon::prelude::*;
use skydome_common::{Resolution, Rgba};
use tracing::debug;

use super::state::Scene;
use crate::camera::CameraTransform;
use crate::gpu::UniformSet;
use crate::shading::{BackgroundShader, PixelOutput, TextureSampler};

/// One rendered frame, stored row-major with the top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    resolution: Resolution,
    pixels: Vec<Rgba>,
}

impl FrameBuffer {
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at column `x`, row `row` counted from the top.
    pub fn get(&self, x: u32, row: u32) -> Option<Rgba> {
        if x >= self.resolution.width || row >= self.resolution.height {
            return None;
        }
        let index = row as usize * self.resolution.width as usize + x as usize;
        self.pixels.get(index).copied()
    }

    /// Packed 8-bit RGBA bytes, top row first.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8()).collect()
    }
}

impl Scene {
    /// Evaluate every pixel of the current frame.
    ///
    /// Texture-mode pixels are resolved through `sampler`.
    pub fn render(&self, sampler: &impl TextureSampler) -> FrameBuffer {
        let resolution = self.resolution();
        let width = resolution.width as usize;
        let height = resolution.height;
        let transform = self.camera_transform();
        let uniforms = self.uniforms();
        let shader = self.shader();

        let mut pixels = vec![Rgba::default(); resolution.pixel_count()];
        let fill_row = |(row, out): (usize, &mut [Rgba])| {
            // Rows are stored top first; shading coordinates start at the bottom.
            let y = (height - 1 - row as u32) as f32 + 0.5;
            for (x, pixel) in out.iter_mut().enumerate() {
                *pixel = shade(shader, &transform, uniforms, sampler, x as f32 + 0.5, y);
            }
        };

        if self.is_parallel() {
            pixels.par_chunks_mut(width).enumerate().for_each(fill_row);
        } else {
            pixels.chunks_mut(width).enumerate().for_each(fill_row);
        }

        debug!(frame = self.frame().index, %resolution, "Frame rendered");
        FrameBuffer { resolution, pixels }
    }
}

fn shade(
    shader: &BackgroundShader,
    transform: &CameraTransform,
    uniforms: &UniformSet,
    sampler: &impl TextureSampler,
    x: f32,
    y: f32,
) -> Rgba {
    match shader.shade(transform, uniforms, x, y) {
        PixelOutput::Color(color) => color,
        PixelOutput::Texture { u, v } => sampler.sample(uniforms.texture.as_ref(), u, v),
    }
}
