//! Per-pixel background evaluation.
//!
//! Pure functions of the pixel coordinate, the frame's camera transform,
//! and the uniform set; safe to call from any number of threads at once.

mod banding;
mod checker;

pub use banding::*;
pub use checker::*;

use skydome_common::Rgba;
use skydome_config::schema::{BackgroundConfig, BackgroundMode};

use crate::camera::CameraTransform;
use crate::geometry::intersect_sphere;
use crate::gpu::{TextureHandle, UniformSet};

/// Result of shading one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PixelOutput {
    /// Final color.
    Color(Rgba),
    /// The host should sample the background texture at `(u, v)` in `0..=1`.
    Texture { u: f32, v: f32 },
}

/// Looks up texels of an externally loaded texture.
pub trait TextureSampler: Sync {
    fn sample(&self, texture: Option<&TextureHandle>, u: f32, v: f32) -> Rgba;
}

/// Sampler for hosts without a loaded texture: shows the coordinates as
/// a red/green ramp.
pub struct UvSampler;

impl TextureSampler for UvSampler {
    fn sample(&self, _texture: Option<&TextureHandle>, u: f32, v: f32) -> Rgba {
        Rgba::new(u, v, 0.0, 1.0)
    }
}

/// The configured background function.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundShader {
    pub mode: BackgroundMode,
    pub dome_radius: f32,
    pub checker_period: f32,
}

impl BackgroundShader {
    /// Create a shader from the background config section.
    pub fn from_config(config: &BackgroundConfig) -> Self {
        Self {
            mode: config.mode,
            dome_radius: config.dome_radius as f32,
            checker_period: config.checker_period as f32,
        }
    }

    /// Shade pixel `(x, y)`, measured from the bottom-left corner.
    ///
    /// In banded mode a ray that misses the dome (eye outside it) is shaded
    /// at the eye position itself.
    pub fn shade(
        &self,
        transform: &CameraTransform,
        uniforms: &UniformSet,
        x: f32,
        y: f32,
    ) -> PixelOutput {
        match self.mode {
            BackgroundMode::Banded => {
                let ray = transform.generate_ray(x, y);
                let p = intersect_sphere(&ray, self.dome_radius).unwrap_or(ray.origin);
                PixelOutput::Color(shade_banded(p))
            }
            BackgroundMode::Checker => PixelOutput::Color(shade_checker(
                x,
                y,
                uniforms.time,
                self.checker_period,
            )),
            BackgroundMode::Texture => {
                let [width, height] = uniforms.resolution;
                PixelOutput::Texture {
                    u: x / width,
                    v: y / height,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraConfig;
    use skydome_config::SessionConfig;

    fn setup(mode: BackgroundMode) -> (BackgroundShader, CameraTransform, UniformSet) {
        let mut config = SessionConfig::default();
        config.background.mode = mode;
        config.background.texture = "sky.jpg".into();
        let shader = BackgroundShader::from_config(&config.background);
        let transform = CameraTransform::new(&CameraConfig::from_config(&config));
        let uniforms = UniformSet::from_config(&config);
        (shader, transform, uniforms)
    }

    #[test]
    fn from_default_config() {
        let shader = BackgroundShader::from_config(&BackgroundConfig::default());
        assert_eq!(shader.mode, BackgroundMode::Banded);
        assert!((shader.dome_radius - 5000.0).abs() < f32::EPSILON);
        assert!((shader.checker_period - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn banded_center_pixel_matches_direct_computation() {
        let (shader, transform, uniforms) = setup(BackgroundMode::Banded);
        let ray = transform.generate_ray(400.5, 300.5);
        let p = intersect_sphere(&ray, 5000.0).unwrap();
        assert_eq!(
            shader.shade(&transform, &uniforms, 400.5, 300.5),
            PixelOutput::Color(shade_banded(p))
        );
    }

    #[test]
    fn banded_output_is_a_band_color() {
        let (shader, transform, uniforms) = setup(BackgroundMode::Banded);
        for (x, y) in [(0.5, 0.5), (799.5, 599.5), (123.5, 456.5)] {
            match shader.shade(&transform, &uniforms, x, y) {
                PixelOutput::Color(c) => assert!(BAND_COLORS.contains(&c)),
                other => panic!("expected color, got {:?}", other),
            }
        }
    }

    #[test]
    fn checker_uses_time_uniform() {
        let (shader, transform, mut uniforms) = setup(BackgroundMode::Checker);
        let before = shader.shade(&transform, &uniforms, 3.0, 3.0);
        uniforms.time = 12.0;
        let after = shader.shade(&transform, &uniforms, 3.0, 3.0);
        assert_eq!(before, PixelOutput::Color(Rgba::grey(1.0)));
        assert_eq!(after, PixelOutput::Color(Rgba::grey(0.0)));
    }

    #[test]
    fn texture_mode_emits_normalized_coordinates() {
        let (shader, transform, uniforms) = setup(BackgroundMode::Texture);
        assert_eq!(
            shader.shade(&transform, &uniforms, 400.0, 150.0),
            PixelOutput::Texture { u: 0.5, v: 0.25 }
        );
    }

    #[test]
    fn uv_sampler_ramps() {
        let c = UvSampler.sample(None, 0.25, 0.75);
        assert_eq!(c, Rgba::new(0.25, 0.75, 0.0, 1.0));
    }
}
