//! Numerical core of the sky dome background: camera rays, the dome
//! intersection, procedural shading, orbiting satellites and the smoothed
//! camera delta, driven one frame at a time by [`Scene`].

pub mod camera;
pub mod controller;
pub mod geometry;
pub mod gpu;
pub mod math;
pub mod orbit;
pub mod perf;
pub mod scene;
pub mod shading;

pub use camera::{CameraConfig, CameraTransform};
pub use controller::{CameraDelta, CameraDeltaController, InputState};
pub use geometry::{intersect_sphere, solve_quadratic, QuadraticRoots, Ray};
pub use gpu::{GpuUniforms, TextureHandle, UniformSet};
pub use orbit::{create_simulation, Satellite, SatelliteSimulation};
pub use perf::FrameTimer;
pub use scene::{FrameBuffer, FrameState, Scene};
pub use shading::{BackgroundShader, PixelOutput, TextureSampler, UvSampler};
