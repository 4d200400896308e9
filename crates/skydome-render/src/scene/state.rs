use std::time::Duration;

use skydome_common::{Resolution, Result};
use skydome_config::validation::validate;
use skydome_config::SessionConfig;
use tracing::{debug, info};

use crate::camera::{CameraConfig, CameraTransform};
use crate::controller::{CameraDeltaController, InputState};
use crate::gpu::UniformSet;
use crate::orbit::{create_simulation, SatelliteSimulation};
use crate::shading::{BackgroundShader, PixelOutput};

/// Mutable per-tick bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameState {
    /// Number of completed ticks.
    pub index: u64,
    /// Seconds since the scene started.
    pub time: f32,
}

/// Everything that evolves from frame to frame, built once from a
/// validated `SessionConfig`.
pub struct Scene {
    camera: CameraConfig,
    shader: BackgroundShader,
    controller: CameraDeltaController,
    simulation: Box<dyn SatelliteSimulation>,
    uniforms: UniformSet,
    frame: FrameState,
    parallel: bool,
}

impl Scene {
    /// Validate `config` and build the scene.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        validate(config)?;

        let camera = CameraConfig::from_config(config);
        let simulation = create_simulation(config);
        let mut uniforms = UniformSet::from_config(config);
        simulation.write_uniforms(&mut uniforms);

        info!(
            resolution = %camera.resolution,
            mode = ?config.background.mode,
            mapping = ?config.controller.mapping,
            satellites = simulation.satellites().len(),
            "Scene initialized"
        );

        Ok(Self {
            camera,
            shader: BackgroundShader::from_config(&config.background),
            controller: CameraDeltaController::from_config(&config.controller),
            simulation,
            uniforms,
            frame: FrameState::default(),
            parallel: config.render.parallel,
        })
    }

    /// Advance one frame: camera delta, then orbits, then the published
    /// uniforms. `elapsed` is the time since the session started.
    pub fn tick(&mut self, input: &InputState, elapsed: Duration) -> FrameState {
        let delta = self.controller.update(input, self.camera.resolution);
        self.simulation.step();

        self.uniforms.update_camera_delta(delta);
        self.simulation.write_uniforms(&mut self.uniforms);
        self.uniforms.set_time(elapsed);

        self.frame.index += 1;
        self.frame.time = self.uniforms.time;

        debug!(
            frame = self.frame.index,
            time = self.frame.time,
            delta_x = delta.x,
            delta_y = delta.y,
            delta_z = delta.z,
            "tick"
        );
        self.frame
    }

    /// Change the viewport size. Zero dimensions are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.resolution = Resolution::new(width, height);
        self.uniforms.update_viewport(width, height);
        debug!(width, height, "Scene resized");
    }

    /// This frame's transform, with the eye offset by the camera delta.
    pub fn camera_transform(&self) -> CameraTransform {
        CameraTransform::new(&self.camera.with_delta(self.controller.delta()))
    }

    /// Shade a single pixel, measured from the bottom-left corner.
    pub fn shade_pixel(&self, x: f32, y: f32) -> PixelOutput {
        self.shader
            .shade(&self.camera_transform(), &self.uniforms, x, y)
    }

    pub fn uniforms(&self) -> &UniformSet {
        &self.uniforms
    }

    pub fn frame(&self) -> FrameState {
        self.frame
    }

    pub fn resolution(&self) -> Resolution {
        self.camera.resolution
    }

    pub fn simulation(&self) -> &dyn SatelliteSimulation {
        self.simulation.as_ref()
    }

    pub(super) fn shader(&self) -> &BackgroundShader {
        &self.shader
    }

    pub(super) fn is_parallel(&self) -> bool {
        self.parallel
    }
}
