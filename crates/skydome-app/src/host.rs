//! Headless host: scripted input, the frame loop, and file output.

use std::path::Path;
use std::time::{Duration, Instant};

use skydome_common::{Resolution, Result, SkydomeError};
use skydome_render::{FrameBuffer, FrameTimer, InputState, Scene, UniformSet, UvSampler};
use tracing::{debug, info};

use crate::cli::InputScript;

/// Wheel units added per frame by the circle script.
const WHEEL_STEP: f32 = 40.0;

impl InputScript {
    /// Feed this frame's synthetic events into `input`.
    pub fn drive(&self, frame: u32, total: u32, resolution: Resolution, input: &mut InputState) {
        match self {
            InputScript::Circle => {
                let (cx, cy) = resolution.center();
                let radius = 0.25 * resolution.width.min(resolution.height) as f32;
                let angle = std::f32::consts::TAU * frame as f32 / total.max(1) as f32;
                input.on_pointer_move(cx + radius * angle.cos(), cy + radius * angle.sin());
                input.on_wheel(WHEEL_STEP);
            }
            InputScript::Still => {}
        }
    }
}

/// Run `frames` ticks at a fixed `frame_rate` and render the last frame.
pub fn run_frames(
    scene: &mut Scene,
    input: &mut InputState,
    script: InputScript,
    frames: u32,
    frame_rate: u32,
) -> FrameBuffer {
    let frame_rate = frame_rate.max(1);
    let mut timer = FrameTimer::default();

    for frame in 0..frames {
        let started = Instant::now();
        script.drive(frame, frames, scene.resolution(), input);
        // Timestamps are derived from the frame number, not summed.
        let elapsed = Duration::from_secs_f64(f64::from(frame + 1) / f64::from(frame_rate));
        scene.tick(input, elapsed);
        timer.record(started.elapsed());

        if (frame + 1) % frame_rate == 0 {
            debug!(
                frame = frame + 1,
                fps = timer.fps(),
                frame_ms = timer.frame_time_ms(),
                "Tick timing"
            );
        }
    }

    let started = Instant::now();
    let buffer = scene.render(&UvSampler);
    info!(
        frames,
        time = scene.frame().time,
        camera_delta = ?scene.uniforms().camera_delta,
        render_ms = started.elapsed().as_secs_f64() * 1000.0,
        tick_ms = timer.frame_time_ms(),
        "Simulation finished"
    );
    buffer
}

/// Write a frame buffer as an 8-bit RGBA PNG.
pub fn write_png(path: &Path, frame: &FrameBuffer) -> Result<()> {
    let Resolution { width, height } = frame.resolution();
    let image = image::RgbaImage::from_raw(width, height, frame.to_rgba8())
        .ok_or_else(|| SkydomeError::Output(format!("frame buffer does not match {width}x{height}")))?;
    image
        .save(path)
        .map_err(|e| SkydomeError::Output(format!("failed to write {}: {e}", path.display())))?;
    info!("Frame written to {}", path.display());
    Ok(())
}

/// Write the uniform set as pretty JSON.
pub fn write_uniforms(path: &Path, uniforms: &UniformSet) -> Result<()> {
    let json = serde_json::to_string_pretty(uniforms)
        .map_err(|e| SkydomeError::Output(format!("failed to serialize uniforms: {e}")))?;
    std::fs::write(path, json)?;
    info!("Uniforms written to {}", path.display());
    Ok(())
}
