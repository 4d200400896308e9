//! Camera configuration validation.

use crate::schema::SessionConfig;

use super::helpers::{validate_finite3, validate_positive};

/// Smallest acceptable |view × up| relative to |view|·|up|.
const MIN_BASIS_SINE: f64 = 1e-6;

/// Validate camera placement and projection constraints.
pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &SessionConfig) {
    let camera = &config.camera;
    validate_finite3(errors, "camera.eye", camera.eye);
    validate_finite3(errors, "camera.view", camera.view);
    validate_finite3(errors, "camera.up", camera.up);

    if !(camera.fovy > 0.0 && camera.fovy < 180.0) {
        errors.push(format!(
            "camera.fovy = {} must be in (0, 180)",
            camera.fovy
        ));
    }
    validate_positive(errors, "camera.film_depth", camera.film_depth);

    let view_len = length(camera.view);
    let up_len = length(camera.up);
    if view_len == 0.0 {
        errors.push("camera.view must be non-zero".into());
    }
    if up_len == 0.0 {
        errors.push("camera.up must be non-zero".into());
    }
    if view_len > 0.0 && up_len > 0.0 {
        let sine = length(cross(camera.up, camera.view)) / (view_len * up_len);
        if sine < MIN_BASIS_SINE {
            errors.push("camera.view and camera.up must not be parallel".into());
        }
    }
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn length(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}
