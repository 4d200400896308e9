//! Camera delta controller validation.

use crate::schema::SessionConfig;

/// Validate smoothing, sensitivity, and wheel range.
pub(crate) fn validate_controller(errors: &mut Vec<String>, config: &SessionConfig) {
    let c = &config.controller;

    if !(c.smoothing > 0.0 && c.smoothing <= 1.0) {
        errors.push(format!(
            "controller.smoothing = {} must be in (0, 1]",
            c.smoothing
        ));
    }

    for (name, value) in [
        ("controller.factor_x", c.factor_x),
        ("controller.factor_y", c.factor_y),
        ("controller.factor_z", c.factor_z),
    ] {
        if !value.is_finite() {
            errors.push(format!("{name} = {value} must be finite"));
        }
    }

    if !(c.wheel_min.is_finite() && c.wheel_max.is_finite() && c.wheel_min < c.wheel_max) {
        errors.push(format!(
            "controller.wheel_min = {} must be below controller.wheel_max = {}",
            c.wheel_min, c.wheel_max
        ));
    }
}
