//! Validation for the smaller sections: viewport and render pacing.

use crate::schema::SessionConfig;

use super::helpers::validate_range;

/// Validate viewport constraints.
pub(crate) fn validate_viewport(errors: &mut Vec<String>, config: &SessionConfig) {
    validate_range(errors, "viewport.width", config.viewport.width, 1, 16384);
    validate_range(errors, "viewport.height", config.viewport.height, 1, 16384);
}

/// Validate render pacing constraints.
pub(crate) fn validate_render(errors: &mut Vec<String>, config: &SessionConfig) {
    validate_range(
        errors,
        "render.frame_rate",
        config.render.frame_rate,
        1,
        240,
    );
}
