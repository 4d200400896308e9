//! Background sub-config validation.

use crate::schema::{BackgroundMode, SessionConfig};

use super::helpers::validate_positive;

/// Validate all background-related constraints.
pub(crate) fn validate_background(errors: &mut Vec<String>, config: &SessionConfig) {
    validate_positive(
        errors,
        "background.dome_radius",
        config.background.dome_radius,
    );
    validate_positive(
        errors,
        "background.checker_period",
        config.background.checker_period,
    );
    if config.background.mode == BackgroundMode::Texture && config.background.texture.is_empty()
    {
        errors.push("background.texture must name an asset when mode = \"texture\"".into());
    }
}
