//! Orbital simulation validation.

use crate::schema::{SessionConfig, MAX_SATELLITES};

use super::helpers::{validate_positive, validate_range};

/// Validate satellite count, mass, and spacing.
///
/// A disabled simulation is not checked.
pub(crate) fn validate_orbit(errors: &mut Vec<String>, config: &SessionConfig) {
    let orbit = &config.orbit;
    if !orbit.enabled {
        return;
    }

    validate_range(errors, "orbit.count", orbit.count, 1, MAX_SATELLITES);
    if !(orbit.central_mass.is_finite() && orbit.central_mass >= 0.0) {
        errors.push(format!(
            "orbit.central_mass = {} must be >= 0",
            orbit.central_mass
        ));
    }
    validate_positive(errors, "orbit.first_distance", orbit.first_distance);
    if !(orbit.spacing.is_finite() && orbit.spacing >= 0.0) {
        errors.push(format!("orbit.spacing = {} must be >= 0", orbit.spacing));
    }
    validate_positive(errors, "orbit.min_distance", orbit.min_distance);
}
