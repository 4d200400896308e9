//! Shared range-validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is finite and strictly positive.
pub(crate) fn validate_positive(errors: &mut Vec<String>, name: &str, value: f64) {
    if !(value.is_finite() && value > 0.0) {
        errors.push(format!("{name} = {value} must be > 0"));
    }
}

/// Push an error if any component of a vector is not finite.
pub(crate) fn validate_finite3(errors: &mut Vec<String>, name: &str, value: [f64; 3]) {
    if value.iter().any(|c| !c.is_finite()) {
        errors.push(format!("{name} = {value:?} must be finite"));
    }
}
