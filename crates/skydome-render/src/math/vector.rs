//! 3- and 4-component vector helpers.
//!
//! `Vec4` is homogeneous: `w = 1` for points, `w = 0` for directions.

/// 3-component vector.
pub type Vec3 = [f32; 3];

/// Homogeneous 4-component vector.
pub type Vec4 = [f32; 4];

/// Lengths below this are treated as zero by [`normalize`].
pub const NORMALIZE_EPSILON: f32 = 1e-12;

pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(v: Vec3, s: f32) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn length(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`, or zero if `v` is (near) zero.
pub fn normalize(v: Vec3) -> Vec3 {
    let len = length(v);
    if len <= NORMALIZE_EPSILON {
        return [0.0; 3];
    }
    scale(v, 1.0 / len)
}

pub fn is_finite(v: Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Homogeneous point (`w = 1`).
pub fn point(v: Vec3) -> Vec4 {
    [v[0], v[1], v[2], 1.0]
}

/// Homogeneous direction (`w = 0`).
pub fn direction(v: Vec3) -> Vec4 {
    [v[0], v[1], v[2], 0.0]
}

/// Drop the `w` component.
pub fn truncate(v: Vec4) -> Vec3 {
    [v[0], v[1], v[2]]
}

pub fn add4(a: Vec4, b: Vec4) -> Vec4 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
}

pub fn sub4(a: Vec4, b: Vec4) -> Vec4 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]]
}

pub fn scale4(v: Vec4, s: f32) -> Vec4 {
    [v[0] * s, v[1] * s, v[2] * s, v[3] * s]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_axes() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross([0.0, 1.0, 0.0], [0.0, 0.0, -1.0]), [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn normalize_unit_length() {
        let n = normalize([3.0, 0.0, 4.0]);
        assert!((length(n) - 1.0).abs() < 1e-6);
        assert!((n[0] - 0.6).abs() < 1e-6);
        assert!((n[2] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_stays_zero() {
        assert_eq!(normalize([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn homogeneous_point_and_direction() {
        assert_eq!(point([1.0, 2.0, 3.0])[3], 1.0);
        assert_eq!(direction([1.0, 2.0, 3.0])[3], 0.0);
        assert_eq!(truncate([1.0, 2.0, 3.0, 1.0]), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn is_finite_rejects_nan() {
        assert!(is_finite([0.0, 1.0, 2.0]));
        assert!(!is_finite([f32::NAN, 0.0, 0.0]));
        assert!(!is_finite([0.0, f32::INFINITY, 0.0]));
    }
}
