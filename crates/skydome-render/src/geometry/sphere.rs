//! Ray–sphere intersection for a sphere centered at the origin.

use serde::Serialize;

use super::quadratic::solve_quadratic;
use crate::math::vector::{self, Vec4};

/// Squared direction lengths below this are treated as a degenerate ray.
pub const MIN_DIRECTION_LENGTH_SQ: f32 = 1e-12;

/// A ray in homogeneous coordinates. `direction` need not be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ray {
    pub origin: Vec4,
    pub direction: Vec4,
}

impl Ray {
    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec4 {
        vector::add4(self.origin, vector::scale4(self.direction, t))
    }
}

/// Intersect `ray` with the origin-centered sphere of `radius`.
///
/// The far intersection is returned: the sphere is a dome the camera sits
/// inside, so the near root lies behind the viewer. A tangent ray reports
/// its single touching point. Rays with a (near) zero direction miss.
///
/// Only the `xyz` components enter the quadratic, so the returned point
/// lies on the sphere regardless of the homogeneous `w`. A four-component
/// dot would add the origin's `w² = 1` to `c` and shrink the dome.
pub fn intersect_sphere(ray: &Ray, radius: f32) -> Option<Vec4> {
    let origin = vector::truncate(ray.origin);
    let direction = vector::truncate(ray.direction);

    let a = vector::dot(direction, direction);
    if a < MIN_DIRECTION_LENGTH_SQ {
        return None;
    }
    let b = 2.0 * vector::dot(direction, origin);
    let c = vector::dot(origin, origin) - radius * radius;

    let t = solve_quadratic(a, b, c).max()?;
    Some(ray.at(t))
}
