use crate::geometry::Ray;
use crate::math::matrix::{self as mat, Mat4};
use crate::math::vector::{self, Vec3, Vec4};

use super::types::CameraConfig;

/// `|up × view|` below this is a degenerate basis and a fallback up is used.
pub const MIN_BASIS_LENGTH: f32 = 1e-6;

/// T1: center pixel coordinates and push them onto the film plane.
pub fn film_centering(width: f32, height: f32, film_depth: f32) -> Mat4 {
    mat::translate([-0.5 * width, -0.5 * height, film_depth])
}

/// S2: field-of-view stage.
///
/// This is a translation by `(-h/height, -h/height, 1)` with
/// `h = 2·depth·tan(fovy/2)`, not a scale. Rendered output depends on this
/// exact form.
pub fn field_of_view_offset(fovy_degrees: f32, film_depth: f32, height: f32) -> Mat4 {
    let h = 2.0 * film_depth * (0.5 * fovy_degrees.to_radians()).tan();
    mat::translate([-h / height, -h / height, 1.0])
}

/// R3: rotation into the orthonormal view basis `(u, v, w)`.
///
/// `w` is the normalized view direction, `u = normalize(up × w)` and
/// `v = w × u`. When `up` is parallel to `view` a world axis not parallel
/// to `w` stands in for `up`.
pub fn view_rotation(view: Vec3, up: Vec3) -> Mat4 {
    let w = vector::normalize(view);
    let mut side = vector::cross(up, w);
    if vector::length(side) < MIN_BASIS_LENGTH {
        let fallback = if w[0].abs() < 0.9 {
            [1.0, 0.0, 0.0]
        } else {
            [0.0, 1.0, 0.0]
        };
        side = vector::cross(fallback, w);
    }
    let u = vector::normalize(side);
    let v = vector::cross(w, u);
    mat::from_columns(
        vector::direction(u),
        vector::direction(v),
        vector::direction(w),
        [0.0, 0.0, 0.0, 1.0],
    )
}

/// T4: move to the eye.
pub fn eye_translation(eye: Vec3) -> Mat4 {
    mat::translate(eye)
}

/// World-from-pixel transform for one camera configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    world_from_pixel: Mat4,
    eye: Vec4,
}

impl CameraTransform {
    /// Compose `T4 · R3 · S2 · T1` for `camera`.
    pub fn new(camera: &CameraConfig) -> Self {
        let width = camera.resolution.width as f32;
        let height = camera.resolution.height as f32;

        let t1 = film_centering(width, height, camera.film_depth);
        let s2 = field_of_view_offset(camera.fovy, camera.film_depth, height);
        let r3 = view_rotation(camera.view, camera.up);
        let t4 = eye_translation(camera.eye);

        let world_from_pixel = mat::mul(&t4, &mat::mul(&r3, &mat::mul(&s2, &t1)));
        Self {
            world_from_pixel,
            eye: vector::point(camera.eye),
        }
    }

    pub fn eye(&self) -> Vec4 {
        self.eye
    }

    /// World-space ray through pixel `(x, y)`, measured from the bottom-left.
    ///
    /// The origin is the eye; the direction runs from the eye to the pixel's
    /// world position and is not normalized.
    pub fn generate_ray(&self, x: f32, y: f32) -> Ray {
        let world = mat::transform(&self.world_from_pixel, [x, y, 0.0, 1.0]);
        Ray {
            origin: self.eye,
            direction: vector::sub4(world, self.eye),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skydome_common::Resolution;

    fn default_camera() -> CameraConfig {
        CameraConfig {
            eye: [0.0, 0.0, 1.0],
            view: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            fovy: 50.0,
            film_depth: 100.0,
            resolution: Resolution::new(800, 600),
        }
    }

    fn normalized_direction(ray: &Ray) -> Vec3 {
        vector::normalize(vector::truncate(ray.direction))
    }

    #[test]
    fn center_pixel_looks_down_view_axis() {
        let transform = CameraTransform::new(&default_camera());
        let ray = transform.generate_ray(400.0, 300.0);
        let dir = normalized_direction(&ray);
        assert!(dir[0].abs() < 5e-3, "{:?}", dir);
        assert!(dir[1].abs() < 5e-3, "{:?}", dir);
        assert!((dir[2] + 1.0).abs() < 1e-4, "{:?}", dir);
    }

    #[test]
    fn ray_origin_is_eye_and_direction_has_zero_w() {
        let transform = CameraTransform::new(&default_camera());
        let ray = transform.generate_ray(12.0, 34.0);
        assert_eq!(ray.origin, [0.0, 0.0, 1.0, 1.0]);
        assert!(ray.direction[3].abs() < 1e-6);
    }

    #[test]
    fn film_centering_maps_center_to_film_plane() {
        let t1 = film_centering(800.0, 600.0, 100.0);
        let p = mat::transform(&t1, [400.0, 300.0, 0.0, 1.0]);
        assert_eq!(p, [0.0, 0.0, 100.0, 1.0]);
    }

    #[test]
    fn field_of_view_offset_is_a_translation() {
        let s2 = field_of_view_offset(50.0, 100.0, 600.0);
        let h = 200.0 * 25.0f32.to_radians().tan();
        // Diagonal untouched, offset in the translation column.
        assert_eq!(s2[0], 1.0);
        assert_eq!(s2[5], 1.0);
        assert_eq!(s2[10], 1.0);
        assert!((s2[12] + h / 600.0).abs() < 1e-6);
        assert!((s2[13] + h / 600.0).abs() < 1e-6);
        assert!((s2[14] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn view_rotation_is_orthonormal() {
        let r = view_rotation([1.0, 2.0, -3.0], [0.0, 1.0, 0.0]);
        let col = |i: usize| [r[i * 4], r[i * 4 + 1], r[i * 4 + 2]];
        for i in 0..3 {
            assert!((vector::length(col(i)) - 1.0).abs() < 1e-5);
            for j in (i + 1)..3 {
                assert!(vector::dot(col(i), col(j)).abs() < 1e-5);
            }
        }
        // Third column is the normalized view direction.
        let w = vector::normalize([1.0, 2.0, -3.0]);
        assert!(vector::length(vector::sub(col(2), w)) < 1e-6);
    }

    #[test]
    fn default_basis_flips_x() {
        // up × (0,0,-1) = (-1,0,0)
        let r = view_rotation([0.0, 0.0, -1.0], [0.0, 1.0, 0.0]);
        assert_eq!([r[0], r[1], r[2]], [-1.0, 0.0, 0.0]);
        assert_eq!([r[4], r[5], r[6]], [0.0, 1.0, 0.0]);
        assert_eq!([r[8], r[9], r[10]], [0.0, 0.0, -1.0]);
    }

    #[test]
    fn parallel_up_falls_back_to_finite_basis() {
        let r = view_rotation([0.0, 1.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(r.iter().all(|c| c.is_finite()));
        let u = [r[0], r[1], r[2]];
        assert!((vector::length(u) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn eye_offset_shifts_ray_origin() {
        let mut camera = default_camera();
        camera.eye = [3.0, -2.0, 5.0];
        let transform = CameraTransform::new(&camera);
        assert_eq!(transform.eye(), [3.0, -2.0, 5.0, 1.0]);
        let ray = transform.generate_ray(400.0, 300.0);
        assert_eq!(ray.origin, [3.0, -2.0, 5.0, 1.0]);
        // Direction is unaffected by a pure eye translation.
        let dir = normalized_direction(&ray);
        assert!((dir[2] + 1.0).abs() < 1e-4);
    }

    #[test]
    fn pixels_right_of_center_tilt_along_u() {
        let transform = CameraTransform::new(&default_camera());
        let left = transform.generate_ray(0.0, 300.0);
        let right = transform.generate_ray(800.0, 300.0);
        // u = (-1, 0, 0) for this camera, so larger x goes toward -x.
        assert!(right.direction[0] < left.direction[0]);
    }
}
