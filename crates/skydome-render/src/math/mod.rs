//! Small fixed-size vector and matrix math.
//!
//! Plain arrays rather than a math crate: every value here crosses into a
//! uniform block or a per-pixel loop, and the set of operations is tiny.

pub mod matrix;
pub mod vector;

pub use matrix::Mat4;
pub use vector::{Vec3, Vec4};
