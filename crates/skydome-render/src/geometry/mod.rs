//! Ray and quadric geometry used by the per-pixel background pass.

mod quadratic;
mod sphere;

pub use quadratic::*;
pub use sphere::*;
