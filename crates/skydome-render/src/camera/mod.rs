//! Camera configuration, the pixel-to-world transform, and ray generation.
//!
//! The transform is the fixed composition `T4 · R3 · S2 · T1`:
//! center the pixel grid on a film plane, apply the field-of-view offset,
//! rotate into the view basis, then move to the eye.

mod transform;
mod types;

pub use transform::*;
pub use types::*;
