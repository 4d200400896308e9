//! Input sampling and the smoothed camera delta.

mod camera_delta;
mod input;

pub use camera_delta::*;
pub use input::*;
