//! Uniform values and the GPU-facing layout they pack into.

mod types;
mod uniforms;

pub use types::*;
pub use uniforms::*;
