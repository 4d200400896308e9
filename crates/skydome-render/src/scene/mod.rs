//! Frame driver: owns the controller, simulation and uniforms, and renders
//! the background for the current frame.

mod frame;
mod state;

pub use frame::*;
pub use state::*;
