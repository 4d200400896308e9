//! Satellite state and the simulation trait.

use serde::Serialize;

use crate::gpu::UniformSet;
use crate::math::Vec3;

/// One orbiting body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Satellite {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Trait for satellite simulations (integrator or no-op).
///
/// The satellite count is fixed at construction and never changes.
pub trait SatelliteSimulation: Send + Sync {
    /// Whether any satellites are simulated.
    fn is_active(&self) -> bool;

    /// Advance one fixed step.
    fn step(&mut self);

    /// Current satellite states in their fixed order.
    fn satellites(&self) -> &[Satellite];

    /// Publish satellite positions into the uniform set.
    fn write_uniforms(&self, uniforms: &mut UniformSet) {
        uniforms.satellite_positions.clear();
        uniforms
            .satellite_positions
            .extend(self.satellites().iter().map(|s| s.position));
    }
}
