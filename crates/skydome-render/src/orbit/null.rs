//! Null simulation, used when `orbit.enabled = false`.

use super::types::{Satellite, SatelliteSimulation};

/// A simulation with no satellites.
pub struct NullSimulation;

impl NullSimulation {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullSimulation {
    fn default() -> Self {
        Self::new()
    }
}

impl SatelliteSimulation for NullSimulation {
    fn is_active(&self) -> bool {
        false
    }

    fn step(&mut self) {}

    fn satellites(&self) -> &[Satellite] {
        &[]
    }
}

// =============================================================================
// Tests
// =============================================================================
