//! Satellite simulation: orbital integrator or null.
//!
//! The active simulation is selected by config and writes satellite
//! positions into the uniform set every frame.

mod integrator;
mod null;
mod types;

pub use integrator::*;
pub use null::*;
pub use types::*;

use skydome_config::SessionConfig;

/// Create the appropriate simulation from config.
pub fn create_simulation(config: &SessionConfig) -> Box<dyn SatelliteSimulation> {
    if !config.orbit.enabled {
        return Box::new(NullSimulation::new());
    }
    Box::new(OrbitalIntegrator::from_config(&config.orbit))
}
