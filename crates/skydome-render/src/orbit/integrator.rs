//! Fixed-step integrator for satellites around a central point mass.

use skydome_config::schema::OrbitConfig;
use tracing::trace;

use super::types::{Satellite, SatelliteSimulation};
use crate::math::vector;

/// Satellites pulled toward a point mass at the origin.
///
/// One [`step`](SatelliteSimulation::step) is one unit of time: velocity is
/// updated from the current position, then position from the new velocity
/// (semi-implicit Euler).
pub struct OrbitalIntegrator {
    satellites: Vec<Satellite>,
    central_mass: f32,
    /// Distances are clamped to at least this before dividing.
    min_distance: f32,
}

impl OrbitalIntegrator {
    pub fn new(satellites: Vec<Satellite>, central_mass: f32, min_distance: f32) -> Self {
        Self {
            satellites,
            central_mass,
            min_distance,
        }
    }

    /// Create from the orbit config section with the standard initial layout.
    pub fn from_config(config: &OrbitConfig) -> Self {
        let satellites = initial_satellites(
            config.count as usize,
            config.first_distance as f32,
            config.spacing as f32,
        );
        Self::new(
            satellites,
            config.central_mass as f32,
            config.min_distance as f32,
        )
    }

    /// Acceleration of a body at `position`.
    pub fn acceleration(&self, position: vector::Vec3) -> vector::Vec3 {
        let distance = vector::length(position).max(self.min_distance);
        let factor = self.central_mass / (distance * distance * distance);
        vector::scale(position, -factor)
    }
}

/// Satellites spaced along +x, each launched along +y.
///
/// Satellite `i` starts at distance `d = first + i·spacing` with speed
/// `0.1·√d`. This is a fixed launch heuristic, not the circular-orbit speed.
pub fn initial_satellites(count: usize, first_distance: f32, spacing: f32) -> Vec<Satellite> {
    (0..count)
        .map(|i| {
            let distance = first_distance + i as f32 * spacing;
            Satellite {
                position: [distance, 0.0, 0.0],
                velocity: [0.0, 0.1 * distance.sqrt(), 0.0],
            }
        })
        .collect()
}

impl SatelliteSimulation for OrbitalIntegrator {
    fn is_active(&self) -> bool {
        !self.satellites.is_empty()
    }

    fn step(&mut self) {
        for i in 0..self.satellites.len() {
            let accel = self.acceleration(self.satellites[i].position);
            let sat = &mut self.satellites[i];
            sat.velocity = vector::add(sat.velocity, accel);
            sat.position = vector::add(sat.position, sat.velocity);
            trace!(index = i, position = ?sat.position, "satellite stepped");
        }
    }

    fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }
}

// =============================================================================
// Tests
// =============================================================================
