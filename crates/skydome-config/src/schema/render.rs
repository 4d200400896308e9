//! Frame loop configuration types.

use serde::{Deserialize, Serialize};

/// Frame pacing for the host loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Ticks per simulated second; sets the `time` uniform step in headless runs.
    pub frame_rate: u32,
    /// Number of ticks a headless run performs before presenting.
    pub frames: u32,
    /// Shade pixels on the rayon thread pool.
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            frames: 120,
            parallel: true,
        }
    }
}
