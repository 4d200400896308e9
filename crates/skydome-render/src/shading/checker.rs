//! Time-scrolling checkerboard used to check pixel addressing and timing.

use skydome_common::Rgba;

/// Grey checker at pixel `(x, y)`.
///
/// Each axis is lit for the first half of every `period` pixels, offset by
/// `time`; a pixel is white only where both axes are lit.
pub fn shade_checker(x: f32, y: f32, time: f32, period: f32) -> Rgba {
    let half = 0.5 * period;
    let lit = |c: f32| if (time + c).rem_euclid(period) < half { 1.0 } else { 0.0 };
    Rgba::grey(f32::min(lit(x), lit(y)))
}
