//! Six-band procedural background color.
//!
//! Five sine curves over `p.x` split the dome into horizontal bands; the
//! first curve `p.y` lies below picks the color. Only `p.x` and `p.y`
//! matter.

use skydome_common::Rgba;

use crate::math::Vec4;

/// Band colors, darkest (lowest) first.
pub const BAND_COLORS: [Rgba; 6] = [
    Rgba::new(0.04, 0.23, 0.23, 1.0),
    Rgba::new(0.07, 0.35, 0.35, 1.0),
    Rgba::new(0.09, 0.49, 0.48, 1.0),
    Rgba::new(0.14, 0.65, 0.64, 1.0),
    Rgba::new(0.28, 0.78, 0.78, 1.0),
    Rgba::new(0.51, 0.85, 0.85, 1.0),
];

/// `(amplitude, wavelength, phase, offset)` of each threshold curve
/// `amplitude · sin(x / wavelength + phase) + offset`.
const CURVES: [(f32, f32, f32, f32); 5] = [
    (280.0, 700.0, 500.0, -400.0),
    (220.0, 550.0, -300.0, -50.0),
    (160.0, 400.0, 120.0, 350.0),
    (120.0, 300.0, 150.0, 500.0),
    (80.0, 200.0, 90.0, 700.0),
];

/// Heights `y1..y5` of the threshold curves at `x`.
pub fn band_thresholds(x: f32) -> [f32; 5] {
    CURVES.map(|(amplitude, wavelength, phase, offset)| {
        amplitude * (x / wavelength + phase).sin() + offset
    })
}

/// Index into [`BAND_COLORS`] for a dome point.
///
/// Comparisons are strict and run in ascending curve order; the first
/// curve above `p.y` wins, and a point on or above every curve gets the
/// last band.
pub fn band_index(p: Vec4) -> usize {
    band_thresholds(p[0])
        .iter()
        .position(|&threshold| p[1] < threshold)
        .unwrap_or(BAND_COLORS.len() - 1)
}

/// Color of the band containing `p`.
pub fn shade_banded(p: Vec4) -> Rgba {
    BAND_COLORS[band_index(p)]
}
