//! Real roots of `a·t² + b·t + c = 0`.

/// Real roots of a quadratic (or degenerate linear) equation.
///
/// For [`QuadraticRoots::Two`] the roots are not ordered by magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    None,
    One(f32),
    Two(f32, f32),
}

impl QuadraticRoots {
    /// Number of real roots reported (0, 1, or 2).
    pub fn count(&self) -> usize {
        match self {
            QuadraticRoots::None => 0,
            QuadraticRoots::One(_) => 1,
            QuadraticRoots::Two(_, _) => 2,
        }
    }

    /// The greatest reported root, if any.
    pub fn max(&self) -> Option<f32> {
        match *self {
            QuadraticRoots::None => None,
            QuadraticRoots::One(r) => Some(r),
            QuadraticRoots::Two(r1, r2) => Some(r1.max(r2)),
        }
    }
}

/// Solve `a·t² + b·t + c = 0` over the reals.
///
/// Uses the cancellation-free form `q = -½(b + sign(b)·√d)`, `r1 = q/a`,
/// `r2 = c/q`. `sign(0)` is taken as `+1` so that `b == 0` still yields
/// two distinct roots when `d > 0`.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> QuadraticRoots {
    if a == 0.0 {
        if b == 0.0 {
            return QuadraticRoots::None;
        }
        return QuadraticRoots::One(-c / b);
    }

    let d = b * b - 4.0 * a * c;
    if d < 0.0 {
        return QuadraticRoots::None;
    }

    let sign = if b < 0.0 { -1.0 } else { 1.0 };
    let q = -0.5 * (b + sign * d.sqrt());
    let r1 = q / a;
    let r2 = if q == 0.0 { r1 } else { c / q };
    QuadraticRoots::Two(r1, r2)
}
