//! Inversion of a segment's x(t) mapping.
//!
//! A Bezier segment is parameterized by `t`, not by `x`, so evaluating the
//! easing curve at a given `x` first needs the `t` that produces it. The
//! solver runs Newton-Raphson from a linear guess and falls back to bisection
//! when Newton stalls on a flat or cusp-like tangent. Worst case is 10 Newton
//! steps plus 40 halvings.

use crate::segment::Segment;

/// Absolute x tolerance for a solution.
pub const X_EPSILON: f64 = 1e-6;

/// Derivative magnitude below which Newton iteration is abandoned.
pub const DERIVATIVE_EPSILON: f64 = 1e-12;

/// Maximum Newton-Raphson steps.
pub const MAX_NEWTON_ITERATIONS: u32 = 10;

/// Maximum bisection halvings.
pub const MAX_BISECTION_ITERATIONS: u32 = 40;

/// How a [`Solution`] was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveMethod {
    /// The target was within tolerance of a segment endpoint.
    Endpoint,
    /// Newton-Raphson converged.
    Newton,
    /// Newton did not converge and bisection produced the result.
    Bisection,
}

/// Result of inverting a segment's x(t).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    /// Segment-local parameter in `[0, 1]`.
    pub t: f64,
    /// Which phase produced `t`.
    pub method: SolveMethod,
    /// Iterations spent in the phase that produced `t`.
    pub iterations: u32,
}

impl Solution {
    fn endpoint(t: f64) -> Self {
        Self {
            t,
            method: SolveMethod::Endpoint,
            iterations: 0,
        }
    }
}

/// Find `t ∈ [0, 1]` such that `segment.x_at(t)` is within [`X_EPSILON`] of
/// `target_x`.
///
/// For monotonic segments the residual bound always holds. For segments whose
/// x(t) folds back on itself the result is the bisection midpoint, which is
/// the best the interval search can offer.
pub fn solve_t_for_x(segment: &Segment, target_x: f64) -> Solution {
    let Segment { p1, p2, .. } = *segment;

    if (target_x - p1.x).abs() <= X_EPSILON {
        return Solution::endpoint(0.0);
    }
    if (target_x - p2.x).abs() <= X_EPSILON {
        return Solution::endpoint(1.0);
    }

    let mut t = ((target_x - p1.x) / (p2.x - p1.x)).clamp(0.0, 1.0);
    if t.is_nan() {
        t = 0.0;
    }

    for iteration in 0..MAX_NEWTON_ITERATIONS {
        let error = segment.x_at(t) - target_x;
        if error.abs() <= X_EPSILON {
            return Solution {
                t,
                method: SolveMethod::Newton,
                iterations: iteration,
            };
        }

        let dx_dt = segment.dx_dt(t);
        if dx_dt.abs() < DERIVATIVE_EPSILON {
            break;
        }

        t = (t - error / dx_dt).clamp(0.0, 1.0);
    }

    bisect(segment, target_x)
}

fn bisect(segment: &Segment, target_x: f64) -> Solution {
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    let mut mid = 0.5;
    let mut iterations = 0;

    while iterations < MAX_BISECTION_ITERATIONS {
        iterations += 1;
        mid = 0.5 * (lo + hi);
        let x = segment.x_at(mid);
        if (x - target_x).abs() <= X_EPSILON {
            break;
        }
        if x > target_x {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    tracing::trace!(
        target_x,
        t = mid,
        iterations,
        "newton did not converge, solved by bisection"
    );

    Solution {
        t: mid,
        method: SolveMethod::Bisection,
        iterations,
    }
}
