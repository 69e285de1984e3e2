//! Tolerance defaults (crate-wide).
//!
//! Policy
//! - One fixed constant for every "is zero" / "are equal" comparison: side
//!   lengths, parallelism, right angles, point coincidence, turn signs and
//!   plane membership. It is never passed per call.

/// Absolute tolerance used by all floating comparisons in the crate.
pub const EPSILON: f64 = 1e-10;

/// `|v| < EPSILON`.
#[inline]
pub(crate) fn near_zero(v: f64) -> bool {
    v.abs() < EPSILON
}

/// `|a − b| < EPSILON`; `NaN` on either side compares unequal.
#[inline]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    near_zero(a - b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_bound_is_exclusive() {
        assert!(near_zero(0.5 * EPSILON));
        assert!(!near_zero(EPSILON));
        assert!(!near_zero(-EPSILON));
        assert!(approx_eq(90.0, 90.0));
        assert!(!approx_eq(EPSILON, 0.0));
        assert!(!approx_eq(f64::NAN, f64::NAN));
        assert!(!approx_eq(f64::NAN, 1.0));
    }
}
