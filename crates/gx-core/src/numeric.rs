//! Float guards shared by the equation-of-state and transfer code.

use crate::CoreError;

/// Absolute and relative slack when comparing pressures, volumes or mole counts.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

/// True when `a` and `b` agree within `tol.abs`, or within `tol.rel` of the
/// larger magnitude.
pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Pass a solver result through, or name the quantity that blew up.
pub fn ensure_finite(value: f64, what: &'static str) -> Result<f64, CoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::NonFinite { what, value })
    }
}

/// Cylinder volumes and similar sizes must be finite and strictly positive.
pub fn ensure_positive(value: f64, what: &'static str) -> Result<f64, CoreError> {
    let value = ensure_finite(value, what)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CoreError::NotPositive { what, value })
    }
}
