//! Angle normalization and guarded inverse-trigonometry primitives.
//!
//! Every public-facing angle in this crate is expressed in degrees; conversion
//! to radians happens immediately before each trigonometric call and back
//! immediately after. The helpers here are the correctness-critical low-level
//! pieces shared by the solar and lunar models.

use crate::constants::{Degree, Radian};

/// Reduce an angle to the range [0, 360).
///
/// Uses the floored-modulo form `x − 360·floor(x/360)`, which is exact for
/// negative inputs as well (the `%` operator keeps the sign of the dividend
/// and must not be used here).
///
/// Arguments
/// ---------
/// * `x`: an angle in degrees, any finite value
///
/// Return
/// ------
/// * the same angle reduced to [0, 360)
pub fn clamp360(x: Degree) -> Degree {
    x - 360.0 * (x / 360.0).floor()
}

/// Arcsine with the argument clamped into [-1, 1].
///
/// Accumulated floating-point error can push a sine value marginally outside
/// the mathematical domain near the horizon or the zenith; clamping keeps the
/// result finite instead of letting NaN propagate through the pipeline.
pub(crate) fn safe_asin(x: f64) -> Radian {
    x.clamp(-1.0, 1.0).asin()
}
