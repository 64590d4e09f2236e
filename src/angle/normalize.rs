//! Angle wrapping helpers.
//!
//! Two conventions cover the crate's needs:
//!
//! | Range | Function | Used for |
//! |-------|----------|----------|
//! | (-pi, +pi] | [`wrap_pm_pi`] | normalized angles, Euler components |
//! | [0, 2pi) | [`wrap_0_2pi`] | cyclic intermediates |
//!
//! Both reduce through `libm::fmod` (via [`crate::math::fmod`]) rather than
//! the `%` operator because Rust's `%` is a remainder, not a modulo, and the
//! two differ for negative inputs. After `fmod`, the result is shifted into
//! the target interval.
//!
//! Note the closed end of [`wrap_pm_pi`]: both `+pi` and `-pi` map to `+pi`,
//! so a half turn keeps its sign under normalization and inversion.

use crate::constants::{PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle to (-pi, +pi] radians.
///
/// Use for quantities where the discontinuity belongs at the back of the
/// circle. A half turn maps to `+pi`, never `-pi`.
///
/// # Examples
///
/// ```
/// use spatial_core::angle::wrap_pm_pi;
/// use std::f64::consts::PI;
///
/// // 270 degrees -> -90 degrees
/// let x = wrap_pm_pi(3.0 * PI / 2.0);
/// assert!((x - (-PI / 2.0)).abs() < 1e-10);
///
/// // Both half-turn representations land on +pi
/// assert_eq!(wrap_pm_pi(PI), PI);
/// assert_eq!(wrap_pm_pi(-PI), PI);
///
/// // Already in range: unchanged
/// let z = wrap_pm_pi(1.0);
/// assert!((z - 1.0).abs() < 1e-10);
/// ```
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    PI - wrap_0_2pi(PI - x)
}

/// Wraps an angle to [0, 2pi) radians.
///
/// # Examples
///
/// ```
/// use spatial_core::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// // Negative angle -> positive equivalent
/// let x = wrap_0_2pi(-PI / 2.0);
/// assert!((x - 3.0 * PI / 2.0).abs() < 1e-10);
///
/// // Angle > 2pi -> reduced
/// let y = wrap_0_2pi(5.0 * PI);
/// assert!((y - PI).abs() < 1e-10);
/// ```
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        // The shift can round a remainder within half an ulp of zero up
        // to a full turn; fold that back to keep the interval half-open.
        let shifted = w + TWOPI;
        if shifted == TWOPI {
            0.0
        } else {
            shifted
        }
    } else {
        w
    }
}
