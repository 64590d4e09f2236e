//! Core angle type.
//!
//! This module provides [`Angle`], the scalar angular measurement used
//! throughout the library. Angles are stored internally as radians (f64)
//! and can be constructed from and converted to degrees.
//!
//! # Design Rationale
//!
//! **Why radians internally?** Trigonometric functions operate on radians.
//! Storing radians avoids repeated conversions during calculations; the
//! degree-based constructor and accessor provide ergonomic APIs for
//! human-readable values.
//!
//! **Why associated constants?** [`Angle::PI`], [`Angle::HALF_PI`], and
//! [`Angle::ZERO`] exist because angles are not just numbers. While
//! `std::f64::consts::PI` gives you a raw float, `Angle::PI` gives you a
//! typed angle, which keeps raw radians from leaking into APIs that expect
//! angles.
//!
//! # Quick Start
//!
//! ```
//! use spatial_core::Angle;
//!
//! // Construction - pick the unit that matches your data
//! let from_deg = Angle::from_degrees(45.0);
//! let from_rad = Angle::from_radians(0.785398);
//!
//! // Conversion
//! assert!((from_deg.radians() - 0.785398).abs() < 1e-5);
//! assert!((from_rad.degrees() - 45.0).abs() < 1e-4);
//!
//! // Trigonometry - no conversion needed
//! let (sin, cos) = from_deg.sin_cos();
//! assert!((sin - cos).abs() < 1e-10);
//! ```
//!
//! # Normalization and Inversion
//!
//! [`Angle::normalized`] wraps into (-180, +180] degrees;
//! [`Angle::inverse`] gives the angle pointing the opposite way around
//! the circle. Neither happens implicitly: `Angle::from_degrees(720.0)`
//! keeps its winding until you ask for the normalized form, and two
//! windings of the same direction do not compare approximately equal.

use crate::constants::{HALF_PI, PI, QUARTER_PI, TWOPI};
use crate::math;

/// An angular measurement stored as radians.
///
/// `Angle` is the primary type for representing plane angles and rotation
/// magnitudes throughout this library. It stores the angle as a 64-bit
/// float in radians and converts to and from degrees on demand.
///
/// # Derives
///
/// - `Copy`, `Clone`: angles are small (8 bytes) and cheap to copy
/// - `Debug`: shows the internal radian value
/// - `PartialEq`, `PartialOrd`: compares radian values exactly
/// - `Default`: the zero angle
///
/// Note: `Eq` and `Ord` are not implemented because f64 can be NaN. For
/// tolerance-based comparison use [`Angle::almost_equal`], which compares
/// raw radians: a full turn is not approximately equal to zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle (0 radians).
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Pi radians (180 degrees).
    pub const PI: Self = Self { rad: PI };

    /// Pi/2 radians (90 degrees).
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// Pi/4 radians (45 degrees).
    pub const QUARTER_PI: Self = Self { rad: QUARTER_PI };

    /// 2*pi radians (360 degrees, a full turn).
    pub const TWO_PI: Self = Self { rad: TWOPI };

    /// Creates an angle from radians.
    ///
    /// This is the only `const` constructor because radians are the
    /// internal representation.
    ///
    /// # Example
    ///
    /// ```
    /// use spatial_core::Angle;
    /// use std::f64::consts::FRAC_PI_4;
    ///
    /// let angle = Angle::from_radians(FRAC_PI_4);
    /// assert!((angle.degrees() - 45.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    ///
    /// # Example
    ///
    /// ```
    /// use spatial_core::Angle;
    ///
    /// let angle = Angle::from_degrees(180.0);
    /// assert!((angle.radians() - std::f64::consts::PI).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Returns the angle in radians.
    ///
    /// This is the internal representation, so no conversion occurs.
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// Returns the sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.rad)
    }

    /// Returns the cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    /// Returns both sine and cosine of the angle.
    ///
    /// # Returns
    ///
    /// A tuple `(sin, cos)`.
    ///
    /// # Example
    ///
    /// ```
    /// use spatial_core::Angle;
    ///
    /// let angle = Angle::from_degrees(30.0);
    /// let (sin, cos) = angle.sin_cos();
    /// assert!((sin - 0.5).abs() < 1e-10);
    /// assert!((cos - 0.866025).abs() < 1e-5);
    /// ```
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    /// Returns the tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        libm::tan(self.rad)
    }

    /// Returns the hyperbolic sine of the angle's radian value.
    #[inline]
    pub fn sinh(self) -> f64 {
        libm::sinh(self.rad)
    }

    /// Returns the hyperbolic cosine of the angle's radian value.
    #[inline]
    pub fn cosh(self) -> f64 {
        libm::cosh(self.rad)
    }

    /// Returns the hyperbolic tangent of the angle's radian value.
    #[inline]
    pub fn tanh(self) -> f64 {
        libm::tanh(self.rad)
    }

    /// Creates the angle whose sine is `v`.
    ///
    /// Values outside [-1, 1] produce a NaN angle, matching `asin`.
    #[inline]
    pub fn asin(v: f64) -> Self {
        Self { rad: libm::asin(v) }
    }

    /// Creates the angle whose cosine is `v`.
    ///
    /// Values outside [-1, 1] produce a NaN angle, matching `acos`.
    #[inline]
    pub fn acos(v: f64) -> Self {
        Self { rad: libm::acos(v) }
    }

    /// Creates the angle whose tangent is `v`.
    #[inline]
    pub fn atan(v: f64) -> Self {
        Self { rad: libm::atan(v) }
    }

    /// Creates the angle of the point `(x, y)` from the positive x axis,
    /// in (-pi, pi].
    ///
    /// # Example
    ///
    /// ```
    /// use spatial_core::Angle;
    ///
    /// let angle = Angle::atan2(1.0, 1.0);
    /// assert!((angle.degrees() - 45.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn atan2(y: f64, x: f64) -> Self {
        Self {
            rad: libm::atan2(y, x),
        }
    }

    /// Creates the angle whose hyperbolic sine is `v`.
    #[inline]
    pub fn asinh(v: f64) -> Self {
        Self {
            rad: libm::asinh(v),
        }
    }

    /// Creates the angle whose hyperbolic cosine is `v`.
    #[inline]
    pub fn acosh(v: f64) -> Self {
        Self {
            rad: libm::acosh(v),
        }
    }

    /// Creates the angle whose hyperbolic tangent is `v`.
    #[inline]
    pub fn atanh(v: f64) -> Self {
        Self {
            rad: libm::atanh(v),
        }
    }

    /// Returns the absolute value of the angle.
    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: libm::fabs(self.rad),
        }
    }

    /// Returns the angle wrapped to (-180, +180] degrees ((-pi, +pi]
    /// radians).
    ///
    /// A half turn normalizes to +180 degrees regardless of its original
    /// sign, so normalization and [`inverse`](Self::inverse) agree on the
    /// boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use spatial_core::Angle;
    ///
    /// assert!((Angle::from_degrees(270.0).normalized().degrees() - (-90.0)).abs() < 1e-10);
    /// assert_eq!(Angle::from_degrees(-180.0).normalized().degrees(), 180.0);
    /// assert_eq!(Angle::from_degrees(540.0).normalized().degrees(), 180.0);
    /// assert_eq!(Angle::from_degrees(720.0).normalized().degrees(), 0.0);
    /// ```
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            rad: super::normalize::wrap_pm_pi(self.rad),
        }
    }

    /// Wraps the angle to (-pi, +pi] in place.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Inverts the angle in place, pointing it the opposite way around
    /// the circle.
    ///
    /// Non-negative angles move back by a half turn, negative angles move
    /// forward by one, so the result stays within one turn of the input.
    #[inline]
    pub fn invert(&mut self) {
        if self.rad >= 0.0 {
            self.rad -= PI;
        } else {
            self.rad += PI;
        }
    }

    /// Returns the angle pointing the opposite way around the circle.
    ///
    /// # Example
    ///
    /// ```
    /// use spatial_core::Angle;
    ///
    /// assert!((Angle::from_degrees(90.0).inverse().degrees() - (-90.0)).abs() < 1e-10);
    /// assert!((Angle::from_degrees(-30.0).inverse().degrees() - 150.0).abs() < 1e-10);
    /// assert!((Angle::from_degrees(0.0).inverse().degrees() - (-180.0)).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn inverse(self) -> Self {
        let mut out = self;
        out.invert();
        out
    }

    /// Returns `true` if the two angles' radian values are within the
    /// default tolerance of each other.
    ///
    /// The comparison is on raw radians, not directions: a full turn is
    /// not approximately equal to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use spatial_core::Angle;
    ///
    /// let a = Angle::from_degrees(45.0);
    /// let b = Angle::from_radians(a.radians() + 1e-12);
    /// assert!(a.almost_equal(b));
    /// assert!(!Angle::ZERO.almost_equal(Angle::TWO_PI));
    /// ```
    #[inline]
    pub fn almost_equal(self, other: Self) -> bool {
        math::almost_equal(self.rad, other.rad)
    }

    /// Returns `true` if every component is finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rad", self.rad)
    }
}

/// Creates an angle from radians. Shorthand for [`Angle::from_radians`].
///
/// # Example
///
/// ```
/// use spatial_core::angle::rad;
/// use std::f64::consts::PI;
///
/// let angle = rad(PI);
/// assert!((angle.degrees() - 180.0).abs() < 1e-10);
/// ```
#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}

/// Creates an angle from degrees. Shorthand for [`Angle::from_degrees`].
///
/// # Example
///
/// ```
/// use spatial_core::angle::deg;
///
/// let angle = deg(45.0);
/// assert!((angle.radians() - std::f64::consts::FRAC_PI_4).abs() < 1e-10);
/// ```
#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}
