//! Quaternion-backed 3D rotations.
//!
//! [`Rotation3D`] wraps a [`Quaternion`] and adds rotation semantics:
//! construction from Euler angles, from an angle and axis, and from
//! forward/up orientation vectors; composition, inversion, and the
//! angle/axis and Euler views of the stored quaternion.
//!
//! # Composition Order
//!
//! `lhs * rhs` composes under the Hamilton convention: the product is the
//! rotation that applies `rhs` first, then `lhs`. Two quarter turns about
//! the same axis multiply to a half turn about it.
//!
//! # Double Cover
//!
//! A quaternion and its negation represent the same rotation. Exact
//! comparisons ([`is_identity`](Rotation3D::is_identity), `==`) see two
//! different values; [`almost_equal`](Rotation3D::almost_equal) compares
//! through the dot product and treats them as equal. The two notions are
//! deliberately not unified.
//!
//! ```
//! use spatial_core::{Angle, Rotation3D, RotationAxis3D};
//!
//! let quarter = Rotation3D::from_angle_axis(Angle::HALF_PI, RotationAxis3D::Z);
//! let half = Rotation3D::from_angle_axis(Angle::PI, RotationAxis3D::Z);
//! assert!((quarter * quarter).almost_equal(&half));
//! ```

use crate::constants::HALF_PI;
use crate::math;
use crate::rotation::euler::{EulerAngles, EulerOrder};
use crate::{Angle, Point3D, Quaternion, RotationAxis3D, Vector3D};
use std::fmt;

/// A 3D rotation stored as a quaternion.
///
/// Most constructors normalize, so freshly built rotations are valid
/// (unit norm). [`from_quaternion`](Self::from_quaternion) stores its
/// argument as given; check [`is_valid`](Self::is_valid) when the source
/// is untrusted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation3D {
    quaternion: Quaternion,
}

impl Rotation3D {
    /// The identity rotation, quaternion `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self {
        quaternion: Quaternion::IDENTITY,
    };

    /// Creates a rotation from a raw quaternion, stored as given.
    ///
    /// No normalization is applied; a non-unit argument produces a
    /// rotation for which [`is_valid`](Self::is_valid) is `false`.
    #[inline]
    pub const fn from_quaternion(quaternion: Quaternion) -> Self {
        Self { quaternion }
    }

    /// Creates a rotation of `angle` about `axis`.
    ///
    /// The standard half-angle form `(axis·sin(θ/2), cos(θ/2))`,
    /// normalized. The axis itself is not normalized first: a non-unit
    /// axis still yields a unit quaternion, but one skewed toward the
    /// axis's imaginary part, so callers should pass a unit axis. A zero
    /// axis collapses to the identity for every angle: the imaginary
    /// part vanishes and normalization rescales whatever real part is
    /// left back to one.
    ///
    /// ```
    /// use spatial_core::{Angle, Rotation3D, RotationAxis3D};
    ///
    /// let r = Rotation3D::from_angle_axis(Angle::HALF_PI, RotationAxis3D::Z);
    /// assert!(r.is_valid());
    /// assert!(r.angle().almost_equal(Angle::HALF_PI));
    /// ```
    pub fn from_angle_axis(angle: Angle, axis: RotationAxis3D) -> Self {
        let (s, c) = (angle / 2.0).sin_cos();
        let q = Quaternion::new(axis.x * s, axis.y * s, axis.z * s, c);
        Self {
            quaternion: q.normalized(),
        }
    }

    /// Creates a rotation from Euler angles.
    ///
    /// Builds the quaternion from half-angle products of the three
    /// component angles, taken in the order's axis sequence, and
    /// normalizes the result.
    pub fn from_euler(angles: EulerAngles) -> Self {
        // roll/pitch/yaw follow the order's first/second/third axis
        let (roll, pitch, yaw) = match angles.order {
            EulerOrder::Xyz => (angles.x, angles.y, angles.z),
            EulerOrder::Zxy => (angles.z, angles.x, angles.y),
        };
        let (sr, cr) = (roll / 2.0).sin_cos();
        let (sp, cp) = (pitch / 2.0).sin_cos();
        let (sy, cy) = (yaw / 2.0).sin_cos();

        let r = cr * cp * cy + sr * sp * sy;
        let i1 = sr * cp * cy - cr * sp * sy;
        let i2 = cr * sp * cy + sr * cp * sy;
        let i3 = cr * cp * sy - sr * sp * cy;

        let q = match angles.order {
            EulerOrder::Xyz => Quaternion::new(i1, i2, i3, r),
            EulerOrder::Zxy => Quaternion::new(i2, i3, i1, r),
        };
        Self {
            quaternion: q.normalized(),
        }
    }

    /// Creates a rotation that orients the given forward and up
    /// directions.
    ///
    /// Both inputs must be unit length; this is a debug-checked
    /// precondition, not a recoverable error. The rotation is built from
    /// the basis columns `(forward, forward × side, side)` where
    /// `side = forward × up`, converted to a quaternion and normalized.
    pub fn from_forward_up(forward: Vector3D, up: Vector3D) -> Self {
        debug_assert!(
            math::almost_equal(forward.magnitude(), 1.0),
            "forward must be unit length, got magnitude {}",
            forward.magnitude()
        );
        debug_assert!(
            math::almost_equal(up.magnitude(), 1.0),
            "up must be unit length, got magnitude {}",
            up.magnitude()
        );

        let side = forward.cross(&up);
        let up2 = forward.cross(&side);
        let q = Quaternion::from_rotation_matrix_columns([
            forward.to_array(),
            up2.to_array(),
            side.to_array(),
        ]);
        Self {
            quaternion: q.normalized(),
        }
    }

    /// Creates the rotation that looks from `position` toward `target`
    /// with the given up direction.
    ///
    /// The aim direction `target − position` is normalized here, so the
    /// distance between the two points does not matter. `up` must still
    /// be unit length.
    pub fn looking_at(position: Point3D, target: Point3D, up: Vector3D) -> Self {
        let forward = (target - position).normalized();
        Self::from_forward_up(forward, up)
    }

    /// Returns the underlying quaternion.
    #[inline]
    pub fn quaternion(&self) -> Quaternion {
        self.quaternion
    }

    /// Returns the rotation angle, in `[0, 2π]`.
    ///
    /// The identity has angle zero.
    pub fn angle(&self) -> Angle {
        let q = self.quaternion;
        let n = q.imag().magnitude();
        if n < f64::EPSILON {
            Angle::ZERO
        } else {
            Angle::from_radians(2.0 * libm::atan2(n, q.w))
        }
    }

    /// Returns the unit rotation axis.
    ///
    /// The identity has no preferred axis and reports the x axis.
    pub fn axis(&self) -> RotationAxis3D {
        let imag = self.quaternion.imag();
        let n = imag.magnitude();
        if n < f64::EPSILON {
            RotationAxis3D::X
        } else {
            RotationAxis3D::from_vector(imag / n)
        }
    }

    /// Replaces the rotation angle, keeping the axis.
    pub fn set_angle(&mut self, angle: Angle) {
        *self = Self::from_angle_axis(angle, self.axis());
    }

    /// Replaces the rotation axis, keeping the angle.
    pub fn set_axis(&mut self, axis: RotationAxis3D) {
        *self = Self::from_angle_axis(self.angle(), axis);
    }

    /// Extracts Euler angles in the given order.
    ///
    /// Inverse of [`from_euler`](Self::from_euler) for a unit quaternion.
    /// The pitch term uses the atan2 form rather than a plain `asin`, and
    /// its sine is clamped to `[-1, 1]` so poses at the gimbal poles
    /// produce an exact ±90° pitch instead of NaN.
    pub fn euler_angles(&self, order: EulerOrder) -> EulerAngles {
        let q = self.quaternion;
        let (i1, i2, i3) = match order {
            EulerOrder::Xyz => (q.x, q.y, q.z),
            EulerOrder::Zxy => (q.z, q.x, q.y),
        };
        let r = q.w;

        let roll = Angle::atan2(
            2.0 * (r * i1 + i2 * i3),
            1.0 - 2.0 * (i1 * i1 + i2 * i2),
        );
        let v = math::clamp_unit(2.0 * (r * i2 - i1 * i3));
        let pitch =
            Angle::from_radians(2.0 * libm::atan2(libm::sqrt(1.0 + v), libm::sqrt(1.0 - v)) - HALF_PI);
        let yaw = Angle::atan2(
            2.0 * (r * i3 + i1 * i2),
            1.0 - 2.0 * (i2 * i2 + i3 * i3),
        );

        match order {
            EulerOrder::Xyz => EulerAngles::new(roll, pitch, yaw, order),
            EulerOrder::Zxy => EulerAngles::new(pitch, yaw, roll, order),
        }
    }

    /// Computes the quaternion dot product with another rotation.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.quaternion.dot(&other.quaternion)
    }

    /// Returns `true` if the quaternion norm is approximately one.
    #[inline]
    pub fn is_valid(&self) -> bool {
        math::almost_equal(self.quaternion.norm(), 1.0)
    }

    /// Returns `true` if the quaternion is exactly `(0, 0, 0, 1)`.
    ///
    /// This is a bitwise test: the negated identity `(0, 0, 0, -1)`
    /// represents the same rotation but reports `false` here. Use
    /// [`almost_equal`](Self::almost_equal) for the semantic comparison.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.quaternion == Quaternion::IDENTITY
    }

    /// Returns `true` if every quaternion component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.quaternion.is_finite()
    }

    /// Returns `true` if the two rotations are the same within the
    /// default tolerance.
    ///
    /// Compares `|dot|` against one, which identifies a quaternion with
    /// its negation (the double cover).
    #[inline]
    pub fn almost_equal(&self, other: &Self) -> bool {
        math::almost_equal(libm::fabs(self.dot(other)), 1.0)
    }

    /// Inverts the rotation in place.
    ///
    /// Uses the full quaternion inverse (conjugate over squared norm),
    /// which equals the conjugate for unit rotations.
    #[inline]
    pub fn invert(&mut self) {
        self.quaternion = self.quaternion.inverse();
    }

    /// Returns the inverse rotation.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::from_quaternion(self.quaternion.inverse())
    }

    /// Rescales the quaternion to unit norm in place.
    #[inline]
    pub fn normalize(&mut self) {
        self.quaternion = self.quaternion.normalized();
    }

    /// Returns the rotation with its quaternion rescaled to unit norm.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::from_quaternion(self.quaternion.normalized())
    }

    /// Composes `rotation` onto this rotation in place (`rotation`
    /// applies after the current rotation).
    #[inline]
    pub fn rotate_by(&mut self, rotation: &Self) {
        *self = rotation * &*self;
    }

    /// Returns this rotation with `rotation` applied after it.
    #[inline]
    pub fn rotated_by(&self, rotation: &Self) -> Self {
        rotation * self
    }
}

impl Default for Rotation3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotation * Rotation (Hamilton product; `lhs * rhs` applies `rhs` first)
impl std::ops::Mul for Rotation3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_quaternion(self.quaternion * rhs.quaternion)
    }
}

/// &Rotation * Rotation
impl std::ops::Mul<Rotation3D> for &Rotation3D {
    type Output = Rotation3D;

    fn mul(self, rhs: Rotation3D) -> Rotation3D {
        *self * rhs
    }
}

/// Rotation * &Rotation
impl std::ops::Mul<&Rotation3D> for Rotation3D {
    type Output = Rotation3D;

    fn mul(self, rhs: &Rotation3D) -> Rotation3D {
        self * *rhs
    }
}

/// &Rotation * &Rotation
impl std::ops::Mul<&Rotation3D> for &Rotation3D {
    type Output = Rotation3D;

    fn mul(self, rhs: &Rotation3D) -> Rotation3D {
        *self * *rhs
    }
}

/// Rotation *= Rotation
impl std::ops::MulAssign for Rotation3D {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Rotation3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.quaternion;
        write!(
            f,
            "Rotation3D({:.9}, {:.9}, {:.9}, {:.9})",
            q.x, q.y, q.z, q.w
        )
    }
}
