//! Raw quaternion algebra.
//!
//! [`Quaternion`] is the numeric backing for
//! [`Rotation3D`](crate::Rotation3D): plain Hamilton algebra with no
//! rotation semantics attached. Nothing here normalizes implicitly, so a
//! quaternion can hold any four components; the rotation layer above
//! decides when to renormalize.
//!
//! The component order is `(x, y, z, w)`: imaginary vector first, real
//! part last. Identity is `(0, 0, 0, 1)`.

use crate::math;
use crate::Vector3D;

/// A quaternion `x·i + y·j + z·k + w`.
///
/// ```
/// use spatial_core::Quaternion;
///
/// // i * j = k
/// let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
/// let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
/// assert_eq!(i * j, Quaternion::new(0.0, 0.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    /// The identity quaternion `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from its four components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the imaginary part `(x, y, z)` as a vector.
    #[inline]
    pub fn imag(&self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    /// Returns the conjugate `(-x, -y, -z, w)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Computes the four-component dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared norm: `x² + y² + z² + w²`.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Norm (magnitude).
    #[inline]
    pub fn norm(&self) -> f64 {
        libm::sqrt(self.norm_squared())
    }

    /// Returns the quaternion scaled to unit norm.
    ///
    /// The zero quaternion has no direction and is returned unchanged.
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            *self
        } else {
            self.scaled(1.0 / n)
        }
    }

    /// Returns the inverse `conjugate / norm²`.
    ///
    /// For unit quaternions this equals the conjugate. The zero
    /// quaternion has no inverse and is returned unchanged.
    pub fn inverse(&self) -> Self {
        let n2 = self.norm_squared();
        if n2 == 0.0 {
            *self
        } else {
            self.conjugate().scaled(1.0 / n2)
        }
    }

    /// Returns the quaternion with every component multiplied by `k`.
    #[inline]
    pub fn scaled(&self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k, self.w * k)
    }

    /// Returns `true` if every component is finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Rotates a vector by this quaternion (`q v q⁻¹` for unit `q`).
    ///
    /// Uses the expanded form `v + 2w(u × v) + 2(u × (u × v))` where `u`
    /// is the imaginary part, which avoids building the full sandwich
    /// product.
    pub fn rotate_vector(&self, v: Vector3D) -> Vector3D {
        let u = self.imag();
        let uv = u.cross(&v);
        let uuv = u.cross(&uv);
        v + uv * (2.0 * self.w) + uuv * 2.0
    }

    /// Converts a 3x3 rotation matrix, given as three column vectors, to
    /// a quaternion.
    ///
    /// Branches on the largest diagonal term so the square root is always
    /// taken of a well-conditioned quantity. The result is not normalized
    /// here; callers that need a unit quaternion normalize afterwards.
    pub fn from_rotation_matrix_columns(cols: [[f64; 3]; 3]) -> Self {
        // m(r, c) with columns stored first
        let m = |r: usize, c: usize| cols[c][r];
        let trace = m(0, 0) + m(1, 1) + m(2, 2);

        if trace > 0.0 {
            let s = libm::sqrt(trace + 1.0);
            let k = 0.5 / s;
            Self::new(
                (m(2, 1) - m(1, 2)) * k,
                (m(0, 2) - m(2, 0)) * k,
                (m(1, 0) - m(0, 1)) * k,
                s * 0.5,
            )
        } else if m(0, 0) >= m(1, 1) && m(0, 0) >= m(2, 2) {
            let s = libm::sqrt((1.0 + m(0, 0) - m(1, 1) - m(2, 2)) * 0.25);
            let k = 0.25 / s;
            Self::new(
                s,
                (m(0, 1) + m(1, 0)) * k,
                (m(0, 2) + m(2, 0)) * k,
                (m(2, 1) - m(1, 2)) * k,
            )
        } else if m(1, 1) >= m(2, 2) {
            let s = libm::sqrt((1.0 - m(0, 0) + m(1, 1) - m(2, 2)) * 0.25);
            let k = 0.25 / s;
            Self::new(
                (m(0, 1) + m(1, 0)) * k,
                s,
                (m(1, 2) + m(2, 1)) * k,
                (m(0, 2) - m(2, 0)) * k,
            )
        } else {
            let s = libm::sqrt((1.0 - m(0, 0) - m(1, 1) + m(2, 2)) * 0.25);
            let k = 0.25 / s;
            Self::new(
                (m(0, 2) + m(2, 0)) * k,
                (m(1, 2) + m(2, 1)) * k,
                s,
                (m(1, 0) - m(0, 1)) * k,
            )
        }
    }

    /// Natural logarithm of a unit quaternion.
    ///
    /// The result is pure-imaginary: the rotation axis scaled by half the
    /// rotation angle. The identity (and any quaternion with a vanishing
    /// imaginary part) maps to zero.
    pub fn ln(&self) -> Self {
        let n = libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z);
        if n < f64::EPSILON {
            return Self::new(0.0, 0.0, 0.0, 0.0);
        }
        let theta = libm::atan2(n, self.w);
        let k = theta / n;
        Self::new(self.x * k, self.y * k, self.z * k, 0.0)
    }

    /// Exponential of a pure-imaginary quaternion.
    ///
    /// Inverse of [`ln`](Self::ln) on the unit sphere: maps an
    /// axis-times-half-angle vector back to a unit quaternion. The `w`
    /// component of `self` is ignored.
    pub fn exp(&self) -> Self {
        let theta = libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z);
        if theta < f64::EPSILON {
            // sin(θ)/θ → 1 as θ → 0
            return Self::new(self.x, self.y, self.z, libm::cos(theta));
        }
        let (s, c) = libm::sincos(theta);
        let k = s / theta;
        Self::new(self.x * k, self.y * k, self.z * k, c)
    }

    /// Returns `true` if all four components are within the default
    /// tolerance of the other quaternion's.
    #[inline]
    pub fn almost_equal(&self, other: &Self) -> bool {
        math::almost_equal(self.x, other.x)
            && math::almost_equal(self.y, other.y)
            && math::almost_equal(self.z, other.z)
            && math::almost_equal(self.w, other.w)
    }
}

/// Quaternion * Quaternion (Hamilton product; `lhs * rhs` applies `rhs`
/// first when the product is used as a rotation)
impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

/// &Quaternion * Quaternion
impl std::ops::Mul<Quaternion> for &Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        *self * rhs
    }
}

/// Quaternion * &Quaternion
impl std::ops::Mul<&Quaternion> for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: &Quaternion) -> Quaternion {
        self * *rhs
    }
}

/// &Quaternion * &Quaternion
impl std::ops::Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: &Quaternion) -> Quaternion {
        *self * *rhs
    }
}

/// Quaternion + Quaternion (component-wise; used by interpolation)
impl std::ops::Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

/// -Quaternion
impl std::ops::Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}
