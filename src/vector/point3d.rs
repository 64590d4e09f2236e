//! 3D points.
//!
//! A [`Point3D`] is a location in space, as opposed to a
//! [`Vector3D`](crate::Vector3D), which is a displacement. The difference
//! of two points is a vector; a point plus a vector is another point.

use crate::math;
use crate::Vector3D;
use std::fmt;

/// A location in 3D space.
///
/// # Construction
///
/// ```
/// use spatial_core::{Point3D, Vector3D};
///
/// let p = Point3D::new(1.0, 2.0, 3.0);
/// let q = p + Vector3D::new(0.0, 0.0, 1.0);
/// assert_eq!(q, Point3D::new(1.0, 2.0, 4.0));
///
/// // Point difference is a displacement
/// assert_eq!(q - p, Vector3D::Z);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    /// The origin `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new point from x, y, z coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the point's position vector (displacement from the origin).
    #[inline]
    pub fn to_vector(&self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    /// Returns the coordinates as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates a point from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Returns the Euclidean distance to another point.
    ///
    /// ```
    /// use spatial_core::Point3D;
    ///
    /// let a = Point3D::new(1.0, 0.0, 0.0);
    /// let b = Point3D::new(4.0, 4.0, 0.0);
    /// assert_eq!(a.distance(&b), 5.0);
    /// ```
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        (*other - *self).magnitude()
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f64 {
        (*other - *self).magnitude_squared()
    }

    /// Returns the point halfway between this point and another.
    #[inline]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }

    /// Returns `true` if every coordinate is finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns `true` if all coordinates are within the default tolerance
    /// of the other point's.
    #[inline]
    pub fn almost_equal(&self, other: &Self) -> bool {
        math::almost_equal(self.x, other.x)
            && math::almost_equal(self.y, other.y)
            && math::almost_equal(self.z, other.z)
    }
}

/// Point + Vector → Point
impl std::ops::Add<Vector3D> for Point3D {
    type Output = Self;

    fn add(self, rhs: Vector3D) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Point += Vector
impl std::ops::AddAssign<Vector3D> for Point3D {
    fn add_assign(&mut self, rhs: Vector3D) {
        *self = *self + rhs;
    }
}

/// Point - Vector → Point
impl std::ops::Sub<Vector3D> for Point3D {
    type Output = Self;

    fn sub(self, rhs: Vector3D) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Point -= Vector
impl std::ops::SubAssign<Vector3D> for Point3D {
    fn sub_assign(&mut self, rhs: Vector3D) {
        *self = *self - rhs;
    }
}

/// Point - Point → Vector
impl std::ops::Sub for Point3D {
    type Output = Vector3D;

    fn sub(self, rhs: Self) -> Vector3D {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Point * scalar → Point (scales the position relative to the origin)
impl std::ops::Mul<f64> for Point3D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// -Point (reflects the position through the origin)
impl std::ops::Neg for Point3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point3D({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
