//! 2D points.

use crate::math;
use crate::Vector2D;
use std::fmt;

/// A location in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new point from x and y coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point's position vector.
    #[inline]
    pub fn to_vector(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    /// Returns the Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        (*other - *self).magnitude()
    }

    /// Returns the point halfway between this point and another.
    #[inline]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Returns `true` if every coordinate is finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns `true` if all coordinates are within the default tolerance
    /// of the other point's.
    #[inline]
    pub fn almost_equal(&self, other: &Self) -> bool {
        math::almost_equal(self.x, other.x) && math::almost_equal(self.y, other.y)
    }
}

/// Point + Vector → Point
impl std::ops::Add<Vector2D> for Point2D {
    type Output = Self;

    fn add(self, rhs: Vector2D) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Point - Vector → Point
impl std::ops::Sub<Vector2D> for Point2D {
    type Output = Self;

    fn sub(self, rhs: Vector2D) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Point - Point → Vector
impl std::ops::Sub for Point2D {
    type Output = Vector2D;

    fn sub(self, rhs: Self) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Point * scalar → Point (scales the position relative to the origin)
impl std::ops::Mul<f64> for Point2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

/// -Point (reflects the position through the origin)
impl std::ops::Neg for Point2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point2D({:.9}, {:.9})", self.x, self.y)
    }
}
