//! 2D Cartesian vectors.

use crate::math;
use crate::Angle;

/// A 2D Cartesian vector.
///
/// The planar counterpart of [`Vector3D`](crate::Vector3D). Rotation in
/// the plane is by a plain [`Angle`], counterclockwise:
///
/// ```
/// use spatial_core::{Angle, Vector2D};
///
/// let v = Vector2D::X.rotated_by(Angle::from_degrees(90.0));
/// assert!(v.almost_equal(&Vector2D::Y));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    /// The zero vector `[0, 0]`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// The unit vector along the X axis `[1, 0]`.
    pub const X: Self = Self::new(1.0, 0.0);

    /// The unit vector along the Y axis `[0, 1]`.
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector from x and y components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean length of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y)
    }

    /// Returns the squared magnitude.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns a unit vector pointing in the same direction. A zero
    /// vector is returned unchanged.
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            Self::new(self.x / mag, self.y / mag)
        }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (the z component of the 3D cross
    /// product of the two vectors embedded in the plane).
    #[inline]
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Rotates the vector counterclockwise by the angle, in place.
    #[inline]
    pub fn rotate_by(&mut self, angle: Angle) {
        *self = self.rotated_by(angle);
    }

    /// Returns the vector rotated counterclockwise by the angle.
    pub fn rotated_by(&self, angle: Angle) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Reinterprets the vector as a point at the same coordinates.
    #[inline]
    pub fn to_point(&self) -> crate::Point2D {
        crate::Point2D::new(self.x, self.y)
    }

    /// Returns `true` if every component is finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns `true` if all components are within the default tolerance
    /// of the other vector's.
    #[inline]
    pub fn almost_equal(&self, other: &Self) -> bool {
        math::almost_equal(self.x, other.x) && math::almost_equal(self.y, other.y)
    }
}

/// Vector + Vector
impl std::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, vec: Vector2D) -> Vector2D {
        vec * self
    }
}

/// Vector / scalar
impl std::ops::Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

/// -Vector
impl std::ops::Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
