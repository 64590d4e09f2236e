//! 3D Cartesian vectors.
//!
//! Vectors are the workhorses of the spatial math in this crate. Rotation
//! axes, displacements between points, and the forward/up directions that
//! orient a rotation are all [`Vector3D`] values under the hood.
//!
//! # Vectors vs Points
//!
//! A vector is a displacement; a point is a location. The operator set
//! keeps the two honest: subtracting two [`Point3D`](crate::Point3D)s
//! yields a `Vector3D`, and adding a `Vector3D` to a point yields another
//! point. Converting between the two is explicit
//! ([`to_point`](Vector3D::to_point) / [`to_vector`](crate::Point3D::to_vector)).
//!
//! # Dot and Cross Products
//!
//! - **Dot product**: for unit vectors, `a.dot(&b)` equals `cos(θ)` where
//!   θ is the angle between them.
//! - **Cross product**: the axis perpendicular to two directions, with the
//!   right-hand rule. Look-at construction builds its basis this way.
//!
//! ```
//! use spatial_core::Vector3D;
//!
//! let a = Vector3D::X;
//! let b = Vector3D::Y;
//!
//! // Perpendicular: dot product is zero
//! assert_eq!(a.dot(&b), 0.0);
//!
//! // Cross product gives +Z (right-hand rule)
//! assert_eq!(a.cross(&b), Vector3D::Z);
//! ```

use crate::math;
use std::fmt;

/// A 3D Cartesian vector.
///
/// Used throughout the library for displacements, directions, and rotation
/// axes.
///
/// # Fields
///
/// Components are public for direct access:
/// - `x`: first component
/// - `y`: second component
/// - `z`: third component
///
/// # Construction
///
/// ```
/// use spatial_core::Vector3D;
///
/// // Direct construction
/// let v = Vector3D::new(1.0, 2.0, 3.0);
///
/// // Unit vectors along axes
/// let x = Vector3D::X;
/// let y = Vector3D::Y;
/// let z = Vector3D::Z;
///
/// // From an array
/// let v = Vector3D::from_array([1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    /// The zero vector `[0, 0, 0]`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// The unit vector along the X axis `[1, 0, 0]`.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// The unit vector along the Y axis `[0, 1, 0]`.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// The unit vector along the Z axis `[0, 0, 1]`.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector from x, y, z components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Returns the squared magnitude.
    ///
    /// Faster than [`magnitude`](Self::magnitude) when you only need to
    /// compare lengths.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// If the vector has zero length, returns the zero vector unchanged
    /// (avoids NaN).
    ///
    /// ```
    /// use spatial_core::Vector3D;
    ///
    /// let v = Vector3D::new(3.0, 4.0, 0.0);
    /// let unit = v.normalized();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    /// assert_eq!(unit, Vector3D::new(0.6, 0.8, 0.0));
    /// ```
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            Self::new(self.x / mag, self.y / mag, self.z / mag)
        }
    }

    /// Normalizes the vector in place. A zero vector is left unchanged.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Computes the dot product (inner product) with another vector.
    ///
    /// ```
    /// use spatial_core::Vector3D;
    ///
    /// let c = Vector3D::new(1.0, 2.0, 3.0);
    /// let d = Vector3D::new(4.0, 5.0, 6.0);
    /// assert_eq!(c.dot(&d), 32.0);  // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector.
    ///
    /// The result is perpendicular to both input vectors, with direction
    /// given by the right-hand rule. The magnitude equals `|a||b|sin(θ)`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Reinterprets the vector as a point at the same coordinates.
    #[inline]
    pub fn to_point(&self) -> crate::Point3D {
        crate::Point3D::new(self.x, self.y, self.z)
    }

    /// Reinterprets the vector as a size with the same extents.
    #[inline]
    pub fn to_size(&self) -> crate::Size3D {
        crate::Size3D::new(self.x, self.y, self.z)
    }

    /// Reinterprets the vector as a rotation axis.
    #[inline]
    pub fn to_rotation_axis(&self) -> crate::RotationAxis3D {
        crate::RotationAxis3D::new(self.x, self.y, self.z)
    }

    /// Returns `true` if every component is finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns `true` if all components are within the default tolerance
    /// of the other vector's.
    #[inline]
    pub fn almost_equal(&self, other: &Self) -> bool {
        math::almost_equal(self.x, other.x)
            && math::almost_equal(self.y, other.y)
            && math::almost_equal(self.z, other.z)
    }
}

/// Vector + Vector
impl std::ops::Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector += Vector
impl std::ops::AddAssign for Vector3D {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Vector -= Vector
impl std::ops::SubAssign for Vector3D {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, vec: Vector3D) -> Vector3D {
        vec * self
    }
}

/// Vector *= scalar
impl std::ops::MulAssign<f64> for Vector3D {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

/// Vector / scalar
impl std::ops::Div<f64> for Vector3D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// Vector /= scalar
impl std::ops::DivAssign<f64> for Vector3D {
    fn div_assign(&mut self, scalar: f64) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

/// -Vector
impl std::ops::Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3D {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3D index out of bounds: {}", index),
        }
    }
}

/// v[i] = value mutable indexing (panics if i > 2)
impl std::ops::IndexMut<usize> for Vector3D {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3D index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3D({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
