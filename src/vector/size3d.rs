//! 3D sizes (axis-aligned extents).

use crate::math;
use crate::{Point3D, Vector3D};

/// The extents of an axis-aligned 3D volume anchored at the origin.
///
/// Components may be negative; none of the operations here clamp or
/// reorder them except where documented.
///
/// ```
/// use spatial_core::Size3D;
///
/// let outer = Size3D::new(4.0, 4.0, 4.0);
/// let inner = Size3D::new(2.0, 3.0, 1.0);
/// assert!(outer.contains(&inner));
/// assert!(!inner.contains(&outer));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size3D {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Size3D {
    /// The zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// The unit size `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new size from width, height, and depth.
    #[inline]
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Returns the size's extents as a vector.
    #[inline]
    pub fn to_vector(&self) -> Vector3D {
        Vector3D::new(self.width, self.height, self.depth)
    }

    /// Creates a size from a vector's components.
    #[inline]
    pub fn from_vector(v: Vector3D) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Returns `true` if this size's extents cover the other's in every
    /// dimension.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.width >= other.width && self.height >= other.height && self.depth >= other.depth
    }

    /// Returns `true` if the point lies within the volume spanned from the
    /// origin to the size's extents.
    #[inline]
    pub fn contains_point(&self, point: &Point3D) -> bool {
        point.x >= 0.0
            && point.x <= self.width
            && point.y >= 0.0
            && point.y <= self.height
            && point.z >= 0.0
            && point.z <= self.depth
    }

    /// Returns the smallest size covering both sizes (component-wise
    /// maximum).
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            libm::fmax(self.width, other.width),
            libm::fmax(self.height, other.height),
            libm::fmax(self.depth, other.depth),
        )
    }

    /// Returns the largest size covered by both sizes (component-wise
    /// minimum, floored at zero).
    #[inline]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::new(
            libm::fmax(libm::fmin(self.width, other.width), 0.0),
            libm::fmax(libm::fmin(self.height, other.height), 0.0),
            libm::fmax(libm::fmin(self.depth, other.depth), 0.0),
        )
    }

    /// Returns `true` if every component is finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.depth.is_finite()
    }

    /// Returns `true` if all components are within the default tolerance
    /// of the other size's.
    #[inline]
    pub fn almost_equal(&self, other: &Self) -> bool {
        math::almost_equal(self.width, other.width)
            && math::almost_equal(self.height, other.height)
            && math::almost_equal(self.depth, other.depth)
    }
}

/// Size + Size
impl std::ops::Add for Size3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.width + rhs.width,
            self.height + rhs.height,
            self.depth + rhs.depth,
        )
    }
}

/// Size - Size
impl std::ops::Sub for Size3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.width - rhs.width,
            self.height - rhs.height,
            self.depth - rhs.depth,
        )
    }
}

/// Size * scalar
impl std::ops::Mul<f64> for Size3D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(
            self.width * scalar,
            self.height * scalar,
            self.depth * scalar,
        )
    }
}

/// scalar * Size
impl std::ops::Mul<Size3D> for f64 {
    type Output = Size3D;

    fn mul(self, size: Size3D) -> Size3D {
        size * self
    }
}

/// Size / scalar
impl std::ops::Div<f64> for Size3D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(
            self.width / scalar,
            self.height / scalar,
            self.depth / scalar,
        )
    }
}

/// -Size
impl std::ops::Neg for Size3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.width, -self.height, -self.depth)
    }
}
