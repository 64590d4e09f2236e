//! 2D sizes.

use crate::math;
use crate::{Point2D, Vector2D};

/// The extents of an axis-aligned 2D region anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size2D {
    pub width: f64,
    pub height: f64,
}

impl Size2D {
    /// The zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// The unit size `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Creates a new size from width and height.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the size's extents as a vector.
    #[inline]
    pub fn to_vector(&self) -> Vector2D {
        Vector2D::new(self.width, self.height)
    }

    /// Returns `true` if this size's extents cover the other's in both
    /// dimensions.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.width >= other.width && self.height >= other.height
    }

    /// Returns `true` if the point lies within the region spanned from
    /// the origin to the size's extents.
    #[inline]
    pub fn contains_point(&self, point: &Point2D) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Returns the smallest size covering both sizes.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            libm::fmax(self.width, other.width),
            libm::fmax(self.height, other.height),
        )
    }

    /// Returns the largest size covered by both sizes, floored at zero.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::new(
            libm::fmax(libm::fmin(self.width, other.width), 0.0),
            libm::fmax(libm::fmin(self.height, other.height), 0.0),
        )
    }

    /// Returns `true` if every component is finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Returns `true` if both components are within the default tolerance
    /// of the other size's.
    #[inline]
    pub fn almost_equal(&self, other: &Self) -> bool {
        math::almost_equal(self.width, other.width) && math::almost_equal(self.height, other.height)
    }
}

/// Size + Size
impl std::ops::Add for Size2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.width + rhs.width, self.height + rhs.height)
    }
}

/// Size - Size
impl std::ops::Sub for Size2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.width - rhs.width, self.height - rhs.height)
    }
}

/// Size * scalar
impl std::ops::Mul<f64> for Size2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.width * scalar, self.height * scalar)
    }
}

/// Size / scalar
impl std::ops::Div<f64> for Size2D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.width / scalar, self.height / scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let outer = Size2D::new(4.0, 4.0);
        let inner = Size2D::new(2.0, 3.0);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn test_contains_point() {
        let s = Size2D::new(2.0, 2.0);
        assert!(s.contains_point(&Point2D::new(1.0, 1.0)));
        assert!(!s.contains_point(&Point2D::new(-1.0, 1.0)));
        assert!(!s.contains_point(&Point2D::new(1.0, 3.0)));
    }

    #[test]
    fn test_union_intersection() {
        let a = Size2D::new(1.0, 4.0);
        let b = Size2D::new(3.0, 2.0);
        assert_eq!(a.union(&b), Size2D::new(3.0, 4.0));
        assert_eq!(a.intersection(&b), Size2D::new(1.0, 2.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Size2D::new(2.0, 4.0);
        assert_eq!(a + Size2D::ONE, Size2D::new(3.0, 5.0));
        assert_eq!(a - Size2D::ONE, Size2D::new(1.0, 3.0));
        assert_eq!(a * 0.5, Size2D::new(1.0, 2.0));
        assert_eq!(a / 2.0, Size2D::new(1.0, 2.0));
    }
}
