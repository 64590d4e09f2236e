//! Euler-angle containers.
//!
//! A quaternion rotation can be expressed as three sequential single-axis
//! rotations. The decomposition is order-dependent; the same quaternion
//! yields different component angles under different orders, and the
//! order used to build an [`EulerAngles`] value must be used to interpret
//! it.

use crate::Angle;

/// The axis ordering of an Euler-angle decomposition.
///
/// Two orderings are supported. Roll, pitch, and yaw are mapped onto the
/// axis labels per order: for [`Xyz`](Self::Xyz) roll is about x, pitch
/// about y, and yaw about z; for [`Zxy`](Self::Zxy) roll is about z,
/// pitch about x, and yaw about y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EulerOrder {
    /// Rotation about x, then y, then z.
    Xyz,
    /// Rotation about z, then x, then y.
    Zxy,
}

/// Three per-axis rotation angles plus the order that interprets them.
///
/// ```
/// use spatial_core::{Angle, EulerAngles, EulerOrder};
///
/// let e = EulerAngles::new(
///     Angle::from_degrees(10.0),
///     Angle::from_degrees(20.0),
///     Angle::from_degrees(30.0),
///     EulerOrder::Xyz,
/// );
/// assert_eq!(e.order, EulerOrder::Xyz);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngles {
    /// The rotation angle about the x axis.
    pub x: Angle,
    /// The rotation angle about the y axis.
    pub y: Angle,
    /// The rotation angle about the z axis.
    pub z: Angle,
    /// The ordering that interprets the three angles.
    pub order: EulerOrder,
}

impl EulerAngles {
    /// Creates a new set of Euler angles.
    #[inline]
    pub const fn new(x: Angle, y: Angle, z: Angle, order: EulerOrder) -> Self {
        Self { x, y, z, order }
    }

    /// Returns `true` if all three angles are within the default
    /// tolerance of the other's, component-wise, and the orders match.
    pub fn almost_equal(&self, other: &Self) -> bool {
        self.order == other.order
            && self.x.almost_equal(other.x)
            && self.y.almost_equal(other.y)
            && self.z.almost_equal(other.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_almost_equal_requires_matching_order() {
        let a = EulerAngles::new(Angle::ZERO, Angle::ZERO, Angle::ZERO, EulerOrder::Xyz);
        let b = EulerAngles::new(Angle::ZERO, Angle::ZERO, Angle::ZERO, EulerOrder::Zxy);
        assert!(a.almost_equal(&a));
        assert!(!a.almost_equal(&b));
    }

    #[test]
    fn test_component_tolerance() {
        let a = EulerAngles::new(
            Angle::from_radians(0.1),
            Angle::from_radians(0.2),
            Angle::from_radians(0.3),
            EulerOrder::Zxy,
        );
        let b = EulerAngles::new(
            Angle::from_radians(0.1 + 1e-12),
            Angle::from_radians(0.2),
            Angle::from_radians(0.3),
            EulerOrder::Zxy,
        );
        assert!(a.almost_equal(&b));
    }
}
