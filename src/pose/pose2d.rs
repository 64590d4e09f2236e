//! Planar pose: position plus a rotation angle.

use crate::{Angle, Point2D, Vector2D};
use std::fmt;

/// A 2D position and heading.
///
/// The planar counterpart of [`Pose3D`](crate::Pose3D), with an
/// [`Angle`] standing in for the quaternion. The same composition
/// algebra applies: positions add unrotated and angles add, which in
/// two dimensions happens to make composition commutative. Application
/// translates first, then rotates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose2D {
    pub position: Point2D,
    pub angle: Angle,
}

impl Pose2D {
    /// The identity pose: zero position, zero angle.
    pub const IDENTITY: Self = Self {
        position: Point2D::ZERO,
        angle: Angle::ZERO,
    };

    /// Creates a pose from a position and an angle.
    #[inline]
    pub const fn new(position: Point2D, angle: Angle) -> Self {
        Self { position, angle }
    }

    /// Creates a translation-only pose.
    #[inline]
    pub const fn from_position(position: Point2D) -> Self {
        Self::new(position, Angle::ZERO)
    }

    /// Creates a rotation-only pose.
    #[inline]
    pub const fn from_angle(angle: Angle) -> Self {
        Self::new(Point2D::ZERO, angle)
    }

    /// Returns `true` if position and angle are both exactly zero.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.position == Point2D::ZERO && self.angle == Angle::ZERO
    }

    /// Returns `true` if every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.angle.is_finite()
    }

    /// Returns `true` if the two poses agree within the default
    /// tolerance.
    #[inline]
    pub fn almost_equal(&self, other: &Self) -> bool {
        self.position.almost_equal(&other.position) && self.angle.almost_equal(other.angle)
    }

    /// Inverts the pose in place: negated position, negated angle.
    pub fn invert(&mut self) {
        self.position = -self.position;
        self.angle = -self.angle;
    }

    /// Returns the inverse pose.
    pub fn inverse(&self) -> Self {
        let mut out = *self;
        out.invert();
        out
    }

    /// Applies the pose to a point: translate by the position, then
    /// rotate about the origin.
    pub fn apply_to_point(&self, point: Point2D) -> Point2D {
        (point.to_vector() + self.position.to_vector())
            .rotated_by(self.angle)
            .to_point()
    }

    /// Applies the pose to a vector through the same pipeline.
    pub fn apply_to_vector(&self, vector: Vector2D) -> Vector2D {
        (vector + self.position.to_vector()).rotated_by(self.angle)
    }
}

/// Pose * Pose (positions and angles add)
impl std::ops::Mul for Pose2D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.position + rhs.position.to_vector(), self.angle + rhs.angle)
    }
}

/// Pose *= Pose
impl std::ops::MulAssign for Pose2D {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Pose2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pose2D({}, {})", self.position, self.angle)
    }
}
