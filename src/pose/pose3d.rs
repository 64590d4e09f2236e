//! Rigid pose: position plus rotation.
//!
//! # Composition and Application Rules
//!
//! [`Pose3D`] composes and applies with deliberately simple rules that
//! differ from conventional rigid-transform algebra:
//!
//! - `lhs * rhs` adds positions component-wise — the right-hand position
//!   is *not* rotated by the left-hand rotation first — and multiplies
//!   the rotations.
//! - Applying a pose to a primitive translates it first, then rotates.
//!
//! Both rules are kept for parity with the framework this library
//! models and are pinned by tests. Under them, inversion (negated
//! position, inverted rotation) is still a two-sided inverse for `*`.
//!
//! ```
//! use spatial_core::{Angle, Point3D, Pose3D, Rotation3D, RotationAxis3D};
//!
//! let half_turn = Rotation3D::from_angle_axis(Angle::PI, RotationAxis3D::Z);
//! let a = Pose3D::from_rotation(half_turn);
//! let b = Pose3D::from_position(Point3D::new(1.0, 2.0, 0.0));
//! let c = a * b;
//! // The position passes through unrotated.
//! assert_eq!(c.position, Point3D::new(1.0, 2.0, 0.0));
//! ```

use crate::errors::{SpatialError, SpatialResult};
use crate::math;
use crate::pose::scaled_pose3d::ScaledPose3D;
use crate::rotation::{Axis3D, Rotation3D};
use crate::{Point3D, Quaternion, Size3D, Vector3D};
use std::fmt;

/// A position and a rotation; a rigid transform under the composition
/// rules described in the [module docs](self).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose3D {
    pub position: Point3D,
    pub rotation: Rotation3D,
}

impl Pose3D {
    /// The identity pose: zero position, identity rotation.
    pub const IDENTITY: Self = Self {
        position: Point3D::ZERO,
        rotation: Rotation3D::IDENTITY,
    };

    /// Creates a pose from a position and a rotation.
    #[inline]
    pub const fn new(position: Point3D, rotation: Rotation3D) -> Self {
        Self { position, rotation }
    }

    /// Creates a translation-only pose.
    #[inline]
    pub const fn from_position(position: Point3D) -> Self {
        Self::new(position, Rotation3D::IDENTITY)
    }

    /// Creates a rotation-only pose.
    #[inline]
    pub const fn from_rotation(rotation: Rotation3D) -> Self {
        Self::new(Point3D::ZERO, rotation)
    }

    /// Decomposes a column-major 4x4 affine matrix into a rigid pose.
    ///
    /// The linear block must be a pure rotation: orthogonal columns,
    /// determinant +1, and unit scale. A matrix with a uniform scale
    /// other than one decomposes through
    /// [`ScaledPose3D::from_matrix`] instead.
    pub fn from_matrix(columns: [[f64; 4]; 4]) -> SpatialResult<Self> {
        let scaled = ScaledPose3D::from_matrix(columns)?;
        if !math::almost_equal(scaled.scale, 1.0) {
            return Err(SpatialError::not_a_rotation(
                "Pose3D::from_matrix",
                &format!("linear block carries a uniform scale of {:.6}", scaled.scale),
            ));
        }
        Ok(Self::new(scaled.position, scaled.rotation))
    }

    /// Returns `true` if position and rotation are both exactly the
    /// identity.
    ///
    /// Bitwise, like [`Rotation3D::is_identity`]; use
    /// [`almost_equal`](Self::almost_equal) against
    /// [`IDENTITY`](Self::IDENTITY) for the tolerant comparison.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.position == Point3D::ZERO && self.rotation.is_identity()
    }

    /// Returns `true` if every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite()
    }

    /// Returns `true` if the two poses agree within the default
    /// tolerance.
    #[inline]
    pub fn almost_equal(&self, other: &Self) -> bool {
        self.position.almost_equal(&other.position) && self.rotation.almost_equal(&other.rotation)
    }

    /// Inverts the pose in place: negated position, inverted rotation.
    pub fn invert(&mut self) {
        self.position = -self.position;
        self.rotation.invert();
    }

    /// Returns the inverse pose.
    pub fn inverse(&self) -> Self {
        let mut out = *self;
        out.invert();
        out
    }

    /// Applies the pose to a point: translate by the position, then
    /// rotate.
    pub fn apply_to_point(&self, point: Point3D) -> Point3D {
        let translated = point.to_vector() + self.position.to_vector();
        self.rotation.quaternion().rotate_vector(translated).to_point()
    }

    /// Applies the pose to a vector.
    ///
    /// Vectors go through the same translate-then-rotate pipeline as
    /// points; the translation is not skipped.
    pub fn apply_to_vector(&self, vector: Vector3D) -> Vector3D {
        let translated = vector + self.position.to_vector();
        self.rotation.quaternion().rotate_vector(translated)
    }

    /// Applies the pose to a size, treating its extents as a vector.
    pub fn apply_to_size(&self, size: Size3D) -> Size3D {
        Size3D::from_vector(self.apply_to_vector(size.to_vector()))
    }

    /// Mirrors the pose along one coordinate axis, in place.
    ///
    /// Negates the position component on that axis and conjugates the
    /// quaternion through the axis's diagonal reflection, which negates
    /// the two imaginary components off the axis. This models a mirror
    /// only for the position and the rotation axis, not a full
    /// reflection of the transform; it is kept in this limited form for
    /// parity. Applying the same flip twice restores the pose.
    pub fn flip(&mut self, along: Axis3D) {
        let q = self.rotation.quaternion();
        let flipped = match along {
            Axis3D::X => {
                self.position.x = -self.position.x;
                Quaternion::new(q.x, -q.y, -q.z, q.w)
            }
            Axis3D::Y => {
                self.position.y = -self.position.y;
                Quaternion::new(-q.x, q.y, -q.z, q.w)
            }
            Axis3D::Z => {
                self.position.z = -self.position.z;
                Quaternion::new(-q.x, -q.y, q.z, q.w)
            }
        };
        self.rotation = Rotation3D::from_quaternion(flipped);
    }

    /// Returns the pose mirrored along one coordinate axis.
    pub fn flipped(&self, along: Axis3D) -> Self {
        let mut out = *self;
        out.flip(along);
        out
    }
}

/// Pose * Pose (positions add unrotated; rotations multiply)
impl std::ops::Mul for Pose3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.position + rhs.position.to_vector(),
            self.rotation * rhs.rotation,
        )
    }
}

/// Pose *= Pose
impl std::ops::MulAssign for Pose3D {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Pose3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pose3D({}, {})", self.position, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Angle, RotationAxis3D};

    fn quarter_z() -> Rotation3D {
        Rotation3D::from_angle_axis(Angle::HALF_PI, RotationAxis3D::Z)
    }

    #[test]
    fn test_identity() {
        assert!(Pose3D::IDENTITY.is_identity());
        assert_eq!(Pose3D::default(), Pose3D::IDENTITY);
        assert!(Pose3D::IDENTITY.is_finite());
    }

    #[test]
    fn test_convenience_constructors() {
        let p = Pose3D::from_position(Point3D::new(1.0, 2.0, 3.0));
        assert!(p.rotation.is_identity());
        let r = Pose3D::from_rotation(quarter_z());
        assert_eq!(r.position, Point3D::ZERO);
    }

    #[test]
    fn test_composition_adds_positions_unrotated() {
        let half_turn = Rotation3D::from_angle_axis(Angle::PI, RotationAxis3D::Z);
        let lhs = Pose3D::from_rotation(half_turn);
        let rhs = Pose3D::from_position(Point3D::new(1.0, 2.0, 0.0));
        let composed = lhs * rhs;
        // Conventional rigid composition would rotate (1,2,0) by the
        // half turn into (-1,-2,0); this algebra does not.
        assert_eq!(composed.position, Point3D::new(1.0, 2.0, 0.0));
        assert!(composed.rotation.almost_equal(&half_turn));
    }

    #[test]
    fn test_composition_multiplies_rotations() {
        let a = Pose3D::new(Point3D::new(1.0, 0.0, 0.0), quarter_z());
        let b = Pose3D::new(Point3D::new(0.0, 1.0, 0.0), quarter_z());
        let c = a * b;
        assert_eq!(c.position, Point3D::new(1.0, 1.0, 0.0));
        let half_turn = Rotation3D::from_angle_axis(Angle::PI, RotationAxis3D::Z);
        assert!(c.rotation.almost_equal(&half_turn));

        let mut assigned = a;
        assigned *= b;
        assert_eq!(assigned, c);
    }

    #[test]
    fn test_inverse_is_two_sided() {
        let pose = Pose3D::new(Point3D::new(3.0, -1.0, 2.0), quarter_z());
        let inv = pose.inverse();
        assert!((pose * inv).almost_equal(&Pose3D::IDENTITY));
        assert!((inv * pose).almost_equal(&Pose3D::IDENTITY));
        assert!(pose.inverse().inverse().almost_equal(&pose));
    }

    #[test]
    fn test_invert_in_place() {
        let mut pose = Pose3D::new(Point3D::new(1.0, 2.0, 3.0), quarter_z());
        pose.invert();
        assert_eq!(pose.position, Point3D::new(-1.0, -2.0, -3.0));
        assert!(pose.rotation.almost_equal(&quarter_z().inverse()));
    }

    #[test]
    fn test_apply_translates_then_rotates() {
        let pose = Pose3D::new(Point3D::new(1.0, 0.0, 0.0), quarter_z());
        let moved = pose.apply_to_point(Point3D::new(1.0, 0.0, 0.0));
        // Translate first: (2,0,0); then the quarter turn about z
        // carries it to (0,2,0). Rotate-then-translate would have
        // produced (1,1,0).
        assert!(moved.almost_equal(&Point3D::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_apply_to_vector_also_translates() {
        let pose = Pose3D::new(Point3D::new(0.0, 0.0, 1.0), quarter_z());
        let v = pose.apply_to_vector(Vector3D::new(1.0, 0.0, 0.0));
        assert!(v.almost_equal(&Vector3D::new(0.0, 1.0, 1.0)));
    }

    #[test]
    fn test_apply_to_size() {
        let pose = Pose3D::from_rotation(quarter_z());
        let s = pose.apply_to_size(Size3D::new(1.0, 0.0, 2.0));
        // (1,0,2) under a quarter turn about z becomes (0,1,2).
        assert!(s.almost_equal(&Size3D::new(0.0, 1.0, 2.0)));
    }

    #[test]
    fn test_identity_apply_is_noop() {
        let p = Point3D::new(4.0, 5.0, 6.0);
        assert!(Pose3D::IDENTITY.apply_to_point(p).almost_equal(&p));
    }

    #[test]
    fn test_flip_is_involution() {
        let pose = Pose3D::new(
            Point3D::new(1.0, -2.0, 3.0),
            Rotation3D::from_angle_axis(Angle::from_degrees(40.0), RotationAxis3D::XYZ),
        );
        for axis in [Axis3D::X, Axis3D::Y, Axis3D::Z] {
            let twice = pose.flipped(axis).flipped(axis);
            assert_eq!(twice, pose, "flip along {:?} is not an involution", axis);
        }
    }

    #[test]
    fn test_flip_x_negates_position_and_off_axis_imaginaries() {
        let quarter_y = Rotation3D::from_angle_axis(Angle::HALF_PI, RotationAxis3D::Y);
        let pose = Pose3D::new(Point3D::new(1.0, 2.0, 3.0), quarter_y);
        let flipped = pose.flipped(Axis3D::X);
        assert_eq!(flipped.position, Point3D::new(-1.0, 2.0, 3.0));
        // The y-axis quarter turn reverses its winding.
        assert!(flipped.rotation.almost_equal(&quarter_y.inverse()));
    }

    #[test]
    fn test_from_matrix_round_trip() {
        let rotation = quarter_z();
        let q = rotation.quaternion();
        let cx = q.rotate_vector(Vector3D::X);
        let cy = q.rotate_vector(Vector3D::Y);
        let cz = q.rotate_vector(Vector3D::Z);
        let columns = [
            [cx.x, cx.y, cx.z, 0.0],
            [cy.x, cy.y, cy.z, 0.0],
            [cz.x, cz.y, cz.z, 0.0],
            [7.0, -8.0, 9.0, 1.0],
        ];
        let pose = Pose3D::from_matrix(columns).unwrap();
        assert!(pose.position.almost_equal(&Point3D::new(7.0, -8.0, 9.0)));
        assert!(pose.rotation.almost_equal(&rotation));
    }

    #[test]
    fn test_from_matrix_rejects_scale() {
        let columns = [
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let err = Pose3D::from_matrix(columns).unwrap_err();
        assert!(matches!(err, SpatialError::NotARotation { .. }));
    }

    #[test]
    fn test_display() {
        let s = format!("{}", Pose3D::IDENTITY);
        assert!(s.starts_with("Pose3D("));
        assert!(s.contains("Point3D("));
        assert!(s.contains("Rotation3D("));
    }
}
