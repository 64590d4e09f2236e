//! Scaled pose: position, rotation, and a uniform scale.

use crate::errors::{SpatialError, SpatialResult};
use crate::math;
use crate::pose::pose3d::Pose3D;
use crate::rotation::{Axis3D, Rotation3D};
use crate::{Point3D, Quaternion, Size3D, Vector3D};
use std::fmt;

/// A [`Pose3D`] extended with a uniform scale factor.
///
/// Follows the same composition algebra as `Pose3D` — positions add
/// unrotated, rotations multiply — with scales multiplying alongside.
/// Application appends a scale step to the translate-then-rotate
/// pipeline. Inversion reciprocates the scale, so a zero scale inverts
/// to an infinite one; the inverse-of-inverse round trip holds for any
/// nonzero scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaledPose3D {
    pub position: Point3D,
    pub rotation: Rotation3D,
    pub scale: f64,
}

impl ScaledPose3D {
    /// The identity: zero position, identity rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Point3D::ZERO,
        rotation: Rotation3D::IDENTITY,
        scale: 1.0,
    };

    /// Creates a scaled pose from its three parts.
    #[inline]
    pub const fn new(position: Point3D, rotation: Rotation3D, scale: f64) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Embeds a rigid pose with unit scale.
    #[inline]
    pub const fn from_pose(pose: Pose3D) -> Self {
        Self::new(pose.position, pose.rotation, 1.0)
    }

    /// Returns the rigid part, discarding the scale.
    #[inline]
    pub fn pose(&self) -> Pose3D {
        Pose3D::new(self.position, self.rotation)
    }

    /// Decomposes a column-major 4x4 affine matrix into position,
    /// rotation, and uniform scale.
    ///
    /// The three linear-block column norms must agree (that common norm
    /// becomes the scale), and the block divided by the scale must be a
    /// proper rotation: orthogonal columns with determinant +1. The
    /// translation is read from the fourth column. Matrices that embed
    /// shear, non-uniform scale, or a reflection are rejected.
    pub fn from_matrix(columns: [[f64; 4]; 4]) -> SpatialResult<Self> {
        for col in &columns {
            for &entry in col {
                if !entry.is_finite() {
                    return Err(SpatialError::not_finite(
                        "ScaledPose3D::from_matrix",
                        "matrix entries must be finite",
                    ));
                }
            }
        }

        let basis = [
            Vector3D::new(columns[0][0], columns[0][1], columns[0][2]),
            Vector3D::new(columns[1][0], columns[1][1], columns[1][2]),
            Vector3D::new(columns[2][0], columns[2][1], columns[2][2]),
        ];
        let norms = [
            basis[0].magnitude(),
            basis[1].magnitude(),
            basis[2].magnitude(),
        ];
        if !math::almost_equal(norms[0], norms[1]) || !math::almost_equal(norms[0], norms[2]) {
            return Err(SpatialError::non_uniform_scale(
                "ScaledPose3D::from_matrix",
                &format!(
                    "column norms {:.6}, {:.6}, {:.6} disagree",
                    norms[0], norms[1], norms[2]
                ),
            ));
        }

        let scale = (norms[0] + norms[1] + norms[2]) / 3.0;
        debug_assert!(scale.is_normal(), "matrix scale must be normal, got {}", scale);
        let unit = [basis[0] / scale, basis[1] / scale, basis[2] / scale];

        if !math::almost_equal(unit[0].dot(&unit[1]), 0.0)
            || !math::almost_equal(unit[0].dot(&unit[2]), 0.0)
            || !math::almost_equal(unit[1].dot(&unit[2]), 0.0)
        {
            return Err(SpatialError::not_a_rotation(
                "ScaledPose3D::from_matrix",
                "normalized columns are not orthogonal",
            ));
        }
        let det = unit[0].dot(&unit[1].cross(&unit[2]));
        if !math::almost_equal(det, 1.0) {
            return Err(SpatialError::not_a_rotation(
                "ScaledPose3D::from_matrix",
                &format!("determinant {:.6} is not +1", det),
            ));
        }

        let q = Quaternion::from_rotation_matrix_columns([
            unit[0].to_array(),
            unit[1].to_array(),
            unit[2].to_array(),
        ]);
        Ok(Self::new(
            Point3D::new(columns[3][0], columns[3][1], columns[3][2]),
            Rotation3D::from_quaternion(q.normalized()),
            scale,
        ))
    }

    /// Returns `true` if all three parts are exactly the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.position == Point3D::ZERO && self.rotation.is_identity() && self.scale == 1.0
    }

    /// Returns `true` if every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }

    /// Returns `true` if the two poses agree within the default
    /// tolerance.
    #[inline]
    pub fn almost_equal(&self, other: &Self) -> bool {
        self.position.almost_equal(&other.position)
            && self.rotation.almost_equal(&other.rotation)
            && math::almost_equal(self.scale, other.scale)
    }

    /// Inverts in place: negated position, inverted rotation,
    /// reciprocal scale.
    pub fn invert(&mut self) {
        self.position = -self.position;
        self.rotation.invert();
        self.scale = 1.0 / self.scale;
    }

    /// Returns the inverse.
    pub fn inverse(&self) -> Self {
        let mut out = *self;
        out.invert();
        out
    }

    /// Applies the pose to a point: translate, rotate, then scale.
    pub fn apply_to_point(&self, point: Point3D) -> Point3D {
        let translated = point.to_vector() + self.position.to_vector();
        (self.rotation.quaternion().rotate_vector(translated) * self.scale).to_point()
    }

    /// Applies the pose to a vector through the same three-step
    /// pipeline.
    pub fn apply_to_vector(&self, vector: Vector3D) -> Vector3D {
        let translated = vector + self.position.to_vector();
        self.rotation.quaternion().rotate_vector(translated) * self.scale
    }

    /// Applies the pose to a size, treating its extents as a vector.
    pub fn apply_to_size(&self, size: Size3D) -> Size3D {
        Size3D::from_vector(self.apply_to_vector(size.to_vector()))
    }

    /// Mirrors the pose along one coordinate axis, in place.
    ///
    /// Same reflection as [`Pose3D::flip`]; the scale is untouched.
    pub fn flip(&mut self, along: Axis3D) {
        let mut rigid = self.pose();
        rigid.flip(along);
        self.position = rigid.position;
        self.rotation = rigid.rotation;
    }

    /// Returns the pose mirrored along one coordinate axis.
    pub fn flipped(&self, along: Axis3D) -> Self {
        let mut out = *self;
        out.flip(along);
        out
    }
}

impl Default for ScaledPose3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Pose3D> for ScaledPose3D {
    fn from(pose: Pose3D) -> Self {
        Self::from_pose(pose)
    }
}

/// ScaledPose * ScaledPose (positions add unrotated; rotations and scales multiply)
impl std::ops::Mul for ScaledPose3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.position + rhs.position.to_vector(),
            self.rotation * rhs.rotation,
            self.scale * rhs.scale,
        )
    }
}

/// ScaledPose *= ScaledPose
impl std::ops::MulAssign for ScaledPose3D {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl fmt::Display for ScaledPose3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScaledPose3D({}, {}, scale: {:.9})",
            self.position, self.rotation, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Angle, RotationAxis3D};

    fn quarter_z() -> Rotation3D {
        Rotation3D::from_angle_axis(Angle::HALF_PI, RotationAxis3D::Z)
    }

    fn matrix_for(position: Point3D, rotation: &Rotation3D, scale: f64) -> [[f64; 4]; 4] {
        let q = rotation.quaternion();
        let cx = q.rotate_vector(Vector3D::X) * scale;
        let cy = q.rotate_vector(Vector3D::Y) * scale;
        let cz = q.rotate_vector(Vector3D::Z) * scale;
        [
            [cx.x, cx.y, cx.z, 0.0],
            [cy.x, cy.y, cy.z, 0.0],
            [cz.x, cz.y, cz.z, 0.0],
            [position.x, position.y, position.z, 1.0],
        ]
    }

    #[test]
    fn test_identity() {
        assert!(ScaledPose3D::IDENTITY.is_identity());
        assert_eq!(ScaledPose3D::default(), ScaledPose3D::IDENTITY);
        assert_eq!(ScaledPose3D::IDENTITY.scale, 1.0);
    }

    #[test]
    fn test_pose_round_trip() {
        let rigid = Pose3D::new(Point3D::new(1.0, 2.0, 3.0), quarter_z());
        let scaled = ScaledPose3D::from(rigid);
        assert_eq!(scaled.scale, 1.0);
        assert_eq!(scaled.pose(), rigid);
    }

    #[test]
    fn test_composition_multiplies_scales() {
        let a = ScaledPose3D::new(Point3D::new(1.0, 0.0, 0.0), quarter_z(), 2.0);
        let b = ScaledPose3D::new(Point3D::new(0.0, 1.0, 0.0), Rotation3D::IDENTITY, 3.0);
        let c = a * b;
        assert_eq!(c.position, Point3D::new(1.0, 1.0, 0.0));
        assert_eq!(c.scale, 6.0);
        assert!(c.rotation.almost_equal(&quarter_z()));

        let mut assigned = a;
        assigned *= b;
        assert_eq!(assigned, c);
    }

    #[test]
    fn test_inverse_round_trip() {
        let pose = ScaledPose3D::new(Point3D::new(3.0, -1.0, 2.0), quarter_z(), 0.5);
        assert!(pose.inverse().inverse().almost_equal(&pose));
        assert!((pose * pose.inverse()).almost_equal(&ScaledPose3D::IDENTITY));
        assert!((pose.inverse() * pose).almost_equal(&ScaledPose3D::IDENTITY));
    }

    #[test]
    fn test_inverse_reciprocates_scale() {
        let pose = ScaledPose3D::new(Point3D::ZERO, Rotation3D::IDENTITY, 4.0);
        assert_eq!(pose.inverse().scale, 0.25);
    }

    #[test]
    fn test_apply_translate_rotate_scale() {
        let pose = ScaledPose3D::new(Point3D::new(1.0, 0.0, 0.0), quarter_z(), 2.0);
        let moved = pose.apply_to_point(Point3D::new(1.0, 0.0, 0.0));
        // Translate: (2,0,0); quarter turn about z: (0,2,0); scale: (0,4,0).
        assert!(moved.almost_equal(&Point3D::new(0.0, 4.0, 0.0)));

        let v = pose.apply_to_vector(Vector3D::new(1.0, 0.0, 0.0));
        assert!(v.almost_equal(&Vector3D::new(0.0, 4.0, 0.0)));
    }

    #[test]
    fn test_apply_to_size_scales_extents() {
        let pose = ScaledPose3D::new(Point3D::ZERO, Rotation3D::IDENTITY, 3.0);
        let s = pose.apply_to_size(Size3D::new(1.0, 2.0, 3.0));
        assert!(s.almost_equal(&Size3D::new(3.0, 6.0, 9.0)));
    }

    #[test]
    fn test_flip_keeps_scale() {
        let pose = ScaledPose3D::new(Point3D::new(1.0, 2.0, 3.0), quarter_z(), 2.5);
        let flipped = pose.flipped(Axis3D::Y);
        assert_eq!(flipped.scale, 2.5);
        assert_eq!(flipped.position, Point3D::new(1.0, -2.0, 3.0));
        assert_eq!(flipped.flipped(Axis3D::Y), pose);
    }

    #[test]
    fn test_from_matrix_uniform_scale() {
        let rotation = quarter_z();
        let columns = matrix_for(Point3D::new(1.0, 2.0, 3.0), &rotation, 2.0);
        let pose = ScaledPose3D::from_matrix(columns).unwrap();
        assert!(pose.position.almost_equal(&Point3D::new(1.0, 2.0, 3.0)));
        assert!(pose.rotation.almost_equal(&rotation));
        assert!(math::almost_equal(pose.scale, 2.0));
    }

    #[test]
    fn test_from_matrix_identity() {
        let identity = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let pose = ScaledPose3D::from_matrix(identity).unwrap();
        assert!(pose.is_identity());
    }

    #[test]
    fn test_from_matrix_rejects_non_uniform_scale() {
        let columns = [
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let err = ScaledPose3D::from_matrix(columns).unwrap_err();
        assert!(matches!(err, SpatialError::NonUniformScale { .. }));
    }

    #[test]
    fn test_from_matrix_rejects_shear() {
        let s = libm::sqrt(0.5);
        let columns = [
            [1.0, 0.0, 0.0, 0.0],
            [s, s, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let err = ScaledPose3D::from_matrix(columns).unwrap_err();
        assert!(matches!(err, SpatialError::NotARotation { .. }));
    }

    #[test]
    fn test_from_matrix_rejects_reflection() {
        let columns = [
            [-1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let err = ScaledPose3D::from_matrix(columns).unwrap_err();
        assert!(matches!(err, SpatialError::NotARotation { .. }));
    }

    #[test]
    fn test_from_matrix_rejects_non_finite() {
        let columns = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, f64::NAN, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let err = ScaledPose3D::from_matrix(columns).unwrap_err();
        assert!(matches!(err, SpatialError::NotFinite { .. }));
    }

    #[test]
    fn test_display() {
        let s = format!("{}", ScaledPose3D::IDENTITY);
        assert!(s.starts_with("ScaledPose3D("));
        assert!(s.contains("scale: 1.000000000"));
    }
}
