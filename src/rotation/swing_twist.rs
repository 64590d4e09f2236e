//! Swing–twist decomposition.
//!
//! Splits a rotation into a *twist* about a chosen axis and the
//! remaining *swing*, with `swing * twist ≈ self`. The twist is the
//! projection of the quaternion's imaginary part onto the axis, paired
//! with the original real part and renormalized; the swing is whatever
//! is left after multiplying the twist's conjugate back out.

use crate::rotation::quaternion::Quaternion;
use crate::rotation::rotation3d::Rotation3D;
use crate::RotationAxis3D;

impl Rotation3D {
    /// Extracts the rotation about `twist_axis` contained in this
    /// rotation.
    ///
    /// The axis is normalized before projecting, so the stretched axis
    /// constants ([`RotationAxis3D::XY`] and friends) behave the same as
    /// their unit counterparts. When the rotation is fully perpendicular
    /// to the axis — projection and real part both vanish, as with a
    /// half turn about an orthogonal axis — the twist degenerates and
    /// the identity is returned; the swing then carries the entire
    /// rotation.
    ///
    /// ```
    /// use spatial_core::{Angle, Rotation3D, RotationAxis3D};
    ///
    /// let r = Rotation3D::from_angle_axis(Angle::from_degrees(70.0), RotationAxis3D::Z);
    /// assert!(r.twist(RotationAxis3D::Z).almost_equal(&r));
    /// assert!(r.twist(RotationAxis3D::X).almost_equal(&Rotation3D::IDENTITY));
    /// ```
    pub fn twist(&self, twist_axis: RotationAxis3D) -> Self {
        let q = self.quaternion();
        let axis = twist_axis.to_vector().normalized();
        let projected = axis * q.imag().dot(&axis);
        let raw = Quaternion::new(projected.x, projected.y, projected.z, q.w);
        if raw.norm_squared() < f64::EPSILON {
            return Self::IDENTITY;
        }
        Self::from_quaternion(raw.normalized())
    }

    /// Returns the rotation left over after removing the twist about
    /// `twist_axis`.
    pub fn swing(&self, twist_axis: RotationAxis3D) -> Self {
        let twist = self.twist(twist_axis);
        Self::from_quaternion(self.quaternion() * twist.quaternion().conjugate())
    }

    /// Decomposes into `(swing, twist)` about `twist_axis`.
    ///
    /// The pair recomposes as `swing * twist ≈ self`.
    pub fn swing_twist(&self, twist_axis: RotationAxis3D) -> (Self, Self) {
        let twist = self.twist(twist_axis);
        let swing = Self::from_quaternion(self.quaternion() * twist.quaternion().conjugate());
        (swing, twist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Angle, EulerAngles, EulerOrder};

    fn sample_rotation() -> Rotation3D {
        Rotation3D::from_euler(EulerAngles::new(
            Angle::from_degrees(25.0),
            Angle::from_degrees(-40.0),
            Angle::from_degrees(65.0),
            EulerOrder::Xyz,
        ))
    }

    #[test]
    fn test_twist_of_aligned_rotation_is_whole() {
        let r = Rotation3D::from_angle_axis(Angle::from_degrees(50.0), RotationAxis3D::Z);
        let (swing, twist) = r.swing_twist(RotationAxis3D::Z);
        assert!(twist.almost_equal(&r));
        assert!(swing.almost_equal(&Rotation3D::IDENTITY));
    }

    #[test]
    fn test_twist_of_perpendicular_rotation_is_identity() {
        let r = Rotation3D::from_angle_axis(Angle::from_degrees(50.0), RotationAxis3D::Z);
        let (swing, twist) = r.swing_twist(RotationAxis3D::X);
        assert!(twist.almost_equal(&Rotation3D::IDENTITY));
        assert!(swing.almost_equal(&r));
    }

    #[test]
    fn test_reconstruction() {
        let r = sample_rotation();
        for axis in [
            RotationAxis3D::X,
            RotationAxis3D::Y,
            RotationAxis3D::Z,
            RotationAxis3D::XY,
        ] {
            let (swing, twist) = r.swing_twist(axis);
            assert!(
                (swing * twist).almost_equal(&r),
                "reconstruction failed about {:?}",
                axis
            );
        }
    }

    #[test]
    fn test_twist_lies_on_the_axis() {
        let twist = sample_rotation().twist(RotationAxis3D::Y);
        let alignment = twist.axis().to_vector().dot(&crate::Vector3D::Y);
        assert!(libm::fabs(libm::fabs(alignment) - 1.0) < 1e-12);
    }

    #[test]
    fn test_degenerate_twist_yields_identity() {
        // A half turn about x is fully perpendicular to z: projection
        // and real part are both zero.
        let r = Rotation3D::from_angle_axis(Angle::PI, RotationAxis3D::X);
        let (swing, twist) = r.swing_twist(RotationAxis3D::Z);
        assert!(twist.is_identity());
        assert!(swing.almost_equal(&r));
        assert!((swing * twist).almost_equal(&r));
    }

    #[test]
    fn test_stretched_axis_matches_unit_axis() {
        let r = sample_rotation();
        let unit = RotationAxis3D::from_vector(RotationAxis3D::XY.to_vector().normalized());
        assert!(r.twist(RotationAxis3D::XY).almost_equal(&r.twist(unit)));
    }

    #[test]
    fn test_swing_and_twist_are_valid() {
        let (swing, twist) = sample_rotation().swing_twist(RotationAxis3D::XZ);
        assert!(swing.is_valid());
        assert!(twist.is_valid());
    }
}
