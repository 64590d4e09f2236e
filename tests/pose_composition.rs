use spatial_core::{
    Angle, Axis3D, Point2D, Point3D, Pose2D, Pose3D, Rotation3D, RotationAxis3D, ScaledPose3D,
    Size3D, SpatialError, Vector3D,
};

fn half_turn_z() -> Rotation3D {
    Rotation3D::from_angle_axis(Angle::PI, RotationAxis3D::Z)
}

fn quarter_turn_z() -> Rotation3D {
    Rotation3D::from_angle_axis(Angle::HALF_PI, RotationAxis3D::Z)
}

fn sample_poses() -> Vec<Pose3D> {
    vec![
        Pose3D::IDENTITY,
        Pose3D::from_position(Point3D::new(1.0, -2.0, 3.0)),
        Pose3D::from_rotation(quarter_turn_z()),
        Pose3D::new(
            Point3D::new(-4.0, 0.5, 2.0),
            Rotation3D::from_angle_axis(Angle::from_degrees(33.0), RotationAxis3D::XY),
        ),
    ]
}

// Columns of the affine matrix a scaled pose denotes, for the
// constructor round trips.
fn matrix_for(pose: &ScaledPose3D) -> [[f64; 4]; 4] {
    let q = pose.rotation.quaternion();
    let cx = q.rotate_vector(Vector3D::X) * pose.scale;
    let cy = q.rotate_vector(Vector3D::Y) * pose.scale;
    let cz = q.rotate_vector(Vector3D::Z) * pose.scale;
    [
        [cx.x, cx.y, cx.z, 0.0],
        [cy.x, cy.y, cy.z, 0.0],
        [cz.x, cz.y, cz.z, 0.0],
        [pose.position.x, pose.position.y, pose.position.z, 1.0],
    ]
}

// --- Composition rule ---

#[test]
fn composition_keeps_right_hand_position_unrotated() {
    // The half turn would carry (1,2,0) to (-1,-2,0) if composition
    // rotated the right-hand position; it must not.
    let lhs = Pose3D::new(Point3D::ZERO, half_turn_z());
    let rhs = Pose3D::new(Point3D::new(1.0, 2.0, 0.0), Rotation3D::IDENTITY);
    let composed = lhs * rhs;
    assert_eq!(composed.position, Point3D::new(1.0, 2.0, 0.0));
    assert!(composed.rotation.almost_equal(&half_turn_z()));
}

#[test]
fn composition_position_is_commutative() {
    let a = Pose3D::new(Point3D::new(1.0, 2.0, 3.0), quarter_turn_z());
    let b = Pose3D::new(Point3D::new(-5.0, 1.0, 0.5), half_turn_z());
    assert_eq!((a * b).position, (b * a).position);
}

#[test]
fn composition_rotation_follows_quaternion_product() {
    let a = Pose3D::from_rotation(quarter_turn_z());
    let b = Pose3D::from_rotation(
        Rotation3D::from_angle_axis(Angle::HALF_PI, RotationAxis3D::X),
    );
    let composed = a * b;
    assert!(composed
        .rotation
        .almost_equal(&(quarter_turn_z() * Rotation3D::from_angle_axis(Angle::HALF_PI, RotationAxis3D::X))));
}

#[test]
fn scaled_composition_multiplies_scales() {
    let a = ScaledPose3D::new(Point3D::new(1.0, 0.0, 0.0), quarter_turn_z(), 2.0);
    let b = ScaledPose3D::new(Point3D::new(2.0, 0.0, 0.0), Rotation3D::IDENTITY, 0.5);
    let c = a * b;
    assert_eq!(c.position, Point3D::new(3.0, 0.0, 0.0));
    assert_eq!(c.scale, 1.0);
}

// --- Inverses ---

#[test]
fn pose_inverse_is_two_sided() {
    for pose in sample_poses() {
        assert!((pose * pose.inverse()).almost_equal(&Pose3D::IDENTITY), "failed for {}", pose);
        assert!((pose.inverse() * pose).almost_equal(&Pose3D::IDENTITY), "failed for {}", pose);
    }
}

#[test]
fn pose_inverse_of_inverse_returns_original() {
    for pose in sample_poses() {
        assert!(pose.inverse().inverse().almost_equal(&pose), "failed for {}", pose);
    }
}

#[test]
fn scaled_pose_inverse_round_trip_for_nonzero_scales() {
    for scale in [0.25, 1.0, 3.0, -2.0] {
        let pose = ScaledPose3D::new(Point3D::new(1.0, 2.0, 3.0), quarter_turn_z(), scale);
        assert!(
            pose.inverse().inverse().almost_equal(&pose),
            "failed for scale {scale}"
        );
    }
}

// --- Application pipeline ---

#[test]
fn pose_applies_translation_before_rotation() {
    let pose = Pose3D::new(Point3D::new(1.0, 0.0, 0.0), quarter_turn_z());
    let moved = pose.apply_to_point(Point3D::new(1.0, 0.0, 0.0));
    assert!(moved.almost_equal(&Point3D::new(0.0, 2.0, 0.0)));
    // The rotate-then-translate answer, for contrast.
    assert!(!moved.almost_equal(&Point3D::new(1.0, 1.0, 0.0)));
}

#[test]
fn scaled_pose_applies_scale_last() {
    let pose = ScaledPose3D::new(Point3D::new(1.0, 0.0, 0.0), quarter_turn_z(), 3.0);
    let moved = pose.apply_to_point(Point3D::new(1.0, 0.0, 0.0));
    assert!(moved.almost_equal(&Point3D::new(0.0, 6.0, 0.0)));
}

#[test]
fn applying_identity_changes_nothing() {
    let p = Point3D::new(0.1, 0.2, 0.3);
    let v = Vector3D::new(-1.0, 2.0, -3.0);
    let s = Size3D::new(1.0, 2.0, 3.0);
    assert!(Pose3D::IDENTITY.apply_to_point(p).almost_equal(&p));
    assert!(Pose3D::IDENTITY.apply_to_vector(v).almost_equal(&v));
    assert!(Pose3D::IDENTITY.apply_to_size(s).almost_equal(&s));
    assert!(ScaledPose3D::IDENTITY.apply_to_point(p).almost_equal(&p));
}

#[test]
fn pose_then_inverse_application_does_not_round_trip() {
    // Under translate-then-rotate application, applying a pose and then
    // its inverse is not the identity map unless the rotation is
    // trivial; the translation of the inverse is applied in the rotated
    // frame. This pins the behavior rather than a conventional
    // expectation.
    let pose = Pose3D::new(Point3D::new(1.0, 0.0, 0.0), quarter_turn_z());
    let p = Point3D::new(1.0, 0.0, 0.0);
    let there = pose.apply_to_point(p);
    let back = pose.inverse().apply_to_point(there);
    assert!(!back.almost_equal(&p));
}

// --- Flip ---

#[test]
fn flip_is_an_involution_on_both_pose_types() {
    let pose = Pose3D::new(
        Point3D::new(1.0, -2.0, 3.0),
        Rotation3D::from_angle_axis(Angle::from_degrees(50.0), RotationAxis3D::XYZ),
    );
    let scaled = ScaledPose3D::new(pose.position, pose.rotation, 1.75);
    for axis in [Axis3D::X, Axis3D::Y, Axis3D::Z] {
        assert_eq!(pose.flipped(axis).flipped(axis), pose);
        assert_eq!(scaled.flipped(axis).flipped(axis), scaled);
    }
}

#[test]
fn flip_negates_only_the_chosen_position_component() {
    let pose = Pose3D::from_position(Point3D::new(1.0, 2.0, 3.0));
    assert_eq!(pose.flipped(Axis3D::X).position, Point3D::new(-1.0, 2.0, 3.0));
    assert_eq!(pose.flipped(Axis3D::Y).position, Point3D::new(1.0, -2.0, 3.0));
    assert_eq!(pose.flipped(Axis3D::Z).position, Point3D::new(1.0, 2.0, -3.0));
}

#[test]
fn flip_reverses_rotations_about_the_other_axes() {
    // Flipping along x mirrors a y-axis rotation into its inverse.
    let quarter_y = Rotation3D::from_angle_axis(Angle::HALF_PI, RotationAxis3D::Y);
    let pose = Pose3D::from_rotation(quarter_y).flipped(Axis3D::X);
    assert!(pose.rotation.almost_equal(&quarter_y.inverse()));

    // A rotation about the flip axis itself is preserved.
    let quarter_x = Rotation3D::from_angle_axis(Angle::HALF_PI, RotationAxis3D::X);
    let kept = Pose3D::from_rotation(quarter_x).flipped(Axis3D::X);
    assert!(kept.rotation.almost_equal(&quarter_x));
}

// --- Matrix constructors ---

#[test]
fn scaled_pose_matrix_round_trip() {
    let original = ScaledPose3D::new(
        Point3D::new(4.0, -5.0, 6.0),
        Rotation3D::from_euler(spatial_core::EulerAngles::new(
            Angle::from_degrees(20.0),
            Angle::from_degrees(-35.0),
            Angle::from_degrees(110.0),
            spatial_core::EulerOrder::Xyz,
        )),
        2.5,
    );
    let rebuilt = ScaledPose3D::from_matrix(matrix_for(&original)).unwrap();
    assert!(rebuilt.almost_equal(&original));
}

#[test]
fn pose_matrix_round_trip() {
    let original = Pose3D::new(Point3D::new(-1.0, 2.0, 0.5), quarter_turn_z());
    let as_scaled = ScaledPose3D::from(original);
    let rebuilt = Pose3D::from_matrix(matrix_for(&as_scaled)).unwrap();
    assert!(rebuilt.almost_equal(&original));
}

#[test]
fn pose_constructor_rejects_scaled_matrix() {
    let scaled = ScaledPose3D::new(Point3D::ZERO, quarter_turn_z(), 2.0);
    let err = Pose3D::from_matrix(matrix_for(&scaled)).unwrap_err();
    assert!(matches!(err, SpatialError::NotARotation { .. }));
}

#[test]
fn scaled_constructor_rejects_inconsistent_columns() {
    let columns = [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 2.0, 0.0, 0.0],
        [0.0, 0.0, 3.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];
    let err = ScaledPose3D::from_matrix(columns).unwrap_err();
    assert!(matches!(err, SpatialError::NonUniformScale { .. }));
}

#[test]
fn scaled_constructor_rejects_mirror() {
    let columns = [
        [0.0, 1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];
    // Swapping two columns flips the determinant to -1.
    let err = ScaledPose3D::from_matrix(columns).unwrap_err();
    assert!(matches!(err, SpatialError::NotARotation { .. }));
}

// --- Identity semantics ---

#[test]
fn pose_identity_flag_is_bitwise() {
    assert!(Pose3D::IDENTITY.is_identity());
    let negated_rotation = Pose3D::new(
        Point3D::ZERO,
        Rotation3D::from_quaternion(-Rotation3D::IDENTITY.quaternion()),
    );
    assert!(!negated_rotation.is_identity());
    assert!(negated_rotation.almost_equal(&Pose3D::IDENTITY));
}

#[test]
fn scaled_pose_identity_requires_unit_scale() {
    assert!(ScaledPose3D::IDENTITY.is_identity());
    let doubled = ScaledPose3D::new(Point3D::ZERO, Rotation3D::IDENTITY, 2.0);
    assert!(!doubled.is_identity());
}

// --- Planar poses ---

#[test]
fn pose2d_composition_is_commutative() {
    let a = Pose2D::new(Point2D::new(1.0, 2.0), Angle::from_degrees(30.0));
    let b = Pose2D::new(Point2D::new(-3.0, 0.5), Angle::from_degrees(45.0));
    assert!((a * b).almost_equal(&(b * a)));
}

#[test]
fn pose2d_applies_translation_before_rotation() {
    let pose = Pose2D::new(Point2D::new(1.0, 0.0), Angle::HALF_PI);
    let moved = pose.apply_to_point(Point2D::new(1.0, 0.0));
    assert!(moved.almost_equal(&Point2D::new(0.0, 2.0)));
}

#[test]
fn pose2d_inverse_round_trip() {
    let pose = Pose2D::new(Point2D::new(2.0, -1.0), Angle::from_degrees(120.0));
    assert!((pose * pose.inverse()).almost_equal(&Pose2D::IDENTITY));
    assert!(pose.inverse().inverse().almost_equal(&pose));
}
