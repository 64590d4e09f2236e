//! Typed 2D/3D spatial primitives: angles, quaternion rotations, rigid
//! and scaled poses.
//!
//! `spatial-core` provides the geometric building blocks for graphics,
//! simulation, and spatial-computing code: points, vectors, and sizes in
//! two and three dimensions, a radian-backed [`Angle`], quaternion-backed
//! [`Rotation3D`] with Euler/angle-axis/look-at construction, slerp and
//! spline interpolation, swing–twist decomposition, and the pose types
//! combining position, rotation, and uniform scale.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] wrapper over radians: trig, normalization, inversion |
//! | [`vector`] | [`Vector3D`], [`Point3D`], [`Size3D`] and their 2D counterparts |
//! | [`rotation`] | [`Rotation3D`], [`Quaternion`], Euler angles, slerp, swing–twist |
//! | [`pose`] | [`Pose3D`], [`ScaledPose3D`], [`Pose2D`] |
//! | [`traits`] | [`Rotatable3D`], [`Translatable3D`], [`Scalable3D`], [`Volumetric`] |
//! | [`math`] | Scalar near-equality helpers |
//! | [`constants`] | π multiples, conversion factors, default tolerance |
//! | [`errors`] | [`SpatialError`] and [`SpatialResult`] |
//!
//! # Quick Start
//!
//! ```
//! use spatial_core::{Angle, Point3D, Pose3D, Rotation3D, RotationAxis3D, Vector3D};
//!
//! // A quarter turn about z carries +x to +y.
//! let quarter = Rotation3D::from_angle_axis(Angle::HALF_PI, RotationAxis3D::Z);
//! let v = quarter.quaternion().rotate_vector(Vector3D::X);
//! assert!(v.almost_equal(&Vector3D::Y));
//!
//! // Poses translate first, then rotate.
//! let pose = Pose3D::new(Point3D::new(1.0, 0.0, 0.0), quarter);
//! let moved = pose.apply_to_point(Point3D::new(1.0, 0.0, 0.0));
//! assert!(moved.almost_equal(&Point3D::new(0.0, 2.0, 0.0)));
//! ```
//!
//! # Design Notes
//!
//! - **Radians internally**: [`Angle`] stores radians and never
//!   normalizes implicitly; [`Angle::normalized`] maps into `(−π, π]` on
//!   request.
//! - **Approximate equality**: every type carries an `almost_equal`
//!   using a mixed relative/absolute tolerance defaulting to
//!   `√(machine epsilon)` ([`constants::DEFAULT_TOLERANCE`]).
//! - **Double cover**: a quaternion and its negation are the same
//!   rotation. Exact tests ([`Rotation3D::is_identity`], `==`) see two
//!   values; `almost_equal` identifies them. The two notions are
//!   deliberately separate.
//! - **Pose algebra**: pose concatenation adds positions *without*
//!   rotating the right-hand position, and pose application translates
//!   before rotating. Both rules differ from conventional rigid-transform
//!   algebra and are kept deliberately; see the [`pose`] module docs.
//!
//! # Crate Features
//!
//! - `serde`: serialization for every public type. Angles persist as
//!   bare radians and rotations as their `[x, y, z, w]` quaternion.
//! - `approx`: [`approx`](https://docs.rs/approx) trait implementations
//!   (`AbsDiffEq`, `RelativeEq`) for use with its assertion macros.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod pose;
pub mod rotation;
pub mod traits;
pub mod vector;

#[cfg(any(test, feature = "approx"))]
mod approx_;

pub use angle::{deg, rad, Angle};
pub use errors::{SpatialError, SpatialResult};
pub use pose::{Pose2D, Pose3D, ScaledPose3D};
pub use rotation::{
    Axis3D, EulerAngles, EulerOrder, Quaternion, Rotation3D, RotationAxis3D, SlerpPath,
};
pub use traits::{Rotatable3D, Scalable3D, Translatable3D, Volumetric};
pub use vector::{Point2D, Point3D, Size2D, Size3D, Vector2D, Vector3D};
