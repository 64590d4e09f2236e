//! Rotations: quaternions, Euler angles, axes, and [`Rotation3D`].

mod axis;
mod euler;
mod interpolation;
mod quaternion;
mod rotation3d;
#[cfg(feature = "serde")]
mod serde_;
mod swing_twist;

pub use axis::{Axis3D, RotationAxis3D};
pub use euler::{EulerAngles, EulerOrder};
pub use interpolation::SlerpPath;
pub use quaternion::Quaternion;
pub use rotation3d::Rotation3D;
