//! Rotation axes.

use crate::Vector3D;

/// A coordinate-axis selector.
///
/// Used where an operation is parameterized by one cardinal axis, such as
/// [`Pose3D::flip`](crate::Pose3D::flip).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis3D {
    X,
    Y,
    Z,
}

/// The axis a rotation turns about.
///
/// Axis components are taken as given: constructors do not normalize, and
/// the combined constants ([`XY`](Self::XY), [`XYZ`](Self::XYZ), …) are
/// literal unit components, not unit-length vectors. Rotation
/// construction keeps its result well-formed by normalizing the produced
/// quaternion instead of the axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationAxis3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationAxis3D {
    /// The x axis `(1, 0, 0)`.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// The y axis `(0, 1, 0)`.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// The z axis `(0, 0, 1)`.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// The diagonal between the x and y axes `(1, 1, 0)`.
    pub const XY: Self = Self::new(1.0, 1.0, 0.0);

    /// The diagonal between the x and z axes `(1, 0, 1)`.
    pub const XZ: Self = Self::new(1.0, 0.0, 1.0);

    /// The diagonal between the y and z axes `(0, 1, 1)`.
    pub const YZ: Self = Self::new(0.0, 1.0, 1.0);

    /// The diagonal between all three axes `(1, 1, 1)`.
    pub const XYZ: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates an axis from its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the axis as a plain vector.
    #[inline]
    pub fn to_vector(&self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    /// Creates an axis from a vector's components.
    #[inline]
    pub fn from_vector(v: Vector3D) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// The unit axis for a cardinal-axis selector.
impl From<Axis3D> for RotationAxis3D {
    fn from(axis: Axis3D) -> Self {
        match axis {
            Axis3D::X => Self::X,
            Axis3D::Y => Self::Y,
            Axis3D::Z => Self::Z,
        }
    }
}
