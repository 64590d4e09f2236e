//! [`approx`] trait implementations for the geometric types.
//!
//! Compiled for tests and behind the `approx` feature for downstream
//! users. Component types compare field by field; [`Rotation3D`]
//! compares through the quaternion dot product, so a rotation and its
//! negated quaternion are equal here even though their fields differ.

use crate::{
    Angle, Point2D, Point3D, Pose2D, Pose3D, Quaternion, Rotation3D, ScaledPose3D, Size2D,
    Size3D, Vector2D, Vector3D,
};
use approx::{AbsDiffEq, RelativeEq};

macro_rules! componentwise_approx {
    ($ty:ty { $($field:ident),+ }) => {
        impl AbsDiffEq for $ty {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                f64::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                $(f64::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        impl RelativeEq for $ty {
            fn default_max_relative() -> f64 {
                f64::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                $(f64::relative_eq(&self.$field, &other.$field, epsilon, max_relative))&&+
            }
        }
    };
}

componentwise_approx!(Vector3D { x, y, z });
componentwise_approx!(Point3D { x, y, z });
componentwise_approx!(Size3D { width, height, depth });
componentwise_approx!(Vector2D { x, y });
componentwise_approx!(Point2D { x, y });
componentwise_approx!(Size2D { width, height });
componentwise_approx!(Quaternion { x, y, z, w });

impl AbsDiffEq for Angle {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.radians(), &other.radians(), epsilon)
    }
}

impl RelativeEq for Angle {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.radians(), &other.radians(), epsilon, max_relative)
    }
}

impl AbsDiffEq for Rotation3D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    // |dot| reaches 1 exactly when the rotations coincide, covering
    // the q / -q ambiguity.
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&libm::fabs(self.dot(other)), &1.0, epsilon)
    }
}

impl RelativeEq for Rotation3D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&libm::fabs(self.dot(other)), &1.0, epsilon, max_relative)
    }
}

impl AbsDiffEq for Pose3D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.position.abs_diff_eq(&other.position, epsilon)
            && self.rotation.abs_diff_eq(&other.rotation, epsilon)
    }
}

impl RelativeEq for Pose3D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.position.relative_eq(&other.position, epsilon, max_relative)
            && self.rotation.relative_eq(&other.rotation, epsilon, max_relative)
    }
}

impl AbsDiffEq for ScaledPose3D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.position.abs_diff_eq(&other.position, epsilon)
            && self.rotation.abs_diff_eq(&other.rotation, epsilon)
            && f64::abs_diff_eq(&self.scale, &other.scale, epsilon)
    }
}

impl RelativeEq for ScaledPose3D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.position.relative_eq(&other.position, epsilon, max_relative)
            && self.rotation.relative_eq(&other.rotation, epsilon, max_relative)
            && f64::relative_eq(&self.scale, &other.scale, epsilon, max_relative)
    }
}

impl AbsDiffEq for Pose2D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.position.abs_diff_eq(&other.position, epsilon)
            && self.angle.abs_diff_eq(&other.angle, epsilon)
    }
}

impl RelativeEq for Pose2D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.position.relative_eq(&other.position, epsilon, max_relative)
            && self.angle.relative_eq(&other.angle, epsilon, max_relative)
    }
}
