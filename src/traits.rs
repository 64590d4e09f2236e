//! Capability traits shared across the geometric types.
//!
//! Each trait pairs an in-place mutator with a returning variant; the
//! returning variant is a provided method built on copy-then-mutate, so
//! every implementor writes only the mutation. [`Volumetric`] abstracts
//! the containment and combination operations of extent types.

use crate::{Point3D, Pose3D, Rotation3D, ScaledPose3D, Size3D, Vector3D};

/// Types that can be rotated by a [`Rotation3D`].
pub trait Rotatable3D: Copy {
    /// Rotates the value in place.
    fn rotate_by(&mut self, rotation: &Rotation3D);

    /// Returns the rotated value, leaving the receiver untouched.
    fn rotated_by(&self, rotation: &Rotation3D) -> Self {
        let mut out = *self;
        out.rotate_by(rotation);
        out
    }
}

/// Types that can be translated by a [`Vector3D`].
pub trait Translatable3D: Copy {
    /// Translates the value in place.
    fn translate_by(&mut self, vector: &Vector3D);

    /// Returns the translated value, leaving the receiver untouched.
    fn translated_by(&self, vector: &Vector3D) -> Self {
        let mut out = *self;
        out.translate_by(vector);
        out
    }
}

/// Types that can be scaled, per-component or uniformly.
pub trait Scalable3D: Copy {
    /// Scales each component by the matching extent of `scale`.
    fn scale_by(&mut self, scale: &Size3D);

    /// Scales every component by `factor`.
    fn uniformly_scale_by(&mut self, factor: f64);

    /// Returns the per-component scaled value.
    fn scaled_by(&self, scale: &Size3D) -> Self {
        let mut out = *self;
        out.scale_by(scale);
        out
    }

    /// Returns the uniformly scaled value.
    fn uniformly_scaled_by(&self, factor: f64) -> Self {
        let mut out = *self;
        out.uniformly_scale_by(factor);
        out
    }
}

/// Extent types supporting containment and combination.
pub trait Volumetric: Sized {
    /// Returns `true` if `other` fits inside `self` on every axis.
    fn contains(&self, other: &Self) -> bool;

    /// Returns `true` if the point lies within the extent, anchored at
    /// the origin.
    fn contains_point(&self, point: &Point3D) -> bool;

    /// Returns the component-wise maximum of the two extents.
    fn union(&self, other: &Self) -> Self;

    /// Returns the component-wise minimum of the two extents, floored
    /// at zero.
    fn intersection(&self, other: &Self) -> Self;
}

impl Rotatable3D for Vector3D {
    fn rotate_by(&mut self, rotation: &Rotation3D) {
        *self = rotation.quaternion().rotate_vector(*self);
    }
}

impl Rotatable3D for Point3D {
    fn rotate_by(&mut self, rotation: &Rotation3D) {
        *self = rotation.quaternion().rotate_vector(self.to_vector()).to_point();
    }
}

impl Rotatable3D for Size3D {
    fn rotate_by(&mut self, rotation: &Rotation3D) {
        *self = Size3D::from_vector(rotation.quaternion().rotate_vector(self.to_vector()));
    }
}

impl Rotatable3D for Rotation3D {
    fn rotate_by(&mut self, rotation: &Rotation3D) {
        *self = *rotation * *self;
    }
}

impl Rotatable3D for Pose3D {
    /// Rotating a pose composes onto its rotation; the position is
    /// left in place.
    fn rotate_by(&mut self, rotation: &Rotation3D) {
        self.rotation = *rotation * self.rotation;
    }
}

impl Rotatable3D for ScaledPose3D {
    fn rotate_by(&mut self, rotation: &Rotation3D) {
        self.rotation = *rotation * self.rotation;
    }
}

impl Translatable3D for Point3D {
    fn translate_by(&mut self, vector: &Vector3D) {
        *self = *self + *vector;
    }
}

impl Translatable3D for Pose3D {
    fn translate_by(&mut self, vector: &Vector3D) {
        self.position = self.position + *vector;
    }
}

impl Translatable3D for ScaledPose3D {
    fn translate_by(&mut self, vector: &Vector3D) {
        self.position = self.position + *vector;
    }
}

impl Scalable3D for Vector3D {
    fn scale_by(&mut self, scale: &Size3D) {
        self.x *= scale.width;
        self.y *= scale.height;
        self.z *= scale.depth;
    }

    fn uniformly_scale_by(&mut self, factor: f64) {
        *self = *self * factor;
    }
}

impl Scalable3D for Point3D {
    fn scale_by(&mut self, scale: &Size3D) {
        self.x *= scale.width;
        self.y *= scale.height;
        self.z *= scale.depth;
    }

    fn uniformly_scale_by(&mut self, factor: f64) {
        *self = *self * factor;
    }
}

impl Scalable3D for Size3D {
    fn scale_by(&mut self, scale: &Size3D) {
        self.width *= scale.width;
        self.height *= scale.height;
        self.depth *= scale.depth;
    }

    fn uniformly_scale_by(&mut self, factor: f64) {
        *self = *self * factor;
    }
}

impl Volumetric for Size3D {
    fn contains(&self, other: &Self) -> bool {
        Size3D::contains(self, other)
    }

    fn contains_point(&self, point: &Point3D) -> bool {
        Size3D::contains_point(self, point)
    }

    fn union(&self, other: &Self) -> Self {
        Size3D::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Self {
        Size3D::intersection(self, other)
    }
}
