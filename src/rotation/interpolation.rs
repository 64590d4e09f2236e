//! Rotation interpolation: slerp, partial rotations, and cubic splines.
//!
//! Slerp walks the geodesic between two unit quaternions at constant
//! angular speed. The arc is ambiguous because of the double cover, so
//! [`SlerpPath`] selects between the short and the supplementary arc.
//! [`Rotation3D::spline`] threads a squad-style cubic through four
//! control rotations for C¹-continuous keyframe chains.

use crate::constants::SLERP_PARALLEL_THRESHOLD;
use crate::math;
use crate::rotation::quaternion::Quaternion;
use crate::rotation::rotation3d::Rotation3D;

/// Arc selection for spherical linear interpolation.
///
/// `Automatic` behaves as `Shortest`. `Longest` takes the supplementary
/// arc, winding the other way around the quaternion sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlerpPath {
    /// Let the implementation pick; identical to `Shortest`.
    #[default]
    Automatic,
    /// The short arc: endpoints are sign-aligned before interpolating.
    Shortest,
    /// The supplementary arc: one endpoint is negated when the pair is
    /// already sign-aligned.
    Longest,
}

/// Slerp between two sign-aligned unit quaternions, no path correction.
///
/// Nearly parallel (or antiparallel) endpoints fall back to normalized
/// linear interpolation, where the sine ratios degenerate.
fn slerp_aligned(start: &Quaternion, end: &Quaternion, t: f64) -> Quaternion {
    let dot = start.dot(end);
    if libm::fabs(dot) > SLERP_PARALLEL_THRESHOLD {
        return (start.scaled(1.0 - t) + end.scaled(t)).normalized();
    }
    let theta = libm::acos(math::clamp_unit(dot));
    let sin_theta = libm::sin(theta);
    let a = libm::sin((1.0 - t) * theta) / sin_theta;
    let b = libm::sin(t * theta) / sin_theta;
    (start.scaled(a) + end.scaled(b)).normalized()
}

impl Rotation3D {
    /// Spherical linear interpolation from `from` to `to` along the
    /// automatic (shortest) path.
    ///
    /// `t = 0` returns `from` and `t = 1` returns `to`, up to
    /// normalization and quaternion sign. Values outside `[0, 1]`
    /// extrapolate along the same arc.
    ///
    /// ```
    /// use spatial_core::{Angle, Rotation3D, RotationAxis3D};
    ///
    /// let a = Rotation3D::IDENTITY;
    /// let b = Rotation3D::from_angle_axis(Angle::HALF_PI, RotationAxis3D::Z);
    /// let mid = Rotation3D::slerp(&a, &b, 0.5);
    /// assert!(mid.almost_equal(&Rotation3D::from_angle_axis(
    ///     Angle::QUARTER_PI,
    ///     RotationAxis3D::Z,
    /// )));
    /// ```
    pub fn slerp(from: &Self, to: &Self, t: f64) -> Self {
        Self::slerp_along(from, to, t, SlerpPath::Automatic)
    }

    /// Spherical linear interpolation with an explicit arc selection.
    pub fn slerp_along(from: &Self, to: &Self, t: f64, path: SlerpPath) -> Self {
        let start = from.quaternion();
        let mut end = to.quaternion();
        let dot = start.dot(&end);
        let flip = match path {
            SlerpPath::Automatic | SlerpPath::Shortest => dot < 0.0,
            SlerpPath::Longest => dot > 0.0,
        };
        if flip {
            end = -end;
        }
        Self::from_quaternion(slerp_aligned(&start, &end, t))
    }

    /// Returns the fraction `t` of this rotation: slerp from the
    /// identity to `self`.
    ///
    /// `partial(0.5)` is the half rotation, and composing it with itself
    /// recovers the whole. Replaces the scalar-multiplication shorthand
    /// some libraries use for the same idea.
    ///
    /// ```
    /// use spatial_core::{Angle, Rotation3D, RotationAxis3D};
    ///
    /// let r = Rotation3D::from_angle_axis(Angle::HALF_PI, RotationAxis3D::Y);
    /// let half = r.partial(0.5);
    /// assert!((half * half).almost_equal(&r));
    /// ```
    pub fn partial(&self, t: f64) -> Self {
        Self::slerp(&Self::IDENTITY, self, t)
    }

    /// Cubic spherical interpolation from `r1` to `r2`, shaped by the
    /// outer controls `r0` and `r3`.
    ///
    /// Squad construction: the controls are hemisphere-aligned along
    /// the chain, inner control quaternions come from the group
    /// logarithm of the neighbor ratios, and the result blends two
    /// slerps with the parabolic weight `2t(1 − t)`. Endpoints are
    /// exact: `t = 0` gives `r1` and `t = 1` gives `r2`.
    pub fn spline(r0: &Self, r1: &Self, r2: &Self, r3: &Self, t: f64) -> Self {
        let q1 = r1.quaternion();
        let q0 = hemisphere_align(r0.quaternion(), &q1);
        let q2 = hemisphere_align(r2.quaternion(), &q1);
        let q3 = hemisphere_align(r3.quaternion(), &q2);

        let a = inner_control(&q0, &q1, &q2);
        let b = inner_control(&q1, &q2, &q3);

        let outer = slerp_aligned(&q1, &q2, t);
        let inner = slerp_aligned(&a, &b, t);
        let mix = 2.0 * t * (1.0 - t);
        Self::from_quaternion(slerp_aligned(&outer, &inner, mix))
    }
}

/// Flips `q` into the hemisphere of `reference`.
fn hemisphere_align(q: Quaternion, reference: &Quaternion) -> Quaternion {
    if q.dot(reference) < 0.0 {
        -q
    } else {
        q
    }
}

/// Squad inner control at `q`: `q · exp(−(ln(q⁻¹·prev) + ln(q⁻¹·next)) / 4)`.
fn inner_control(prev: &Quaternion, q: &Quaternion, next: &Quaternion) -> Quaternion {
    let inv = q.inverse();
    let correction = ((inv * prev).ln() + (inv * next).ln()).scaled(-0.25);
    *q * correction.exp()
}
