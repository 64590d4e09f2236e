//! Angles: the scalar angular type, its operators, and normalization.

mod core;
mod normalize;
mod ops;
#[cfg(feature = "serde")]
mod serde_;

pub use self::core::{deg, rad, Angle};
pub use normalize::{wrap_0_2pi, wrap_pm_pi};
