//! Error types for spatial-primitive construction.
//!
//! This module provides a unified error type [`SpatialError`] covering the
//! failure modes of matrix-derived construction, the only fallible surface
//! in the crate. Everything else is total: precondition breaches (a
//! non-unit `forward` vector, a non-normal scale) are programming errors
//! and are checked with debug assertions instead.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`NonUniformScale`](SpatialError::NonUniformScale) | Matrix columns carry different scale factors |
//! | [`NotARotation`](SpatialError::NotARotation) | Normalized linear block is not orthogonal with determinant +1 |
//! | [`NotFinite`](SpatialError::NotFinite) | Matrix entries contain NaN or infinity |
//!
//! # Usage
//!
//! Fallible constructors return [`SpatialResult<T>`], which is
//! `Result<T, SpatialError>`. Use the constructor methods for consistent
//! error creation:
//!
//! ```
//! use spatial_core::{SpatialError, SpatialResult};
//!
//! fn check_uniform(sx: f64, sy: f64, sz: f64) -> SpatialResult<f64> {
//!     if (sx - sy).abs() > 1e-9 || (sx - sz).abs() > 1e-9 {
//!         return Err(SpatialError::non_uniform_scale(
//!             "check_uniform",
//!             "column norms disagree",
//!         ));
//!     }
//!     Ok(sx)
//! }
//! ```

use thiserror::Error;

/// Unified error type for fallible spatial construction.
///
/// All variants come from decomposing a caller-supplied 4x4 matrix into
/// translation, rotation, and scale. Use the constructor methods
/// ([`non_uniform_scale`](Self::non_uniform_scale),
/// [`not_a_rotation`](Self::not_a_rotation), etc.) for consistent
/// error creation.
#[derive(Error, Debug)]
pub enum SpatialError {
    /// The linear block's columns carry different scale factors, so no
    /// single uniform scale reproduces the matrix.
    #[error("Non-uniform scale in {context}: {message}")]
    NonUniformScale { context: String, message: String },

    /// After dividing out the scale, the linear block is not a proper
    /// rotation (not orthogonal, or determinant is not +1).
    #[error("Not a rotation in {context}: {message}")]
    NotARotation { context: String, message: String },

    /// A matrix entry is NaN or infinite.
    #[error("Non-finite value in {context}: {message}")]
    NotFinite { context: String, message: String },
}

/// Convenience alias for `Result<T, SpatialError>`.
pub type SpatialResult<T> = Result<T, SpatialError>;

impl SpatialError {
    /// Creates a [`NonUniformScale`](Self::NonUniformScale) error.
    pub fn non_uniform_scale(context: &str, reason: &str) -> Self {
        Self::NonUniformScale {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`NotARotation`](Self::NotARotation) error.
    pub fn not_a_rotation(context: &str, reason: &str) -> Self {
        Self::NotARotation {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`NotFinite`](Self::NotFinite) error.
    pub fn not_finite(context: &str, reason: &str) -> Self {
        Self::NotFinite {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }
}
