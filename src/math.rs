use crate::constants::DEFAULT_TOLERANCE;

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Near-equality with the default tolerance (the square root of machine
/// epsilon).
///
/// The comparison is relative for operands larger than one in magnitude
/// and absolute below that, so values straddling zero still compare
/// sensibly.
#[inline]
pub fn almost_equal(a: f64, b: f64) -> bool {
    almost_equal_with(a, b, DEFAULT_TOLERANCE)
}

/// Near-equality with an explicit tolerance.
///
/// Equal values (including infinities of the same sign) always compare
/// equal; NaN never does.
#[inline]
pub fn almost_equal_with(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = libm::fmax(libm::fabs(a), libm::fabs(b));
    libm::fabs(a - b) <= tolerance * libm::fmax(1.0, scale)
}

/// Clamps a value to [-1, 1], the domain of `asin`/`acos`.
///
/// Rounding pushes dot products and other trig intermediates a few ulp
/// outside the closed interval; unclamped they turn into NaN.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    if x < -1.0 {
        -1.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_almost_equal_identical() {
        assert!(almost_equal(1.0, 1.0));
        assert!(almost_equal(0.0, 0.0));
        assert!(almost_equal(f64::INFINITY, f64::INFINITY));
    }

    #[test]
    fn test_almost_equal_near() {
        assert!(almost_equal(1.0, 1.0 + 1e-12));
        assert!(almost_equal(0.0, 1e-12));
        assert!(!almost_equal(1.0, 1.0 + 1e-6));
    }

    #[test]
    fn test_almost_equal_relative_at_scale() {
        // At magnitude 1e10 the tolerance scales with the operands.
        assert!(almost_equal(1e10, 1e10 + 1.0));
        assert!(!almost_equal(1e10, 1e10 + 1e4));
    }

    #[test]
    fn test_almost_equal_nan() {
        assert!(!almost_equal(f64::NAN, f64::NAN));
        assert!(!almost_equal(f64::NAN, 0.0));
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(1.0 + 1e-16), 1.0);
        assert_eq!(clamp_unit(-1.0 - 1e-16), -1.0);
        assert_eq!(clamp_unit(0.5), 0.5);
    }
}
