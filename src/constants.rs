#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const QUARTER_PI: f64 = 0.7853981633974483096156608;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Default comparison tolerance: the square root of `f64::EPSILON`.
///
/// Near-equality checks scale this by the magnitude of the operands,
/// with the raw value as an absolute floor near zero.
#[allow(clippy::excessive_precision)]
pub const DEFAULT_TOLERANCE: f64 = 1.4901161193847656e-8;

/// Dot-product threshold above which two unit quaternions are treated
/// as parallel and spherical interpolation falls back to linear.
pub const SLERP_PARALLEL_THRESHOLD: f64 = 0.9995;
