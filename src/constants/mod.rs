//! Constants module for vector comparisons and angle conversions

use std::f64::consts::PI;

// Tolerances
/// Default absolute tolerance used by the `approx` comparisons on `Vector3`
pub const DEFAULT_EPSILON: f64 = 1e-12;
/// Default number of units in the last place for `UlpsEq` comparisons
pub const DEFAULT_MAX_ULPS: u32 = 4;

// Angles
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
