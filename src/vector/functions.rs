//! Free-function forms of the binary vector operations
//!
//! Each function forwards to the matching [`Vector3`] method; they exist for
//! call sites that read better as `distance(&a, &b)` than `a.distance(&b)`.

use super::Vector3;

/// Angle between `a` and `b` in radians, see [`Vector3::angle`]
pub fn angle(a: &Vector3, b: &Vector3) -> f64 {
    a.angle(b)
}

/// Euclidean distance between two points
pub fn distance(a: &Vector3, b: &Vector3) -> f64 {
    a.distance(b)
}

/// Dot product of `a` and `b`
pub fn dot_product(a: &Vector3, b: &Vector3) -> f64 {
    a.dot(b)
}

/// Right-handed cross product `a × b`
pub fn cross_product(a: &Vector3, b: &Vector3) -> Vector3 {
    a.cross(b)
}

/// Linear interpolation from `a` at `t = 0` to `b` at `t = 1`
pub fn interpolate(a: &Vector3, b: &Vector3, t: f64) -> Vector3 {
    a.interpolate(b, t)
}
