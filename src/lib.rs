//! vector3d: a three-dimensional vector value type
//!
//! This crate provides [`Vector3`], a small `Copy` value holding three `f64`
//! coordinates, together with the usual geometric operations: arithmetic,
//! dot and cross products, normalization, interpolation, distance and angle.
//!
//! ```rust
//! use vector3d::Vector3;
//!
//! let x_axis = Vector3::new(1.0, 0.0, 0.0);
//! let y_axis = Vector3::new(0.0, 1.0, 0.0);
//!
//! // `*` between two vectors is the cross product
//! assert_eq!(x_axis * y_axis, Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!(x_axis.to_string(), "(1,0,0)");
//! ```

use thiserror::Error;

pub mod constants;
pub mod vector;

// Re-export commonly used types
pub use vector::functions::{angle, cross_product, distance, dot_product, interpolate};
pub use vector::Vector3;

/// Main error type for the vector3d library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    /// An argument had the wrong shape, e.g. a sequence that is not three long
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Checked division by a zero scalar
    #[error("Division by zero")]
    DivisionByZero,

    /// A component of the textual form could not be parsed as a number
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for vector3d operations
pub type Result<T> = std::result::Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VectorError::InvalidArgument("expected 3 components, got 2".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: expected 3 components, got 2"
        );
        assert_eq!(VectorError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            VectorError::Parse("\"abc\"".to_string()).to_string(),
            "Parse error: \"abc\""
        );
    }

    #[test]
    fn test_root_reexports() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(dot_product(&a, &b), 0.0);
        assert_eq!(cross_product(&a, &b), Vector3::UNIT_Z);
        assert_eq!(distance(&a, &a), 0.0);
        assert_eq!(interpolate(&a, &b, 0.0), a);
        assert!((angle(&a, &b) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }
}
