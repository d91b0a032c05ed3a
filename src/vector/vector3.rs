//! # Three-Dimensional Vector Module
//!
//! This module provides [`Vector3`], a plain value type holding three `f64`
//! coordinates that represent either a point or a direction in 3D Euclidean
//! space.
//!
//! ## Storage
//!
//! The three components are stored as public fields in the fixed order
//! `x`, `y`, `z`. There is no structural invariant: any triple is valid and
//! NaN or infinite components pass through arithmetic without special
//! handling. The magnitude is derived on demand and never cached.
//!
//! ## Comparison Semantics
//!
//! Equality and ordering deliberately measure different things:
//!
//! - `==` compares the three components exactly, with no tolerance
//! - `<`, `<=`, `>`, `>=` compare **magnitudes only**
//!
//! Two vectors with the same length but different directions are therefore
//! neither `<` nor `>` each other (`partial_cmp` is `Equal`, so `<=` and `>=`
//! both hold) while still being `!=`. Use the `approx` traits
//! (`assert_relative_eq!`, `abs_diff_eq`) when a tolerance is wanted.
//!
//! ## Behavior Notes
//!
//! - [`Vector3::angle`] works on normalized copies and never mutates its inputs
//! - [`Vector3::interpolate`] applies the same formula to all three axes
//! - [`Vector3::set_array`] rejects sequences that are not exactly three long
//! - hashing combines the three component bit patterns, so permutations of
//!   the same components hash differently
//!
//! ## Examples
//!
//! ```rust
//! use vector3d::Vector3;
//!
//! let mut v = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.magnitude(), 5.0);
//!
//! v.normalize();
//! assert!((v.magnitude() - 1.0).abs() < 1e-15);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EPSILON, DEFAULT_MAX_ULPS};
use crate::{Result, VectorError};

/// Three-dimensional vector of `f64` components
///
/// Represents a point or direction in 3D space. The type is `Copy`; every
/// operation returns a new value except [`normalize`](Vector3::normalize),
/// [`set_array`](Vector3::set_array) and direct field assignment, which
/// mutate in place.
///
/// # Thread Safety
///
/// `Vector3` is `Send + Sync`. It carries no internal synchronization, so
/// sharing one instance between threads while mutating it needs the usual
/// external locking.
///
/// # Serialization
///
/// The serde representation is a struct with the fields `x`, `y`, `z` in
/// that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Vector3 {
    /// The zero vector
    pub const ZERO: Self = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    /// Unit vector along the x axis
    pub const UNIT_X: Self = Vector3 {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    /// Unit vector along the y axis
    pub const UNIT_Y: Self = Vector3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    /// Unit vector along the z axis
    pub const UNIT_Z: Self = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Creates a new vector from three scalars
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 2.0);
    /// assert_eq!(v.z, 3.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Returns the components as an array `[x, y, z]`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3;
    ///
    /// let v = Vector3::from([1.0, 2.0, 3.0]);
    /// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    /// ```
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Overwrites the components from a sequence of exactly three numbers
    ///
    /// Positions 0, 1 and 2 are copied into `x`, `y` and `z`.
    ///
    /// # Arguments
    ///
    /// * `values` - The new components in `[x, y, z]` order
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidArgument`] when `values` is not three
    /// long. The vector is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::{Vector3, VectorError};
    ///
    /// let mut v = Vector3::ZERO;
    /// v.set_array(&[4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(v, Vector3::new(4.0, 5.0, 6.0));
    ///
    /// let err = v.set_array(&[1.0, 2.0]).unwrap_err();
    /// assert!(matches!(err, VectorError::InvalidArgument(_)));
    /// assert_eq!(v, Vector3::new(4.0, 5.0, 6.0));
    /// ```
    pub fn set_array(&mut self, values: &[f64]) -> Result<()> {
        match *values {
            [x, y, z] => {
                self.x = x;
                self.y = y;
                self.z = z;
                Ok(())
            }
            _ => {
                log::debug!(
                    "rejected array assignment of length {} to {}",
                    values.len(),
                    self
                );
                Err(VectorError::InvalidArgument(format!(
                    "expected 3 components, got {}",
                    values.len()
                )))
            }
        }
    }

    /// Calculates the magnitude (Euclidean length) of the vector
    ///
    /// # Mathematical Formula
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    ///
    /// When the sum of squares overflows or drops below the normal `f64`
    /// range, the components are first divided by the largest absolute
    /// component. A nonzero vector then never reports a zero length, and only
    /// a true length beyond `f64::MAX` reports infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3;
    ///
    /// assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// assert_eq!(Vector3::ZERO.magnitude(), 0.0);
    /// assert_eq!(Vector3::new(1e200, 0.0, 0.0).magnitude(), 1e200);
    /// ```
    pub fn magnitude(&self) -> f64 {
        let sum = self.magnitude_squared();
        if sum.is_finite() && sum >= f64::MIN_POSITIVE {
            return sum.sqrt();
        }
        if sum.is_nan() {
            return sum;
        }

        let scale = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if scale == 0.0 || scale.is_infinite() {
            return scale;
        }
        let (x, y, z) = (self.x / scale, self.y / scale, self.z / scale);
        (x * x + y * y + z * z).sqrt() * scale
    }

    /// Squared magnitude, `x² + y² + z²`
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Scales the vector in place to unit magnitude
    ///
    /// Each component is divided by the magnitude. A vector whose
    /// magnitude is not positive (the zero vector, or one with NaN
    /// components) is left unchanged; no division is performed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3;
    ///
    /// let mut v = Vector3::new(0.0, 0.0, 2.0);
    /// v.normalize();
    /// assert_eq!(v, Vector3::UNIT_Z);
    ///
    /// let mut zero = Vector3::ZERO;
    /// zero.normalize();
    /// assert_eq!(zero, Vector3::ZERO);
    /// ```
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        if mag > 0.0 {
            // Dividing keeps subnormal magnitudes from overflowing 1 / mag
            self.x /= mag;
            self.y /= mag;
            self.z /= mag;
        } else {
            log::debug!("normalize of {} skipped: magnitude is {}", self, mag);
        }
    }

    /// Returns a unit vector in the same direction
    ///
    /// Returns `None` if the magnitude is not positive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3;
    ///
    /// let unit = Vector3::new(3.0, 4.0, 0.0).normalized().unwrap();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    /// assert!(Vector3::ZERO.normalized().is_none());
    /// ```
    pub fn normalized(&self) -> Option<Vector3> {
        if self.magnitude() > 0.0 {
            let mut unit = *self;
            unit.normalize();
            Some(unit)
        } else {
            None
        }
    }

    /// Calculates the dot product with another vector
    ///
    /// # Mathematical Formula
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    ///
    /// # Arguments
    ///
    /// * `other` - The other vector to compute dot product with
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3;
    ///
    /// assert_eq!(Vector3::UNIT_X.dot(&Vector3::UNIT_Y), 0.0);
    /// assert_eq!(Vector3::new(1.0, 2.0, 3.0).dot(&Vector3::new(4.0, 5.0, 6.0)), 32.0);
    /// ```
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the right-handed cross product with another vector
    ///
    /// The result is perpendicular to both inputs, with magnitude equal to
    /// the area of the parallelogram they span. The `*` operator between two
    /// vectors is an alias for this method.
    ///
    /// # Mathematical Formula
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// # Arguments
    ///
    /// * `other` - The right-hand operand (`self × other`)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3;
    ///
    /// assert_eq!(Vector3::UNIT_X.cross(&Vector3::UNIT_Y), Vector3::UNIT_Z);
    /// assert_eq!(Vector3::UNIT_Y.cross(&Vector3::UNIT_X), -Vector3::UNIT_Z);
    /// ```
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Euclidean distance between two points
    ///
    /// # Arguments
    ///
    /// * `other` - The point to measure the distance to
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3;
    ///
    /// let a = Vector3::new(1.0, 1.0, 1.0);
    /// let b = Vector3::new(4.0, 5.0, 1.0);
    /// assert_eq!(a.distance(&b), 5.0);
    /// ```
    pub fn distance(&self, other: &Vector3) -> f64 {
        (*self - *other).magnitude()
    }

    /// Angle between two vectors in radians, in `[0, π]`
    ///
    /// Both vectors are normalized as copies; neither input is modified. The
    /// cosine is clamped to `[-1, 1]` before `acos` so that rounding on
    /// nearly parallel vectors cannot produce NaN.
    ///
    /// A zero-length input normalizes to itself, which makes the cosine 0
    /// and the result π/2.
    ///
    /// # Arguments
    ///
    /// * `other` - The vector to measure the angle to
    ///
    /// # Returns
    ///
    /// Angle in radians [0, π]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3;
    /// use std::f64::consts::PI;
    ///
    /// let a = Vector3::new(2.0, 0.0, 0.0);
    /// let b = Vector3::new(0.0, 3.0, 0.0);
    /// assert!((a.angle(&b) - PI / 2.0).abs() < 1e-15);
    /// assert_eq!(a, Vector3::new(2.0, 0.0, 0.0));
    /// ```
    pub fn angle(&self, other: &Vector3) -> f64 {
        let mut a = *self;
        let mut b = *other;
        a.normalize();
        b.normalize();

        let cos_angle = a.dot(&b);
        if cos_angle.abs() > 1.0 {
            log::trace!("clamping acos argument {} between {} and {}", cos_angle, self, other);
        }
        cos_angle.clamp(-1.0, 1.0).acos()
    }

    /// Linear interpolation from `self` (at `t = 0`) to `other` (at `t = 1`)
    ///
    /// Every component is `c₁*(1 - t) + c₂*t`. `t` is not clamped, so values
    /// outside `[0, 1]` extrapolate along the line.
    ///
    /// # Arguments
    ///
    /// * `other` - The end point, reached at `t = 1`
    /// * `t` - Interpolation parameter
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3;
    ///
    /// let mid = Vector3::ZERO.interpolate(&Vector3::new(10.0, 10.0, 10.0), 0.5);
    /// assert_eq!(mid, Vector3::new(5.0, 5.0, 5.0));
    /// ```
    pub fn interpolate(&self, other: &Vector3, t: f64) -> Vector3 {
        let s = 1.0 - t;
        Vector3 {
            x: self.x * s + other.x * t,
            y: self.y * s + other.y * t,
            z: self.z * s + other.z * t,
        }
    }

    /// Divides every component by `divisor`, failing on zero
    ///
    /// The `/` operator follows IEEE-754 instead and yields infinite or NaN
    /// components for a zero divisor.
    ///
    /// # Arguments
    ///
    /// * `divisor` - The scalar every component is divided by
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] when `divisor == 0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::{Vector3, VectorError};
    ///
    /// let v = Vector3::new(2.0, 4.0, 6.0);
    /// assert_eq!(v.checked_div(2.0), Ok(Vector3::new(1.0, 2.0, 3.0)));
    /// assert_eq!(v.checked_div(0.0), Err(VectorError::DivisionByZero));
    /// ```
    pub fn checked_div(&self, divisor: f64) -> Result<Vector3> {
        if divisor == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(*self / divisor)
    }

    /// Converts to a nalgebra `Vector3<f64>`
    pub fn to_vector3(&self) -> nalgebra::Vector3<f64> {
        nalgebra::Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from a nalgebra `Vector3<f64>`
    pub fn from_vector3(vec: nalgebra::Vector3<f64>) -> Self {
        Vector3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

/// Formats as `(x,y,z)` using the default `f64` formatting
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// Parses the `(x,y,z)` form produced by `Display`
///
/// Whitespace around the components is ignored and the parentheses are
/// optional.
impl FromStr for Vector3 {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let components = inner
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .map_err(|e| VectorError::Parse(format!("{:?}: {}", part, e)))
            })
            .collect::<Result<Vec<f64>>>()?;

        Vector3::try_from(components.as_slice())
    }
}

/// Orders vectors by magnitude only
///
/// This is intentionally coarser than `==`: vectors of equal length compare
/// as `Equal` here even when their components differ.
impl PartialOrd for Vector3 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.magnitude().partial_cmp(&other.magnitude())
    }
}

impl Hash for Vector3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for component in [self.x, self.y, self.z] {
            // -0.0 == 0.0, so both must feed the same bits
            let component = if component == 0.0 { 0.0 } else { component };
            component.to_bits().hash(state);
        }
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(p: [f64; 3]) -> Self {
        Vector3::new(p[0], p[1], p[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = VectorError;

    fn try_from(values: &[f64]) -> Result<Self> {
        let mut v = Vector3::ZERO;
        v.set_array(values)?;
        Ok(v)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(vec: nalgebra::Vector3<f64>) -> Self {
        Vector3::from_vector3(vec)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        v.to_vector3()
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        DEFAULT_MAX_ULPS
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
