//! Property checks for Vector3 over a fixed set of sample vectors

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rstest::{fixture, rstest};
use std::f64::consts::PI;
use vector3d::{angle, cross_product, distance, dot_product, interpolate, Vector3};

/// A spread of magnitudes, signs and directions
#[fixture]
fn samples() -> Vec<Vector3> {
    vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, -2.0, 0.0),
        Vector3::new(3.0, 4.0, 0.0),
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-0.25, 7.5, -3.125),
        Vector3::new(1e-8, -1e-8, 2e-8),
        Vector3::new(1234.5, -678.25, 42.0),
    ]
}

#[rstest]
fn normalize_yields_unit_magnitude(samples: Vec<Vector3>) {
    for v in samples {
        let mut unit = v;
        unit.normalize();
        assert_relative_eq!(unit.magnitude(), 1.0, epsilon = 1e-14);
    }

    let mut zero = Vector3::ZERO;
    zero.normalize();
    assert_eq!(zero, Vector3::ZERO);
}

#[rstest]
fn dot_with_self_is_magnitude_squared(samples: Vec<Vector3>) {
    for v in samples {
        assert_relative_eq!(
            dot_product(&v, &v),
            v.magnitude().powi(2),
            max_relative = 1e-14
        );
    }
}

#[rstest]
fn cross_is_anticommutative(samples: Vec<Vector3>) {
    for a in &samples {
        for b in &samples {
            assert_eq!(cross_product(a, b), -cross_product(b, a));
        }
    }
}

#[rstest]
fn cross_is_perpendicular_to_inputs(samples: Vec<Vector3>) {
    for a in &samples {
        for b in &samples {
            let c = *a * *b;
            let scale = a.magnitude() * b.magnitude() * c.magnitude();
            assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-12 * scale.max(1.0));
            assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-12 * scale.max(1.0));
        }
    }
}

#[rstest]
fn distance_is_magnitude_of_difference(samples: Vec<Vector3>) {
    for a in &samples {
        for b in &samples {
            assert_eq!(distance(a, b), (*a - *b).magnitude());
        }
    }
}

#[rstest]
fn equality_is_exact_and_an_equivalence(samples: Vec<Vector3>) {
    for a in &samples {
        let b = *a;
        let c = Vector3::from(a.to_array());
        // Reflexive, symmetric, transitive
        assert_eq!(*a, *a);
        assert!(*a == b && b == *a);
        assert!(*a == b && b == c && *a == c);
    }

    assert_eq!(Vector3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0));
    assert_ne!(Vector3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0000001));
}

#[rstest]
fn angle_leaves_inputs_untouched(samples: Vec<Vector3>) {
    for a in &samples {
        for b in &samples {
            let (a_before, b_before) = (*a, *b);
            let theta = angle(a, b);
            assert!((0.0..=PI).contains(&theta), "angle {} out of range", theta);
            assert_eq!(*a, a_before);
            assert_eq!(*b, b_before);
        }
    }
}

#[test]
fn ordering_compares_magnitude() {
    assert!(Vector3::new(3.0, 4.0, 0.0) > Vector3::new(1.0, 0.0, 0.0));
    assert!(Vector3::new(-10.0, 0.0, 0.0) > Vector3::new(1.0, 1.0, 1.0));
    assert!(Vector3::new(0.0, 3.0, 4.0) <= Vector3::new(5.0, 0.0, 0.0));
    assert!(Vector3::new(0.0, 3.0, 4.0) >= Vector3::new(5.0, 0.0, 0.0));
    assert_ne!(Vector3::new(0.0, 3.0, 4.0), Vector3::new(5.0, 0.0, 0.0));
}

#[test]
fn array_round_trip() {
    let v = Vector3::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
}

#[test]
fn unit_x_cross_unit_y_is_unit_z() {
    assert_eq!(
        Vector3::new(1.0, 0.0, 0.0) * Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0)
    );
}

#[test]
fn interpolate_midpoint_uses_symmetric_z() {
    let mid = interpolate(&Vector3::ZERO, &Vector3::new(10.0, 10.0, 10.0), 0.5);
    assert_eq!(mid.x, 5.0);
    assert_eq!(mid.y, 5.0);
    assert_eq!(mid.z, 5.0);
}

#[test]
fn angle_between_axes_is_right_angle() {
    assert_relative_eq!(
        angle(&Vector3::new(1.0, 0.0, 0.0), &Vector3::new(0.0, 1.0, 0.0)),
        PI / 2.0
    );
}
