#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vector2, b: Vector2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

const SAMPLES: [(f64, f64); 8] = [
    (1.0, 0.0),
    (0.0, 1.0),
    (3.0, 4.0),
    (-2.5, 7.25),
    (-1.0, -1.0),
    (0.1, -0.3),
    (1e3, 2e-3),
    (-6.0, 0.0),
];

// --- magnitude ---

#[test]
fn magnitude_of_3_4_is_5() {
    assert_eq!(magnitude(v(3.0, 4.0)), 5.0);
}

#[test]
fn magnitude_of_zero_is_zero() {
    assert_eq!(magnitude(Vector2::ZERO), 0.0);
}

#[test]
fn magnitude_ignores_sign() {
    assert_eq!(magnitude(v(-3.0, -4.0)), 5.0);
}

// --- direction ---

#[test]
fn direction_of_axes() {
    assert!(approx_eq(direction_deg(v(1.0, 0.0)), 0.0));
    assert!(approx_eq(direction_deg(v(0.0, 1.0)), 90.0));
    assert!(approx_eq(direction_deg(v(0.0, -1.0)), -90.0));
    assert!(approx_eq(direction_deg(v(-1.0, 0.0)), 180.0));
}

#[test]
fn direction_of_diagonal_is_45() {
    assert!(approx_eq(direction_deg(v(1.0, 1.0)), 45.0));
}

#[test]
fn direction_stays_within_half_turn() {
    for (x, y) in SAMPLES {
        let d = direction_deg(v(x, y));
        assert!((-180.0..=180.0).contains(&d), "{d} out of range for ({x}, {y})");
    }
}

#[test]
fn direction_of_zero_is_zero() {
    assert_eq!(direction_deg(Vector2::ZERO), 0.0);
}

// --- normalize ---

#[test]
fn normalize_has_unit_length() {
    for (x, y) in SAMPLES {
        let n = normalize(v(x, y));
        assert!(approx_eq(magnitude(n), 1.0), "({x}, {y}) -> {n:?}");
    }
}

#[test]
fn normalize_keeps_direction() {
    let n = normalize(v(3.0, 4.0));
    assert!(vec_approx_eq(n, v(0.6, 0.8)));
}

#[test]
fn normalize_zero_is_zero() {
    assert_eq!(normalize(Vector2::ZERO), Vector2::ZERO);
}

// --- add / sub / dot ---

#[test]
fn add_and_sub_componentwise() {
    assert_eq!(add(v(1.0, 2.0), v(3.0, -4.0)), v(4.0, -2.0));
    assert_eq!(sub(v(1.0, 2.0), v(3.0, -4.0)), v(-2.0, 6.0));
}

#[test]
fn operators_match_functions() {
    let a = v(1.5, -2.0);
    let b = v(0.5, 4.0);
    assert_eq!(a + b, add(a, b));
    assert_eq!(a - b, sub(a, b));
    assert_eq!(a * 2.0, v(3.0, -4.0));
}

#[test]
fn dot_rounds_each_product() {
    // x² = 1 + 2⁻²⁹ + 2⁻⁶⁰; the 2⁻⁶⁰ term is lost when the product is rounded
    // before the sum.
    let x = 1.0 + 2f64.powi(-30);
    assert_eq!(dot(v(x, -1.0), v(x, 1.0)), 2f64.powi(-29));
}

#[test]
fn dot_of_orthogonal_is_zero() {
    assert_eq!(dot(v(3.0, 0.0), v(0.0, 4.0)), 0.0);
}

#[test]
fn dot_of_self_is_squared_length() {
    assert_eq!(dot(v(3.0, 4.0), v(3.0, 4.0)), 25.0);
}

// --- project ---

#[test]
fn project_onto_axis_keeps_that_component() {
    assert_eq!(project(v(2.0, 2.0), v(1.0, 0.0)), v(2.0, 0.0));
    assert_eq!(project(v(2.0, 2.0), v(0.0, 4.0)), v(0.0, 2.0));
}

#[test]
fn project_orthogonal_is_zero() {
    assert_eq!(project(v(3.0, 0.0), v(0.0, 4.0)), Vector2::ZERO);
}

#[test]
fn project_onto_zero_is_zero() {
    assert_eq!(project(v(3.0, 4.0), Vector2::ZERO), Vector2::ZERO);
}

#[test]
fn project_is_linear_in_source() {
    let b = v(2.0, -1.0);
    for (x1, y1) in SAMPLES {
        for (x2, y2) in SAMPLES {
            let a1 = v(x1, y1);
            let a2 = v(x2, y2);
            let lhs = project(add(a1, a2), b);
            let rhs = add(project(a1, b), project(a2, b));
            assert!((lhs.x - rhs.x).abs() < 1e-9 && (lhs.y - rhs.y).abs() < 1e-9, "{lhs:?} vs {rhs:?}");
        }
    }
}

// --- decompose ---

#[test]
fn decompose_diagonal_against_x_axis() {
    let d = decompose(v(2.0, 2.0), v(1.0, 0.0));
    assert_eq!(d.parallel, v(2.0, 0.0));
    assert_eq!(d.perpendicular, v(0.0, 2.0));
    assert_eq!(add(d.parallel, d.perpendicular), v(2.0, 2.0));
}

#[test]
fn decompose_perpendicular_is_orthogonal_to_reference() {
    let b = v(1.0, 3.0);
    for (x, y) in SAMPLES {
        let d = decompose(v(x, y), b);
        assert!(dot(d.perpendicular, b).abs() < 1e-9, "({x}, {y}) -> {d:?}");
    }
}

#[test]
fn decompose_parts_sum_to_source() {
    let b = v(4.0, -2.0);
    for (x, y) in SAMPLES {
        let a = v(x, y);
        let d = decompose(a, b);
        assert!(vec_approx_eq(add(d.parallel, d.perpendicular), a));
    }
}

#[test]
fn decompose_against_zero_is_all_perpendicular() {
    let a = v(3.0, -1.0);
    let d = decompose(a, Vector2::ZERO);
    assert_eq!(d.parallel, Vector2::ZERO);
    assert_eq!(d.perpendicular, a);
}

// --- methods ---

#[test]
fn methods_delegate_to_free_functions() {
    let a = v(3.0, 4.0);
    let b = v(1.0, 0.0);
    assert_eq!(a.magnitude(), 5.0);
    assert_eq!(a.normalize(), normalize(a));
    assert_eq!(a.dot(b), 3.0);
    assert_eq!(a.project(b), v(3.0, 0.0));
    assert_eq!(a.decompose(b), decompose(a, b));
    assert!(approx_eq(b.direction_deg(), 0.0));
}
