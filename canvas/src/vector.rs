//! Closed-form 2D vector arithmetic.
//!
//! Every operation here is pure and total over finite components. Degenerate
//! inputs (the zero vector) produce the zero vector instead of failing, so
//! callers never need to branch before drawing a derived vector.

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A vector in data space (units, y pointing up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        magnitude(self)
    }

    /// Polar angle from the positive x-axis, in degrees within [-180, 180].
    #[must_use]
    pub fn direction_deg(self) -> f64 {
        direction_deg(self)
    }

    #[must_use]
    pub fn normalize(self) -> Self {
        normalize(self)
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        dot(self, other)
    }

    /// Projection of `self` onto `onto`.
    #[must_use]
    pub fn project(self, onto: Self) -> Self {
        project(self, onto)
    }

    #[must_use]
    pub fn decompose(self, reference: Self) -> Decomposition {
        decompose(self, reference)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        sub(self, rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Orthogonal split of a vector against a reference direction.
///
/// `parallel + perpendicular` reproduces the source vector exactly because
/// `perpendicular` is derived by subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Decomposition {
    pub parallel: Vector2,
    pub perpendicular: Vector2,
}

#[must_use]
pub fn magnitude(v: Vector2) -> f64 {
    v.x.hypot(v.y)
}

#[must_use]
pub fn direction_deg(v: Vector2) -> f64 {
    v.y.atan2(v.x).to_degrees()
}

/// Unit vector in the direction of `v`, or the zero vector when `v` has no length.
#[must_use]
pub fn normalize(v: Vector2) -> Vector2 {
    let m = magnitude(v);
    if m == 0.0 {
        return Vector2::ZERO;
    }
    Vector2::new(v.x / m, v.y / m)
}

#[must_use]
pub fn add(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x + b.x, a.y + b.y)
}

#[must_use]
pub fn sub(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x - b.x, a.y - b.y)
}

#[must_use]
pub fn dot(a: Vector2, b: Vector2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// `(a·b / b·b) * b`, or the zero vector when `b` is zero.
#[must_use]
pub fn project(a: Vector2, b: Vector2) -> Vector2 {
    let denom = dot(b, b);
    if denom == 0.0 {
        return Vector2::ZERO;
    }
    b * (dot(a, b) / denom)
}

#[must_use]
pub fn decompose(a: Vector2, b: Vector2) -> Decomposition {
    let parallel = project(a, b);
    Decomposition { parallel, perpendicular: a - parallel }
}
