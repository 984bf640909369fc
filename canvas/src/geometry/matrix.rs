// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Point, round_to_cell};

/// A 2D affine transform, laid out like the Canvas 2D `DOMMatrix`:
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Matrix {
    fn default() -> Self { Self::identity() }
}

impl Matrix {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[must_use]
    pub const fn identity() -> Self { Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0) }

    #[must_use]
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self { Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0) }

    /// Clockwise on screen, since rows grow downwards.
    #[must_use]
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// `self` applied after `other`.
    #[must_use]
    pub fn then(&self, other: &Matrix) -> Self {
        Self::new(
            other.a * self.a + other.c * self.b,
            other.b * self.a + other.d * self.b,
            other.a * self.c + other.c * self.d,
            other.b * self.c + other.d * self.d,
            other.a * self.e + other.c * self.f + other.e,
            other.b * self.e + other.d * self.f + other.f,
        )
    }

    /// Maps `point` and snaps the result back to the lattice. Both rows read the
    /// original coordinates.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let x = f64::from(point.x);
        let y = f64::from(point.y);
        Point::new(
            round_to_cell(self.a * x + self.c * y + self.e),
            round_to_cell(self.b * x + self.d * y + self.f),
        )
    }
}
