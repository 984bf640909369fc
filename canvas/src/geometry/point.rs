// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::{Add, Sub}};

use crate::{CanvasError, CanvasResult, Matrix, Size};

/// A lattice point, ie the integer address of one character cell. `x` is the column
/// and `y` is the row, both zero based.
///
/// A [`Point`] on its own is not bound to any surface. Bounds are checked when the point
/// is recorded into a [`crate::Path`], or eagerly with [`Point::try_new_within()`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Round a coordinate to the nearest cell. Halves round away from zero, so that
/// rounding `v` and `-v` gives mirrored results.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_cell(value: f64) -> i32 { value.round() as i32 }

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self { Self { x, y } }

    #[must_use]
    pub const fn zero() -> Self { Self { x: 0, y: 0 } }

    /// Snap a fractional position to the lattice.
    #[must_use]
    pub fn from_f64(x: f64, y: f64) -> Self { Self::new(round_to_cell(x), round_to_cell(y)) }

    /// Snap a fractional position to the lattice, and check that it is inside `surface`.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::InvalidArgument`] if a coordinate is not finite.
    /// - [`CanvasError::OutOfBounds`] if the rounded point is outside of `surface`.
    pub fn try_new_within(x: f64, y: f64, surface: Size) -> CanvasResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(CanvasError::invalid_argument(format!(
                "Point coordinates must be finite, got {x}, {y}"
            )));
        }
        Self::from_f64(x, y).ensure_within(surface)
    }

    /// `0 <= x < width` and `0 <= y < height`.
    #[must_use]
    pub fn is_within(&self, surface: Size) -> bool {
        self.x >= 0 && self.x < surface.width && self.y >= 0 && self.y < surface.height
    }

    /// # Errors
    ///
    /// Returns [`CanvasError::OutOfBounds`] naming this point if it is outside of
    /// `surface`.
    pub fn ensure_within(self, surface: Size) -> CanvasResult<Self> {
        if self.is_within(surface) {
            Ok(self)
        } else {
            Err(CanvasError::OutOfBounds {
                x: self.x,
                y: self.y,
                columns: surface.width,
                rows: surface.height,
            })
        }
    }

    /// The cell in the middle of `surface`.
    #[must_use]
    pub fn center_of(surface: Size) -> Self {
        Self::from_f64(
            f64::from(surface.width) / 2.0,
            f64::from(surface.height) / 2.0,
        )
    }

    /// The top left corner that centers a box of `size` inside of `surface`.
    #[must_use]
    pub fn center_for(size: Size, surface: Size) -> Self {
        Self::from_f64(
            f64::from(surface.width) / 2.0 - f64::from(size.width) / 2.0,
            f64::from(surface.height) / 2.0 - f64::from(size.height) / 2.0,
        )
    }

    /// Saturates at the `i32` range, which is far outside of any surface, so an
    /// overflowing move is reported as out of bounds instead of wrapping.
    #[must_use]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    #[must_use]
    pub fn transformed(&self, matrix: &Matrix) -> Self { matrix.apply(*self) }

    #[must_use]
    pub fn distance_to(&self, other: Point) -> f64 {
        f64::from(other.x - self.x).hypot(f64::from(other.y - self.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self { Self::new(x, y) }
}

impl From<Size> for Point {
    fn from(size: Size) -> Self { Self::new(size.width, size.height) }
}

/// Parse a "point-like" slice of coordinates, eg from a config file or the command
/// line.
impl TryFrom<&[f64]> for Point {
    type Error = CanvasError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match value {
            [x, y] if x.is_finite() && y.is_finite() => Ok(Self::from_f64(*x, *y)),
            _ => Err(CanvasError::invalid_argument(format!(
                "A point needs exactly 2 finite coordinates, got {value:?}"
            ))),
        }
    }
}

impl Add<Size> for Point {
    type Output = Point;

    fn add(self, rhs: Size) -> Self::Output { self.translated(rhs.width, rhs.height) }
}

impl Sub for Point {
    type Output = Size;

    fn sub(self, rhs: Point) -> Self::Output {
        Size::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(2.4, 2 ; "rounds down")]
    #[test_case(2.5, 3 ; "half rounds up")]
    #[test_case(-2.5, -3 ; "negative half rounds away from zero")]
    fn test_round_to_cell(value: f64, expected: i32) {
        assert_eq!(round_to_cell(value), expected);
    }

    #[test]
    fn test_is_within() {
        let surface = Size::new(10, 5);
        assert!(Point::new(0, 0).is_within(surface));
        assert!(Point::new(9, 4).is_within(surface));
        assert!(!Point::new(10, 4).is_within(surface));
        assert!(!Point::new(9, 5).is_within(surface));
        assert!(!Point::new(-1, 0).is_within(surface));
    }

    #[test]
    fn test_try_new_within() {
        let surface = Size::new(10, 5);
        assert_eq!(
            Point::try_new_within(3.6, 1.2, surface).unwrap(),
            Point::new(4, 1)
        );

        let error = Point::try_new_within(12.0, 1.0, surface).unwrap_err();
        assert!(matches!(
            error,
            CanvasError::OutOfBounds {
                x: 12,
                y: 1,
                columns: 10,
                rows: 5
            }
        ));

        let error = Point::try_new_within(f64::NAN, 1.0, surface).unwrap_err();
        assert!(matches!(error, CanvasError::InvalidArgument { .. }));
    }

    #[test]
    fn test_point_like_parsing() {
        let ok: &[f64] = &[1.0, 2.0];
        assert_eq!(Point::try_from(ok).unwrap(), Point::new(1, 2));

        let too_short: &[f64] = &[1.0];
        assert!(matches!(
            Point::try_from(too_short),
            Err(CanvasError::InvalidArgument { .. })
        ));

        let too_long: &[f64] = &[1.0, 2.0, 3.0];
        assert!(Point::try_from(too_long).is_err());
    }

    #[test]
    fn test_center() {
        let surface = Size::new(80, 24);
        assert_eq!(Point::center_of(surface), Point::new(40, 12));
        assert_eq!(
            Point::center_for(Size::new(10, 4), surface),
            Point::new(35, 10)
        );
    }

    #[test]
    fn test_point_plus_size() {
        assert_eq!(Point::new(2, 2) + Size::new(4, 3), Point::new(6, 5));
        assert_eq!(Point::new(6, 5) - Point::new(2, 2), Size::new(4, 3));
    }

    #[test]
    fn test_huge_offsets_saturate() {
        assert_eq!(
            Point::new(1, 1).translated(i32::MAX, i32::MIN),
            Point::new(i32::MAX, i32::MIN + 1)
        );
        assert_eq!(
            Point::new(3, 3) + Size::new(i32::MAX, 0),
            Point::new(i32::MAX, 3)
        );
        assert!(!Point::new(3, 3).translated(i32::MAX, 0).is_within(Size::new(20, 10)));
    }
}
