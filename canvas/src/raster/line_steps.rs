// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bresenham line stepping, used both to draw a line and to decide whether a cell is
//! on it.
//!
//! The classic formulation keeps an error term of `(dx > dy ? dx : -dy) / 2`, which is
//! fractional for odd deltas. Here the error term is kept at double scale so that
//! everything stays in integers.
//!
//! Stepping from `A` to `B` and from `B` to `A` does not always visit the same cells
//! (ties are broken in the direction of travel). So the stepping always runs from the
//! lexicographically smaller endpoint, and [`line_steps()`] reverses the result when
//! asked for the other direction. This makes [`is_point_on_segment()`] symmetric.

use crate::Point;

/// Iterator over the cells of a line, from `start` to `end` inclusive, stepping in the
/// direction of travel. Prefer [`line_steps()`], which is direction independent.
#[derive(Debug, Clone)]
pub struct BresenhamSteps {
    current: Point,
    end: Point,
    dx: i32,
    dy: i32,
    step_x: i32,
    step_y: i32,
    /// Twice the classic error term.
    error: i32,
    done: bool,
}

impl BresenhamSteps {
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = (end.y - start.y).abs();
        Self {
            current: start,
            end,
            dx,
            dy,
            step_x: if start.x < end.x { 1 } else { -1 },
            step_y: if start.y < end.y { 1 } else { -1 },
            error: if dx > dy { dx } else { -dy },
            done: false,
        }
    }
}

impl Iterator for BresenhamSteps {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let it = self.current;
        if it == self.end {
            self.done = true;
            return Some(it);
        }

        let e2 = self.error;
        if e2 > -2 * self.dx {
            self.error -= 2 * self.dy;
            self.current.x += self.step_x;
        }
        if e2 < 2 * self.dy {
            self.error += 2 * self.dx;
            self.current.y += self.step_y;
        }

        Some(it)
    }
}

/// The cells from `start` to `end`, both included, in that order.
#[must_use]
pub fn line_steps(start: Point, end: Point) -> Vec<Point> {
    if start <= end {
        BresenhamSteps::new(start, end).collect()
    } else {
        let mut acc: Vec<Point> = BresenhamSteps::new(end, start).collect();
        acc.reverse();
        acc
    }
}

/// Whether `point` is one of the cells of the line between `start` and `end`. The
/// order of `start` and `end` does not matter.
#[must_use]
pub fn is_point_on_segment(point: Point, start: Point, end: Point) -> bool {
    // Cheap rejection before stepping.
    let (min_x, max_x) = (start.x.min(end.x), start.x.max(end.x));
    let (min_y, max_y) = (start.y.min(end.y), start.y.max(end.y));
    if point.x < min_x || point.x > max_x || point.y < min_y || point.y > max_y {
        return false;
    }

    let (from, to) = if start <= end { (start, end) } else { (end, start) };
    BresenhamSteps::new(from, to).any(|it| it == point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn p(x: i32, y: i32) -> Point { Point::new(x, y) }

    #[test]
    fn test_single_cell() {
        assert_eq!(line_steps(p(3, 3), p(3, 3)), vec![p(3, 3)]);
    }

    #[test]
    fn test_horizontal_and_vertical() {
        assert_eq!(line_steps(p(1, 2), p(4, 2)), vec![p(1, 2), p(2, 2), p(3, 2), p(4, 2)]);
        assert_eq!(line_steps(p(5, 3), p(5, 1)), vec![p(5, 3), p(5, 2), p(5, 1)]);
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(line_steps(p(0, 0), p(3, 3)), vec![p(0, 0), p(1, 1), p(2, 2), p(3, 3)]);
    }

    #[test]
    fn test_shallow_line_matches_classic_bresenham() {
        // err = 5 / 2 = 2.5 in the classic formulation.
        assert_eq!(
            line_steps(p(0, 0), p(5, 2)),
            vec![p(0, 0), p(1, 0), p(2, 1), p(3, 1), p(4, 2), p(5, 2)]
        );
    }

    #[test_case(p(0, 0), p(2, 1))]
    #[test_case(p(0, 0), p(5, 2))]
    #[test_case(p(7, 1), p(2, 9))]
    #[test_case(p(3, 8), p(11, 5))]
    #[test_case(p(10, 10), p(0, 3))]
    fn test_membership_is_symmetric(a: Point, b: Point) {
        let forward = line_steps(a, b);
        let mut backward = line_steps(b, a);
        backward.reverse();
        assert_eq!(forward, backward);

        // Both endpoints, each exactly once.
        assert_eq!(forward.first(), Some(&a));
        assert_eq!(forward.last(), Some(&b));
        assert_eq!(forward.iter().filter(|it| **it == a).count(), 1);
        assert_eq!(forward.iter().filter(|it| **it == b).count(), 1);

        for cell in &forward {
            assert!(is_point_on_segment(*cell, a, b));
            assert!(is_point_on_segment(*cell, b, a));
        }
    }

    #[test]
    fn test_steps_are_adjacent() {
        let steps = line_steps(p(2, 9), p(13, 1));
        for pair in steps.windows(2) {
            assert!((pair[0].x - pair[1].x).abs() <= 1);
            assert!((pair[0].y - pair[1].y).abs() <= 1);
        }
    }

    #[test]
    fn test_point_off_segment() {
        assert!(!is_point_on_segment(p(2, 2), p(0, 0), p(4, 0)));
        assert!(!is_point_on_segment(p(5, 0), p(0, 0), p(4, 0)));
    }
}
