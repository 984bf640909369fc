// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Is a cell inside a path, or on its stroke?
//!
//! The fill test runs on the path's bounds polygon, a minimal list of vertices built from
//! the path's own lines (subpaths have their own). Consecutive lines with the same slope
//! are merged into one edge. The polygon is computed once and cached until the next
//! mutation.
//!
//! The stroke test steps every line with the same Bresenham stepping that draws it, so
//! a cell is "on the stroke" exactly when rendering would paint it.

use crate::{Operation, Path, Point, raster};

impl Path {
    /// The vertices of the bounds polygon, see the module docs. Only top level
    /// operations contribute.
    pub fn bounds(&self) -> &[Point] { self.bounds_cache.get_or_init(|| self.compute_bounds()) }

    fn compute_bounds(&self) -> Vec<Point> {
        let mut acc: Vec<Point> = Vec::new();
        let mut current = self.start_point;
        let mut current_slope: Option<f64> = None;

        for operation in &self.operations {
            if let Operation::MoveTo(point) = operation {
                current = *point;
                current_slope = None;
                continue;
            }
            for target in operation.line_targets() {
                let slope = f64::from(target.y - current.y) / f64::from(target.x - current.x);
                match acc.last_mut() {
                    Some(last) if current_slope == Some(slope) => *last = target,
                    _ => acc.push(target),
                }
                current = target;
                current_slope = Some(slope);
            }
        }

        acc
    }

    /// Winding number test against [`Path::bounds()`]. Non-zero means inside.
    #[must_use]
    pub fn is_point_in_path(&self, point: Point) -> bool {
        let bounds = self.bounds();
        let Some(&last) = bounds.last() else {
            return false;
        };

        // Nothing outside of the bounding box can be inside the polygon.
        let (min, max) = bounding_box(bounds);
        if point.x < min.x || point.x > max.x || point.y < min.y || point.y > max.y {
            return false;
        }

        let mut winding_number = 0;
        let mut prev = last;
        for &curr in bounds {
            if (curr.y > point.y) != (prev.y > point.y) {
                let is_left = i64::from(prev.x - curr.x) * i64::from(point.y - curr.y)
                    - i64::from(point.x - curr.x) * i64::from(prev.y - curr.y);
                let crosses = if curr.y > point.y { is_left > 0 } else { is_left < 0 };
                if crosses {
                    winding_number += if curr.y > prev.y { 1 } else { -1 };
                }
            }
            prev = curr;
        }

        winding_number != 0
    }

    /// Whether `point` is on one of this path's lines, or on the stroke of one of its
    /// subpaths. Masks are not strokes.
    #[must_use]
    pub fn is_point_in_stroke(&self, point: Point) -> bool {
        let mut current = self.start_point;
        for operation in &self.operations {
            match operation {
                Operation::MoveTo(target) => current = *target,
                Operation::Subpath(child) => {
                    if child.is_point_in_stroke(point) {
                        return true;
                    }
                    current = child.current_point();
                }
                Operation::MaskSubpath(_) => {}
                Operation::LineTo(_)
                | Operation::QuadCurveTo { .. }
                | Operation::CubicCurveTo { .. } => {
                    for target in operation.line_targets() {
                        if raster::is_point_on_segment(point, current, target) {
                            return true;
                        }
                        current = target;
                    }
                }
            }
        }
        false
    }

    /// Whether `point` is on the line from `start` to `end`, as it would be drawn.
    #[must_use]
    pub fn is_point_on_segment(point: Point, start: Point, end: Point) -> bool {
        raster::is_point_on_segment(point, start, end)
    }

    /// Top left and bottom right corners of the bounds polygon, if it has vertices.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let bounds = self.bounds();
        (!bounds.is_empty()).then(|| bounding_box(bounds))
    }
}

/// `points` must not be empty.
fn bounding_box(points: &[Point]) -> (Point, Point) {
    points.iter().fold(
        (Point::new(i32::MAX, i32::MAX), Point::new(i32::MIN, i32::MIN)),
        |(min, max), it| {
            (
                Point::new(min.x.min(it.x), min.y.min(it.y)),
                Point::new(max.x.max(it.x), max.y.max(it.y)),
            )
        },
    )
}
