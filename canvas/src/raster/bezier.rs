// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Flattening of Bézier curves into runs of line targets.
//!
//! - Quadratic curves always use [`QUADRATIC_SEGMENTS`] segments, and skip segment 0
//!   since it is the point the curve starts from.
//! - Cubic curves use a resolution that depends on the surface, see
//!   [`cubic_segments_for()`], and emit segments `0..segments`.
//!
//! Neither emits the final `t = 1` sample.

use crate::{LineTargets, Point, Size};

pub const QUADRATIC_SEGMENTS: u32 = 10;

/// Half the diagonal of `surface`, in cells.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cubic_segments_for(surface: Size) -> u32 { (surface.diagonal() / 2.0).floor() as u32 }

/// Samples `i = 1..QUADRATIC_SEGMENTS` of the curve, each rounded to the nearest cell.
#[must_use]
pub fn flatten_quadratic(from: Point, control: Point, to: Point) -> LineTargets {
    let n = f64::from(QUADRATIC_SEGMENTS);
    (1..QUADRATIC_SEGMENTS)
        .map(|i| {
            let t = f64::from(i) / n;
            let a = (1.0 - t).powi(2);
            let b = 2.0 * t * (1.0 - t);
            let c = t.powi(2);
            let blend = |p0: i32, p1: i32, p2: i32| {
                a * f64::from(p0) + b * f64::from(p1) + c * f64::from(p2)
            };
            Point::new(
                floor_to_cell(blend(from.x, control.x, to.x) + 0.5),
                floor_to_cell(blend(from.y, control.y, to.y) + 0.5),
            )
        })
        .collect()
}

/// Samples `i = 0..segments` of the curve, each floored to a cell.
#[must_use]
pub fn flatten_cubic(
    from: Point,
    control1: Point,
    control2: Point,
    to: Point,
    segments: u32,
) -> LineTargets {
    let n = f64::from(segments);
    (0..segments)
        .map(|i| {
            let t = f64::from(i) / n;
            let a = (1.0 - t).powi(3);
            let b = 3.0 * t * (1.0 - t).powi(2);
            let c = 3.0 * t.powi(2) * (1.0 - t);
            let d = t.powi(3);
            let blend = |p0: i32, p1: i32, p2: i32, p3: i32| {
                a * f64::from(p0) + b * f64::from(p1) + c * f64::from(p2) + d * f64::from(p3)
            };
            Point::new(
                floor_to_cell(blend(from.x, control1.x, control2.x, to.x)),
                floor_to_cell(blend(from.y, control1.y, control2.y, to.y)),
            )
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn floor_to_cell(value: f64) -> i32 { value.floor() as i32 }
