// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sampling of circular and elliptical arcs at one degree steps.

use std::f64::consts::{PI, TAU};

use crate::Point;

pub const ARC_STEP: f64 = PI / 180.0;

/// One full turn of [`ARC_STEP`]s.
const MAX_ARC_STEPS: f64 = 360.0;

/// An elliptical arc. A circular arc has `radius_x == radius_y` and no rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    /// Radians, clockwise on screen.
    pub rotation: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub anticlockwise: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcSamples {
    /// The cell at `start_angle`.
    pub start: Point,
    /// Cells to draw lines to, in order. Consecutive duplicates are dropped, and the
    /// first target is never `start`.
    pub targets: Vec<Point>,
}

impl EllipticalArc {
    #[must_use]
    pub fn new_circular(
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> Self {
        Self {
            center,
            radius_x: radius,
            radius_y: radius,
            rotation: 0.0,
            start_angle,
            end_angle,
            anticlockwise,
        }
    }

    /// The cell at `angle` on the (rotated) ellipse.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        let dx = self.radius_x * cos;
        let dy = self.radius_y * sin;
        let (rot_sin, rot_cos) = self.rotation.sin_cos();
        Point::from_f64(
            f64::from(self.center.x) + dx * rot_cos - dy * rot_sin,
            f64::from(self.center.y) + dx * rot_sin + dy * rot_cos,
        )
    }

    /// Walks from `start_angle` towards `end_angle` in one degree steps (downwards when
    /// `anticlockwise`), finishing on the exact end angle. Angles are not wrapped, so
    /// walking the "wrong" way yields at most the end cell. Sweeps longer than a full
    /// turn are cut to one turn.
    #[must_use]
    pub fn samples(&self) -> ArcSamples {
        let start = self.point_at(self.start_angle);
        let step = if self.anticlockwise { -ARC_STEP } else { ARC_STEP };
        let end_angle = if self.anticlockwise {
            self.end_angle.max(self.start_angle - TAU)
        } else {
            self.end_angle.min(self.start_angle + TAU)
        };

        // Angles are computed from the step index rather than accumulated, since at large
        // magnitudes one degree is below the precision of an f64.
        let sweep = (end_angle - self.start_angle) / step;
        let steps = sweep.ceil();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = if steps >= 1.0 { steps.min(MAX_ARC_STEPS) as u32 } else { 1 };

        let mut targets = Vec::new();
        let mut last = start;
        for i in 1..=steps {
            let angle = if i == steps {
                end_angle
            } else {
                self.start_angle + f64::from(i) * step
            };
            let point = self.point_at(angle);
            if point != last {
                targets.push(point);
                last = point;
            }
        }

        ArcSamples { start, targets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_quarter_circle() {
        let arc = EllipticalArc::new_circular(Point::new(10, 10), 5.0, 0.0, FRAC_PI_2, false);
        let samples = arc.samples();
        assert_eq!(samples.start, Point::new(15, 10));
        assert_eq!(samples.targets.last(), Some(&Point::new(10, 15)));
        assert_ne!(samples.targets.first(), Some(&samples.start));
        for pair in samples.targets.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_anticlockwise_goes_the_other_way() {
        let arc =
            EllipticalArc::new_circular(Point::new(10, 10), 5.0, 0.0, -FRAC_PI_2, true);
        let samples = arc.samples();
        assert_eq!(samples.targets.last(), Some(&Point::new(10, 5)));
        assert!(samples.targets.iter().all(|it| it.y <= 10));
    }

    #[test]
    fn test_large_angles_terminate() {
        let arc = EllipticalArc::new_circular(Point::new(20, 10), 5.0, 1e15, 1e15 + 7.0, false);
        let samples = arc.samples();
        assert!(!samples.targets.is_empty());
        assert!(samples.targets.len() <= 360);
        assert_eq!(
            samples.targets.last(),
            Some(&arc.point_at((1e15 + 7.0_f64).min(1e15 + TAU)))
        );
    }

    #[test]
    fn test_sweep_is_capped_at_one_turn() {
        let arc = EllipticalArc::new_circular(Point::new(20, 10), 8.0, 0.0, 100.0, false);
        let samples = arc.samples();
        assert!(samples.targets.len() <= 360);
        assert_eq!(samples.targets.last(), Some(&arc.point_at(TAU)));
    }

    #[test]
    fn test_empty_sweep() {
        let arc = EllipticalArc::new_circular(Point::new(10, 10), 5.0, 1.0, 1.0, false);
        assert!(arc.samples().targets.is_empty());
    }

    #[test]
    fn test_rotated_ellipse() {
        let arc = EllipticalArc {
            center: Point::new(20, 10),
            radius_x: 8.0,
            radius_y: 3.0,
            rotation: FRAC_PI_2,
            start_angle: 0.0,
            end_angle: TAU,
            anticlockwise: false,
        };
        // The major axis is now vertical.
        assert_eq!(arc.point_at(0.0), Point::new(20, 18));
        let samples = arc.samples();
        assert_eq!(samples.targets.last(), Some(&samples.start));
    }
}
