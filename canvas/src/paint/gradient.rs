// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Gradients are sampled per cell. The renderer hands [`Gradient::get_color_at()`] a
//! span (the segment being stroked, or the bounding box of the area being filled) and
//! the cell, the gradient's kind turns that into a percentage, and the color stops are
//! interpolated with the [`colorgrad`] crate.

use std::f64::consts::TAU;

use colorgrad::Gradient as _;

use crate::{Color, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientKind {
    /// Varies along the direction `angle` (radians, clockwise on screen from the
    /// positive x axis).
    Linear { angle: f64 },
    /// Varies with the distance from the middle of the span.
    Radial,
    /// Varies with the angle around the middle of the span, starting at `angle`.
    Conic { angle: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// In `0.0..=1.0`.
    pub offset: f64,
    pub color: Color,
}

/// A gradient with color stops kept sorted by offset.
///
/// ```
/// use r3bl_canvas::{Color, Gradient};
///
/// let mut gradient = Gradient::new_linear(0.0);
/// gradient.add_color_stop(0.0, Color::RED);
/// gradient.add_color_stop(1.0, Color::BLUE);
/// assert_eq!(gradient.color_for(0.0), Color::RED);
/// assert_eq!(gradient.color_for(1.0), Color::BLUE);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    stops: Vec<ColorStop>,
}

impl Gradient {
    #[must_use]
    pub fn new(kind: GradientKind) -> Self {
        Self {
            kind,
            stops: Vec::new(),
        }
    }

    #[must_use]
    pub fn new_linear(angle: f64) -> Self { Self::new(GradientKind::Linear { angle }) }

    #[must_use]
    pub fn new_radial() -> Self { Self::new(GradientKind::Radial) }

    #[must_use]
    pub fn new_conic(angle: f64) -> Self { Self::new(GradientKind::Conic { angle }) }

    /// Builder style [`Gradient::add_color_stop()`].
    #[must_use]
    pub fn with_color_stop(mut self, offset: f64, color: Color) -> Self {
        self.add_color_stop(offset, color);
        self
    }

    /// `offset` is clamped to `0.0..=1.0` (`NaN` becomes `0.0`). A stop at an offset
    /// that is already taken replaces that stop's color.
    pub fn add_color_stop(&mut self, offset: f64, color: Color) {
        let offset = if offset.is_nan() { 0.0 } else { offset.clamp(0.0, 1.0) };
        match self
            .stops
            .binary_search_by(|stop| stop.offset.total_cmp(&offset))
        {
            Ok(index) => self.stops[index].color = color,
            Err(index) => self.stops.insert(index, ColorStop { offset, color }),
        }
    }

    #[must_use]
    pub fn stops(&self) -> &[ColorStop] { &self.stops }

    /// The color at `percent` (clamped to `0.0..=1.0`) along the stops.
    ///
    /// - No stops: [`Color::BLACK`].
    /// - One stop: that stop's color everywhere.
    /// - Otherwise the stops are padded out to `0.0` and `1.0` with the colors of the
    ///   first and last stop, and interpolated in between.
    #[must_use]
    pub fn color_for(&self, percent: f64) -> Color {
        let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 1.0) };

        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Color::BLACK,
        };
        if self.stops.len() == 1 {
            return first.color;
        }

        let mut padded = Vec::with_capacity(self.stops.len() + 2);
        if first.offset > 0.0 {
            padded.push(ColorStop {
                offset: 0.0,
                color: first.color,
            });
        }
        padded.extend_from_slice(&self.stops);
        if last.offset < 1.0 {
            padded.push(ColorStop {
                offset: 1.0,
                color: last.color,
            });
        }

        #[allow(clippy::cast_possible_truncation)]
        let domain: Vec<f32> = padded.iter().map(|stop| stop.offset as f32).collect();
        let colors: Vec<colorgrad::Color> =
            padded.iter().map(|stop| stop.color.into()).collect();

        let result_gradient = colorgrad::GradientBuilder::new()
            .colors(&colors)
            .domain(&domain)
            .build::<colorgrad::LinearGradient>();

        match result_gradient {
            #[allow(clippy::cast_possible_truncation)]
            Ok(gradient) => gradient.at(percent as f32).into(),
            Err(error) => {
                tracing::debug!(
                    message = "Could not build gradient, using the nearest stop",
                    ?error
                );
                nearest_stop(&padded, percent)
            }
        }
    }

    /// The color for `point`, relative to the span from `span_start` to `span_end`.
    #[must_use]
    pub fn get_color_at(&self, span_start: Point, point: Point, span_end: Point) -> Color {
        self.color_for(self.percent_at(span_start, point, span_end))
    }

    fn percent_at(&self, span_start: Point, point: Point, span_end: Point) -> f64 {
        let (sx, sy) = (f64::from(span_start.x), f64::from(span_start.y));
        let (ex, ey) = (f64::from(span_end.x), f64::from(span_end.y));
        let (px, py) = (f64::from(point.x), f64::from(point.y));
        let length = (ex - sx).hypot(ey - sy);
        let (cx, cy) = (f64::midpoint(sx, ex), f64::midpoint(sy, ey));

        match self.kind {
            GradientKind::Linear { angle } => {
                if length == 0.0 {
                    return 0.0;
                }
                let (sin, cos) = angle.sin_cos();
                ((px - sx) * cos + (py - sy) * sin) / length
            }
            GradientKind::Radial => {
                let radius = length / 2.0;
                if radius == 0.0 {
                    return 0.0;
                }
                (px - cx).hypot(py - cy) / radius
            }
            GradientKind::Conic { angle } => {
                ((py - cy).atan2(px - cx) + angle).rem_euclid(TAU) / TAU
            }
        }
    }
}

fn nearest_stop(stops: &[ColorStop], percent: f64) -> Color {
    stops
        .iter()
        .min_by(|lhs, rhs| {
            (lhs.offset - percent)
                .abs()
                .total_cmp(&(rhs.offset - percent).abs())
        })
        .map_or(Color::BLACK, |stop| stop.color)
}
