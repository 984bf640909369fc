// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shape helpers. Each one builds a complete child path and records it in one step, so
//! a shape that doesn't fit on the surface leaves the parent untouched.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::{CanvasError, CanvasResult, Operation, Paint, Path, Point, Size,
            raster::EllipticalArc};

/// Control point distance, as a fraction of the radius, for a cubic Bézier that
/// approximates a quarter circle.
pub const KAPPA: f64 = 4.0 * (std::f64::consts::SQRT_2 - 1.0) / 3.0;

/// Radii of the four corners of a [`Path::round_rect()`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    #[must_use]
    pub const fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }
}

/// | Values         | Meaning                                                      |
/// | :------------- | :----------------------------------------------------------- |
/// | `[r]`          | Every corner                                                 |
/// | `[a, b]`       | `a` for top left and bottom right, `b` for the other two     |
/// | `[a, b, c, d]` | Top left, top right, bottom right, bottom left               |
///
/// Anything else, negative radii, and non-finite radii are rejected.
impl TryFrom<&[f64]> for CornerRadii {
    type Error = CanvasError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        if value.iter().any(|it| !it.is_finite() || *it < 0.0) {
            return Err(CanvasError::invalid_argument(format!(
                "Corner radii must be finite and not negative, got {value:?}"
            )));
        }
        match *value {
            [radius] => Ok(Self::uniform(radius)),
            [diagonal, anti_diagonal] => Ok(Self {
                top_left: diagonal,
                top_right: anti_diagonal,
                bottom_right: diagonal,
                bottom_left: anti_diagonal,
            }),
            [top_left, top_right, bottom_right, bottom_left] => Ok(Self {
                top_left,
                top_right,
                bottom_right,
                bottom_left,
            }),
            _ => Err(CanvasError::invalid_argument(format!(
                "Invalid radii: expected 1, 2 or 4 values, got {}",
                value.len()
            ))),
        }
    }
}

fn ensure_radius(name: &str, radius: f64) -> CanvasResult<()> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(CanvasError::invalid_argument(format!(
            "{name} must be finite and not negative, got {radius}"
        )))
    }
}

fn ensure_finite(name: &str, value: f64) -> CanvasResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CanvasError::invalid_argument(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

impl Path {
    fn ensure_open(&self) -> CanvasResult<()> {
        if self.closed {
            Err(CanvasError::ClosedPath)
        } else {
            Ok(())
        }
    }

    fn new_child_at(&self, paint: Option<Paint>, start: Point) -> CanvasResult<Path> {
        let paint = paint.map_or_else(|| self.paint.clone(), Paint::into_shared);
        Path::new_at(paint, self.surface.clone(), start)
    }

    /// Down, right, up, and back to `start`.
    fn rect_child(&self, paint: Option<Paint>, start: Point, size: Size) -> CanvasResult<Path> {
        let mut child = self.new_child_at(paint, start)?;
        child.line_to(start.translated(0, size.height))?;
        child.line_to(start + size)?;
        child.line_to(start.translated(size.width, 0))?;
        child.close()?;
        Ok(child)
    }

    /// A closed rectangular subpath, with corners at `start` and `start + size`.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::ClosedPath`] if this path is closed.
    /// - [`CanvasError::OutOfBounds`] if a corner is outside of the surface.
    pub fn rect(&mut self, start: Point, size: Size) -> CanvasResult<()> {
        self.ensure_open()?;
        let child = self.rect_child(None, start, size)?;
        self.record(Operation::Subpath(Box::new(child)))
    }

    /// Erase a rectangle, stroke and interior, when this path is rendered.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::ClosedPath`] if this path is closed.
    /// - [`CanvasError::OutOfBounds`] if a corner is outside of the surface.
    pub fn clear_rect(&mut self, start: Point, size: Size) -> CanvasResult<()> {
        self.ensure_open()?;
        let child = self.rect_child(Some(Paint::new_eraser()), start, size)?;
        self.record(Operation::MaskSubpath(Box::new(child)))
    }

    /// Erase the whole surface.
    ///
    /// # Errors
    ///
    /// [`CanvasError::ClosedPath`] if this path is closed.
    pub fn clear(&mut self) -> CanvasResult<()> {
        let surface = self.surface_size();
        self.clear_rect(
            Point::zero(),
            Size::new(surface.width - 1, surface.height - 1),
        )
    }

    /// A closed rectangle whose corners are quadratic curves. See [`CornerRadii`] for
    /// what `radii` may hold.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::InvalidArgument`] if `radii` is malformed.
    /// - [`CanvasError::ClosedPath`] if this path is closed.
    /// - [`CanvasError::OutOfBounds`] if the shape is outside of the surface.
    pub fn round_rect(&mut self, start: Point, size: Size, radii: &[f64]) -> CanvasResult<()> {
        let radii = CornerRadii::try_from(radii)?;
        self.ensure_open()?;

        let x = f64::from(start.x);
        let y = f64::from(start.y);
        let right = x + f64::from(size.width);
        let bottom = y + f64::from(size.height);
        let CornerRadii {
            top_left: tl,
            top_right: tr,
            bottom_right: br,
            bottom_left: bl,
        } = radii;

        let mut child = self.new_child_at(None, start)?;
        child.line_to(Point::from_f64(right - tr, y))?;
        child.quadratic_curve_to(Point::from_f64(right, y), Point::from_f64(right, y + tr))?;
        child.line_to(Point::from_f64(right, bottom - br))?;
        child.quadratic_curve_to(
            Point::from_f64(right, bottom),
            Point::from_f64(right - br, bottom),
        )?;
        child.line_to(Point::from_f64(x + bl, bottom))?;
        child.quadratic_curve_to(Point::from_f64(x, bottom), Point::from_f64(x, bottom - bl))?;
        child.line_to(Point::from_f64(x, y + tl))?;
        child.quadratic_curve_to(Point::from_f64(x, y), Point::from_f64(x + tl, y))?;
        child.close()?;

        self.record(Operation::Subpath(Box::new(child)))
    }

    /// A closed circular arc subpath. Angles are in radians, and `anticlockwise` walks
    /// from `start_angle` down to `end_angle`.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::InvalidArgument`] if `radius` is negative, or a value is not
    ///   finite.
    /// - [`CanvasError::ClosedPath`] if this path is closed.
    /// - [`CanvasError::OutOfBounds`] if the arc leaves the surface.
    pub fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> CanvasResult<()> {
        ensure_radius("Radius", radius)?;
        self.record_arc(EllipticalArc::new_circular(
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        ))
    }

    /// Like [`Path::arc()`] with separate radii, rotated by `rotation` radians.
    ///
    /// # Errors
    ///
    /// Same as [`Path::arc()`].
    #[allow(clippy::too_many_arguments)]
    pub fn ellipse(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> CanvasResult<()> {
        ensure_radius("Radius x", radius_x)?;
        ensure_radius("Radius y", radius_y)?;
        ensure_finite("Rotation", rotation)?;
        self.record_arc(EllipticalArc {
            center,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
            anticlockwise,
        })
    }

    fn record_arc(&mut self, arc: EllipticalArc) -> CanvasResult<()> {
        ensure_finite("Start angle", arc.start_angle)?;
        ensure_finite("End angle", arc.end_angle)?;
        self.ensure_open()?;

        let samples = arc.samples();
        let mut child = self.new_child_at(None, samples.start)?;
        for target in samples.targets {
            child.line_to(target)?;
        }
        child.close()?;

        self.record(Operation::Subpath(Box::new(child)))
    }

    /// A cubic curve from the current point to `control2`, bent towards `control1` like
    /// a rounded corner of `radius`. The two Bézier controls are offset perpendicular to
    /// the `control1` to `control2` direction, by `radius * KAPPA`.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::InvalidArgument`] if `radius` is negative or not finite.
    /// - [`CanvasError::ClosedPath`] if this path is closed.
    /// - [`CanvasError::OutOfBounds`] if a control lands outside of the surface.
    pub fn arc_to(&mut self, control1: Point, control2: Point, radius: f64) -> CanvasResult<()> {
        ensure_radius("Radius", radius)?;

        let angle = f64::from(control1.y - control2.y).atan2(f64::from(control1.x - control2.x));
        let offset = |turn: f64| {
            let (sin, cos) = (angle + turn).sin_cos();
            (radius * KAPPA * cos, radius * KAPPA * sin)
        };
        let (dx1, dy1) = offset(FRAC_PI_2);
        let (dx2, dy2) = offset(PI + FRAC_PI_2);

        self.bezier_curve_to(
            Point::from_f64(f64::from(control1.x) + dx1, f64::from(control1.y) + dy1),
            Point::from_f64(f64::from(control2.x) + dx2, f64::from(control2.y) + dy2),
            control2,
        )
    }
}
