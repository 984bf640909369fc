// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cell::OnceCell;

use crate::{CanvasError, CanvasResult, Matrix, Operation, Point, SharedPaint,
            SharedSurface, Size, raster};

/// A recorded drawing: an ordered list of [`Operation`]s, bound to a paint and to the
/// surface it will be drawn on.
///
/// - Operations are drawn in the order they were recorded.
/// - Once [`Path::close()`] is called nothing else can be recorded, until
///   [`Path::reset()`].
/// - Every point stored in the path (and in its subpaths) is inside the surface.
/// - A call that fails leaves the path as it was.
///
/// A closed path is filled when it is rendered, see [`crate::path::render`].
#[derive(Debug, Clone)]
pub struct Path {
    pub(crate) operations: Vec<Operation>,
    pub(crate) start_point: Point,
    pub(crate) closed: bool,
    pub(crate) paint: SharedPaint,
    pub(crate) surface: SharedSurface,
    /// Lazily computed by [`Path::bounds()`], cleared by every mutation.
    pub(crate) bounds_cache: OnceCell<Vec<Point>>,
}

impl Path {
    /// A path that starts at `(0, 0)`.
    pub fn new(paint: SharedPaint, surface: SharedSurface) -> Self {
        Self {
            operations: Vec::new(),
            start_point: Point::zero(),
            closed: false,
            paint,
            surface,
            bounds_cache: OnceCell::new(),
        }
    }

    /// # Errors
    ///
    /// [`CanvasError::OutOfBounds`] if `start_point` is outside of `surface`.
    pub fn new_at(
        paint: SharedPaint,
        surface: SharedSurface,
        start_point: Point,
    ) -> CanvasResult<Self> {
        let start_point = start_point.ensure_within(surface.size())?;
        let mut it = Self::new(paint, surface);
        it.start_point = start_point;
        Ok(it)
    }

    #[must_use]
    pub fn operations(&self) -> &[Operation] { &self.operations }

    #[must_use]
    pub fn start_point(&self) -> Point { self.start_point }

    #[must_use]
    pub fn is_closed(&self) -> bool { self.closed }

    #[must_use]
    pub fn paint(&self) -> &SharedPaint { &self.paint }

    #[must_use]
    pub fn surface(&self) -> &SharedSurface { &self.surface }

    /// Queried live, so it follows a resized terminal.
    #[must_use]
    pub fn surface_size(&self) -> Size { self.surface.size() }

    /// Where the next line starts: the last point of the last operation that has
    /// points, or the start point if there is none. Subpaths and masks don't move it.
    #[must_use]
    pub fn current_point(&self) -> Point {
        self.operations
            .iter()
            .rev()
            .find_map(Operation::end_point)
            .unwrap_or(self.start_point)
    }

    /// Append `operation`. All of its points must be inside the surface.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::ClosedPath`] if the path is closed.
    /// - [`CanvasError::OutOfBounds`] naming the first point outside of the surface.
    pub fn record(&mut self, operation: Operation) -> CanvasResult<()> {
        if self.closed {
            return Err(CanvasError::ClosedPath);
        }

        let surface = self.surface_size();
        for point in operation.points() {
            point.ensure_within(surface)?;
        }

        tracing::trace!(message = "record", kind = %operation.kind(), count = self.operations.len() + 1);
        self.operations.push(operation);
        self.invalidate_bounds();
        Ok(())
    }

    /// # Errors
    ///
    /// See [`Path::record()`].
    pub fn move_to(&mut self, point: Point) -> CanvasResult<()> {
        self.record(Operation::MoveTo(point))
    }

    /// # Errors
    ///
    /// See [`Path::record()`].
    pub fn line_to(&mut self, point: Point) -> CanvasResult<()> {
        self.record(Operation::LineTo(point))
    }

    /// A quadratic Bézier curve from the current point.
    ///
    /// # Errors
    ///
    /// See [`Path::record()`].
    pub fn quadratic_curve_to(&mut self, control: Point, to: Point) -> CanvasResult<()> {
        let from = self.current_point();
        self.record(Operation::QuadCurveTo { from, control, to })
    }

    /// A cubic Bézier curve from the current point. It is flattened at a resolution
    /// that depends on the size of the surface right now.
    ///
    /// # Errors
    ///
    /// See [`Path::record()`].
    pub fn bezier_curve_to(
        &mut self,
        control1: Point,
        control2: Point,
        to: Point,
    ) -> CanvasResult<()> {
        let from = self.current_point();
        let segments = raster::cubic_segments_for(self.surface_size());
        self.record(Operation::CubicCurveTo {
            from,
            control1,
            control2,
            to,
            segments,
        })
    }

    /// Open a subpath at the current point, with the same paint.
    ///
    /// # Errors
    ///
    /// [`CanvasError::ClosedPath`] if this path is closed.
    pub fn begin_path(&mut self) -> CanvasResult<&mut Path> {
        self.begin_path_with_paint(self.paint.clone())
    }

    /// Open a subpath at the current point, with its own paint.
    ///
    /// # Errors
    ///
    /// [`CanvasError::ClosedPath`] if this path is closed.
    pub fn begin_path_with_paint(&mut self, paint: SharedPaint) -> CanvasResult<&mut Path> {
        let start_point = self.current_point();
        self.push_subpath(Path::new_at(paint, self.surface.clone(), start_point)?)
    }

    /// Open a subpath that starts at `point`.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::ClosedPath`] if this path is closed.
    /// - [`CanvasError::OutOfBounds`] if `point` is outside of the surface.
    pub fn subpath_at(&mut self, point: Point) -> CanvasResult<&mut Path> {
        self.push_subpath(Path::new_at(self.paint.clone(), self.surface.clone(), point)?)
    }

    fn push_subpath(&mut self, child: Path) -> CanvasResult<&mut Path> {
        self.record(Operation::Subpath(Box::new(child)))?;
        match self.operations.last_mut().and_then(Operation::child_mut) {
            Some(child) => Ok(child),
            None => Err(CanvasError::invalid_argument("Subpath was not recorded")),
        }
    }

    /// Add `path` as a subpath, optionally transformed by `transform` first.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::ClosedPath`] if this path is closed.
    /// - [`CanvasError::OutOfBounds`] if `transform` moves a point of `path` outside of
    ///   its surface.
    pub fn add_path(&mut self, mut path: Path, transform: Option<&Matrix>) -> CanvasResult<()> {
        if self.closed {
            return Err(CanvasError::ClosedPath);
        }
        if let Some(matrix) = transform {
            path.transform(matrix)?;
        }
        self.record(Operation::Subpath(Box::new(path)))
    }

    /// Add `path` as a mask. Whatever it covers is erased when this path is rendered.
    ///
    /// # Errors
    ///
    /// [`CanvasError::ClosedPath`] if this path is closed.
    pub fn clip(&mut self, path: Path) -> CanvasResult<()> {
        self.record(Operation::MaskSubpath(Box::new(path)))
    }

    /// Draw a line back to the start point, if the current point is elsewhere, and stop
    /// accepting operations.
    ///
    /// # Errors
    ///
    /// [`CanvasError::ClosedPath`] if this path is already closed.
    pub fn close(&mut self) -> CanvasResult<()> {
        if self.closed {
            return Err(CanvasError::ClosedPath);
        }
        if self.current_point() != self.start_point {
            self.line_to(self.start_point)?;
        }
        self.closed = true;
        Ok(())
    }

    /// Drop every operation and reopen the path, optionally moving its start point.
    ///
    /// # Errors
    ///
    /// [`CanvasError::OutOfBounds`] if `start_point` is outside of the surface, in
    /// which case nothing is reset.
    pub fn reset(&mut self, start_point: Option<Point>) -> CanvasResult<()> {
        let start_point = start_point
            .unwrap_or(self.start_point)
            .ensure_within(self.surface_size())?;
        self.operations.clear();
        self.closed = false;
        self.start_point = start_point;
        self.invalidate_bounds();
        Ok(())
    }

    pub(crate) fn invalidate_bounds(&mut self) { self.bounds_cache = OnceCell::new(); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedSurface, OperationKind, Paint};
    use pretty_assertions::assert_eq;

    fn new_path() -> Path {
        Path::new(Paint::default().into_shared(), FixedSurface::new_shared(20, 10))
    }

    #[test]
    fn test_close_twice_fails() {
        let mut path = new_path();
        path.line_to(Point::new(4, 0)).unwrap();
        path.line_to(Point::new(4, 4)).unwrap();
        path.close().unwrap();
        assert!(path.is_closed());
        assert!(matches!(path.close(), Err(CanvasError::ClosedPath)));
    }

    #[test]
    fn test_close_adds_line_back_to_start() {
        let mut path = new_path();
        path.line_to(Point::new(4, 0)).unwrap();
        path.close().unwrap();
        assert_eq!(path.operations().len(), 2);
        assert_eq!(path.current_point(), Point::zero());
    }

    #[test]
    fn test_close_at_start_adds_nothing() {
        let mut path = new_path();
        path.close().unwrap();
        assert!(path.operations().is_empty());
    }

    #[test]
    fn test_record_on_closed_path_fails() {
        let mut path = new_path();
        path.close().unwrap();
        assert!(matches!(
            path.line_to(Point::new(1, 1)),
            Err(CanvasError::ClosedPath)
        ));
        assert!(matches!(path.begin_path(), Err(CanvasError::ClosedPath)));
    }

    #[test]
    fn test_out_of_bounds_record_does_not_mutate() {
        let mut path = new_path();
        path.line_to(Point::new(1, 1)).unwrap();

        let result = path.line_to(Point::new(20, 1));
        assert!(matches!(
            result,
            Err(CanvasError::OutOfBounds {
                x: 20,
                y: 1,
                columns: 20,
                rows: 10
            })
        ));

        let result = path.quadratic_curve_to(Point::new(5, 5), Point::new(5, -1));
        assert!(result.is_err());
        assert_eq!(path.operations().len(), 1);
    }

    #[test]
    fn test_current_point() {
        let mut path = new_path();
        assert_eq!(path.current_point(), Point::zero());

        path.move_to(Point::new(3, 3)).unwrap();
        assert_eq!(path.current_point(), Point::new(3, 3));

        path.subpath_at(Point::new(9, 9)).unwrap();
        // Subpaths don't move the current point of their parent.
        assert_eq!(path.current_point(), Point::new(3, 3));

        path.quadratic_curve_to(Point::new(6, 0), Point::new(9, 3)).unwrap();
        let last_flattened = path.operations().last().unwrap().line_targets()[8];
        assert_eq!(path.current_point(), last_flattened);
    }

    #[test]
    fn test_begin_path_starts_at_current_point() {
        let mut path = new_path();
        path.line_to(Point::new(5, 2)).unwrap();
        let child = path.begin_path().unwrap();
        assert_eq!(child.start_point(), Point::new(5, 2));
        child.line_to(Point::new(7, 7)).unwrap();

        assert_eq!(path.operations().len(), 2);
        assert_eq!(path.operations()[1].kind(), OperationKind::Subpath);
        assert_eq!(
            path.operations()[1].child().unwrap().operations().len(),
            1
        );
    }

    #[test]
    fn test_cubic_captures_resolution() {
        let mut path = new_path();
        path.bezier_curve_to(Point::new(2, 8), Point::new(8, 8), Point::new(10, 0))
            .unwrap();
        let Operation::CubicCurveTo { segments, from, .. } = &path.operations()[0] else {
            panic!("expected a cubic curve");
        };
        // 20x10 has a diagonal of 22.36.
        assert_eq!(*segments, 11);
        assert_eq!(*from, Point::zero());
    }

    #[test]
    fn test_reset() {
        let mut path = new_path();
        path.line_to(Point::new(5, 5)).unwrap();
        path.close().unwrap();

        assert!(path.reset(Some(Point::new(30, 0))).is_err());
        assert!(path.is_closed());

        path.reset(Some(Point::new(2, 2))).unwrap();
        assert!(!path.is_closed());
        assert!(path.operations().is_empty());
        assert_eq!(path.start_point(), Point::new(2, 2));
        assert_eq!(path.current_point(), Point::new(2, 2));
    }

    #[test]
    fn test_add_path_with_transform() {
        let surface = FixedSurface::new_shared(20, 10);
        let paint = Paint::default().into_shared();
        let mut other = Path::new(paint.clone(), surface.clone());
        other.line_to(Point::new(2, 2)).unwrap();

        let mut path = Path::new(paint, surface);
        path.add_path(other, Some(&Matrix::translation(3.0, 1.0))).unwrap();

        let child = path.operations()[0].child().unwrap();
        assert_eq!(child.start_point(), Point::new(3, 1));
        assert_eq!(child.current_point(), Point::new(5, 3));
    }
}
