// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CanvasError, CanvasResult, Matrix, Operation, Path, Point, round_to_cell};

impl Path {
    /// Map every point of this path and of its subpaths and masks through `matrix`.
    ///
    /// # Errors
    ///
    /// [`CanvasError::OutOfBounds`] naming the first mapped point that lands outside of
    /// the surface. Nothing is rewritten in that case.
    pub fn transform(&mut self, matrix: &Matrix) -> CanvasResult<()> {
        self.map_points(&|point| matrix.apply(point))
    }

    /// Move the whole path by whole cells. `dx` and `dy` are rounded first.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::InvalidArgument`] if `dx` or `dy` is not finite.
    /// - [`CanvasError::OutOfBounds`] naming the first moved point that lands outside of
    ///   the surface. Nothing is moved in that case.
    pub fn translate(&mut self, dx: f64, dy: f64) -> CanvasResult<()> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(CanvasError::invalid_argument(format!(
                "Translation must be finite, got {dx}, {dy}"
            )));
        }
        let (dx, dy) = (round_to_cell(dx), round_to_cell(dy));
        self.map_points(&|point| point.translated(dx, dy))
    }

    fn map_points(&mut self, mapper: &dyn Fn(Point) -> Point) -> CanvasResult<()> {
        self.validate_mapped(mapper)?;
        self.rewrite_mapped(mapper);
        tracing::trace!(message = "mapped points", operations = self.operations.len());
        Ok(())
    }

    /// Each path is checked against its own surface.
    fn validate_mapped(&self, mapper: &dyn Fn(Point) -> Point) -> CanvasResult<()> {
        let surface = self.surface_size();
        mapper(self.start_point).ensure_within(surface)?;
        for operation in &self.operations {
            match operation.child() {
                Some(child) => child.validate_mapped(mapper)?,
                None => {
                    for point in operation.points() {
                        mapper(point).ensure_within(surface)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn rewrite_mapped(&mut self, mapper: &dyn Fn(Point) -> Point) {
        self.start_point = mapper(self.start_point);
        for operation in &mut self.operations {
            match operation {
                Operation::Subpath(child) | Operation::MaskSubpath(child) => {
                    child.rewrite_mapped(mapper);
                }
                _ => {
                    for point in operation.points_mut() {
                        *point = mapper(*point);
                    }
                }
            }
        }
        self.invalidate_bounds();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedSurface, Paint, Size};
    use pretty_assertions::assert_eq;

    fn all_points(path: &Path) -> Vec<Point> {
        let mut acc = vec![path.start_point()];
        for operation in path.operations() {
            match operation.child() {
                Some(child) => acc.extend(all_points(child)),
                None => acc.extend(operation.points()),
            }
        }
        acc
    }

    fn nested_path() -> Path {
        let mut path = Path::new_at(
            Paint::default().into_shared(),
            FixedSurface::new_shared(30, 15),
            Point::new(1, 1),
        )
        .unwrap();
        path.line_to(Point::new(8, 1)).unwrap();
        path.quadratic_curve_to(Point::new(10, 5), Point::new(8, 8))
            .unwrap();
        path.rect(Point::new(3, 3), Size::new(4, 2)).unwrap();
        path.clear_rect(Point::new(4, 4), Size::new(1, 1)).unwrap();
        path
    }

    #[test]
    fn test_translate_round_trip() {
        let mut path = nested_path();
        let before = all_points(&path);

        path.translate(5.0, 3.0).unwrap();
        let moved = all_points(&path);
        assert_eq!(moved[0], Point::new(6, 4));
        assert!(moved.iter().zip(&before).all(|(a, b)| *a == b.translated(5, 3)));

        path.translate(-5.0, -3.0).unwrap();
        assert_eq!(all_points(&path), before);
    }

    #[test]
    fn test_translate_rounds_offsets() {
        let mut path = nested_path();
        path.translate(1.6, -0.4).unwrap();
        assert_eq!(path.start_point(), Point::new(3, 1));
    }

    #[test]
    fn test_translate_out_of_bounds_does_not_mutate() {
        let mut path = nested_path();
        let before = all_points(&path);

        // The start point would land on column -1.
        let result = path.translate(-2.0, 0.0);
        assert!(matches!(
            result,
            Err(CanvasError::OutOfBounds { x: -1, y: 1, .. })
        ));
        assert_eq!(all_points(&path), before);
    }

    #[test]
    fn test_translate_by_huge_offset_is_out_of_bounds() {
        let mut path = nested_path();
        let before = all_points(&path);
        assert!(matches!(
            path.translate(1e12, 0.0),
            Err(CanvasError::OutOfBounds { x: i32::MAX, y: 1, .. })
        ));
        assert!(matches!(
            path.translate(0.0, -1e12),
            Err(CanvasError::OutOfBounds { x: 1, y: i32::MIN, .. })
        ));
        assert_eq!(all_points(&path), before);
    }

    #[test]
    fn test_translate_rejects_non_finite() {
        let mut path = nested_path();
        assert!(matches!(
            path.translate(f64::INFINITY, 0.0),
            Err(CanvasError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_transform_scales_children() {
        let mut path = nested_path();
        path.transform(&Matrix::scale(2.0, 1.0)).unwrap();
        let child = path.operations()[2].child().unwrap();
        assert_eq!(child.start_point(), Point::new(6, 3));
        assert_eq!(path.operations()[0].points()[0], Point::new(16, 1));
    }

    #[test]
    fn test_transform_out_of_bounds_does_not_mutate() {
        let mut path = nested_path();
        let before = all_points(&path);
        assert!(path.transform(&Matrix::scale(4.0, 1.0)).is_err());
        assert_eq!(all_points(&path), before);
    }
}
