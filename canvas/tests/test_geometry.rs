// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use r3bl_canvas::{CanvasError, FixedSurface, Matrix, Operation, Paint, Path, Point,
                  Size, raster::{flatten_quadratic, line_steps}};
use test_case::test_case;

fn new_path(start: Point) -> Path {
    Path::new_at(
        Paint::default().into_shared(),
        FixedSurface::new_shared(40, 20),
        start,
    )
    .unwrap()
}

#[test_case(Point::new(0, 0), Point::new(7, 3) ; "shallow")]
#[test_case(Point::new(2, 1), Point::new(5, 9) ; "steep")]
#[test_case(Point::new(9, 2), Point::new(1, 6) ; "backwards")]
#[test_case(Point::new(4, 4), Point::new(4, 4) ; "single cell")]
fn test_line_steps_are_symmetric(start: Point, end: Point) {
    let forwards = line_steps(start, end);
    let mut backwards = line_steps(end, start);
    backwards.reverse();
    assert_eq!(forwards, backwards);

    assert_eq!(forwards.first(), Some(&start));
    assert_eq!(forwards.last(), Some(&end));
    assert_eq!(forwards.iter().filter(|it| **it == start).count(), 1);
}

#[test]
fn test_first_quadratic_sample_is_on_the_curve() {
    let (from, control, to) = (Point::new(0, 0), Point::new(10, 20), Point::new(20, 0));
    let targets = flatten_quadratic(from, control, to);
    assert_eq!(targets, flatten_quadratic(from, control, to));

    // B(0.1) = 0.81 P0 + 0.18 P1 + 0.01 P2 = (2.0, 3.6)
    let first = targets[0];
    assert!((f64::from(first.x) - 2.0).abs() <= 0.5);
    assert!((f64::from(first.y) - 3.6).abs() <= 0.5);
}

#[test]
fn test_translate_there_and_back() {
    let mut path = new_path(Point::new(5, 5));
    path.line_to(Point::new(10, 5)).unwrap();
    path.bezier_curve_to(Point::new(12, 8), Point::new(8, 12), Point::new(5, 10))
        .unwrap();
    path.ellipse(Point::new(20, 10), 6.0, 3.0, 0.3, 0.0, 3.0, false)
        .unwrap();
    let before = path.clone();

    path.translate(7.0, 4.0).unwrap();
    path.translate(-7.0, -4.0).unwrap();

    assert_eq!(path.start_point(), before.start_point());
    for (lhs, rhs) in path.operations().iter().zip(before.operations()) {
        assert_eq!(lhs.points(), rhs.points());
        if let (Some(lhs), Some(rhs)) = (lhs.child(), rhs.child()) {
            assert_eq!(lhs.bounds(), rhs.bounds());
        }
    }
}

#[test]
fn test_transform_validates_before_rewriting() {
    let mut path = new_path(Point::new(5, 5));
    path.line_to(Point::new(30, 5)).unwrap();
    let result = path.transform(&Matrix::scale(2.0, 2.0));
    assert!(matches!(
        result,
        Err(CanvasError::OutOfBounds { x: 60, y: 10, .. })
    ));
    assert_eq!(path.start_point(), Point::new(5, 5));
    assert!(matches!(path.operations()[0], Operation::LineTo(p) if p == Point::new(30, 5)));
}

#[test]
fn test_rect_from_lines_contains_its_center() {
    let mut path = new_path(Point::new(10, 4));
    path.line_to(Point::new(10, 12)).unwrap();
    path.line_to(Point::new(30, 12)).unwrap();
    path.line_to(Point::new(30, 4)).unwrap();
    path.close().unwrap();

    assert!(path.is_point_in_path(Point::new(20, 8)));
    assert!(!path.is_point_in_path(Point::new(35, 8)));
    assert!(!path.is_point_in_path(Point::new(20, 15)));
    assert!(path.is_point_in_stroke(Point::new(10, 8)));
    assert!(!path.is_point_in_stroke(Point::new(20, 8)));

    assert!(matches!(path.close(), Err(CanvasError::ClosedPath)));
    assert!(matches!(
        path.rect(Point::new(1, 1), Size::new(2, 2)),
        Err(CanvasError::ClosedPath)
    ));
}
