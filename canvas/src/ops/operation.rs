// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The instructions a [`Path`] records.
//!
//! There are two kinds of operations:
//!
//! | Kind             | Operations                                                    |
//! | :--------------- | :------------------------------------------------------------ |
//! | Render time      | [`Operation::MoveTo`], [`Operation::LineTo`], subpaths, masks |
//! | Expansion time   | [`Operation::QuadCurveTo`], [`Operation::CubicCurveTo`]       |
//!
//! An expansion time operation stands for the run of [`Operation::LineTo`]s that its
//! curve flattens into. It is stored once, and every consumer (render, bounds, stroke
//! test, current point) asks [`Operation::line_targets()`] for that run, so it is always
//! derived the same way.

use smallvec::SmallVec;

use crate::{Path, Point, raster};

/// Points owned by a single operation. At most 4 (a cubic curve).
pub type OperationPoints = SmallVec<[Point; 4]>;

/// The lattice points a line is drawn to, in order.
pub type LineTargets = SmallVec<[Point; 16]>;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Relocate without drawing.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// `from` is the current point when the curve was recorded.
    QuadCurveTo {
        from: Point,
        control: Point,
        to: Point,
    },
    /// `from` is the current point when the curve was recorded, and `segments` is the
    /// flattening resolution for the surface size at that time.
    CubicCurveTo {
        from: Point,
        control1: Point,
        control2: Point,
        to: Point,
        segments: u32,
    },
    Subpath(Box<Path>),
    /// Erases whatever the child path covers.
    MaskSubpath(Box<Path>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum OperationKind {
    MoveTo,
    LineTo,
    QuadCurveTo,
    CubicCurveTo,
    Subpath,
    MaskSubpath,
}

impl OperationKind {
    /// Expansion time operations are flattened into lines, everything else is executed
    /// as is during a render walk.
    #[must_use]
    pub fn is_expansion_time(&self) -> bool {
        matches!(self, OperationKind::QuadCurveTo | OperationKind::CubicCurveTo)
    }
}

impl Operation {
    #[must_use]
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::MoveTo(_) => OperationKind::MoveTo,
            Operation::LineTo(_) => OperationKind::LineTo,
            Operation::QuadCurveTo { .. } => OperationKind::QuadCurveTo,
            Operation::CubicCurveTo { .. } => OperationKind::CubicCurveTo,
            Operation::Subpath(_) => OperationKind::Subpath,
            Operation::MaskSubpath(_) => OperationKind::MaskSubpath,
        }
    }

    /// Every point stored in this operation, children excluded.
    #[must_use]
    pub fn points(&self) -> OperationPoints {
        let mut acc = OperationPoints::new();
        match self {
            Operation::MoveTo(point) | Operation::LineTo(point) => acc.push(*point),
            Operation::QuadCurveTo { from, control, to } => {
                acc.extend([*from, *control, *to]);
            }
            Operation::CubicCurveTo {
                from,
                control1,
                control2,
                to,
                ..
            } => acc.extend([*from, *control1, *control2, *to]),
            Operation::Subpath(_) | Operation::MaskSubpath(_) => {}
        }
        acc
    }

    /// Same points as [`Operation::points()`], in the same order, for rewriting in
    /// place.
    pub fn points_mut(&mut self) -> SmallVec<[&mut Point; 4]> {
        let mut acc = SmallVec::new();
        match self {
            Operation::MoveTo(point) | Operation::LineTo(point) => acc.push(point),
            Operation::QuadCurveTo { from, control, to } => acc.extend([from, control, to]),
            Operation::CubicCurveTo {
                from,
                control1,
                control2,
                to,
                ..
            } => acc.extend([from, control1, control2, to]),
            Operation::Subpath(_) | Operation::MaskSubpath(_) => {}
        }
        acc
    }

    /// The points this operation draws lines to: one for [`Operation::LineTo`], the
    /// flattened curve for curves, none for everything else.
    #[must_use]
    pub fn line_targets(&self) -> LineTargets {
        match self {
            Operation::LineTo(point) => smallvec::smallvec![*point],
            Operation::QuadCurveTo { from, control, to } => {
                raster::flatten_quadratic(*from, *control, *to)
            }
            Operation::CubicCurveTo {
                from,
                control1,
                control2,
                to,
                segments,
            } => raster::flatten_cubic(*from, *control1, *control2, *to, *segments),
            Operation::MoveTo(_) | Operation::Subpath(_) | Operation::MaskSubpath(_) => {
                LineTargets::new()
            }
        }
    }

    /// Where this operation leaves the current point, if it carries points at all.
    #[must_use]
    pub fn end_point(&self) -> Option<Point> {
        match self {
            Operation::MoveTo(point) | Operation::LineTo(point) => Some(*point),
            Operation::QuadCurveTo { from, .. } | Operation::CubicCurveTo { from, .. } => {
                Some(self.line_targets().last().copied().unwrap_or(*from))
            }
            Operation::Subpath(_) | Operation::MaskSubpath(_) => None,
        }
    }

    /// The child path of a subpath or mask.
    #[must_use]
    pub fn child(&self) -> Option<&Path> {
        match self {
            Operation::Subpath(path) | Operation::MaskSubpath(path) => Some(path),
            _ => None,
        }
    }

    pub fn child_mut(&mut self) -> Option<&mut Path> {
        match self {
            Operation::Subpath(path) | Operation::MaskSubpath(path) => Some(path),
            _ => None,
        }
    }
}
