// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors raised while building, transforming or drawing a [`crate::Path`].
//!
//! All of them are raised synchronously by the call that violates an invariant, and a
//! failing call never leaves a partially recorded operation behind.

pub type CanvasResult<T> = Result<T, CanvasError>;

/// | Variant             | Cause                                                       |
/// | :------------------ | :---------------------------------------------------------- |
/// | [`ClosedPath`]      | Appending to, or closing, a path that is already closed     |
/// | [`OutOfBounds`]     | A point falls outside of the surface's lattice              |
/// | [`InvalidArgument`] | Malformed corner radii, point-like argument, radius, etc    |
/// | [`Io`]              | Writing the rendered output to the output device failed     |
///
/// [`ClosedPath`]: Self::ClosedPath
/// [`OutOfBounds`]: Self::OutOfBounds
/// [`InvalidArgument`]: Self::InvalidArgument
/// [`Io`]: Self::Io
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CanvasError {
    #[error("Cannot apply operation to a closed path")]
    #[diagnostic(
        code(r3bl_canvas::path::closed),
        help("Call `reset()` to reopen the path, or start a new subpath before closing.")
    )]
    ClosedPath,

    #[error("Point {x}, {y} is out of bounds of the {columns}x{rows} surface")]
    #[diagnostic(
        code(r3bl_canvas::geometry::out_of_bounds),
        help("Points must satisfy 0 <= x < columns and 0 <= y < rows.")
    )]
    OutOfBounds {
        x: i32,
        y: i32,
        columns: i32,
        rows: i32,
    },

    #[error("Invalid argument: {reason}")]
    #[diagnostic(code(r3bl_canvas::invalid_argument))]
    InvalidArgument { reason: String },

    #[error("Could not write to the output device")]
    #[diagnostic(code(r3bl_canvas::io))]
    Io(#[from] std::io::Error),
}

impl CanvasError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
