// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words bresenham kappa

//! # r3bl_canvas
//!
//! A Canvas 2D style drawing API for the terminal. Instead of pixels, a [`Path`] is
//! rasterized into character cells, addressed by cursor positioning escape sequences
//! and colored with SGR color escape sequences (monochrome, 16 color, 256 color or
//! truecolor, depending on what the terminal supports).
//!
//! # Table of contents
//!
//! - [How it works](#how-it-works)
//! - [Example](#example)
//! - [Colors and gradients](#colors-and-gradients)
//! - [Logging](#logging)
//!
//! # How it works
//!
//! 1. A [`Path`] records an ordered list of [`Operation`]s: move, line, quadratic and
//!    cubic curves, and nested [`Operation::Subpath`] and [`Operation::MaskSubpath`]
//!    children. Shape helpers like [`Path::rect()`], [`Path::arc()`],
//!    [`Path::ellipse()`] and [`Path::round_rect()`] build closed subpaths.
//! 2. Curves are flattened into runs of straight lines ([`raster::bezier`]), and lines
//!    are stepped cell by cell with Bresenham's algorithm ([`raster::line_steps`]).
//! 3. When a path is closed its interior is filled. A cell is filled when the winding
//!    number test says it is inside the path's bounds polygon and it is not on the
//!    stroke ([`Path::is_point_in_path()`], [`Path::is_point_in_stroke()`]).
//! 4. Mask subpaths ([`Path::clip()`], [`Path::clear_rect()`]) are rendered in
//!    [`RenderMode::Clear`], which erases whatever was drawn before them.
//!
//! Every point stored in a path must be inside the surface (the terminal, or a
//! [`FixedSurface`]). Violations are reported as [`CanvasError::OutOfBounds`], never
//! clamped.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use r3bl_canvas::{Color, FixedSurface, Paint, Path, Point, RenderMode, Size};
//!
//! let surface = Arc::new(FixedSurface::new(40, 20));
//! let paint = Arc::new(Paint::new_solid(Color::RED, Color::BLUE));
//!
//! let mut path = Path::new(paint, surface);
//! path.rect(Point::new(2, 2), Size::new(4, 4)).unwrap();
//!
//! let output = path.render_to_string(RenderMode::Paint, false);
//! assert!(output.starts_with("\x1b[0;0H\x1b[2J"));
//! ```
//!
//! # Colors and gradients
//!
//! A [`Paint`] holds a stroke [`Fill`] and a fill [`Fill`]. Each is either nothing, a
//! solid [`Color`], or a [`Gradient`] (linear, radial or conic). The escape code that a
//! color turns into depends on the [`ColorDepth`], which is detected from the
//! environment and can be overridden with [`global_color_depth::set_override()`].
//!
//! # Logging
//!
//! The library emits [`tracing`] events. Nothing is printed unless a subscriber is
//! installed, eg with [`try_initialize_logging_global()`].

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod ansi;
pub mod error;
pub mod geometry;
pub mod log;
pub mod ops;
pub mod paint;
pub mod path;
pub mod raster;
pub mod terminal_io;
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use error::*;
pub use geometry::*;
pub use log::*;
pub use ops::*;
pub use paint::*;
pub use path::*;
pub use terminal_io::*;
pub use test_fixtures::*;
