// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Surface size providers. A [`crate::Path`] never caches the size of the surface it
//! is bound to, it asks the provider every time, so a resized terminal is picked up on
//! the next record or render.

use std::{fmt::Debug,
          sync::{Arc,
                 atomic::{AtomicI32, Ordering}}};

use crate::Size;

/// Fallback used when the terminal can't be queried, eg when stdout is not a TTY.
pub const DEFAULT_TERMINAL_SIZE: Size = Size::new(80, 24);

pub type SharedSurface = Arc<dyn SurfaceSize + Send + Sync>;

pub trait SurfaceSize: Debug {
    fn columns(&self) -> i32;
    fn rows(&self) -> i32;

    fn size(&self) -> Size { Size::new(self.columns(), self.rows()) }
}

/// The terminal attached to this process, sized via [`crossterm::terminal::size()`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSurface;

impl TerminalSurface {
    #[must_use]
    pub fn new_shared() -> SharedSurface { Arc::new(Self) }

    fn query(&self) -> Size {
        match crossterm::terminal::size() {
            Ok((columns, rows)) => Size::new(i32::from(columns), i32::from(rows)),
            Err(error) => {
                tracing::warn!(
                    message = "Could not get terminal size, using fallback",
                    ?error,
                    fallback = %DEFAULT_TERMINAL_SIZE
                );
                DEFAULT_TERMINAL_SIZE
            }
        }
    }
}

impl SurfaceSize for TerminalSurface {
    fn columns(&self) -> i32 { self.query().width }

    fn rows(&self) -> i32 { self.query().height }

    fn size(&self) -> Size { self.query() }
}

/// An offscreen surface of a given size. It can be resized while paths are bound to
/// it, which is handy to simulate a terminal resize in tests.
#[derive(Debug)]
pub struct FixedSurface {
    columns: AtomicI32,
    rows: AtomicI32,
}

impl FixedSurface {
    #[must_use]
    pub fn new(columns: i32, rows: i32) -> Self {
        Self {
            columns: AtomicI32::new(columns),
            rows: AtomicI32::new(rows),
        }
    }

    #[must_use]
    pub fn new_shared(columns: i32, rows: i32) -> SharedSurface {
        Arc::new(Self::new(columns, rows))
    }

    pub fn resize(&self, size: Size) {
        self.columns.store(size.width, Ordering::SeqCst);
        self.rows.store(size.height, Ordering::SeqCst);
    }
}

impl From<Size> for FixedSurface {
    fn from(size: Size) -> Self { Self::new(size.width, size.height) }
}

impl SurfaceSize for FixedSurface {
    fn columns(&self) -> i32 { self.columns.load(Ordering::SeqCst) }

    fn rows(&self) -> i32 { self.rows.load(Ordering::SeqCst) }
}
