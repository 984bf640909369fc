// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// A size in character cells. Used both for shapes ([`crate::Path::rect()`]) and for
/// the dimensions of a surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self { Self { width, height } }

    /// Length of the diagonal, in cells.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        f64::from(self.width).hypot(f64::from(self.height))
    }

    /// Number of addressable cells.
    #[must_use]
    pub fn area(&self) -> i64 { i64::from(self.width) * i64::from(self.height) }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self { Self::new(width, height) }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
