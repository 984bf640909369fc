// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{Color, Gradient};

/// What a stroke or a fill is painted with.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Fill {
    /// Do not paint.
    #[default]
    None,
    Solid(Color),
    Gradient(Gradient),
}

impl Fill {
    #[must_use]
    pub fn is_none(&self) -> bool { matches!(self, Fill::None) }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self { Fill::Solid(color) }
}

impl From<Gradient> for Fill {
    fn from(gradient: Gradient) -> Self { Fill::Gradient(gradient) }
}

impl From<Option<Color>> for Fill {
    fn from(maybe_color: Option<Color>) -> Self {
        maybe_color.map_or(Fill::None, Fill::Solid)
    }
}

pub type SharedPaint = Arc<Paint>;

/// A stroke and a fill. Paths hold on to a [`SharedPaint`], so one paint can be used by
/// many paths.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub stroke: Fill,
    pub fill: Fill,
}

/// White stroke, no fill.
impl Default for Paint {
    fn default() -> Self {
        Self {
            stroke: Fill::Solid(Color::WHITE),
            fill: Fill::None,
        }
    }
}

impl Paint {
    pub fn new(stroke: impl Into<Fill>, fill: impl Into<Fill>) -> Self {
        Self {
            stroke: stroke.into(),
            fill: fill.into(),
        }
    }

    #[must_use]
    pub fn new_solid(stroke: Color, fill: Color) -> Self { Self::new(stroke, fill) }

    /// Used for masks. The colors are never shown since masks are rendered in
    /// [`RenderMode::Clear`], but the fill must be present for the interior to be
    /// erased.
    #[must_use]
    pub fn new_eraser() -> Self { Self::new_solid(Color::BLACK, Color::BLACK) }

    #[must_use]
    pub fn into_shared(self) -> SharedPaint { Arc::new(self) }
}

/// How a [`crate::Path`] is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum RenderMode {
    /// Solid colors, gradients where the paint has them.
    #[default]
    Paint,
    /// Erase the cells the path covers.
    Clear,
    /// Color every cell individually.
    Gradient,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_paint() {
        let paint = Paint::default();
        assert_eq!(paint.stroke, Fill::Solid(Color::WHITE));
        assert!(paint.fill.is_none());
    }

    #[test]
    fn test_into_fill() {
        assert_eq!(Fill::from(Some(Color::RED)), Fill::Solid(Color::RED));
        assert_eq!(Fill::from(None::<Color>), Fill::None);
        let paint = Paint::new(Color::RED, Gradient::new_radial());
        assert!(matches!(paint.fill, Fill::Gradient(_)));
    }

    #[test]
    fn test_render_mode_display() {
        assert_eq!(RenderMode::Gradient.to_string(), "Gradient");
    }
}
