// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turn a [`Path`] into the escape sequences that draw it.
//!
//! A render starts with the cursor home sequence, and a clear screen unless the content
//! is preserved. Operations are then drawn in the order they were recorded:
//!
//! - Lines (and the flattened lines of curves) are stepped cell by cell from the render
//!   cursor, which starts at the path's start point and is local to each render.
//! - Subpaths are rendered in place, in the same mode, without clearing the screen.
//! - Masks are rendered in place in [`RenderMode::Clear`].
//!
//! Last, a closed path with a fill paints every cell that is inside of it and not on its
//! stroke.

use crate::{BLANK, CanvasResult, Color, ColorDepth, EscapeSequence, FULL_BLOCK, Fill,
            LockedOutputDevice, Operation, OutputDevice, Path, Point, RenderMode,
            global_color_depth, lock_output_device_as_mut, raster};

/// How the cells of a stroke or a fill are painted.
#[derive(Debug)]
enum CellPaint<'a> {
    /// No paint, nothing is emitted.
    Skip,
    /// Blank cells, in the default style.
    Erase,
    /// One color code, emitted before the cells.
    Uniform(String),
    /// A color code per cell.
    PerCell(&'a Fill),
}

impl<'a> CellPaint<'a> {
    fn new(mode: RenderMode, fill: &'a Fill, depth: ColorDepth) -> Self {
        match (mode, fill) {
            (RenderMode::Clear, _) => CellPaint::Erase,
            (_, Fill::None) => CellPaint::Skip,
            (RenderMode::Paint, Fill::Solid(color)) => {
                CellPaint::Uniform(color.to_escape_code(depth))
            }
            (RenderMode::Paint | RenderMode::Gradient, _) => CellPaint::PerCell(fill),
        }
    }

    /// Emitted once, before a run of cells.
    fn write_prelude(&self, acc: &mut String) {
        match self {
            CellPaint::Uniform(code) => EscapeSequence::Sgr(code).write_to_buf(acc),
            CellPaint::Skip | CellPaint::Erase | CellPaint::PerCell(_) => {}
        }
    }

    /// `span_start` and `span_end` are what a gradient is laid out over.
    fn write_cell(
        &self,
        acc: &mut String,
        depth: ColorDepth,
        span_start: Point,
        point: Point,
        span_end: Point,
    ) {
        let glyph = match self {
            CellPaint::Skip => return,
            CellPaint::Erase => BLANK,
            CellPaint::Uniform(_) | CellPaint::PerCell(_) => FULL_BLOCK,
        };
        EscapeSequence::CursorPosition {
            col: point.x,
            row: point.y,
        }
        .write_to_buf(acc);
        if let CellPaint::PerCell(fill) = self {
            let code = color_at(fill, span_start, point, span_end).to_escape_code(depth);
            EscapeSequence::Sgr(&code).write_to_buf(acc);
        }
        acc.push(glyph);
    }
}

fn color_at(fill: &Fill, span_start: Point, point: Point, span_end: Point) -> Color {
    match fill {
        Fill::Solid(color) => *color,
        Fill::Gradient(gradient) => gradient.get_color_at(span_start, point, span_end),
        Fill::None => Color::BLACK,
    }
}

impl Path {
    /// Render with the color depth detected from the environment (or its override, see
    /// [`global_color_depth`]).
    #[must_use]
    pub fn render_to_string(&self, mode: RenderMode, preserve_content: bool) -> String {
        self.render_to_string_with_color_depth(mode, preserve_content, global_color_depth::detect())
    }

    #[must_use]
    pub fn render_to_string_with_color_depth(
        &self,
        mode: RenderMode,
        preserve_content: bool,
        depth: ColorDepth,
    ) -> String {
        tracing::debug!(
            message = "render start",
            %mode,
            %depth,
            preserve_content,
            operations = self.operations.len()
        );
        let mut acc = String::new();
        self.render_into(&mut acc, mode, preserve_content, depth);
        tracing::debug!(message = "render finish", %mode, bytes = acc.len());
        acc
    }

    /// Render and write to `device`, then park the cursor in the bottom right corner.
    ///
    /// # Errors
    ///
    /// [`crate::CanvasError::Io`] if writing to the device fails.
    pub fn render_to_device(
        &self,
        mode: RenderMode,
        preserve_content: bool,
        device: &OutputDevice,
    ) -> CanvasResult<()> {
        let mut output = self.render_to_string(mode, preserve_content);
        let surface = self.surface_size();
        EscapeSequence::CursorPosition {
            col: surface.width,
            row: surface.height,
        }
        .write_to_buf(&mut output);

        let writer: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
        writer.write_all(output.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Paint this path on `device`, clearing the screen first if `clear` is set.
    ///
    /// # Errors
    ///
    /// [`crate::CanvasError::Io`] if writing to the device fails.
    pub fn draw(&self, device: &OutputDevice, clear: bool) -> CanvasResult<()> {
        self.render_to_device(RenderMode::Paint, !clear, device)
    }

    /// Like [`Path::draw()`], but every cell gets its own color.
    ///
    /// # Errors
    ///
    /// [`crate::CanvasError::Io`] if writing to the device fails.
    pub fn draw_gradient(&self, device: &OutputDevice, clear: bool) -> CanvasResult<()> {
        self.render_to_device(RenderMode::Gradient, !clear, device)
    }

    fn render_into(
        &self,
        acc: &mut String,
        mode: RenderMode,
        preserve_content: bool,
        depth: ColorDepth,
    ) {
        EscapeSequence::CursorHome.write_to_buf(acc);
        if !preserve_content {
            EscapeSequence::ClearScreen.write_to_buf(acc);
        }
        if mode == RenderMode::Clear {
            EscapeSequence::ResetStyle.write_to_buf(acc);
        }

        let stroke = CellPaint::new(mode, &self.paint.stroke, depth);
        let mut cursor = self.start_point;

        for operation in &self.operations {
            match operation {
                Operation::MoveTo(point) => {
                    cursor = *point;
                    EscapeSequence::CursorPosition {
                        col: point.x,
                        row: point.y,
                    }
                    .write_to_buf(acc);
                }
                Operation::Subpath(child) => child.render_into(acc, mode, true, depth),
                Operation::MaskSubpath(child) => {
                    child.render_into(acc, RenderMode::Clear, true, depth);
                }
                Operation::LineTo(_)
                | Operation::QuadCurveTo { .. }
                | Operation::CubicCurveTo { .. } => {
                    for target in operation.line_targets() {
                        stroke.write_prelude(acc);
                        for point in raster::line_steps(cursor, target) {
                            stroke.write_cell(acc, depth, cursor, point, target);
                        }
                        cursor = target;
                    }
                }
            }
        }

        if self.closed && !self.paint.fill.is_none() {
            self.render_fill(acc, mode, depth);
        }
    }

    /// Cells outside of the bounding box are never inside, so only the box is scanned,
    /// row by row.
    fn render_fill(&self, acc: &mut String, mode: RenderMode, depth: ColorDepth) {
        let fill = CellPaint::new(mode, &self.paint.fill, depth);
        match fill {
            CellPaint::Erase => EscapeSequence::ResetStyle.write_to_buf(acc),
            _ => fill.write_prelude(acc),
        }

        let Some((min, max)) = self.bounding_box() else {
            return;
        };
        let surface = self.surface_size();
        for y in min.y.max(0)..=max.y.min(surface.height - 1) {
            for x in min.x.max(0)..=max.x.min(surface.width - 1) {
                let point = Point::new(x, y);
                if self.is_point_in_path(point) && !self.is_point_in_stroke(point) {
                    fill.write_cell(acc, depth, min, point, max);
                }
            }
        }
    }
}
