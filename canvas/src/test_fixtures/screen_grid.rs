// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::BTreeMap;

use crate::Point;

/// A tiny interpreter for rendered output. It understands cursor positioning
/// (`ESC[{row};{col}H`) and printable glyphs, and skips every other CSI sequence (colors,
/// clear screen). The result is the last glyph written to each cell, which is what a
/// terminal would show.
///
/// ```
/// use r3bl_canvas::{Point, ScreenGrid};
///
/// let grid = ScreenGrid::from_output("\x1b[2J\x1b[3;1H\x1b[31m█\x1b[3;1H ");
/// assert_eq!(grid.char_at(Point::new(1, 3)), Some(' '));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenGrid {
    /// Keyed by `(row, col)` so iteration is in reading order.
    cells: BTreeMap<(i32, i32), char>,
}

impl ScreenGrid {
    #[must_use]
    pub fn from_output(output: &str) -> Self {
        let mut cells = BTreeMap::new();
        let mut cursor = (0, 0);
        let mut chars = output.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == '\x1b' && chars.peek() == Some(&'[') {
                chars.next();
                let mut params = String::new();
                let mut final_byte = None;
                for it in chars.by_ref() {
                    if it.is_ascii_alphabetic() {
                        final_byte = Some(it);
                        break;
                    }
                    params.push(it);
                }
                if final_byte == Some('H') {
                    cursor = parse_cursor_position(&params);
                }
                continue;
            }
            cells.insert(cursor, ch);
            cursor.1 += 1;
        }

        Self { cells }
    }

    /// `point.x` is the column and `point.y` is the row.
    #[must_use]
    pub fn char_at(&self, point: Point) -> Option<char> {
        self.cells.get(&(point.y, point.x)).copied()
    }

    /// Cells whose last glyph is `ch`, in reading order.
    #[must_use]
    pub fn cells_with(&self, ch: char) -> Vec<Point> {
        self.cells
            .iter()
            .filter(|(_, it)| **it == ch)
            .map(|((row, col), _)| Point::new(*col, *row))
            .collect()
    }

    #[must_use]
    pub fn count(&self, ch: char) -> usize {
        self.cells.values().filter(|it| **it == ch).count()
    }
}

fn parse_cursor_position(params: &str) -> (i32, i32) {
    let mut parts = params.split(';').map(|it| it.parse::<i32>().unwrap_or(1));
    let row = parts.next().unwrap_or(1);
    let col = parts.next().unwrap_or(1);
    (row, col)
}
