// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The handful of CSI sequences the renderer emits. The output is consumed by real
//! terminals and by tests that compare it byte for byte, so the exact spelling matters,
//! eg the cursor home sequence is `ESC[0;0H` and not `ESC[H`.
//!
//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

use std::fmt::{Display, Formatter, Result};

pub const CSI: &str = "\x1b[";

/// The glyph used for painted cells.
pub const FULL_BLOCK: char = '█';

/// The glyph used for erased cells.
pub const BLANK: char = ' ';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EscapeSequence<'a> {
    /// `ESC[0;0H`
    CursorHome,
    /// `ESC[2J`
    ClearScreen,
    /// `ESC[0m`
    ResetStyle,
    /// `ESC[{row};{col}H`, where `row` is `y` and `col` is `x`.
    CursorPosition { col: i32, row: i32 },
    /// `ESC[` followed by a color code that already carries its final `m`, as returned by
    /// [`crate::Color::to_escape_code()`].
    Sgr(&'a str),
}

impl EscapeSequence<'_> {
    /// Append to `acc` without going through the formatting machinery for the fixed
    /// sequences. Rendering a full screen fill calls this once per cell.
    pub fn write_to_buf(&self, acc: &mut String) {
        acc.push_str(CSI);
        match self {
            EscapeSequence::CursorHome => acc.push_str("0;0H"),
            EscapeSequence::ClearScreen => acc.push_str("2J"),
            EscapeSequence::ResetStyle => acc.push_str("0m"),
            EscapeSequence::CursorPosition { col, row } => {
                acc.push_str(&row.to_string());
                acc.push(';');
                acc.push_str(&col.to_string());
                acc.push('H');
            }
            EscapeSequence::Sgr(code) => acc.push_str(code),
        }
    }
}

impl Display for EscapeSequence<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut acc = String::new();
        self.write_to_buf(&mut acc);
        f.write_str(&acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(EscapeSequence::CursorHome, "\x1b[0;0H")]
    #[test_case(EscapeSequence::ClearScreen, "\x1b[2J")]
    #[test_case(EscapeSequence::ResetStyle, "\x1b[0m")]
    #[test_case(EscapeSequence::CursorPosition { col: 7, row: 3 }, "\x1b[3;7H")]
    #[test_case(EscapeSequence::Sgr("38;2;255;0;0m"), "\x1b[38;2;255;0;0m")]
    fn test_bit_exact(sequence: EscapeSequence<'_>, expected: &str) {
        assert_eq!(sequence.to_string(), expected);
    }
}
