// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ColorDepth;

/// An RGB color. It is quantized to whatever the terminal supports only when it is
/// turned into an escape code, see [`Color::to_escape_code()`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Each channel is clamped to `0..=255` and rounded.
    #[must_use]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(channel_from_f64(r), channel_from_f64(g), channel_from_f64(b))
    }

    /// From `0xRRGGBB`. Bits above the low 24 are ignored.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_number(number: u32) -> Self {
        Self::new(
            ((number >> 16) & 0xFF) as u8,
            ((number >> 8) & 0xFF) as u8,
            (number & 0xFF) as u8,
        )
    }

    /// To `0xRRGGBB`.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn to_number(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// The body of the SGR sequence that selects this color as the foreground, ie
    /// everything after `ESC[` including the final `m`.
    ///
    /// | Depth                      | Code                   |
    /// | :------------------------- | :--------------------- |
    /// | [`ColorDepth::Monochrome`] | `37m` or `30m`         |
    /// | [`ColorDepth::Ansi16`]     | `38;5;{30..=37}m`      |
    /// | [`ColorDepth::Ansi256`]    | `38;5;{16..=255}m`     |
    /// | [`ColorDepth::Truecolor`]  | `38;2;{r};{g};{b}m`    |
    #[must_use]
    pub fn to_escape_code(&self, depth: ColorDepth) -> String {
        match depth {
            ColorDepth::Monochrome => {
                // Mean channel above 127, compared without truncating the mean.
                let sum = u16::from(self.r) + u16::from(self.g) + u16::from(self.b);
                if sum > 3 * 127 { "37m" } else { "30m" }.to_string()
            }
            ColorDepth::Ansi16 => format!("38;5;{}m", self.as_ansi16()),
            ColorDepth::Ansi256 => format!("38;5;{}m", self.as_ansi256()),
            ColorDepth::Truecolor => format!("38;2;{};{};{}m", self.r, self.g, self.b),
        }
    }

    /// `30 + (b << 2 | g << 1 | r)` where each channel is rounded to 0 or 1.
    #[must_use]
    pub fn as_ansi16(&self) -> u8 {
        let bit = |channel: u8| u8::from(channel >= 128);
        30 + ((bit(self.b) << 2) | (bit(self.g) << 1) | bit(self.r))
    }

    /// Grays map onto the 24 step gray ramp (plus pure black and white from the
    /// cube), everything else onto the 6x6x6 color cube.
    #[must_use]
    pub fn as_ansi256(&self) -> u8 {
        let Self { r, g, b } = *self;
        if r == g && g == b {
            return match r {
                0..8 => 16,
                249..=255 => 231,
                _ => 232 + channel_from_f64(f64::from(r - 8) / 247.0 * 24.0),
            };
        }
        let level = |channel: u8| channel_from_f64(f64::from(channel) / 255.0 * 5.0);
        16 + 36 * level(r) + 6 * level(g) + level(b)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_from_f64(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round() as u8
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self { Self::new(r, g, b) }
}

impl From<Color> for colorgrad::Color {
    fn from(color: Color) -> Self { colorgrad::Color::from_rgba8(color.r, color.g, color.b, 255) }
}

impl From<colorgrad::Color> for Color {
    fn from(color: colorgrad::Color) -> Self {
        let [r, g, b, _] = color.to_rgba8();
        Self::new(r, g, b)
    }
}
