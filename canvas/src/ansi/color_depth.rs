// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          io::IsTerminal,
          sync::atomic::{AtomicI8, Ordering}};

/// How many colors the terminal can show. Each tier maps a [`crate::Color`] to a
/// different SGR code, see [`crate::Color::to_escape_code()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum ColorDepth {
    /// Black or white only.
    Monochrome,
    /// The 8 basic colors.
    Ansi16,
    /// The xterm 256 color palette.
    Ansi256,
    /// 24 bit RGB.
    Truecolor,
}

/// Process wide color depth, detected from the environment once and cached. It can be
/// overridden, which is how tests and the `tcanvas` binary pin the output format.
pub mod global_color_depth {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    static COLOR_DEPTH_OVERRIDE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    static COLOR_DEPTH_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    /// 1. The override, if [`set_override()`] was called.
    /// 2. The cached result of a previous detection.
    /// 3. [`examine_env_vars_to_determine_color_depth()`], whose result is cached.
    #[must_use]
    pub fn detect() -> ColorDepth {
        if let Ok(it) = try_get_override() {
            return it;
        }
        if let Some(it) = ColorDepth::from_i8(COLOR_DEPTH_CACHED.load(Ordering::Acquire)) {
            return it;
        }
        let detected = examine_env_vars_to_determine_color_depth();
        COLOR_DEPTH_CACHED.store(i8::from(detected), Ordering::Release);
        detected
    }

    /// Regardless of the environment, [`detect()`] returns `value` until
    /// [`clear_override()`] is called.
    ///
    /// # Testing support
    ///
    /// Tests that call this must be annotated with `#[serial]` from the
    /// [serial_test](https://crates.io/crates/serial_test) crate, since tests run in
    /// parallel on many threads.
    pub fn set_override(value: ColorDepth) {
        COLOR_DEPTH_OVERRIDE.store(i8::from(value), Ordering::Release);
    }

    pub fn clear_override() { COLOR_DEPTH_OVERRIDE.store(NOT_SET_VALUE, Ordering::Release); }

    /// Forget the detected value, so the environment is examined again on the next call
    /// to [`detect()`].
    pub fn clear_cache() { COLOR_DEPTH_CACHED.store(NOT_SET_VALUE, Ordering::Release); }

    /// # Errors
    ///
    /// Returns `Err(())` if no override is set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorDepth, ()> {
        ColorDepth::from_i8(COLOR_DEPTH_OVERRIDE.load(Ordering::Acquire)).ok_or(())
    }
}

/// Heuristics, in order:
/// 1. `NO_COLOR`, `TERM=dumb`, or stdout not being a TTY (unless `IGNORE_IS_TERMINAL`
///    is set) mean [`ColorDepth::Monochrome`].
/// 2. `COLORTERM=truecolor|24bit`, iTerm, or Windows mean [`ColorDepth::Truecolor`].
/// 3. A `TERM` ending in `256color` means [`ColorDepth::Ansi256`].
/// 4. Any other color capable `TERM`, or running in CI, means [`ColorDepth::Ansi16`].
#[must_use]
pub fn examine_env_vars_to_determine_color_depth() -> ColorDepth {
    let term = env::var("TERM").unwrap_or_default();

    if env_no_color()
        || term == "dumb"
        || !(std::io::stdout().is_terminal()
            || env::var("IGNORE_IS_TERMINAL").is_ok_and(|v| v != "0"))
    {
        return ColorDepth::Monochrome;
    }

    if env::var("COLORTERM").is_ok_and(|v| v == "truecolor" || v == "24bit")
        || env::var("TERM_PROGRAM").is_ok_and(|v| v == "iTerm.app")
        || env::consts::OS == "windows"
    {
        return ColorDepth::Truecolor;
    }

    if term.ends_with("256") || term.ends_with("256color") {
        return ColorDepth::Ansi256;
    }

    if check_ansi_color(&term) || env::var("COLORTERM").is_ok() || is_ci::uncached() {
        return ColorDepth::Ansi16;
    }

    ColorDepth::Monochrome
}

fn env_no_color() -> bool { env::var("NO_COLOR").is_ok_and(|v| v != "0") }

fn check_ansi_color(term: &str) -> bool {
    term.starts_with("screen")
        || term.starts_with("xterm")
        || term.starts_with("vt100")
        || term.starts_with("rxvt")
        || term.contains("color")
        || term.contains("ansi")
        || term.contains("linux")
}

/// Allows a [`ColorDepth`] to be stored in an [`AtomicI8`].
mod convert_between_color_depth_and_i8 {
    use super::ColorDepth;

    impl ColorDepth {
        #[rustfmt::skip]
        pub(super) fn from_i8(value: i8) -> Option<Self> {
            match value {
                0 => Some(ColorDepth::Monochrome),
                1 => Some(ColorDepth::Ansi16),
                2 => Some(ColorDepth::Ansi256),
                3 => Some(ColorDepth::Truecolor),
                _ => None,
            }
        }
    }

    impl From<ColorDepth> for i8 {
        #[rustfmt::skip]
        fn from(value: ColorDepth) -> Self {
            match value {
                ColorDepth::Monochrome => 0,
                ColorDepth::Ansi16     => 1,
                ColorDepth::Ansi256    => 2,
                ColorDepth::Truecolor  => 3,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_override_wins() {
        global_color_depth::set_override(ColorDepth::Ansi256);
        assert_eq!(global_color_depth::detect(), ColorDepth::Ansi256);
        assert_eq!(
            global_color_depth::try_get_override(),
            Ok(ColorDepth::Ansi256)
        );

        global_color_depth::clear_override();
        assert_eq!(global_color_depth::try_get_override(), Err(()));
    }

    #[test]
    #[serial]
    fn test_detect_is_cached() {
        global_color_depth::clear_override();
        global_color_depth::clear_cache();
        let first = global_color_depth::detect();
        assert_eq!(global_color_depth::detect(), first);
    }

    #[test]
    fn test_i8_round_trip() {
        for depth in [
            ColorDepth::Monochrome,
            ColorDepth::Ansi16,
            ColorDepth::Ansi256,
            ColorDepth::Truecolor,
        ] {
            assert_eq!(ColorDepth::from_i8(i8::from(depth)), Some(depth));
        }
        assert_eq!(ColorDepth::from_i8(-1), None);
    }
}
