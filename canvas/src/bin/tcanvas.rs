// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Draw a few demo scenes in the terminal.
//!
//! ```text
//! tcanvas shapes
//! tcanvas gradient --mode gradient --color-depth ansi256
//! tcanvas mask --no-clear --enable-logging
//! ```

use std::f64::consts::{PI, TAU};

use clap::{Parser, ValueEnum};
use r3bl_canvas::{Color, ColorDepth, Fill, Gradient, OutputDevice, Paint, Path, Point,
                  RenderMode, Size, TerminalSurface, global_color_depth,
                  try_initialize_logging_global};

#[derive(Debug, Parser)]
#[command(bin_name = "tcanvas")]
#[command(about = "🎨 Draw vector paths in the terminal")]
#[command(version)]
#[command(next_line_help = true)]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[arg(value_enum, default_value_t = Scene::Square, help = "What to draw")]
    pub scene: Scene,

    #[arg(long, short = 'm', value_enum, default_value_t = ModeArg::Paint)]
    pub mode: ModeArg,

    #[arg(long, help = "Draw over what is already on the screen")]
    pub no_clear: bool,

    #[arg(long, short = 'c', value_enum, default_value_t = ColorDepthArg::Auto)]
    pub color_depth: ColorDepthArg,

    #[arg(
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    /// A filled square in the middle of the screen.
    Square,
    /// Rects, arcs, ellipses and curves.
    Shapes,
    /// Linear, radial and conic gradients.
    Gradient,
    /// A rectangle with a hole cut out of it.
    Mask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Paint,
    Clear,
    Gradient,
}

impl From<ModeArg> for RenderMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Paint => RenderMode::Paint,
            ModeArg::Clear => RenderMode::Clear,
            ModeArg::Gradient => RenderMode::Gradient,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorDepthArg {
    Auto,
    Mono,
    Ansi16,
    Ansi256,
    Truecolor,
}

impl ColorDepthArg {
    fn to_color_depth(self) -> Option<ColorDepth> {
        match self {
            ColorDepthArg::Auto => None,
            ColorDepthArg::Mono => Some(ColorDepth::Monochrome),
            ColorDepthArg::Ansi16 => Some(ColorDepth::Ansi16),
            ColorDepthArg::Ansi256 => Some(ColorDepth::Ansi256),
            ColorDepthArg::Truecolor => Some(ColorDepth::Truecolor),
        }
    }
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.enable_logging;
    if should_log {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    if let Some(depth) = cli_arg.color_depth.to_color_depth() {
        global_color_depth::set_override(depth);
    }

    let path = build_scene(cli_arg.scene)?;
    let device = OutputDevice::new_stdout();
    path.render_to_device(cli_arg.mode.into(), cli_arg.no_clear, &device)?;

    if should_log {
        tracing::debug!(message = "Stop logging...");
    }

    Ok(())
}

fn build_scene(scene: Scene) -> miette::Result<Path> {
    let surface = TerminalSurface::new_shared();
    let screen = surface.size();
    tracing::debug!(message = "Building scene", ?scene, %screen);

    let path = match scene {
        Scene::Square => {
            let paint = Paint::new_solid(Color::RED, Color::BLUE).into_shared();
            let mut path = Path::new(paint, surface);
            let size = Size::new(screen.width / 4, screen.height / 3);
            path.rect(Point::center_for(size, screen), size)?;
            path
        }
        Scene::Shapes => {
            let paint = Paint::new_solid(Color::WHITE, Color::new(0, 128, 255)).into_shared();
            let mut path = Path::new(paint, surface);
            let cell = Size::new(screen.width / 4, screen.height / 2);
            let radius = f64::from(cell.height.min(cell.width) / 2 - 1);

            path.rect(Point::new(1, 1), Size::new(cell.width - 2, cell.height - 2))?;
            path.round_rect(
                Point::new(cell.width + 1, 1),
                Size::new(cell.width - 2, cell.height - 2),
                &[radius / 2.0],
            )?;
            path.arc(
                Point::new(cell.width * 2 + cell.width / 2, cell.height / 2),
                radius,
                0.0,
                TAU,
                false,
            )?;
            path.ellipse(
                Point::new(cell.width * 3 + cell.width / 2, cell.height / 2),
                f64::from(cell.width / 2 - 1),
                radius,
                0.0,
                0.0,
                PI,
                false,
            )?;

            let curves = path.subpath_at(Point::new(1, cell.height * 2 - 2))?;
            curves.quadratic_curve_to(
                Point::new(cell.width, cell.height + 1),
                Point::new(cell.width * 2, cell.height * 2 - 2),
            )?;
            curves.bezier_curve_to(
                Point::new(cell.width * 2 + cell.width / 2, cell.height),
                Point::new(cell.width * 3, cell.height * 2 - 1),
                Point::new(cell.width * 3, cell.height + 1),
            )?;
            curves.arc_to(
                Point::new(cell.width * 4 - 2, cell.height + 1),
                Point::new(cell.width * 4 - 2, cell.height * 2 - 2),
                radius,
            )?;
            path
        }
        Scene::Gradient => {
            let rainbow = Gradient::new_linear(0.0)
                .with_color_stop(0.0, Color::RED)
                .with_color_stop(0.5, Color::GREEN)
                .with_color_stop(1.0, Color::BLUE);
            let glow = Gradient::new_radial()
                .with_color_stop(0.0, Color::WHITE)
                .with_color_stop(1.0, Color::new(255, 0, 128));
            let mut path = Path::new(Paint::new(rainbow, glow).into_shared(), surface);
            let radius = f64::from(screen.height / 2 - 2);
            path.arc(Point::center_of(screen), radius, 0.0, TAU, false)?;

            let wheel = Gradient::new_conic(0.0)
                .with_color_stop(0.0, Color::RED)
                .with_color_stop(0.33, Color::GREEN)
                .with_color_stop(0.66, Color::BLUE)
                .with_color_stop(1.0, Color::RED);
            let child = path.begin_path_with_paint(Paint::new(wheel, Fill::None).into_shared())?;
            child.move_to(Point::new(1, screen.height - 2))?;
            child.line_to(Point::new(screen.width - 2, screen.height - 2))?;
            path
        }
        Scene::Mask => {
            let paint = Paint::new_solid(Color::GREEN, Color::new(0, 96, 0)).into_shared();
            let mut path = Path::new(paint, surface);
            let outer = Size::new(screen.width / 2, screen.height / 2);
            let inner = Size::new(outer.width / 3, outer.height / 3);
            path.rect(Point::center_for(outer, screen), outer)?;
            path.clear_rect(Point::center_for(inner, screen), inner)?;
            path
        }
    };

    Ok(path)
}
