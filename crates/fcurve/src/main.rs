//! Command-line entry point for the `fcurve` tool.
//!
//! Renders pseudo-Hilbert curves to PNG images or animated GIFs.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
    process,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colornames::Color;
use image::Rgba;

/// CLI command implementations.
mod cmd;
/// Rasterization helpers shared by the CLI.
mod draw;

use crate::draw::{CurvePalette, StrokeOptions};

/// Parse a named or hex color into an `Rgba` value (alpha defaults to 0xff).
///
/// Supports CSS color names via `colornames` and hex RRGGBB or RRGGBBAA,
/// with or without a leading `#`.
fn parse_rgba_color(input: &str) -> Result<Rgba<u8>, String> {
    /// Parse a full-length hex color, returning `None` on malformed input.
    fn parse_hex_rgba(hex: &str) -> Option<Rgba<u8>> {
        let raw = hex.trim_start_matches('#');
        if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let pair = |idx: usize| u8::from_str_radix(raw.get(idx..idx + 2)?, 16).ok();
        match raw.len() {
            6 => Some(Rgba([pair(0)?, pair(2)?, pair(4)?, 0xff])),
            8 => Some(Rgba([pair(0)?, pair(2)?, pair(4)?, pair(6)?])),
            _ => None,
        }
    }

    let trimmed = input.trim();
    if let Some(rgba) = parse_hex_rgba(trimmed) {
        return Ok(rgba);
    }

    let color: Color = trimmed.try_into().map_err(|_| {
        format!("invalid color '{input}': use a named color or hex RRGGBB/RRGGBBAA ('#' optional)")
    })?;
    let (red, green, blue) = color.rgb();
    Ok(Rgba([red, green, blue, 0xff]))
}

#[derive(Parser)]
#[command(name = "fcurve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top-level CLI options and subcommands.
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Stroke-related arguments shared by the drawing subcommands.
#[derive(Clone, Copy, Debug, clap::Args)]
struct StrokeArgs {
    #[arg(
        short = 'w',
        long = "line-width",
        value_name = "PIXELS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Line width in pixels for the curve stroke"
    )]
    /// Stroke width for the rendered curve.
    line_width: u32,

    #[arg(
        long = "fg",
        visible_alias = "foreground",
        value_parser = parse_rgba_color,
        default_value = "#1072b8",
        value_name = "COLOR",
        help = "Stroke color at the start of the path (name or hex)"
    )]
    /// Stroke color at the start of the path.
    foreground: Rgba<u8>,

    #[arg(
        long = "to",
        value_parser = parse_rgba_color,
        value_name = "COLOR",
        help = "Grade the stroke towards COLOR along the path; solid when omitted"
    )]
    /// Optional gradient end color; the stroke is solid when omitted.
    gradient_to: Option<Rgba<u8>>,

    #[arg(
        long = "bg",
        visible_alias = "background",
        value_parser = parse_rgba_color,
        default_value = "#ffffff",
        value_name = "COLOR",
        help = "Background color (name or hex)"
    )]
    /// Background fill color.
    background: Rgba<u8>,
}

impl StrokeArgs {
    /// Convert the parsed arguments into rendering options.
    fn into_stroke(self) -> StrokeOptions {
        StrokeOptions {
            line_width: self.line_width,
            palette: CurvePalette {
                start: self.foreground,
                end: self.gradient_to.unwrap_or(self.foreground),
                background: self.background,
            },
        }
    }
}

#[derive(Subcommand)]
/// Subcommands supported by the `fcurve` tool.
enum Commands {
    #[command(about = "Render a curve to a PNG image")]
    /// Render a curve of a given order into a square PNG.
    Render {
        #[arg(
            short = 'o',
            long = "order",
            default_value_t = 5,
            help = "Curve recursion order"
        )]
        /// Recursion order of the curve.
        order: u32,

        #[arg(
            short = 's',
            long = "size",
            default_value_t = 512,
            help = "Square image size in pixels"
        )]
        /// Image size in pixels (square output).
        size: u32,

        #[command(flatten)]
        /// Stroke styling arguments.
        stroke: StrokeArgs,

        #[arg(help = "Output PNG file path")]
        /// Output file path.
        output: PathBuf,
    },

    #[command(about = "Draw a curve progressively into an animated GIF")]
    /// Animate the drawing of a curve as a GIF.
    Anim {
        #[arg(
            short = 'o',
            long = "order",
            default_value_t = 4,
            help = "Curve recursion order"
        )]
        /// Recursion order of the curve.
        order: u32,

        #[arg(
            short = 's',
            long = "size",
            default_value_t = 256,
            help = "Square image size in pixels"
        )]
        /// Image size in pixels (square output).
        size: u32,

        #[arg(
            long = "frames",
            default_value_t = 80,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Number of animation frames to spread the drawing over"
        )]
        /// Frame count for the animation.
        frames: u32,

        #[arg(
            long = "fps",
            default_value_t = 20,
            value_parser = clap::value_parser!(u16).range(1..=120),
            help = "Frames per second for the animated GIF"
        )]
        /// Frames per second for the animation (1-120).
        fps: u16,

        #[command(flatten)]
        /// Stroke styling arguments.
        stroke: StrokeArgs,

        #[arg(help = "Output GIF file path")]
        /// Output GIF path.
        output: PathBuf,
    },

    #[command(about = "Print segment count and pixel bounds for a curve")]
    /// Print curve statistics without rendering.
    Info {
        #[arg(
            short = 'o',
            long = "order",
            default_value_t = 5,
            help = "Curve recursion order"
        )]
        /// Recursion order of the curve.
        order: u32,

        #[arg(
            short = 's',
            long = "size",
            default_value_t = 512,
            help = "Square image size in pixels the curve would be laid out for"
        )]
        /// Layout size in pixels.
        size: u32,
    },
}

/// Print a success message or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: &str) {
    match result {
        Ok(()) => println!("{ok_msg}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Handle the `render` subcommand.
fn handle_render(order: u32, size: u32, stroke: StrokeOptions, output: &Path) -> Result<()> {
    let image = cmd::render(order, size, stroke)?;
    image.save(output)?;
    Ok(())
}

/// Handle the `info` subcommand.
fn handle_info(order: u32, size: u32) -> Result<()> {
    println!("{}", cmd::info(order, size)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            order,
            size,
            stroke,
            output,
        } => report_ok(
            handle_render(order, size, stroke.into_stroke(), &output),
            "OK!",
        ),
        Commands::Anim {
            order,
            size,
            frames,
            fps,
            stroke,
            output,
        } => report_ok(
            cmd::anim(cmd::AnimOptions {
                order,
                size,
                frames,
                fps,
                stroke: stroke.into_stroke(),
                output: &output,
            }),
            "Saved curve GIF!",
        ),
        Commands::Info { order, size } => {
            if let Err(e) = handle_info(order, size) {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(
            parse_rgba_color("#1072b8").unwrap(),
            Rgba([0x10, 0x72, 0xb8, 0xff])
        );
        assert_eq!(
            parse_rgba_color("1072b880").unwrap(),
            Rgba([0x10, 0x72, 0xb8, 0x80])
        );
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(parse_rgba_color("white").unwrap(), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(parse_rgba_color("#12").is_err());
        assert!(parse_rgba_color("notacolor").is_err());
    }
}
