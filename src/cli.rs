//! Command-line interface for boxcell.
//!
//! Argument parsing lives here; the subcommands themselves are run by
//! [`crate::run`].

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// boxcell - procedural box drawing and block element glyphs
#[derive(Parser, Debug)]
#[command(name = "boxcell")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Load configuration from this file instead of ~/.config/boxcell/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set log level (overrides RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one glyph as ASCII art, or to a PNG file
    Render {
        /// Codepoint as U+256D, 0x256d, 256d, or the character itself
        #[arg(value_parser = parse_codepoint)]
        codepoint: u32,

        #[command(flatten)]
        geometry: GeometryArgs,

        /// Write a grayscale PNG instead of printing ASCII art
        #[arg(long, value_name = "PATH")]
        png: Option<PathBuf>,
    },

    /// Render every supported glyph into one grayscale contact sheet
    Sheet {
        /// Output PNG path
        #[arg(long, value_name = "PATH")]
        png: PathBuf,

        /// Glyphs per row
        #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..))]
        columns: u32,

        #[command(flatten)]
        geometry: GeometryArgs,
    },

    /// List the supported Unicode ranges
    Ranges,
}

/// Per-invocation overrides of the configured cell geometry
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct GeometryArgs {
    /// Cell width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Cell height in pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Base line thickness in pixels
    #[arg(long, value_name = "PX")]
    pub thickness: Option<u32>,

    /// Supersampling factor for diagonals and arcs (1-8)
    #[arg(long, value_name = "N")]
    pub ssa: Option<u32>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Parse a codepoint written as `U+XXXX`, `0xXXXX`, bare hex, or a single
/// non-ASCII character.
pub fn parse_codepoint(input: &str) -> Result<u32, String> {
    let trimmed = input.trim();

    let mut chars = trimmed.chars();
    if let (Some(ch), None) = (chars.next(), chars.next())
        && !ch.is_ascii()
    {
        return Ok(ch as u32);
    }

    let hex = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let value = u32::from_str_radix(hex, 16)
        .map_err(|_| format!("'{input}' is not a codepoint (try U+2500 or 0x2500)"))?;
    char::from_u32(value)
        .map(|ch| ch as u32)
        .ok_or_else(|| format!("U+{value:04X} is not a Unicode scalar value"))
}
