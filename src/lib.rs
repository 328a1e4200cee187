//! boxcell command-line front end.
//!
//! Loads a [`GlyphConfig`], applies per-invocation overrides and drives
//! `boxcell-render` to print glyphs as ASCII art or write them as PNG files.

pub mod cli;
pub mod output;

use anyhow::{Context, Result};
use boxcell_config::{GlyphConfig, resolve_supersampling_factor};
use boxcell_render::block_chars::ranges;
use boxcell_render::{BoxGlyphRenderer, CellGeometry, contains_non_canonical_lines};
use std::fmt::Write as _;
use std::path::Path;

use cli::{Cli, Commands, GeometryArgs};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Human-readable names for [`ranges::SUPPORTED`]
const RANGE_NAMES: [(&str, u32, u32); 5] = [
    (
        "Square bracket pieces",
        ranges::BRACKET_PIECES_START,
        ranges::BRACKET_PIECES_END,
    ),
    (
        "Box drawing",
        ranges::BOX_DRAWING_START,
        ranges::BOX_DRAWING_END,
    ),
    (
        "Block elements",
        ranges::BLOCK_ELEMENTS_START,
        ranges::BLOCK_ELEMENTS_END,
    ),
    ("Sextants", ranges::SEXTANTS_START, ranges::SEXTANTS_END),
    (
        "One-eighth blocks",
        ranges::EIGHTHS_START,
        ranges::EIGHTHS_END,
    ),
];

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            codepoint,
            geometry,
            png,
        } => {
            let config = apply_overrides(&config, geometry)?;
            match png {
                Some(path) => render_png(codepoint, &config, &path),
                None => {
                    print!("{}", render_ascii(codepoint, &config)?);
                    Ok(())
                }
            }
        }
        Commands::Sheet {
            png,
            columns,
            geometry,
        } => {
            let config = apply_overrides(&config, geometry)?;
            write_sheet(&config, columns, &png)
        }
        Commands::Ranges => {
            print!("{}", ranges_table());
            Ok(())
        }
    }
}

/// Load the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<GlyphConfig> {
    match path {
        Some(path) => GlyphConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => GlyphConfig::load().context("Failed to load default config"),
    }
}

/// Apply command-line geometry overrides on top of `config`.
///
/// A `--ssa` value takes precedence over both the config file and the
/// `SSA_FACTOR` environment variables.
pub fn apply_overrides(config: &GlyphConfig, args: GeometryArgs) -> Result<GlyphConfig> {
    let mut config = config.clone();
    if let Some(width) = args.width {
        config.cell_width = width;
    }
    if let Some(height) = args.height {
        config.cell_height = height;
    }
    if let Some(thickness) = args.thickness {
        config.line_thickness = thickness;
    }
    config.supersampling_factor = match args.ssa {
        Some(ssa) => resolve_supersampling_factor(ssa, None),
        None => config.effective_supersampling_factor(),
    };
    config.validate().context("Invalid glyph geometry")?;
    Ok(config)
}

fn renderer_for(config: &GlyphConfig) -> BoxGlyphRenderer<boxcell_render::LruGlyphCache> {
    BoxGlyphRenderer::new(
        CellGeometry::from(config),
        config.supersampling_factor,
        boxcell_render::LruGlyphCache::new(config.cache_capacity),
    )
}

fn synthesize(codepoint: u32, config: &GlyphConfig) -> Result<boxcell_render::GlyphBitmap> {
    boxcell_render::synthesize_strict(
        codepoint,
        CellGeometry::from(config),
        config.supersampling_factor,
    )
    .with_context(|| format!("Failed to synthesize U+{codepoint:04X}"))
}

/// One glyph as a header line followed by ASCII art.
pub fn render_ascii(codepoint: u32, config: &GlyphConfig) -> Result<String> {
    let bitmap = synthesize(codepoint, config)?;
    let mut out = String::new();
    let ch = char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER);
    write!(
        out,
        "U+{codepoint:04X} {ch} {}x{}",
        bitmap.width(),
        bitmap.height()
    )?;
    if contains_non_canonical_lines(codepoint) {
        write!(out, " (supersampled x{})", config.supersampling_factor)?;
    }
    out.push('\n');
    out.push_str(&bitmap.to_ascii());
    Ok(out)
}

/// Write one glyph as a grayscale PNG.
pub fn render_png(codepoint: u32, config: &GlyphConfig, path: &Path) -> Result<()> {
    let bitmap = synthesize(codepoint, config)?;
    output::write_png(&output::to_gray_image(&bitmap)?, path)
}

/// Write every supported glyph into one contact sheet.
pub fn write_sheet(config: &GlyphConfig, columns: u32, path: &Path) -> Result<()> {
    let mut renderer = renderer_for(config);
    let geometry = renderer.geometry();

    let glyphs: Vec<_> = ranges::SUPPORTED
        .iter()
        .flat_map(|&(start, end)| start..=end)
        .map(|codepoint| {
            let glyph = renderer.resolve(codepoint, geometry);
            if glyph.is_none() {
                log::warn!("U+{codepoint:04X} could not be synthesized, leaving it blank");
            }
            glyph
        })
        .collect();
    let borrowed: Vec<_> = glyphs.iter().map(|g| g.as_deref()).collect();

    let sheet = output::contact_sheet(&borrowed, geometry.width, geometry.height, columns);
    output::write_png(&sheet, path)
}

/// Supported ranges, one per line.
pub fn ranges_table() -> String {
    let mut out = String::new();
    for (name, start, end) in RANGE_NAMES {
        out.push_str(&format!(
            "U+{start:04X}..U+{end:04X}  {:>3} glyphs  {name}\n",
            end - start + 1
        ));
    }
    out
}
