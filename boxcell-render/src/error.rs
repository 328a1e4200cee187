//! Typed error types for boxcell-render.
//!
//! Synthesis is pure and deterministic, so every error is permanent for the
//! given input: retrying never helps.

use thiserror::Error;

use crate::block_chars::{Edge, EdgeStyle};

/// Failure to synthesize a glyph bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
    /// The cell size or line thickness cannot produce a sensible glyph.
    #[error("invalid cell geometry {width}x{height} (line thickness {line_thickness}): {reason}")]
    InvalidGeometry {
        width: u32,
        height: u32,
        line_thickness: u32,
        reason: &'static str,
    },

    /// A dash-styled edge was not matched by an identical opposite edge, so
    /// no dash pattern can be derived for its axis.
    #[error("U+{codepoint:04X}: {edge} edge has unpaired dash style {style}")]
    UnpairedDash {
        codepoint: u32,
        edge: Edge,
        style: EdgeStyle,
    },

    /// The codepoint lies outside every synthesized range.
    #[error("U+{0:04X} is not a synthesized glyph")]
    UnsupportedCodepoint(u32),
}
