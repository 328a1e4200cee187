//! Procedural glyph synthesis for terminal renderers.
//!
//! This crate builds cell-sized 8-bit alpha masks for characters that look
//! best when drawn geometrically rather than taken from a font:
//!
//! - Box drawing (U+2500–U+257F), including dashed, double, heavy, diagonal
//!   and rounded-corner lines
//! - Block elements (U+2580–U+259F) and shades
//! - Sextants (U+1FB00–U+1FB3B) and one-eighth blocks (U+1FB70–U+1FB8B)
//! - Square bracket pieces (U+23A1–U+23A6)
//!
//! [`BoxGlyphRenderer`] wraps synthesis with a [`GlyphCache`] so each glyph is
//! built once per cell geometry.

pub mod block_chars;
pub mod error;
pub mod glyph_cache;

// Re-export main public types
pub use block_chars::{
    BlockCharType, BoxDescriptor, CellGeometry, EdgeStyle, GlyphBitmap, classify_char,
    contains_non_canonical_lines, descriptor_for, renderable, synthesize, synthesize_strict,
};
pub use error::GlyphError;
pub use glyph_cache::{BoxGlyphRenderer, GlyphCache, GlyphKey, LruGlyphCache};
