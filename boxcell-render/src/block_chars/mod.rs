//! Block character detection and procedural glyph synthesis.
//!
//! This module classifies Unicode box drawing, block element, sextant and
//! bracket piece characters and synthesizes cell-sized alpha masks for them
//! without consulting a font.
//!
//! Block elements, sextants and bracket pieces are unions of fractional
//! rectangles (see [`ratio`]). Box drawing characters are described by a
//! static per-codepoint [`BoxDescriptor`] table and rasterized from it, with
//! diagonals and rounded corners drawn supersampled for anti-aliasing.

mod arc;
pub mod block_elements;
mod box_drawing;
mod box_drawing_data;
mod diagonal;
mod edges;
pub mod ratio;
pub mod supersample;
pub mod types;

// Re-export public API
pub use block_elements::{get_mosaic, sextant_mask};
pub use box_drawing::{build_antialiased_box_glyph, build_box_glyph};
pub use ratio::{MosaicBlock, Ratio, RatioBlock};
pub use supersample::downsample;
pub use types::{
    Arc, BlockCharType, BoxDescriptor, CellGeometry, Dash, Diagonal, Edge, EdgeStyle,
    GlyphBitmap, OPAQUE, Weight, ranges,
};

use crate::error::GlyphError;
use box_drawing_data::BOX_DRAWING_DESCRIPTORS;

/// Classify a character for rendering decisions
pub fn classify_char(ch: char) -> BlockCharType {
    let code = ch as u32;

    // Box Drawing (U+2500–U+257F)
    if (ranges::BOX_DRAWING_START..=ranges::BOX_DRAWING_END).contains(&code) {
        return BlockCharType::BoxDrawing;
    }

    // Block Elements (U+2580–U+259F)
    if (ranges::BLOCK_ELEMENTS_START..=ranges::BLOCK_ELEMENTS_END).contains(&code) {
        return classify_block_element(ch);
    }

    // Sextants (U+1FB00–U+1FB3B)
    if (ranges::SEXTANTS_START..=ranges::SEXTANTS_END).contains(&code) {
        return BlockCharType::Sextant;
    }

    // One-eighth blocks (U+1FB70–U+1FB8B)
    if (ranges::EIGHTHS_START..=ranges::EIGHTHS_END).contains(&code) {
        return BlockCharType::PartialBlock;
    }

    // Square bracket pieces (U+23A1–U+23A6)
    if (ranges::BRACKET_PIECES_START..=ranges::BRACKET_PIECES_END).contains(&code) {
        return BlockCharType::Bracket;
    }

    BlockCharType::None
}

/// Classify block elements into solid, partial, or shade
fn classify_block_element(ch: char) -> BlockCharType {
    match ch {
        // Shade characters
        '\u{2591}' | '\u{2592}' | '\u{2593}' => BlockCharType::Shade,

        // Full block
        '\u{2588}' => BlockCharType::SolidBlock,

        // Half blocks, quadrants, eighth blocks
        _ => BlockCharType::PartialBlock,
    }
}

/// Whether `codepoint` lies in one of the ranges this module synthesizes.
pub fn renderable(codepoint: u32) -> bool {
    ranges::SUPPORTED
        .iter()
        .any(|&(start, end)| (start..=end).contains(&codepoint))
}

/// Box drawing descriptor for a codepoint in U+2500–U+257F
pub fn descriptor_for(codepoint: u32) -> Option<BoxDescriptor> {
    let index = codepoint.checked_sub(ranges::BOX_DRAWING_START)? as usize;
    BOX_DRAWING_DESCRIPTORS.get(index).copied()
}

/// Whether the glyph for `codepoint` has a diagonal or a rounded corner and
/// is therefore built through the supersampled path.
pub fn contains_non_canonical_lines(codepoint: u32) -> bool {
    descriptor_for(codepoint).is_some_and(|desc| desc.contains_non_canonical_lines())
}

/// Synthesize the glyph for `codepoint` at `geometry`.
///
/// Returns `Ok(None)` for codepoints outside every supported range. Box
/// drawing glyphs that need anti-aliasing are built at `supersampling_factor`
/// times the cell size.
pub fn synthesize(
    codepoint: u32,
    geometry: CellGeometry,
    supersampling_factor: u32,
) -> Result<Option<GlyphBitmap>, GlyphError> {
    if let Err(e) = geometry.validate_size() {
        log::warn!("U+{codepoint:04X}: {e}");
        return Err(e);
    }

    if let Some(mosaic) = get_mosaic(codepoint) {
        log::trace!(
            "Block: build U+{codepoint:04X} ({}x{}, {} rects)",
            geometry.width,
            geometry.height,
            mosaic.blocks().len()
        );
        return Ok(Some(mosaic.render(geometry.width, geometry.height)));
    }

    match descriptor_for(codepoint) {
        Some(desc) => box_drawing::build(codepoint, &desc, geometry, supersampling_factor).map(Some),
        None => Ok(None),
    }
}

/// Like [`synthesize`], but unsupported codepoints are an error.
pub fn synthesize_strict(
    codepoint: u32,
    geometry: CellGeometry,
    supersampling_factor: u32,
) -> Result<GlyphBitmap, GlyphError> {
    synthesize(codepoint, geometry, supersampling_factor)?
        .ok_or(GlyphError::UnsupportedCodepoint(codepoint))
}
