//! Box drawing glyph construction (U+2500–U+257F).
//!
//! Glyphs with only straight edges are rasterized directly at the target
//! resolution. Glyphs with a diagonal or a rounded corner are rasterized at
//! `factor` times the cell size and line thickness, then box-filtered down.

use super::types::{BoxDescriptor, CellGeometry, GlyphBitmap};
use super::{arc, diagonal, edges, supersample};
use crate::error::GlyphError;

/// Rasterize `desc` at exactly `geometry`, with binary alpha.
pub fn build_box_glyph(
    codepoint: u32,
    desc: &BoxDescriptor,
    geometry: CellGeometry,
) -> Result<GlyphBitmap, GlyphError> {
    if let Err(e) = geometry
        .validate_line_thickness()
        .and_then(|()| geometry.validate_dashes(desc))
    {
        log::warn!("U+{codepoint:04X}: {e}");
        return Err(e);
    }

    let mut bitmap = GlyphBitmap::new(geometry.width, geometry.height);
    edges::draw_edges(&mut bitmap, desc, codepoint, geometry.line_thickness)?;
    diagonal::draw_diagonal(&mut bitmap, desc.diagonal, geometry.line_thickness);
    arc::draw_arc(&mut bitmap, desc.arc, geometry.line_thickness);

    log::trace!(
        "BoxDrawing: build U+{codepoint:04X} ({}x{}, thickness {})",
        geometry.width,
        geometry.height,
        geometry.line_thickness
    );
    Ok(bitmap)
}

/// Rasterize `desc` at `factor` times `geometry`, then downsample back to
/// the cell size.
pub fn build_antialiased_box_glyph(
    codepoint: u32,
    desc: &BoxDescriptor,
    geometry: CellGeometry,
    factor: u32,
) -> Result<GlyphBitmap, GlyphError> {
    let factor = factor.max(1);
    // Reject on the target geometry so the error names what the caller asked for
    if let Err(e) = geometry.validate_line_thickness() {
        log::warn!("U+{codepoint:04X}: {e}");
        return Err(e);
    }

    let large = build_box_glyph(codepoint, desc, geometry.scaled(factor))?;
    let bitmap = supersample::downsample(&large, factor);
    log::trace!(
        "BoxDrawing: downsampled U+{codepoint:04X} by {factor} to {}x{}",
        bitmap.width(),
        bitmap.height()
    );
    Ok(bitmap)
}

/// Build `desc`, taking the supersampled path exactly when it contains a
/// diagonal or an arc.
pub fn build(
    codepoint: u32,
    desc: &BoxDescriptor,
    geometry: CellGeometry,
    factor: u32,
) -> Result<GlyphBitmap, GlyphError> {
    if desc.contains_non_canonical_lines() {
        build_antialiased_box_glyph(codepoint, desc, geometry, factor)
    } else {
        build_box_glyph(codepoint, desc, geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_chars::types::{Arc, Diagonal, EdgeStyle, OPAQUE};

    #[test]
    fn test_light_vertical_stripe_at_column_5() {
        let desc = BoxDescriptor::EMPTY.vertical(EdgeStyle::Light);
        let bitmap = build_box_glyph(0x2502, &desc, CellGeometry::new(10, 20, 1)).unwrap();
        for y in 0..20 {
            for x in 0..10 {
                let expected = if x == 5 { OPAQUE } else { 0 };
                assert_eq!(bitmap.get(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_crossing_axes_do_not_erase_each_other() {
        let desc = BoxDescriptor::EMPTY
            .vertical(EdgeStyle::Heavy)
            .horizontal(EdgeStyle::Light);
        let bitmap = build_box_glyph(0x2542, &desc, CellGeometry::new(10, 20, 2)).unwrap();
        // Vertical heavy stroke visible above and below the horizontal one
        assert_eq!(bitmap.get(4, 0), OPAQUE);
        assert_eq!(bitmap.get(4, 19), OPAQUE);
        // Horizontal stroke visible on both sides
        assert_eq!(bitmap.get(0, 10), OPAQUE);
        assert_eq!(bitmap.get(9, 10), OPAQUE);
    }

    #[test]
    fn test_antialiased_glyph_has_target_size() {
        let desc = BoxDescriptor::EMPTY.diagonal(Diagonal::Cross);
        let bitmap = build(0x2573, &desc, CellGeometry::new(9, 17, 1), 3).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (9, 17));
        assert!(
            bitmap.pixels().iter().any(|&a| a != 0 && a != OPAQUE),
            "supersampled diagonal should have partial coverage"
        );
    }

    #[test]
    fn test_canonical_glyph_is_binary() {
        let desc = BoxDescriptor::EMPTY.horizontal(EdgeStyle::Double);
        let bitmap = build(0x2550, &desc, CellGeometry::new(9, 17, 1), 4).unwrap();
        assert!(bitmap.pixels().iter().all(|&a| a == 0 || a == OPAQUE));
    }

    #[test]
    fn test_rejects_thick_lines() {
        let desc = BoxDescriptor::EMPTY.arc(Arc::TopLeft);
        let err = build(0x256D, &desc, CellGeometry::new(8, 16, 4), 2).unwrap_err();
        assert!(matches!(err, GlyphError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_rejects_dashes_that_do_not_fit() {
        // Four dashes and four gaps need at least 8 pixels
        let desc = BoxDescriptor::EMPTY.horizontal(EdgeStyle::LightDash4);
        let err = build(0x2508, &desc, CellGeometry::new(7, 20, 1), 2).unwrap_err();
        assert!(matches!(err, GlyphError::InvalidGeometry { width: 7, .. }));

        let bitmap = build(0x2508, &desc, CellGeometry::new(8, 20, 1), 2).unwrap();
        assert_eq!(bitmap.row(10).iter().filter(|&&a| a == OPAQUE).count(), 4);
    }
}
