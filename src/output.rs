//! Image output for synthesized glyphs.

use anyhow::{Context, Result};
use boxcell_render::GlyphBitmap;
use image::GrayImage;
use std::path::Path;

/// Pixels between glyphs on a contact sheet
pub const SHEET_SPACING: u32 = 1;

/// Copy a glyph's alpha mask into a grayscale image (white = covered).
pub fn to_gray_image(bitmap: &GlyphBitmap) -> Result<GrayImage> {
    GrayImage::from_raw(bitmap.width(), bitmap.height(), bitmap.pixels().to_vec()).with_context(
        || {
            format!(
                "bitmap buffer does not match {}x{}",
                bitmap.width(),
                bitmap.height()
            )
        },
    )
}

/// Lay glyphs out left to right, top to bottom, `columns` per row, with
/// [`SHEET_SPACING`] pixels between cells. Missing glyphs leave a blank cell.
pub fn contact_sheet(
    glyphs: &[Option<&GlyphBitmap>],
    cell_width: u32,
    cell_height: u32,
    columns: u32,
) -> GrayImage {
    let columns = columns.max(1);
    let rows = (glyphs.len() as u32).div_ceil(columns).max(1);
    let stride_x = cell_width + SHEET_SPACING;
    let stride_y = cell_height + SHEET_SPACING;
    let mut sheet = GrayImage::new(
        columns * stride_x + SHEET_SPACING,
        rows * stride_y + SHEET_SPACING,
    );

    for (index, glyph) in glyphs.iter().enumerate() {
        let Some(glyph) = glyph else { continue };
        let index = index as u32;
        let origin_x = SHEET_SPACING + (index % columns) * stride_x;
        let origin_y = SHEET_SPACING + (index / columns) * stride_y;
        for y in 0..glyph.height().min(cell_height) {
            for x in 0..glyph.width().min(cell_width) {
                sheet.put_pixel(origin_x + x, origin_y + y, image::Luma([glyph.get(x, y)]));
            }
        }
    }

    sheet
}

/// Save a grayscale image as PNG.
pub fn write_png(image: &GrayImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
    log::info!("Wrote {}x{} PNG to {:?}", image.width(), image.height(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_gray_image_copies_alpha() {
        let mut bitmap = GlyphBitmap::new(3, 2);
        bitmap.set(2, 1, 0x80);
        let image = to_gray_image(&bitmap).unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1).0, [0x80]);
        assert_eq!(image.get_pixel(0, 0).0, [0]);
    }

    #[test]
    fn test_contact_sheet_layout() {
        let mut full = GlyphBitmap::new(2, 3);
        full.fill_rect(0, 0, 2, 3, 0xFF);
        let glyphs = [Some(&full), None, Some(&full)];

        let sheet = contact_sheet(&glyphs, 2, 3, 2);
        // 2 columns x 2 rows of 2x3 cells with 1px spacing
        assert_eq!(sheet.dimensions(), (2 * 3 + 1, 2 * 4 + 1));
        assert_eq!(sheet.get_pixel(0, 0).0, [0]);
        assert_eq!(sheet.get_pixel(1, 1).0, [0xFF]);
        // Second cell is blank
        assert_eq!(sheet.get_pixel(4, 1).0, [0]);
        // Third glyph starts the second row
        assert_eq!(sheet.get_pixel(1, 5).0, [0xFF]);
    }
}
