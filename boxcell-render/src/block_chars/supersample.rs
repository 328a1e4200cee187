//! Box-filter downsampling for supersampled glyphs.

use super::types::GlyphBitmap;

/// Average each `factor` x `factor` block of `source` into one pixel.
///
/// The output is `ceil(width / factor)` x `ceil(height / factor)`; partial
/// blocks at the right and bottom edges average over the pixels they have.
/// A factor of 0 or 1 returns a copy of `source`.
pub fn downsample(source: &GlyphBitmap, factor: u32) -> GlyphBitmap {
    if factor <= 1 {
        return source.clone();
    }

    let width = source.width().div_ceil(factor);
    let height = source.height().div_ceil(factor);
    let mut target = GlyphBitmap::new(width, height);

    for ty in 0..height {
        let y0 = ty * factor;
        let y1 = (y0 + factor).min(source.height());
        for tx in 0..width {
            let x0 = tx * factor;
            let x1 = (x0 + factor).min(source.width());

            let mut total = 0u32;
            for y in y0..y1 {
                total += source.row(y)[x0 as usize..x1 as usize]
                    .iter()
                    .map(|&a| u32::from(a))
                    .sum::<u32>();
            }
            let count = (y1 - y0) * (x1 - x0);
            if count > 0 {
                target.set(tx, ty, (total / count) as u8);
            }
        }
    }

    target
}
