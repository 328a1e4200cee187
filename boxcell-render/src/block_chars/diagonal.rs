//! Diagonal strokes (╱ ╲ ╳).

use super::types::{Diagonal, GlyphBitmap, OPAQUE};

/// Draw the diagonal strokes of `diagonal` with a horizontal run of
/// `thickness` pixels per row.
pub(super) fn draw_diagonal(bitmap: &mut GlyphBitmap, diagonal: Diagonal, thickness: u32) {
    let (width, height) = (bitmap.width(), bitmap.height());
    if width == 0 || height == 0 {
        return;
    }
    let run = thickness.max(1) as i64;
    let slope = width as f64 / height as f64;

    for y in 0..height {
        if diagonal.has_forward() {
            // Bottom-left to top-right
            let x = (f64::from(height - 1 - y) * slope) as i64;
            fill_run(bitmap, x, y, run);
        }
        if diagonal.has_backward() {
            // Top-left to bottom-right
            let x = (f64::from(y) * slope) as i64;
            fill_run(bitmap, x, y, run);
        }
    }
}

fn fill_run(bitmap: &mut GlyphBitmap, center: i64, y: u32, run: i64) {
    let last = bitmap.width() as i64 - 1;
    let start = (center - run / 2).clamp(0, last);
    let end = (center - run / 2 + run).clamp(start + 1, last + 1);
    bitmap.fill_rect(start, y as i64, end, y as i64 + 1, OPAQUE);
}
