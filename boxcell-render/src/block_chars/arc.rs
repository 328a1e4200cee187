//! Rounded corner rasterization (╭ ╮ ╯ ╰).
//!
//! A corner is the band between two concentric quarter ellipses centered on
//! a cell corner, sized so both arms line up with the straight strokes. Both outlines are traced with the midpoint ellipse algorithm
//! and every pixel they touch is recorded per row; each row is then filled
//! between its leftmost and rightmost recorded column.

use super::types::{Arc, GlyphBitmap, OPAQUE};

/// Columns touched per row, used to fill the band between two outlines.
#[derive(Debug, Clone, Default)]
pub(super) struct ScanlineSpans {
    rows: Vec<Vec<u32>>,
    width: u32,
}

impl ScanlineSpans {
    pub(super) fn new(width: u32, height: u32) -> Self {
        Self {
            rows: vec![Vec::new(); height as usize],
            width,
        }
    }

    /// Record a pixel, clamped into the cell.
    pub(super) fn record(&mut self, x: i64, y: i64) {
        if self.rows.is_empty() || self.width == 0 {
            return;
        }
        let x = x.clamp(0, self.width as i64 - 1) as u32;
        let y = y.clamp(0, self.rows.len() as i64 - 1) as usize;
        self.rows[y].push(x);
    }

    /// Fill `min..=max` of the recorded columns on every non-empty row.
    pub(super) fn fill(mut self, bitmap: &mut GlyphBitmap) {
        for (y, columns) in self.rows.iter_mut().enumerate() {
            columns.sort_unstable();
            if let (Some(&first), Some(&last)) = (columns.first(), columns.last()) {
                bitmap.fill_rect(first as i64, y as i64, last as i64 + 1, y as i64 + 1, OPAQUE);
            }
        }
    }
}

/// Whether the corner's ellipse center lies on the right edge (x) and on the
/// bottom edge (y). Mirrored coordinates count back from the last pixel.
fn mirrored_axes(arc: Arc) -> (bool, bool) {
    match arc {
        Arc::TopLeft => (true, true),
        Arc::TopRight => (false, true),
        Arc::BottomLeft => (true, false),
        Arc::BottomRight | Arc::None => (false, false),
    }
}

/// Inner and outer radius along one axis, chosen so the ring's ends cover
/// exactly the straight stroke `[start, start + t)` of a cell `extent`
/// pixels wide.
fn radii(extent: i64, start: i64, t: i64, mirrored: bool) -> (f64, f64) {
    let (inner, outer) = if mirrored {
        (extent - start - t, extent - 1 - start)
    } else {
        (start, start + t - 1)
    };
    (inner as f64, outer as f64)
}

/// Trace one quadrant of an axis-aligned ellipse with radii `rx`, `ry`
/// using the midpoint algorithm, calling `plot` for every outline point.
///
/// Points start at `(0, ry)` and end at `(rx, 0)`.
pub(super) fn trace_ellipse_quadrant(rx: f64, ry: f64, mut plot: impl FnMut(i64, i64)) {
    let rx = rx.max(0.0);
    let ry = ry.max(0.0);
    let (rx2, ry2) = (rx * rx, ry * ry);

    let mut x = 0.0_f64;
    let mut y = ry;
    let mut dx = 2.0 * ry2 * x;
    let mut dy = 2.0 * rx2 * y;

    // Region 1: slope magnitude below 1
    let mut d1 = ry2 - rx2 * ry + 0.25 * rx2;
    while dx < dy {
        plot(x as i64, y as i64);
        x += 1.0;
        dx += 2.0 * ry2;
        if d1 < 0.0 {
            d1 += dx + ry2;
        } else {
            y -= 1.0;
            dy -= 2.0 * rx2;
            d1 += dx - dy + ry2;
        }
    }

    // Region 2: slope magnitude at or above 1
    let mut d2 = ry2 * (x + 0.5) * (x + 0.5) + rx2 * (y - 1.0) * (y - 1.0) - rx2 * ry2;
    while y >= 0.0 {
        plot(x as i64, y as i64);
        y -= 1.0;
        dy -= 2.0 * rx2;
        if d2 > 0.0 {
            d2 += rx2 - dy;
        } else {
            x += 1.0;
            dx += 2.0 * ry2;
            d2 += dx - dy + rx2;
        }
    }
}

/// Draw a rounded corner of light line `thickness` into `bitmap`.
pub(super) fn draw_arc(bitmap: &mut GlyphBitmap, arc: Arc, thickness: u32) {
    if arc == Arc::None {
        return;
    }
    let (width, height) = (bitmap.width(), bitmap.height());
    let (w, h, t) = (width as i64, height as i64, thickness as i64);
    let mut spans = ScanlineSpans::new(width, height);

    // Same stroke placement as the light ─ and │ lines
    let stroke_x = w / 2 - t / 2;
    let stroke_y = h / 2 - t / 2;
    let (mirror_x, mirror_y) = mirrored_axes(arc);
    let (rx_inner, rx_outer) = radii(w, stroke_x, t, mirror_x);
    let (ry_inner, ry_outer) = radii(h, stroke_y, t, mirror_y);

    for (rx, ry) in [(rx_inner, ry_inner), (rx_outer, ry_outer)] {
        trace_ellipse_quadrant(rx, ry, |x, y| {
            let px = if mirror_x { w - 1 - x } else { x };
            let py = if mirror_y { h - 1 - y } else { y };
            spans.record(px, py);
        });
    }

    // The horizontal arm ends at the cell edge; close it there so the rows
    // it covers fill all the way out.
    let edge_column = if mirror_x { w - 1 } else { 0 };
    for i in 0..t {
        spans.record(edge_column, stroke_y + i);
    }

    spans.fill(bitmap);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_circle_endpoints() {
        let mut points = Vec::new();
        trace_ellipse_quadrant(5.0, 5.0, |x, y| points.push((x, y)));
        assert_eq!(points.first(), Some(&(0, 5)));
        assert_eq!(points.last(), Some(&(5, 0)));
        // x never decreases, y never increases
        for pair in points.windows(2) {
            assert!(pair[1].0 >= pair[0].0);
            assert!(pair[1].1 <= pair[0].1);
        }
    }

    #[test]
    fn test_trace_degenerate_radius() {
        let mut points = Vec::new();
        trace_ellipse_quadrant(0.0, 3.0, |x, y| points.push((x, y)));
        assert_eq!(points, vec![(0, 3), (0, 2), (0, 1), (0, 0)]);
    }

    #[test]
    fn test_spans_fill_inclusive_range() {
        let mut spans = ScanlineSpans::new(8, 2);
        spans.record(5, 0);
        spans.record(2, 0);
        spans.record(-3, 1);
        let mut bitmap = GlyphBitmap::new(8, 2);
        spans.fill(&mut bitmap);
        assert_eq!(bitmap.row(0), &[0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0]);
        assert_eq!(bitmap.row(1), &[0xFF, 0, 0, 0, 0, 0, 0, 0]);
    }

    fn filled_rows_in_column(bitmap: &GlyphBitmap, x: u32) -> Vec<u32> {
        (0..bitmap.height()).filter(|&y| bitmap.get(x, y) == OPAQUE).collect()
    }

    fn filled_columns_in_row(bitmap: &GlyphBitmap, y: u32) -> Vec<u32> {
        (0..bitmap.width()).filter(|&x| bitmap.get(x, y) == OPAQUE).collect()
    }

    #[test]
    fn test_top_left_arc_reaches_right_and_bottom_edges() {
        let mut bitmap = GlyphBitmap::new(20, 40);
        draw_arc(&mut bitmap, Arc::TopLeft, 2);

        // Arm leaves through the right edge on the ─ rows
        assert_eq!(filled_rows_in_column(&bitmap, 19), vec![19, 20]);
        // Arm leaves through the bottom edge on the │ columns
        assert_eq!(filled_columns_in_row(&bitmap, 39), vec![9, 10]);
        assert!(bitmap.row(0).iter().all(|&a| a == 0));
    }

    #[test]
    fn test_arc_arms_meet_straight_strokes() {
        use super::super::edges::draw_edges;
        use super::super::types::{BoxDescriptor, EdgeStyle};

        let light = BoxDescriptor::EMPTY
            .vertical(EdgeStyle::Light)
            .horizontal(EdgeStyle::Light);
        for (w, h, t, arc) in [
            (20, 40, 2, Arc::TopLeft),
            (20, 40, 2, Arc::TopRight),
            (20, 40, 2, Arc::BottomRight),
            (20, 40, 2, Arc::BottomLeft),
            (15, 31, 3, Arc::TopLeft),
            (15, 31, 3, Arc::BottomRight),
            (9, 17, 1, Arc::TopRight),
            (9, 17, 1, Arc::BottomLeft),
        ] {
            let mut cross = GlyphBitmap::new(w, h);
            draw_edges(&mut cross, &light, 0x253C, t).unwrap();
            let line_rows = filled_rows_in_column(&cross, 0);
            let line_cols = filled_columns_in_row(&cross, 0);

            let mut bitmap = GlyphBitmap::new(w, h);
            draw_arc(&mut bitmap, arc, t);
            let (side_x, end_y) = match arc {
                Arc::TopLeft => (w - 1, h - 1),
                Arc::TopRight => (0, h - 1),
                Arc::BottomRight => (0, 0),
                _ => (w - 1, 0),
            };
            assert_eq!(
                filled_rows_in_column(&bitmap, side_x),
                line_rows,
                "{arc:?} at {w}x{h}/{t}: rows"
            );
            assert_eq!(
                filled_columns_in_row(&bitmap, end_y),
                line_cols,
                "{arc:?} at {w}x{h}/{t}: columns"
            );
        }
    }

    #[test]
    fn test_corners_mirror_each_other() {
        let (w, h) = (20, 40);
        let mut top_left = GlyphBitmap::new(w, h);
        let mut top_right = GlyphBitmap::new(w, h);
        draw_arc(&mut top_left, Arc::TopLeft, 2);
        draw_arc(&mut top_right, Arc::TopRight, 2);
        let opaque = |b: &GlyphBitmap| b.pixels().iter().filter(|&&a| a == OPAQUE).count();
        let (a, b) = (opaque(&top_left), opaque(&top_right));
        assert!(a.abs_diff(b) <= h as usize, "{a} vs {b}");
    }

    #[test]
    fn test_arc_rows_are_contiguous() {
        let mut bitmap = GlyphBitmap::new(20, 40);
        draw_arc(&mut bitmap, Arc::BottomRight, 2);
        for y in 0..40 {
            let row = bitmap.row(y);
            let filled: Vec<usize> = (0..20).filter(|&x| row[x] == OPAQUE).collect();
            if let (Some(&first), Some(&last)) = (filled.first(), filled.last()) {
                assert_eq!(filled.len(), last - first + 1, "row {y} has a gap");
            }
        }
    }
}
