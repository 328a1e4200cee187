//! Straight edge rasterization for box drawing glyphs.
//!
//! Each axis is drawn on its own: a dashed axis is laid out as evenly spaced
//! segments across the whole cell, otherwise each half-edge is drawn as one
//! or two solid strokes. Both axes write into the same bitmap, so crossing
//! strokes simply overlap.

use super::types::{BoxDescriptor, Dash, Edge, EdgeStyle, GlyphBitmap, OPAQUE, Weight};
use crate::error::GlyphError;

/// Orientation of the strokes being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Draw the four cardinal edges of `desc` into `bitmap`.
///
/// `thickness` is the light line thickness in bitmap pixels.
pub(super) fn draw_edges(
    bitmap: &mut GlyphBitmap,
    desc: &BoxDescriptor,
    codepoint: u32,
    thickness: u32,
) -> Result<(), GlyphError> {
    let t = thickness as i64;

    match desc.dashed_horizontal() {
        Some(dash) => draw_dashed(bitmap, Axis::Horizontal, dash, t),
        None => {
            let half = bitmap.width() as i64 / 2;
            let full = bitmap.width() as i64;
            draw_half_edge(bitmap, Axis::Horizontal, desc.left, Edge::Left, (0, half), t, codepoint)?;
            draw_half_edge(bitmap, Axis::Horizontal, desc.right, Edge::Right, (half, full), t, codepoint)?;
        }
    }

    match desc.dashed_vertical() {
        Some(dash) => draw_dashed(bitmap, Axis::Vertical, dash, t),
        None => {
            let half = bitmap.height() as i64 / 2;
            let full = bitmap.height() as i64;
            draw_half_edge(bitmap, Axis::Vertical, desc.up, Edge::Up, (0, half), t, codepoint)?;
            draw_half_edge(bitmap, Axis::Vertical, desc.down, Edge::Down, (half, full), t, codepoint)?;
        }
    }

    Ok(())
}

/// Cross-axis spans `[start, end)` of the strokes making up a solid style.
///
/// `center` is the cell midline across the stroke direction.
fn strokes(style: EdgeStyle, center: i64, t: i64) -> Vec<(i64, i64)> {
    match style {
        EdgeStyle::Light => {
            let start = center - t / 2;
            vec![(start, start + t)]
        }
        EdgeStyle::Heavy => {
            let start = center - t;
            vec![(start, start + 2 * t)]
        }
        EdgeStyle::Double => {
            let inner = center - t / 2;
            vec![(inner - t, inner), (inner + t, inner + 2 * t)]
        }
        _ => Vec::new(),
    }
}

fn draw_half_edge(
    bitmap: &mut GlyphBitmap,
    axis: Axis,
    style: EdgeStyle,
    edge: Edge,
    (from, to): (i64, i64),
    t: i64,
    codepoint: u32,
) -> Result<(), GlyphError> {
    if style.is_dashed() {
        log::error!(
            "U+{codepoint:04X}: {edge} edge is {style} without a matching dash on the opposite edge"
        );
        return Err(GlyphError::UnpairedDash {
            codepoint,
            edge,
            style,
        });
    }

    let center = match axis {
        Axis::Horizontal => bitmap.height() as i64 / 2,
        Axis::Vertical => bitmap.width() as i64 / 2,
    };
    for (start, end) in strokes(style, center, t) {
        fill_stroke(bitmap, axis, (from, to), (start, end));
    }
    Ok(())
}

/// Evenly spaced dash segments spanning the whole cell along `axis`.
///
/// With `p = length / (2 * segments)`, segment `i` starts at
/// `round(round(p / 2) + i * length / segments)` and covers `trunc(p)` pixels,
/// which leaves a gap of about `p` between segments and half that at the ends.
fn draw_dashed(bitmap: &mut GlyphBitmap, axis: Axis, dash: Dash, t: i64) {
    let thick = match dash.weight {
        Weight::Light => t,
        Weight::Heavy => 2 * t,
    };
    let (length, center) = match axis {
        Axis::Horizontal => (bitmap.width(), bitmap.height() as i64 / 2),
        Axis::Vertical => (bitmap.height(), bitmap.width() as i64 / 2),
    };
    let cross = (center - thick / 2, center - thick / 2 + thick);

    let segments = f64::from(dash.segments);
    let length = f64::from(length);
    let p = length / (2.0 * segments);
    let dash_len = p as i64;
    let mut pos = (p / 2.0).round();
    for _ in 0..dash.segments {
        let start = pos.round() as i64;
        fill_stroke(bitmap, axis, (start, start + dash_len), cross);
        pos += length / segments;
    }
}

/// Fill a stroke given its extent `along` the axis and `across` it.
fn fill_stroke(bitmap: &mut GlyphBitmap, axis: Axis, along: (i64, i64), across: (i64, i64)) {
    match axis {
        Axis::Horizontal => bitmap.fill_rect(along.0, across.0, along.1, across.1, OPAQUE),
        Axis::Vertical => bitmap.fill_rect(across.0, along.0, across.1, along.1, OPAQUE),
    }
}
