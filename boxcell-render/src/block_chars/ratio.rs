//! Fractional rectangle algebra for block elements.
//!
//! A [`RatioBlock`] covers part of a cell in normalized coordinates, where
//! `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right one.
//! Blocks combine with `|` (union, producing a [`MosaicBlock`]) and `&`
//! (intersection, producing a smaller [`RatioBlock`]):
//!
//! ```
//! use boxcell_render::block_chars::ratio::{left, lower, upper};
//!
//! // ▙ = upper-left quadrant plus the lower half
//! let mosaic = (upper(0.5) & left(0.5)) | lower(0.5);
//! assert_eq!(mosaic.blocks().len(), 2);
//! ```

use std::ops::{BitAnd, BitOr};

use super::types::{GlyphBitmap, OPAQUE};

/// Guards `floor` against products like `0.333… * 18` landing just below an
/// integer.
const SNAP_EPSILON: f64 = 1e-9;

/// A point in normalized cell coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio {
    pub x: f64,
    pub y: f64,
}

impl Ratio {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle from `from` (top-left) to `to` (bottom-right) in
/// normalized cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioBlock {
    pub from: Ratio,
    pub to: Ratio,
}

impl RatioBlock {
    pub const fn new(from: Ratio, to: Ratio) -> Self {
        Self { from, to }
    }

    /// The whole cell
    pub const fn full() -> Self {
        Self::new(Ratio::new(0.0, 0.0), Ratio::new(1.0, 1.0))
    }

    pub fn is_empty(&self) -> bool {
        self.from.x >= self.to.x || self.from.y >= self.to.y
    }

    /// Pixel bounds `(x0, y0, x1, y1)` as a half-open rectangle.
    ///
    /// Edges snap down to whole pixels, so complementary blocks such as
    /// `upper(0.5)` and `lower(0.5)` tile the cell without overlap or gap.
    pub fn to_pixels(&self, width: u32, height: u32) -> (i64, i64, i64, i64) {
        let snap = |r: f64, extent: u32| (r * extent as f64 + SNAP_EPSILON).floor() as i64;
        (
            snap(self.from.x, width),
            snap(self.from.y, height),
            snap(self.to.x, width),
            snap(self.to.y, height),
        )
    }

    /// Fill this block into a bitmap with the given alpha.
    pub fn fill(&self, bitmap: &mut GlyphBitmap, alpha: u8) {
        let (x0, y0, x1, y1) = self.to_pixels(bitmap.width(), bitmap.height());
        bitmap.fill_rect(x0, y0, x1, y1, alpha);
    }
}

/// Intersection: the tighter bound on every side.
impl BitAnd for RatioBlock {
    type Output = RatioBlock;

    fn bitand(self, rhs: RatioBlock) -> RatioBlock {
        RatioBlock::new(
            Ratio::new(self.from.x.max(rhs.from.x), self.from.y.max(rhs.from.y)),
            Ratio::new(self.to.x.min(rhs.to.x), self.to.y.min(rhs.to.y)),
        )
    }
}

impl BitOr for RatioBlock {
    type Output = MosaicBlock;

    fn bitor(self, rhs: RatioBlock) -> MosaicBlock {
        MosaicBlock::from(self) | rhs
    }
}

/// Covers fraction `f` of the cell from the top edge.
pub fn upper(f: f64) -> RatioBlock {
    RatioBlock::new(Ratio::new(0.0, 0.0), Ratio::new(1.0, f))
}

/// Covers fraction `f` of the cell from the bottom edge.
pub fn lower(f: f64) -> RatioBlock {
    RatioBlock::new(Ratio::new(0.0, 1.0 - f), Ratio::new(1.0, 1.0))
}

/// Covers fraction `f` of the cell from the left edge.
pub fn left(f: f64) -> RatioBlock {
    RatioBlock::new(Ratio::new(0.0, 0.0), Ratio::new(f, 1.0))
}

/// Covers fraction `f` of the cell from the right edge.
pub fn right(f: f64) -> RatioBlock {
    RatioBlock::new(Ratio::new(1.0 - f, 0.0), Ratio::new(1.0, 1.0))
}

/// The `n`-th (1-indexed) full-height column of width `f`, counted from the
/// left edge.
pub fn horiz_nth(f: f64, n: u32) -> RatioBlock {
    let start = f * (n.saturating_sub(1)) as f64;
    RatioBlock::new(Ratio::new(start, 0.0), Ratio::new((start + f).min(1.0), 1.0))
}

/// The `n`-th (1-indexed) full-width row of height `f`, counted from the top
/// edge.
pub fn vert_nth(f: f64, n: u32) -> RatioBlock {
    let start = f * (n.saturating_sub(1)) as f64;
    RatioBlock::new(Ratio::new(0.0, start), Ratio::new(1.0, (start + f).min(1.0)))
}

/// Union of ratio blocks filled with one alpha value.
///
/// Filling is an idempotent overwrite, so member order and overlap do not
/// affect the result.
#[derive(Debug, Clone, PartialEq)]
pub struct MosaicBlock {
    blocks: Vec<RatioBlock>,
    alpha: u8,
}

impl MosaicBlock {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            alpha: OPAQUE,
        }
    }

    /// Same shape, filled with a partial alpha (shade characters).
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn blocks(&self) -> &[RatioBlock] {
        &self.blocks
    }

    pub fn push(&mut self, block: RatioBlock) {
        self.blocks.push(block);
    }

    /// Fill every member block into `bitmap`.
    pub fn fill(&self, bitmap: &mut GlyphBitmap) {
        for block in &self.blocks {
            block.fill(bitmap, self.alpha);
        }
    }

    /// Render onto a fresh cell-sized bitmap.
    pub fn render(&self, width: u32, height: u32) -> GlyphBitmap {
        let mut bitmap = GlyphBitmap::new(width, height);
        self.fill(&mut bitmap);
        bitmap
    }
}

impl Default for MosaicBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl From<RatioBlock> for MosaicBlock {
    fn from(block: RatioBlock) -> Self {
        let mut mosaic = MosaicBlock::new();
        mosaic.push(block);
        mosaic
    }
}

impl BitOr<RatioBlock> for MosaicBlock {
    type Output = MosaicBlock;

    fn bitor(mut self, rhs: RatioBlock) -> MosaicBlock {
        self.push(rhs);
        self
    }
}

impl BitOr for MosaicBlock {
    type Output = MosaicBlock;

    fn bitor(mut self, rhs: MosaicBlock) -> MosaicBlock {
        self.blocks.extend(rhs.blocks);
        self
    }
}

impl FromIterator<RatioBlock> for MosaicBlock {
    fn from_iter<I: IntoIterator<Item = RatioBlock>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
            alpha: OPAQUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_builds_quadrant() {
        let quadrant = upper(0.5) & left(0.5);
        assert_eq!(quadrant.from, Ratio::new(0.0, 0.0));
        assert_eq!(quadrant.to, Ratio::new(0.5, 0.5));

        let quadrant = lower(0.5) & right(0.5);
        assert_eq!(quadrant.from, Ratio::new(0.5, 0.5));
        assert_eq!(quadrant.to, Ratio::new(1.0, 1.0));
    }

    #[test]
    fn test_disjoint_intersection_is_empty() {
        assert!((upper(0.25) & lower(0.25)).is_empty());
        assert!(!(upper(0.75) & lower(0.75)).is_empty());
    }

    #[test]
    fn test_nth_slabs() {
        let third = horiz_nth(1.0 / 8.0, 3);
        assert_eq!(third.to_pixels(16, 16), (4, 0, 6, 16));

        let row = vert_nth(1.0 / 3.0, 2);
        assert_eq!(row.to_pixels(10, 18), (0, 6, 10, 12));
    }

    #[test]
    fn test_complementary_blocks_tile_odd_cells() {
        // With an odd height the split row is height / 2.
        let (_, _, _, upper_end) = upper(0.5).to_pixels(7, 15);
        let (_, lower_start, _, _) = lower(0.5).to_pixels(7, 15);
        assert_eq!(upper_end, 7);
        assert_eq!(lower_start, 7);
    }

    #[test]
    fn test_union_overlap_is_idempotent() {
        let overlapping = upper(0.75) | lower(0.75);
        let bitmap = overlapping.render(6, 8);
        assert!(bitmap.pixels().iter().all(|&a| a == OPAQUE));
    }

    #[test]
    fn test_arbitrary_fractions() {
        let bitmap = MosaicBlock::from(left(0.3)).render(10, 4);
        for y in 0..4 {
            assert_eq!(bitmap.row(y), &[0xFF, 0xFF, 0xFF, 0, 0, 0, 0, 0, 0, 0]);
        }
    }

    #[test]
    fn test_mosaic_alpha() {
        let bitmap = MosaicBlock::from(RatioBlock::full())
            .with_alpha(0x80)
            .render(3, 3);
        assert!(bitmap.pixels().iter().all(|&a| a == 0x80));
    }
}
