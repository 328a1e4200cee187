//! Block element, sextant and bracket piece composition.
//!
//! Covers U+2580–U+259F (block elements), U+1FB00–U+1FB3B (sextants),
//! U+1FB70–U+1FB8B (one-eighth blocks) and U+23A1–U+23A6 (square bracket
//! pieces). Every glyph is a [`MosaicBlock`] over the cell.

use super::ratio::{MosaicBlock, RatioBlock, horiz_nth, left, lower, right, upper, vert_nth};
use super::types::ranges;

const EIGHTH: f64 = 1.0 / 8.0;

/// Alpha used for ░, ▒ and ▓
const SHADE_LIGHT: u8 = 0x40;
const SHADE_MEDIUM: u8 = 0x80;
const SHADE_DARK: u8 = 0xC0;

/// Get the mosaic for a block element, sextant, one-eighth block or bracket
/// piece. Returns `None` for any other codepoint.
pub fn get_mosaic(codepoint: u32) -> Option<MosaicBlock> {
    match codepoint {
        ranges::BLOCK_ELEMENTS_START..=ranges::BLOCK_ELEMENTS_END => block_element(codepoint),
        ranges::SEXTANTS_START..=ranges::SEXTANTS_END => {
            Some(sextant(codepoint - ranges::SEXTANTS_START))
        }
        ranges::EIGHTHS_START..=ranges::EIGHTHS_END => eighth_block(codepoint),
        ranges::BRACKET_PIECES_START..=ranges::BRACKET_PIECES_END => bracket_piece(codepoint),
        _ => None,
    }
}

fn quadrant_upper_left() -> RatioBlock {
    upper(0.5) & left(0.5)
}

fn quadrant_upper_right() -> RatioBlock {
    upper(0.5) & right(0.5)
}

fn quadrant_lower_left() -> RatioBlock {
    lower(0.5) & left(0.5)
}

fn quadrant_lower_right() -> RatioBlock {
    lower(0.5) & right(0.5)
}

fn block_element(codepoint: u32) -> Option<MosaicBlock> {
    let mosaic: MosaicBlock = match codepoint {
        // Upper half block
        0x2580 => upper(0.5).into(),

        // Lower one eighth block to lower seven eighths block, then full block
        0x2581..=0x2588 => lower(EIGHTH * (codepoint - 0x2580) as f64).into(),

        // Left seven eighths block down to left one eighth block
        0x2589..=0x258F => left(EIGHTH * (0x2590 - codepoint) as f64).into(),

        // Right half block
        0x2590 => right(0.5).into(),

        // Shades
        0x2591 => MosaicBlock::from(RatioBlock::full()).with_alpha(SHADE_LIGHT),
        0x2592 => MosaicBlock::from(RatioBlock::full()).with_alpha(SHADE_MEDIUM),
        0x2593 => MosaicBlock::from(RatioBlock::full()).with_alpha(SHADE_DARK),

        // Upper one eighth block
        0x2594 => upper(EIGHTH).into(),

        // Right one eighth block
        0x2595 => right(EIGHTH).into(),

        // Quadrants
        0x2596 => quadrant_lower_left().into(),
        0x2597 => quadrant_lower_right().into(),
        0x2598 => quadrant_upper_left().into(),
        0x2599 => quadrant_upper_left() | quadrant_lower_left() | quadrant_lower_right(),
        0x259A => quadrant_upper_left() | quadrant_lower_right(),
        0x259B => quadrant_upper_left() | quadrant_upper_right() | quadrant_lower_left(),
        0x259C => quadrant_upper_left() | quadrant_upper_right() | quadrant_lower_right(),
        0x259D => quadrant_upper_right().into(),
        0x259E => quadrant_upper_right() | quadrant_lower_left(),
        0x259F => quadrant_upper_right() | quadrant_lower_left() | quadrant_lower_right(),

        _ => return None,
    };
    Some(mosaic)
}

/// Sextant cell mask for U+1FB00 + `index`.
///
/// Bit `2 * row + column` is set for each filled cell of the 2×3 grid. The
/// Unicode block enumerates masks 1..=62 in order but skips the two masks
/// that already exist as ▌ (0b010101) and ▐ (0b101010).
pub fn sextant_mask(index: u32) -> u8 {
    let mut mask = index + 1;
    if mask >= 0b01_0101 {
        mask += 1;
    }
    if mask >= 0b10_1010 {
        mask += 1;
    }
    mask as u8
}

fn sextant(index: u32) -> MosaicBlock {
    let mask = sextant_mask(index);
    (0..6u32)
        .filter(|bit| mask & (1 << bit) != 0)
        .map(|bit| {
            let column = if bit % 2 == 0 { left(0.5) } else { right(0.5) };
            column & vert_nth(1.0 / 3.0, bit / 2 + 1)
        })
        .collect()
}

fn eighth_block(codepoint: u32) -> Option<MosaicBlock> {
    let mosaic: MosaicBlock = match codepoint {
        // Vertical one eighth block-2 to block-7
        0x1FB70..=0x1FB75 => horiz_nth(EIGHTH, codepoint - 0x1FB70 + 2).into(),

        // Horizontal one eighth block-2 to block-7
        0x1FB76..=0x1FB7B => vert_nth(EIGHTH, codepoint - 0x1FB76 + 2).into(),

        // Corner pairs of one eighth blocks
        0x1FB7C => left(EIGHTH) | lower(EIGHTH),
        0x1FB7D => left(EIGHTH) | upper(EIGHTH),
        0x1FB7E => right(EIGHTH) | upper(EIGHTH),
        0x1FB7F => right(EIGHTH) | lower(EIGHTH),

        // Upper and lower one eighth block
        0x1FB80 => upper(EIGHTH) | lower(EIGHTH),

        // Horizontal one eighth block-1358
        0x1FB81 => [1, 3, 5, 8]
            .into_iter()
            .map(|n| vert_nth(EIGHTH, n))
            .collect(),

        // Upper one quarter block to upper seven eighths block
        0x1FB82 => upper(2.0 * EIGHTH).into(),
        0x1FB83 => upper(3.0 * EIGHTH).into(),
        0x1FB84 => upper(5.0 * EIGHTH).into(),
        0x1FB85 => upper(6.0 * EIGHTH).into(),
        0x1FB86 => upper(7.0 * EIGHTH).into(),

        // Right one quarter block to right seven eighths block
        0x1FB87 => right(2.0 * EIGHTH).into(),
        0x1FB88 => right(3.0 * EIGHTH).into(),
        0x1FB89 => right(5.0 * EIGHTH).into(),
        0x1FB8A => right(6.0 * EIGHTH).into(),
        0x1FB8B => right(7.0 * EIGHTH).into(),

        _ => return None,
    };
    Some(mosaic)
}

/// Square bracket pieces: a full-height stroke one eighth wide on the
/// bracket's side, with a half-width arm at the corner pieces.
fn bracket_piece(codepoint: u32) -> Option<MosaicBlock> {
    let mosaic: MosaicBlock = match codepoint {
        0x23A1 => left(EIGHTH) | (upper(EIGHTH) & left(0.5)), // ⎡
        0x23A2 => left(EIGHTH).into(),                         // ⎢
        0x23A3 => left(EIGHTH) | (lower(EIGHTH) & left(0.5)), // ⎣
        0x23A4 => right(EIGHTH) | (upper(EIGHTH) & right(0.5)), // ⎤
        0x23A5 => right(EIGHTH).into(),                        // ⎥
        0x23A6 => right(EIGHTH) | (lower(EIGHTH) & right(0.5)), // ⎦
        _ => return None,
    };
    Some(mosaic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sextant_masks_skip_half_blocks() {
        assert_eq!(sextant_mask(0), 0b00_0001); // U+1FB00
        assert_eq!(sextant_mask(19), 0b01_0100); // U+1FB13
        assert_eq!(sextant_mask(20), 0b01_0110); // U+1FB14 skips ▌
        assert_eq!(sextant_mask(39), 0b10_1001); // U+1FB27
        assert_eq!(sextant_mask(40), 0b10_1011); // U+1FB28 skips ▐
        assert_eq!(sextant_mask(59), 0b11_1110); // U+1FB3B
        let masks: Vec<u8> = (0..60).map(sextant_mask).collect();
        assert!(!masks.contains(&0b01_0101));
        assert!(!masks.contains(&0b10_1010));
        assert!(!masks.contains(&0));
        assert!(!masks.contains(&0b11_1111));
    }

    #[test]
    fn test_sextant_upper_left_cell() {
        let bitmap = get_mosaic(0x1FB00).unwrap().render(4, 6);
        for y in 0..6 {
            let expected: &[u8] = if y < 2 { &[0xFF, 0xFF, 0, 0] } else { &[0, 0, 0, 0] };
            assert_eq!(bitmap.row(y), expected, "row {y}");
        }
    }

    #[test]
    fn test_eighth_block_ranges() {
        // Vertical one eighth block-2 covers columns 2..4 of a 16-wide cell
        let bitmap = get_mosaic(0x1FB70).unwrap().render(16, 8);
        assert_eq!(&bitmap.row(0)[..5], &[0, 0, 0xFF, 0xFF, 0]);

        // Horizontal one eighth block-7 covers rows 12..14 of a 16-high cell
        let bitmap = get_mosaic(0x1FB7B).unwrap().render(4, 16);
        assert_eq!(bitmap.row(11), &[0, 0, 0, 0]);
        assert_eq!(bitmap.row(12), &[0xFF; 4]);
        assert_eq!(bitmap.row(13), &[0xFF; 4]);
        assert_eq!(bitmap.row(14), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_lower_eighths_grow() {
        let mut previous = 0;
        for codepoint in 0x2581..=0x2588 {
            let bitmap = get_mosaic(codepoint).unwrap().render(8, 16);
            let filled = bitmap.pixels().iter().filter(|&&a| a == 0xFF).count();
            assert!(filled > previous, "U+{codepoint:04X} should cover more");
            previous = filled;
        }
        assert_eq!(previous, 8 * 16);
    }

    #[test]
    fn test_shades_use_partial_alpha() {
        let bitmap = get_mosaic(0x2592).unwrap().render(4, 4);
        assert!(bitmap.pixels().iter().all(|&a| a == SHADE_MEDIUM));
    }

    #[test]
    fn test_bracket_pieces() {
        let bitmap = get_mosaic(0x23A1).unwrap().render(8, 16);
        // Stroke down the left edge on every row
        for y in 0..16 {
            assert_eq!(bitmap.get(0, y), 0xFF);
        }
        // Arm along the top, reaching the middle
        assert_eq!(bitmap.get(3, 0), 0xFF);
        assert_eq!(bitmap.get(4, 0), 0);
        assert_eq!(bitmap.get(3, 8), 0);
    }

    #[test]
    fn test_outside_ranges() {
        assert!(get_mosaic(0x257F).is_none());
        assert!(get_mosaic(0x25A0).is_none());
        assert!(get_mosaic(0x1FB3C).is_none());
        assert!(get_mosaic(0x1FB8C).is_none());
        assert!(get_mosaic(0x23A0).is_none());
    }
}
