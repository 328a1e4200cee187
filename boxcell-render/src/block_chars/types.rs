//! Shared types for block character synthesis.

use std::fmt;

use crate::error::GlyphError;

/// Unicode ranges for block drawing and related characters
pub mod ranges {
    /// Box Drawing characters (U+2500–U+257F)
    pub const BOX_DRAWING_START: u32 = 0x2500;
    pub const BOX_DRAWING_END: u32 = 0x257F;

    /// Block Elements (U+2580–U+259F)
    pub const BLOCK_ELEMENTS_START: u32 = 0x2580;
    pub const BLOCK_ELEMENTS_END: u32 = 0x259F;

    /// Block sextants from Symbols for Legacy Computing (U+1FB00–U+1FB3B)
    pub const SEXTANTS_START: u32 = 0x1FB00;
    pub const SEXTANTS_END: u32 = 0x1FB3B;

    /// One-eighth blocks from Symbols for Legacy Computing (U+1FB70–U+1FB8B)
    pub const EIGHTHS_START: u32 = 0x1FB70;
    pub const EIGHTHS_END: u32 = 0x1FB8B;

    /// Square bracket pieces (U+23A1–U+23A6)
    pub const BRACKET_PIECES_START: u32 = 0x23A1;
    pub const BRACKET_PIECES_END: u32 = 0x23A6;

    /// Every range this crate can synthesize, in ascending order.
    pub const SUPPORTED: [(u32, u32); 5] = [
        (BRACKET_PIECES_START, BRACKET_PIECES_END),
        (BOX_DRAWING_START, BOX_DRAWING_END),
        (BLOCK_ELEMENTS_START, BLOCK_ELEMENTS_END),
        (SEXTANTS_START, SEXTANTS_END),
        (EIGHTHS_START, EIGHTHS_END),
    ];
}

/// Classification of block characters for rendering decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCharType {
    /// Not a synthesized character - render from the font
    None,
    /// Box drawing lines (─, │, ┌, ╭, ╱, etc.)
    BoxDrawing,
    /// Full block (█)
    SolidBlock,
    /// Partial block elements (▀, ▌, ▖, eighth blocks)
    PartialBlock,
    /// Shade characters (░, ▒, ▓)
    Shade,
    /// 2×3 block sextants
    Sextant,
    /// Square bracket pieces (⎡, ⎢, ⎣, ⎤, ⎥, ⎦)
    Bracket,
}

/// Line weight of a dashed edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    Light,
    Heavy,
}

/// Segment count and weight of a dashed axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dash {
    pub segments: u8,
    pub weight: Weight,
}

/// Style of one of the four cardinal edges of a box drawing glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeStyle {
    #[default]
    None,
    /// Solid light line
    Light,
    /// 2-dashed light line
    LightDash2,
    /// 3-dashed light line
    LightDash3,
    /// 4-dashed light line
    LightDash4,
    /// Two parallel light lines
    Double,
    /// Solid heavy line
    Heavy,
    /// 2-dashed heavy line
    HeavyDash2,
    /// 3-dashed heavy line
    HeavyDash3,
    /// 4-dashed heavy line
    HeavyDash4,
}

impl EdgeStyle {
    /// Segment count and weight if this is one of the dash variants.
    pub const fn dash(self) -> Option<Dash> {
        let (segments, weight) = match self {
            EdgeStyle::LightDash2 => (2, Weight::Light),
            EdgeStyle::LightDash3 => (3, Weight::Light),
            EdgeStyle::LightDash4 => (4, Weight::Light),
            EdgeStyle::HeavyDash2 => (2, Weight::Heavy),
            EdgeStyle::HeavyDash3 => (3, Weight::Heavy),
            EdgeStyle::HeavyDash4 => (4, Weight::Heavy),
            _ => return None,
        };
        Some(Dash { segments, weight })
    }

    pub const fn is_dashed(self) -> bool {
        self.dash().is_some()
    }
}

impl fmt::Display for EdgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgeStyle::None => "NoLine",
            EdgeStyle::Light => "Light",
            EdgeStyle::LightDash2 => "Light2",
            EdgeStyle::LightDash3 => "Light3",
            EdgeStyle::LightDash4 => "Light4",
            EdgeStyle::Double => "Double",
            EdgeStyle::Heavy => "Heavy",
            EdgeStyle::HeavyDash2 => "Heavy2",
            EdgeStyle::HeavyDash3 => "Heavy3",
            EdgeStyle::HeavyDash4 => "Heavy4",
        };
        f.write_str(name)
    }
}

/// Diagonal strokes of a box drawing glyph.
///
/// `Forward` follows the forward slash (╱, lower left to upper right) and
/// `Backward` the backslash (╲, upper left to lower right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Diagonal {
    #[default]
    None,
    Forward,
    Backward,
    Cross,
}

impl Diagonal {
    pub const fn has_forward(self) -> bool {
        matches!(self, Diagonal::Forward | Diagonal::Cross)
    }

    pub const fn has_backward(self) -> bool {
        matches!(self, Diagonal::Backward | Diagonal::Cross)
    }
}

/// Rounded corner of a box drawing glyph, named after the corner of a box it
/// forms (╭ is the top-left corner of a rounded box).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arc {
    #[default]
    None,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// Cardinal edge of a cell, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Up,
    Right,
    Down,
    Left,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Up => "up",
            Edge::Right => "right",
            Edge::Down => "down",
            Edge::Left => "left",
        };
        f.write_str(name)
    }
}

/// Immutable description of a box drawing glyph: per-edge line styles plus
/// optional diagonal and rounded corner.
///
/// Built through `const` builder methods, each returning a modified copy, so
/// the whole table is compile-time data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoxDescriptor {
    pub up: EdgeStyle,
    pub right: EdgeStyle,
    pub down: EdgeStyle,
    pub left: EdgeStyle,
    pub diagonal: Diagonal,
    pub arc: Arc,
}

impl BoxDescriptor {
    /// Descriptor with nothing drawn
    pub const EMPTY: Self = Self {
        up: EdgeStyle::None,
        right: EdgeStyle::None,
        down: EdgeStyle::None,
        left: EdgeStyle::None,
        diagonal: Diagonal::None,
        arc: Arc::None,
    };

    pub const fn up(mut self, style: EdgeStyle) -> Self {
        self.up = style;
        self
    }

    pub const fn right(mut self, style: EdgeStyle) -> Self {
        self.right = style;
        self
    }

    pub const fn down(mut self, style: EdgeStyle) -> Self {
        self.down = style;
        self
    }

    pub const fn left(mut self, style: EdgeStyle) -> Self {
        self.left = style;
        self
    }

    /// Set both `up` and `down`
    pub const fn vertical(self, style: EdgeStyle) -> Self {
        self.up(style).down(style)
    }

    /// Set both `left` and `right`
    pub const fn horizontal(self, style: EdgeStyle) -> Self {
        self.left(style).right(style)
    }

    pub const fn diagonal(mut self, diagonal: Diagonal) -> Self {
        self.diagonal = diagonal;
        self
    }

    pub const fn arc(mut self, arc: Arc) -> Self {
        self.arc = arc;
        self
    }

    /// Dash pattern of the horizontal axis, if `left` and `right` are the
    /// same dash variant.
    pub const fn dashed_horizontal(&self) -> Option<Dash> {
        dashed_pair(self.left, self.right)
    }

    /// Dash pattern of the vertical axis, if `up` and `down` are the same
    /// dash variant.
    pub const fn dashed_vertical(&self) -> Option<Dash> {
        dashed_pair(self.up, self.down)
    }

    /// Whether this glyph contains a diagonal or an arc and therefore needs
    /// anti-aliased construction.
    pub const fn contains_non_canonical_lines(&self) -> bool {
        !matches!(self.diagonal, Diagonal::None) || !matches!(self.arc, Arc::None)
    }
}

const fn dashed_pair(a: EdgeStyle, b: EdgeStyle) -> Option<Dash> {
    // Exact equality only: two different dash variants on one axis are not
    // a dashed pair.
    if a as u8 != b as u8 {
        return None;
    }
    a.dash()
}

/// Target cell geometry: pixel size plus base line thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellGeometry {
    pub width: u32,
    pub height: u32,
    pub line_thickness: u32,
}

impl CellGeometry {
    pub const fn new(width: u32, height: u32, line_thickness: u32) -> Self {
        Self {
            width,
            height,
            line_thickness,
        }
    }

    /// Geometry scaled by an integer supersampling factor.
    pub const fn scaled(self, factor: u32) -> Self {
        Self::new(
            self.width * factor,
            self.height * factor,
            self.line_thickness * factor,
        )
    }

    /// Reject zero-sized cells.
    pub fn validate_size(&self) -> Result<(), GlyphError> {
        if self.width == 0 || self.height == 0 {
            return Err(self.invalid("cell size must be positive"));
        }
        Ok(())
    }

    /// Reject cells whose line thickness leaves no room for box drawing lines.
    pub fn validate_line_thickness(&self) -> Result<(), GlyphError> {
        self.validate_size()?;
        if self.line_thickness == 0 {
            return Err(self.invalid("line thickness must be positive"));
        }
        // thickness * 2 < min(width, height), i.e. strictly less than half
        if self.line_thickness.saturating_mul(2) >= self.width.min(self.height) {
            return Err(self.invalid("line thickness must be less than half the cell size"));
        }
        Ok(())
    }

    /// Reject cells too small to hold one pixel per dash and per gap of the
    /// dash patterns in `desc`.
    pub fn validate_dashes(&self, desc: &BoxDescriptor) -> Result<(), GlyphError> {
        if let Some(dash) = desc.dashed_horizontal()
            && self.width < 2 * u32::from(dash.segments)
        {
            return Err(self.invalid("cell is too narrow for its dash pattern"));
        }
        if let Some(dash) = desc.dashed_vertical()
            && self.height < 2 * u32::from(dash.segments)
        {
            return Err(self.invalid("cell is too short for its dash pattern"));
        }
        Ok(())
    }

    fn invalid(&self, reason: &'static str) -> GlyphError {
        GlyphError::InvalidGeometry {
            width: self.width,
            height: self.height,
            line_thickness: self.line_thickness,
            reason,
        }
    }
}

impl From<&boxcell_config::GlyphConfig> for CellGeometry {
    fn from(config: &boxcell_config::GlyphConfig) -> Self {
        Self::new(config.cell_width, config.cell_height, config.line_thickness)
    }
}

/// Fully opaque alpha value
pub const OPAQUE: u8 = 0xFF;

/// Single-channel 8-bit alpha mask, row-major with a top-left origin.
#[derive(Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl fmt::Debug for GlyphBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("coverage", &self.pixels.iter().filter(|&&a| a != 0).count())
            .finish()
    }
}

impl GlyphBitmap {
    /// Zero-initialized (fully transparent) bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major alpha values
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// One row of alpha values
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, alpha: u8) {
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = alpha;
    }

    /// Fill the half-open rectangle `[x0, x1) × [y0, y1)`, clamped to the
    /// bitmap. Coordinates may be negative or past the edge.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, alpha: u8) {
        let x0 = x0.clamp(0, self.width as i64) as usize;
        let x1 = x1.clamp(0, self.width as i64) as usize;
        let y0 = y0.clamp(0, self.height as i64) as usize;
        let y1 = y1.clamp(0, self.height as i64) as usize;
        if x0 >= x1 {
            return;
        }
        let stride = self.width as usize;
        for y in y0..y1 {
            self.pixels[y * stride + x0..y * stride + x1].fill(alpha);
        }
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&a| a == 0)
    }

    /// Render as text, one line per row: `#` for opaque, `+` for partial
    /// coverage, `.` for empty.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for &alpha in self.row(y) {
                out.push(match alpha {
                    0 => '.',
                    OPAQUE => '#',
                    _ => '+',
                });
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_variants() {
        assert_eq!(
            EdgeStyle::LightDash3.dash(),
            Some(Dash {
                segments: 3,
                weight: Weight::Light
            })
        );
        assert_eq!(
            EdgeStyle::HeavyDash2.dash(),
            Some(Dash {
                segments: 2,
                weight: Weight::Heavy
            })
        );
        assert_eq!(EdgeStyle::Double.dash(), None);
        assert_eq!(EdgeStyle::None.dash(), None);
    }

    #[test]
    fn test_dashed_pair_requires_exact_equality() {
        let b = BoxDescriptor::EMPTY.horizontal(EdgeStyle::HeavyDash4);
        assert_eq!(b.dashed_horizontal().map(|d| d.segments), Some(4));
        assert_eq!(b.dashed_vertical(), None);

        let mixed = BoxDescriptor::EMPTY
            .left(EdgeStyle::LightDash2)
            .right(EdgeStyle::HeavyDash2);
        assert_eq!(mixed.dashed_horizontal(), None);
    }

    #[test]
    fn test_edge_style_display() {
        assert_eq!(EdgeStyle::LightDash3.to_string(), "Light3");
        assert_eq!(EdgeStyle::None.to_string(), "NoLine");
        assert_eq!(EdgeStyle::Heavy.to_string(), "Heavy");
    }

    #[test]
    fn test_geometry_validation() {
        assert!(CellGeometry::new(10, 20, 1).validate_line_thickness().is_ok());
        assert!(CellGeometry::new(0, 20, 1).validate_size().is_err());
        assert!(CellGeometry::new(10, 20, 0).validate_line_thickness().is_err());
        // 5 * 2 >= 10
        assert!(CellGeometry::new(10, 20, 5).validate_line_thickness().is_err());
        assert!(CellGeometry::new(10, 20, 4).validate_line_thickness().is_ok());
    }

    #[test]
    fn test_dash_fit_validation() {
        let quad = BoxDescriptor::EMPTY.vertical(EdgeStyle::HeavyDash4);
        assert!(CellGeometry::new(10, 8, 1).validate_dashes(&quad).is_ok());
        assert!(CellGeometry::new(10, 7, 1).validate_dashes(&quad).is_err());
        // Solid edges never constrain the cell
        let solid = BoxDescriptor::EMPTY.vertical(EdgeStyle::Heavy);
        assert!(CellGeometry::new(3, 3, 1).validate_dashes(&solid).is_ok());
    }

    #[test]
    fn test_fill_rect_clamps() {
        let mut bitmap = GlyphBitmap::new(4, 3);
        bitmap.fill_rect(-2, -1, 2, 10, OPAQUE);
        assert_eq!(bitmap.row(0), &[0xFF, 0xFF, 0, 0]);
        assert_eq!(bitmap.row(2), &[0xFF, 0xFF, 0, 0]);

        // Inverted and fully outside rectangles are no-ops
        let mut bitmap = GlyphBitmap::new(4, 3);
        bitmap.fill_rect(3, 0, 1, 3, OPAQUE);
        bitmap.fill_rect(5, 0, 9, 3, OPAQUE);
        assert!(bitmap.is_blank());
    }

    #[test]
    fn test_to_ascii() {
        let mut bitmap = GlyphBitmap::new(3, 2);
        bitmap.set(0, 0, OPAQUE);
        bitmap.set(2, 1, 0x80);
        assert_eq!(bitmap.to_ascii(), "#..\n..+\n");
    }
}
