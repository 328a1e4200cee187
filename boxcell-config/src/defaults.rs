//! Default values for glyph configuration fields.
//!
//! Each function is referenced from a `#[serde(default = "...")]` attribute so
//! partially written config files still deserialize.

pub fn cell_width() -> u32 {
    10
}

pub fn cell_height() -> u32 {
    20
}

pub fn line_thickness() -> u32 {
    1
}

/// Anti-aliasing factor used when nothing valid is configured.
pub fn supersampling_factor() -> u32 {
    2
}

pub fn cache_capacity() -> usize {
    512 // Comfortably holds every supported glyph for one geometry
}
