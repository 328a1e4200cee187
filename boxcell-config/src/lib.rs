//! Configuration system for the boxcell glyph renderer.
//!
//! This crate provides configuration loading, saving, and default values
//! for glyph synthesis. It includes:
//!
//! - Cell geometry and line thickness used when no font metrics are supplied
//! - The supersampling factor for anti-aliased glyphs, with the `SSA_FACTOR`
//!   environment override
//! - Glyph cache sizing

pub mod config;
pub mod defaults;
pub mod error;

// Re-export main types for convenience
pub use config::{
    GlyphConfig, MAX_SUPERSAMPLING_FACTOR, MIN_SUPERSAMPLING_FACTOR, SSA_FACTOR_ENV,
    SSA_FACTOR_ENV_PREFIXED, resolve_supersampling_factor,
};
pub use error::ConfigError;
