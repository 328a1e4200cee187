//! Glyph synthesis configuration.
//!
//! Covers:
//! - `load` / `save` (YAML file I/O with atomic write)
//! - XDG-compliant path helpers (`config_path`, `config_dir`)
//! - Environment overrides for the supersampling factor
//! - Semantic validation of geometry fields

use crate::defaults;
use crate::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable honoured for the anti-aliasing factor.
pub const SSA_FACTOR_ENV: &str = "SSA_FACTOR";

/// Namespaced variant of [`SSA_FACTOR_ENV`]; wins when both are set.
pub const SSA_FACTOR_ENV_PREFIXED: &str = "BOXCELL_SSA_FACTOR";

/// Smallest accepted supersampling factor (no supersampling).
pub const MIN_SUPERSAMPLING_FACTOR: u32 = 1;

/// Largest accepted supersampling factor.
pub const MAX_SUPERSAMPLING_FACTOR: u32 = 8;

/// Settings that drive glyph synthesis when the caller has no font metrics
/// of its own (the CLI, tests, headless tools).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphConfig {
    /// Target cell width in pixels
    #[serde(default = "defaults::cell_width")]
    pub cell_width: u32,

    /// Target cell height in pixels
    #[serde(default = "defaults::cell_height")]
    pub cell_height: u32,

    /// Base line thickness in pixels (light lines; heavy lines are twice this)
    #[serde(default = "defaults::line_thickness")]
    pub line_thickness: u32,

    /// Supersampling factor for glyphs with diagonals or arcs (1-8)
    #[serde(default = "defaults::supersampling_factor")]
    pub supersampling_factor: u32,

    /// Maximum number of synthesized glyphs kept by the LRU cache
    #[serde(default = "defaults::cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            cell_width: defaults::cell_width(),
            cell_height: defaults::cell_height(),
            line_thickness: defaults::line_thickness(),
            supersampling_factor: defaults::supersampling_factor(),
            cache_capacity: defaults::cache_capacity(),
        }
    }
}

impl GlyphConfig {
    /// Load configuration from the default path, creating it when missing.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save_to(&config_path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            log::info!("Default config created successfully");
            Ok(config)
        }
    }

    /// Load and validate configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let config: GlyphConfig = serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("boxcell")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/boxcell/
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("boxcell")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Check field values that serde alone cannot reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(ConfigError::Validation(format!(
                "cell size must be positive, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }
        if self.line_thickness == 0 {
            return Err(ConfigError::Validation(
                "line_thickness must be at least 1 pixel".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(ConfigError::Validation(
                "cache_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Supersampling factor after applying environment overrides.
    ///
    /// `BOXCELL_SSA_FACTOR` takes precedence over `SSA_FACTOR`; both take
    /// precedence over the config file.
    pub fn effective_supersampling_factor(&self) -> u32 {
        let env = ssa_env_override(
            std::env::var(SSA_FACTOR_ENV_PREFIXED).ok(),
            std::env::var(SSA_FACTOR_ENV).ok(),
        );
        resolve_supersampling_factor(
            self.supersampling_factor,
            env.as_ref().map(|(name, value)| (*name, value.as_str())),
        )
    }
}

/// The environment override in effect, as `(variable, value)`, given the
/// values of `BOXCELL_SSA_FACTOR` and `SSA_FACTOR`.
fn ssa_env_override(
    prefixed: Option<String>,
    plain: Option<String>,
) -> Option<(&'static str, String)> {
    prefixed
        .map(|value| (SSA_FACTOR_ENV_PREFIXED, value))
        .or_else(|| plain.map(|value| (SSA_FACTOR_ENV, value)))
}

/// Pick the supersampling factor from a configured value and an optional
/// environment override given as `(variable, value)`.
///
/// Anything that does not parse, or lies outside
/// `MIN_SUPERSAMPLING_FACTOR..=MAX_SUPERSAMPLING_FACTOR`, falls back to
/// [`defaults::supersampling_factor`].
pub fn resolve_supersampling_factor(configured: u32, env_override: Option<(&str, &str)>) -> u32 {
    let valid = MIN_SUPERSAMPLING_FACTOR..=MAX_SUPERSAMPLING_FACTOR;

    if let Some((name, raw)) = env_override {
        return match raw.trim().parse::<u32>() {
            Ok(value) if valid.contains(&value) => value,
            _ => {
                log::warn!(
                    "Ignoring {name}={raw:?}: expected an integer in {}..={}, using {}",
                    MIN_SUPERSAMPLING_FACTOR,
                    MAX_SUPERSAMPLING_FACTOR,
                    defaults::supersampling_factor()
                );
                defaults::supersampling_factor()
            }
        };
    }

    if valid.contains(&configured) {
        configured
    } else {
        log::warn!(
            "supersampling_factor {configured} is out of range {}..={}, using {}",
            MIN_SUPERSAMPLING_FACTOR,
            MAX_SUPERSAMPLING_FACTOR,
            defaults::supersampling_factor()
        );
        defaults::supersampling_factor()
    }
}
