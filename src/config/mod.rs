//! Configuration file support for sigpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sigpad/config.toml`. Settings include the canvas size, pen
//! defaults, hold gesture timing, export destination and the background grid.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{BackgroundConfig, CanvasConfig, DrawingConfig, ExportConfig, HoldConfig};

use crate::export::is_valid_template;
use crate::input::normalize_width;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 400
/// height = 150
///
/// [drawing]
/// default_color = "blue"
/// default_width = 3.5
/// eraser_radius = 2.0
///
/// [hold]
/// duration_ms = 1200
/// action = "copy"
///
/// [export]
/// save_directory = "~/Pictures/Signatures"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size in logical pixels
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Pen and eraser defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Hold-to-export gesture
    #[serde(default)]
    pub hold: HoldConfig,

    /// Download destination
    #[serde(default)]
    pub export: ExportConfig,

    /// Decorative background grid
    #[serde(default)]
    pub background: BackgroundConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `default_width`: 1.0 - 10.0, rounded to 2 decimals
    /// - `eraser_radius`: 0.5 - 50.0
    /// - `hold.duration_ms`: 100 - 10000
    /// - `hold.cooldown_ms`: 0 - 10000
    /// - `cell_width`, `cell_height`: 4.0 - 512.0
    /// - `filename_template`: non-empty, valid chrono specifiers
    pub fn validate_and_clamp(&mut self) {
        // Canvas: 1 - 8192
        if !(1..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 8192);
        }
        if !(1..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 8192);
        }

        // Pen width: 1.0 - 10.0, 2 decimals
        let width = normalize_width(self.drawing.default_width);
        if width != self.drawing.default_width {
            log::warn!(
                "Invalid default_width {}, using {:.2}",
                self.drawing.default_width,
                width
            );
            self.drawing.default_width = width;
        }

        // Eraser radius: 0.5 - 50.0
        if !(0.5..=50.0).contains(&self.drawing.eraser_radius) {
            log::warn!(
                "Invalid eraser_radius {:.1}, clamping to 0.5-50.0 range",
                self.drawing.eraser_radius
            );
            self.drawing.eraser_radius = if self.drawing.eraser_radius.is_nan() {
                0.5
            } else {
                self.drawing.eraser_radius.clamp(0.5, 50.0)
            };
        }

        // Hold timing
        if !(100..=10_000).contains(&self.hold.duration_ms) {
            log::warn!(
                "Invalid hold duration_ms {}, clamping to 100-10000 range",
                self.hold.duration_ms
            );
            self.hold.duration_ms = self.hold.duration_ms.clamp(100, 10_000);
        }
        if self.hold.cooldown_ms > 10_000 {
            log::warn!(
                "Invalid hold cooldown_ms {}, clamping to 10000",
                self.hold.cooldown_ms
            );
            self.hold.cooldown_ms = 10_000;
        }

        // Grid cells: 4.0 - 512.0
        for (name, value) in [
            ("cell_width", &mut self.background.cell_width),
            ("cell_height", &mut self.background.cell_height),
        ] {
            let current = *value;
            if !(4.0..=512.0).contains(&current) {
                log::warn!("Invalid background {name} {current:.1}, clamping to 4.0-512.0 range");
                *value = if current.is_nan() {
                    4.0
                } else {
                    current.clamp(4.0, 512.0)
                };
            }
        }

        // Export format: png only
        if !self.export.format.eq_ignore_ascii_case("png") {
            log::warn!(
                "Unsupported export format '{}', falling back to 'png'",
                self.export.format
            );
            self.export.format = "png".to_string();
        }

        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty export filename_template, using default");
            self.export.filename_template = types::default_filename_template();
        } else if !is_valid_template(&self.export.filename_template) {
            log::warn!(
                "Invalid export filename_template '{}', using default",
                self.export.filename_template
            );
            self.export.filename_template = types::default_filename_template();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sigpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sigpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
