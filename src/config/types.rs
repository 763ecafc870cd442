//! Configuration type definitions.

use crate::draw::{PaletteColor, RevealBasis};
use crate::input::HoldAction;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas geometry.
///
/// The logical size of the signature area. Exported PNGs use exactly this
/// size.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Pen and eraser settings.
///
/// Controls the style the pad starts with and that `reset_all` restores.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial pen color (black, blue, green, yellow, red)
    #[serde(default)]
    pub default_color: PaletteColor,

    /// Initial pen width in pixels (valid range: 1.0 - 10.0, 2 decimals)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Eraser hit radius in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_eraser_radius")]
    pub eraser_radius: f64,

    /// Maximum number of committed strokes (0 = unlimited)
    /// Strokes beyond the limit are discarded with a warning
    #[serde(default)]
    pub max_strokes: usize,

    /// Path the reveal animation follows: "centerline" or "outline"
    #[serde(default)]
    pub reveal_basis: RevealBasis,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: PaletteColor::default(),
            default_width: default_width(),
            eraser_radius: default_eraser_radius(),
            max_strokes: 0,
            reveal_basis: RevealBasis::default(),
        }
    }
}

/// Hold-to-export gesture timing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HoldConfig {
    /// How long the control must be held, in milliseconds (valid range: 100 - 10000)
    #[serde(default = "default_hold_ms")]
    pub duration_ms: u64,

    /// How long the control stays completed before it rearms, in milliseconds
    /// (valid range: 0 - 10000)
    #[serde(default = "default_hold_ms")]
    pub cooldown_ms: u64,

    /// What a completed hold does: "download" or "copy"
    #[serde(default)]
    pub action: HoldAction,
}

impl Default for HoldConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_hold_ms(),
            cooldown_ms: default_hold_ms(),
            action: HoldAction::default(),
        }
    }
}

/// Where downloads are written.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory for downloaded signatures (supports ~ for home directory)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template with chrono format specifiers (e.g. %Y-%m-%d_%H%M%S)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Image format; only "png" is supported
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
            format: default_format(),
        }
    }
}

/// Decorative background grid behind the pad.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BackgroundConfig {
    /// Cell width in pixels (valid range: 4.0 - 512.0)
    #[serde(default = "default_cell_size")]
    pub cell_width: f64,

    /// Cell height in pixels (valid range: 4.0 - 512.0)
    #[serde(default = "default_cell_size")]
    pub cell_height: f64,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            cell_width: default_cell_size(),
            cell_height: default_cell_size(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> u32 {
    400
}

fn default_canvas_height() -> u32 {
    150
}

fn default_width() -> f64 {
    4.0
}

fn default_eraser_radius() -> f64 {
    2.0
}

fn default_hold_ms() -> u64 {
    1200
}

fn default_save_directory() -> String {
    "~/Pictures/Signatures".to_string()
}

pub(crate) fn default_filename_template() -> String {
    "signature_%Y-%m-%d_%H%M%S".to_string()
}

fn default_format() -> String {
    "png".to_string()
}

fn default_cell_size() -> f64 {
    40.0
}
