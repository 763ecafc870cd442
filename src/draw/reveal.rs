//! Progressive "drawing itself" reveal of a set of strokes.
//!
//! Strokes are laid end to end in draw order and revealed by cumulative path
//! length, so earlier strokes complete before later ones start. The result is
//! a dash length/offset pair per stroke, ready for a dashed stroke call.

use super::color::PaletteColor;
use super::outline;
use super::stroke::{Point, Stroke, polyline_length};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which path a stroke is revealed along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RevealBasis {
    /// The captured centerline, following the pen's motion
    #[default]
    Centerline,
    /// The smoothed outline polygon
    Outline,
}

/// Render parameters for one stroke at a given reveal progress.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealedStroke {
    /// Path to stroke with the dash pattern
    pub path: Vec<Point>,
    pub color: PaletteColor,
    pub width: f64,
    /// Dash length, equal to the full path length
    pub dash_length: f64,
    /// Dash offset: 0 = fully drawn, `dash_length` = nothing drawn
    pub dash_offset: f64,
}

impl RevealedStroke {
    /// Length of the visible part of the path.
    pub fn revealed_length(&self) -> f64 {
        self.dash_length - self.dash_offset
    }
}

fn reveal_path(stroke: &Stroke, basis: RevealBasis) -> Vec<Point> {
    match basis {
        RevealBasis::Centerline => stroke.points().to_vec(),
        RevealBasis::Outline => outline::outline(stroke.points(), stroke.width),
    }
}

/// Computes reveal parameters for `strokes` at `progress`.
///
/// `progress` is clamped to `[0, 1]`; 0 hides every stroke, 1 shows all of them.
pub fn reveal(strokes: &[Stroke], progress: f64, basis: RevealBasis) -> Vec<RevealedStroke> {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };

    let paths: Vec<(Vec<Point>, f64)> = strokes
        .iter()
        .map(|stroke| {
            let path = reveal_path(stroke, basis);
            let length = polyline_length(&path);
            (path, length)
        })
        .collect();

    let total: f64 = paths.iter().map(|(_, length)| length).sum();
    let budget = total * progress;
    let mut consumed = 0.0;

    strokes
        .iter()
        .zip(paths)
        .map(|(stroke, (path, length))| {
            let dash_offset = if consumed + length <= budget {
                0.0
            } else if consumed >= budget {
                length
            } else {
                length - (budget - consumed)
            };
            consumed += length;
            RevealedStroke {
                path,
                color: stroke.color,
                width: stroke.width,
                dash_length: length,
                dash_offset,
            }
        })
        .collect()
}

/// Total visible length across a reveal frame.
pub fn revealed_length(frame: &[RevealedStroke]) -> f64 {
    frame.iter().map(RevealedStroke::revealed_length).sum()
}
