//! Drawing tool selection.

use serde::Deserialize;

/// Drawing tool selection.
///
/// The active tool decides what a pointer gesture does. Drawing and erasing
/// are mutually exclusive; the tool is read once, when the gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    #[default]
    Pen,
    /// Removes the parts of existing strokes that the pointer path touches
    Eraser,
}
