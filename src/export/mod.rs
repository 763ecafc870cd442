//! Signature export.
//!
//! A completed hold gesture rasterizes the committed strokes onto a fresh
//! white surface and either saves the PNG or places it on the clipboard.

pub mod clipboard;
pub mod file;
pub mod raster;
pub mod types;

mod dependencies;
mod exporter;

pub use dependencies::{ExportClipboard, ExportDependencies, ExportFileSaver, SaveTarget};
pub use exporter::Exporter;
pub use file::is_valid_template;
pub use raster::{rasterize, render_png};
pub use types::{ExportError, ExportResult};
