//! Data types for signature export.

use std::path::PathBuf;
use thiserror::Error;

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Encoded PNG bytes.
    pub image_data: Vec<u8>,
    /// Path the image was written to (downloads only).
    pub saved_path: Option<PathBuf>,
    /// Whether the image was placed on the clipboard.
    pub copied_to_clipboard: bool,
}

/// Errors that can occur while exporting a signature.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Drawing surface unavailable: {0}")]
    SurfaceError(String),

    #[error("PNG encoding failed: {0}")]
    EncodeError(String),

    #[error("Failed to save signature: {0}")]
    SaveError(#[from] std::io::Error),

    #[error("Invalid filename template: {0}")]
    TemplateError(String),

    #[error("Clipboard operation failed: {0}")]
    ClipboardError(String),
}

impl From<cairo::Error> for ExportError {
    fn from(err: cairo::Error) -> Self {
        ExportError::SurfaceError(err.to_string())
    }
}

impl From<cairo::IoError> for ExportError {
    fn from(err: cairo::IoError) -> Self {
        ExportError::EncodeError(err.to_string())
    }
}
