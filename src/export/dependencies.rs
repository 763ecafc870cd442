use std::{path::PathBuf, sync::Arc};

use crate::export::{
    clipboard,
    file::{self, FileSaveConfig},
    types::ExportError,
};

/// Where a download ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    /// Generated name inside the configured directory
    Directory(FileSaveConfig),
    /// Exact file path
    Path(PathBuf),
}

/// Abstraction over writing exported images to disk.
pub trait ExportFileSaver: Send + Sync {
    fn save(&self, image_data: &[u8], target: &SaveTarget) -> Result<PathBuf, ExportError>;
}

/// Abstraction over placing exported images on the clipboard.
pub trait ExportClipboard: Send + Sync {
    fn copy(&self, image_data: &[u8]) -> Result<(), ExportError>;
}

/// Bundle of export sinks. Each component can be mocked in tests.
#[derive(Clone)]
pub struct ExportDependencies {
    pub saver: Arc<dyn ExportFileSaver>,
    pub clipboard: Arc<dyn ExportClipboard>,
}

impl Default for ExportDependencies {
    fn default() -> Self {
        Self {
            saver: Arc::new(DefaultFileSaver),
            clipboard: Arc::new(DefaultClipboard),
        }
    }
}

struct DefaultFileSaver;
struct DefaultClipboard;

impl ExportFileSaver for DefaultFileSaver {
    fn save(&self, image_data: &[u8], target: &SaveTarget) -> Result<PathBuf, ExportError> {
        match target {
            SaveTarget::Directory(config) => file::save_signature(image_data, config),
            SaveTarget::Path(path) => file::write_image(image_data, path),
        }
    }
}

impl ExportClipboard for DefaultClipboard {
    fn copy(&self, image_data: &[u8]) -> Result<(), ExportError> {
        clipboard::copy_to_clipboard(image_data)
    }
}
