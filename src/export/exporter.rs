use std::path::PathBuf;

use crate::config::ExportConfig;
use crate::draw::Stroke;
use crate::export::{
    dependencies::{ExportDependencies, SaveTarget},
    file::{FileSaveConfig, expand_tilde},
    raster,
    types::{ExportError, ExportResult},
};
use crate::input::HoldAction;

/// Turns completed hold gestures into PNG downloads or clipboard copies.
#[derive(Clone)]
pub struct Exporter {
    dependencies: ExportDependencies,
    target: SaveTarget,
}

impl Exporter {
    pub fn new(save_config: FileSaveConfig) -> Self {
        Self {
            dependencies: ExportDependencies::default(),
            target: SaveTarget::Directory(save_config),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(FileSaveConfig {
            save_directory: expand_tilde(&config.save_directory),
            filename_template: config.filename_template.clone(),
            format: config.format.clone(),
        })
    }

    /// Writes downloads to exactly `path` instead of a generated name.
    pub fn with_output(mut self, path: PathBuf) -> Self {
        self.target = SaveTarget::Path(path);
        self
    }

    pub fn with_dependencies(mut self, dependencies: ExportDependencies) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Rasterizes `strokes` on a `width` x `height` canvas and runs `action`.
    ///
    /// Returns `Ok(None)` when no drawing surface is available; nothing is
    /// written or copied in that case.
    pub fn export(
        &self,
        action: HoldAction,
        strokes: &[Stroke],
        width: u32,
        height: u32,
    ) -> Result<Option<ExportResult>, ExportError> {
        let Some(image_data) = raster::rasterize(strokes, width, height) else {
            return Ok(None);
        };
        self.deliver(action, image_data).map(Some)
    }

    /// Delivers already encoded PNG bytes.
    pub fn deliver(&self, action: HoldAction, image_data: Vec<u8>) -> Result<ExportResult, ExportError> {
        log::info!("Exporting signature: {:?} ({} bytes)", action, image_data.len());

        match action {
            HoldAction::Download => {
                let path = self.dependencies.saver.save(&image_data, &self.target)?;
                Ok(ExportResult {
                    image_data,
                    saved_path: Some(path),
                    copied_to_clipboard: false,
                })
            }
            HoldAction::Copy => {
                self.dependencies.clipboard.copy(&image_data)?;
                Ok(ExportResult {
                    image_data,
                    saved_path: None,
                    copied_to_clipboard: true,
                })
            }
        }
    }
}
