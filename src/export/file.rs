//! Saving exported signatures to disk.

use super::types::ExportError;
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Where and how downloads are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSaveConfig {
    /// Directory downloads are written to.
    pub save_directory: PathBuf,
    /// Filename template (chrono format specifiers, no extension).
    pub filename_template: String,
    /// Image format extension.
    pub format: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Signatures"),
            filename_template: "signature_%Y-%m-%d_%H%M%S".to_string(),
            format: "png".to_string(),
        }
    }
}

/// Whether every specifier in `template` is one chrono can format.
pub fn is_valid_template(template: &str) -> bool {
    !StrftimeItems::new(template).any(|item| matches!(item, Item::Error))
}

/// Expands the template with the current local time and appends the extension.
pub fn generate_filename(template: &str, format: &str) -> Result<String, ExportError> {
    let mut stem = String::new();
    write!(stem, "{}", Local::now().format(template))
        .map_err(|_| ExportError::TemplateError(template.to_string()))?;
    Ok(format!("{stem}.{format}"))
}

/// Creates `directory` (and parents) when missing.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating signature directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf()))
}

/// Writes `image_data` to exactly `path`, creating its parent directory.
pub fn write_image(image_data: &[u8], path: &Path) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    fs::write(path, image_data)?;

    // User read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(0o600))?;
    }

    log::info!(
        "Signature saved: {} ({} bytes)",
        path.display(),
        image_data.len()
    );
    Ok(path.to_path_buf())
}

/// Writes `image_data` under a generated name in the configured directory.
pub fn save_signature(image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let filename = generate_filename(&config.filename_template, &config.format)?;
    write_image(image_data, &directory.join(filename))
}

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
