//! Copying exported signatures to the Wayland clipboard.

use super::types::ExportError;
use std::io::Write;
use std::process::{Command, Stdio};
use wl_clipboard_rs::copy::{MimeType, Options, ServeRequests, Source};

const PNG_MIME: &str = "image/png";

/// Places PNG bytes on the clipboard.
///
/// The `wl-copy` command is tried first; wl-clipboard-rs is the fallback
/// when the command is missing or fails.
pub fn copy_to_clipboard(image_data: &[u8]) -> Result<(), ExportError> {
    log::debug!("Copying signature to clipboard ({} bytes)", image_data.len());

    let command_err = match copy_via_command(image_data) {
        Ok(()) => {
            log::info!("Signature copied via wl-copy");
            return Ok(());
        }
        Err(err) => err,
    };

    log::warn!("wl-copy failed ({command_err}); trying wl-clipboard-rs");
    copy_via_library(image_data)
        .map(|()| log::info!("Signature copied via wl-clipboard-rs"))
        .map_err(|lib_err| {
            ExportError::ClipboardError(format!(
                "wl-copy failed: {command_err} ; wl-clipboard-rs failed: {lib_err}"
            ))
        })
}

fn copy_via_library(image_data: &[u8]) -> Result<(), ExportError> {
    let mut opts = Options::new();
    // Serve a single paste so the data outlives this process.
    opts.serve_requests(ServeRequests::Only(1));
    opts.copy(
        Source::Bytes(image_data.into()),
        MimeType::Specific(PNG_MIME.to_string()),
    )
    .map_err(|e| ExportError::ClipboardError(e.to_string()))
}

fn copy_via_command(image_data: &[u8]) -> Result<(), ExportError> {
    let clipboard_err = |what: &str, e: std::io::Error| {
        ExportError::ClipboardError(format!("{what}: {e}"))
    };

    let mut child = Command::new("wl-copy")
        .args(["--type", PNG_MIME])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| clipboard_err("failed to spawn wl-copy", e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(image_data)
            .map_err(|e| clipboard_err("failed to write to wl-copy", e))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| clipboard_err("failed to wait for wl-copy", e))?;
    if !output.status.success() {
        return Err(ExportError::ClipboardError(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    Ok(())
}
