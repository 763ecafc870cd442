//! Offscreen rasterization of a signature to PNG.

use super::types::ExportError;
use crate::draw::{RevealBasis, Stroke, render_background, render_signature};

/// Renders `strokes` on an opaque white `width` x `height` surface and
/// encodes it as PNG.
///
/// `reveal` selects a reveal frame instead of the static drawing.
pub fn render_png(
    strokes: &[Stroke],
    width: u32,
    height: u32,
    reveal: Option<(f64, RevealBasis)>,
) -> Result<Vec<u8>, ExportError> {
    let (w, h) = match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            return Err(ExportError::SurfaceError(format!(
                "invalid canvas size {width}x{height}"
            )));
        }
    };

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, w, h)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        render_background(&ctx, width as f64, height as f64);
        match reveal {
            Some((progress, basis)) => render_signature(&ctx, strokes, Some(progress), basis),
            None => render_signature(&ctx, strokes, None, RevealBasis::default()),
        }
        ctx.status()?;
    }
    surface.flush();

    let mut buffer = Vec::new();
    surface.write_to_png(&mut buffer)?;
    log::debug!(
        "Rasterized {} strokes to {}x{} PNG ({} bytes)",
        strokes.len(),
        width,
        height,
        buffer.len()
    );
    Ok(buffer)
}

/// Rasterizes the static signature, or returns `None` when no drawing
/// surface can be created (zero-sized canvas, allocation failure).
pub fn rasterize(strokes: &[Stroke], width: u32, height: u32) -> Option<Vec<u8>> {
    match render_png(strokes, width, height, None) {
        Ok(data) => Some(data),
        Err(err) => {
            log::warn!("No drawing surface available for export: {}", err);
            None
        }
    }
}
