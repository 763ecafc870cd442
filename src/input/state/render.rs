use crate::draw::{
    Point, render_background, render_eraser_trail, render_outline, render_signature,
};

use super::{CaptureState, InputState};

impl InputState {
    /// Returns the centerline currently being drawn for live preview.
    ///
    /// # Returns
    /// - `Some(points)` while the pen is down
    /// - `None` when idle or erasing
    pub fn provisional_points(&self) -> Option<&[Point]> {
        match &self.state {
            CaptureState::Drawing { points } => Some(points),
            _ => None,
        }
    }

    /// Returns the eraser path while the eraser is down.
    pub fn eraser_path(&self) -> Option<&[Point]> {
        match &self.state {
            CaptureState::Erasing { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Renders the live canvas.
    ///
    /// Draws the white background, the committed strokes (as a reveal frame
    /// while a hold is in progress), the stroke being drawn in the current
    /// style, and the eraser trail on top.
    pub fn render(&self, ctx: &cairo::Context) {
        render_background(ctx, self.canvas_width as f64, self.canvas_height as f64);
        render_signature(ctx, self.strokes(), self.reveal_preview, self.reveal_basis);

        if let Some(points) = self.provisional_points() {
            render_outline(ctx, points, self.style.color.color(), self.style.width());
        }
        if let Some(path) = self.eraser_path() {
            render_eraser_trail(ctx, path);
        }
    }
}
