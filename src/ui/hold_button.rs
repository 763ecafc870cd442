//! Hold-to-export control: a progress sweep under a two-tone label.

use crate::draw::Color;
use crate::input::HoldGesture;

// ============================================================================
// Layout Constants (not configurable)
// ============================================================================

/// Sweep fill (#cffbdd)
const SWEEP_COLOR: Color = Color::new(207.0 / 255.0, 251.0 / 255.0, 221.0 / 255.0, 1.0);
/// Label color left of the progress edge (#2e8f59)
const LABEL_DONE_COLOR: Color = Color::new(46.0 / 255.0, 143.0 / 255.0, 89.0 / 255.0, 1.0);
/// Label color right of the progress edge (#222)
const LABEL_PENDING_COLOR: Color = Color::new(34.0 / 255.0, 34.0 / 255.0, 34.0 / 255.0, 1.0);
/// Button face
const FACE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
/// Button border (#e5e7eb)
const BORDER_COLOR: Color = Color::new(229.0 / 255.0, 231.0 / 255.0, 235.0 / 255.0, 1.0);
const BORDER_WIDTH: f64 = 1.0;
const LABEL_FONT_SIZE: f64 = 14.0;

/// Placement of the hold control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldButton {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl HoldButton {
    pub const DEFAULT_WIDTH: f64 = 180.0;
    pub const DEFAULT_HEIGHT: f64 = 36.0;

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Default-sized button with its top-left corner at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }

    /// Hit test for routing pointer events to the hold gesture.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Width of the sweep (and of the highlighted label part) at `progress`.
    pub fn sweep_width(&self, progress: f64) -> f64 {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.width * progress
    }

    /// Renders the button for the gesture's current progress and label.
    pub fn render(&self, ctx: &cairo::Context, hold: &HoldGesture) {
        let sweep = self.sweep_width(hold.progress());

        FACE_COLOR.apply(ctx);
        ctx.rectangle(self.x, self.y, self.width, self.height);
        let _ = ctx.fill();

        if sweep > 0.0 {
            SWEEP_COLOR.apply(ctx);
            ctx.rectangle(self.x, self.y, sweep, self.height);
            let _ = ctx.fill();
        }

        BORDER_COLOR.apply(ctx);
        ctx.set_line_width(BORDER_WIDTH);
        ctx.rectangle(self.x, self.y, self.width, self.height);
        let _ = ctx.stroke();

        self.render_label(ctx, hold.label(), sweep);
    }

    fn render_label(&self, ctx: &cairo::Context, label: &str, split: f64) {
        ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        ctx.set_font_size(LABEL_FONT_SIZE);

        let extents = match ctx.text_extents(label) {
            Ok(ext) => ext,
            Err(e) => {
                log::warn!("Failed to measure hold button label: {}, skipping label", e);
                return;
            }
        };
        let text_x = self.x + (self.width - extents.width()) / 2.0 - extents.x_bearing();
        let text_y = self.y + (self.height - extents.height()) / 2.0 - extents.y_bearing();

        // Same text twice, each clipped to its side of the progress edge.
        for (color, clip_x, clip_width) in [
            (LABEL_DONE_COLOR, self.x, split),
            (LABEL_PENDING_COLOR, self.x + split, self.width - split),
        ] {
            if clip_width <= 0.0 {
                continue;
            }
            let _ = ctx.save();
            ctx.rectangle(clip_x, self.y, clip_width, self.height);
            ctx.clip();
            color.apply(ctx);
            ctx.move_to(text_x, text_y);
            let _ = ctx.show_text(label);
            let _ = ctx.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_covers_the_face_only() {
        let button = HoldButton::at(10.0, 20.0);
        assert!(button.contains(10.0, 20.0));
        assert!(button.contains(189.9, 55.9));
        assert!(!button.contains(190.0, 30.0));
        assert!(!button.contains(9.9, 30.0));
    }

    #[test]
    fn sweep_tracks_progress() {
        let button = HoldButton::at(0.0, 0.0);
        assert_eq!(button.sweep_width(0.0), 0.0);
        assert_eq!(button.sweep_width(0.5), 90.0);
        assert_eq!(button.sweep_width(1.0), 180.0);
        assert_eq!(button.sweep_width(3.0), 180.0);
        assert_eq!(button.sweep_width(f64::NAN), 0.0);
    }
}
