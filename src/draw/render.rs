//! Cairo-based rendering of strokes, previews and reveal frames.

use super::color::{Color, REVEAL_BASE, WHITE};
use super::outline;
use super::reveal::{self, RevealBasis, RevealedStroke};
use super::stroke::{Point, Stroke};

/// Eraser trail color (#ff4d4f at half opacity).
const ERASER_TRAIL: Color = Color::new(1.0, 77.0 / 255.0, 79.0 / 255.0, 0.5);
/// Eraser trail width in pixels.
const ERASER_TRAIL_WIDTH: f64 = 4.0;

/// Fills the whole surface with opaque white.
pub fn render_background(ctx: &cairo::Context, width: f64, height: f64) {
    WHITE.apply(ctx);
    ctx.rectangle(0.0, 0.0, width, height);
    let _ = ctx.fill();
}

fn trace(ctx: &cairo::Context, points: &[Point]) {
    if let Some((first, rest)) = points.split_first() {
        ctx.move_to(first.x, first.y);
        for p in rest {
            ctx.line_to(p.x, p.y);
        }
    }
}

/// Fills the smoothed outline of a centerline.
pub fn render_outline(ctx: &cairo::Context, points: &[Point], color: Color, width: f64) {
    let shape = outline::outline(points, width);
    if shape.is_empty() {
        return;
    }

    color.apply(ctx);
    trace(ctx, &shape);
    ctx.close_path();
    let _ = ctx.fill();
}

/// Renders a committed stroke in its own color.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    render_outline(ctx, stroke.points(), stroke.color.color(), stroke.width);
}

/// Renders all strokes in draw order (first stroke = bottom layer).
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke]) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Renders the translucent trail of an in-progress eraser gesture.
pub fn render_eraser_trail(ctx: &cairo::Context, path: &[Point]) {
    if path.is_empty() {
        return;
    }

    ERASER_TRAIL.apply(ctx);
    ctx.set_line_width(ERASER_TRAIL_WIDTH);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
    trace(ctx, path);
    let _ = ctx.stroke();
}

fn render_revealed(ctx: &cairo::Context, revealed: &RevealedStroke) {
    // A zero-length dash with round caps would still paint a dot.
    if revealed.dash_length <= 0.0 || revealed.revealed_length() <= 0.0 {
        return;
    }

    let _ = ctx.save();
    revealed.color.color().apply(ctx);
    ctx.set_line_width(revealed.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
    ctx.set_dash(&[revealed.dash_length], revealed.dash_offset);
    trace(ctx, &revealed.path);
    let _ = ctx.stroke();
    let _ = ctx.restore();
}

/// Renders one frame of the reveal animation.
///
/// Every stroke is first drawn in light grey, then the revealed part of each
/// path is stroked on top in the stroke's own color.
pub fn render_reveal(ctx: &cairo::Context, strokes: &[Stroke], progress: f64, basis: RevealBasis) {
    for stroke in strokes {
        render_outline(ctx, stroke.points(), REVEAL_BASE, stroke.width);
    }
    for revealed in reveal::reveal(strokes, progress, basis) {
        render_revealed(ctx, &revealed);
    }
}

/// Renders strokes statically (`None`) or as a reveal frame (`Some(progress)`).
pub fn render_signature(
    ctx: &cairo::Context,
    strokes: &[Stroke],
    progress: Option<f64>,
    basis: RevealBasis,
) {
    match progress {
        None => render_strokes(ctx, strokes),
        Some(progress) => render_reveal(ctx, strokes, progress, basis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::PaletteColor;

    fn surface() -> (cairo::ImageSurface, cairo::Context) {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 40, 20).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        (surface, ctx)
    }

    fn pixel(surface: &mut cairo::ImageSurface, x: usize, y: usize) -> [u8; 4] {
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let i = y * stride + x * 4;
        [data[i], data[i + 1], data[i + 2], data[i + 3]]
    }

    fn bar() -> Stroke {
        Stroke::new(
            (0..=30).map(|i| Point::new(5.0 + i as f64, 10.0)).collect(),
            PaletteColor::Red,
            6.0,
        )
        .unwrap()
    }

    #[test]
    fn background_is_opaque_white() {
        let (mut surface, ctx) = surface();
        render_background(&ctx, 40.0, 20.0);
        drop(ctx);
        assert_eq!(pixel(&mut surface, 3, 3), [255, 255, 255, 255]);
    }

    #[test]
    fn static_render_paints_the_stroke() {
        let (mut surface, ctx) = surface();
        render_background(&ctx, 40.0, 20.0);
        render_signature(&ctx, &[bar()], None, RevealBasis::Centerline);
        drop(ctx);
        // ARGB32 is stored as BGRA on little-endian hosts; red dominates blue.
        let [b, _g, r, _a] = pixel(&mut surface, 20, 10);
        assert!(r > b, "expected red ink, got r={r} b={b}");
    }

    #[test]
    fn zero_progress_reveal_only_draws_grey_base() {
        let (mut surface, ctx) = surface();
        render_background(&ctx, 40.0, 20.0);
        render_signature(&ctx, &[bar()], Some(0.0), RevealBasis::Centerline);
        drop(ctx);
        let [b, g, r, _a] = pixel(&mut surface, 20, 10);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!(r < 255);
    }
}
