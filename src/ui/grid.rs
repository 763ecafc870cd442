//! Decorative background grid with a hover-highlighted cell.

use crate::config::BackgroundConfig;
use crate::draw::Color;

/// Cell outline color (gray-400 at 30%).
const GRID_STROKE: Color = Color::new(156.0 / 255.0, 163.0 / 255.0, 175.0 / 255.0, 0.3);
/// Hovered cell fill (gray-300 at 30%).
const GRID_HOVER_FILL: Color = Color::new(209.0 / 255.0, 213.0 / 255.0, 219.0 / 255.0, 0.3);
const GRID_LINE_WIDTH: f64 = 1.0;

/// A grid of equally sized cells covering the viewport.
///
/// Cells are numbered row-major: `index = row * columns + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveGrid {
    cell_width: f64,
    cell_height: f64,
    columns: usize,
    rows: usize,
    hovered: Option<usize>,
}

fn cells_to_cover(extent: f64, cell: f64) -> usize {
    if extent <= 0.0 || cell <= 0.0 || !extent.is_finite() {
        return 0;
    }
    (extent / cell).ceil() as usize
}

impl InteractiveGrid {
    /// Grid with enough cells to cover a `viewport_width` x `viewport_height` area.
    pub fn new(cell_width: f64, cell_height: f64, viewport_width: f64, viewport_height: f64) -> Self {
        Self::with_counts(
            cell_width,
            cell_height,
            cells_to_cover(viewport_width, cell_width),
            cells_to_cover(viewport_height, cell_height),
        )
    }

    /// Grid with explicit column and row counts.
    pub fn with_counts(cell_width: f64, cell_height: f64, columns: usize, rows: usize) -> Self {
        Self {
            cell_width,
            cell_height,
            columns,
            rows,
            hovered: None,
        }
    }

    pub fn from_config(config: &BackgroundConfig, viewport_width: f64, viewport_height: f64) -> Self {
        Self::new(
            config.cell_width,
            config.cell_height,
            viewport_width,
            viewport_height,
        )
    }

    /// Recomputes the counts for a new viewport size. Clears the hover.
    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) {
        self.columns = cells_to_cover(viewport_width, self.cell_width);
        self.rows = cells_to_cover(viewport_height, self.cell_height);
        self.hovered = None;
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Index of the cell containing `(x, y)`, or `None` outside the grid.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<usize> {
        if x < 0.0 || y < 0.0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let col = (x / self.cell_width).floor() as usize;
        let row = (y / self.cell_height).floor() as usize;
        (col < self.columns && row < self.rows).then(|| row * self.columns + col)
    }

    /// Top-left corner of the cell at `index`.
    pub fn cell_origin(&self, index: usize) -> Option<(f64, f64)> {
        (index < self.len()).then(|| {
            let col = index % self.columns;
            let row = index / self.columns;
            (col as f64 * self.cell_width, row as f64 * self.cell_height)
        })
    }

    /// Updates the hovered cell. Returns whether it changed.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        let hovered = self.cell_at(x, y);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    /// Clears the hovered cell. Returns whether one was set.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.hovered.take().is_some()
    }

    /// Renders every cell outline and fills the hovered cell.
    pub fn render(&self, ctx: &cairo::Context) {
        if self.is_empty() {
            return;
        }

        if let Some((x, y)) = self.hovered.and_then(|index| self.cell_origin(index)) {
            GRID_HOVER_FILL.apply(ctx);
            ctx.rectangle(x, y, self.cell_width, self.cell_height);
            let _ = ctx.fill();
        }

        GRID_STROKE.apply(ctx);
        ctx.set_line_width(GRID_LINE_WIDTH);
        for index in 0..self.len() {
            if let Some((x, y)) = self.cell_origin(index) {
                ctx.rectangle(x, y, self.cell_width, self.cell_height);
            }
        }
        let _ = ctx.stroke();
    }
}
