//! Capture state machine and input state management.

use crate::config::Config;
use crate::draw::{PaletteColor, Point, RevealBasis, Stroke, StrokeStore};
use crate::input::{
    events::PointerEvent,
    hold::{HoldAction, HoldGesture, HoldSettings},
    tool::Tool,
};

/// Maximum number of undo snapshots kept.
const MAX_HISTORY: usize = 64;

/// Pointer capture state machine.
///
/// Tracks whether the user is idle, laying down ink, or dragging the eraser.
/// Transitions are computed by [`CaptureState::step`], which never touches the
/// store directly; it describes what should happen through [`CaptureEffect`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CaptureState {
    /// Not actively drawing - waiting for a pointer press
    #[default]
    Idle,
    /// Pen down, accumulating the centerline
    Drawing {
        /// Points in capture order
        points: Vec<Point>,
    },
    /// Eraser down, accumulating the eraser path
    Erasing {
        /// Eraser path in capture order
        path: Vec<Point>,
        /// Store snapshot taken when the gesture started
        base: StrokeStore,
    },
}

/// Side effects requested by a capture transition.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureEffect {
    /// Append a finished stroke to the store
    Commit(Stroke),
    /// Replace the store with a recomputed snapshot
    Replace(StrokeStore),
    /// Record a snapshot in the undo history
    Checkpoint(StrokeStore),
    /// Something visible changed
    Redraw,
}

/// Inputs a transition may read but never mutate.
#[derive(Debug, Clone, Copy)]
pub struct CaptureContext<'a> {
    pub tool: Tool,
    pub style: StrokeStyle,
    pub eraser_radius: f64,
    pub store: &'a StrokeStore,
}

impl CaptureState {
    /// Computes the next state and the effects for one pointer event.
    pub fn step(self, event: PointerEvent, ctx: &CaptureContext<'_>) -> (Self, Vec<CaptureEffect>) {
        match (self, event) {
            (state, PointerEvent::Down { x, y }) => {
                let mut effects = Vec::with_capacity(2);
                // A restarted erase keeps the undo point of the gesture it replaces.
                if let CaptureState::Erasing { base, .. } = state
                    && *ctx.store != base
                {
                    effects.push(CaptureEffect::Checkpoint(base));
                }
                effects.push(CaptureEffect::Redraw);
                let start = vec![Point::new(x, y)];
                let next = match ctx.tool {
                    Tool::Pen => CaptureState::Drawing { points: start },
                    Tool::Eraser => CaptureState::Erasing {
                        path: start,
                        base: ctx.store.clone(),
                    },
                };
                (next, effects)
            }
            (state, PointerEvent::Move { primary: false, .. }) => (state, Vec::new()),
            (CaptureState::Drawing { mut points }, PointerEvent::Move { x, y, .. }) => {
                points.push(Point::new(x, y));
                (CaptureState::Drawing { points }, vec![CaptureEffect::Redraw])
            }
            (CaptureState::Erasing { mut path, base }, PointerEvent::Move { x, y, .. }) => {
                path.push(Point::new(x, y));
                let mut effects = Vec::with_capacity(2);
                if path.len() > 1 {
                    // Always recompute from the gesture's base snapshot.
                    effects.push(CaptureEffect::Replace(base.erase(&path, ctx.eraser_radius)));
                }
                effects.push(CaptureEffect::Redraw);
                (CaptureState::Erasing { path, base }, effects)
            }
            (CaptureState::Drawing { points }, PointerEvent::Up) => {
                let mut effects = Vec::with_capacity(2);
                if let Some(stroke) = Stroke::new(points, ctx.style.color, ctx.style.width()) {
                    effects.push(CaptureEffect::Commit(stroke));
                }
                effects.push(CaptureEffect::Redraw);
                (CaptureState::Idle, effects)
            }
            (CaptureState::Erasing { base, .. }, PointerEvent::Up) => {
                let mut effects = Vec::with_capacity(2);
                if *ctx.store != base {
                    effects.push(CaptureEffect::Checkpoint(base));
                }
                effects.push(CaptureEffect::Redraw);
                (CaptureState::Idle, effects)
            }
            (CaptureState::Drawing { .. }, PointerEvent::Cancel) => {
                (CaptureState::Idle, vec![CaptureEffect::Redraw])
            }
            (CaptureState::Erasing { base, .. }, PointerEvent::Cancel) => (
                CaptureState::Idle,
                vec![CaptureEffect::Replace(base), CaptureEffect::Redraw],
            ),
            (CaptureState::Idle, _) => (CaptureState::Idle, Vec::new()),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, CaptureState::Idle)
    }
}

/// Current pen style: palette color and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: PaletteColor,
    width: f64,
}

impl StrokeStyle {
    pub const MIN_WIDTH: f64 = 1.0;
    pub const MAX_WIDTH: f64 = 10.0;
    pub const DEFAULT_WIDTH: f64 = 4.0;

    pub fn new(color: PaletteColor, width: f64) -> Self {
        Self {
            color,
            width: normalize_width(width),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sets the width, clamped to [1, 10] and rounded to 2 decimals.
    ///
    /// Returns the width actually applied.
    pub fn set_width(&mut self, width: f64) -> f64 {
        self.width = normalize_width(width);
        self.width
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(PaletteColor::default(), Self::DEFAULT_WIDTH)
    }
}

/// Clamps a pen width to the supported range with 2-decimal precision.
pub fn normalize_width(width: f64) -> f64 {
    if width.is_nan() {
        return StrokeStyle::MIN_WIDTH;
    }
    let clamped = width.clamp(StrokeStyle::MIN_WIDTH, StrokeStyle::MAX_WIDTH);
    (clamped * 100.0).round() / 100.0
}

/// Main input state containing the whole signature session.
///
/// This struct holds the committed strokes, the pen style and tool, the
/// capture state machine and the hold gesture. It processes pointer events
/// and control actions and records what the backend has to do next.
pub struct InputState {
    /// Committed strokes (current snapshot)
    pub(crate) store: StrokeStore,
    /// Previous snapshots for undo, oldest first
    pub(crate) history: Vec<StrokeStore>,
    /// Current pen color and width
    pub style: StrokeStyle,
    /// Style restored by `reset_all`
    pub(crate) default_style: StrokeStyle,
    /// Active tool; read when a gesture starts
    pub(crate) tool: Tool,
    /// Eraser hit radius in pixels
    pub eraser_radius: f64,
    /// Maximum number of committed strokes (0 = unlimited)
    pub max_strokes: usize,
    /// Path the reveal animation follows
    pub reveal_basis: RevealBasis,
    /// Capture state machine
    pub state: CaptureState,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Canvas width in logical pixels
    pub canvas_width: u32,
    /// Canvas height in logical pixels
    pub canvas_height: u32,
    /// Hold-to-export gesture
    pub(crate) hold: HoldGesture,
    /// Reveal progress while the hold is in progress (None = static render)
    pub(crate) reveal_preview: Option<f64>,
    /// Export requested by a completed hold (to be handled by the backend)
    pending_export: Option<HoldAction>,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// # Arguments
    /// * `style` - Initial pen style, also restored by `reset_all`
    /// * `eraser_radius` - Eraser hit radius in pixels
    /// * `max_strokes` - Maximum committed strokes (0 = unlimited)
    /// * `reveal_basis` - Path the reveal animation follows
    /// * `hold_settings` - Hold gesture timing and action
    pub fn with_defaults(
        style: StrokeStyle,
        eraser_radius: f64,
        max_strokes: usize,
        reveal_basis: RevealBasis,
        hold_settings: HoldSettings,
    ) -> Self {
        Self {
            store: StrokeStore::new(),
            history: Vec::new(),
            style,
            default_style: style,
            tool: Tool::default(),
            eraser_radius,
            max_strokes,
            reveal_basis,
            state: CaptureState::Idle,
            needs_redraw: true,
            canvas_width: 0,
            canvas_height: 0,
            hold: HoldGesture::new(hold_settings),
            reveal_preview: None,
            pending_export: None,
        }
    }

    /// Builds an InputState from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let drawing = &config.drawing;
        let mut state = Self::with_defaults(
            StrokeStyle::new(drawing.default_color, drawing.default_width),
            drawing.eraser_radius,
            drawing.max_strokes,
            drawing.reveal_basis,
            HoldSettings::from(&config.hold),
        );
        state.update_canvas_dimensions(config.canvas.width, config.canvas.height);
        state
    }

    /// Updates the logical canvas size used for export.
    pub fn update_canvas_dimensions(&mut self, width: u32, height: u32) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    pub fn strokes(&self) -> &[Stroke] {
        self.store.strokes()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn hold(&self) -> &HoldGesture {
        &self.hold
    }

    /// Reveal progress to render with, or `None` for a static frame.
    pub fn reveal_preview(&self) -> Option<f64> {
        self.reveal_preview
    }

    /// Whether undo has anything to restore.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Takes the export requested by a completed hold, if any.
    pub fn take_pending_export(&mut self) -> Option<HoldAction> {
        self.pending_export.take()
    }

    pub(crate) fn request_export(&mut self, action: HoldAction) {
        self.pending_export = Some(action);
    }

    /// Records `snapshot` as the undo target, dropping the oldest entry when full.
    pub(crate) fn push_history(&mut self, snapshot: StrokeStore) {
        if self.history.len() >= MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(snapshot);
    }

    pub(crate) fn capture_context(&self) -> CaptureContext<'_> {
        CaptureContext {
            tool: self.tool,
            style: self.style,
            eraser_radius: self.eraser_radius,
            store: &self.store,
        }
    }
}
