use crate::input::events::PointerEvent;
use log::{debug, info, warn};

use super::{CaptureEffect, InputState};

impl InputState {
    /// Processes a primary button press at canvas coordinates.
    ///
    /// Starts a pen stroke or an eraser gesture depending on the active tool.
    /// A press while a gesture is still open restarts it from this point.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.dispatch(PointerEvent::Down { x, y });
    }

    /// Processes pointer motion.
    ///
    /// # Arguments
    /// * `x` - Current pointer X coordinate
    /// * `y` - Current pointer Y coordinate
    /// * `primary` - Whether the primary button is held
    ///
    /// # Behavior
    /// - Pen: appends to the stroke being drawn
    /// - Eraser: appends to the eraser path and recomputes the store from the
    ///   snapshot taken when the gesture began
    /// - Ignored while idle or when the primary button is not held
    pub fn on_pointer_move(&mut self, x: f64, y: f64, primary: bool) {
        self.dispatch(PointerEvent::Move { x, y, primary });
    }

    /// Processes a primary button release.
    ///
    /// A pen stroke with at least two points is committed with the current
    /// style; an eraser gesture keeps its result and drops the path.
    pub fn on_pointer_up(&mut self) {
        self.dispatch(PointerEvent::Up);
    }

    /// Processes a platform pointer cancellation.
    ///
    /// The in-progress stroke is discarded; an eraser gesture is reverted.
    pub fn on_pointer_cancel(&mut self) {
        self.dispatch(PointerEvent::Cancel);
    }

    /// Runs one capture transition and applies its effects.
    pub fn dispatch(&mut self, event: PointerEvent) {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = {
            let ctx = self.capture_context();
            state.step(event, &ctx)
        };
        self.state = next;
        for effect in effects {
            self.apply_capture_effect(effect);
        }
    }

    fn apply_capture_effect(&mut self, effect: CaptureEffect) {
        match effect {
            CaptureEffect::Commit(stroke) => {
                if self.max_strokes > 0 && self.store.len() >= self.max_strokes {
                    warn!(
                        "Stroke limit reached ({} strokes); discarding stroke",
                        self.max_strokes
                    );
                    return;
                }
                info!(
                    "Committed {:?} stroke with {} points (width {})",
                    stroke.color,
                    stroke.points().len(),
                    stroke.width
                );
                let previous = self.store.clone();
                self.store = previous.commit(stroke);
                self.push_history(previous);
            }
            CaptureEffect::Replace(store) => {
                debug!("Eraser pass left {} strokes", store.len());
                self.store = store;
            }
            CaptureEffect::Checkpoint(snapshot) => self.push_history(snapshot),
            CaptureEffect::Redraw => self.needs_redraw = true,
        }
    }
}
