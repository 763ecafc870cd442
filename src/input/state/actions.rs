use std::time::Instant;

use crate::draw::{PaletteColor, StrokeStore};
use crate::input::{
    events::PointerEvent,
    hold::{HoldEffect, HoldEvent},
    tool::Tool,
};
use log::{debug, info};

use super::InputState;

impl InputState {
    /// Clears every stroke and any gesture in progress.
    ///
    /// The pen style is kept. The cleared snapshot is recorded so the reset
    /// can be undone.
    pub fn reset(&mut self) {
        self.state = Default::default();
        if !self.store.is_empty() {
            let previous = std::mem::replace(&mut self.store, StrokeStore::new());
            self.push_history(previous);
            info!("Canvas cleared");
        }
        self.needs_redraw = true;
    }

    /// Clears the canvas and restores the default pen style and tool.
    pub fn reset_all(&mut self) {
        self.reset();
        self.style = self.default_style;
        self.tool = Tool::default();
    }

    /// Restores the snapshot taken before the last commit, erase or reset.
    ///
    /// A gesture in progress is cancelled first. Returns `false` when there
    /// is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.state.is_idle() {
            self.dispatch(PointerEvent::Cancel);
        }
        match self.history.pop() {
            Some(previous) => {
                debug!("Undo: {} -> {} strokes", self.store.len(), previous.len());
                self.store = previous;
                self.needs_redraw = true;
                true
            }
            None => false,
        }
    }

    /// Changes the pen color for later strokes.
    pub fn set_color(&mut self, color: PaletteColor) {
        if self.style.color != color {
            self.style.color = color;
            self.needs_redraw = true;
        }
    }

    /// Changes the pen width for later strokes, clamped to [1, 10].
    ///
    /// Returns the width actually applied.
    pub fn set_width(&mut self, width: f64) -> f64 {
        let previous = self.style.width();
        let applied = self.style.set_width(width);
        if applied != previous {
            self.needs_redraw = true;
        }
        applied
    }

    /// Switches between pen and eraser.
    ///
    /// A gesture in progress is cancelled, since the tool only applies to
    /// gestures that start after the switch.
    pub fn select_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            return;
        }
        if !self.state.is_idle() {
            self.dispatch(PointerEvent::Cancel);
        }
        self.tool = tool;
        debug!("Tool set to {tool:?}");
    }

    /// Primary button pressed on the hold control.
    pub fn on_hold_press(&mut self, now: Instant) {
        self.drive_hold(HoldEvent::Press(now));
    }

    /// Advances the hold gesture to `now`.
    ///
    /// Backends call this once per animation frame while
    /// [`hold_needs_frame`](Self::hold_needs_frame) is true.
    pub fn on_hold_frame(&mut self, now: Instant) {
        self.drive_hold(HoldEvent::Frame(now));
    }

    pub fn on_hold_release(&mut self) {
        self.drive_hold(HoldEvent::Release);
    }

    pub fn on_hold_leave(&mut self) {
        self.drive_hold(HoldEvent::Leave);
    }

    pub fn on_hold_cancel(&mut self) {
        self.drive_hold(HoldEvent::Cancel);
    }

    pub fn hold_needs_frame(&self) -> bool {
        self.hold.needs_frame()
    }

    fn drive_hold(&mut self, event: HoldEvent) {
        for effect in self.hold.handle(event) {
            self.apply_hold_effect(effect);
        }
    }

    fn apply_hold_effect(&mut self, effect: HoldEffect) {
        match effect {
            HoldEffect::Progress(progress) => {
                self.reveal_preview = Some(progress);
            }
            HoldEffect::Fire(action) => {
                info!("Hold completed; requesting {action:?}");
                self.reveal_preview = None;
                self.request_export(action);
            }
            HoldEffect::Reset => {
                self.reveal_preview = None;
            }
        }
        self.needs_redraw = true;
    }
}
