//! Scripted pointer sessions.
//!
//! A script is a JSON array of events that drive an [`InputState`] exactly as
//! a windowing backend would: pointer samples, control actions and timed hold
//! gestures. Exports requested by completed holds are delivered through an
//! [`Exporter`].
//!
//! ```json
//! [
//!   { "type": "down", "x": 20, "y": 80 },
//!   { "type": "move", "x": 60, "y": 40 },
//!   { "type": "up" },
//!   { "type": "hold", "ms": 1500 }
//! ]
//! ```

use crate::draw::PaletteColor;
use crate::export::{ExportResult, Exporter};
use crate::input::{InputState, Tool};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Interval between simulated animation frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Longest hold or wait a single script event may request.
const MAX_DELAY: Duration = Duration::from_secs(3600);

fn primary_held() -> bool {
    true
}

/// Accepts a palette entry by name (`"blue"`) or by hex value (`"#2563eb"`).
fn palette_entry<'de, D>(deserializer: D) -> std::result::Result<PaletteColor, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    PaletteColor::from_name(&value)
        .or_else(|| PaletteColor::from_hex(&value))
        .ok_or_else(|| serde::de::Error::custom(format!("unknown palette color '{value}'")))
}

/// One scripted event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScriptEvent {
    /// Primary button pressed on the canvas
    Down { x: f64, y: f64 },
    /// Pointer moved over the canvas
    Move {
        x: f64,
        y: f64,
        #[serde(default = "primary_held")]
        primary: bool,
    },
    /// Primary button released
    Up,
    /// Pointer cancelled by the platform
    Cancel,
    /// Select pen or eraser
    Tool { tool: Tool },
    /// Select a palette color by name or hex value
    Color {
        #[serde(deserialize_with = "palette_entry")]
        color: PaletteColor,
    },
    /// Set the pen width
    Width { width: f64 },
    /// Clear the canvas
    Reset,
    /// Clear the canvas and restore the default style
    ResetAll,
    /// Undo the last commit, erase or reset
    Undo,
    /// Press the hold control for `ms` milliseconds, then release it
    Hold { ms: u64 },
    /// Let `ms` milliseconds of frames pass
    Wait { ms: u64 },
}

/// Parses a script from JSON text.
pub fn parse_script(source: &str) -> Result<Vec<ScriptEvent>> {
    serde_json::from_str(source).context("failed to parse replay script")
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read replay script {}", path.display()))?;
    parse_script(&source).with_context(|| format!("invalid replay script {}", path.display()))
}

/// Drives an [`InputState`] from script events on a simulated clock.
pub struct Replay {
    state: InputState,
    exporter: Option<Exporter>,
    clock: Instant,
    exports: Vec<ExportResult>,
}

impl Replay {
    /// Creates a replay. With `exporter` set to `None`, completed holds are
    /// recorded by the state but nothing is written or copied.
    pub fn new(state: InputState, exporter: Option<Exporter>) -> Self {
        Self {
            state,
            exporter,
            clock: Instant::now(),
            exports: Vec::new(),
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn into_state(self) -> InputState {
        self.state
    }

    /// Successful exports so far, in order.
    pub fn exports(&self) -> &[ExportResult] {
        &self.exports
    }

    /// Applies every event in order.
    pub fn run(&mut self, events: &[ScriptEvent]) {
        for event in events {
            self.apply(event);
        }
        info!(
            "Replayed {} events: {} strokes, {} exports",
            events.len(),
            self.state.strokes().len(),
            self.exports.len()
        );
    }

    /// Applies one event and delivers any export it triggered.
    pub fn apply(&mut self, event: &ScriptEvent) {
        debug!("Replay event: {:?}", event);
        match *event {
            ScriptEvent::Down { x, y } => self.state.on_pointer_down(x, y),
            ScriptEvent::Move { x, y, primary } => self.state.on_pointer_move(x, y, primary),
            ScriptEvent::Up => self.state.on_pointer_up(),
            ScriptEvent::Cancel => self.state.on_pointer_cancel(),
            ScriptEvent::Tool { tool } => self.state.select_tool(tool),
            ScriptEvent::Color { color } => self.state.set_color(color),
            ScriptEvent::Width { width } => {
                self.state.set_width(width);
            }
            ScriptEvent::Reset => self.state.reset(),
            ScriptEvent::ResetAll => self.state.reset_all(),
            ScriptEvent::Undo => {
                if !self.state.undo() {
                    debug!("Nothing to undo");
                }
            }
            ScriptEvent::Hold { ms } => self.hold(Duration::from_millis(ms)),
            ScriptEvent::Wait { ms } => self.wait(Duration::from_millis(ms)),
        }
        self.deliver_pending_export();
    }

    fn advance(&mut self, step: Duration) {
        self.clock += step;
        if self.state.hold_needs_frame() {
            self.state.on_hold_frame(self.clock);
            self.deliver_pending_export();
        }
    }

    fn hold(&mut self, held: Duration) {
        self.state.on_hold_press(self.clock);
        self.run_until(self.deadline(held));
        self.state.on_hold_release();

        // Let a completed gesture run out its cooldown so the next hold rearms.
        while self.state.hold_needs_frame() {
            self.advance(FRAME_INTERVAL);
        }
    }

    fn wait(&mut self, duration: Duration) {
        let until = self.deadline(duration);
        self.run_until(until);
    }

    fn deadline(&self, delay: Duration) -> Instant {
        if delay > MAX_DELAY {
            warn!("Replay delay of {}ms capped to {}ms", delay.as_millis(), MAX_DELAY.as_millis());
        }
        self.clock + delay.min(MAX_DELAY)
    }

    /// Steps frames up to `until`, jumping ahead once no frame is pending.
    fn run_until(&mut self, until: Instant) {
        while self.clock < until {
            if !self.state.hold_needs_frame() {
                self.clock = until;
                break;
            }
            let step = FRAME_INTERVAL.min(until.saturating_duration_since(self.clock));
            self.advance(step);
        }
    }

    fn deliver_pending_export(&mut self) {
        let Some(action) = self.state.take_pending_export() else {
            return;
        };
        let Some(exporter) = &self.exporter else {
            debug!("Export {:?} requested with exports disabled", action);
            return;
        };

        match exporter.export(
            action,
            self.state.strokes(),
            self.state.canvas_width,
            self.state.canvas_height,
        ) {
            Ok(Some(result)) => self.exports.push(result),
            Ok(None) => {}
            Err(err) => warn!("Export failed: {}", err),
        }
    }
}
