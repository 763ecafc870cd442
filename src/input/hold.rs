//! Press-and-hold gesture that gates export.
//!
//! The gesture is a small state machine driven by press/release events and
//! animation frames. Progress grows with the time the press has been held;
//! when it reaches 1 the configured action fires exactly once, and the
//! gesture stays completed for a cooldown before it rearms.

use std::time::{Duration, Instant};

use crate::config::HoldConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What a completed hold triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum HoldAction {
    /// Save the signature as a PNG file
    #[default]
    Download,
    /// Copy the signature PNG to the clipboard
    Copy,
}

impl HoldAction {
    /// Button label while the gesture is armed.
    pub fn idle_label(self) -> &'static str {
        match self {
            HoldAction::Download => "Hold to download",
            HoldAction::Copy => "Hold to copy",
        }
    }

    /// Button label after the action fired.
    pub fn done_label(self) -> &'static str {
        match self {
            HoldAction::Download => "Downloaded",
            HoldAction::Copy => "Copied",
        }
    }
}

/// Runtime settings for the hold gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldSettings {
    /// Time a press must be held before the action fires
    pub duration: Duration,
    /// Time the gesture stays completed before it rearms
    pub cooldown: Duration,
    pub action: HoldAction,
}

impl Default for HoldSettings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1200),
            cooldown: Duration::from_millis(1200),
            action: HoldAction::Download,
        }
    }
}

impl From<&HoldConfig> for HoldSettings {
    fn from(cfg: &HoldConfig) -> Self {
        Self {
            duration: Duration::from_millis(cfg.duration_ms),
            cooldown: Duration::from_millis(cfg.cooldown_ms),
            action: cfg.action,
        }
    }
}

/// Events that drive the hold gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldEvent {
    /// Primary button pressed on the control
    Press(Instant),
    /// Animation frame tick
    Frame(Instant),
    /// Button released over the control
    Release,
    /// Pointer left the control
    Leave,
    /// The platform cancelled the pointer
    Cancel,
}

/// Effects produced by a transition, for the caller to act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoldEffect {
    /// Progress moved to the given value (below 1)
    Progress(f64),
    /// The hold completed; run the action
    Fire(HoldAction),
    /// Progress dropped back to 0
    Reset,
}

/// Phase of the hold gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoldPhase {
    #[default]
    Idle,
    Holding {
        started_at: Instant,
    },
    Completed {
        at: Instant,
    },
}

/// Snapshot of the gesture: its phase, current progress and fire latch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoldState {
    pub phase: HoldPhase,
    pub progress: f64,
    /// Set when the action fired; cleared only once progress is back to 0
    pub latched: bool,
}

/// Linear hold progress for `elapsed` out of `duration`, clamped to `[0, 1]`.
pub fn hold_progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Pure transition function of the hold gesture.
pub fn transition(
    state: HoldState,
    event: HoldEvent,
    settings: &HoldSettings,
) -> (HoldState, Vec<HoldEffect>) {
    const IDLE: HoldState = HoldState {
        phase: HoldPhase::Idle,
        progress: 0.0,
        latched: false,
    };

    match (state.phase, event) {
        (HoldPhase::Idle, HoldEvent::Press(now)) => (
            HoldState {
                phase: HoldPhase::Holding { started_at: now },
                progress: 0.0,
                latched: state.latched,
            },
            Vec::new(),
        ),
        (HoldPhase::Holding { started_at }, HoldEvent::Frame(now)) => {
            let progress = hold_progress(now.saturating_duration_since(started_at), settings.duration);
            if progress < 1.0 {
                let next = HoldState { progress, ..state };
                return (next, vec![HoldEffect::Progress(progress)]);
            }

            let effects = if state.latched {
                Vec::new()
            } else {
                vec![HoldEffect::Fire(settings.action)]
            };
            let next = HoldState {
                phase: HoldPhase::Completed { at: now },
                progress: 1.0,
                latched: true,
            };
            (next, effects)
        }
        (
            HoldPhase::Holding { .. },
            HoldEvent::Release | HoldEvent::Leave | HoldEvent::Cancel,
        ) => (IDLE, vec![HoldEffect::Reset]),
        (HoldPhase::Completed { at }, HoldEvent::Frame(now)) => {
            if now.saturating_duration_since(at) >= settings.cooldown {
                (IDLE, vec![HoldEffect::Reset])
            } else {
                (state, Vec::new())
            }
        }
        _ => (state, Vec::new()),
    }
}

/// Stateful wrapper around [`transition`].
#[derive(Debug, Clone)]
pub struct HoldGesture {
    settings: HoldSettings,
    state: HoldState,
}

impl HoldGesture {
    pub fn new(settings: HoldSettings) -> Self {
        Self {
            settings,
            state: HoldState::default(),
        }
    }

    pub fn settings(&self) -> &HoldSettings {
        &self.settings
    }

    pub fn state(&self) -> HoldState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    /// Whether the action already fired for the current hold.
    pub fn fired(&self) -> bool {
        self.state.latched
    }

    /// Whether the caller should keep delivering frames.
    pub fn needs_frame(&self) -> bool {
        !matches!(self.state.phase, HoldPhase::Idle)
    }

    /// Label for the control in its current state.
    pub fn label(&self) -> &'static str {
        if self.state.latched {
            self.settings.action.done_label()
        } else {
            self.settings.action.idle_label()
        }
    }

    pub fn handle(&mut self, event: HoldEvent) -> Vec<HoldEffect> {
        let (next, effects) = transition(self.state, event, &self.settings);
        self.state = next;
        effects
    }

    pub fn press(&mut self, now: Instant) -> Vec<HoldEffect> {
        self.handle(HoldEvent::Press(now))
    }

    pub fn frame(&mut self, now: Instant) -> Vec<HoldEffect> {
        self.handle(HoldEvent::Frame(now))
    }

    pub fn release(&mut self) -> Vec<HoldEffect> {
        self.handle(HoldEvent::Release)
    }

    pub fn leave(&mut self) -> Vec<HoldEffect> {
        self.handle(HoldEvent::Leave)
    }

    pub fn cancel(&mut self) -> Vec<HoldEffect> {
        self.handle(HoldEvent::Cancel)
    }
}

impl Default for HoldGesture {
    fn default() -> Self {
        Self::new(HoldSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn progress_is_linear_and_clamped() {
        assert_eq!(hold_progress(ms(0), ms(1200)), 0.0);
        assert!((hold_progress(ms(600), ms(1200)) - 0.5).abs() < 1e-9);
        assert_eq!(hold_progress(ms(1200), ms(1200)), 1.0);
        assert_eq!(hold_progress(ms(5000), ms(1200)), 1.0);
        assert_eq!(hold_progress(ms(10), Duration::ZERO), 1.0);
    }

    #[test]
    fn half_hold_reports_half_progress() {
        let start = Instant::now();
        let mut hold = HoldGesture::default();
        assert!(hold.press(start).is_empty());
        let effects = hold.frame(start + ms(600));
        assert_eq!(effects.len(), 1);
        match effects[0] {
            HoldEffect::Progress(p) => assert!((p - 0.5).abs() < 1e-9),
            other => panic!("unexpected effect {other:?}"),
        }
        assert!(!hold.fired());
    }

    #[test]
    fn full_hold_fires_exactly_once() {
        let start = Instant::now();
        let mut hold = HoldGesture::default();
        hold.press(start);
        hold.frame(start + ms(600));
        assert_eq!(
            hold.frame(start + ms(1200)),
            vec![HoldEffect::Fire(HoldAction::Download)]
        );
        assert_eq!(hold.progress(), 1.0);
        assert!(hold.fired());
        assert_eq!(hold.label(), "Downloaded");

        // Frames during the cooldown never refire.
        for extra in [1300, 1500, 2300] {
            assert!(hold.frame(start + ms(extra)).is_empty());
        }
        assert!(hold.release().is_empty());
    }

    #[test]
    fn cooldown_rearms_the_gesture() {
        let start = Instant::now();
        let mut hold = HoldGesture::default();
        hold.press(start);
        hold.frame(start + ms(1200));
        assert_eq!(hold.frame(start + ms(2400)), vec![HoldEffect::Reset]);
        assert_eq!(hold.progress(), 0.0);
        assert!(!hold.fired());
        assert!(!hold.needs_frame());
        assert_eq!(hold.label(), "Hold to download");

        let again = start + ms(3000);
        hold.press(again);
        assert_eq!(
            hold.frame(again + ms(1200)),
            vec![HoldEffect::Fire(HoldAction::Download)]
        );
    }

    #[test]
    fn early_release_resets_without_firing() {
        let start = Instant::now();
        let mut hold = HoldGesture::default();
        hold.press(start);
        hold.frame(start + ms(900));
        assert_eq!(hold.release(), vec![HoldEffect::Reset]);
        assert_eq!(hold.progress(), 0.0);
        assert!(!hold.fired());
        assert!(hold.frame(start + ms(2000)).is_empty());
    }

    #[test]
    fn leave_and_cancel_abort_the_hold() {
        let start = Instant::now();
        let mut hold = HoldGesture::default();
        hold.press(start);
        assert_eq!(hold.leave(), vec![HoldEffect::Reset]);
        hold.press(start);
        assert_eq!(hold.cancel(), vec![HoldEffect::Reset]);
        assert_eq!(hold.state().phase, HoldPhase::Idle);
    }

    #[test]
    fn frames_before_press_time_do_not_go_negative() {
        let start = Instant::now() + ms(500);
        let mut hold = HoldGesture::default();
        hold.press(start);
        let effects = hold.frame(start - ms(100));
        assert_eq!(effects, vec![HoldEffect::Progress(0.0)]);
    }

    #[test]
    fn copy_action_labels() {
        let settings = HoldSettings {
            action: HoldAction::Copy,
            ..HoldSettings::default()
        };
        let start = Instant::now();
        let mut hold = HoldGesture::new(settings);
        assert_eq!(hold.label(), "Hold to copy");
        hold.press(start);
        assert_eq!(
            hold.frame(start + ms(1500)),
            vec![HoldEffect::Fire(HoldAction::Copy)]
        );
        assert_eq!(hold.label(), "Copied");
    }
}
