//! Input handling and gesture state machines.
//!
//! This module translates pointer events into drawing actions. It maintains
//! the current pen style and tool, the capture state machine (idle, drawing,
//! erasing), and the hold gesture that gates export.

pub mod events;
pub mod hold;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use hold::{HoldAction, HoldEffect, HoldEvent, HoldGesture, HoldPhase, HoldSettings};
pub use state::{CaptureEffect, CaptureState, InputState, StrokeStyle, normalize_width};
pub use tool::Tool;
