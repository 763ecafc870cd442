//! Generic pointer event types, independent of any event loop.

/// A pointer sample delivered to the drawing surface.
///
/// Coordinates are canvas-local. Backends translate their native events into
/// these values before handing them to [`InputState`](super::InputState).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at the given position
    Down { x: f64, y: f64 },
    /// Pointer moved; `primary` reports whether the primary button is held
    Move { x: f64, y: f64, primary: bool },
    /// Primary button released
    Up,
    /// The platform cancelled the pointer (capture lost, touch interrupted)
    Cancel,
}
