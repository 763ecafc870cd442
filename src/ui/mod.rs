//! UI rendering: background grid and the hold-to-export control.

pub mod grid;
pub mod hold_button;

pub use grid::InteractiveGrid;
pub use hold_button::HoldButton;
