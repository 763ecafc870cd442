//! Stroke geometry and Cairo-based rendering.
//!
//! This module defines the core drawing types of the signature pad:
//! - [`Point`] and [`Stroke`]: captured polylines with their pen style
//! - [`StrokeStore`]: immutable, ordered snapshot of committed strokes
//! - [`outline`]: variable-width outline generation
//! - [`eraser`]: splitting strokes along an eraser path
//! - [`reveal`]: dash parameters for the "drawing itself" animation
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod eraser;
pub mod outline;
pub mod render;
pub mod reveal;
pub mod store;
pub mod stroke;

// Re-export commonly used types at module level
pub use color::{Color, PaletteColor};
pub use render::{render_background, render_eraser_trail, render_outline, render_signature};
pub use reveal::{RevealBasis, RevealedStroke};
pub use store::StrokeStore;
pub use stroke::{Point, Stroke};
