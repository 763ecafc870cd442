mod actions;
mod core;
mod pointer;
mod render;
#[cfg(test)]
mod tests;

pub use core::{
    CaptureContext, CaptureEffect, CaptureState, InputState, StrokeStyle, normalize_width,
};
