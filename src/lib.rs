//! Library exports for the signature pad.
//!
//! Exposes the stroke model, the input state machines, export and rendering
//! so that frontends and tools can share them with the `sigpad` binary.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod replay;
pub mod ui;

pub use config::Config;
