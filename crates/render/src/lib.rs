//! Renderer-agnostic interface over the scene.
//!
//! # Invariants
//! - Renderers never mutate the scene.
//! - The GPU backend lives in its own crate; this one stays headless so the
//!   interface can be exercised in tests and the CLI.

pub mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
