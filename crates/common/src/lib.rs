//! Shared types for the polyview workspace.
//!
//! # Invariants
//! - Nothing here depends on the GPU or the window toolkit.
//! - Transform composition order is scale, then rotation, then translation.

pub mod types;

pub use types::{Rgb, Shape, Transform};
