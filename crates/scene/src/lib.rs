//! Frame state for the viewer: an ordered list of mesh instances plus the
//! spin animation that advances them.
//!
//! # Invariants
//! - There is no state beyond the current frame: no identity, no events, no
//!   persistence.
//! - Instance order is stable, so rendering and text output are deterministic.
//! - `advance` is pure over (state, dt).

pub mod scene;

pub use scene::{MeshInstance, Scene};
