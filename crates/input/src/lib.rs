//! Viewer input mapped to shared actions.
//!
//! # Invariants
//! - The app loop consumes actions, never raw key events.
//! - Keys are logical, not toolkit keycodes, so bindings stay testable
//!   without a window.

pub mod action;

pub use action::{Action, Bindings, Key};
