//! wgpu render backend for the polyview viewer.
//!
//! Draws a grid floor plus the scene's mesh instances, grouped per shape and
//! drawn instanced. Camera uses a fly-camera model with WASD + mouse look.
//!
//! # Invariants
//! - The renderer never mutates the scene.
//! - Mesh geometry is uploaded once at startup; only the uniform and
//!   instance buffers are written per frame.
//! - Per-shape grouping iterates in `Shape` order, so draw order is
//!   deterministic.

mod camera;
mod gpu;
mod shaders;

pub use camera::FlyCamera;
pub use gpu::WgpuRenderer;
