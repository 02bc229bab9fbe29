//! Mesh data model: vertices, indexed triangle lists, the built-in shape
//! templates, and the subdivided-sphere generator.
//!
//! # Invariants
//! - Indices come in triples; every index stays in range of the vertex list.
//! - The sphere generator is a pure function of its depth: same input, same
//!   vertex and index sequences.
//! - Within one subdivision pass, at most one midpoint vertex exists per
//!   undirected edge. Triangles sharing an edge share its midpoint.

mod data;
mod sphere;
mod templates;
mod vertex;

pub use data::{MeshData, MeshError};
pub use sphere::sphere;
pub use templates::{cube, square, tetrahedron};
pub use vertex::Vertex;

use polyview_common::Shape;

/// Mesh data for a built-in shape. `sphere_depth` only affects [`Shape::Sphere`].
pub fn shape_mesh(shape: Shape, sphere_depth: u32) -> MeshData {
    match shape {
        Shape::Square => square(),
        Shape::Cube => cube(),
        Shape::Tetrahedron => tetrahedron(),
        Shape::Sphere => sphere(sphere_depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_produces_a_valid_mesh() {
        for shape in Shape::ALL {
            let mesh = shape_mesh(shape, 2);
            assert!(mesh.validate().is_ok(), "{} failed validation", shape.name());
        }
    }
}
