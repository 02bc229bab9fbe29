use std::collections::BTreeMap;

use glam::Vec3;

use crate::{MeshData, Vertex};

/// Base tetrahedron for the sphere generator, with its four corners already
/// on the unit sphere.
fn base_tetrahedron() -> MeshData {
    let s = 1.0 / 3.0_f32.sqrt();
    #[rustfmt::skip]
    let vertices = vec![
        Vertex::new([ s,  s,  s], [1.0, 0.0, 0.0]),
        Vertex::new([-s, -s,  s], [0.0, 1.0, 0.0]),
        Vertex::new([-s,  s, -s], [0.0, 0.0, 1.0]),
        Vertex::new([ s, -s, -s], [1.0, 1.0, 0.0]),
    ];
    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2,
        1, 2, 3,
        2, 3, 0,
        3, 0, 1,
    ];
    MeshData { vertices, indices }
}

/// Approximate a unit sphere by midpoint-subdividing a tetrahedron `depth`
/// times.
///
/// Each pass replaces every triangle with four children. Edge midpoints are
/// welded: the cache key is the undirected index pair, so both triangles
/// sharing an edge resolve to the same midpoint vertex and the mesh stays
/// closed. Midpoint positions are re-projected onto the unit sphere; colors
/// blend linearly. Depth 0 returns the base tetrahedron unchanged.
///
/// Triangle count grows by 4x per pass; depth beyond ~8 is impractical.
pub fn sphere(depth: u32) -> MeshData {
    let mut mesh = base_tetrahedron();
    for _ in 0..depth {
        mesh = subdivide(&mesh);
    }
    mesh
}

/// One subdivision pass over a closed triangle mesh on the unit sphere.
fn subdivide(mesh: &MeshData) -> MeshData {
    let mut vertices = mesh.vertices.clone();
    let mut indices = Vec::with_capacity(mesh.indices.len() * 4);
    // Undirected edge -> welded midpoint index, scoped to this pass.
    let mut cache: BTreeMap<(u32, u32), u32> = BTreeMap::new();

    for triangle in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (triangle[0], triangle[1], triangle[2]);
        let ab = weld_midpoint(a, b, &mut vertices, &mut cache);
        let bc = weld_midpoint(b, c, &mut vertices, &mut cache);
        let ca = weld_midpoint(c, a, &mut vertices, &mut cache);
        #[rustfmt::skip]
        indices.extend_from_slice(&[
            a, ab, ca,
            ab, b, bc,
            bc, c, ca,
            ab, bc, ca,
        ]);
    }

    MeshData { vertices, indices }
}

/// Midpoint vertex for the undirected edge (a, b), creating it on first use
/// and reusing it for the edge's other adjacent triangle.
fn weld_midpoint(
    a: u32,
    b: u32,
    vertices: &mut Vec<Vertex>,
    cache: &mut BTreeMap<(u32, u32), u32>,
) -> u32 {
    let edge = if a < b { (a, b) } else { (b, a) };
    if let Some(&index) = cache.get(&edge) {
        return index;
    }

    let mut mid = Vertex::midpoint(&vertices[a as usize], &vertices[b as usize]);
    mid.position = Vec3::from_array(mid.position).normalize().to_array();

    let index = vertices.len() as u32;
    vertices.push(mid);
    cache.insert(edge, index);
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn depth_zero_is_the_base_tetrahedron() {
        let mesh = sphere(0);
        assert_eq!(mesh, base_tetrahedron());
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 4);
    }

    #[test]
    fn every_vertex_lies_on_the_unit_sphere() {
        for depth in 0..=4 {
            let mesh = sphere(depth);
            for vertex in &mesh.vertices {
                let magnitude = Vec3::from_array(vertex.position).length();
                assert!(
                    (magnitude - 1.0).abs() < 1e-5,
                    "depth {depth}: |v| = {magnitude}"
                );
            }
        }
    }

    #[test]
    fn indices_are_whole_in_range_triangles() {
        for depth in 0..=4 {
            let mesh = sphere(depth);
            assert_eq!(mesh.indices.len() % 3, 0);
            assert!(mesh.validate().is_ok());
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(sphere(3), sphere(3));
    }

    #[test]
    fn counts_follow_the_closed_manifold_recurrence() {
        // From V=4, E=6, F=4: each pass gives V'=V+E, E'=2E+3F, F'=4F.
        // The vertex count only matches when every shared edge yields a
        // single welded midpoint.
        let (mut v, mut e, mut f) = (4usize, 6usize, 4usize);
        for depth in 0..=5 {
            let mesh = sphere(depth);
            assert_eq!(mesh.vertex_count(), v, "vertices at depth {depth}");
            assert_eq!(mesh.triangle_count(), f, "triangles at depth {depth}");
            v += e;
            e = 2 * e + 3 * f;
            f *= 4;
        }
    }

    #[test]
    fn no_two_vertices_coincide() {
        // A welding failure duplicates midpoints at shared edges; every
        // vertex position must be unique down to the bit pattern.
        let mesh = sphere(4);
        let unique: BTreeSet<[u32; 3]> = mesh
            .vertices
            .iter()
            .map(|vertex| vertex.position.map(f32::to_bits))
            .collect();
        assert_eq!(unique.len(), mesh.vertex_count());
    }

    #[test]
    fn colors_stay_in_unit_range() {
        let mesh = sphere(3);
        for vertex in &mesh.vertices {
            for channel in vertex.color {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
