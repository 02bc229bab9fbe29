use crate::{MeshData, Vertex};

/// Unit square in the XY plane, one color per corner.
pub fn square() -> MeshData {
    #[rustfmt::skip]
    let vertices = vec![
        Vertex::new([-0.5, -0.5, 0.0], [1.0, 0.0, 0.0]),
        Vertex::new([ 0.5, -0.5, 0.0], [0.0, 1.0, 0.0]),
        Vertex::new([-0.5,  0.5, 0.0], [0.0, 0.0, 1.0]),
        Vertex::new([ 0.5,  0.5, 0.0], [1.0, 0.0, 0.0]),
    ];
    let indices = vec![2, 0, 1, 3, 2, 1];
    MeshData { vertices, indices }
}

/// Axis-aligned unit cube centered on the origin.
pub fn cube() -> MeshData {
    #[rustfmt::skip]
    let vertices = vec![
        Vertex::new([-0.5, -0.5, -0.5], [1.0, 0.0, 0.0]),
        Vertex::new([ 0.5, -0.5, -0.5], [0.0, 1.0, 0.0]),
        Vertex::new([ 0.5,  0.5, -0.5], [0.0, 0.0, 1.0]),
        Vertex::new([-0.5,  0.5, -0.5], [1.0, 1.0, 0.0]),
        Vertex::new([-0.5, -0.5,  0.5], [1.0, 0.0, 1.0]),
        Vertex::new([ 0.5, -0.5,  0.5], [0.0, 1.0, 1.0]),
        Vertex::new([ 0.5,  0.5,  0.5], [1.0, 1.0, 1.0]),
        Vertex::new([-0.5,  0.5,  0.5], [0.5, 0.5, 0.5]),
    ];
    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2, 2, 3, 0, // front
        1, 5, 6, 6, 2, 1, // right
        5, 4, 7, 7, 6, 5, // back
        4, 0, 3, 3, 7, 4, // left
        3, 2, 6, 6, 7, 3, // top
        4, 5, 1, 1, 0, 4, // bottom
    ];
    MeshData { vertices, indices }
}

/// Small tetrahedron with a colored apex.
pub fn tetrahedron() -> MeshData {
    #[rustfmt::skip]
    let vertices = vec![
        Vertex::new([0.0, 0.5, 0.5], [1.0, 0.0, 0.0]),
        Vertex::new([0.5, 0.5, 0.0], [0.0, 1.0, 0.0]),
        Vertex::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        Vertex::new([0.5, 0.0, 0.5], [1.0, 1.0, 0.0]),
    ];
    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2,
        0, 2, 3,
        0, 3, 1,
        1, 2, 3,
    ];
    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_is_two_triangles() {
        let mesh = square();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn cube_has_six_faces() {
        let mesh = cube();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn tetrahedron_has_four_faces() {
        let mesh = tetrahedron();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 4);
        assert!(mesh.validate().is_ok());
    }
}
