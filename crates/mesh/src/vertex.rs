use bytemuck::{Pod, Zeroable};
use polyview_common::Rgb;
use serde::{Deserialize, Serialize};

/// A mesh vertex: position and color, tightly packed for GPU upload.
///
/// Vertices have no identity beyond their index in a mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    /// Midpoint of two vertices: averaged position, linearly blended color.
    pub fn midpoint(a: &Vertex, b: &Vertex) -> Vertex {
        let position = [
            (a.position[0] + b.position[0]) * 0.5,
            (a.position[1] + b.position[1]) * 0.5,
            (a.position[2] + b.position[2]) * 0.5,
        ];
        let color = Rgb::from_array(a.color)
            .lerp(Rgb::from_array(b.color), 0.5)
            .to_array();
        Vertex { position, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_averages_position_and_color() {
        let a = Vertex::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = Vertex::new([2.0, 4.0, -2.0], [0.0, 1.0, 0.0]);
        let mid = Vertex::midpoint(&a, &b);
        assert_eq!(mid.position, [1.0, 2.0, -1.0]);
        assert_eq!(mid.color, [0.5, 0.5, 0.0]);
    }

    #[test]
    fn midpoint_is_symmetric() {
        let a = Vertex::new([1.0, 2.0, 3.0], [0.2, 0.4, 0.6]);
        let b = Vertex::new([-1.0, 0.5, 2.0], [0.8, 0.1, 0.3]);
        assert_eq!(Vertex::midpoint(&a, &b), Vertex::midpoint(&b, &a));
    }
}
