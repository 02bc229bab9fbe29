use glam::{Quat, Vec3};
use polyview_common::{Shape, Transform};

/// One drawable mesh in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshInstance {
    pub shape: Shape,
    pub transform: Transform,
    /// Spin around +Y in degrees per second. Zero means static.
    pub spin: f32,
}

impl MeshInstance {
    pub fn new(shape: Shape, transform: Transform) -> Self {
        Self {
            shape,
            transform,
            spin: 0.0,
        }
    }

    pub fn with_spin(mut self, degrees_per_second: f32) -> Self {
        self.spin = degrees_per_second;
        self
    }
}

/// The scene renderers read: an ordered list of mesh instances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    instances: Vec<MeshInstance>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[MeshInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Advance the spin animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        for instance in &mut self.instances {
            if instance.spin != 0.0 {
                let angle = (instance.spin * dt).to_radians();
                instance.transform.rotation =
                    instance.transform.rotation * Quat::from_rotation_y(angle);
            }
        }
    }

    /// The built-in demo content: the four template shapes in a row above the
    /// grid, slowly spinning.
    pub fn demo() -> Self {
        let mut scene = Scene::new();
        let spin = 30.0;
        let shapes = [Shape::Square, Shape::Cube, Shape::Tetrahedron, Shape::Sphere];
        for (i, shape) in shapes.into_iter().enumerate() {
            let x = -3.0 + i as f32 * 2.0;
            let scale = if shape == Shape::Sphere { 1.0 } else { 0.75 };
            scene.add(
                MeshInstance::new(
                    shape,
                    Transform {
                        position: Vec3::new(x, 1.0, 0.0),
                        scale: Vec3::splat(scale),
                        ..Transform::default()
                    },
                )
                .with_spin(spin),
            );
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_has_one_instance_per_shape() {
        let scene = Scene::demo();
        assert_eq!(scene.len(), Shape::ALL.len());
        for (instance, shape) in scene.instances().iter().zip(Shape::ALL) {
            assert_eq!(instance.shape, shape);
        }
    }

    #[test]
    fn advance_rotates_spinning_instances() {
        let mut scene = Scene::new();
        scene.add(
            MeshInstance::new(Shape::Cube, Transform::default()).with_spin(90.0),
        );
        let before = scene.instances()[0].transform;
        scene.advance(0.5);
        let after = scene.instances()[0].transform;
        assert_ne!(after.rotation, before.rotation);
        assert_eq!(after.position, before.position);
        assert_eq!(after.scale, before.scale);
    }

    #[test]
    fn advance_leaves_static_instances_alone() {
        let mut scene = Scene::new();
        scene.add(MeshInstance::new(Shape::Square, Transform::default()));
        let before = scene.clone();
        scene.advance(1.0);
        assert_eq!(scene, before);
    }

    #[test]
    fn advance_is_deterministic() {
        let mut a = Scene::demo();
        let mut b = Scene::demo();
        for _ in 0..10 {
            a.advance(0.016);
            b.advance(0.016);
        }
        assert_eq!(a, b);
    }
}
