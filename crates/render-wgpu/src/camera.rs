use glam::{Mat4, Vec3};

/// Fly camera with position, yaw, pitch, and projection parameters.
///
/// The camera lives outside the scene: moving it never touches frame state.
/// View and projection are recomputed from the current parameters each time
/// they are asked for.
pub struct FlyCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub speed: f32,
    pub sensitivity: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.5, 4.0),
            yaw: -90.0_f32.to_radians(),
            pitch: -10.0_f32.to_radians(),
            fov: 45.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
            speed: 4.0,
            sensitivity: 0.003,
        }
    }
}

impl FlyCamera {
    /// View direction derived from yaw and pitch.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn move_forward(&mut self, dt: f32) {
        let fwd = self.forward();
        self.position += fwd * self.speed * dt;
    }

    pub fn move_backward(&mut self, dt: f32) {
        let fwd = self.forward();
        self.position -= fwd * self.speed * dt;
    }

    pub fn strafe_left(&mut self, dt: f32) {
        let right = self.right();
        self.position -= right * self.speed * dt;
    }

    pub fn strafe_right(&mut self, dt: f32) {
        let right = self.right();
        self.position += right * self.speed * dt;
    }

    pub fn ascend(&mut self, dt: f32) {
        self.position.y += self.speed * dt;
    }

    pub fn descend(&mut self, dt: f32) {
        self.position.y -= self.speed * dt;
    }

    /// Apply mouse deltas. Pitch is clamped short of the poles so the
    /// look-at basis never degenerates.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self
            .pitch
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_produces_a_valid_matrix() {
        let cam = FlyCamera::default();
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
        assert!((cam.forward().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn movement_changes_position() {
        let mut cam = FlyCamera::default();
        let start = cam.position;
        cam.move_forward(1.0);
        assert_ne!(cam.position, start);
        cam.move_backward(1.0);
        assert!((cam.position - start).length() < 1e-5);
    }

    #[test]
    fn strafe_is_perpendicular_to_forward() {
        let mut cam = FlyCamera::default();
        let start = cam.position;
        cam.strafe_right(1.0);
        let moved = cam.position - start;
        assert!(moved.dot(cam.forward()).abs() < 1e-4);
    }

    #[test]
    fn pitch_clamps_short_of_the_poles() {
        let mut cam = FlyCamera::default();
        cam.rotate(0.0, -100_000.0);
        assert!(cam.pitch <= 89.0_f32.to_radians());
        cam.rotate(0.0, 100_000.0);
        assert!(cam.pitch >= -89.0_f32.to_radians());
        // The view matrix stays finite at the clamp.
        assert!(!cam.view_matrix().col(0).x.is_nan());
    }

    #[test]
    fn aspect_tracks_the_window() {
        let mut cam = FlyCamera::default();
        cam.set_aspect(1920, 1080);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        cam.set_aspect(100, 0);
        assert_eq!(cam.aspect, 100.0);
    }
}
