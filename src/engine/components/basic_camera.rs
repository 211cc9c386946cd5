use glam::{ Mat4, Quat, Vec3 };

/// Look-at camera defined by an eye point, a target and an up vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicCamera {
    pub eye: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
}

impl BasicCamera {
    pub fn new(eye: Vec3, look_at: Vec3, up: Vec3) -> Self {
        Self { eye, look_at, up }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.look_at, self.up)
    }

    /// Swing the eye around the vertical axis through `look_at`.
    pub fn orbit(&mut self, degrees: f32) {
        let offset = self.eye - self.look_at;
        self.eye = self.look_at + Quat::from_rotation_y(degrees.to_radians()) * offset;
    }
}

impl Default for BasicCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.0, 3.0), Vec3::ZERO, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_lies_on_negative_z_in_view_space() {
        let camera = BasicCamera::default();
        let target = camera.view_matrix().transform_point3(camera.look_at);
        let distance = (camera.eye - camera.look_at).length();
        assert!(target.abs_diff_eq(Vec3::new(0.0, 0.0, -distance), 1e-5));
    }

    #[test]
    fn orbit_keeps_height_and_distance() {
        let mut camera = BasicCamera::default();
        let before = camera.eye;
        camera.orbit(90.0);

        assert!((camera.eye.y - before.y).abs() < 1e-5);
        let d_before = (before - camera.look_at).length();
        let d_after = (camera.eye - camera.look_at).length();
        assert!((d_before - d_after).abs() < 1e-5);
        assert!(camera.eye.abs_diff_eq(Vec3::new(3.0, 1.0, 0.0), 1e-5));
    }

    #[test]
    fn full_orbit_returns_to_start() {
        let mut camera = BasicCamera::default();
        for _ in 0..8 {
            camera.orbit(45.0);
        }
        assert!(camera.eye.abs_diff_eq(BasicCamera::default().eye, 1e-4));
    }
}
