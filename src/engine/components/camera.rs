use glam::{ Mat4, Quat, Vec3 };

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
/// Degrees per second for keyboard pitch / yaw / roll.
pub const ROTATION_SPEED: f32 = 45.0;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;

pub const PITCH_LIMIT: f32 = 89.0;
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 45.0;

/// Discrete keyboard-driven camera motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
}

/// Free-fly camera driven by Euler angles (degrees).
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    roll: f32,
    pub movement_speed: f32,
    pub rotation_speed: f32,
    pub mouse_sensitivity: f32,
    zoom: f32,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, YAW, PITCH)
    }

    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            roll: 0.0,
            movement_speed: SPEED,
            rotation_speed: ROTATION_SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_camera_vectors();
        camera
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        self
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn process_keyboard(&mut self, movement: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let turn = self.rotation_speed * delta_time;

        match movement {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.up * velocity,
            CameraMovement::Down => self.position -= self.up * velocity,
            CameraMovement::PitchUp => self.pitch += turn,
            CameraMovement::PitchDown => self.pitch -= turn,
            CameraMovement::YawLeft => self.yaw -= turn,
            CameraMovement::YawRight => self.yaw += turn,
            CameraMovement::RollLeft => self.roll -= turn,
            CameraMovement::RollRight => self.roll += turn,
        }

        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_camera_vectors();
    }

    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_camera_vectors();
    }

    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    fn update_camera_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos()
        ).normalize();

        let right = self.front.cross(self.world_up).normalize();
        let up = right.cross(self.front).normalize();

        // roll spins the right/up pair about the viewing axis
        let roll = Quat::from_axis_angle(self.front, self.roll.to_radians());
        self.right = (roll * right).normalize();
        self.up = (roll * up).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(camera: &Camera) {
        for v in [camera.front(), camera.right(), camera.up()] {
            assert!((v.length() - 1.0).abs() < EPS, "not unit: {:?}", v);
        }
        assert!(camera.front().dot(camera.right()).abs() < EPS);
        assert!(camera.front().dot(camera.up()).abs() < EPS);
        assert!(camera.right().dot(camera.up()).abs() < EPS);
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(camera.right().abs_diff_eq(Vec3::X, EPS));
        assert!(camera.up().abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(camera.zoom(), ZOOM);
    }

    #[test]
    fn forward_moves_along_front() {
        let mut camera = Camera::default();
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), EPS));

        camera.process_keyboard(CameraMovement::Right, 0.4);
        assert!(camera.position.abs_diff_eq(Vec3::new(1.0, 0.0, 0.5), EPS));

        camera.process_keyboard(CameraMovement::Down, 0.4);
        assert!(camera.position.abs_diff_eq(Vec3::new(1.0, -1.0, 0.5), EPS));
    }

    #[test]
    fn yaw_left_turns_towards_negative_x() {
        let mut camera = Camera::default();
        camera.process_keyboard(CameraMovement::YawLeft, 0.5);
        assert!(camera.front().x < 0.0);
        assert!((camera.yaw() - (YAW - ROTATION_SPEED * 0.5)).abs() < EPS);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(camera.pitch(), PITCH_LIMIT);

        camera.process_keyboard(CameraMovement::PitchDown, 100.0);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
        assert_orthonormal(&camera);
    }

    #[test]
    fn unconstrained_pitch_is_kept() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 1000.0, false);
        assert!((camera.pitch() - 100.0).abs() < EPS);
    }

    #[test]
    fn mouse_offsets_are_scaled_by_sensitivity() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(100.0, -50.0, true);
        assert!((camera.yaw() - (YAW + 10.0)).abs() < EPS);
        assert!((camera.pitch() + 5.0).abs() < EPS);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(10.0);
        assert_eq!(camera.zoom(), 35.0);
        camera.process_mouse_scroll(100.0);
        assert_eq!(camera.zoom(), ZOOM_MIN);
        camera.process_mouse_scroll(-100.0);
        assert_eq!(camera.zoom(), ZOOM_MAX);
    }

    #[test]
    fn roll_right_tilts_up_vector_to_the_right() {
        let mut camera = Camera::default();
        camera.process_keyboard(CameraMovement::RollRight, 90.0 / ROTATION_SPEED);
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(camera.up().abs_diff_eq(Vec3::X, EPS));
        assert_orthonormal(&camera);
    }

    #[test]
    fn basis_stays_orthonormal() {
        let mut camera = Camera::default();
        let moves = [
            CameraMovement::YawRight,
            CameraMovement::PitchUp,
            CameraMovement::RollLeft,
            CameraMovement::Forward,
            CameraMovement::Up,
        ];
        for (i, movement) in moves.iter().cycle().take(40).enumerate() {
            camera.process_keyboard(*movement, 0.05 * (i as f32 + 1.0));
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn view_matrix_puts_camera_at_origin_looking_down_negative_z() {
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        camera.process_mouse_movement(123.0, 45.0, true);

        let view = camera.view_matrix();
        assert!(view.transform_point3(camera.position).abs_diff_eq(Vec3::ZERO, 1e-4));

        let ahead = view.transform_point3(camera.position + camera.front() * 2.0);
        assert!(ahead.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), 1e-4));
    }
}
