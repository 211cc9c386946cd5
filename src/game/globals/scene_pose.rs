use glam::Vec3;

use crate::engine::components::Transform;

/// Mutable pose of the whole scene, advanced once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePose {
    /// Object rotation in degrees, applied as `Rx * Ry * Rz`
    pub rotation: Vec3,
    /// Spin of the ceiling fan blades about Y, in degrees
    pub fan_angle_y: f32,
    pub translation: Vec3,
    pub scale: Vec3,
    pub fan_turn: bool,
    pub rotate_around: bool,
}

impl ScenePose {
    pub fn new() -> Self {
        Self {
            rotation: Vec3::ZERO,
            fan_angle_y: 0.0,
            translation: Vec3::ZERO,
            scale: Vec3::ONE,
            fan_turn: true,
            rotate_around: false,
        }
    }

    /// Step time-dependent state by `delta_time` seconds.
    pub fn advance(&mut self, delta_time: f32, fan_speed: f32) {
        if self.fan_turn {
            self.fan_angle_y = (self.fan_angle_y + fan_speed * delta_time).rem_euclid(360.0);
        }
    }

    pub fn toggle_fan(&mut self) -> bool {
        self.fan_turn = !self.fan_turn;
        self.fan_turn
    }

    pub fn toggle_rotate_around(&mut self) -> bool {
        self.rotate_around = !self.rotate_around;
        self.rotate_around
    }

    pub fn translate_z(&self) -> f32 {
        self.translation.z
    }

    /// Full pose as a transform: `T(translation) * Rx * Ry * Rz * S(scale)`.
    pub fn transform(&self) -> Transform {
        Transform {
            position: self.translation,
            rotation: self.rotation,
            scale: self.scale,
        }
    }
}

impl Default for ScenePose {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    #[test]
    fn fan_spins_while_turned_on() {
        let mut pose = ScenePose::new();
        pose.advance(0.5, 6.0);
        assert!((pose.fan_angle_y - 3.0).abs() < 1e-6);

        assert!(!pose.toggle_fan());
        pose.advance(10.0, 6.0);
        assert!((pose.fan_angle_y - 3.0).abs() < 1e-6);
    }

    #[test]
    fn fan_angle_wraps() {
        let mut pose = ScenePose::new();
        pose.fan_angle_y = 359.0;
        pose.advance(1.0, 6.0);
        assert!((pose.fan_angle_y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn toggles_flip_state() {
        let mut pose = ScenePose::default();
        assert!(pose.toggle_rotate_around());
        assert!(!pose.toggle_rotate_around());
        assert!(pose.fan_turn);
    }

    #[test]
    fn default_transform_is_identity() {
        assert_eq!(ScenePose::default().transform().matrix(), Mat4::IDENTITY);
    }
}
