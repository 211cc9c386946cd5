use glam::{ Mat4, Vec3 };

use crate::engine::utils::math::{ mat4_rot_xyz_deg, mat4_translate };

// Translate / rotate / scale triple for a scene part
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    // Euler angles in degrees
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    /// Create a Transform at the given position with unit scale and no rotation
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vec3::new(x, y, z);
        self
    }

    /// Model matrix. Order: `T * Rx * Ry * Rz * S`
    pub fn matrix(&self) -> Mat4 {
        let translation = mat4_translate(self.position.x, self.position.y, self.position.z);
        translation * mat4_rot_xyz_deg(self.rotation) * Mat4::from_scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
