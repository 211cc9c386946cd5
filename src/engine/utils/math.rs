use glam::{ Mat4, Vec3 };

/// Near and far clip planes used by the scene projection.
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

pub fn mat4_translate(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

pub fn mat4_scale(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(x, y, z))
}

pub fn mat4_rot_x_deg(angle: f32) -> Mat4 {
    Mat4::from_rotation_x(angle.to_radians())
}

pub fn mat4_rot_y_deg(angle: f32) -> Mat4 {
    Mat4::from_rotation_y(angle.to_radians())
}

pub fn mat4_rot_z_deg(angle: f32) -> Mat4 {
    Mat4::from_rotation_z(angle.to_radians())
}

/// Euler rotation in degrees, applied as `Rx * Ry * Rz`.
pub fn mat4_rot_xyz_deg(angles: Vec3) -> Mat4 {
    mat4_rot_x_deg(angles.x) * mat4_rot_y_deg(angles.y) * mat4_rot_z_deg(angles.z)
}

/// OpenGL-style perspective projection (clip z in [-1, 1]) from a vertical FOV in degrees.
pub fn mat4_perspective(fov_deg: f32, aspect_ratio: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_deg.to_radians(), aspect_ratio, Z_NEAR, Z_FAR)
}

/// Aspect ratio of a framebuffer, falling back to 1.0 while minimized.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        return 1.0;
    }
    (width as f32) / (height as f32)
}
