use glam::{ Mat4, Vec3 };

use crate::game::globals::ScenePose;

/// Line colors for the X, Y and Z axis gizmo.
pub const AXIS_COLORS: [Vec3; 3] = [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO];

pub fn axis_model(pose: &ScenePose) -> Mat4 {
    pose.transform().matrix()
}
