use glam::Vec3;

use super::room::FLOOR_COLOR;
use super::Part;
use crate::engine::components::Transform;
use crate::engine::utils::math::{ mat4_rot_x_deg, mat4_rot_y_deg, mat4_rot_z_deg, mat4_scale, mat4_translate };
use crate::game::globals::ScenePose;

// drawn right after the floor and shares its color
const FAN_COLOR: Vec3 = FLOOR_COLOR;

/// Ceiling fan: two crossed blades and a hub spinning about Y, hung from a rod.
pub fn spawn_fan(frame: &mut Vec<Part>, pose: &ScenePose) {
    let tz = pose.translate_z();
    let spin = mat4_translate(0.0, 0.8, tz)
        * mat4_rot_x_deg(pose.rotation.x)
        * mat4_rot_y_deg(pose.fan_angle_y)
        * mat4_rot_z_deg(pose.rotation.z);

    frame.push(Part::cube("fan blade", spin * mat4_scale(2.0, 0.01, 0.1), FAN_COLOR));
    frame.push(Part::cube("fan blade", spin * mat4_scale(0.1, 0.01, 3.0), FAN_COLOR));
    frame.push(Part::cube("fan hub", spin * mat4_scale(0.3, 0.2, 0.3), FAN_COLOR));

    let rod = Transform::new(0.0, 1.0, tz)
        .with_rotation(pose.rotation)
        .with_scale(0.09, 1.0, 0.1);
    frame.push(Part::cube("fan rod", rod.matrix(), FAN_COLOR));
}
