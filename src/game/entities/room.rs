use glam::{ Mat4, Vec3 };

use super::Part;
use crate::engine::utils::math::{ mat4_scale, mat4_translate };
use crate::game::globals::ScenePose;

const SIDE_WALL_COLOR: Vec3 = Vec3::new(0.8, 0.5, 0.2);
const BACK_WALL_COLOR: Vec3 = Vec3::new(0.8, 0.6, 0.2);
pub const FLOOR_COLOR: Vec3 = Vec3::new(0.9, 0.7, 0.5);

/// Anchor shared by the bed, the walls and the floor. Follows the scene's Z offset.
pub fn room_base(pose: &ScenePose) -> Mat4 {
    mat4_translate(0.0, -0.5, pose.translate_z())
}

pub fn spawn_room(frame: &mut Vec<Part>, pose: &ScenePose) {
    let base = room_base(pose);
    let side_wall = mat4_translate(-10.0, 3.43, -4.0);
    let side_wall_scale = mat4_scale(0.5, 13.8, 20.0);

    frame.push(Part::cube("left wall", side_wall * base * side_wall_scale, SIDE_WALL_COLOR));
    // the right wall is pinned and ignores the Z offset
    frame.push(
        Part::cube(
            "right wall",
            side_wall * mat4_translate(14.7, -0.5, -0.2) * side_wall_scale,
            SIDE_WALL_COLOR
        )
    );
    frame.push(
        Part::cube(
            "back wall",
            mat4_translate(-3.5, 3.33, -10.0) * base * mat4_scale(33.7, 13.8, 0.5),
            BACK_WALL_COLOR
        )
    );
    frame.push(
        Part::cube(
            "floor",
            mat4_translate(-3.0, 0.0, -4.0) * base * mat4_scale(30.0, 0.1, 20.0),
            FLOOR_COLOR
        )
    );
}
