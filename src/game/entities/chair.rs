use glam::Vec3;

use super::Part;
use crate::engine::utils::math::{ mat4_scale, mat4_translate };

const SEAT_COLOR: Vec3 = Vec3::new(0.7, 0.0, 0.0);
const LEG_COLOR: Vec3 = Vec3::new(1.0, 0.4, 0.0);
const BACK_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);

const LEG_POSITIONS: [(f32, f32); 4] = [(-0.89, -0.2), (-0.89, 0.2), (-0.73, 0.2), (-0.73, -0.2)];

pub fn spawn_chair(frame: &mut Vec<Part>) {
    frame.push(
        Part::cube("chair seat", mat4_translate(-0.805, -0.15, 0.0) * mat4_scale(0.5, 0.2, 1.0), SEAT_COLOR)
    );

    for (x, z) in LEG_POSITIONS {
        frame.push(
            Part::cube("chair leg", mat4_translate(x, -0.35, z) * mat4_scale(0.15, 0.68, 0.2), LEG_COLOR)
        );
    }

    frame.push(
        Part::cube("chair back", mat4_translate(-0.72, 0.1, 0.0) * mat4_scale(0.15, 1.0, 1.0), BACK_COLOR)
    );
}
