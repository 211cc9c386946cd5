use glam::Vec3;

use super::Part;
use crate::engine::utils::math::{ mat4_scale, mat4_translate };

const TOP_COLOR: Vec3 = Vec3::new(0.4, 0.2, 0.0);
const LEG_COLOR: Vec3 = Vec3::new(0.6, 0.4, 0.2);

const LEG_POSITIONS: [(f32, f32); 4] = [(-1.5, -0.2), (-1.1, -0.2), (-1.1, 0.2), (-1.5, 0.2)];

pub fn spawn_table(frame: &mut Vec<Part>) {
    frame.push(
        Part::cube("table top", mat4_translate(-1.3, 0.0, 0.0) * mat4_scale(1.0, 0.2, 1.0), TOP_COLOR)
    );

    for (x, z) in LEG_POSITIONS {
        frame.push(
            Part::cube("table leg", mat4_translate(x, -0.25, z) * mat4_scale(0.2, 1.0, 0.2), LEG_COLOR)
        );
    }
}
