use glam::Vec3;

use super::Part;
use crate::engine::utils::math::{ mat4_scale, mat4_translate };

const BODY_COLOR: Vec3 = Vec3::new(0.7, 0.0, 0.0);
const SHELF_COLOR: Vec3 = Vec3::ONE;

const SHELF_HEIGHTS: [f32; 3] = [0.6, 0.0, 1.3];

pub fn spawn_drawer(frame: &mut Vec<Part>) {
    frame.push(
        Part::cube("drawer", mat4_translate(0.8, 0.6, -5.0) * mat4_scale(2.0, 4.2, 2.0), BODY_COLOR)
    );

    for y in SHELF_HEIGHTS {
        frame.push(
            Part::cube(
                "drawer shelf",
                mat4_translate(0.8, y, -5.0) * mat4_scale(1.0, 0.2, 2.5),
                SHELF_COLOR
            )
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shelves_sit_inside_the_body_and_stick_out_the_front() {
        let mut frame = Vec::new();
        spawn_drawer(&mut frame);
        assert_eq!(frame.len(), 4);

        let body = &frame[0];
        let body_bottom = body.model.transform_point3(Vec3::new(0.0, -0.25, 0.0)).y;
        let body_top = body.model.transform_point3(Vec3::new(0.0, 0.25, 0.0)).y;
        let body_front = body.model.transform_point3(Vec3::new(0.0, 0.0, 0.25)).z;

        for shelf in &frame[1..] {
            let y = shelf.center().y;
            assert!(y > body_bottom && y < body_top);
            let shelf_front = shelf.model.transform_point3(Vec3::new(0.0, 0.0, 0.25)).z;
            assert!(shelf_front > body_front);
            assert_eq!(shelf.color, SHELF_COLOR);
        }
    }
}
