use glam::Vec3;

use super::Part;
use super::room::room_base;
use crate::engine::utils::math::{ mat4_scale, mat4_translate };
use crate::game::globals::ScenePose;

const MATTRESS_COLOR: Vec3 = Vec3::new(1.0, 0.984, 0.0);
const BOARD_COLOR: Vec3 = Vec3::new(0.118, 1.0, 0.0);

pub fn spawn_bed(frame: &mut Vec<Part>, pose: &ScenePose) {
    let base = room_base(pose);

    frame.push(
        Part::bed(
            "bed frame",
            base * mat4_translate(0.75, 0.1, 0.5) * mat4_scale(1.0, 0.2, 0.5),
            MATTRESS_COLOR
        )
    );

    let headboard = mat4_translate(1.25, 0.3, 0.5);
    frame.push(
        Part::bed("headboard", base * headboard * mat4_scale(0.08, 0.6, 0.5), BOARD_COLOR)
    );

    let footboard = headboard * mat4_translate(-1.0, -0.15, 0.0);
    frame.push(
        Part::bed("footboard", base * footboard * mat4_scale(0.08, 0.3, 0.5), BOARD_COLOR)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::components::Shape;

    #[test]
    fn boards_stand_at_both_ends_of_the_frame() {
        let mut frame = Vec::new();
        spawn_bed(&mut frame, &ScenePose::default());

        assert_eq!(frame.len(), 3);
        assert!(frame.iter().all(|p| p.shape == Shape::Bed));
        assert!(frame[0].center().abs_diff_eq(Vec3::new(0.75, -0.4, 0.5), 1e-5));
        assert!(frame[1].center().abs_diff_eq(Vec3::new(1.25, -0.2, 0.5), 1e-5));
        assert!(frame[2].center().abs_diff_eq(Vec3::new(0.25, -0.35, 0.5), 1e-5));

        // headboard is twice as tall as the footboard
        let height = |p: &Part| p.model.transform_vector3(Vec3::Y).length();
        assert!((height(&frame[1]) - 2.0 * height(&frame[2])).abs() < 1e-5);
    }
}
