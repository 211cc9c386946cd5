pub mod entities;
pub mod globals;
pub mod scene;
pub mod systems;

use glam::Mat4;

pub use entities::Part;
pub use globals::ScenePose;
pub use scene::Scene;
pub use systems::render_system::RenderSystem;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub view: Mat4,
    pub projection: Mat4,
    pub parts: Vec<Part>,
    /// Model matrix for the axis gizmo, when enabled
    pub axes: Option<Mat4>,
}

/// Number of draw calls in a full bedroom frame.
pub const PARTS_PER_FRAME: usize = 26;

/// Lay out every part of the bedroom for the given pose, in draw order.
pub fn build_frame(pose: &ScenePose) -> Vec<Part> {
    let mut parts = Vec::with_capacity(PARTS_PER_FRAME);
    entities::spawn_bed(&mut parts, pose);
    entities::spawn_room(&mut parts, pose);
    entities::spawn_fan(&mut parts, pose);
    entities::spawn_table(&mut parts);
    entities::spawn_drawer(&mut parts);
    entities::spawn_chair(&mut parts);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::components::Shape;
    use glam::Vec3;

    #[test]
    fn fan_parts_share_the_floor_color() {
        let parts = build_frame(&ScenePose::default());
        let floor = parts.iter().find(|p| p.name == "floor").unwrap();
        let fan: Vec<_> = parts.iter().filter(|p| p.name.starts_with("fan")).collect();
        assert_eq!(fan.len(), 4);
        for part in fan {
            assert_eq!(part.color, floor.color, "{}", part.name);
        }
    }

    #[test]
    fn full_frame_has_every_part() {
        let parts = build_frame(&ScenePose::default());
        assert_eq!(parts.len(), PARTS_PER_FRAME);

        let count = |name: &str| parts.iter().filter(|p| p.name == name).count();
        assert_eq!(count("fan blade"), 2);
        assert_eq!(count("table leg"), 4);
        assert_eq!(count("chair leg"), 4);
        assert_eq!(count("drawer shelf"), 3);
        assert_eq!(count("floor"), 1);
    }

    #[test]
    fn only_bed_pieces_use_the_bed_mesh() {
        for part in build_frame(&ScenePose::default()) {
            let is_bed_piece = matches!(part.name, "bed frame" | "headboard" | "footboard");
            assert_eq!(part.shape == Shape::Bed, is_bed_piece, "{}", part.name);
        }
    }

    #[test]
    fn z_offset_moves_the_anchored_parts_only() {
        let anchored = [
            "bed frame", "headboard", "footboard", "left wall", "back wall", "floor",
            "fan blade", "fan hub", "fan rod",
        ];

        let still = build_frame(&ScenePose::default());
        let mut pose = ScenePose::default();
        pose.translation.z = -1.5;
        let moved = build_frame(&pose);

        for (a, b) in still.iter().zip(&moved) {
            let shift = b.center() - a.center();
            let expected = if anchored.contains(&a.name) { Vec3::new(0.0, 0.0, -1.5) } else { Vec3::ZERO };
            assert!(shift.abs_diff_eq(expected, 1e-5), "{}: {:?}", a.name, shift);
        }
    }

    #[test]
    fn object_rotation_tilts_fan_and_rod() {
        let mut pose = ScenePose::default();
        pose.rotation.x = 90.0;
        let parts = build_frame(&pose);

        let rod = parts.iter().find(|p| p.name == "fan rod").unwrap();
        // rod's long axis now lies along Z
        let axis = rod.model.transform_vector3(Vec3::Y);
        assert!(axis.abs_diff_eq(Vec3::Z, 1e-5), "{:?}", axis);

        let table = parts.iter().find(|p| p.name == "table top").unwrap();
        assert!(table.center().abs_diff_eq(Vec3::new(-1.3, 0.0, 0.0), 1e-6));
    }
}
