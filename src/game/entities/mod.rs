pub mod axes;
pub mod bed;
pub mod chair;
pub mod drawer;
pub mod fan;
pub mod room;
pub mod table;

use glam::{ Mat4, Vec3 };

use crate::engine::components::Shape;

pub use axes::{ axis_model, AXIS_COLORS };
pub use bed::spawn_bed;
pub use chair::spawn_chair;
pub use drawer::spawn_drawer;
pub use fan::spawn_fan;
pub use room::spawn_room;
pub use table::spawn_table;

/// One draw call: a static mesh, where it goes and what flat color it gets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Part {
    pub name: &'static str,
    pub shape: Shape,
    pub model: Mat4,
    pub color: Vec3,
}

impl Part {
    pub fn cube(name: &'static str, model: Mat4, color: Vec3) -> Self {
        Self { name, shape: Shape::Cube, model, color }
    }

    pub fn bed(name: &'static str, model: Mat4, color: Vec3) -> Self {
        Self { name, shape: Shape::Bed, model, color }
    }

    /// World-space position of the mesh center.
    pub fn center(&self) -> Vec3 {
        self.model.transform_point3(Vec3::ZERO)
    }
}
