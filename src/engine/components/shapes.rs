use bytemuck::{ Pod, Zeroable };

/// Interleaved vertex as uploaded to the GPU: position at location 0, color at location 1.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

pub const VERTEX_STRIDE: i32 = std::mem::size_of::<ColoredVertex>() as i32;
pub const COLOR_OFFSET: i32 = std::mem::size_of::<[f32; 3]>() as i32;

const fn vertex(x: f32, y: f32, z: f32, r: f32, g: f32, b: f32) -> ColoredVertex {
    ColoredVertex { position: [x, y, z], color: [r, g, b] }
}

/// Box of half-extent 0.25 centered on the origin.
pub const CUBE_VERTICES: [ColoredVertex; 8] = [
    vertex(-0.25, -0.25, -0.25, 0.0, 0.0, 0.0),
    vertex(0.25, -0.25, -0.25, 0.0, 0.0, 0.0),
    vertex(0.25, 0.25, -0.25, 0.0, 0.0, 0.0),
    vertex(-0.25, 0.25, -0.25, 0.0, 0.0, 0.0),
    vertex(-0.25, -0.25, 0.25, 0.3, 0.8, 0.5),
    vertex(0.25, -0.25, 0.25, 0.5, 0.4, 0.3),
    vertex(0.25, 0.25, 0.25, 0.2, 0.7, 0.3),
    vertex(-0.25, 0.25, 0.25, 0.6, 0.2, 0.8),
];

pub const CUBE_INDICES: [u32; 36] = [
    0, 3, 2,  2, 1, 0, // back
    1, 2, 6,  6, 5, 1, // right
    5, 6, 7,  7, 4, 5, // front
    4, 7, 3,  3, 0, 4, // left
    6, 2, 3,  3, 7, 6, // top
    1, 5, 4,  4, 0, 1, // bottom
];

/// Box of half-extent 0.5; bottom face first, then top face.
pub const BED_VERTICES: [ColoredVertex; 8] = [
    vertex(-0.5, -0.5, 0.5, 0.0, 0.0, 0.0),
    vertex(0.5, -0.5, 0.5, 0.0, 0.0, 0.0),
    vertex(0.5, -0.5, -0.5, 0.0, 0.0, 0.0),
    vertex(-0.5, -0.5, -0.5, 0.0, 0.0, 0.0),
    vertex(-0.5, 0.5, 0.5, 0.3, 0.8, 0.5),
    vertex(0.5, 0.5, 0.5, 0.5, 0.4, 0.3),
    vertex(0.5, 0.5, -0.5, 0.2, 0.7, 0.3),
    vertex(-0.5, 0.5, -0.5, 0.6, 0.2, 0.8),
];

pub const BED_INDICES: [u32; 36] = [
    0, 1, 2,  0, 3, 2,
    0, 1, 5,  0, 4, 5,
    0, 3, 7,  0, 4, 7,
    2, 1, 5,  2, 6, 5,
    3, 2, 7,  7, 6, 2,
    4, 5, 6,  6, 7, 4,
];

/// Three 5-unit lines from the origin along +X, +Y and +Z.
pub const AXIS_VERTICES: [[f32; 3]; 6] = [
    [0.0, 0.0, 0.0], [5.0, 0.0, 0.0],
    [0.0, 0.0, 0.0], [0.0, 5.0, 0.0],
    [0.0, 0.0, 0.0], [0.0, 0.0, 5.0],
];

/// Static meshes the scene is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Cube,
    Bed,
}

impl Shape {
    pub fn vertices(&self) -> &'static [ColoredVertex] {
        match self {
            Shape::Cube => &CUBE_VERTICES,
            Shape::Bed => &BED_VERTICES,
        }
    }

    pub fn indices(&self) -> &'static [u32] {
        match self {
            Shape::Cube => &CUBE_INDICES,
            Shape::Bed => &BED_INDICES,
        }
    }

    pub fn half_extent(&self) -> f32 {
        match self {
            Shape::Cube => 0.25,
            Shape::Bed => 0.5,
        }
    }
}
