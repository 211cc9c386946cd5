pub mod basic_camera;
pub mod camera;
pub mod mesh;
pub mod shapes;
pub mod transform;

pub use basic_camera::BasicCamera;
pub use camera::{ Camera, CameraMovement };
pub use mesh::Mesh;
pub use shapes::{ ColoredVertex, Shape };
pub use transform::Transform;
