pub mod scene_pose;

pub use scene_pose::ScenePose;
