//! Hardcoded bedroom scene rendered with OpenGL.
//!
//! - `engine`: shader program wrapper, static meshes, cameras and input tracking
//! - `game`: the bedroom furniture, per-frame scene pose and the render system
//! - `config`: JSON settings with defaults for every field

pub mod config;
pub mod engine;
pub mod game;

pub use config::AppConfig;
pub use game::{ Frame, RenderSystem, Scene };
