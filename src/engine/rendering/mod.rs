pub mod shader;

pub use shader::{ Shader, ShaderError, ShaderStage };
