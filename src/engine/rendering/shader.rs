use std::fmt;
use std::path::Path;

use glam::{ Mat4, Vec3, Vec4 };
use glow::HasContext;
use log::{ debug, error, warn };

const BUILTIN_VERTEX_SOURCE: &str = include_str!("../../../shaders/vertexShader.vs");
const BUILTIN_FRAGMENT_SOURCE: &str = include_str!("../../../shaders/fragmentShader.fs");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_kind(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    fn builtin_source(self) -> &'static str {
        match self {
            ShaderStage::Vertex => BUILTIN_VERTEX_SOURCE,
            ShaderStage::Fragment => BUILTIN_FRAGMENT_SOURCE,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("VERTEX"),
            ShaderStage::Fragment => f.write_str("FRAGMENT"),
        }
    }
}

/// The driver refused to allocate a shader or program object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderError {
    pub stage: Option<ShaderStage>,
    pub message: String,
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            Some(stage) => write!(f, "could not create {} shader: {}", stage, self.message),
            None => write!(f, "could not create shader program: {}", self.message),
        }
    }
}

impl std::error::Error for ShaderError {}

/// Linked vertex + fragment program with uniform setters addressed by name.
///
/// Compile and link failures are logged and do not abort: the program handle is
/// kept so the frame loop can carry on, it just renders nothing.
#[derive(Debug)]
pub struct Shader {
    program: glow::Program,
    linked: bool,
}

impl Shader {
    pub fn new(
        gl: &glow::Context,
        vertex_source: &str,
        fragment_source: &str
    ) -> Result<Self, ShaderError> {
        let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_source)?;
        let fragment = match compile_shader(gl, ShaderStage::Fragment, fragment_source) {
            Ok(shader) => shader,
            Err(e) => {
                unsafe {
                    gl.delete_shader(vertex);
                }
                return Err(e);
            }
        };

        unsafe {
            let program = match gl.create_program() {
                Ok(program) => program,
                Err(message) => {
                    gl.delete_shader(vertex);
                    gl.delete_shader(fragment);
                    return Err(ShaderError { stage: None, message });
                }
            };

            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            let linked = gl.get_program_link_status(program);
            if !linked {
                error!("ERROR::PROGRAM_LINKING_ERROR\n{}", gl.get_program_info_log(program));
            }

            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            Ok(Self { program, linked })
        }
    }

    /// Read both stages from disk. A stage that cannot be read falls back to the
    /// copy built into the binary.
    pub fn from_files(
        gl: &glow::Context,
        vertex_path: &Path,
        fragment_path: &Path
    ) -> Result<Self, ShaderError> {
        let vertex_source = read_source(ShaderStage::Vertex, vertex_path);
        let fragment_source = read_source(ShaderStage::Fragment, fragment_path);
        Self::new(gl, &vertex_source, &fragment_source)
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    pub fn use_program(&self, gl: &glow::Context) {
        unsafe {
            gl.use_program(Some(self.program));
        }
    }

    fn location(&self, gl: &glow::Context, name: &str) -> Option<glow::UniformLocation> {
        unsafe { gl.get_uniform_location(self.program, name) }
    }

    pub fn set_bool(&self, gl: &glow::Context, name: &str, value: bool) {
        self.set_int(gl, name, value as i32);
    }

    pub fn set_int(&self, gl: &glow::Context, name: &str, value: i32) {
        if let Some(loc) = self.location(gl, name) {
            unsafe {
                gl.uniform_1_i32(Some(&loc), value);
            }
        }
    }

    pub fn set_float(&self, gl: &glow::Context, name: &str, value: f32) {
        if let Some(loc) = self.location(gl, name) {
            unsafe {
                gl.uniform_1_f32(Some(&loc), value);
            }
        }
    }

    pub fn set_vec3(&self, gl: &glow::Context, name: &str, value: Vec3) {
        if let Some(loc) = self.location(gl, name) {
            unsafe {
                gl.uniform_3_f32(Some(&loc), value.x, value.y, value.z);
            }
        }
    }

    pub fn set_vec4(&self, gl: &glow::Context, name: &str, value: Vec4) {
        if let Some(loc) = self.location(gl, name) {
            unsafe {
                gl.uniform_4_f32(Some(&loc), value.x, value.y, value.z, value.w);
            }
        }
    }

    pub fn set_mat4(&self, gl: &glow::Context, name: &str, value: &Mat4) {
        if let Some(loc) = self.location(gl, name) {
            unsafe {
                // glam is column-major like GLSL, no transpose
                gl.uniform_matrix_4_f32_slice(Some(&loc), false, &value.to_cols_array());
            }
        }
    }

    pub fn delete(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.program);
        }
    }
}

fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str
) -> Result<glow::Shader, ShaderError> {
    unsafe {
        let shader = gl
            .create_shader(stage.gl_kind())
            .map_err(|message| ShaderError { stage: Some(stage), message })?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            error!("ERROR::SHADER_COMPILATION_ERROR of type: {}\n{}", stage, gl.get_shader_info_log(shader));
        } else {
            debug!("{} shader compiled", stage);
        }
        Ok(shader)
    }
}

fn read_source(stage: ShaderStage, path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            warn!(
                "ERROR::SHADER::FILE_NOT_SUCCESSFULLY_READ {} ({}), using built-in {} shader",
                path.display(),
                e,
                stage
            );
            stage.builtin_source().to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sources_declare_scene_uniforms() {
        for name in ["model", "view", "projection"] {
            assert!(BUILTIN_VERTEX_SOURCE.contains(&format!("uniform mat4 {};", name)));
        }
        assert!(BUILTIN_FRAGMENT_SOURCE.contains("uniform vec3 color;"));
        assert!(BUILTIN_VERTEX_SOURCE.starts_with("#version 330 core"));
        assert!(BUILTIN_FRAGMENT_SOURCE.starts_with("#version 330 core"));
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let source = read_source(ShaderStage::Fragment, Path::new("does/not/exist.fs"));
        assert_eq!(source, BUILTIN_FRAGMENT_SOURCE);
    }

    #[test]
    fn readable_file_is_used() {
        let path = std::env::temp_dir().join(format!("bedroom-scene-{}.vs", std::process::id()));
        std::fs::write(&path, "#version 330 core\nvoid main() {}\n").unwrap();
        let source = read_source(ShaderStage::Vertex, &path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(source, "#version 330 core\nvoid main() {}\n");
    }

    #[test]
    fn error_message_names_the_stage() {
        let err = ShaderError { stage: Some(ShaderStage::Vertex), message: "out of memory".into() };
        assert_eq!(err.to_string(), "could not create VERTEX shader: out of memory");
        let err = ShaderError { stage: None, message: "out of memory".into() };
        assert_eq!(err.to_string(), "could not create shader program: out of memory");
    }
}
