use std::fmt;

use glow::HasContext;
use log::{ info, warn };

use crate::config::AppConfig;
use crate::engine::components::shapes::AXIS_VERTICES;
use crate::engine::components::{ Mesh, Shape };
use crate::engine::rendering::{ Shader, ShaderError };
use crate::game::entities::AXIS_COLORS;
use crate::game::Frame;

#[derive(Debug)]
pub enum RenderError {
    Shader(ShaderError),
    /// Vertex array or buffer allocation failed
    Buffer(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Shader(e) => write!(f, "shader setup failed: {}", e),
            RenderError::Buffer(message) => write!(f, "buffer upload failed: {}", message),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Shader(e) => Some(e),
            RenderError::Buffer(_) => None,
        }
    }
}

impl From<ShaderError> for RenderError {
    fn from(e: ShaderError) -> Self {
        RenderError::Shader(e)
    }
}

/// Owns the GL context, the scene shader and the static meshes; draws one
/// `Frame` per call.
pub struct RenderSystem {
    gl: glow::Context,
    shader: Shader,
    cube: Mesh,
    bed: Mesh,
    axes: Mesh,
    clear_color: [f32; 4],
}

impl RenderSystem {
    pub fn new(gl: glow::Context, config: &AppConfig) -> Result<Self, RenderError> {
        let shader = Shader::from_files(&gl, &config.shaders.vertex, &config.shaders.fragment)?;
        if !shader.is_linked() {
            warn!("Scene shader failed to link, nothing will be drawn");
        }

        let cube = Mesh::upload_indexed(&gl, Shape::Cube.vertices(), Shape::Cube.indices()).map_err(
            RenderError::Buffer
        )?;
        let bed = Mesh::upload_indexed(&gl, Shape::Bed.vertices(), Shape::Bed.indices()).map_err(
            RenderError::Buffer
        )?;
        let axes = Mesh::upload_lines(&gl, &AXIS_VERTICES).map_err(RenderError::Buffer)?;

        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LESS);
            info!("OpenGL {}", gl.get_parameter_string(glow::VERSION));
        }

        Ok(Self {
            gl,
            shader,
            cube,
            bed,
            axes,
            clear_color: config.scene.clear_color,
        })
    }

    fn mesh(&self, shape: Shape) -> &Mesh {
        match shape {
            Shape::Cube => &self.cube,
            Shape::Bed => &self.bed,
        }
    }

    pub fn render(&self, width: u32, height: u32, frame: &Frame) {
        let gl = &self.gl;
        let [r, g, b, a] = self.clear_color;

        unsafe {
            gl.viewport(0, 0, width as i32, height as i32);
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        self.shader.use_program(gl);
        self.shader.set_mat4(gl, "projection", &frame.projection);
        self.shader.set_mat4(gl, "view", &frame.view);

        for part in &frame.parts {
            self.shader.set_mat4(gl, "model", &part.model);
            self.shader.set_vec3(gl, "color", part.color);
            self.mesh(part.shape).draw_triangles(gl);
        }

        if let Some(model) = frame.axes {
            self.shader.set_mat4(gl, "model", &model);
            for (axis, color) in AXIS_COLORS.iter().enumerate() {
                self.shader.set_vec3(gl, "color", *color);
                self.axes.draw_line(gl, axis);
            }
        }

        unsafe {
            gl.bind_vertex_array(None);
        }
    }

    pub fn cleanup(&self) {
        self.cube.delete(&self.gl);
        self.bed.delete(&self.gl);
        self.axes.delete(&self.gl);
        self.shader.delete(&self.gl);
    }
}
