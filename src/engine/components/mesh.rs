use glow::HasContext;

use super::shapes::{ ColoredVertex, COLOR_OFFSET, VERTEX_STRIDE };

// GPU-side geometry: one VAO with its vertex buffer and optional index buffer
#[derive(Clone, Debug)]
pub struct Mesh {
    pub vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    pub index_count: usize,
    pub vertex_count: usize,
}

impl Mesh {
    /// Upload interleaved position/color vertices and triangle indices.
    pub fn upload_indexed(
        gl: &glow::Context,
        vertices: &[ColoredVertex],
        indices: &[u32]
    ) -> Result<Self, String> {
        unsafe {
            let vao = gl.create_vertex_array()?;
            gl.bind_vertex_array(Some(vao));

            let vbo = gl.create_buffer()?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW
            );

            let ebo = gl.create_buffer()?;
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW
            );

            // position
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, VERTEX_STRIDE, 0);
            gl.enable_vertex_attrib_array(0);
            // color
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, VERTEX_STRIDE, COLOR_OFFSET);
            gl.enable_vertex_attrib_array(1);

            gl.bind_vertex_array(None);

            Ok(Self {
                vao,
                vbo,
                ebo: Some(ebo),
                index_count: indices.len(),
                vertex_count: vertices.len(),
            })
        }
    }

    /// Upload position-only vertices meant for `GL_LINES`.
    pub fn upload_lines(gl: &glow::Context, positions: &[[f32; 3]]) -> Result<Self, String> {
        unsafe {
            let vao = gl.create_vertex_array()?;
            gl.bind_vertex_array(Some(vao));

            let vbo = gl.create_buffer()?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(positions),
                glow::STATIC_DRAW
            );

            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, 12, 0);
            gl.enable_vertex_attrib_array(0);

            gl.bind_vertex_array(None);

            Ok(Self {
                vao,
                vbo,
                ebo: None,
                index_count: 0,
                vertex_count: positions.len(),
            })
        }
    }

    pub fn draw_triangles(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_elements(glow::TRIANGLES, self.index_count as i32, glow::UNSIGNED_INT, 0);
        }
    }

    /// Draw the `index`-th segment of a line mesh. Segments past the end are skipped.
    pub fn draw_line(&self, gl: &glow::Context, index: usize) {
        let Some((first, count)) = line_segment(self.vertex_count, index) else {
            return;
        };
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::LINES, first, count);
        }
    }

    pub fn delete(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                gl.delete_buffer(ebo);
            }
        }
    }
}

/// `(first, count)` for segment `index` of a `GL_LINES` buffer holding `vertex_count` vertices.
fn line_segment(vertex_count: usize, index: usize) -> Option<(i32, i32)> {
    let first = index.checked_mul(2)?;
    if first + 2 > vertex_count {
        return None;
    }
    Some((first as i32, 2))
}
