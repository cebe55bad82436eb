use super::error::Result;
use super::glutils::*;
use super::math::*;
use super::shaders::Shaders;
use gl::*;

const VERTEX_SHADER_SRC: &str = r#"#version 330 core
layout (location = 0) in vec2 a_pos;

void main() {
    gl_Position = vec4(a_pos, 0.0, 1.0);
}
"#;

const FRAGMENT_SHADER_SRC: &str = r#"#version 330 core
uniform vec4 u_color;
out vec4 frag_color;

void main() {
    frag_color = u_color;
}
"#;

// two triangles: top-left, top-right, bottom-right / bottom-right, bottom-left, top-left
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Maps a point in window pixels (origin top-left, y down) to normalized
/// device coordinates (origin centre, y up).
pub fn pixel_to_ndc(point: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        point.x / viewport.x * 2.0 - 1.0,
        1.0 - point.y / viewport.y * 2.0,
    )
}

/// Corners of `rect` in NDC, in the order expected by `QUAD_INDICES`.
pub fn quad_vertices(rect: &Rect, viewport: Vec2) -> [f32; 8] {
    let tl = pixel_to_ndc(Vec2::new(rect.left, rect.top), viewport);
    let br = pixel_to_ndc(Vec2::new(rect.right(), rect.bottom()), viewport);
    [tl.x, tl.y, br.x, tl.y, br.x, br.y, tl.x, br.y]
}

/// Draws solid axis-aligned rectangles.
pub struct RectRenderer {
    shaders: Shaders,
    color_location: i32,
    vao: u32,
    vbo: u32,
    ebo: u32,
}

impl RectRenderer {
    pub fn new() -> Result<RectRenderer> {
        let shaders = Shaders::from_str(VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC)?;
        let color_location = shaders.uniform_location(c"u_color")?;

        let mut vao = 0;
        let mut vbo = 0;
        let mut ebo = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::GenBuffers(1, &mut ebo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(ARRAY_BUFFER, vbo);
        }
        gl_buffer_data_arr_dyn(&[0.0_f32; 8]);

        unsafe { gl::BindBuffer(ELEMENT_ARRAY_BUFFER, ebo) };
        gl_buffer_data_element_stat(&QUAD_INDICES);

        gl_vertex_attrib_ptr_enab(0, 2, 2, 0);
        unsafe { gl::BindVertexArray(0) };
        check_gl_err()?;

        Ok(RectRenderer {
            shaders,
            color_location,
            vao,
            vbo,
            ebo,
        })
    }

    pub fn draw(&self, rect: &Rect, color: Color, viewport: Vec2) -> Result<()> {
        let vertices = quad_vertices(rect, viewport);

        self.shaders.use_program();
        self.shaders.set_color(self.color_location, color);
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::BindBuffer(ARRAY_BUFFER, self.vbo);
        }
        gl_buffer_sub_data_arr(&vertices);
        unsafe {
            gl::DrawElements(
                TRIANGLES,
                QUAD_INDICES.len() as i32,
                UNSIGNED_INT,
                std::ptr::null(),
            );
            gl::BindVertexArray(0);
        }
        check_gl_err()
    }
}

impl Drop for RectRenderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteBuffers(1, &self.ebo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn window_corners_map_to_ndc_corners() {
        assert_eq!(pixel_to_ndc(Vec2::new(0.0, 0.0), VIEWPORT), Vec2::new(-1.0, 1.0));
        assert_eq!(pixel_to_ndc(Vec2::new(800.0, 600.0), VIEWPORT), Vec2::new(1.0, -1.0));
        assert_eq!(pixel_to_ndc(Vec2::new(400.0, 300.0), VIEWPORT), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn quad_covers_rect() {
        let rect = Rect::new(400.0, 300.0, 200.0, 150.0);
        let v = quad_vertices(&rect, VIEWPORT);
        assert_eq!(v, [0.0, 0.0, 0.5, 0.0, 0.5, -0.5, 0.0, -0.5]);
    }
}
