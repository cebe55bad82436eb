use super::error::{Error, Result};
use super::glutils::*;
use super::math::*;
use gl::{types::*, *};
use std::ffi::CStr;

pub struct Shaders {
    program_id: u32,
}

impl Shaders {
    pub fn from_str(vertex_code: &str, fragment_code: &str) -> Result<Shaders> {
        let vertex_shader = Self::create(VERTEX_SHADER, "vertex", vertex_code)?;
        let fragment_shader = match Self::create(FRAGMENT_SHADER, "fragment", fragment_code) {
            Ok(s) => s,
            Err(e) => {
                unsafe { gl::DeleteShader(vertex_shader) };
                return Err(e);
            }
        };

        // create program and link shaders
        let shader_program = unsafe { gl::CreateProgram() };
        unsafe { gl::AttachShader(shader_program, vertex_shader) };
        unsafe { gl::AttachShader(shader_program, fragment_shader) };
        unsafe { gl::LinkProgram(shader_program) };

        // not needed anymore
        unsafe { gl::DeleteShader(vertex_shader) };
        unsafe { gl::DeleteShader(fragment_shader) };

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(shader_program, LINK_STATUS, &mut success);
        }
        if success == 0 {
            let mut v: Vec<u8> = Vec::with_capacity(1024);
            let mut log_len = 0_i32;
            unsafe {
                gl::GetProgramInfoLog(shader_program, 1024, &mut log_len, v.as_mut_ptr().cast());
                v.set_len(log_len.max(0) as usize);
                gl::DeleteProgram(shader_program);
            }
            return Err(Error::ProgramLink(String::from_utf8_lossy(&v).to_string()));
        }

        log::debug!("shader program {} linked", shader_program);
        Ok(Shaders {
            program_id: shader_program,
        })
    }

    fn create(kind: GLenum, stage: &'static str, shader_code: &str) -> Result<u32> {
        let shader_id = unsafe { gl::CreateShader(kind) };
        if shader_id == 0 {
            return Err(Error::ShaderCompile {
                stage,
                log: "gl::CreateShader failed".to_string(),
            });
        }

        if let Err(log) = Self::compile(shader_id, shader_code) {
            unsafe { gl::DeleteShader(shader_id) };
            return Err(Error::ShaderCompile { stage, log });
        }
        Ok(shader_id)
    }

    fn compile(shader_id: u32, shader_code: &str) -> std::result::Result<(), String> {
        unsafe {
            gl::ShaderSource(
                shader_id,
                1,
                &(shader_code.as_bytes().as_ptr().cast()),
                &(shader_code.len() as GLint),
            );
        }

        unsafe { gl::CompileShader(shader_id) };

        // check if there are compilation errors
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader_id, COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            let mut v: Vec<u8> = Vec::with_capacity(1024);
            let mut log_len = 0_i32;
            unsafe {
                gl::GetShaderInfoLog(shader_id, 1024, &mut log_len, v.as_mut_ptr().cast());
                v.set_len(log_len.max(0) as usize);
            }

            return Err(String::from_utf8_lossy(&v).to_string());
        }
        Ok(())
    }

    pub fn uniform_location(&self, c_name: &CStr) -> Result<i32> {
        let location = unsafe { gl::GetUniformLocation(self.program_id, c_name.as_ptr().cast()) };
        check_gl_err()?;
        if location == -1 {
            let name = c_name.to_str().unwrap_or("<cstring decoding error>");
            return Err(Error::MissingUniform(name.to_string()));
        }
        Ok(location)
    }

    pub fn use_program(&self) {
        unsafe { gl::UseProgram(self.program_id) };
    }

    pub fn set_color(&self, location: i32, color: Color) {
        unsafe { gl::Uniform4fv(location, 1, color.as_array().as_ptr()) };
    }
}

impl Drop for Shaders {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.program_id) };
    }
}
