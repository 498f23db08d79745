//! `glow` backend.
//!
//! glow marks every call `unsafe`; the calls below only pass handles that were
//! produced by the same context, which is the requirement glow documents.

use glow::HasContext;

use super::{GraphicsContext, ShaderKind};

impl GraphicsContext for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;

    fn create_shader(&self, kind: ShaderKind) -> Option<Self::Shader> {
        // SAFETY: allocation takes no handles.
        unsafe { HasContext::create_shader(self, kind.gl_enum()) }
            .map_err(|err| log::debug!("glCreateShader({kind}) failed: {err}"))
            .ok()
    }

    fn shader_source(&self, shader: &Self::Shader, source: &str) {
        // SAFETY: `shader` came from `create_shader` on this context.
        unsafe { HasContext::shader_source(self, *shader, source) }
    }

    fn compile_shader(&self, shader: &Self::Shader) {
        // SAFETY: as above.
        unsafe { HasContext::compile_shader(self, *shader) }
    }

    fn shader_compile_status(&self, shader: &Self::Shader) -> bool {
        // SAFETY: as above.
        unsafe { self.get_shader_compile_status(*shader) }
    }

    fn shader_info_log(&self, shader: &Self::Shader) -> String {
        // SAFETY: as above.
        unsafe { self.get_shader_info_log(*shader) }
    }

    fn delete_shader(&self, shader: &Self::Shader) {
        // SAFETY: as above.
        unsafe { HasContext::delete_shader(self, *shader) }
    }

    fn create_program(&self) -> Option<Self::Program> {
        // SAFETY: allocation takes no handles.
        unsafe { HasContext::create_program(self) }
            .map_err(|err| log::debug!("glCreateProgram failed: {err}"))
            .ok()
    }

    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader) {
        // SAFETY: both handles came from this context.
        unsafe { HasContext::attach_shader(self, *program, *shader) }
    }

    fn link_program(&self, program: &Self::Program) {
        // SAFETY: `program` came from `create_program` on this context.
        unsafe { HasContext::link_program(self, *program) }
    }

    fn program_link_status(&self, program: &Self::Program) -> bool {
        // SAFETY: as above.
        unsafe { self.get_program_link_status(*program) }
    }

    fn program_info_log(&self, program: &Self::Program) -> String {
        // SAFETY: as above.
        unsafe { self.get_program_info_log(*program) }
    }

    fn delete_program(&self, program: &Self::Program) {
        // SAFETY: as above.
        unsafe { HasContext::delete_program(self, *program) }
    }
}
