//! `web_sys::WebGl2RenderingContext` backend.

use web_sys::{WebGl2RenderingContext, WebGlProgram, WebGlShader};

use super::{GraphicsContext, ShaderKind};

impl GraphicsContext for WebGl2RenderingContext {
    type Shader = WebGlShader;
    type Program = WebGlProgram;

    fn create_shader(&self, kind: ShaderKind) -> Option<Self::Shader> {
        WebGl2RenderingContext::create_shader(self, kind.gl_enum())
    }

    fn shader_source(&self, shader: &Self::Shader, source: &str) {
        WebGl2RenderingContext::shader_source(self, shader, source);
    }

    fn compile_shader(&self, shader: &Self::Shader) {
        WebGl2RenderingContext::compile_shader(self, shader);
    }

    fn shader_compile_status(&self, shader: &Self::Shader) -> bool {
        self.get_shader_parameter(shader, WebGl2RenderingContext::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &Self::Shader) -> String {
        self.get_shader_info_log(shader).unwrap_or_default()
    }

    fn delete_shader(&self, shader: &Self::Shader) {
        WebGl2RenderingContext::delete_shader(self, Some(shader));
    }

    fn create_program(&self) -> Option<Self::Program> {
        WebGl2RenderingContext::create_program(self)
    }

    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader) {
        WebGl2RenderingContext::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &Self::Program) {
        WebGl2RenderingContext::link_program(self, program);
    }

    fn program_link_status(&self, program: &Self::Program) -> bool {
        // A lost context answers every parameter query with `null`.
        self.get_program_parameter(program, WebGl2RenderingContext::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &Self::Program) -> String {
        self.get_program_info_log(program).unwrap_or_default()
    }

    fn delete_program(&self, program: &Self::Program) {
        WebGl2RenderingContext::delete_program(self, Some(program));
    }
}
