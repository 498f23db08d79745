//! Graphics context capability.
//!
//! The shader and program operations only ever talk to a context through
//! [`GraphicsContext`]. Backends live next to the trait and are selected with
//! cargo features:
//! - `glow`: `glow::Context` (desktop GL, GLES, or WebGL through glow)
//! - `web`: `web_sys::WebGl2RenderingContext`

#[cfg(feature = "glow")]
mod gl;
#[cfg(feature = "web")]
mod webgl;

use std::fmt;

/// GL enum value of `VERTEX_SHADER`.
pub const VERTEX_SHADER: u32 = 0x8B31;
/// GL enum value of `FRAGMENT_SHADER`.
pub const FRAGMENT_SHADER: u32 = 0x8B30;

/// Pipeline stage of a shader unit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    /// The GL enum the context expects for this stage.
    #[inline]
    pub const fn gl_enum(self) -> u32 {
        match self {
            ShaderKind::Vertex => VERTEX_SHADER,
            ShaderKind::Fragment => FRAGMENT_SHADER,
        }
    }

    /// Maps a raw GL stage enum back to a kind. Other stages are not supported.
    pub const fn from_gl_enum(value: u32) -> Option<Self> {
        match value {
            VERTEX_SHADER => Some(ShaderKind::Vertex),
            FRAGMENT_SHADER => Some(ShaderKind::Fragment),
            _ => None,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
        })
    }
}

/// The subset of a GL-style context used to build programs.
///
/// Allocation returns `None` where the underlying API hands back a null
/// object. Every other call is a direct pass-through.
pub trait GraphicsContext {
    type Shader;
    type Program;

    fn create_shader(&self, kind: ShaderKind) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> String;
    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_link_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> String;
    fn delete_program(&self, program: &Self::Program);
}
