//! Shader unit compilation.

use crate::context::{GraphicsContext, ShaderKind};
use crate::error::{GlError, GlObject, Result};
use crate::logging::report_info_log;

/// Compiles one shader stage from GLSL source.
///
/// On success the caller owns the returned unit: attach it to a program, then
/// delete it (or keep it for more programs).
///
/// Errors:
/// - [`GlError::Creation`] when the context hands back no shader object. No
///   source is submitted in that case.
/// - [`GlError::Compile`] when the driver rejects the source. The info log is
///   reported on [`DIAGNOSTICS_TARGET`](crate::logging::DIAGNOSTICS_TARGET)
///   and the shader object is deleted before returning.
pub fn compile_shader<C>(ctx: &C, kind: ShaderKind, source: &str) -> Result<C::Shader>
where
    C: GraphicsContext + ?Sized,
{
    let shader = ctx
        .create_shader(kind)
        .ok_or(GlError::Creation(GlObject::Shader(kind)))?;

    ctx.shader_source(&shader, source);
    ctx.compile_shader(&shader);

    if ctx.shader_compile_status(&shader) {
        return Ok(shader);
    }

    let info_log = ctx.shader_info_log(&shader);
    report_info_log(&format!("{kind} shader failed to compile"), &info_log);
    ctx.delete_shader(&shader);

    Err(GlError::Compile { kind, info_log })
}
