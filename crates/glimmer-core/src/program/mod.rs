//! Program linking.
//!
//! [`link_program`] works on already compiled units. The `_from_*` helpers
//! compile first and then link, without cleaning up units compiled before a
//! later step fails.

use crate::context::{GraphicsContext, ShaderKind};
use crate::error::{GlError, GlObject, Result};
use crate::logging::report_info_log;
use crate::shader::compile_shader;

/// Links compiled shader units into a program.
///
/// Units are attached in slice order. On success the caller owns the program;
/// the units stay owned by the caller as well.
///
/// Errors:
/// - [`GlError::Creation`] when the context hands back no program object.
/// - [`GlError::Link`] when the driver rejects the combination. The info log
///   is reported and the program object is deleted before returning.
pub fn link_program<C>(ctx: &C, shaders: &[C::Shader]) -> Result<C::Program>
where
    C: GraphicsContext + ?Sized,
{
    let program = ctx
        .create_program()
        .ok_or(GlError::Creation(GlObject::Program))?;

    for shader in shaders {
        ctx.attach_shader(&program, shader);
    }

    ctx.link_program(&program);

    if ctx.program_link_status(&program) {
        return Ok(program);
    }

    let info_log = ctx.program_info_log(&program);
    report_info_log("program failed to link", &info_log);
    ctx.delete_program(&program);

    Err(GlError::Link { info_log })
}

/// Compiles a vertex and a fragment stage and links them, vertex first.
pub fn link_program_from_sources<C>(
    ctx: &C,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<C::Program>
where
    C: GraphicsContext + ?Sized,
{
    link_program_from_stages(
        ctx,
        &[
            (ShaderKind::Vertex, vertex_source),
            (ShaderKind::Fragment, fragment_source),
        ],
    )
}

/// Compiles each `(kind, source)` pair in order and links the units in that
/// same order.
///
/// The first failing step is returned as is.
pub fn link_program_from_stages<C>(ctx: &C, stages: &[(ShaderKind, &str)]) -> Result<C::Program>
where
    C: GraphicsContext + ?Sized,
{
    let shaders = stages
        .iter()
        .map(|&(kind, source)| compile_shader(ctx, kind, source))
        .collect::<Result<Vec<_>>>()?;

    link_program(ctx, &shaders)
}
