//! Glimmer core crate.
//!
//! Small helpers for GL-style rendering setup:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`surface`] | `Surface`, `resize_surface` |
//! | [`shader`] | `compile_shader` |
//! | [`program`] | `link_program`, `link_program_from_sources`, `link_program_from_stages` |
//! | [`context`] | `GraphicsContext`, `ShaderKind` and the backend impls |
//! | [`error`] | `GlError` |
//! | [`logging`] | logger setup and the diagnostics target |
//!
//! # Quick start
//!
//! ```no_run
//! # #[cfg(feature = "glow")]
//! # fn demo(gl: &glow::Context) -> glimmer_core::Result<()> {
//! use glimmer_core::link_program_from_sources;
//!
//! let program = link_program_from_sources(gl, VERTEX, FRAGMENT)?;
//! # let _ = program;
//! # Ok(())
//! # }
//! # const VERTEX: &str = "";
//! # const FRAGMENT: &str = "";
//! ```

pub mod context;
pub mod error;
pub mod logging;
pub mod program;
pub mod shader;
pub mod surface;

#[cfg(test)]
mod testing;

pub use context::{GraphicsContext, ShaderKind};
pub use error::{GlError, GlObject, Result};
pub use program::{link_program, link_program_from_sources, link_program_from_stages};
pub use shader::compile_shader;
pub use surface::{resize_surface, Surface, SurfaceSize};
