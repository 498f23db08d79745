//! JavaScript bindings for glimmer-core.
//!
//! Exposes the canvas/shader/program helpers to JS under the names web code
//! already uses (`resizeCanvas`, `createShader`, `createProgram`,
//! `createProgramFromSources`). Failures are thrown as `Error`s whose message
//! is the error description followed by the driver info log.

#![forbid(unsafe_code)]

// The bindings are only meaningful on wasm32.
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod exports;
#[cfg(target_arch = "wasm32")]
mod logging;

#[cfg(target_arch = "wasm32")]
pub use canvas::webgl2_context;
#[cfg(target_arch = "wasm32")]
pub use exports::{
    create_program, create_program_from_sources, create_shader, get_webgl2_context, init,
    resize_canvas,
};
