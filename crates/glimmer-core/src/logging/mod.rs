//! Logging utilities.
//!
//! Everything in this crate logs through the `log` facade. Native binaries
//! install `env_logger` with [`init_logging`]; browser builds install a console
//! logger from `glimmer-web` instead.

mod diagnostics;
#[cfg(not(target_arch = "wasm32"))]
mod init;

pub(crate) use diagnostics::report_info_log;
pub use diagnostics::DIAGNOSTICS_TARGET;
#[cfg(not(target_arch = "wasm32"))]
pub use init::{init_logging, LoggingConfig};
