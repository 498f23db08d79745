use std::fmt;

use crate::context::ShaderKind;

/// GPU object the context failed to allocate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GlObject {
    Shader(ShaderKind),
    Program,
}

impl fmt::Display for GlObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlObject::Shader(kind) => write!(f, "{kind} shader"),
            GlObject::Program => f.write_str("program"),
        }
    }
}

/// Failure of a shader or program operation.
///
/// `Display` is a fixed description. The driver's diagnostic text, when there
/// is one, is carried in the variant and available through [`GlError::info_log`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlError {
    /// The context returned no object. Usually means the context is lost.
    Creation(GlObject),
    /// The source did not compile for the given stage.
    Compile { kind: ShaderKind, info_log: String },
    /// The attached shader units could not be linked together.
    Link { info_log: String },
}

impl GlError {
    /// Driver diagnostic text for compile and link failures.
    pub fn info_log(&self) -> Option<&str> {
        match self {
            GlError::Creation(_) => None,
            GlError::Compile { info_log, .. } | GlError::Link { info_log } => {
                Some(info_log.as_str())
            }
        }
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlError::Creation(object) => {
                write!(f, "graphics context failed to allocate a {object} object")
            }
            GlError::Compile { kind, .. } => write!(f, "{kind} shader failed to compile"),
            GlError::Link { .. } => f.write_str("shader units failed to link into a program"),
        }
    }
}

impl std::error::Error for GlError {}

pub type Result<T> = std::result::Result<T, GlError>;
