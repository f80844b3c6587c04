//! Error types for renderer selection and page options

use std::fmt;

/// Errors surfaced around the conversion core.
///
/// Conversion itself is total: every renderer produces some HTML for any
/// input text, malformed constructs degrade to literal output. The fallible
/// surface is limited to selecting things by name.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Renderer not found in registry
    RendererNotFound(String),
    /// Unknown page kind value
    InvalidPageKind(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::RendererNotFound(name) => write!(f, "Renderer '{name}' not found"),
            RenderError::InvalidPageKind(value) => {
                write!(f, "Unknown page kind '{value}' (expected market, holdings or home)")
            }
        }
    }
}

impl std::error::Error for RenderError {}
