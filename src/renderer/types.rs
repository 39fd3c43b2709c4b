use thiserror::Error;

use crate::channel::ChannelType;
use crate::template::TemplateError;

/// Renderer error type
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Rendered fields do not match the {channel} shape: {reason}")]
    Shape { channel: ChannelType, reason: String },
}

impl RenderError {
    /// Short outcome label used for metrics and error codes
    pub fn kind(&self) -> &'static str {
        match self {
            RenderError::Template(TemplateError::NotFound(_)) => "not_found",
            RenderError::Template(TemplateError::Syntax { .. }) => "syntax",
            RenderError::Template(TemplateError::Load { .. }) => "load",
            RenderError::Template(TemplateError::Render { .. }) => "render",
            RenderError::Shape { .. } => "shape",
        }
    }
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
