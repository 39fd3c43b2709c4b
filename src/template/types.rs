use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template syntax error in {path}: {source}")]
    Syntax {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Template {path} could not be loaded: {source}")]
    Load {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Rendering {path} failed: {source}")]
    Render {
        path: String,
        #[source]
        source: minijinja::Error,
    },
}

impl TemplateError {
    /// Map an engine error raised while resolving `path`.
    ///
    /// Anything other than a missing file or a syntax error means the template
    /// store itself is unreadable, not that the context is wrong.
    pub fn from_load(path: &str, err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound | minijinja::ErrorKind::SyntaxError => {
                Self::from_engine(path, err)
            }
            _ => TemplateError::Load {
                path: path.to_string(),
                source: err,
            },
        }
    }

    /// Map an engine error raised while rendering `path`.
    pub fn from_engine(path: &str, err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => TemplateError::NotFound(path.to_string()),
            minijinja::ErrorKind::SyntaxError => TemplateError::Syntax {
                path: path.to_string(),
                source: err,
            },
            _ => TemplateError::Render {
                path: path.to_string(),
                source: err,
            },
        }
    }

    /// Lookup path the error refers to
    pub fn path(&self) -> &str {
        match self {
            TemplateError::NotFound(path) => path,
            TemplateError::Syntax { path, .. } => path,
            TemplateError::Load { path, .. } => path,
            TemplateError::Render { path, .. } => path,
        }
    }
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Key-value bindings available to a template
pub type Context = serde_json::Map<String, serde_json::Value>;

/// How a rendered field's template is stored on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Html,
    Text,
}

impl TemplateKind {
    /// File extension, without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            TemplateKind::Html => "html",
            TemplateKind::Text => "txt",
        }
    }
}
