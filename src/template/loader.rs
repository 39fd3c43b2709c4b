//! Template loader trait definition

use std::sync::Arc;

use super::types::{Context, TemplateResult};

/// A resolved template that can be rendered against a context
pub trait LoadedTemplate {
    /// Render the template with the given bindings
    fn render(&self, context: &Context) -> TemplateResult<String>;
}

/// Trait for resolving templates by lookup path
pub trait TemplateLoader: Send + Sync {
    /// Resolve the template stored at `path`.
    ///
    /// Fails with [`TemplateError::NotFound`](super::TemplateError::NotFound)
    /// when nothing exists at that path.
    fn load(&self, path: &str) -> TemplateResult<Box<dyn LoadedTemplate + '_>>;
}

impl<T: TemplateLoader + ?Sized> TemplateLoader for Arc<T> {
    fn load(&self, path: &str) -> TemplateResult<Box<dyn LoadedTemplate + '_>> {
        (**self).load(path)
    }
}
