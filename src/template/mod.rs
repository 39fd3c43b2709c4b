//! Template lookup and rendering.
//!
//! This module provides:
//! - The lookup path grammar (`{app_label}/edx_ace/{name}/{channel}/{filename}`)
//! - The field-to-filename rule (`body_html` -> `body.html`, `subject` -> `subject.txt`)
//! - A [`TemplateLoader`] trait seam with a MiniJinja implementation
//!
//! # Example
//!
//! ```ignore
//! let env = TemplateEnvironment::from_dirs(["/srv/templates"], EnvironmentOptions::default());
//!
//! let template = env.load("courseware/edx_ace/welcome/email/subject.txt")?;
//! let subject = template.render(&message.context)?;
//! ```

mod environment;
mod loader;
mod path;
mod types;

pub use environment::{EnvironmentOptions, TemplateEnvironment};
pub use loader::{LoadedTemplate, TemplateLoader};
pub use path::{
    template_filename, template_kind, template_path, HTML_FIELD_SUFFIX, TEMPLATE_NAMESPACE,
};
pub use types::{Context, TemplateError, TemplateKind, TemplateResult};
