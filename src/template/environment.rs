//! MiniJinja-backed template loader.

use std::path::PathBuf;

use minijinja::{Environment, UndefinedBehavior};

use super::loader::{LoadedTemplate, TemplateLoader};
use super::types::{Context, TemplateError, TemplateResult};

/// Engine behaviour switches
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentOptions {
    /// Referencing an unbound variable is a render error
    pub strict_undefined: bool,
    /// Keep the final newline of a template file
    pub keep_trailing_newline: bool,
}

impl Default for EnvironmentOptions {
    fn default() -> Self {
        Self {
            strict_undefined: true,
            keep_trailing_newline: true,
        }
    }
}

/// Template environment shared by all channel renderers.
///
/// HTML templates (`.html`) are auto-escaped, text templates are not.
pub struct TemplateEnvironment {
    env: Environment<'static>,
    roots: Vec<PathBuf>,
}

impl TemplateEnvironment {
    /// Search one or more template roots; the first root holding a path wins
    pub fn from_dirs<I, P>(dirs: I, options: EnvironmentOptions) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let roots: Vec<PathBuf> = dirs.into_iter().map(Into::into).collect();
        let loaders: Vec<_> = roots.iter().cloned().map(minijinja::path_loader).collect();

        let mut env = base_environment(options);
        env.set_loader(move |name| {
            for loader in &loaders {
                if let Some(source) = loader(name)? {
                    return Ok(Some(source));
                }
            }
            Ok(None)
        });

        tracing::debug!(roots = ?roots, "Template environment created");

        Self { env, roots }
    }

    /// Build an environment from in-memory `(path, source)` pairs
    pub fn from_sources<I, N, S>(sources: I, options: EnvironmentOptions) -> TemplateResult<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut env = base_environment(options);
        for (path, source) in sources {
            let path = path.into();
            env.add_template_owned(path.clone(), source.into())
                .map_err(|e| TemplateError::from_engine(&path, e))?;
        }

        Ok(Self {
            env,
            roots: Vec::new(),
        })
    }

    /// Filesystem roots searched by this environment (empty for in-memory sources)
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

fn base_environment(options: EnvironmentOptions) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(if options.strict_undefined {
        UndefinedBehavior::Strict
    } else {
        UndefinedBehavior::Lenient
    });
    env.set_keep_trailing_newline(options.keep_trailing_newline);
    env
}

struct EngineTemplate<'env> {
    inner: minijinja::Template<'env, 'env>,
}

impl LoadedTemplate for EngineTemplate<'_> {
    fn render(&self, context: &Context) -> TemplateResult<String> {
        self.inner
            .render(context)
            .map_err(|e| TemplateError::from_engine(self.inner.name(), e))
    }
}

impl TemplateLoader for TemplateEnvironment {
    fn load(&self, path: &str) -> TemplateResult<Box<dyn LoadedTemplate + '_>> {
        let inner = self
            .env
            .get_template(path)
            .map_err(|e| TemplateError::from_load(path, e))?;

        Ok(Box::new(EngineTemplate { inner }))
    }
}
