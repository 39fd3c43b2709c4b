use std::sync::Arc;

use crate::config::Settings;
use crate::renderer::RendererRegistry;
use crate::template::TemplateEnvironment;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub renderers: Arc<RendererRegistry<TemplateEnvironment>>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let environment = TemplateEnvironment::from_dirs(
            settings.templates.dirs.iter(),
            settings.templates.environment_options(),
        );

        Self::with_environment(settings, environment)
    }

    /// Build state around an already configured template environment
    pub fn with_environment(settings: Settings, environment: TemplateEnvironment) -> Self {
        Self {
            settings: Arc::new(settings),
            renderers: Arc::new(RendererRegistry::new(Arc::new(environment))),
        }
    }
}
