use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::template::EnvironmentOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesConfig {
    /// Template roots, searched in order
    #[serde(default = "default_template_dirs")]
    pub dirs: Vec<String>,
    /// Fail when a template references an unbound variable
    #[serde(default = "default_true")]
    pub strict_undefined: bool,
    /// Keep the final newline of template files
    #[serde(default = "default_true")]
    pub keep_trailing_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_template_dirs() -> Vec<String> {
    vec!["templates".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8082)?
            .set_default("templates.dirs", vec!["templates"])?
            .set_default("templates.strict_undefined", true)?
            .set_default("templates.keep_trailing_newline", true)?
            .set_default("logging.format", "pretty")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // ARA_SERVER__PORT, ARA_TEMPLATES__DIRS=/a,/b, ARA_LOGGING__FORMAT, etc.
            .add_source(
                Environment::with_prefix("ARA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("templates.dirs"),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl TemplatesConfig {
    pub fn environment_options(&self) -> EnvironmentOptions {
        EnvironmentOptions {
            strict_undefined: self.strict_undefined,
            keep_trailing_newline: self.keep_trailing_newline,
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dirs: default_template_dirs(),
            strict_undefined: true,
            keep_trailing_newline: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
        }
    }
}
