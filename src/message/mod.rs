use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::template::Context;

/// A named notification event carrying the bindings its templates render with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier, used for log correlation
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    /// Application that owns the message templates
    pub app_label: String,
    /// Message type name (e.g. "password_reset")
    pub name: String,
    /// Template bindings
    #[serde(default)]
    pub context: Context,
}

impl Message {
    /// Start building a message
    pub fn builder(app_label: impl Into<String>, name: impl Into<String>) -> MessageBuilder {
        MessageBuilder::new(app_label, name)
    }
}

/// Builder for creating messages
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    uuid: Option<Uuid>,
    app_label: String,
    name: String,
    context: Context,
}

impl MessageBuilder {
    /// Create a new message builder
    pub fn new(app_label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: None,
            app_label: app_label.into(),
            name: name.into(),
            context: Context::new(),
        }
    }

    /// Set an explicit message id
    pub fn uuid(mut self, uuid: Uuid) -> Self {
        self.uuid = Some(uuid);
        self
    }

    /// Replace the whole context
    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Bind a single context value
    pub fn bind(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Bind a serializable value
    pub fn bind_from<T: Serialize>(
        mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        self.context.insert(key.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Build the message
    pub fn build(self) -> Message {
        Message {
            uuid: self.uuid.unwrap_or_else(Uuid::new_v4),
            app_label: self.app_label,
            name: self.name,
            context: self.context,
        }
    }
}
