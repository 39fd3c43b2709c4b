//! Per-channel rendered records.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::types::{RenderError, RenderResult};
use crate::channel::ChannelType;

/// Output shape of a channel: which fields get rendered, and into what record.
///
/// Each name in `FIELDS` is rendered from its own template; fields ending in
/// `_html` come from an `.html` template, all others from a `.txt` template.
pub trait RenderedShape: DeserializeOwned + Serialize + Send + Sync + 'static {
    /// Channel this shape belongs to
    const CHANNEL: ChannelType;

    /// Field names, in declaration order
    const FIELDS: &'static [&'static str];

    /// Assemble the record from rendered strings keyed by field name
    fn from_fields(fields: serde_json::Map<String, serde_json::Value>) -> RenderResult<Self> {
        serde_json::from_value(serde_json::Value::Object(fields)).map_err(|e| RenderError::Shape {
            channel: Self::CHANNEL,
            reason: e.to_string(),
        })
    }
}

/// Rendered email content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderedEmail {
    pub from_name: String,
    pub subject: String,
    pub body_html: String,
    pub head_html: String,
    pub body: String,
}

impl RenderedShape for RenderedEmail {
    const CHANNEL: ChannelType = ChannelType::Email;
    const FIELDS: &'static [&'static str] =
        &["from_name", "subject", "body_html", "head_html", "body"];
}

/// Rendered SMS content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderedSms {
    pub body: String,
}

impl RenderedShape for RenderedSms {
    const CHANNEL: ChannelType = ChannelType::Sms;
    const FIELDS: &'static [&'static str] = &["body"];
}

/// Rendered push notification content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderedPush {
    pub title: String,
    pub body: String,
}

impl RenderedShape for RenderedPush {
    const CHANNEL: ChannelType = ChannelType::Push;
    const FIELDS: &'static [&'static str] = &["title", "body"];
}

/// Rendered output of any channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "channel", rename_all = "lowercase")]
pub enum RenderedMessage {
    Email(RenderedEmail),
    Sms(RenderedSms),
    Push(RenderedPush),
}

impl RenderedMessage {
    pub fn channel(&self) -> ChannelType {
        match self {
            RenderedMessage::Email(_) => ChannelType::Email,
            RenderedMessage::Sms(_) => ChannelType::Sms,
            RenderedMessage::Push(_) => ChannelType::Push,
        }
    }
}
