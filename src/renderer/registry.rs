//! Channel dispatch over the per-channel renderers.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use super::channel::{ChannelRenderer, EmailRenderer, PushRenderer, Renderer, SmsRenderer};
use super::shapes::{RenderedEmail, RenderedMessage, RenderedPush, RenderedShape, RenderedSms};
use super::types::RenderResult;
use crate::channel::ChannelType;
use crate::message::Message;
use crate::metrics::RenderMetrics;
use crate::template::{template_filename, template_kind, TemplateKind, TemplateLoader};

/// One rendered field of a channel and the template that backs it
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub template: String,
    pub html: bool,
}

/// Declared output shape of a channel
#[derive(Debug, Clone, Serialize)]
pub struct ChannelDescriptor {
    pub channel: ChannelType,
    pub fields: Vec<FieldDescriptor>,
}

impl ChannelDescriptor {
    fn of<R: RenderedShape>() -> Self {
        Self {
            channel: R::CHANNEL,
            fields: R::FIELDS
                .iter()
                .copied()
                .map(|name| FieldDescriptor {
                    name,
                    template: template_filename(name),
                    html: template_kind(name) == TemplateKind::Html,
                })
                .collect(),
        }
    }
}

/// Renders messages for any supported channel, sharing one template loader
pub struct RendererRegistry<L: ?Sized> {
    email: EmailRenderer<Arc<L>>,
    sms: SmsRenderer<Arc<L>>,
    push: PushRenderer<Arc<L>>,
}

impl<L: TemplateLoader + ?Sized> RendererRegistry<L> {
    pub fn new(loader: Arc<L>) -> Self {
        Self {
            email: ChannelRenderer::new(loader.clone()),
            sms: ChannelRenderer::new(loader.clone()),
            push: ChannelRenderer::new(loader),
        }
    }

    /// Render `message` for `channel`
    #[tracing::instrument(
        name = "renderer.render",
        level = "debug",
        skip(self, message),
        fields(message_uuid = %message.uuid, app_label = %message.app_label, message_name = %message.name)
    )]
    pub fn render(&self, channel: ChannelType, message: &Message) -> RenderResult<RenderedMessage> {
        let started = Instant::now();

        let result = match channel {
            ChannelType::Email => self.email.render(message).map(RenderedMessage::Email),
            ChannelType::Sms => self.sms.render(message).map(RenderedMessage::Sms),
            ChannelType::Push => self.push.render(message).map(RenderedMessage::Push),
        };

        match &result {
            Ok(_) => {
                RenderMetrics::record(channel, "ok", started.elapsed());
                tracing::debug!("Message rendered");
            }
            Err(e) => {
                RenderMetrics::record(channel, e.kind(), started.elapsed());
                tracing::debug!(error = %e, "Message render failed");
            }
        }

        result
    }

    /// Describe every supported channel's output shape
    pub fn channels(&self) -> Vec<ChannelDescriptor> {
        vec![
            ChannelDescriptor::of::<RenderedEmail>(),
            ChannelDescriptor::of::<RenderedSms>(),
            ChannelDescriptor::of::<RenderedPush>(),
        ]
    }
}
