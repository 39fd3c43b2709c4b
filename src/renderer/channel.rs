//! Generic per-channel renderer.

use std::marker::PhantomData;

use super::shapes::{RenderedEmail, RenderedPush, RenderedShape, RenderedSms};
use super::types::RenderResult;
use crate::channel::ChannelType;
use crate::message::Message;
use crate::template::{template_filename, template_path, TemplateLoader};

/// Capability to turn a message into a channel-specific record
pub trait Renderer {
    /// Record produced by this renderer
    type Output;

    /// Channel this renderer produces content for
    fn channel(&self) -> ChannelType;

    /// Render every field of the output record.
    ///
    /// All-or-nothing: the first missing template or failed substitution
    /// aborts the call and no record is returned.
    fn render(&self, message: &Message) -> RenderResult<Self::Output>;
}

/// Renders the shape `R` using templates resolved through `L`
pub struct ChannelRenderer<R, L> {
    loader: L,
    _shape: PhantomData<fn() -> R>,
}

/// Email renderer
pub type EmailRenderer<L> = ChannelRenderer<RenderedEmail, L>;

/// SMS renderer
pub type SmsRenderer<L> = ChannelRenderer<RenderedSms, L>;

/// Push notification renderer
pub type PushRenderer<L> = ChannelRenderer<RenderedPush, L>;

impl<R: RenderedShape, L: TemplateLoader> ChannelRenderer<R, L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            _shape: PhantomData,
        }
    }

    /// Lookup path of the template backing `field` for `message`
    pub fn template_path_for(&self, message: &Message, field: &str) -> String {
        template_path(message, R::CHANNEL, &template_filename(field))
    }
}

impl<R: RenderedShape, L: TemplateLoader> Renderer for ChannelRenderer<R, L> {
    type Output = R;

    fn channel(&self) -> ChannelType {
        R::CHANNEL
    }

    fn render(&self, message: &Message) -> RenderResult<R> {
        let mut rendered = serde_json::Map::with_capacity(R::FIELDS.len());

        for field in R::FIELDS {
            let path = self.template_path_for(message, field);
            tracing::trace!(message_uuid = %message.uuid, path = %path, "Rendering field");

            let template = self.loader.load(&path)?;
            let output = template.render(&message.context)?;
            rendered.insert(field.to_string(), serde_json::Value::String(output));
        }

        R::from_fields(rendered)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::renderer::RenderError;
    use crate::template::{Context, LoadedTemplate, TemplateError, TemplateResult};

    /// Loader that records requested paths and echoes them back as output
    #[derive(Default)]
    struct RecordingLoader {
        missing: Option<String>,
        requested: Mutex<Vec<String>>,
    }

    struct EchoTemplate(String);

    impl LoadedTemplate for EchoTemplate {
        fn render(&self, context: &Context) -> TemplateResult<String> {
            let user = context.get("user").and_then(|v| v.as_str()).unwrap_or("");
            Ok(format!("{}|{}", self.0, user))
        }
    }

    impl TemplateLoader for RecordingLoader {
        fn load(&self, path: &str) -> TemplateResult<Box<dyn LoadedTemplate + '_>> {
            self.requested.lock().unwrap().push(path.to_string());
            if self.missing.as_deref() == Some(path) {
                return Err(TemplateError::NotFound(path.to_string()));
            }
            Ok(Box::new(EchoTemplate(path.to_string())))
        }
    }

    fn message() -> Message {
        Message::builder("courseware", "welcome")
            .bind("user", "ada")
            .build()
    }

    #[test]
    fn test_email_requests_every_field_template_in_order() {
        let renderer = EmailRenderer::new(RecordingLoader::default());

        let email = renderer.render(&message()).unwrap();

        let requested = renderer.loader.requested.lock().unwrap().clone();
        assert_eq!(
            requested,
            vec![
                "courseware/edx_ace/welcome/email/from_name.txt",
                "courseware/edx_ace/welcome/email/subject.txt",
                "courseware/edx_ace/welcome/email/body.html",
                "courseware/edx_ace/welcome/email/head.html",
                "courseware/edx_ace/welcome/email/body.txt",
            ]
        );
        assert_eq!(email.subject, "courseware/edx_ace/welcome/email/subject.txt|ada");
        assert_eq!(email.body_html, "courseware/edx_ace/welcome/email/body.html|ada");
    }

    #[test]
    fn test_missing_template_aborts_render() {
        let loader = RecordingLoader {
            missing: Some("courseware/edx_ace/welcome/email/body.html".to_string()),
            ..Default::default()
        };
        let renderer = EmailRenderer::new(loader);

        let err = renderer.render(&message()).unwrap_err();

        assert!(matches!(
            err,
            RenderError::Template(TemplateError::NotFound(ref p))
                if p == "courseware/edx_ace/welcome/email/body.html"
        ));
        // Fields after the missing one are never requested
        assert_eq!(renderer.loader.requested.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_channel_value_in_paths() {
        let sms = SmsRenderer::new(RecordingLoader::default());
        let push = PushRenderer::new(RecordingLoader::default());

        assert_eq!(sms.channel(), ChannelType::Sms);
        assert_eq!(
            sms.render(&message()).unwrap().body,
            "courseware/edx_ace/welcome/sms/body.txt|ada"
        );

        let rendered = push.render(&message()).unwrap();
        assert_eq!(rendered.title, "courseware/edx_ace/welcome/push/title.txt|ada");
        assert_eq!(rendered.body, "courseware/edx_ace/welcome/push/body.txt|ada");
    }

    #[test]
    fn test_template_path_for_field() {
        let renderer = EmailRenderer::new(RecordingLoader::default());
        let paths: HashMap<&str, String> = RenderedEmail::FIELDS
            .iter()
            .map(|f| (*f, renderer.template_path_for(&message(), f)))
            .collect();

        assert_eq!(paths["head_html"], "courseware/edx_ace/welcome/email/head.html");
        assert_eq!(paths["from_name"], "courseware/edx_ace/welcome/email/from_name.txt");
    }
}
