//! Lookup path grammar shared by every channel renderer.
//!
//! Paths look like `{app_label}/edx_ace/{message_name}/{channel}/{filename}`
//! and must stay byte-compatible with existing template trees.

use super::types::TemplateKind;
use crate::channel::ChannelType;
use crate::message::Message;

/// Fixed namespace segment between the app label and the message name
pub const TEMPLATE_NAMESPACE: &str = "edx_ace";

/// Field-name suffix that selects an HTML template
pub const HTML_FIELD_SUFFIX: &str = "_html";

/// Classify a field by naming convention.
///
/// Only a trailing `_html` counts, so `html_summary` is plain text.
pub fn template_kind(field: &str) -> TemplateKind {
    if field.ends_with(HTML_FIELD_SUFFIX) {
        TemplateKind::Html
    } else {
        TemplateKind::Text
    }
}

/// Template filename for a rendered field (`body_html` -> `body.html`, `subject` -> `subject.txt`)
pub fn template_filename(field: &str) -> String {
    let kind = template_kind(field);
    let stem = match kind {
        TemplateKind::Html => field.strip_suffix(HTML_FIELD_SUFFIX).unwrap_or(field),
        TemplateKind::Text => field,
    };
    format!("{}.{}", stem, kind.extension())
}

/// Full lookup path for one template of a message on a channel
pub fn template_path(message: &Message, channel: ChannelType, filename: &str) -> String {
    format!(
        "{}/{}/{}/{}/{}",
        message.app_label,
        TEMPLATE_NAMESPACE,
        message.name,
        channel.as_str(),
        filename
    )
}
