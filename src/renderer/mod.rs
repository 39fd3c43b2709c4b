//! Message renderers.
//!
//! A renderer maps a message and a channel to one template per output field,
//! renders each against the message context and assembles the channel's
//! record:
//!
//! ```ignore
//! let env = Arc::new(TemplateEnvironment::from_dirs(["templates"], Default::default()));
//! let renderer = EmailRenderer::new(env);
//!
//! let email: RenderedEmail = renderer.render(&message)?;
//! ```

mod channel;
mod registry;
mod shapes;
mod types;

pub use channel::{ChannelRenderer, EmailRenderer, PushRenderer, Renderer, SmsRenderer};
pub use registry::{ChannelDescriptor, FieldDescriptor, RendererRegistry};
pub use shapes::{RenderedEmail, RenderedMessage, RenderedPush, RenderedShape, RenderedSms};
pub use types::{RenderError, RenderResult};
