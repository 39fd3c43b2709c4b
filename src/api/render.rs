//! Render preview endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::extract::AppJson;
use crate::channel::ChannelType;
use crate::error::{AppError, Result};
use crate::message::Message;
use crate::renderer::{ChannelDescriptor, RenderedMessage};
use crate::server::AppState;

/// POST /api/v1/render/{channel} - Render a message for one channel
#[tracing::instrument(
    name = "http.render_message",
    skip(state, message),
    fields(app_label = %message.app_label, message_name = %message.name)
)]
pub async fn render_message(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    AppJson(message): AppJson<Message>,
) -> Result<Json<RenderedMessage>> {
    let channel: ChannelType = channel.parse()?;

    if message.app_label.is_empty() || message.name.is_empty() {
        return Err(AppError::Validation(
            "app_label and name must not be empty".to_string(),
        ));
    }

    let rendered = state.renderers.render(channel, &message)?;
    Ok(Json(rendered))
}

/// GET /api/v1/channels - List channels and the templates each one needs
pub async fn list_channels(State(state): State<AppState>) -> Json<Vec<ChannelDescriptor>> {
    Json(state.renderers.channels())
}
