use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::health::health;
use super::metrics::prometheus_metrics;
use super::render::{list_channels, render_message};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Render endpoints
        .nest(
            "/api/v1",
            Router::new()
                .route("/channels", get(list_channels))
                .route("/render/{channel}", post(render_message)),
        )
}
