//! API layer - HTTP endpoint handlers.

mod extract;
mod health;
mod metrics;
mod render;
mod routes;

pub use extract::AppJson;
pub use health::health;
pub use metrics::prometheus_metrics;
pub use render::{list_channels, render_message};
pub use routes::api_routes;
