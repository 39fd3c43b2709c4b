//! Prometheus metrics for the renderer.
//!
//! - Render outcomes per channel (`ok`, `not_found`, `syntax`, `load`, `render`, `shape`)
//! - Render latency per channel

mod helpers;

pub use helpers::{encode_metrics, RenderMetrics};

use lazy_static::lazy_static;
use prometheus::{register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "ara";

lazy_static! {
    /// Total render calls by channel and outcome
    pub static ref RENDERS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_renders_total", METRIC_PREFIX),
        "Total render calls",
        &["channel", "outcome"]
    ).unwrap();

    /// Time spent rendering a whole message
    pub static ref RENDER_DURATION: HistogramVec = register_histogram_vec!(
        format!("{}_render_duration_seconds", METRIC_PREFIX),
        "Message render duration in seconds",
        &["channel"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]
    ).unwrap();
}
