//! Metrics helper structs for convenient metric recording

use std::time::Duration;

use prometheus::{Encoder, TextEncoder};

use super::{RENDERS_TOTAL, RENDER_DURATION};
use crate::channel::ChannelType;

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording render metrics
pub struct RenderMetrics;

impl RenderMetrics {
    /// Record a completed render attempt
    pub fn record(channel: ChannelType, outcome: &str, elapsed: Duration) {
        RENDERS_TOTAL
            .with_label_values(&[channel.as_str(), outcome])
            .inc();
        RENDER_DURATION
            .with_label_values(&[channel.as_str()])
            .observe(elapsed.as_secs_f64());
    }

    /// Number of renders recorded for a channel and outcome
    pub fn count(channel: ChannelType, outcome: &str) -> u64 {
        RENDERS_TOTAL
            .with_label_values(&[channel.as_str(), outcome])
            .get()
    }
}
