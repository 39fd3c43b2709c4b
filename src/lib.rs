// Supporting modules
pub mod config;
pub mod error;
pub mod metrics;
pub mod telemetry;

// Domain layer
pub mod channel;
pub mod message;
pub mod renderer;
pub mod template;

// Application layer
pub mod api;
pub mod server;
