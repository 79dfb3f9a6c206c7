//! Infrastructure layer
//!
//! - config: figment-based configuration loading and validation
//! - http: axum boundary for the chat endpoint
//! - logging: tracing subscriber setup

pub mod config;
pub mod http;
pub mod logging;
