use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::endpoint::{GenerationParameters, ModelEndpoint};

/// Main configuration structure for medchat
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Model cascade configuration
    #[serde(default)]
    pub cascade: CascadeConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8787
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Stderr format: json or pretty
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for daily-rotated JSON log files (stderr only if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

/// Model cascade configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CascadeConfig {
    /// Base URL endpoints are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token for the inference API. Falls back to `HF_API_TOKEN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Hard timeout for a single endpoint call in milliseconds
    #[serde(default = "default_endpoint_timeout_ms")]
    pub endpoint_timeout_ms: u64,

    /// Deadline for the whole cascade in milliseconds
    #[serde(default = "default_deadline_ms")]
    pub deadline_ms: u64,

    /// Cleaned model output must be longer than this many characters
    #[serde(default = "default_min_reply_chars")]
    pub min_reply_chars: usize,

    /// Endpoints in priority order
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<ModelEndpoint>,
}

fn default_base_url() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

const fn default_endpoint_timeout_ms() -> u64 {
    8_000
}

const fn default_deadline_ms() -> u64 {
    20_000
}

const fn default_min_reply_chars() -> usize {
    10
}

fn default_endpoints() -> Vec<ModelEndpoint> {
    vec![
        ModelEndpoint::new(
            "microsoft/DialoGPT-medium",
            GenerationParameters {
                max_length: 100,
                temperature: 0.7,
                do_sample: true,
            },
        ),
        ModelEndpoint::new(
            "facebook/blenderbot-400M-distill",
            GenerationParameters {
                max_length: 120,
                temperature: 0.7,
                do_sample: true,
            },
        ),
    ]
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: None,
            endpoint_timeout_ms: default_endpoint_timeout_ms(),
            deadline_ms: default_deadline_ms(),
            min_reply_chars: default_min_reply_chars(),
            endpoints: default_endpoints(),
        }
    }
}

impl CascadeConfig {
    pub const fn endpoint_timeout(&self) -> Duration {
        Duration::from_millis(self.endpoint_timeout_ms)
    }

    pub const fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    /// Configured token, else `HF_API_TOKEN` from the environment.
    pub fn resolve_api_token(&self) -> Option<String> {
        self.api_token
            .clone()
            .or_else(|| std::env::var("HF_API_TOKEN").ok())
            .filter(|token| !token.trim().is_empty())
    }
}

impl Config {
    /// Copy safe to print: the API token is replaced with a marker.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.cascade.api_token.is_some() {
            config.cascade.api_token = Some("[REDACTED]".to_string());
        }
        config
    }
}
