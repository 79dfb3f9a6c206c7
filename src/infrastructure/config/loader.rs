use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Server host cannot be empty")]
    EmptyHost,

    #[error("Invalid port: {0}. Must be between 1 and 65535")]
    InvalidPort(u16),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid endpoint_timeout_ms: {0}. Must be at least 1")]
    InvalidEndpointTimeout(u64),

    #[error(
        "Invalid cascade deadline: deadline_ms ({0}) must be at least endpoint_timeout_ms ({1})"
    )]
    InvalidDeadline(u64, u64),

    #[error("Invalid temperature for endpoint {0}: {1}. Must be between 0.0 and 2.0")]
    InvalidTemperature(String, f64),

    #[error("Invalid max_length for endpoint {0}: must be at least 1")]
    InvalidMaxLength(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Config file not found: {0}")]
    FileNotFound(std::path::PathBuf),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .medchat/config.yaml (project config)
    /// 3. .medchat/local.yaml (local overrides, optional)
    /// 4. Environment variables (MEDCHAT_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".medchat/config.yaml"))
            .merge(Yaml::file(".medchat/local.yaml"))
            .merge(Env::prefixed("MEDCHAT_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring env overrides
    ///
    /// Unlike the implicit project files, an explicit path must exist.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        if !path.as_ref().is_file() {
            return Err(ConfigError::FileNotFound(path.as_ref().to_path_buf()).into());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("MEDCHAT_").split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// `load_from_file` when a path is given, `load` otherwise
    pub fn load_optional(path: Option<&std::path::Path>) -> Result<Config> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort(config.server.port));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let cascade = &config.cascade;
        if cascade.endpoint_timeout_ms == 0 {
            return Err(ConfigError::InvalidEndpointTimeout(
                cascade.endpoint_timeout_ms,
            ));
        }
        if cascade.deadline_ms < cascade.endpoint_timeout_ms {
            return Err(ConfigError::InvalidDeadline(
                cascade.deadline_ms,
                cascade.endpoint_timeout_ms,
            ));
        }

        for endpoint in &cascade.endpoints {
            if endpoint.model.trim().is_empty() {
                return Err(ConfigError::ValidationFailed(
                    "Endpoint model cannot be empty".to_string(),
                ));
            }
            if !(0.0..=2.0).contains(&endpoint.parameters.temperature) {
                return Err(ConfigError::InvalidTemperature(
                    endpoint.model.clone(),
                    endpoint.parameters.temperature,
                ));
            }
            if endpoint.parameters.max_length == 0 {
                return Err(ConfigError::InvalidMaxLength(endpoint.model.clone()));
            }
        }

        if cascade.base_url.trim().is_empty()
            && cascade.endpoints.iter().any(|e| e.url.is_none())
        {
            return Err(ConfigError::ValidationFailed(
                "cascade.base_url is required for endpoints without a url".to_string(),
            ));
        }

        Ok(())
    }
}
