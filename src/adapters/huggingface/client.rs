use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::error::GenerationError;
use crate::domain::errors::ChatResult;
use crate::domain::models::{CascadeConfig, ModelEndpoint};
use crate::domain::ports::TextGenerationClient;

/// Configuration for the inference HTTP client
#[derive(Debug, Clone)]
pub struct HuggingFaceClientConfig {
    /// Base URL endpoints are resolved against
    pub base_url: String,

    /// Optional bearer token
    pub api_token: Option<String>,

    /// Request timeout
    pub timeout: Duration,
}

impl Default for HuggingFaceClientConfig {
    fn default() -> Self {
        Self::from(&CascadeConfig::default())
    }
}

impl From<&CascadeConfig> for HuggingFaceClientConfig {
    fn from(config: &CascadeConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_token: config.resolve_api_token(),
            timeout: config.endpoint_timeout(),
        }
    }
}

/// HTTP client for hosted text-generation models
///
/// One pooled `reqwest` client shared by every endpoint in the cascade.
/// Carries no per-request state.
pub struct HuggingFaceClient {
    http_client: ReqwestClient,
    base_url: String,
}

impl HuggingFaceClient {
    pub fn new(config: HuggingFaceClientConfig) -> Result<Self, GenerationError> {
        let token_scrubbed = match config.api_token.as_deref() {
            Some(token) if token.chars().count() > 6 => {
                format!("{}...[REDACTED]", token.chars().take(6).collect::<String>())
            }
            Some(_) => "[REDACTED]".to_string(),
            None => "none".to_string(),
        };

        info!(
            base_url = %config.base_url,
            timeout_ms = u64::try_from(config.timeout.as_millis()).unwrap_or(u64::MAX),
            api_token = %token_scrubbed,
            "Initializing inference client"
        );

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(token) = &config.api_token {
            let mut value = header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| GenerationError::InvalidConfig(format!("Invalid API token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let http_client = ReqwestClient::builder()
            .pool_max_idle_per_host(4)
            .timeout(config.timeout)
            .tcp_nodelay(true)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url,
        })
    }

    pub fn from_cascade_config(config: &CascadeConfig) -> Result<Self, GenerationError> {
        Self::new(HuggingFaceClientConfig::from(config))
    }

    async fn execute(&self, endpoint: &ModelEndpoint, message: &str) -> Result<Value, GenerationError> {
        let url = endpoint.resolve_url(&self.base_url);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(&endpoint.build_request(message))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::Network(e)
                }
            })?;

        Self::handle_response(response).await
    }

    async fn handle_response(response: Response) -> Result<Value, GenerationError> {
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            warn!("Inference API error ({}): {}", status, body);
            return Err(GenerationError::from_status(status, body));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl TextGenerationClient for HuggingFaceClient {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    #[instrument(skip(self, message), fields(model = %endpoint.model))]
    async fn generate(&self, endpoint: &ModelEndpoint, message: &str) -> ChatResult<Value> {
        self.execute(endpoint, message)
            .await
            .map_err(|e| e.into_chat_error(endpoint.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_cascade() {
        let cascade = CascadeConfig {
            base_url: "http://localhost:1234".to_string(),
            api_token: Some("hf_test".to_string()),
            endpoint_timeout_ms: 1500,
            ..Default::default()
        };
        let config = HuggingFaceClientConfig::from(&cascade);
        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.api_token.as_deref(), Some("hf_test"));
        assert_eq!(config.timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_client_creation() {
        let config = HuggingFaceClientConfig {
            base_url: "https://api.test.com".to_string(),
            api_token: Some("hf_verylongtoken1234567890".to_string()),
            timeout: Duration::from_secs(2),
        };
        let client = HuggingFaceClient::new(config);
        assert!(client.is_ok());
        assert_eq!(client.unwrap().name(), "huggingface");
    }

    #[test]
    fn test_invalid_token_rejected() {
        let config = HuggingFaceClientConfig {
            base_url: "https://api.test.com".to_string(),
            api_token: Some("bad\ntoken".to_string()),
            timeout: Duration::from_secs(2),
        };
        assert!(matches!(
            HuggingFaceClient::new(config),
            Err(GenerationError::InvalidConfig(_))
        ));
    }
}
