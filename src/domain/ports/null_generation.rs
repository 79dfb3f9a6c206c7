//! Null text generation client.
//!
//! Used when the model cascade should be skipped (offline runs) but the
//! pipeline still needs a TextGenerationClient.

use async_trait::async_trait;
use serde_json::Value;

use super::text_generation::TextGenerationClient;
use crate::domain::errors::{ChatError, ChatResult};
use crate::domain::models::ModelEndpoint;

/// A client whose every call fails, so the cascade always falls through.
#[derive(Debug, Clone, Default)]
pub struct NullTextGenerationClient;

impl NullTextGenerationClient {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextGenerationClient for NullTextGenerationClient {
    fn name(&self) -> &'static str {
        "null"
    }

    async fn generate(&self, endpoint: &ModelEndpoint, _message: &str) -> ChatResult<Value> {
        Err(ChatError::EndpointFailure {
            endpoint: endpoint.id().to_string(),
            reason: "remote generation disabled".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::GenerationParameters;

    #[tokio::test]
    async fn test_null_client_always_fails() {
        let client = NullTextGenerationClient::new();
        let endpoint = ModelEndpoint::new("gpt2", GenerationParameters::default());
        let result = client.generate(&endpoint, "hello").await;
        assert!(matches!(result, Err(ChatError::EndpointFailure { .. })));
        assert_eq!(client.name(), "null");
    }
}
