use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::errors::ChatError;

/// Errors that can occur when calling a hosted inference endpoint
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The service answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// The model is still loading and the service refused to wait
    #[error("Model is loading: {0}")]
    ModelLoading(String),

    /// Network error occurred during request
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request timed out waiting for response
    #[error("Timeout waiting for response")]
    Timeout,

    /// Response body was not valid JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client could not be constructed
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl GenerationError {
    /// Map an error response to an error variant.
    ///
    /// A 503 whose body mentions loading is reported as `ModelLoading`.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        if status == StatusCode::SERVICE_UNAVAILABLE && body.to_lowercase().contains("loading") {
            Self::ModelLoading(body)
        } else {
            Self::Http { status, body }
        }
    }

    pub fn into_chat_error(self, endpoint: &str) -> ChatError {
        ChatError::EndpointFailure {
            endpoint: endpoint.to_string(),
            reason: self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_loading() {
        let error = GenerationError::from_status(
            StatusCode::SERVICE_UNAVAILABLE,
            r#"{"error":"Model microsoft/DialoGPT-medium is currently loading"}"#.to_string(),
        );
        assert!(matches!(error, GenerationError::ModelLoading(_)));
    }

    #[test]
    fn test_from_status_other() {
        let error = GenerationError::from_status(StatusCode::SERVICE_UNAVAILABLE, "busy".to_string());
        assert!(matches!(
            error,
            GenerationError::Http {
                status: StatusCode::SERVICE_UNAVAILABLE,
                ..
            }
        ));

        let error = GenerationError::from_status(StatusCode::UNAUTHORIZED, "bad token".to_string());
        assert_eq!(error.to_string(), "HTTP 401 Unauthorized: bad token");
    }

    #[test]
    fn test_into_chat_error() {
        let error = GenerationError::Timeout.into_chat_error("gpt2");
        match error {
            ChatError::EndpointFailure { endpoint, reason } => {
                assert_eq!(endpoint, "gpt2");
                assert_eq!(reason, "Timeout waiting for response");
            }
            other => panic!("Expected EndpointFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_from_serde_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error: GenerationError = serde_error.into();
        assert!(matches!(error, GenerationError::Decode(_)));
    }
}
