//! Domain errors for the medchat reply pipeline.
//!
//! None of these ever reach a caller of the HTTP boundary. They exist so that
//! each layer can say precisely why it gave up before the next layer takes over.

use thiserror::Error;

/// Errors raised while resolving a chat reply.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The inbound request had no usable message.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A remote text-generation endpoint could not be reached or answered
    /// with a non-success status.
    #[error("Endpoint {endpoint} failed: {reason}")]
    EndpointFailure { endpoint: String, reason: String },

    /// The endpoint answered, but no usable text could be taken from it.
    #[error("Could not extract a reply from {endpoint}: {reason}")]
    ExtractionFailure { endpoint: String, reason: String },

    /// The overall cascade deadline elapsed before an endpoint succeeded.
    #[error("Cascade deadline exceeded")]
    DeadlineExceeded,

    /// Anything the layers above did not anticipate.
    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl ChatError {
    /// Returns true if the error is absorbed inside the model cascade.
    ///
    /// ```
    /// use medchat::domain::errors::ChatError;
    ///
    /// assert!(ChatError::DeadlineExceeded.is_recoverable());
    /// assert!(!ChatError::InvalidRequest("empty".into()).is_recoverable());
    /// ```
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EndpointFailure { .. } | Self::ExtractionFailure { .. } | Self::DeadlineExceeded
        )
    }

    pub(crate) fn extraction(endpoint: &str, reason: impl Into<String>) -> Self {
        Self::ExtractionFailure {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unexpected(format!("serialization error: {err}"))
    }
}
