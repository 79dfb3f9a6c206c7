//! Text generation port.
//!
//! The model cascade talks to remote services only through this trait, so
//! the transport can be swapped (or stubbed in tests) without touching the
//! cascade's ordering, cleaning and validation logic.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::ChatResult;
use crate::domain::models::ModelEndpoint;

/// Trait for clients that call a remote text-generation endpoint.
#[async_trait]
pub trait TextGenerationClient: Send + Sync {
    /// Client name (e.g., "huggingface", "stub").
    fn name(&self) -> &'static str;

    /// Send `endpoint`'s request body for `message` and return the raw JSON
    /// response.
    ///
    /// Non-success statuses, network errors and undecodable bodies are all
    /// reported as [`ChatError::EndpointFailure`](crate::domain::errors::ChatError::EndpointFailure).
    async fn generate(&self, endpoint: &ModelEndpoint, message: &str) -> ChatResult<Value>;
}
