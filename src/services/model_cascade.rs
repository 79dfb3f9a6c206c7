//! Sequential cascade over remote text-generation endpoints.
//!
//! Endpoints are tried strictly one after another in priority order. Each
//! attempt is bounded by the per-endpoint timeout and by whatever remains of
//! the overall deadline. Failures of any kind are logged and the next
//! endpoint is tried; the first reply that survives cleaning and validation
//! is returned with the safety disclaimer appended.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::domain::errors::{ChatError, ChatResult};
use crate::domain::models::{CascadeConfig, ModelEndpoint};
use crate::domain::ports::TextGenerationClient;

/// Appended to every model-generated reply.
pub const SAFETY_DISCLAIMER: &str = "Please note: this is general information, not medical advice. \
    Always consult your healthcare provider before making decisions about your medications.";

/// Non-ASCII characters stripped from the start of generated text, on top
/// of ASCII punctuation.
const LEADING_SEPARATORS: &[char] = &['\u{2014}', '\u{2013}', '\u{2026}', '\u{201C}', '\u{201D}'];

fn is_leading_separator(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation() || LEADING_SEPARATORS.contains(&c)
}

/// A validated reply from one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeReply {
    pub endpoint: String,
    pub reply: String,
}

/// Calls the configured endpoints in order until one yields a usable reply.
pub struct ModelCascade {
    client: Arc<dyn TextGenerationClient>,
    endpoints: Vec<ModelEndpoint>,
    endpoint_timeout: Duration,
    deadline: Duration,
    min_reply_chars: usize,
}

impl ModelCascade {
    pub fn new(client: Arc<dyn TextGenerationClient>, config: &CascadeConfig) -> Self {
        Self {
            client,
            endpoints: config.endpoints.clone(),
            endpoint_timeout: config.endpoint_timeout(),
            deadline: config.deadline(),
            min_reply_chars: config.min_reply_chars,
        }
    }

    pub fn endpoints(&self) -> &[ModelEndpoint] {
        &self.endpoints
    }

    /// Try every endpoint in order; `None` once all are exhausted or the
    /// deadline has passed.
    pub async fn try_cascade(&self, message: &str) -> Option<CascadeReply> {
        let deadline = Instant::now() + self.deadline;

        for endpoint in &self.endpoints {
            let now = Instant::now();
            if now >= deadline {
                warn!(
                    error = %ChatError::DeadlineExceeded,
                    "abandoning remaining endpoints"
                );
                return None;
            }
            let budget = self.endpoint_timeout.min(deadline - now);

            match self.attempt(endpoint, message, budget).await {
                Ok(reply) => {
                    info!(endpoint = endpoint.id(), "model endpoint produced a reply");
                    return Some(CascadeReply {
                        endpoint: endpoint.id().to_string(),
                        reply,
                    });
                }
                Err(err) => {
                    warn!(endpoint = endpoint.id(), error = %err, "endpoint attempt failed, trying next");
                }
            }
        }

        debug!(
            endpoints = self.endpoints.len(),
            "model cascade exhausted without a valid reply"
        );
        None
    }

    async fn attempt(
        &self,
        endpoint: &ModelEndpoint,
        message: &str,
        budget: Duration,
    ) -> ChatResult<String> {
        debug!(
            endpoint = endpoint.id(),
            client = self.client.name(),
            budget_ms = u64::try_from(budget.as_millis()).unwrap_or(u64::MAX),
            "calling model endpoint"
        );

        let raw = tokio::time::timeout(budget, self.client.generate(endpoint, message))
            .await
            .map_err(|_| ChatError::EndpointFailure {
                endpoint: endpoint.id().to_string(),
                reason: format!("timed out after {}ms", budget.as_millis()),
            })??;

        let text = endpoint
            .extract(&raw)
            .ok_or_else(|| ChatError::extraction(endpoint.id(), "unrecognized response shape"))?;

        let cleaned = clean_generated_text(&text, message);
        if cleaned.chars().count() <= self.min_reply_chars {
            return Err(ChatError::extraction(
                endpoint.id(),
                format!(
                    "reply too short ({} chars, need more than {})",
                    cleaned.chars().count(),
                    self.min_reply_chars
                ),
            ));
        }

        Ok(with_disclaimer(&cleaned))
    }
}

/// Remove an echo of the user's message, then leading separators and
/// surrounding whitespace.
///
/// ```
/// use medchat::services::model_cascade::clean_generated_text;
///
/// assert_eq!(
///     clean_generated_text("Is it safe? - Yes, usually.", "Is it safe?"),
///     "Yes, usually."
/// );
/// ```
pub fn clean_generated_text(text: &str, message: &str) -> String {
    let message = message.trim();
    let without_echo = if message.is_empty() {
        text.to_string()
    } else {
        text.replacen(message, "", 1)
    };

    without_echo
        .trim_start_matches(is_leading_separator)
        .trim()
        .to_string()
}

pub fn with_disclaimer(reply: &str) -> String {
    format!("{reply}\n\n{SAFETY_DISCLAIMER}")
}
