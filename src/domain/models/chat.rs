use serde::{Deserialize, Serialize};

use crate::domain::errors::{ChatError, ChatResult};

/// Reply used when everything else has failed, including request parsing.
pub const HARD_FALLBACK_REPLY: &str = "Hello! I'm your AI assistant. I can help you with questions about your medications or general health advice. How can I assist you today?";

/// Inbound chat request body: `{ "message": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Return the message if it has any content.
    pub fn validated_message(&self) -> ChatResult<&str> {
        if self.message.trim().is_empty() {
            return Err(ChatError::InvalidRequest("message is required".to_string()));
        }
        Ok(&self.message)
    }
}

/// Outbound chat reply body: `{ "reply": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    pub fn hard_fallback() -> Self {
        Self {
            reply: HARD_FALLBACK_REPLY.to_string(),
        }
    }
}

/// Which stage of the pipeline produced a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "stage")]
pub enum ReplySource {
    Knowledge,
    Model { endpoint: String },
    Contextual,
    HardFallback,
}

impl ReplySource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Knowledge => "knowledge",
            Self::Model { .. } => "model",
            Self::Contextual => "contextual",
            Self::HardFallback => "hard_fallback",
        }
    }
}

/// A finished reply together with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedReply {
    pub reply: ChatReply,
    pub source: ReplySource,
}

impl ResolvedReply {
    pub fn new(reply: impl Into<String>, source: ReplySource) -> Self {
        Self {
            reply: ChatReply {
                reply: reply.into(),
            },
            source,
        }
    }
}
