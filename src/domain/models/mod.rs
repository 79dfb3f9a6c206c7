//! Domain models for the reply pipeline

pub mod chat;
pub mod config;
pub mod endpoint;
pub mod rules;

pub use chat::{ChatReply, ChatRequest, ReplySource, ResolvedReply, HARD_FALLBACK_REPLY};
pub use config::{CascadeConfig, Config, LogFormat, LoggingConfig, ServerConfig};
pub use endpoint::{
    GenerationOptions, GenerationParameters, GenerationRequest, ModelEndpoint, ResponseFormat,
};
pub use rules::{normalize_message, ContextualRule, KnowledgeRule, RuleSet};
