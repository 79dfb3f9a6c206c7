//! Medchat - Medication Assistant Reply Service
//!
//! Medchat answers a single free-text message from a medication-tracking
//! user. Every message gets a reply: a curated knowledge answer when one
//! applies, otherwise text from a cascade of hosted language models, and
//! finally a rule-based conversational fallback.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors and the text-generation port
//! - **Service Layer** (`services`): The reply stages and the pipeline that orders them
//! - **Adapters** (`adapters`): The hosted inference client
//! - **Infrastructure Layer** (`infrastructure`): Config, logging and the HTTP boundary
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use medchat::{ChatRequest, Config, NullTextGenerationClient, ReplyPipeline};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let pipeline = ReplyPipeline::from_config(
//!     &Config::default(),
//!     Arc::new(NullTextGenerationClient::new()),
//! );
//! let reply = pipeline.resolve(&ChatRequest::new("Can I take aspirin?")).await?;
//! println!("{}", reply.reply);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::huggingface::{GenerationError, HuggingFaceClient, HuggingFaceClientConfig};
pub use domain::models::{
    CascadeConfig, ChatReply, ChatRequest, Config, LoggingConfig, ModelEndpoint, ReplySource,
    ResolvedReply, ServerConfig, HARD_FALLBACK_REPLY,
};
pub use domain::ports::{NullTextGenerationClient, TextGenerationClient};
pub use domain::{ChatError, ChatResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::http::{build_router, ChatHttpServer};
pub use services::{ContextualFallback, KnowledgeMatcher, ModelCascade, ReplyPipeline};
