//! Reply pipeline orchestrator.
//!
//! Strict priority chain: knowledge base, then model cascade, then the
//! contextual fallback. Exactly one stage produces the reply.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::errors::ChatResult;
use crate::domain::models::{ChatReply, ChatRequest, Config, ReplySource, ResolvedReply};
use crate::domain::ports::TextGenerationClient;
use crate::services::contextual_fallback::ContextualFallback;
use crate::services::knowledge_matcher::KnowledgeMatcher;
use crate::services::model_cascade::ModelCascade;

/// Composes the three reply stages. Holds only read-only configuration.
pub struct ReplyPipeline {
    knowledge: KnowledgeMatcher,
    cascade: ModelCascade,
    contextual: ContextualFallback,
}

impl ReplyPipeline {
    pub const fn new(
        knowledge: KnowledgeMatcher,
        cascade: ModelCascade,
        contextual: ContextualFallback,
    ) -> Self {
        Self {
            knowledge,
            cascade,
            contextual,
        }
    }

    /// Pipeline with the builtin rule sets and the configured endpoints.
    pub fn from_config(config: &Config, client: Arc<dyn TextGenerationClient>) -> Self {
        Self::new(
            KnowledgeMatcher::default(),
            ModelCascade::new(client, &config.cascade),
            ContextualFallback::default(),
        )
    }

    pub fn endpoint_count(&self) -> usize {
        self.cascade.endpoints().len()
    }

    /// Resolve a reply, fails only with `InvalidRequest`.
    pub async fn resolve(&self, request: &ChatRequest) -> ChatResult<ChatReply> {
        self.resolve_with_source(request)
            .await
            .map(|resolved| resolved.reply)
    }

    #[instrument(skip_all, fields(message_len = request.message.len()))]
    pub async fn resolve_with_source(&self, request: &ChatRequest) -> ChatResult<ResolvedReply> {
        let message = request.validated_message()?;

        let resolved = if let Some(answer) = self.knowledge.find_match(message) {
            ResolvedReply::new(answer, ReplySource::Knowledge)
        } else if let Some(model) = self.cascade.try_cascade(message).await {
            ResolvedReply::new(
                model.reply,
                ReplySource::Model {
                    endpoint: model.endpoint,
                },
            )
        } else {
            ResolvedReply::new(self.contextual.fallback(message), ReplySource::Contextual)
        };

        info!(source = resolved.source.as_str(), "reply resolved");
        Ok(resolved)
    }
}
