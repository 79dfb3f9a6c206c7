//! Reply pipeline services
//!
//! Leaf-first: the knowledge matcher, the model cascade and the contextual
//! fallback, composed by the reply pipeline.

pub mod contextual_fallback;
pub mod knowledge_matcher;
pub mod model_cascade;
pub mod reply_pipeline;

pub use contextual_fallback::ContextualFallback;
pub use knowledge_matcher::KnowledgeMatcher;
pub use model_cascade::{CascadeReply, ModelCascade, SAFETY_DISCLAIMER};
pub use reply_pipeline::ReplyPipeline;
