//! Port trait definitions (Hexagonal Architecture)
//!
//! - TextGenerationClient: remote text-generation calls made by the model cascade
//! - NullTextGenerationClient: always-failing client for offline runs

pub mod null_generation;
pub mod text_generation;

pub use null_generation::NullTextGenerationClient;
pub use text_generation::TextGenerationClient;
