//! Hosted inference API adapter.
//!
//! Implements [`TextGenerationClient`](crate::domain::ports::TextGenerationClient)
//! over HTTP for services that accept `{ inputs, parameters, options }`.

pub mod client;
pub mod error;

pub use client::{HuggingFaceClient, HuggingFaceClientConfig};
pub use error::GenerationError;
