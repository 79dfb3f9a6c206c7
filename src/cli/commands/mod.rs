//! CLI command implementations

pub mod ask;
pub mod config;
pub mod serve;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::huggingface::HuggingFaceClient;
use crate::domain::models::Config;
use crate::domain::ports::{NullTextGenerationClient, TextGenerationClient};
use crate::infrastructure::config::ConfigLoader;
use crate::services::ReplyPipeline;

pub(crate) fn load_config(path: Option<&Path>) -> Result<Config> {
    ConfigLoader::load_optional(path).context("Failed to load configuration")
}

/// Build the pipeline, with remote generation disabled when `offline` is set.
pub(crate) fn build_pipeline(config: &Config, offline: bool) -> Result<ReplyPipeline> {
    let client: Arc<dyn TextGenerationClient> = if offline {
        Arc::new(NullTextGenerationClient::new())
    } else {
        Arc::new(
            HuggingFaceClient::from_cascade_config(&config.cascade)
                .context("Failed to create inference client")?,
        )
    };
    Ok(ReplyPipeline::from_config(config, client))
}
