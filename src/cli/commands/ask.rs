//! Implementation of the `medchat ask` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{ChatRequest, ReplySource};
use crate::infrastructure::logging::LoggerImpl;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The message to resolve
    pub message: String,

    /// Path to a YAML config file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Disable remote model calls
    #[arg(long)]
    pub offline: bool,
}

#[derive(Debug, Serialize)]
pub struct AskOutput {
    pub reply: String,
    pub source: ReplySource,
}

impl CommandOutput for AskOutput {
    fn to_human(&self) -> String {
        self.reply.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: AskArgs, json_mode: bool) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let _logger = LoggerImpl::init(&config.logging)?;

    let pipeline = super::build_pipeline(&config, args.offline)?;
    let resolved = pipeline
        .resolve_with_source(&ChatRequest::new(args.message))
        .await?;

    output(
        &AskOutput {
            reply: resolved.reply.reply,
            source: resolved.source,
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_output_json() {
        let out = AskOutput {
            reply: "Hi".to_string(),
            source: ReplySource::Contextual,
        };
        let value = out.to_json();
        assert_eq!(value["reply"], "Hi");
        assert_eq!(value["source"]["stage"], "contextual");
        assert_eq!(out.to_human(), "Hi");
    }
}
