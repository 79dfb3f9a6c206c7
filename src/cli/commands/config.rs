//! Implementation of the `medchat config` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to a YAML config file
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

/// Effective configuration with the API token redacted.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ConfigOutput {
    config: Config,
}

impl CommandOutput for ConfigOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.config).unwrap_or_default()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or_default()
    }
}

pub fn execute(args: ConfigArgs, json_mode: bool) -> Result<()> {
    let config = super::load_config(args.config.as_deref())
        .context("Configuration is invalid")?;
    output(
        &ConfigOutput {
            config: config.redacted(),
        },
        json_mode,
    );
    Ok(())
}
