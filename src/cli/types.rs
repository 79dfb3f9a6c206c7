use clap::{Parser, Subcommand};

use super::commands::{ask::AskArgs, config::ConfigArgs, serve::ServeArgs};

/// Medication assistant reply service
#[derive(Parser)]
#[command(name = "medchat", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the chat HTTP server
    Serve(ServeArgs),

    /// Resolve a single message and print the reply
    Ask(AskArgs),

    /// Print the effective configuration
    Config(ConfigArgs),
}
