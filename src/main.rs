//! Medchat CLI entry point.

use clap::Parser;

use medchat::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => medchat::cli::commands::serve::execute(args).await,
        Commands::Ask(args) => medchat::cli::commands::ask::execute(args, cli.json).await,
        Commands::Config(args) => medchat::cli::commands::config::execute(args, cli.json),
    };

    if let Err(err) = result {
        medchat::cli::handle_error(err, cli.json);
    }
}
