//! shortlink-bot: entry point. Wires config, link client, conversation chain, and the REPL.

use anyhow::Result;
use clap::Parser;

mod assembly;
mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => assembly::run_bot(token).await,
    }
}
