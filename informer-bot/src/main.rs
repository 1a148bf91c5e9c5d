//! informer-bot binary.

use anyhow::Result;
use clap::Parser;
use informer_bot::{list_users, load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Users { limit } => list_users(limit).await,
    }
}
