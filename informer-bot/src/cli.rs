//! Command line: run the bot or inspect the user table.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use storage::UserRepository;

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "informer-bot")]
#[command(about = "Dota 2 informer Telegram bot: run, users", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print registered users, most active first (DATABASE_URL from env).
    Users {
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Loads config from env; `token` overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// Handle the users command.
pub async fn list_users(limit: usize) -> Result<()> {
    let database_url = BotConfig::database_url_from_env();
    let repo = UserRepository::new(&database_url)
        .await
        .with_context(|| format!("Open database {}", database_url))?;
    let users = repo.list_users().await.context("Query users")?;

    if users.is_empty() {
        println!("No users (database: {}).", database_url);
        return Ok(());
    }

    println!("{} user(s) (database: {}):\n", users.len(), database_url);
    println!(
        "{:<14} {:<24} {:<6} {:<10} {}",
        "tg_id", "name", "lang", "requests", "registered"
    );
    println!("{}", "-".repeat(80));

    for user in users.iter().take(limit) {
        println!(
            "{:<14} {:<24} {:<6} {:<10} {}",
            user.tg_id,
            user.name,
            user.language.as_deref().unwrap_or("-"),
            user.number_of_requests,
            user.created_at.format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}
