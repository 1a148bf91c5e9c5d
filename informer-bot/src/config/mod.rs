//! Bot configuration loaded from environment variables.

mod bot_config;

#[cfg(test)]
mod tests;

pub use bot_config::{BotConfig, DEFAULT_DATABASE_URL, DEFAULT_SOURCE_CODE_URL};
