//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; [`HandlerError`] is used for handler failures.

use thiserror::Error;

/// Top-level error (database, bot transport, stats API, handler).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("OpenDota error: {0}")]
    Api(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Unauthorized access")]
    Unauthorized,
}

impl From<storage::StorageError> for BotError {
    fn from(e: storage::StorageError) -> Self {
        BotError::Database(e.to_string())
    }
}

impl From<opendota_client::ClientError> for BotError {
    fn from(e: opendota_client::ClientError) -> Self {
        BotError::Api(e.to_string())
    }
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
