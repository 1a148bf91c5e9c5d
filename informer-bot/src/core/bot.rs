//! Bot abstraction for sending and editing messages.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in `crate::telegram`.
//! Every text and caption is Telegram MarkdownV2; callers escape dynamic values.

use async_trait::async_trait;

use super::error::{BotError, Result};
use super::types::{Chat, Keyboard};

/// Abstraction for sending and editing messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message and returns its id.
    async fn send_message(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<String>;

    /// Sends a photo by URL with a caption and returns the message id.
    async fn send_photo(
        &self,
        chat: &Chat,
        photo_url: &str,
        caption: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<String>;

    /// Replaces the text (and keyboard) of an already-sent message. `message_id` is transport-specific.
    async fn edit_message(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<()>;

    /// Replaces only the inline keyboard of an already-sent message.
    async fn edit_keyboard(&self, chat: &Chat, message_id: &str, keyboard: &Keyboard)
        -> Result<()>;
}

/// Parses a message id string into an i32. Used by the edit calls.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::Bot(format!("Invalid message_id for edit: {}", s)))
}
