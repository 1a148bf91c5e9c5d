//! Message type for the core model: a text message or a pressed inline button.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// What produced the incoming [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Text typed by the user; `content` is the text.
    Text,
    /// Inline keyboard button press; `content` is the callback data.
    Callback,
}

/// A single incoming event with user, chat and content.
///
/// For callbacks `id` is the id of the bot message that carries the keyboard
/// (empty when Telegram no longer exposes it), so handlers can edit it in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn is_text(&self) -> bool {
        self.kind == MessageKind::Text
    }

    pub fn is_callback(&self) -> bool {
        self.kind == MessageKind::Callback
    }

    /// Trimmed text when this is a text message with non-empty content.
    pub fn text(&self) -> Option<&str> {
        let text = self.content.trim();
        (self.is_text() && !text.is_empty()).then_some(text)
    }
}
