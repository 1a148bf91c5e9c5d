//! Conversion of teloxide updates into core types.

use crate::core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};

/// Telegram user → core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl ToCoreUser for TelegramUserWrapper<'_> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_group() {
        "group"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}

fn to_core_chat(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: chat_type(chat).to_string(),
    }
}

fn anonymous_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

/// Telegram message → core [`Message`] of kind [`MessageKind::Text`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl ToCoreMessage for TelegramMessageWrapper<'_> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(anonymous_user),
            chat: to_core_chat(&self.0.chat),
            content: self.0.text().unwrap_or("").to_string(),
            kind: MessageKind::Text,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Telegram callback query → core [`Message`] of kind [`MessageKind::Callback`].
///
/// The id and chat come from the message carrying the keyboard. When Telegram no longer
/// exposes that message, the id is empty and the chat is the user's private chat.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl ToCoreMessage for TelegramCallbackWrapper<'_> {
    fn to_core(&self) -> Message {
        let user = TelegramUserWrapper(&self.0.from).to_core();
        let (id, chat) = match &self.0.message {
            Some(origin) => (origin.id().to_string(), to_core_chat(origin.chat())),
            None => (String::new(), Chat::private(user.id)),
        };
        Message {
            id,
            chat,
            content: self.0.data.clone().unwrap_or_default(),
            kind: MessageKind::Callback,
            created_at: chrono::Utc::now(),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::UserId;

    fn tg_user(id: u64, last_name: Option<&str>, username: Option<&str>) -> teloxide::types::User {
        teloxide::types::User {
            id: UserId(id),
            is_bot: false,
            first_name: "Иван".to_string(),
            last_name: last_name.map(str::to_string),
            username: username.map(str::to_string),
            language_code: Some("ru".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        }
    }

    #[test]
    fn test_user_conversion_keeps_names() {
        let full = TelegramUserWrapper(&tg_user(105248644, Some("Петров"), Some("ivan_p"))).to_core();
        assert_eq!(full.id, 105248644);
        assert_eq!(full.username.as_deref(), Some("ivan_p"));
        assert_eq!(full.display_name(), "Иван Петров");

        let bare = TelegramUserWrapper(&tg_user(7, None, None)).to_core();
        assert_eq!(bare.first_name.as_deref(), Some("Иван"));
        assert!(bare.last_name.is_none() && bare.username.is_none());
    }

    #[test]
    fn test_anonymous_user_has_no_names() {
        let user = anonymous_user();
        assert_eq!(user.id, 0);
        assert!(user.first_name.is_none());
    }
}
