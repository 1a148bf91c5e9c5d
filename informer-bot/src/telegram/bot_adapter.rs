//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code talks to Telegram;
//! tests substitute another Bot impl.

use crate::core::{parse_message_id, Bot as CoreBot, BotError, ButtonKind, Chat, Keyboard, Result};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, MessageId, ParseMode,
};

/// Converts a core keyboard; URL buttons must carry valid URLs.
pub fn to_markup(keyboard: &Keyboard) -> Result<InlineKeyboardMarkup> {
    let rows = keyboard
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|button| match &button.kind {
                    ButtonKind::Callback(data) => Ok(InlineKeyboardButton::callback(
                        button.text.clone(),
                        data.clone(),
                    )),
                    ButtonKind::Url(url) => reqwest::Url::parse(url)
                        .map(|url| InlineKeyboardButton::url(button.text.clone(), url))
                        .map_err(|e| BotError::Bot(format!("Invalid button URL {}: {}", url, e))),
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(InlineKeyboardMarkup::new(rows))
}

fn request_error(e: teloxide::RequestError) -> BotError {
    BotError::Bot(e.to_string())
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait. All text is MarkdownV2.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<String> {
        let mut request = self
            .bot
            .send_message(ChatId(chat.id), text)
            .parse_mode(ParseMode::MarkdownV2);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(to_markup(keyboard)?);
        }
        let sent = request.await.map_err(request_error)?;
        Ok(sent.id.to_string())
    }

    async fn send_photo(
        &self,
        chat: &Chat,
        photo_url: &str,
        caption: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<String> {
        let url = reqwest::Url::parse(photo_url)
            .map_err(|e| BotError::Bot(format!("Invalid photo URL {}: {}", photo_url, e)))?;
        let mut request = self
            .bot
            .send_photo(ChatId(chat.id), InputFile::url(url))
            .caption(caption)
            .parse_mode(ParseMode::MarkdownV2);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(to_markup(keyboard)?);
        }
        let sent = request.await.map_err(request_error)?;
        Ok(sent.id.to_string())
    }

    async fn edit_message(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<()> {
        let id = parse_message_id(message_id)?;
        let mut request = self
            .bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text)
            .parse_mode(ParseMode::MarkdownV2);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(to_markup(keyboard)?);
        }
        request.await.map_err(request_error)?;
        Ok(())
    }

    async fn edit_keyboard(&self, chat: &Chat, message_id: &str, keyboard: &Keyboard) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_reply_markup(ChatId(chat.id), MessageId(id))
            .reply_markup(to_markup(keyboard)?)
            .await
            .map_err(request_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Button;

    #[test]
    fn test_to_markup_keeps_layout() {
        let keyboard = Keyboard::new()
            .row(vec![Button::callback("<<", "page:0"), Button::callback("2/10", "noop")])
            .row(vec![Button::url("Steam", "https://steamcommunity.com/id/test/")]);

        let markup = to_markup(&keyboard).unwrap();

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[0][1].text, "2/10");
        assert_eq!(markup.inline_keyboard[1][0].text, "Steam");
    }

    #[test]
    fn test_to_markup_rejects_bad_url() {
        let keyboard = Keyboard::new().row(vec![Button::url("Source", "not a url")]);
        assert!(to_markup(&keyboard).is_err());
    }
}
