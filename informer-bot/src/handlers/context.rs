//! Shared dependencies of the conversation handlers.

use std::sync::Arc;
use std::time::Duration;

use opendota_client::OpenDotaClient;
use storage::{ProfileRepository, UserRepository};
use tracing::warn;

use crate::core::{Bot, BotError, Chat, HandlerError, Keyboard, Message, Result};
use crate::format::plain;
use crate::i18n::Locale;
use crate::session::SessionStore;

/// Deployment settings the handlers need.
#[derive(Debug, Clone)]
pub struct Settings {
    pub admins: Vec<i64>,
    pub source_code_url: String,
    /// Pause between two broadcast messages.
    pub broadcast_delay: Duration,
}

/// Everything a handler talks to. Cheap to clone.
#[derive(Clone)]
pub struct BotContext {
    pub bot: Arc<dyn Bot>,
    pub api: OpenDotaClient,
    pub users: UserRepository,
    pub profiles: ProfileRepository,
    pub sessions: Arc<dyn SessionStore>,
    pub settings: Arc<Settings>,
}

impl BotContext {
    /// Language the user picked; `None` when never chosen. Storage errors read as `None`.
    pub async fn stored_locale(&self, user_id: i64) -> Option<Locale> {
        match self.users.language(user_id).await {
            Ok(code) => code.as_deref().and_then(Locale::from_code),
            Err(e) => {
                warn!(user_id, error = %e, "Failed to read user language");
                None
            }
        }
    }

    pub async fn locale(&self, user_id: i64) -> Locale {
        self.stored_locale(user_id).await.unwrap_or_default()
    }

    pub fn is_admin(&self, user_id: i64) -> bool {
        self.settings.admins.contains(&user_id)
    }

    /// Bumps the user's request counter. Failures are logged, never surfaced.
    pub async fn count_request(&self, user_id: i64) {
        if let Err(e) = self.users.increment_requests(user_id).await {
            warn!(user_id, error = %e, "Failed to count request");
        }
    }

    /// Tells the sender that their update failed. Delivery problems are only logged.
    pub async fn report_failure(&self, message: &Message, err: &BotError) {
        let t = self.locale(message.user.id).await.texts();
        let text = match err {
            BotError::Handler(HandlerError::Unauthorized) => t.not_allowed,
            _ => t.unexpected_error,
        };
        if let Err(e) = self.say(&message.chat, text, None).await {
            warn!(user_id = message.user.id, error = %e, "Failed to report error to user");
        }
    }

    /// Sends static text, escaped for MarkdownV2.
    pub async fn say(&self, chat: &Chat, text: &str, keyboard: Option<&Keyboard>) -> Result<String> {
        self.bot.send_message(chat, &plain(text), keyboard).await
    }
}
