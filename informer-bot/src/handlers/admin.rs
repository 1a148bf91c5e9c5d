//! Admin commands in private chat: `/help`, `/statistics`, and `/sendall` with a confirmation step.

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use super::command::parse_command;
use super::context::BotContext;
use crate::core::{Chat, Handler, HandlerError, HandlerResponse, Message, Result};
use crate::format;
use crate::i18n::Locale;
use crate::keyboards::{confirm_keyboard, CallbackData};
use crate::session::DialogState;

/// Delivery result of a broadcast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub sent: usize,
    pub failed: usize,
}

/// Handles admin traffic; everything from non-admins is ignored, except broadcast
/// buttons, which are rejected as unauthorized.
pub struct AdminHandler {
    ctx: BotContext,
}

impl AdminHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    /// Sends `text` (already MarkdownV2) to every registered user, pausing between messages.
    #[instrument(skip(self, text))]
    pub async fn broadcast(&self, text: &str) -> Result<BroadcastReport> {
        let delay = self.ctx.settings.broadcast_delay;
        let mut report = BroadcastReport::default();
        for user_id in self.ctx.users.user_ids().await? {
            match self
                .ctx
                .bot
                .send_message(&Chat::private(user_id), text, None)
                .await
            {
                Ok(_) => report.sent += 1,
                Err(e) => {
                    warn!(user_id, error = %e, "Broadcast delivery failed");
                    report.failed += 1;
                }
            }
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
        info!(sent = report.sent, failed = report.failed, "Broadcast finished");
        Ok(report)
    }

    async fn on_callback(&self, message: &Message, data: CallbackData, locale: Locale) -> Result<()> {
        let ctx = &self.ctx;
        let chat = &message.chat;
        let user_id = message.user.id;
        let t = locale.texts();
        let session = ctx.sessions.get(user_id).await;
        ctx.sessions.clear(user_id).await;

        if data == CallbackData::BroadcastCancel {
            ctx.say(chat, t.broadcast_cancelled, None).await?;
            return Ok(());
        }
        let (DialogState::AwaitingBroadcastConfirm, Some(text)) =
            (session.state, session.broadcast_text)
        else {
            ctx.say(chat, t.session_expired, None).await?;
            return Ok(());
        };

        ctx.say(chat, t.broadcast_started, None).await?;
        let report = match self.broadcast(&format::plain(&text)).await {
            Ok(report) => report,
            Err(e) => {
                error!(error = %e, "Broadcast aborted");
                ctx.say(chat, t.unexpected_error, None).await?;
                return Ok(());
            }
        };
        ctx.bot
            .send_message(
                chat,
                &format::format_broadcast_done(report.sent, report.failed, locale),
                None,
            )
            .await?;
        Ok(())
    }

    async fn on_text(&self, message: &Message, text: &str, locale: Locale) -> Result<HandlerResponse> {
        let ctx = &self.ctx;
        let chat = &message.chat;
        let user_id = message.user.id;
        let t = locale.texts();

        match parse_command(text).map(|(command, _)| command) {
            Some("/help") => {
                ctx.say(chat, t.admin_help, None).await?;
            }
            Some("/statistics") => {
                let stats = ctx.users.stats().await?;
                let users = ctx.users.list_users().await?;
                ctx.bot
                    .send_message(chat, &format::format_statistics(&stats, &users, locale), None)
                    .await?;
            }
            Some("/sendall") => {
                ctx.sessions
                    .set_state(user_id, DialogState::AwaitingBroadcastText)
                    .await;
                ctx.say(chat, t.broadcast_prompt, None).await?;
            }
            Some(_) => return Ok(HandlerResponse::Ignore),
            None => {
                if ctx.sessions.get(user_id).await.state != DialogState::AwaitingBroadcastText {
                    return Ok(HandlerResponse::Ignore);
                }
                let broadcast_text = text.to_string();
                ctx.sessions
                    .update(
                        user_id,
                        Box::new(move |s| {
                            s.state = DialogState::AwaitingBroadcastConfirm;
                            s.broadcast_text = Some(broadcast_text);
                        }),
                    )
                    .await;
                ctx.bot
                    .send_message(
                        chat,
                        &format::format_broadcast_confirm(text, locale),
                        Some(&confirm_keyboard(locale)),
                    )
                    .await?;
            }
        }
        Ok(HandlerResponse::Stop)
    }
}

#[async_trait]
impl Handler for AdminHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let user_id = message.user.id;
        let broadcast_button = message
            .is_callback()
            .then(|| CallbackData::parse(&message.content))
            .flatten()
            .filter(|d| {
                matches!(d, CallbackData::BroadcastConfirm | CallbackData::BroadcastCancel)
            });

        if !self.ctx.is_admin(user_id) {
            if broadcast_button.is_some() {
                warn!(user_id, "Broadcast button pressed by non-admin");
                return Err(HandlerError::Unauthorized.into());
            }
            return Ok(HandlerResponse::Ignore);
        }

        let locale = self.ctx.locale(user_id).await;
        if let Some(data) = broadcast_button {
            info!(user_id, callback = %data, "step: admin broadcast decision");
            self.on_callback(message, data, locale).await?;
            return Ok(HandlerResponse::Stop);
        }
        match message.text() {
            Some(text) if message.chat.is_private() => self.on_text(message, text, locale).await,
            _ => Ok(HandlerResponse::Ignore),
        }
    }
}
