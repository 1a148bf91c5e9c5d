//! Text messages in private chats: `/start`, `/help` and the input the session waits for.

use async_trait::async_trait;
use tracing::{info, instrument};

use super::command::parse_command;
use super::context::BotContext;
use super::flows;
use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::session::DialogState;

pub struct PrivateHandler {
    ctx: BotContext,
}

impl PrivateHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Handler for PrivateHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.chat.is_private() {
            return Ok(HandlerResponse::Ignore);
        }
        let Some(text) = message.text() else {
            return Ok(HandlerResponse::Ignore);
        };
        let ctx = &self.ctx;
        let chat = &message.chat;
        let user_id = message.user.id;

        if let Some((command, _)) = parse_command(text) {
            match command {
                "/start" => flows::show_main_menu(ctx, chat, &message.user).await?,
                "/help" => {
                    let locale = ctx.locale(user_id).await;
                    ctx.say(chat, locale.texts().help, None).await?;
                }
                _ => {
                    let locale = ctx.locale(user_id).await;
                    ctx.say(chat, locale.texts().unknown_input, None).await?;
                }
            }
            return Ok(HandlerResponse::Stop);
        }

        let locale = ctx.locale(user_id).await;
        let state = ctx.sessions.get(user_id).await.state;
        info!(user_id, state = ?state, "step: private text");
        match state {
            DialogState::AwaitingAccountId => {
                if let Some(account_id) = flows::read_id(ctx, chat, text, locale).await? {
                    flows::show_account(ctx, chat, locale, account_id).await?;
                }
            }
            DialogState::AwaitingMatchId => {
                if let Some(match_id) = flows::read_id(ctx, chat, text, locale).await? {
                    flows::show_match(ctx, chat, user_id, locale, match_id).await?;
                }
            }
            DialogState::AwaitingNickname => {
                flows::search_accounts(ctx, chat, user_id, locale, text).await?;
            }
            DialogState::AwaitingLinkAccountId => {
                flows::link_account(ctx, chat, user_id, locale, text).await?;
            }
            DialogState::AwaitingBroadcastText | DialogState::AwaitingBroadcastConfirm => {
                return Ok(HandlerResponse::Ignore);
            }
            DialogState::Idle => {
                ctx.say(chat, locale.texts().unknown_input, None).await?;
            }
        }
        Ok(HandlerResponse::Stop)
    }
}
