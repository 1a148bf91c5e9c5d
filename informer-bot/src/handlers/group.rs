//! Commands in group chats: `/start`, `/help`, `/getaccount <id>`, `/getmatch <id>`.
//! Anything else in a group is left alone.

use async_trait::async_trait;
use tracing::{info, instrument};

use super::command::parse_command;
use super::context::BotContext;
use super::flows;
use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::format;

pub struct GroupHandler {
    ctx: BotContext,
}

impl GroupHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Handler for GroupHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.chat.is_group() {
            return Ok(HandlerResponse::Ignore);
        }
        let Some((command, arg)) = message.text().and_then(parse_command) else {
            return Ok(HandlerResponse::Ignore);
        };
        let ctx = &self.ctx;
        let chat = &message.chat;
        let user_id = message.user.id;
        let locale = ctx.locale(user_id).await;
        let t = locale.texts();

        match command {
            "/start" => {
                ctx.bot
                    .send_message(chat, &format::welcome(&message.user.display_name(), locale), None)
                    .await?;
            }
            "/help" => {
                ctx.say(chat, t.help, None).await?;
            }
            "/getaccount" => {
                info!(user_id, chat_id = chat.id, arg, "step: group account lookup");
                if arg.is_empty() {
                    ctx.say(chat, t.getaccount_usage, None).await?;
                } else if let Some(account_id) = flows::read_id(ctx, chat, arg, locale).await? {
                    ctx.count_request(user_id).await;
                    flows::show_account(ctx, chat, locale, account_id).await?;
                }
            }
            "/getmatch" => {
                info!(user_id, chat_id = chat.id, arg, "step: group match lookup");
                if arg.is_empty() {
                    ctx.say(chat, t.getmatch_usage, None).await?;
                } else if let Some(match_id) = flows::read_id(ctx, chat, arg, locale).await? {
                    ctx.count_request(user_id).await;
                    flows::show_match(ctx, chat, user_id, locale, match_id).await?;
                }
            }
            _ => return Ok(HandlerResponse::Ignore),
        }
        Ok(HandlerResponse::Stop)
    }
}
