//! Inline button presses.

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::context::BotContext;
use super::flows;
use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::format;
use crate::keyboards::{back_keyboard, language_keyboard, start_keyboard, CallbackData};
use crate::session::DialogState;

pub struct CallbackHandler {
    ctx: BotContext,
}

impl CallbackHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    /// Prompts for input and switches the session to `state`. Counts as a request.
    async fn ask(&self, message: &Message, prompt: &str, state: DialogState) -> Result<()> {
        let user_id = message.user.id;
        self.ctx.sessions.set_state(user_id, state).await;
        self.ctx.count_request(user_id).await;
        self.ctx.say(&message.chat, prompt, None).await?;
        Ok(())
    }
}

#[async_trait]
impl Handler for CallbackHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_callback() {
            return Ok(HandlerResponse::Ignore);
        }
        let Some(data) = CallbackData::parse(&message.content) else {
            warn!(user_id = message.user.id, data = %message.content, "Unknown callback data");
            return Ok(HandlerResponse::Stop);
        };

        let ctx = &self.ctx;
        let chat = &message.chat;
        let user = &message.user;
        let message_id = message.id.as_str();
        let locale = ctx.locale(user.id).await;
        let t = locale.texts();
        info!(user_id = user.id, callback = %data, "step: callback");

        match data {
            CallbackData::Back => flows::show_main_menu(ctx, chat, user).await?,
            CallbackData::ChangeLanguage => {
                ctx.say(chat, t.choose_language, Some(&language_keyboard()))
                    .await?;
            }
            CallbackData::SelectLanguage(selected) => {
                ctx.users.save_language(user.id, selected.code()).await?;
                info!(user_id = user.id, language = selected.code(), "Language saved");
                ctx.say(
                    chat,
                    selected.texts().language_saved,
                    Some(&back_keyboard(selected)),
                )
                .await?;
            }
            CallbackData::AccountInfo => {
                self.ask(message, t.send_account_id, DialogState::AwaitingAccountId)
                    .await?
            }
            CallbackData::MatchInfo => {
                self.ask(message, t.send_match_id, DialogState::AwaitingMatchId)
                    .await?
            }
            CallbackData::AccountByNick => {
                self.ask(message, t.send_nickname, DialogState::AwaitingNickname)
                    .await?
            }
            CallbackData::MatchPlayers => {
                flows::open_players(ctx, chat, message_id, user.id, locale).await?
            }
            CallbackData::Page(page) => {
                flows::show_players_page(ctx, chat, message_id, user.id, locale, page).await?
            }
            CallbackData::Carousel(page) => {
                flows::show_carousel(ctx, chat, message_id, user.id, locale, page).await?
            }
            CallbackData::AccountId(account_id) => {
                flows::show_account(ctx, chat, locale, account_id).await?
            }
            CallbackData::StartPage(page) => {
                let keyboard = start_keyboard(page, locale, &ctx.settings.source_code_url);
                let edited = !message_id.is_empty()
                    && ctx.bot.edit_keyboard(chat, message_id, &keyboard).await.is_ok();
                if !edited {
                    ctx.bot
                        .send_message(
                            chat,
                            &format::welcome(&user.display_name(), locale),
                            Some(&keyboard),
                        )
                        .await?;
                }
            }
            CallbackData::UserProfile => flows::show_profile(ctx, chat, user, locale).await?,
            CallbackData::CheckAccount => {
                flows::show_linked_account(ctx, chat, user.id, locale).await?
            }
            CallbackData::LinkAccount => {
                ctx.sessions
                    .set_state(user.id, DialogState::AwaitingLinkAccountId)
                    .await;
                ctx.say(chat, t.send_link_account_id, None).await?;
            }
            CallbackData::UnlinkAccount => {
                flows::unlink_account(ctx, chat, user.id, locale).await?
            }
            CallbackData::BroadcastConfirm | CallbackData::BroadcastCancel => {
                return Ok(HandlerResponse::Ignore);
            }
            CallbackData::Noop => {}
        }
        Ok(HandlerResponse::Stop)
    }
}
