//! Conversation steps shared by private, group and callback handlers.

use tracing::{error, info, instrument, warn};

use super::context::BotContext;
use crate::core::{Chat, Keyboard, Result, User};
use crate::format::{self, code, fill};
use crate::i18n::Locale;
use crate::keyboards::{
    account_keyboard, accounts_keyboard, back_keyboard, language_keyboard, match_keyboard,
    players_keyboard, profile_keyboard, start_keyboard,
};
use crate::session::DialogState;
use crate::validation::{parse_positive_id, IdError};

/// Localized text for an id that failed validation.
pub fn id_error_text(err: IdError, locale: Locale) -> &'static str {
    let t = locale.texts();
    match err {
        IdError::NotNumber => t.not_a_number,
        IdError::NotPositive => t.not_positive,
    }
}

/// Validates `text` as an id; on failure tells the user why and returns `None`.
pub async fn read_id(ctx: &BotContext, chat: &Chat, text: &str, locale: Locale) -> Result<Option<i64>> {
    match parse_positive_id(text) {
        Ok(id) => Ok(Some(id)),
        Err(e) => {
            info!(chat_id = chat.id, input = %text, error = %e, "Rejected id input");
            ctx.say(chat, id_error_text(e, locale), None).await?;
            Ok(None)
        }
    }
}

/// Language picker for users who never chose one, otherwise the welcome menu. Resets the session.
#[instrument(skip(ctx, chat, user), fields(user_id = user.id))]
pub async fn show_main_menu(ctx: &BotContext, chat: &Chat, user: &User) -> Result<()> {
    ctx.sessions.clear(user.id).await;
    match ctx.stored_locale(user.id).await {
        None => {
            ctx.say(
                chat,
                Locale::default().texts().choose_language,
                Some(&language_keyboard()),
            )
            .await?;
        }
        Some(locale) => {
            let keyboard = start_keyboard(1, locale, &ctx.settings.source_code_url);
            ctx.bot
                .send_message(
                    chat,
                    &format::welcome(&user.display_name(), locale),
                    Some(&keyboard),
                )
                .await?;
        }
    }
    Ok(())
}

/// Looks up an account and sends its card: photo with caption when an avatar exists, text otherwise.
#[instrument(skip(ctx, chat), fields(chat_id = chat.id))]
pub async fn show_account(ctx: &BotContext, chat: &Chat, locale: Locale, account_id: i64) -> Result<()> {
    let t = locale.texts();
    ctx.bot
        .send_message(
            chat,
            &fill(t.looking_for_account, &[("id", &code(account_id))]),
            None,
        )
        .await?;

    match ctx.api.account_overview(account_id).await {
        Ok(Some(overview)) => {
            let caption = format::format_account(&overview, locale);
            let keyboard = account_keyboard(overview.profile_url.as_deref(), locale);
            if let Some(avatar) = overview.avatar.as_deref() {
                match ctx.bot.send_photo(chat, avatar, &caption, Some(&keyboard)).await {
                    Ok(_) => {
                        info!(account_id, "Account card sent");
                        return Ok(());
                    }
                    Err(e) => warn!(account_id, error = %e, "Photo send failed, falling back to text"),
                }
            }
            ctx.bot.send_message(chat, &caption, Some(&keyboard)).await?;
            info!(account_id, "Account card sent");
        }
        Ok(None) => {
            info!(account_id, "Account has no public profile");
            ctx.say(chat, t.account_not_found, Some(&back_keyboard(locale)))
                .await?;
        }
        Err(e) => {
            error!(account_id, error = %e, "Account lookup failed");
            ctx.say(chat, t.unexpected_error, Some(&back_keyboard(locale)))
                .await?;
        }
    }
    Ok(())
}

/// Sends the match overview and remembers the match for the players pager.
#[instrument(skip(ctx, chat), fields(chat_id = chat.id))]
pub async fn show_match(
    ctx: &BotContext,
    chat: &Chat,
    user_id: i64,
    locale: Locale,
    match_id: i64,
) -> Result<()> {
    let t = locale.texts();
    ctx.bot
        .send_message(
            chat,
            &fill(t.looking_for_match, &[("id", &code(match_id))]),
            None,
        )
        .await?;

    match ctx.api.match_overview(match_id).await {
        Ok(overview) => {
            ctx.sessions
                .update(
                    user_id,
                    Box::new(move |s| {
                        s.match_id = Some(match_id);
                        s.players.clear();
                    }),
                )
                .await;
            ctx.bot
                .send_message(
                    chat,
                    &format::format_match_overview(&overview, locale),
                    Some(&match_keyboard(locale)),
                )
                .await?;
        }
        Err(e) if e.is_not_found() => {
            info!(match_id, "Match not found");
            ctx.say(chat, t.match_not_found, Some(&back_keyboard(locale)))
                .await?;
        }
        Err(e) => {
            error!(match_id, error = %e, "Match lookup failed");
            ctx.say(chat, t.unexpected_error, Some(&back_keyboard(locale)))
                .await?;
        }
    }
    Ok(())
}

/// Edits `message_id` in place; sends a new message when there is nothing to edit or the edit fails.
async fn edit_or_send(
    ctx: &BotContext,
    chat: &Chat,
    message_id: &str,
    text: &str,
    keyboard: &Keyboard,
) -> Result<()> {
    if !message_id.is_empty() {
        match ctx.bot.edit_message(chat, message_id, text, Some(keyboard)).await {
            Ok(()) => return Ok(()),
            Err(e) => warn!(chat_id = chat.id, message_id, error = %e, "Edit failed, sending new message"),
        }
    }
    ctx.bot.send_message(chat, text, Some(keyboard)).await?;
    Ok(())
}

/// Fetches the players of the remembered match and opens the pager on the first player.
#[instrument(skip(ctx, chat), fields(chat_id = chat.id))]
pub async fn open_players(
    ctx: &BotContext,
    chat: &Chat,
    message_id: &str,
    user_id: i64,
    locale: Locale,
) -> Result<()> {
    let t = locale.texts();
    let Some(match_id) = ctx.sessions.get(user_id).await.match_id else {
        ctx.say(chat, t.session_expired, Some(&back_keyboard(locale)))
            .await?;
        return Ok(());
    };

    let players = match ctx.api.match_players(match_id).await {
        Ok(players) => players,
        Err(e) if e.is_not_found() => {
            ctx.say(chat, t.match_not_found, Some(&back_keyboard(locale)))
                .await?;
            return Ok(());
        }
        Err(e) => {
            error!(match_id, error = %e, "Players lookup failed");
            ctx.say(chat, t.unexpected_error, Some(&back_keyboard(locale)))
                .await?;
            return Ok(());
        }
    };
    if players.is_empty() {
        ctx.say(chat, t.no_players, Some(&back_keyboard(locale)))
            .await?;
        return Ok(());
    }

    info!(match_id, players = players.len(), "Players loaded");
    ctx.sessions
        .update(user_id, Box::new(move |s| s.players = players))
        .await;
    show_players_page(ctx, chat, message_id, user_id, locale, 0).await
}

/// One page of the players pager. Out-of-range pages answer "player not found".
#[instrument(skip(ctx, chat), fields(chat_id = chat.id))]
pub async fn show_players_page(
    ctx: &BotContext,
    chat: &Chat,
    message_id: &str,
    user_id: i64,
    locale: Locale,
    page: usize,
) -> Result<()> {
    let t = locale.texts();
    let players = ctx.sessions.get(user_id).await.players;
    if players.is_empty() {
        ctx.say(chat, t.session_expired, Some(&back_keyboard(locale)))
            .await?;
        return Ok(());
    }
    if page >= players.len() {
        ctx.say(chat, t.player_not_found, None).await?;
        return Ok(());
    }

    let text = format::format_player(&players, page, locale);
    let keyboard = players_keyboard(page, players.len(), locale);
    edit_or_send(ctx, chat, message_id, &text, &keyboard).await
}

/// Searches accounts by nickname and opens the carousel on its first page.
#[instrument(skip(ctx, chat), fields(chat_id = chat.id))]
pub async fn search_accounts(
    ctx: &BotContext,
    chat: &Chat,
    user_id: i64,
    locale: Locale,
    nickname: &str,
) -> Result<()> {
    let t = locale.texts();
    ctx.say(chat, t.searching_nickname, None).await?;

    let accounts = match ctx.api.search(nickname).await {
        Ok(accounts) => accounts,
        Err(e) => {
            error!(nickname, error = %e, "Nickname search failed");
            ctx.say(chat, t.unexpected_error, Some(&back_keyboard(locale)))
                .await?;
            return Ok(());
        }
    };
    info!(nickname, found = accounts.len(), "Nickname search done");

    let Some(keyboard) = accounts_keyboard(0, &accounts, locale) else {
        ctx.say(chat, t.no_accounts_found, Some(&back_keyboard(locale)))
            .await?;
        return Ok(());
    };
    ctx.sessions
        .update(user_id, Box::new(move |s| s.accounts = accounts))
        .await;
    ctx.say(chat, t.found_accounts, Some(&keyboard)).await?;
    Ok(())
}

/// Switches the carousel under `message_id` to `page`.
#[instrument(skip(ctx, chat), fields(chat_id = chat.id))]
pub async fn show_carousel(
    ctx: &BotContext,
    chat: &Chat,
    message_id: &str,
    user_id: i64,
    locale: Locale,
    page: usize,
) -> Result<()> {
    let t = locale.texts();
    let accounts = ctx.sessions.get(user_id).await.accounts;
    if accounts.is_empty() {
        ctx.say(chat, t.session_expired, Some(&back_keyboard(locale)))
            .await?;
        return Ok(());
    }
    let Some(keyboard) = accounts_keyboard(page, &accounts, locale) else {
        ctx.say(chat, t.no_accounts_found, None).await?;
        return Ok(());
    };

    if !message_id.is_empty() {
        match ctx.bot.edit_keyboard(chat, message_id, &keyboard).await {
            Ok(()) => return Ok(()),
            Err(e) => warn!(chat_id = chat.id, error = %e, "Carousel edit failed, sending new message"),
        }
    }
    ctx.say(chat, t.found_accounts, Some(&keyboard)).await?;
    Ok(())
}

/// The user's own profile with link / unlink actions.
#[instrument(skip(ctx, chat, user), fields(user_id = user.id))]
pub async fn show_profile(ctx: &BotContext, chat: &Chat, user: &User, locale: Locale) -> Result<()> {
    let Some(record) = ctx.users.get_user(user.id).await? else {
        warn!(user_id = user.id, "Profile requested by unregistered user");
        ctx.say(chat, locale.texts().unexpected_error, Some(&back_keyboard(locale)))
            .await?;
        return Ok(());
    };
    let linked = ctx.profiles.linked_account(user.id).await?;
    let text = format::format_profile(&record, linked, &user.display_name(), locale);
    ctx.bot
        .send_message(chat, &text, Some(&profile_keyboard(linked.is_some(), locale)))
        .await?;
    Ok(())
}

/// Links the account typed by the user, then shows its card.
#[instrument(skip(ctx, chat, text), fields(chat_id = chat.id))]
pub async fn link_account(
    ctx: &BotContext,
    chat: &Chat,
    user_id: i64,
    locale: Locale,
    text: &str,
) -> Result<()> {
    let t = locale.texts();
    let Some(account_id) = read_id(ctx, chat, text, locale).await? else {
        return Ok(());
    };
    ctx.sessions.set_state(user_id, DialogState::Idle).await;

    if !ctx.profiles.link_account(user_id, account_id).await? {
        ctx.say(chat, t.account_already_linked, Some(&profile_keyboard(true, locale)))
            .await?;
        return Ok(());
    }
    info!(user_id, account_id, "Account linked");
    ctx.say(chat, t.account_linked, None).await?;
    show_account(ctx, chat, locale, account_id).await
}

#[instrument(skip(ctx, chat), fields(chat_id = chat.id))]
pub async fn unlink_account(ctx: &BotContext, chat: &Chat, user_id: i64, locale: Locale) -> Result<()> {
    let t = locale.texts();
    let text = if ctx.profiles.unlink_account(user_id).await? {
        info!(user_id, "Account unlinked");
        t.account_unlinked
    } else {
        t.nothing_to_unlink
    };
    ctx.say(chat, text, Some(&back_keyboard(locale))).await?;
    Ok(())
}

/// Card of the account linked to the user, or a link prompt when none is.
pub async fn show_linked_account(ctx: &BotContext, chat: &Chat, user_id: i64, locale: Locale) -> Result<()> {
    match ctx.profiles.linked_account(user_id).await? {
        Some(account_id) => show_account(ctx, chat, locale, account_id).await,
        None => {
            ctx.say(chat, locale.texts().not_linked, Some(&profile_keyboard(false, locale)))
                .await?;
            Ok(())
        }
    }
}

