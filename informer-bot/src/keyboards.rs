//! Inline keyboards and the callback payloads their buttons carry.

use std::fmt;

use opendota_client::SearchEntry;

use crate::core::{Button, Keyboard};
use crate::i18n::Locale;
use crate::session::{has_next, has_prev, page_count, page_slice, ACCOUNTS_PER_PAGE};

/// Parsed callback payload of an inline button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackData {
    Back,
    ChangeLanguage,
    SelectLanguage(Locale),
    AccountInfo,
    MatchInfo,
    AccountByNick,
    MatchPlayers,
    /// Players pager, 0-based.
    Page(usize),
    /// Search results carousel, 0-based.
    Carousel(usize),
    AccountId(i64),
    /// Main menu page, 1 or 2.
    StartPage(u8),
    UserProfile,
    CheckAccount,
    LinkAccount,
    UnlinkAccount,
    BroadcastConfirm,
    BroadcastCancel,
    /// Page counter; pressing it does nothing.
    Noop,
}

impl CallbackData {
    /// Parses a payload. `prefix:N` forms tolerate a space after the colon.
    pub fn parse(data: &str) -> Option<Self> {
        let data = data.trim();
        let parsed = match data {
            "back" => Self::Back,
            "change_language" => Self::ChangeLanguage,
            "select_ru" => Self::SelectLanguage(Locale::Ru),
            "select_en" => Self::SelectLanguage(Locale::En),
            "account_info" => Self::AccountInfo,
            "match_info" => Self::MatchInfo,
            "account_by_nick" => Self::AccountByNick,
            "get_info_about_players" => Self::MatchPlayers,
            "user_profile" => Self::UserProfile,
            "check_account" => Self::CheckAccount,
            "link_account" => Self::LinkAccount,
            "unlink_account" => Self::UnlinkAccount,
            "broadcast_confirm" => Self::BroadcastConfirm,
            "broadcast_cancel" => Self::BroadcastCancel,
            "noop" => Self::Noop,
            _ => {
                let (prefix, arg) = data.split_once(':')?;
                let arg = arg.trim();
                match prefix {
                    "page" => Self::Page(arg.parse().ok()?),
                    "carousel" => Self::Carousel(arg.parse().ok()?),
                    "account_id" => Self::AccountId(arg.parse().ok().filter(|id| *id > 0)?),
                    "start_page" => match arg.parse().ok()? {
                        page @ (1 | 2) => Self::StartPage(page),
                        _ => return None,
                    },
                    _ => return None,
                }
            }
        };
        Some(parsed)
    }
}

impl fmt::Display for CallbackData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Back => f.write_str("back"),
            Self::ChangeLanguage => f.write_str("change_language"),
            Self::SelectLanguage(locale) => write!(f, "select_{}", locale.code()),
            Self::AccountInfo => f.write_str("account_info"),
            Self::MatchInfo => f.write_str("match_info"),
            Self::AccountByNick => f.write_str("account_by_nick"),
            Self::MatchPlayers => f.write_str("get_info_about_players"),
            Self::Page(page) => write!(f, "page:{}", page),
            Self::Carousel(page) => write!(f, "carousel:{}", page),
            Self::AccountId(id) => write!(f, "account_id:{}", id),
            Self::StartPage(page) => write!(f, "start_page:{}", page),
            Self::UserProfile => f.write_str("user_profile"),
            Self::CheckAccount => f.write_str("check_account"),
            Self::LinkAccount => f.write_str("link_account"),
            Self::UnlinkAccount => f.write_str("unlink_account"),
            Self::BroadcastConfirm => f.write_str("broadcast_confirm"),
            Self::BroadcastCancel => f.write_str("broadcast_cancel"),
            Self::Noop => f.write_str("noop"),
        }
    }
}

fn button(text: &str, data: CallbackData) -> Button {
    Button::callback(text, data.to_string())
}

fn back_button(locale: Locale) -> Button {
    button(locale.texts().back, CallbackData::Back)
}

/// Main menu. Page 1 holds the lookups, page 2 the profile, language and source link.
pub fn start_keyboard(page: u8, locale: Locale, source_url: &str) -> Keyboard {
    let t = locale.texts();
    if page == 2 {
        Keyboard::column(vec![
            button(t.user_profile_button, CallbackData::UserProfile),
            button(t.language_button, CallbackData::ChangeLanguage),
            Button::url(t.source_code_button, source_url),
            button(t.prev, CallbackData::StartPage(1)),
        ])
    } else {
        Keyboard::column(vec![
            button(t.account_info_button, CallbackData::AccountInfo),
            button(t.search_by_nickname_button, CallbackData::AccountByNick),
            button(t.match_info_button, CallbackData::MatchInfo),
            button(t.next, CallbackData::StartPage(2)),
        ])
    }
}

/// `<<` / counter / `>>` row for a pager whose arrows produce `to_data(page)`.
fn nav_row(
    page: usize,
    pages: usize,
    locale: Locale,
    to_data: fn(usize) -> CallbackData,
) -> Vec<Button> {
    let t = locale.texts();
    let mut row = Vec::with_capacity(3);
    if has_prev(page) {
        row.push(button(t.prev, to_data(page - 1)));
    }
    row.push(button(
        &format!("{}/{}", page + 1, pages),
        CallbackData::Noop,
    ));
    if has_next(page, pages) {
        row.push(button(t.next, to_data(page + 1)));
    }
    row
}

/// Players pager of a match: one player per page.
pub fn players_keyboard(page: usize, pages: usize, locale: Locale) -> Keyboard {
    Keyboard::new()
        .row(nav_row(page, pages, locale, CallbackData::Page))
        .row(vec![back_button(locale)])
}

/// Label of a search result button: `nickname — account_id`.
pub fn account_button_text(entry: &SearchEntry) -> String {
    format!(
        "{} — {}",
        entry.personaname.as_deref().unwrap_or("?"),
        entry.account_id
    )
}

/// Nickname search carousel: [`ACCOUNTS_PER_PAGE`] accounts per page.
/// `None` when `page` is past the last page.
pub fn accounts_keyboard(page: usize, accounts: &[SearchEntry], locale: Locale) -> Option<Keyboard> {
    let slice = page_slice(accounts, page, ACCOUNTS_PER_PAGE)?;
    let pages = page_count(accounts.len(), ACCOUNTS_PER_PAGE);

    let mut keyboard = Keyboard::column(
        slice
            .iter()
            .map(|entry| {
                button(
                    &account_button_text(entry),
                    CallbackData::AccountId(entry.account_id),
                )
            })
            .collect(),
    );
    if pages > 1 {
        keyboard = keyboard.row(nav_row(page, pages, locale, CallbackData::Carousel));
    }
    Some(keyboard.row(vec![back_button(locale)]))
}

/// Under an account card: Steam profile link (when known) and back.
pub fn account_keyboard(profile_url: Option<&str>, locale: Locale) -> Keyboard {
    let t = locale.texts();
    let mut keyboard = Keyboard::new();
    if let Some(url) = profile_url {
        keyboard = keyboard.row(vec![Button::url(t.steam_profile_button, url)]);
    }
    keyboard.row(vec![back_button(locale)])
}

/// Under a match overview: open the players pager, or go back.
pub fn match_keyboard(locale: Locale) -> Keyboard {
    Keyboard::column(vec![
        button(locale.texts().players_button, CallbackData::MatchPlayers),
        back_button(locale),
    ])
}

pub fn language_keyboard() -> Keyboard {
    Keyboard::new().row(vec![
        button("Русский 🇷🇺", CallbackData::SelectLanguage(Locale::Ru)),
        button("English 🇬🇧", CallbackData::SelectLanguage(Locale::En)),
    ])
}

pub fn back_keyboard(locale: Locale) -> Keyboard {
    Keyboard::new().row(vec![back_button(locale)])
}

pub fn profile_keyboard(linked: bool, locale: Locale) -> Keyboard {
    let t = locale.texts();
    let mut buttons = if linked {
        vec![
            button(t.check_account_button, CallbackData::CheckAccount),
            button(t.unlink_account_button, CallbackData::UnlinkAccount),
        ]
    } else {
        vec![button(t.link_account_button, CallbackData::LinkAccount)]
    };
    buttons.push(back_button(locale));
    Keyboard::column(buttons)
}

pub fn confirm_keyboard(locale: Locale) -> Keyboard {
    let t = locale.texts();
    Keyboard::new().row(vec![
        button(t.confirm_button, CallbackData::BroadcastConfirm),
        button(t.cancel_button, CallbackData::BroadcastCancel),
    ])
}
