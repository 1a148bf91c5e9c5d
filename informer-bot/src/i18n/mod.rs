//! User-facing strings in Russian and English.
//!
//! Strings are plain text. Templates carry `{name}`-style placeholders that the
//! formatting layer fills and escapes for MarkdownV2.

mod en;
mod ru;

use opendota_client::Medal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    /// Code stored in the `users.language` column.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    /// Parses a stored code; unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ru" => Some(Locale::Ru),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn texts(self) -> &'static Texts {
        match self {
            Locale::Ru => &ru::TEXTS,
            Locale::En => &en::TEXTS,
        }
    }
}

/// Every string the bot shows, for one language.
pub struct Texts {
    // Menus and buttons
    pub choose_language: &'static str,
    pub language_saved: &'static str,
    pub back: &'static str,
    pub prev: &'static str,
    pub next: &'static str,
    pub account_info_button: &'static str,
    pub search_by_nickname_button: &'static str,
    pub match_info_button: &'static str,
    pub user_profile_button: &'static str,
    pub language_button: &'static str,
    pub source_code_button: &'static str,
    pub players_button: &'static str,
    pub steam_profile_button: &'static str,
    pub link_account_button: &'static str,
    pub unlink_account_button: &'static str,
    pub check_account_button: &'static str,
    pub confirm_button: &'static str,
    pub cancel_button: &'static str,

    // Prompts and progress; templates use {name}, {id}
    pub welcome: &'static str,
    pub help: &'static str,
    pub send_account_id: &'static str,
    pub send_match_id: &'static str,
    pub send_nickname: &'static str,
    pub send_link_account_id: &'static str,
    pub looking_for_account: &'static str,
    pub looking_for_match: &'static str,
    pub searching_nickname: &'static str,
    pub found_accounts: &'static str,
    pub getaccount_usage: &'static str,
    pub getmatch_usage: &'static str,

    // Errors
    pub not_a_number: &'static str,
    pub not_positive: &'static str,
    pub account_not_found: &'static str,
    pub match_not_found: &'static str,
    pub no_players: &'static str,
    pub player_not_found: &'static str,
    pub no_accounts_found: &'static str,
    pub session_expired: &'static str,
    pub unexpected_error: &'static str,
    pub not_allowed: &'static str,
    pub unknown_input: &'static str,

    // Account and match fields
    pub name: &'static str,
    pub account_id: &'static str,
    pub steam_id: &'static str,
    pub team: &'static str,
    pub rank: &'static str,
    pub hero: &'static str,
    pub kda: &'static str,
    pub level: &'static str,
    pub scepter: &'static str,
    pub shard: &'static str,
    pub net_worth: &'static str,
    pub gold_per_min: &'static str,
    pub hero_damage: &'static str,
    pub hero_damage_per_min: &'static str,
    pub kills_per_min: &'static str,
    pub last_hits_per_min: &'static str,
    pub healing_per_min: &'static str,
    pub tower_damage: &'static str,
    pub winrate: &'static str,
    pub total_matches: &'static str,
    pub recent_winrate: &'static str,
    pub last_match: &'static str,
    pub dota_plus: &'static str,
    pub country: &'static str,
    pub winner: &'static str,
    pub players_count: &'static str,
    pub abandons: &'static str,
    pub match_id: &'static str,
    pub duration: &'static str,
    pub score: &'static str,
    pub won: &'static str,
    pub lost: &'static str,
    pub radiant: &'static str,
    pub dire: &'static str,
    pub unknown: &'static str,
    pub uncalibrated: &'static str,
    pub probably_hidden: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    /// Herald through Immortal.
    pub medals: [&'static str; 8],

    // Bot user profile; templates use {id}
    pub profile_title: &'static str,
    pub requests: &'static str,
    pub registered: &'static str,
    pub last_request: &'static str,
    pub linked_account: &'static str,
    pub not_linked: &'static str,
    pub account_linked: &'static str,
    pub account_already_linked: &'static str,
    pub account_unlinked: &'static str,
    pub nothing_to_unlink: &'static str,

    // Admin; templates use {text}, {sent}, {failed}
    pub admin_help: &'static str,
    pub broadcast_prompt: &'static str,
    pub broadcast_confirm: &'static str,
    pub broadcast_started: &'static str,
    pub broadcast_cancelled: &'static str,
    pub broadcast_done: &'static str,
    pub stats_title: &'static str,
    pub total_users: &'static str,
    pub total_requests: &'static str,
    pub linked_profiles: &'static str,
    pub top_users: &'static str,
}

impl Texts {
    pub fn medal(&self, medal: Medal) -> &'static str {
        let index = match medal {
            Medal::Herald => 0,
            Medal::Guardian => 1,
            Medal::Crusader => 2,
            Medal::Archon => 3,
            Medal::Legend => 4,
            Medal::Ancient => 5,
            Medal::Divine => 6,
            Medal::Immortal => 7,
        };
        self.medals[index]
    }

    pub fn flag(&self, value: bool) -> &'static str {
        if value {
            self.yes
        } else {
            self.no
        }
    }
}
