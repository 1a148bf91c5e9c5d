//! Turns OpenDota views and stored records into Telegram MarkdownV2 text.
//!
//! Every dynamic value goes through [`escape`] or [`escape_code`]; static strings
//! from [`Texts`] are escaped as well, so no caller has to care about reserved characters.

use std::fmt::Display;

use opendota_client::{AccountOverview, LastMatch, MatchOverview, PlayerLine, Rank};
use storage::{UserRecord, UserStats};
use teloxide::utils::markdown::{escape, escape_code};

use crate::i18n::{Locale, Texts};

/// Users listed in the admin statistics.
pub const TOP_USERS: usize = 5;

const NOT_AVAILABLE: &str = "N/A";

/// Escaped plain text.
pub fn plain(text: &str) -> String {
    escape(text)
}

/// Inline code span.
pub fn code(value: impl Display) -> String {
    format!("`{}`", escape_code(&value.to_string()))
}

pub fn bold(text: &str) -> String {
    format!("*{}*", escape(text))
}

fn code_or_na<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => code(v),
        None => code(NOT_AVAILABLE),
    }
}

fn code_rounded(value: Option<f64>) -> String {
    code_or_na(value.map(|v| format!("{:.0}", v)))
}

/// Fills `{key}` placeholders with already-formatted MarkdownV2 values and escapes the rest.
/// Unknown placeholders are kept literally.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&escape(&rest[..open]));
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            rest = &rest[open..];
            break;
        };
        let key = &after[..close];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&escape(&rest[open..open + close + 2])),
        }
        rest = &after[close + 1..];
    }
    out.push_str(&escape(rest));
    out
}

pub fn welcome(name: &str, locale: Locale) -> String {
    fill(locale.texts().welcome, &[("name", &bold(name))])
}

/// "Divine 3", "Immortal", or the localized "uncalibrated". Plain text.
pub fn format_rank(rank: Option<Rank>, locale: Locale) -> String {
    let t = locale.texts();
    match rank {
        Some(rank) if rank.stars > 0 => format!("{} {}", t.medal(rank.medal), rank.stars),
        Some(rank) => t.medal(rank.medal).to_string(),
        None => t.uncalibrated.to_string(),
    }
}

/// `mm:ss`, or `h:mm:ss` for games over an hour.
pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    let (h, m, s) = (secs / 3600, secs % 3600 / 60, secs % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}

fn format_last_match(last: Option<&LastMatch>, t: &Texts) -> String {
    let Some(last) = last else {
        return code(t.unknown);
    };
    let hero = last.hero_name.as_deref().unwrap_or(t.unknown);
    let outcome = match last.player_won {
        Some(true) => t.won,
        Some(false) => t.lost,
        None => t.unknown,
    };
    format!(
        "{} {} {} \\({}\\)",
        code(hero),
        code(format!("{}/{}/{}", last.kills, last.deaths, last.assists)),
        plain(outcome),
        code(last.match_id)
    )
}

/// Account card shown as a photo caption or a plain message.
pub fn format_account(account: &AccountOverview, locale: Locale) -> String {
    let t = locale.texts();
    let name = account.name.as_deref().unwrap_or(NOT_AVAILABLE);
    let mut text = format!(
        "{} \\| {}\n\n",
        bold(name),
        code(format!("{} {:.2}%", t.winrate, account.total_winrate))
    );
    let lines = [
        (t.rank, code(format_rank(account.rank, locale))),
        (
            t.total_matches,
            format!(
                "{} \\| 🔺{} 🔻{}",
                code(account.total_matches),
                code(account.wins),
                code(account.losses)
            ),
        ),
        (t.recent_winrate, code(format!("{:.2}%", account.recent_winrate))),
        (t.last_match, format_last_match(account.last_match.as_ref(), t)),
        (t.dota_plus, t.flag(account.has_dota_plus).to_string()),
        (t.country, code_or_na(account.country.as_deref())),
        (t.account_id, code(account.account_id)),
        (t.steam_id, code_or_na(account.steam_id.as_deref())),
    ];
    text.push_str(
        &lines
            .iter()
            .map(|(label, value)| format!("{} {}", plain(label), value))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    if account.name.is_none() || account.country.is_none() || account.total_matches == 0 {
        text.push_str(&format!("\n\n{}", plain(t.probably_hidden)));
    }
    text
}

pub fn format_match_overview(overview: &MatchOverview, locale: Locale) -> String {
    let t = locale.texts();
    let winner = match overview.radiant_win {
        Some(true) => t.radiant,
        Some(false) => t.dire,
        None => t.unknown,
    };
    let score = match (overview.radiant_score, overview.dire_score) {
        (Some(radiant), Some(dire)) => code(format!("{}:{}", radiant, dire)),
        _ => code(NOT_AVAILABLE),
    };
    [
        (t.winner, code(winner)),
        (t.score, score),
        (
            t.duration,
            code_or_na(overview.duration_secs.map(format_duration)),
        ),
        (t.players_count, code(overview.human_players)),
        (t.abandons, code(overview.abandons)),
        (t.match_id, code(overview.match_id)),
    ]
    .iter()
    .map(|(label, value)| format!("{} {}", plain(label), value))
    .collect::<Vec<_>>()
    .join("\n")
}

/// One page of the players pager. Out-of-range indexes yield the "player not found" text.
pub fn format_player(players: &[PlayerLine], index: usize, locale: Locale) -> String {
    let t = locale.texts();
    let Some(player) = players.get(index) else {
        return plain(t.player_not_found);
    };

    let kda = match (player.kills, player.deaths, player.assists) {
        (Some(k), Some(d), Some(a)) => Some(format!("{}/{}/{}", k, d, a)),
        _ => None,
    };
    let team = if player.is_radiant { t.radiant } else { t.dire };
    let lines = [
        (t.name, code_or_na(player.name.as_deref())),
        (t.account_id, code_or_na(player.account_id)),
        (t.team, code(team)),
        (t.hero, code_or_na(player.hero_name.as_deref())),
        (t.rank, code(format_rank(player.rank, locale))),
        (t.kda, code_or_na(kda)),
        (t.level, code_or_na(player.level)),
        (t.scepter, t.flag(player.has_scepter).to_string()),
        (t.shard, t.flag(player.has_shard).to_string()),
        (t.net_worth, code_or_na(player.net_worth)),
        (t.gold_per_min, code_rounded(player.gold_per_min)),
        (t.hero_damage, code_or_na(player.hero_damage)),
        (t.hero_damage_per_min, code_rounded(player.hero_damage_per_min)),
        (t.kills_per_min, code_or_na(player.kills_per_min.map(|v| format!("{:.2}", v)))),
        (t.last_hits_per_min, code_rounded(player.last_hits_per_min)),
        (t.healing_per_min, code_rounded(player.hero_healing_per_min)),
        (t.tower_damage, code_or_na(player.tower_damage)),
    ];
    let mut text = lines
        .iter()
        .map(|(label, value)| format!("{} {}", plain(label), value))
        .collect::<Vec<_>>()
        .join("\n");

    if player.has_missing_stats() {
        text.push_str(&format!("\n\n{}", plain(t.probably_hidden)));
    }
    text
}

/// The user's own profile: bot usage and the linked Dota account.
pub fn format_profile(
    user: &UserRecord,
    linked_account: Option<i64>,
    display_name: &str,
    locale: Locale,
) -> String {
    let t = locale.texts();
    let linked = match linked_account {
        Some(id) => fill(t.linked_account, &[("id", &code(id))]),
        None => plain(t.not_linked),
    };
    format!(
        "{}\n\n{} {}\n{} {}\n{} {}\n{} {}\n{}",
        bold(t.profile_title),
        plain(t.name),
        code(display_name),
        plain(t.requests),
        code(user.number_of_requests),
        plain(t.registered),
        code(user.created_at.format("%Y-%m-%d %H:%M UTC")),
        plain(t.last_request),
        code(user.updated_at.format("%Y-%m-%d %H:%M UTC")),
        linked
    )
}

/// Admin statistics: totals plus the [`TOP_USERS`] most active users from `users`
/// (expected to be ordered by request count).
pub fn format_statistics(stats: &UserStats, users: &[UserRecord], locale: Locale) -> String {
    let t = locale.texts();
    let mut text = format!(
        "{}\n\n{} {}\n{} {}\n{} {}",
        bold(t.stats_title),
        plain(t.total_users),
        code(stats.total_users),
        plain(t.total_requests),
        code(stats.total_requests),
        plain(t.linked_profiles),
        code(stats.linked_profiles)
    );
    if !users.is_empty() {
        text.push_str(&format!("\n\n{}", plain(t.top_users)));
        for (i, user) in users.iter().take(TOP_USERS).enumerate() {
            text.push_str(&format!(
                "\n{}\\. {} {} \\- {}",
                i + 1,
                plain(&user.name),
                code(user.tg_id),
                code(user.number_of_requests)
            ));
        }
    }
    text
}

pub fn format_broadcast_confirm(text: &str, locale: Locale) -> String {
    fill(locale.texts().broadcast_confirm, &[("text", &plain(text))])
}

pub fn format_broadcast_done(sent: usize, failed: usize, locale: Locale) -> String {
    fill(
        locale.texts().broadcast_done,
        &[("sent", &code(sent)), ("failed", &code(failed))],
    )
}
