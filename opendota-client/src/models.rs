//! Response models for the OpenDota endpoints used by the bot.
//!
//! Only the fields the bot reads are declared; serde ignores the rest. OpenDota returns `null`
//! for hidden or unknown values, so nearly everything is optional.

use serde::{Deserialize, Serialize};

/// `GET /players/{account_id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerResponse {
    pub profile: Option<PlayerProfile>,
    pub rank_tier: Option<i64>,
    pub leaderboard_rank: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerProfile {
    pub account_id: Option<i64>,
    pub personaname: Option<String>,
    pub avatarfull: Option<String>,
    pub profileurl: Option<String>,
    pub steamid: Option<String>,
    pub loccountrycode: Option<String>,
    /// Dota Plus subscription.
    pub plus: Option<bool>,
    /// Older name of `plus`, still returned for some accounts.
    pub is_subscriber: Option<bool>,
}

impl PlayerProfile {
    pub fn has_dota_plus(&self) -> bool {
        self.plus.or(self.is_subscriber).unwrap_or(false)
    }
}

/// `GET /players/{account_id}/wl`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct WinLoss {
    #[serde(default)]
    pub win: i64,
    #[serde(default)]
    pub lose: i64,
}

impl WinLoss {
    pub fn total(&self) -> i64 {
        self.win + self.lose
    }
}

/// Element of `GET /players/{account_id}/matches`
#[derive(Debug, Clone, Deserialize)]
pub struct RecentMatch {
    pub match_id: i64,
    pub player_slot: Option<i64>,
    pub radiant_win: Option<bool>,
    #[serde(default)]
    pub hero_id: i64,
    #[serde(default)]
    pub kills: i64,
    #[serde(default)]
    pub deaths: i64,
    #[serde(default)]
    pub assists: i64,
    pub duration: Option<i64>,
    pub start_time: Option<i64>,
}

/// Element of `GET /heroes`
#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub localized_name: String,
}

/// `GET /matches/{match_id}`
#[derive(Debug, Clone, Deserialize)]
pub struct MatchDetails {
    pub match_id: i64,
    pub radiant_win: Option<bool>,
    pub human_players: Option<i64>,
    pub game_mode: Option<i64>,
    pub lobby_type: Option<i64>,
    pub duration: Option<i64>,
    pub radiant_score: Option<i64>,
    pub dire_score: Option<i64>,
    #[serde(default)]
    pub players: Vec<MatchPlayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchPlayer {
    pub account_id: Option<i64>,
    pub personaname: Option<String>,
    #[serde(rename = "isRadiant")]
    pub is_radiant: Option<bool>,
    pub player_slot: Option<i64>,
    pub hero_id: Option<i64>,
    pub level: Option<i64>,
    pub net_worth: Option<i64>,
    pub kills: Option<i64>,
    pub deaths: Option<i64>,
    pub assists: Option<i64>,
    pub aghanims_scepter: Option<i64>,
    pub aghanims_shard: Option<i64>,
    pub hero_damage: Option<i64>,
    pub tower_damage: Option<i64>,
    pub rank_tier: Option<i64>,
    pub abandons: Option<i64>,
    pub benchmarks: Option<Benchmarks>,
}

impl MatchPlayer {
    /// Side of the player; slots below 128 are Radiant when `isRadiant` is absent.
    pub fn radiant(&self) -> bool {
        self.is_radiant
            .or_else(|| self.player_slot.map(|slot| slot < 128))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Benchmarks {
    pub gold_per_min: Option<Benchmark>,
    pub hero_damage_per_min: Option<Benchmark>,
    pub hero_healing_per_min: Option<Benchmark>,
    pub kills_per_min: Option<Benchmark>,
    pub last_hits_per_min: Option<Benchmark>,
    pub tower_damage: Option<Benchmark>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Benchmark {
    pub raw: Option<f64>,
    pub pct: Option<f64>,
}

/// Element of `GET /search?q=`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub account_id: i64,
    pub personaname: Option<String>,
    pub avatarfull: Option<String>,
    pub last_match_time: Option<String>,
    pub similarity: Option<f64>,
}
