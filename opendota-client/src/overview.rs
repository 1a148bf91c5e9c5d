//! Aggregated views assembled from several endpoints.

use tracing::{info, instrument, warn};

use crate::client::OpenDotaClient;
use crate::error::ClientError;
use crate::models::{Benchmark, MatchDetails, MatchPlayer};
use crate::rank::Rank;

/// Number of recent matches used for the short-term winrate.
const RECENT_MATCHES: u32 = 20;

/// Winrate in percent rounded to two decimals; 0 when there are no games.
pub fn winrate(win: i64, lose: i64) -> f64 {
    let total = win + lose;
    if total <= 0 {
        return 0.0;
    }
    (win as f64 / total as f64 * 10_000.0).round() / 100.0
}

/// Player summary shown by the account card.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountOverview {
    pub account_id: i64,
    pub name: Option<String>,
    pub rank: Option<Rank>,
    pub wins: i64,
    pub losses: i64,
    pub total_matches: i64,
    pub total_winrate: f64,
    pub recent_winrate: f64,
    pub last_match: Option<LastMatch>,
    pub avatar: Option<String>,
    pub profile_url: Option<String>,
    pub steam_id: Option<String>,
    pub country: Option<String>,
    pub has_dota_plus: bool,
}

/// The player's most recent match.
#[derive(Debug, Clone, PartialEq)]
pub struct LastMatch {
    pub match_id: i64,
    pub hero_name: Option<String>,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub radiant_win: Option<bool>,
    pub player_won: Option<bool>,
}

/// General information about one match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOverview {
    pub match_id: i64,
    pub radiant_win: Option<bool>,
    pub human_players: i64,
    pub abandons: i64,
    pub game_mode: Option<i64>,
    pub lobby_type: Option<i64>,
    pub duration_secs: Option<i64>,
    pub radiant_score: Option<i64>,
    pub dire_score: Option<i64>,
}

impl From<&MatchDetails> for MatchOverview {
    fn from(details: &MatchDetails) -> Self {
        Self {
            match_id: details.match_id,
            radiant_win: details.radiant_win,
            human_players: details
                .human_players
                .unwrap_or(details.players.len() as i64),
            abandons: details.players.iter().filter_map(|p| p.abandons).sum(),
            game_mode: details.game_mode,
            lobby_type: details.lobby_type,
            duration_secs: details.duration,
            radiant_score: details.radiant_score,
            dire_score: details.dire_score,
        }
    }
}

/// One page of the per-player match breakdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerLine {
    pub account_id: Option<i64>,
    pub name: Option<String>,
    pub is_radiant: bool,
    pub rank: Option<Rank>,
    pub hero_name: Option<String>,
    pub level: Option<i64>,
    pub net_worth: Option<i64>,
    pub kills: Option<i64>,
    pub deaths: Option<i64>,
    pub assists: Option<i64>,
    pub has_scepter: bool,
    pub has_shard: bool,
    pub hero_damage: Option<i64>,
    pub tower_damage: Option<i64>,
    pub gold_per_min: Option<f64>,
    pub hero_damage_per_min: Option<f64>,
    pub hero_healing_per_min: Option<f64>,
    pub kills_per_min: Option<f64>,
    pub last_hits_per_min: Option<f64>,
}

fn raw(benchmark: Option<&Benchmark>) -> Option<f64> {
    benchmark.and_then(|b| b.raw)
}

impl PlayerLine {
    pub fn from_match_player(player: &MatchPlayer, hero_name: Option<String>) -> Self {
        let benchmarks = player.benchmarks.as_ref();
        Self {
            account_id: player.account_id,
            name: player.personaname.clone(),
            is_radiant: player.radiant(),
            rank: player.rank_tier.and_then(Rank::from_tier),
            hero_name,
            level: player.level,
            net_worth: player.net_worth,
            kills: player.kills,
            deaths: player.deaths,
            assists: player.assists,
            has_scepter: player.aghanims_scepter.unwrap_or(0) > 0,
            has_shard: player.aghanims_shard.unwrap_or(0) > 0,
            hero_damage: player.hero_damage,
            tower_damage: player.tower_damage.or_else(|| {
                raw(benchmarks.and_then(|b| b.tower_damage.as_ref())).map(|v| v.round() as i64)
            }),
            gold_per_min: raw(benchmarks.and_then(|b| b.gold_per_min.as_ref())),
            hero_damage_per_min: raw(benchmarks.and_then(|b| b.hero_damage_per_min.as_ref())),
            hero_healing_per_min: raw(benchmarks.and_then(|b| b.hero_healing_per_min.as_ref())),
            kills_per_min: raw(benchmarks.and_then(|b| b.kills_per_min.as_ref())),
            last_hits_per_min: raw(benchmarks.and_then(|b| b.last_hits_per_min.as_ref())),
        }
    }

    /// True when the player hides match data (anonymous account or missing benchmarks).
    pub fn has_missing_stats(&self) -> bool {
        self.account_id.is_none()
            || self.name.is_none()
            || self.gold_per_min.is_none()
            || self.hero_damage_per_min.is_none()
            || self.hero_healing_per_min.is_none()
            || self.last_hits_per_min.is_none()
            || self.hero_damage.is_none()
            || self.net_worth.is_none()
    }
}

impl OpenDotaClient {
    /// Full account card. `Ok(None)` when OpenDota has no profile for this id.
    ///
    /// Profile, both win/loss queries and the last match are requested concurrently.
    /// A failing recent-winrate or last-match lookup degrades to zero / unknown.
    #[instrument(skip(self))]
    pub async fn account_overview(
        &self,
        account_id: i64,
    ) -> Result<Option<AccountOverview>, ClientError> {
        let (player, wl, recent_wl, last_match) = tokio::join!(
            self.player(account_id),
            self.win_loss(account_id, None),
            self.win_loss(account_id, Some(RECENT_MATCHES)),
            self.last_match(account_id),
        );

        let player = match player {
            Ok(player) => player,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };
        let Some(profile) = player.profile.as_ref() else {
            info!(account_id, "No public profile for account");
            return Ok(None);
        };

        let wl = wl?;
        let recent_wl = recent_wl.unwrap_or_else(|e| {
            warn!(account_id, error = %e, "Recent win/loss unavailable");
            Default::default()
        });
        let last_match = last_match.unwrap_or_else(|e| {
            warn!(account_id, error = %e, "Last match unavailable");
            None
        });

        Ok(Some(AccountOverview {
            account_id,
            name: profile.personaname.clone(),
            rank: player.rank_tier.and_then(Rank::from_tier),
            wins: wl.win,
            losses: wl.lose,
            total_matches: wl.total(),
            total_winrate: winrate(wl.win, wl.lose),
            recent_winrate: winrate(recent_wl.win, recent_wl.lose),
            last_match,
            avatar: profile.avatarfull.clone(),
            profile_url: profile.profileurl.clone(),
            steam_id: profile.steamid.clone(),
            country: profile.loccountrycode.clone(),
            has_dota_plus: profile.has_dota_plus(),
        }))
    }

    /// The player's latest match with the hero resolved by id.
    #[instrument(skip(self))]
    pub async fn last_match(&self, account_id: i64) -> Result<Option<LastMatch>, ClientError> {
        let matches = self.recent_matches(account_id, 1).await?;
        let Some(latest) = matches.into_iter().next() else {
            return Ok(None);
        };

        let hero_name = match self.hero_name(latest.hero_id).await {
            Ok(name) => name,
            Err(e) => {
                warn!(hero_id = latest.hero_id, error = %e, "Hero lookup failed");
                None
            }
        };
        let player_won = match (latest.player_slot, latest.radiant_win) {
            (Some(slot), Some(radiant_win)) => Some((slot < 128) == radiant_win),
            _ => None,
        };

        Ok(Some(LastMatch {
            match_id: latest.match_id,
            hero_name,
            kills: latest.kills,
            deaths: latest.deaths,
            assists: latest.assists,
            radiant_win: latest.radiant_win,
            player_won,
        }))
    }

    #[instrument(skip(self))]
    pub async fn match_overview(&self, match_id: i64) -> Result<MatchOverview, ClientError> {
        let details = self.match_details(match_id).await?;
        Ok(MatchOverview::from(&details))
    }

    /// Every player of the match, in the order OpenDota lists them.
    #[instrument(skip(self))]
    pub async fn match_players(&self, match_id: i64) -> Result<Vec<PlayerLine>, ClientError> {
        let details = self.match_details(match_id).await?;
        let heroes = match self.heroes().await {
            Ok(heroes) => Some(heroes),
            Err(e) => {
                warn!(error = %e, "Hero list unavailable, players shown without heroes");
                None
            }
        };

        let players = details
            .players
            .iter()
            .map(|p| {
                let hero_name = heroes.as_ref().and_then(|list| {
                    list.iter()
                        .find(|h| Some(h.id) == p.hero_id)
                        .map(|h| h.localized_name.clone())
                });
                PlayerLine::from_match_player(p, hero_name)
            })
            .collect::<Vec<_>>();

        info!(match_id, count = players.len(), "Match players parsed");
        Ok(players)
    }
}
