//! # opendota-client
//!
//! Thin async client for the public OpenDota API (`https://api.opendota.com/api`).
//! [`OpenDotaClient`] exposes the raw endpoints (players, win/loss, matches, heroes, search)
//! and aggregated views ([`AccountOverview`], [`MatchOverview`], [`PlayerLine`]) built from them.
//! Nothing here is localized; the bot crate turns these values into text.

mod client;
mod error;
mod models;
mod overview;
mod rank;

pub use client::{OpenDotaClient, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use models::{
    Benchmark, Benchmarks, Hero, MatchDetails, MatchPlayer, PlayerProfile, PlayerResponse,
    RecentMatch, SearchEntry, WinLoss,
};
pub use overview::{winrate, AccountOverview, LastMatch, MatchOverview, PlayerLine};
pub use rank::{Medal, Rank};
