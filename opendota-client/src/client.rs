//! HTTP layer: one `reqwest::Client`, a base URL and an optional API key.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::error::ClientError;
use crate::models::{Hero, MatchDetails, PlayerResponse, RecentMatch, SearchEntry, WinLoss};

pub const DEFAULT_BASE_URL: &str = "https://api.opendota.com/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// OpenDota API client. Cheap to clone; clones share the connection pool and the hero cache.
#[derive(Debug, Clone)]
pub struct OpenDotaClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    heroes: Arc<RwLock<Option<Arc<Vec<Hero>>>>>,
}

impl OpenDotaClient {
    /// Client for the public API at [`DEFAULT_BASE_URL`].
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for a custom base URL (mirrors, test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("opendota-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            heroes: Arc::new(RwLock::new(None)),
        })
    }

    /// Sends `api_key` with every request when set.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(url = %url, query = ?query, "step: opendota request");

        let mut request = self.http.get(&url).query(query);
        if let Some(key) = &self.api_key {
            request = request.query(&[("api_key", key.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!(url = %url, "OpenDota returned 404");
            return Err(ClientError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(url = %url, status = status.as_u16(), "OpenDota request failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    #[instrument(skip(self))]
    pub async fn player(&self, account_id: i64) -> Result<PlayerResponse, ClientError> {
        self.get_json(&format!("players/{}", account_id), &[]).await
    }

    /// Wins and losses; `limit` restricts to the most recent N matches.
    #[instrument(skip(self))]
    pub async fn win_loss(&self, account_id: i64, limit: Option<u32>) -> Result<WinLoss, ClientError> {
        let query: Vec<(&str, String)> = limit.map(|l| ("limit", l.to_string())).into_iter().collect();
        self.get_json(&format!("players/{}/wl", account_id), &query).await
    }

    #[instrument(skip(self))]
    pub async fn recent_matches(
        &self,
        account_id: i64,
        limit: u32,
    ) -> Result<Vec<RecentMatch>, ClientError> {
        self.get_json(
            &format!("players/{}/matches", account_id),
            &[("limit", limit.to_string())],
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn match_details(&self, match_id: i64) -> Result<MatchDetails, ClientError> {
        self.get_json(&format!("matches/{}", match_id), &[]).await
    }

    #[instrument(skip(self))]
    pub async fn search(&self, nickname: &str) -> Result<Vec<SearchEntry>, ClientError> {
        let entries: Vec<SearchEntry> = self
            .get_json("search", &[("q", nickname.to_string())])
            .await?;
        info!(nickname, count = entries.len(), "OpenDota search done");
        Ok(entries)
    }

    /// Hero list, fetched once and cached for the lifetime of the client.
    pub async fn heroes(&self) -> Result<Arc<Vec<Hero>>, ClientError> {
        if let Some(heroes) = self.heroes.read().await.as_ref() {
            return Ok(heroes.clone());
        }

        let fetched: Arc<Vec<Hero>> = Arc::new(self.get_json("heroes", &[]).await?);
        info!(count = fetched.len(), "Hero list cached");
        *self.heroes.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    /// Localized hero name by hero id; `None` for ids missing from the hero list.
    pub async fn hero_name(&self, hero_id: i64) -> Result<Option<String>, ClientError> {
        let heroes = self.heroes().await?;
        Ok(heroes
            .iter()
            .find(|h| h.id == hero_id)
            .map(|h| h.localized_name.clone()))
    }
}
