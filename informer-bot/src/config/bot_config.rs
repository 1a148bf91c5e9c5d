//! BotConfig: Telegram connection, logging, database, OpenDota and conversation tuning.

use anyhow::Result;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::handlers::Settings;

pub const DEFAULT_DATABASE_URL: &str = "./informer.db";
pub const DEFAULT_LOG_FILE: &str = "logs/informer-bot.log";
pub const DEFAULT_SOURCE_CODE_URL: &str = "https://github.com/moond0wner/tg_bot_dota_informer";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// DATABASE_URL: SQLite file path, `sqlite:` URL or `sqlite::memory:`
    pub database_url: String,
    /// OPENDOTA_API_URL
    pub opendota_api_url: String,
    /// OPENDOTA_API_KEY, sent as `api_key` query parameter when set
    pub opendota_api_key: Option<String>,
    /// ADMINS: comma-separated Telegram user ids
    pub admins: Vec<i64>,
    /// SESSION_TTL_SECS
    pub session_ttl: Duration,
    /// THROTTLE_MILLIS: minimum gap between two events of one user
    pub throttle: Duration,
    /// BROADCAST_DELAY_MILLIS: pause between broadcast messages
    pub broadcast_delay: Duration,
    /// SOURCE_CODE_URL: target of the "source code" menu button
    pub source_code_url: String,
}

/// Parses `key` or returns `default` when unset or malformed.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

/// Parses a comma-separated id list; blanks are skipped, anything else non-numeric is an error.
pub(crate) fn parse_admins(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| anyhow::anyhow!("ADMINS contains an invalid user id: {}", s))
        })
        .collect()
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let admins = match env::var("ADMINS") {
            Ok(raw) => parse_admins(&raw)?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            bot_token,
            telegram_api_url: non_empty_env("TELEGRAM_API_URL")
                .or_else(|| non_empty_env("TELOXIDE_API_URL")),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()),
            database_url: Self::database_url_from_env(),
            opendota_api_url: non_empty_env("OPENDOTA_API_URL")
                .unwrap_or_else(|| opendota_client::DEFAULT_BASE_URL.to_string()),
            opendota_api_key: non_empty_env("OPENDOTA_API_KEY"),
            admins,
            session_ttl: Duration::from_secs(env_or("SESSION_TTL_SECS", 86_400)),
            throttle: Duration::from_millis(env_or("THROTTLE_MILLIS", 100)),
            broadcast_delay: Duration::from_millis(env_or("BROADCAST_DELAY_MILLIS", 50)),
            source_code_url: non_empty_env("SOURCE_CODE_URL")
                .unwrap_or_else(|| DEFAULT_SOURCE_CODE_URL.to_string()),
        })
    }

    /// DATABASE_URL or the default; needs no token, so CLI maintenance commands can use it.
    pub fn database_url_from_env() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
    }

    /// Rejects malformed URLs before anything is started.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if reqwest::Url::parse(&self.opendota_api_url).is_err() {
            anyhow::bail!("OPENDOTA_API_URL is not a valid URL: {}", self.opendota_api_url);
        }
        if reqwest::Url::parse(&self.source_code_url).is_err() {
            anyhow::bail!("SOURCE_CODE_URL is not a valid URL: {}", self.source_code_url);
        }
        if self.session_ttl.is_zero() {
            anyhow::bail!("SESSION_TTL_SECS must be greater than zero");
        }
        Ok(())
    }

    /// Handler settings derived from this config.
    pub fn settings(&self) -> Settings {
        Settings {
            admins: self.admins.clone(),
            source_code_url: self.source_code_url.clone(),
            broadcast_delay: self.broadcast_delay,
        }
    }
}
