//! Component factory: builds the teloxide bot, the handler context and the handler chain
//! from config. Isolates assembly logic from the runner.

use anyhow::Result;
use opendota_client::OpenDotaClient;
use std::sync::Arc;
use std::time::Duration;
use storage::{ProfileRepository, SqlitePoolManager, UserRepository};
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot;
use crate::handlers::{
    AdminHandler, BotContext, CallbackHandler, GroupHandler, LoggingHandler, PrivateHandler,
    RegistrationHandler, ThrottleHandler,
};
use crate::session::InMemorySessionStore;
use crate::telegram::TelegramBotAdapter;

/// Core dependencies for run_bot; produced by the component factory.
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub context: BotContext,
}

/// teloxide::Bot for the configured token, pointed at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url.as_deref().map(reqwest::Url::parse) {
        Some(Ok(url)) => bot.set_api_url(url),
        Some(Err(e)) => {
            error!(error = %e, "Invalid TELEGRAM_API_URL, using default");
            bot
        }
        None => bot,
    }
}

/// Opens storage, creates the OpenDota client and the session store, and wraps them
/// together with `bot` into a [`BotContext`]. Tests pass a recording bot here.
#[instrument(skip(config, bot))]
pub async fn build_context(config: &BotConfig, bot: Arc<dyn Bot>) -> Result<BotContext> {
    let pool_manager = SqlitePoolManager::new(&config.database_url)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                database_url = %config.database_url,
                "Failed to open database"
            );
            anyhow::anyhow!("Failed to open database: {}", e)
        })?;
    let users = UserRepository::with_pool(pool_manager.clone()).await?;
    let profiles = ProfileRepository::with_pool(pool_manager).await?;

    let api = OpenDotaClient::with_base_url(config.opendota_api_url.clone())?
        .with_api_key(config.opendota_api_key.clone());

    info!(
        database_url = %config.database_url,
        opendota_api_url = %config.opendota_api_url,
        admins = config.admins.len(),
        "Components initialized"
    );

    Ok(BotContext {
        bot,
        api,
        users,
        profiles,
        sessions: Arc::new(InMemorySessionStore::new(config.session_ttl)),
        settings: Arc::new(config.settings()),
    })
}

/// Builds BotComponents talking to the real Telegram API.
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config);
    let adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let context = build_context(config, adapter).await?;
    Ok(BotComponents {
        teloxide_bot,
        context,
    })
}

/// Builds the handler chain (throttle → logging → registration → admin → group → private → callback).
pub fn build_handler_chain(ctx: &BotContext, throttle: Duration) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(ThrottleHandler::new(throttle)))
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(RegistrationHandler::new(ctx.users.clone())))
        .add_handler(Arc::new(AdminHandler::new(ctx.clone())))
        .add_handler(Arc::new(GroupHandler::new(ctx.clone())))
        .add_handler(Arc::new(PrivateHandler::new(ctx.clone())))
        .add_handler(Arc::new(CallbackHandler::new(ctx.clone())))
}
