use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::session::SessionStore;
use crate::telegram::run_dispatcher;

/// How often idle sessions are dropped.
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(600);

fn spawn_session_purge(sessions: Arc<dyn SessionStore>) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            ticker.tick().await;
            let purged = sessions.purge_expired().await;
            if purged > 0 {
                debug!(purged, "Expired sessions purged");
            }
        }
    });
}

/// Main entry: validate config, init logging, build components and handler chain, then poll
/// Telegram until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        database_url = %config.database_url,
        opendota_api_url = %config.opendota_api_url,
        "Initializing bot"
    );

    let components = build_bot_components(&config).await?;
    let handler_chain = build_handler_chain(&components.context, config.throttle);
    spawn_session_purge(components.context.sessions.clone());

    info!(handlers = handler_chain.len(), "Bot started successfully");

    run_dispatcher(components.teloxide_bot, handler_chain, components.context).await
}
