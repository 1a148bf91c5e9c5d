//! Dispatcher: converts teloxide messages and callback queries to core::Message and passes
//! them to the HandlerChain, one spawned task per update.

use crate::chain::HandlerChain;
use crate::core::{Message as CoreMessage, ToCoreMessage};
use crate::handlers::{handle_and_report, BotContext};
use anyhow::Result;
use teloxide::prelude::*;
use tracing::{info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Runs the chain in a spawned task so the dispatcher keeps polling. Failures are
/// logged and reported back to the chat.
fn spawn_chain(chain: HandlerChain, ctx: BotContext, core_msg: CoreMessage) {
    tokio::spawn(async move {
        info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            message_id = %core_msg.id,
            "step: processing update (handler chain started)"
        );
        let _ = handle_and_report(&chain, &ctx, &core_msg).await;
    });
}

async fn on_message(msg: Message, chain: HandlerChain, ctx: BotContext) -> ResponseResult<()> {
    spawn_chain(chain, ctx, TelegramMessageWrapper(&msg).to_core());
    Ok(())
}

/// Callback queries are acknowledged right away so the button spinner stops.
async fn on_callback(
    bot: Bot,
    query: CallbackQuery,
    chain: HandlerChain,
    ctx: BotContext,
) -> ResponseResult<()> {
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, user_id = query.from.id.0, "Failed to answer callback query");
    }
    spawn_chain(chain, ctx, TelegramCallbackWrapper(&query).to_core());
    Ok(())
}

/// Long-polls Telegram until Ctrl-C.
#[instrument(skip(bot, handler_chain, ctx))]
pub async fn run_dispatcher(bot: Bot, handler_chain: HandlerChain, ctx: BotContext) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Connected to Telegram");
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain, ctx])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
