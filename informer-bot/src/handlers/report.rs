//! Runs the chain for one update and answers the sender when it fails.

use tracing::error;

use super::context::BotContext;
use crate::chain::HandlerChain;
use crate::core::{HandlerResponse, Message, Result};

/// Passes `message` through `chain`. On error the user gets a localized reply
/// and the error is returned for logging.
pub async fn handle_and_report(
    chain: &HandlerChain,
    ctx: &BotContext,
    message: &Message,
) -> Result<HandlerResponse> {
    let result = chain.handle(message).await;
    if let Err(e) = &result {
        error!(
            error = %e,
            user_id = message.user.id,
            chat_id = message.chat.id,
            "Handler chain failed"
        );
        ctx.report_failure(message, e).await;
    }
    result
}
