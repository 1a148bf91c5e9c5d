//! # Dota informer bot
//!
//! Telegram front end for the OpenDota API: account and match lookups, nickname search,
//! account linking and admin broadcasts. Wires storage and opendota-client into a handler
//! chain, loads config from env and long-polls Telegram.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod format;
pub mod handlers;
pub mod i18n;
pub mod keyboards;
pub mod runner;
pub mod session;
pub mod telegram;
pub mod validation;

pub use cli::{list_users, load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, parse_message_id, Bot, BotError, Button, ButtonKind, Chat, Handler,
    HandlerError, HandlerResponse, Keyboard, Message, MessageKind, Result, ToCoreMessage,
    ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{
    run_dispatcher, TelegramBotAdapter, TelegramCallbackWrapper, TelegramMessageWrapper,
    TelegramUserWrapper,
};

pub use config::BotConfig;
pub use runner::run_bot;

pub use components::{build_bot_components, build_context, build_handler_chain, BotComponents};
pub use handlers::{BotContext, Settings};
pub use i18n::Locale;
pub use session::{DialogState, InMemorySessionStore, Session, SessionStore};
