//! Core types and traits: Handler, Bot, Message, Keyboard, HandlerResponse, error, logger.
//! Transport-agnostic.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Button, ButtonKind, Chat, Handler, HandlerResponse, Keyboard, Message, MessageKind,
    ToCoreMessage, ToCoreUser, User,
};
