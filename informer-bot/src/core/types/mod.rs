//! Core types: user, chat, message, keyboard, handler response, and Handler trait.

mod chat;
mod handler;
mod keyboard;
mod message;
mod response;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use keyboard::{Button, ButtonKind, Keyboard};
pub use message::{Message, MessageKind};
pub use response::HandlerResponse;
pub use user::User;
