//! Conversation handlers and the steps they share.
//!
//! Chain order: throttle → logging → registration → admin → group → private → callback.

mod admin;
mod callback;
mod command;
mod context;
pub mod flows;
mod group;
mod logging;
mod private;
mod registration;
mod report;
mod throttle;

pub use admin::{AdminHandler, BroadcastReport};
pub use callback::CallbackHandler;
pub use command::parse_command;
pub use context::{BotContext, Settings};
pub use group::GroupHandler;
pub use logging::LoggingHandler;
pub use private::PrivateHandler;
pub use registration::RegistrationHandler;
pub use report::handle_and_report;
pub use throttle::ThrottleHandler;
