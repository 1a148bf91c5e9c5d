//! Per-user conversation state: which input the bot waits for and the data
//! cached between callback presses (match players, search results, broadcast text).

mod pagination;
mod store;

pub use pagination::{has_next, has_prev, page_count, page_slice, ACCOUNTS_PER_PAGE};
pub use store::{InMemorySessionStore, SessionStore, SessionUpdate, DEFAULT_SESSION_TTL};

use opendota_client::{PlayerLine, SearchEntry};

/// What the next text message from the user is interpreted as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Idle,
    AwaitingAccountId,
    AwaitingMatchId,
    AwaitingNickname,
    AwaitingLinkAccountId,
    AwaitingBroadcastText,
    AwaitingBroadcastConfirm,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub state: DialogState,
    /// Match whose players are paged with `page:N`.
    pub match_id: Option<i64>,
    pub players: Vec<PlayerLine>,
    /// Nickname search results paged with `carousel:N`.
    pub accounts: Vec<SearchEntry>,
    pub broadcast_text: Option<String>,
}
