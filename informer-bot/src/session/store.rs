//! Session storage. Sessions expire after a period of inactivity and then read as default.

use super::{DialogState, Session};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// Idle lifetime of a session: one day.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(86_400);

/// Mutation applied to a stored session.
pub type SessionUpdate = Box<dyn FnOnce(&mut Session) + Send>;

/// Per-user session storage keyed by Telegram user id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Current session; default when none is stored or it expired.
    async fn get(&self, user_id: i64) -> Session;

    /// Applies `update` to the current session and stores the result.
    async fn update(&self, user_id: i64, update: SessionUpdate);

    async fn clear(&self, user_id: i64);

    /// Drops expired sessions; returns how many were removed.
    async fn purge_expired(&self) -> usize;

    async fn set_state(&self, user_id: i64, state: DialogState) {
        self.update(user_id, Box::new(move |s| s.state = state)).await;
    }
}

struct Entry {
    session: Session,
    touched: Instant,
}

type EntryMap = HashMap<i64, Entry>;

#[derive(Clone)]
pub struct InMemorySessionStore {
    entries: Arc<RwLock<EntryMap>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(EntryMap::new())),
            ttl,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn is_live(&self, entry: &Entry, now: Instant) -> bool {
        now.duration_since(entry.touched) < self.ttl
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: i64) -> Session {
        let entries = self.entries.read().await;
        entries
            .get(&user_id)
            .filter(|e| self.is_live(e, Instant::now()))
            .map(|e| e.session.clone())
            .unwrap_or_default()
    }

    async fn update(&self, user_id: i64, update: SessionUpdate) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let mut session = entries
            .remove(&user_id)
            .filter(|e| self.is_live(e, now))
            .map(|e| e.session)
            .unwrap_or_default();
        update(&mut session);
        debug!(user_id, state = ?session.state, "Session updated");
        entries.insert(
            user_id,
            Entry {
                session,
                touched: now,
            },
        );
    }

    async fn clear(&self, user_id: i64) {
        self.entries.write().await.remove(&user_id);
    }

    async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| self.is_live(e, now));
        before - entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_unknown_user_is_default() {
        let store = InMemorySessionStore::default();
        let session = store.get(1).await;
        assert_eq!(session.state, DialogState::Idle);
        assert!(session.players.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_and_clear() {
        let store = InMemorySessionStore::default();
        store.set_state(7, DialogState::AwaitingMatchId).await;
        store
            .update(7, Box::new(|s| s.match_id = Some(7845123)))
            .await;

        let session = store.get(7).await;
        assert_eq!(session.state, DialogState::AwaitingMatchId);
        assert_eq!(session.match_id, Some(7845123));
        assert_eq!(store.get(8).await.state, DialogState::Idle);

        store.clear(7).await;
        assert_eq!(store.get(7).await.state, DialogState::Idle);
    }

    /// **Test: expired sessions read as default and are purged.**
    ///
    /// **Setup:** Store with a 20 ms TTL and one session.
    /// **Action:** Sleep past the TTL, read, then purge.
    /// **Expected:** Read returns Idle; purge removes exactly one entry.
    #[tokio::test]
    async fn test_expired_session_reads_default_and_is_purged() {
        let store = InMemorySessionStore::new(Duration::from_millis(20));
        store.set_state(1, DialogState::AwaitingNickname).await;
        assert_eq!(store.get(1).await.state, DialogState::AwaitingNickname);

        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(store.get(1).await.state, DialogState::Idle);
        assert_eq!(store.purge_expired().await, 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_after_expiry_starts_fresh() {
        let store = InMemorySessionStore::new(Duration::from_millis(20));
        store
            .update(1, Box::new(|s| s.broadcast_text = Some("old".into())))
            .await;
        tokio::time::sleep(Duration::from_millis(40)).await;

        store.set_state(1, DialogState::AwaitingAccountId).await;
        let session = store.get(1).await;
        assert_eq!(session.state, DialogState::AwaitingAccountId);
        assert!(session.broadcast_text.is_none());
    }
}
