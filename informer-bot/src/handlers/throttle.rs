//! Drops events from users who send faster than the configured window.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::core::{Handler, Message, Result};

/// Upper bound on remembered users; older entries are pruned when reached.
const MAX_TRACKED_USERS: usize = 10_000;

/// Stops the chain in before() when the same user sent an event less than `window` ago.
pub struct ThrottleHandler {
    window: Duration,
    last_seen: Mutex<HashMap<i64, Instant>>,
}

impl ThrottleHandler {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_seen: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl Handler for ThrottleHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        if self.window.is_zero() {
            return Ok(true);
        }
        let now = Instant::now();
        let mut last_seen = self.last_seen.lock().await;
        if let Some(last) = last_seen.get(&message.user.id) {
            if now.duration_since(*last) < self.window {
                debug!(user_id = message.user.id, "Throttled");
                return Ok(false);
            }
        }
        if last_seen.len() >= MAX_TRACKED_USERS {
            let window = self.window;
            last_seen.retain(|_, seen| now.duration_since(*seen) < window);
        }
        last_seen.insert(message.user.id, now);
        Ok(true)
    }
}
