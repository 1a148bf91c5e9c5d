//! User record model for persistence.
//!
//! Maps to the `users` table and is used by UserRepository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    /// Telegram user id.
    pub tg_id: i64,
    pub name: String,
    /// Two-letter language code chosen by the user; `None` until they pick one.
    pub language: Option<String>,
    pub number_of_requests: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
