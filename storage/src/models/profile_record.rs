//! Linked Dota account of a Telegram user. Maps to the `profiles` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProfileRecord {
    pub id: i64,
    pub tg_id: i64,
    /// OpenDota (Steam32) account id.
    pub account_id: i64,
    pub created_at: DateTime<Utc>,
}
