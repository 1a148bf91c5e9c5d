//! Profile repository: links a Telegram user to one Dota account.

use crate::error::StorageError;
use crate::models::ProfileRecord;
use crate::schema::create_tables;
use crate::sqlite_pool::SqlitePoolManager;
use chrono::Utc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct ProfileRepository {
    pool_manager: SqlitePoolManager,
}

impl ProfileRepository {
    pub async fn with_pool(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        create_tables(pool_manager.pool()).await?;
        Ok(Self { pool_manager })
    }

    /// Mutations require a registered user; profiles never outlive their `users` row.
    async fn ensure_user(&self, tg_id: i64) -> Result<(), StorageError> {
        let exists: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM users WHERE tg_id = ?")
            .bind(tg_id)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        if exists.is_none() {
            warn!(tg_id, "profile change for unknown user");
            return Err(StorageError::NotFound(format!("user {}", tg_id)));
        }
        Ok(())
    }

    /// Links `account_id` to the user. An existing link is kept; returns false in that case.
    pub async fn link_account(&self, tg_id: i64, account_id: i64) -> Result<bool, StorageError> {
        self.ensure_user(tg_id).await?;
        let result = sqlx::query(
            "INSERT OR IGNORE INTO profiles (tg_id, account_id, created_at) VALUES (?, ?, ?)",
        )
        .bind(tg_id)
        .bind(account_id)
        .bind(Utc::now())
        .execute(self.pool_manager.pool())
        .await?;

        let linked = result.rows_affected() == 1;
        if linked {
            info!(tg_id, account_id, "Linked account to user");
        }
        Ok(linked)
    }

    pub async fn get_profile(&self, tg_id: i64) -> Result<Option<ProfileRecord>, StorageError> {
        let profile = sqlx::query_as::<_, ProfileRecord>("SELECT * FROM profiles WHERE tg_id = ?")
            .bind(tg_id)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        Ok(profile)
    }

    pub async fn linked_account(&self, tg_id: i64) -> Result<Option<i64>, StorageError> {
        Ok(self.get_profile(tg_id).await?.map(|p| p.account_id))
    }

    /// Removes the link. Returns false when the user had none.
    pub async fn unlink_account(&self, tg_id: i64) -> Result<bool, StorageError> {
        self.ensure_user(tg_id).await?;
        let result = sqlx::query("DELETE FROM profiles WHERE tg_id = ?")
            .bind(tg_id)
            .execute(self.pool_manager.pool())
            .await?;
        let removed = result.rows_affected() > 0;
        info!(tg_id, removed, "Unlinked account");
        Ok(removed)
    }
}
