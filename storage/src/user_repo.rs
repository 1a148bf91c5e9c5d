//! User repository: registration, language, request counters and statistics.
//!
//! Uses SqlitePoolManager and the models (UserRecord, UserStats).

use crate::error::StorageError;
use crate::models::{UserRecord, UserStats};
use crate::schema::create_tables;
use crate::sqlite_pool::SqlitePoolManager;
use chrono::Utc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct UserRepository {
    pool_manager: SqlitePoolManager,
}

impl UserRepository {
    /// Opens (or creates) the database at `database_url` and ensures the schema exists.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        Self::with_pool(pool_manager).await
    }

    /// Builds a repository on an existing pool (shared with [`crate::ProfileRepository`]).
    pub async fn with_pool(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        create_tables(pool_manager.pool()).await?;
        Ok(Self { pool_manager })
    }

    /// Inserts the user if no row with this `tg_id` exists. Returns true when a row was created.
    pub async fn register_user(&self, tg_id: i64, name: &str) -> Result<bool, StorageError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO users (tg_id, name, language, number_of_requests, created_at, updated_at)
            VALUES (?, ?, NULL, 0, ?, ?)
            "#,
        )
        .bind(tg_id)
        .bind(name)
        .bind(now)
        .bind(now)
        .execute(self.pool_manager.pool())
        .await?;

        let created = result.rows_affected() == 1;
        if created {
            info!(tg_id, name, "Registered new user");
        }
        Ok(created)
    }

    pub async fn get_user(&self, tg_id: i64) -> Result<Option<UserRecord>, StorageError> {
        let user = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE tg_id = ?")
            .bind(tg_id)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        Ok(user)
    }

    /// All users, most active first.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        let users = sqlx::query_as::<_, UserRecord>(
            "SELECT * FROM users ORDER BY number_of_requests DESC, id ASC",
        )
        .fetch_all(self.pool_manager.pool())
        .await?;
        info!("Retrieved {} users", users.len());
        Ok(users)
    }

    /// Telegram ids of every registered user, in registration order.
    pub async fn user_ids(&self) -> Result<Vec<i64>, StorageError> {
        let rows: Vec<(i64,)> = sqlx::query_as("SELECT tg_id FROM users ORDER BY id ASC")
            .fetch_all(self.pool_manager.pool())
            .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    pub async fn save_language(&self, tg_id: i64, language: &str) -> Result<(), StorageError> {
        let result = sqlx::query("UPDATE users SET language = ?, updated_at = ? WHERE tg_id = ?")
            .bind(language)
            .bind(Utc::now())
            .bind(tg_id)
            .execute(self.pool_manager.pool())
            .await?;

        if result.rows_affected() == 0 {
            warn!(tg_id, "save_language for unknown user");
            return Err(StorageError::NotFound(format!("user {}", tg_id)));
        }
        info!(tg_id, language, "Saved user language");
        Ok(())
    }

    /// Stored language code; `None` for unknown users or users who never picked one.
    pub async fn language(&self, tg_id: i64) -> Result<Option<String>, StorageError> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT language FROM users WHERE tg_id = ?")
                .bind(tg_id)
                .fetch_optional(self.pool_manager.pool())
                .await?;
        Ok(row.and_then(|r| r.0).filter(|l| !l.is_empty()))
    }

    pub async fn increment_requests(&self, tg_id: i64) -> Result<(), StorageError> {
        let result = sqlx::query(
            "UPDATE users SET number_of_requests = number_of_requests + 1, updated_at = ? WHERE tg_id = ?",
        )
        .bind(Utc::now())
        .bind(tg_id)
        .execute(self.pool_manager.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("user {}", tg_id)));
        }
        Ok(())
    }

    pub async fn stats(&self) -> Result<UserStats, StorageError> {
        let pool = self.pool_manager.pool();

        let totals: (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(number_of_requests), 0) FROM users")
                .fetch_one(pool)
                .await?;

        let linked: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles")
            .fetch_one(pool)
            .await?;

        Ok(UserStats {
            total_users: totals.0,
            total_requests: totals.1,
            linked_profiles: linked.0,
        })
    }
}
