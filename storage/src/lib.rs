//! Storage crate: user and linked-profile persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – UserRecord, ProfileRecord, UserStats
//! - [`user_repo`] – UserRepository (SQLite)
//! - [`profile_repo`] – ProfileRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod profile_repo;
mod schema;
mod sqlite_pool;
mod user_repo;


pub use error::StorageError;
pub use models::{ProfileRecord, UserRecord, UserStats};
pub use profile_repo::ProfileRepository;
pub use sqlite_pool::SqlitePoolManager;
pub use user_repo::UserRepository;
