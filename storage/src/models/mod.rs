//! Persistence models for the `users` and `profiles` tables.

mod profile_record;
mod user_record;
mod user_stats;

pub use profile_record::ProfileRecord;
pub use user_record::UserRecord;
pub use user_stats::UserStats;
