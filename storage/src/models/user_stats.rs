//! Aggregate statistics for users.
//!
//! Returned by UserRepository::stats.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_users: i64,
    pub total_requests: i64,
    pub linked_profiles: i64,
}
