//! Registers every sender in the users table.

use async_trait::async_trait;
use storage::UserRepository;
use tracing::{info, instrument, warn};

use crate::core::{Handler, Message, Result};

/// Inserts the sender in before() if unknown; always continues, even when storage fails.
#[derive(Clone)]
pub struct RegistrationHandler {
    users: UserRepository,
}

impl RegistrationHandler {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }
}

#[async_trait]
impl Handler for RegistrationHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let user = &message.user;
        match self.users.register_user(user.id, &user.display_name()).await {
            Ok(true) => info!(user_id = user.id, "step: new user registered"),
            Ok(false) => {}
            Err(e) => warn!(user_id = user.id, error = %e, "Failed to register user"),
        }
        Ok(true)
    }
}
