//! GetUserHandler - Query handler for a single user.

use std::sync::Arc;

use crate::application::OutreachError;
use crate::domain::foundation::UserId;
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Message returned when the user does not exist.
pub const USER_NOT_FOUND: &str = "User not found";

/// Query for a user by id.
#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub user_id: UserId,
}

pub struct GetUserHandler {
    users: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetUserQuery) -> Result<User, OutreachError> {
        self.users
            .find_by_id(query.user_id)
            .await?
            .ok_or_else(|| OutreachError::not_found(USER_NOT_FOUND))
    }
}
