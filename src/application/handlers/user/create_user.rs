//! CreateUserHandler - Command handler for registering a recruiter.

use std::sync::Arc;

use crate::application::OutreachError;
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

/// Command to register a user.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
}

/// Handler for registering users. Emails are unique, compared lowercased.
pub struct CreateUserHandler {
    users: Arc<dyn UserRepository>,
}

impl CreateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: CreateUserCommand) -> Result<User, OutreachError> {
        let new_user = NewUser::new(&cmd.name, &cmd.email)?;

        if self.users.find_by_email(new_user.email()).await?.is_some() {
            return Err(OutreachError::client_input(format!(
                "Email already registered: {}",
                new_user.email()
            )));
        }

        let user = self.users.create(&new_user).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;

    fn handler() -> CreateUserHandler {
        CreateUserHandler::new(Arc::new(InMemoryStore::new()))
    }

    fn cmd(name: &str, email: &str) -> CreateUserCommand {
        CreateUserCommand {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn registers_user_with_normalized_email() {
        let user = handler()
            .handle(cmd("  Grace Hopper ", "Grace@Example.COM"))
            .await
            .unwrap();

        assert_eq!(user.name, "Grace Hopper");
        assert_eq!(user.email, "grace@example.com");
    }

    #[tokio::test]
    async fn second_registration_with_same_email_is_rejected() {
        let handler = handler();
        handler.handle(cmd("Grace", "grace@example.com")).await.unwrap();

        let err = handler
            .handle(cmd("Impostor", "GRACE@example.com"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            OutreachError::ClientInput("Email already registered: grace@example.com".to_string())
        );
    }

    #[tokio::test]
    async fn malformed_email_is_client_input() {
        let err = handler().handle(cmd("Grace", "not-an-email")).await.unwrap_err();
        assert!(matches!(err, OutreachError::ClientInput(_)));
    }
}
