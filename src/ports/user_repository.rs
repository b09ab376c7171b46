//! User repository port.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{NewUser, User};
use async_trait::async_trait;

/// Repository port for recruiter accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with its assigned ID.
    ///
    /// # Errors
    ///
    /// - `DuplicateEmail` if the email is already registered
    /// - `DatabaseError` on persistence failure
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Find a user by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by (lowercased) email. Returns `None` if not found.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
